/// Defaults shared by the config layer, the views and the CLI

pub const SERVICE_NAME: &str = "pokedex_web";

// Upstream
pub const DEFAULT_POKEAPI_BASE_URL: &str = "https://pokeapi.co/api/v2/";
pub const DEFAULT_TIMEOUT_SECONDS: u64 = 10;
pub const DEFAULT_LIST_LIMIT: u32 = 151;
pub const DEFAULT_LIST_OFFSET: u32 = 0;

// HTTP server
pub const DEFAULT_HOST: &str = "127.0.0.1";
pub const DEFAULT_PORT: u16 = 8000;
pub const DEFAULT_STATIC_DIR: &str = "static";

// Logging
pub const DEFAULT_LOG_DIR: &str = "logs";
pub const DEFAULT_LOG_FILE: &str = "pokedex.log";

// Config file picked up from the working directory when no path is given
pub const DEFAULT_CONFIG_FILE: &str = "pokedex.toml";

// Page titles
pub const LIST_TITLE: &str = "PokéDex List";
pub const NOT_FOUND_TITLE: &str = "Pokémon Not Found";
pub const ERROR_TITLE: &str = "Error";

/// User agent sent to PokeAPI
pub fn user_agent() -> String {
    format!("{}/{}", SERVICE_NAME, env!("CARGO_PKG_VERSION"))
}
