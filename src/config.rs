use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::constants;
use crate::error::{PokedexError, Result};

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    pub server: ServerConfig,
    pub pokeapi: PokeApiConfig,
    pub logging: LoggingConfig,
    pub metrics: MetricsConfig,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub static_dir: PathBuf,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct PokeApiConfig {
    pub base_url: String,
    pub timeout_seconds: u64,
    pub list_limit: u32,
    pub list_offset: u32,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub directory: PathBuf,
    pub file_name: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct MetricsConfig {
    pub enabled: bool,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: constants::DEFAULT_HOST.to_string(),
            port: constants::DEFAULT_PORT,
            static_dir: PathBuf::from(constants::DEFAULT_STATIC_DIR),
        }
    }
}

impl Default for PokeApiConfig {
    fn default() -> Self {
        Self {
            base_url: constants::DEFAULT_POKEAPI_BASE_URL.to_string(),
            timeout_seconds: constants::DEFAULT_TIMEOUT_SECONDS,
            list_limit: constants::DEFAULT_LIST_LIMIT,
            list_offset: constants::DEFAULT_LIST_OFFSET,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            directory: PathBuf::from(constants::DEFAULT_LOG_DIR),
            file_name: constants::DEFAULT_LOG_FILE.to_string(),
        }
    }
}

impl PokeApiConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_seconds)
    }
}

impl Config {
    /// Load configuration: defaults, then the TOML file, then environment
    /// variables. CLI flags are applied by the caller afterwards.
    ///
    /// An explicit `path` must exist. Without one, `POKEDEX_CONFIG` is tried,
    /// then `pokedex.toml` in the working directory if present.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let explicit = path
            .map(Path::to_path_buf)
            .or_else(|| std::env::var_os("POKEDEX_CONFIG").map(PathBuf::from));

        let mut config = match explicit {
            Some(p) => Self::from_file(&p)?,
            None => {
                let fallback = Path::new(constants::DEFAULT_CONFIG_FILE);
                if fallback.exists() {
                    Self::from_file(fallback)?
                } else {
                    Self::default()
                }
            }
        };

        config.apply_env(|key| std::env::var(key).ok())?;
        Ok(config)
    }

    pub fn from_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| {
            PokedexError::Config(format!(
                "Failed to read config file '{}': {}",
                path.display(),
                e
            ))
        })?;
        Self::from_toml(&content)
    }

    pub fn from_toml(content: &str) -> Result<Self> {
        let config: Config = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Override values from environment-style lookups.
    pub fn apply_env<F>(&mut self, lookup: F) -> Result<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(v) = lookup("POKEAPI_BASE_URL") {
            self.pokeapi.base_url = v;
        }
        if let Some(v) = lookup("POKEAPI_TIMEOUT_SECONDS") {
            self.pokeapi.timeout_seconds = parse_env("POKEAPI_TIMEOUT_SECONDS", &v)?;
        }
        if let Some(v) = lookup("POKEDEX_HOST") {
            self.server.host = v;
        }
        if let Some(v) = lookup("POKEDEX_PORT") {
            self.server.port = parse_env("POKEDEX_PORT", &v)?;
        }
        if let Some(v) = lookup("POKEDEX_LOG_DIR") {
            self.logging.directory = PathBuf::from(v);
        }
        if let Some(v) = lookup("POKEDEX_METRICS_ENABLED") {
            self.metrics.enabled = parse_env("POKEDEX_METRICS_ENABLED", &v)?;
        }
        self.validate()
    }

    fn validate(&self) -> Result<()> {
        if self.pokeapi.base_url.trim().is_empty() {
            return Err(PokedexError::Config("pokeapi.base_url must not be empty".into()));
        }
        if self.pokeapi.timeout_seconds == 0 {
            return Err(PokedexError::Config(
                "pokeapi.timeout_seconds must be greater than zero".into(),
            ));
        }
        Ok(())
    }
}

fn parse_env<T>(key: &str, value: &str) -> Result<T>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    value
        .trim()
        .parse()
        .map_err(|e| PokedexError::Config(format!("Invalid value for {}: '{}' ({})", key, value, e)))
}
