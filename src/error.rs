use thiserror::Error;

#[derive(Error, Debug)]
pub enum PokedexError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Request timed out: {url}")]
    Timeout { url: String },

    #[error("Pokémon '{0}' not found")]
    NotFound(String),

    #[error("Upstream returned HTTP {status} for {url}")]
    UpstreamStatus { status: u16, url: String },

    #[error("JSON deserialization failed: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML deserialization failed: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Missing required field: {0}")]
    MissingField(String),

    #[error("Template rendering failed: {0}")]
    Template(#[from] askama::Error),
}

impl PokedexError {
    /// Short label used for log fields and metric labels.
    pub fn kind(&self) -> &'static str {
        match self {
            PokedexError::Http(_) => "transport",
            PokedexError::Timeout { .. } => "timeout",
            PokedexError::NotFound(_) => "not_found",
            PokedexError::UpstreamStatus { .. } => "http_status",
            PokedexError::Json(_) => "json",
            PokedexError::Toml(_) => "toml",
            PokedexError::Io(_) => "io",
            PokedexError::Config(_) => "config",
            PokedexError::MissingField(_) => "missing_field",
            PokedexError::Template(_) => "template",
        }
    }
}

pub type Result<T> = std::result::Result<T, PokedexError>;
