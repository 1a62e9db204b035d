
use thiserror::Error;

#[derive(Error, Debug)]
pub enum GalaxyError {
    #[error("Config error: {0}")]
    Config(String),
    #[error("No route matches fragment '{fragment}'")]
    RouteNotMatched { fragment: String },
    #[error("Unknown {kind} '{id}'")]
    EntityNotFound { kind: &'static str, id: String },
    #[error("Lock poisoned: {0}")]
    Lock(String),
}

pub type Result<T> = std::result::Result<T, GalaxyError>;

// Helper conversions
impl From<config::ConfigError> for GalaxyError {
    fn from(e: config::ConfigError) -> Self { Self::Config(e.to_string()) }
}
