use fintrack_config::ConfigError;
use fintrack_core::CoreError;
use thiserror::Error;

/// Error type surfaced by the front end.
#[derive(Debug, Error)]
pub enum FintrackError {
    #[error(transparent)]
    Core(#[from] CoreError),
    #[error("Config error: {0}")]
    Config(#[from] ConfigError),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Invalid input: {0}")]
    Input(String),
}

pub type Result<T> = std::result::Result<T, FintrackError>;
