//! Application-wide error types using thiserror.

use steamstats_common::StatsError;
use steamstats_config::ConfigError;

/// Main application error type.
#[derive(thiserror::Error, Debug)]
pub enum AppError {
    /// Configuration could not be loaded or failed validation.
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Error from the pipeline or renderers.
    #[error(transparent)]
    Stats(#[from] StatsError),

    /// Output could not be serialised.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for the application.
pub type AppResult<T> = Result<T, AppError>;
