//! Error types and utilities for Steam Stats.

use thiserror::Error;

/// Result type alias for Steam Stats operations.
pub type Result<T> = std::result::Result<T, StatsError>;

/// Main error type for Steam Stats operations.
///
/// Row-level ingest problems never surface here: malformed numbers and dates
/// degrade to defaults inside the parser. These variants cover logging setup,
/// the one-shot dataset load and rendering.
#[derive(Error, Debug)]
pub enum StatsError {
    /// Configuration related errors
    #[error("Configuration error: {message}")]
    Config {
        /// Human readable description.
        message: String,
        /// Underlying cause, if any.
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// I/O related errors
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The dataset could not be loaded
    #[error("Failed to load dataset '{path}': {message}")]
    Load {
        /// Path of the dataset that failed to load.
        path: String,
        /// Human readable description.
        message: String,
        /// Underlying cause, if any.
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Chart rendering errors
    #[error("Render error: {message}")]
    Render {
        /// Human readable description.
        message: String,
        /// Underlying cause, if any.
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },
}

impl StatsError {
    /// Create a new configuration error
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config {
            message: msg.into(),
            source: None,
        }
    }

    /// Create a new configuration error with source
    pub fn config_with_source(
        msg: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self::Config {
            message: msg.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Create a new load error with source
    pub fn load_with_source(
        path: impl Into<String>,
        msg: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self::Load {
            path: path.into(),
            message: msg.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Create a new render error with source
    pub fn render_with_source(
        msg: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self::Render {
            message: msg.into(),
            source: Some(Box::new(source)),
        }
    }
}

#[cfg(feature = "plotters")]
/// Convert from plotters drawing errors to `StatsError`
impl<T> From<plotters::drawing::DrawingAreaErrorKind<T>> for StatsError
where
    T: std::error::Error + Send + Sync + 'static,
{
    fn from(err: plotters::drawing::DrawingAreaErrorKind<T>) -> Self {
        Self::render_with_source("Chart rendering failed", err)
    }
}
