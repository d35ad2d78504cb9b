//! Error types for locale resolution

use thiserror::Error;

/// Errors that can occur when resolving a locale strictly
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum I18nError {
    /// The code does not name a supported locale
    #[error("Unsupported language code: {0}")]
    UnsupportedLocale(String),
}

/// Result type for i18n operations
pub type I18nResult<T> = Result<T, I18nError>;
