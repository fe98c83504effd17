//! Error types for gobot-translate

use thiserror::Error;

/// gobot-translate error type
#[derive(Error, Debug)]
pub enum TranslateError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Translation API error: {0}")]
    Api(String),

    #[error("Response parse error: {0}")]
    Parse(String),
}

/// Result type alias
pub type Result<T> = std::result::Result<T, TranslateError>;
