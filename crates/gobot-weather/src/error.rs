//! Error types for gobot-weather

use thiserror::Error;

/// gobot-weather error type
#[derive(Error, Debug)]
pub enum WeatherError {
    #[error("Weather API key not set")]
    ApiKeyNotSet,

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Weather API error: {0}")]
    Api(String),

    #[error("Response parse error: {0}")]
    Parse(String),
}

/// Result type alias
pub type Result<T> = std::result::Result<T, WeatherError>;
