//! Error types for gobot-core

use thiserror::Error;

/// Main error type for gobot-core
#[derive(Error, Debug)]
pub enum Error {
    #[error("Configuration error: {0}")]
    Config(String),
}

/// Result type alias for gobot-core
pub type Result<T> = std::result::Result<T, Error>;
