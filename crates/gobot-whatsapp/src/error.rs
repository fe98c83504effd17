//! Error types for gobot-whatsapp

use thiserror::Error;

/// gobot-whatsapp error type
#[derive(Error, Debug)]
pub enum WhatsAppError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Gateway API error: {0}")]
    Api(String),

    #[error("Pairing error: {0}")]
    Pairing(String),

    #[error("Session error: {0}")]
    Session(String),

    #[error("Response parse error: {0}")]
    Parse(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias
pub type Result<T> = std::result::Result<T, WhatsAppError>;
