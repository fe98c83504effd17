//! gobot-core: shared configuration and error types for gobot

pub mod config;
pub mod error;

pub use config::{Config, GatewayConfig, TranslateConfig, WeatherConfig};
pub use error::{Error, Result};
