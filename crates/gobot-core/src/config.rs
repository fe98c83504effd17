//! Configuration management
//!
//! Settings are resolved in the following order:
//! 1. Environment variables
//! 2. `gobot.toml` configuration file
//! 3. Default values

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Messaging gateway configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GatewayConfig {
    /// Base URL of the WhatsApp gateway REST API
    #[serde(default = "default_gateway_url")]
    pub base_url: String,

    /// Polling interval for inbound messages, in seconds
    #[serde(default = "default_poll_interval")]
    pub poll_interval_secs: u64,

    /// Bounded wait for establishing the gateway connection, in seconds
    #[serde(default = "default_connect_timeout")]
    pub connect_timeout_secs: u64,

    /// Path of the persisted session file
    #[serde(default = "default_session_path")]
    pub session_path: PathBuf,
}

impl Default for GatewayConfig {
    fn default() -> Self {
        Self {
            base_url: default_gateway_url(),
            poll_interval_secs: default_poll_interval(),
            connect_timeout_secs: default_connect_timeout(),
            session_path: default_session_path(),
        }
    }
}

/// Weather provider configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeatherConfig {
    /// OpenWeatherMap API key
    #[serde(default)]
    pub api_key: String,

    /// Base URL of the weather API
    #[serde(default = "default_weather_url")]
    pub base_url: String,
}

impl Default for WeatherConfig {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            base_url: default_weather_url(),
        }
    }
}

/// Translation provider configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TranslateConfig {
    /// Base URL of the translation API
    #[serde(default = "default_translate_url")]
    pub base_url: String,
}

impl Default for TranslateConfig {
    fn default() -> Self {
        Self {
            base_url: default_translate_url(),
        }
    }
}

/// Main configuration for gobot
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Trigger substring the bot responds to
    #[serde(default = "default_trigger")]
    pub trigger: String,

    /// Gateway configuration
    #[serde(default)]
    pub gateway: GatewayConfig,

    /// Weather provider configuration
    #[serde(default)]
    pub weather: WeatherConfig,

    /// Translation provider configuration
    #[serde(default)]
    pub translate: TranslateConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            trigger: default_trigger(),
            gateway: GatewayConfig::default(),
            weather: WeatherConfig::default(),
            translate: TranslateConfig::default(),
        }
    }
}

fn default_trigger() -> String {
    "@gobot".to_string()
}

fn default_gateway_url() -> String {
    "http://localhost:8090".to_string()
}

fn default_poll_interval() -> u64 {
    2
}

fn default_connect_timeout() -> u64 {
    5
}

fn default_session_path() -> PathBuf {
    std::env::temp_dir().join("gobot-session.json")
}

fn default_weather_url() -> String {
    "https://api.openweathermap.org".to_string()
}

fn default_translate_url() -> String {
    "https://translate.googleapis.com".to_string()
}

impl Config {
    /// Load configuration from the default locations
    ///
    /// Tries `./gobot.toml` first; when absent, falls back to environment
    /// variables alone.
    pub fn load() -> Result<Self> {
        if Path::new("gobot.toml").exists() {
            return Self::from_toml_file("gobot.toml");
        }
        Self::from_env()
    }

    /// Load configuration from a TOML file, then apply environment overrides
    pub fn from_toml_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| Error::Config(format!("Failed to read config file: {}", e)))?;

        let mut config: Config = toml::from_str(&content)
            .map_err(|e| Error::Config(format!("Failed to parse TOML: {}", e)))?;

        config.apply_env_overrides();
        Ok(config)
    }

    /// Load configuration from environment variables only
    pub fn from_env() -> Result<Self> {
        let mut config = Config::default();
        config.apply_env_overrides();
        Ok(config)
    }

    fn apply_env_overrides(&mut self) {
        if let Ok(v) = std::env::var("GOBOT_TRIGGER") {
            self.trigger = v;
        }
        if let Ok(v) = std::env::var("GOBOT_GATEWAY_URL") {
            self.gateway.base_url = v;
        }
        if let Ok(v) = std::env::var("GOBOT_POLL_INTERVAL") {
            if let Ok(secs) = v.parse() {
                self.gateway.poll_interval_secs = secs;
            }
        }
        if let Ok(v) = std::env::var("GOBOT_SESSION_PATH") {
            self.gateway.session_path = PathBuf::from(v);
        }
        if let Ok(v) = std::env::var("WEATHER_API_KEY") {
            self.weather.api_key = v;
        }
        if let Ok(v) = std::env::var("WEATHER_API_URL") {
            self.weather.base_url = v;
        }
        if let Ok(v) = std::env::var("TRANSLATE_API_URL") {
            self.translate.base_url = v;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.trigger, "@gobot");
        assert_eq!(config.gateway.poll_interval_secs, 2);
        assert_eq!(config.gateway.connect_timeout_secs, 5);
        assert!(config.weather.api_key.is_empty());
        assert!(config
            .gateway
            .session_path
            .ends_with("gobot-session.json"));
    }

    #[test]
    fn test_from_toml() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("gobot.toml");
        std::fs::write(
            &path,
            r#"
trigger = "@wbot"

[gateway]
base_url = "http://gateway:9000"
poll_interval_secs = 7

[weather]
api_key = "abc123"
"#,
        )
        .unwrap();

        let config = Config::from_toml_file(&path).unwrap();
        assert_eq!(config.trigger, "@wbot");
        assert_eq!(config.gateway.base_url, "http://gateway:9000");
        assert_eq!(config.gateway.poll_interval_secs, 7);
        assert_eq!(config.weather.api_key, "abc123");
        // Untouched sections keep their defaults
        assert_eq!(config.translate.base_url, "https://translate.googleapis.com");
    }

    #[test]
    fn test_bad_toml_is_config_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("gobot.toml");
        std::fs::write(&path, "trigger = [not toml").unwrap();

        let err = Config::from_toml_file(&path).unwrap_err();
        assert!(matches!(err, Error::Config(_)));
    }
}
