//! OpenWeatherMap current-weather client
//!
//! Queries current conditions by free-text location name, metric units,
//! English locale.

use reqwest::Client;
use serde::Deserialize;
use tracing::debug;

use crate::error::{Result, WeatherError};

/// Weather API client
#[derive(Debug, Clone)]
pub struct WeatherClient {
    client: Client,
    base_url: String,
    api_key: String,
}

/// Current-conditions response
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CurrentWeather {
    /// Condition records; empty when the location could not be resolved
    #[serde(default)]
    pub weather: Vec<Condition>,
    #[serde(default)]
    pub main: Main,
    #[serde(default)]
    pub wind: Wind,
    #[serde(default)]
    pub sys: Sys,
}

/// A single condition record
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Condition {
    #[serde(default)]
    pub main: String,
    #[serde(default)]
    pub description: String,
}

/// Temperature and humidity block
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Main {
    #[serde(default)]
    pub temp: f64,
    #[serde(default)]
    pub temp_min: f64,
    #[serde(default)]
    pub temp_max: f64,
    #[serde(default)]
    pub humidity: i64,
}

/// Wind block
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Wind {
    #[serde(default)]
    pub speed: f64,
    #[serde(default)]
    pub deg: f64,
}

/// Resolving-system block
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Sys {
    #[serde(default)]
    pub country: String,
}

impl WeatherClient {
    /// Create a new weather client
    pub fn new(base_url: &str, api_key: &str) -> Result<Self> {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(30))
            .build()?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key: api_key.to_string(),
        })
    }

    /// Fetch current conditions for a location by name
    pub async fn current_by_name(&self, location: &str) -> Result<CurrentWeather> {
        if self.api_key.is_empty() {
            return Err(WeatherError::ApiKeyNotSet);
        }

        let url = format!("{}/data/2.5/weather", self.base_url);

        debug!("Fetching current weather for {}", location);

        let response = self
            .client
            .get(&url)
            .query(&[
                ("q", location),
                ("units", "metric"),
                ("lang", "en"),
                ("appid", &self.api_key),
            ])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();
            return Err(WeatherError::Api(format!("{}: {}", status, error_text)));
        }

        let weather: CurrentWeather = response
            .json()
            .await
            .map_err(|e| WeatherError::Parse(e.to_string()))?;

        Ok(weather)
    }

    /// Format a weather report line for a queried location name
    ///
    /// Returns `None` when the response carries no condition records.
    pub fn format_report(location: &str, w: &CurrentWeather) -> Option<String> {
        let condition = w.weather.first()?;
        Some(format!(
            "Location ({}): {}, Temp(high): {:.2}, Temp(low): {:.2}, Temp(current): {:.2}, humidity: {}, conditions: {}, wind speed (deg): {:.2} ({:.2})",
            w.sys.country,
            location,
            w.main.temp_max,
            w.main.temp_min,
            w.main.temp,
            w.main.humidity,
            condition.description,
            w.wind.speed,
            w.wind.deg,
        ))
    }
}
