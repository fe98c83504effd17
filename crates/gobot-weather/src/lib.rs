//! gobot-weather: OpenWeatherMap current-conditions client for gobot

pub mod client;
pub mod error;

pub use client::{CurrentWeather, WeatherClient};
pub use error::{Result, WeatherError};
