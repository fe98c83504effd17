//! Command execution
//!
//! Maps a parsed command to a reply string by delegating to the weather and
//! translation providers. Never fails outwardly: every provider error is
//! downgraded to reply text.

use gobot_translate::TranslateClient;
use gobot_weather::WeatherClient;
use tracing::warn;

use crate::command::{Command, LOCATION_NOT_FOUND_REPLY};

/// Command dispatcher
#[derive(Debug, Clone)]
pub struct Dispatcher {
    weather: WeatherClient,
    translate: TranslateClient,
    trigger: String,
}

impl Dispatcher {
    /// Create a new dispatcher
    pub fn new(weather: WeatherClient, translate: TranslateClient, trigger: &str) -> Self {
        Self {
            weather,
            translate,
            trigger: trigger.to_string(),
        }
    }

    /// Turn raw mention text into a reply
    pub async fn dispatch(&self, raw: &str) -> String {
        let command = match Command::parse(raw, &self.trigger) {
            Ok(command) => command,
            Err(reply) => return reply.to_string(),
        };

        match command {
            Command::Weather(location) => self.weather_reply(&location).await,
            Command::TranslateToEn(text) => self.translate_reply(&text, "en", "zh-CN").await,
            Command::TranslateToZh(text) => self.translate_reply(&text, "zh-CN", "en").await,
            Command::Unsupported(keyword) => format!("Command {} is not supported.", keyword),
        }
    }

    async fn weather_reply(&self, location: &str) -> String {
        match self.weather.current_by_name(location).await {
            Ok(weather) => WeatherClient::format_report(location, &weather)
                .unwrap_or_else(|| LOCATION_NOT_FOUND_REPLY.to_string()),
            Err(e) => {
                warn!("Weather lookup for {} failed: {}", location, e);
                LOCATION_NOT_FOUND_REPLY.to_string()
            }
        }
    }

    async fn translate_reply(&self, text: &str, target: &str, source: &str) -> String {
        // Translation failures are swallowed: the (possibly empty) result is
        // the reply.
        match self.translate.translate(text, target, source).await {
            Ok(translated) => translated,
            Err(e) => {
                warn!("Translation {} -> {} failed: {}", source, target, e);
                String::new()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::command::{NEED_MORE_INFO_REPLY, USAGE_REPLY};
    use wiremock::matchers::{method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn dispatcher_with(server: &MockServer) -> Dispatcher {
        let weather = WeatherClient::new(&server.uri(), "test-key").unwrap();
        let translate = TranslateClient::new(&server.uri()).unwrap();
        Dispatcher::new(weather, translate, "@gobot")
    }

    #[tokio::test]
    async fn test_weather_reply_exact() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/data/2.5/weather"))
            .and(query_param("q", "London"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "weather": [{"main": "Clear", "description": "clear sky"}],
                "main": {"temp": 18.5, "temp_min": 15.0, "temp_max": 20.0, "humidity": 60},
                "wind": {"speed": 5.0, "deg": 10.0},
                "sys": {"country": "GB"}
            })))
            .mount(&server)
            .await;

        let dispatcher = dispatcher_with(&server);
        let reply = dispatcher.dispatch("@gobot weather, London").await;
        assert_eq!(
            reply,
            "Location (GB): London, Temp(high): 20.00, Temp(low): 15.00, Temp(current): 18.50, humidity: 60, conditions: clear sky, wind speed (deg): 5.00 (10.00)"
        );
    }

    #[tokio::test]
    async fn test_weather_location_not_found() {
        let server = MockServer::start().await;

        // Some deployments answer 200 with an empty record list
        Mock::given(method("GET"))
            .and(path("/data/2.5/weather"))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(serde_json::json!({"weather": []})),
            )
            .mount(&server)
            .await;

        let dispatcher = dispatcher_with(&server);
        let reply = dispatcher.dispatch("@gobot weather, Atlantis").await;
        assert_eq!(reply, LOCATION_NOT_FOUND_REPLY);
    }

    #[tokio::test]
    async fn test_weather_provider_error_is_not_found() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/data/2.5/weather"))
            .respond_with(ResponseTemplate::new(404).set_body_string("city not found"))
            .mount(&server)
            .await;

        let dispatcher = dispatcher_with(&server);
        let reply = dispatcher.dispatch("@gobot weather, Atlantis").await;
        assert_eq!(reply, LOCATION_NOT_FOUND_REPLY);
    }

    #[tokio::test]
    async fn test_trans_zh_locale_pairing() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/translate_a/single"))
            .and(query_param("tl", "zh-CN"))
            .and(query_param("sl", "en"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([
                [["你好", "hello", null, null]],
                null,
                "en"
            ])))
            .mount(&server)
            .await;

        let dispatcher = dispatcher_with(&server);
        let reply = dispatcher.dispatch("@gobot trans-zh, hello").await;
        assert_eq!(reply, "你好");
    }

    #[tokio::test]
    async fn test_trans_en_requests_chinese_source() {
        let server = MockServer::start().await;

        // trans-en keeps the original pairing: target en, source zh-CN
        Mock::given(method("GET"))
            .and(path("/translate_a/single"))
            .and(query_param("tl", "en"))
            .and(query_param("sl", "zh-CN"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([
                [["hello", "你好", null, null]],
                null,
                "zh-CN"
            ])))
            .mount(&server)
            .await;

        let dispatcher = dispatcher_with(&server);
        let reply = dispatcher.dispatch("@gobot trans-en, 你好").await;
        assert_eq!(reply, "hello");
    }

    #[tokio::test]
    async fn test_translation_failure_swallowed() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/translate_a/single"))
            .respond_with(ResponseTemplate::new(500).set_body_string("boom"))
            .mount(&server)
            .await;

        let dispatcher = dispatcher_with(&server);
        let reply = dispatcher.dispatch("@gobot trans-en, 你好").await;
        assert_eq!(reply, "");
    }

    #[tokio::test]
    async fn test_unsupported_command_verbatim() {
        let server = MockServer::start().await;
        let dispatcher = dispatcher_with(&server);

        let reply = dispatcher.dispatch("@gobot forecast, London").await;
        assert_eq!(reply, "Command forecast is not supported.");
    }

    #[tokio::test]
    async fn test_malformed_input_fixed_replies() {
        let server = MockServer::start().await;
        let dispatcher = dispatcher_with(&server);

        assert_eq!(dispatcher.dispatch("@gobot weather").await, USAGE_REPLY);
        assert_eq!(
            dispatcher.dispatch("@gobot weather,   ").await,
            NEED_MORE_INFO_REPLY
        );
    }
}
