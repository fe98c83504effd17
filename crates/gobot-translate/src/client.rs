//! Translation API client
//!
//! The gtx endpoint returns a nested JSON array; the translated text is the
//! first element of each segment under the first top-level array.

use reqwest::Client;
use serde_json::Value;
use tracing::debug;

use crate::error::{Result, TranslateError};

/// Translation API client
#[derive(Debug, Clone)]
pub struct TranslateClient {
    client: Client,
    base_url: String,
}

impl TranslateClient {
    /// Create a new translation client
    pub fn new(base_url: &str) -> Result<Self> {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(30))
            .build()?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Translate `text` from `source` into `target` locale
    pub async fn translate(&self, text: &str, target: &str, source: &str) -> Result<String> {
        let url = format!("{}/translate_a/single", self.base_url);

        debug!("Translating {} -> {}", source, target);

        let response = self
            .client
            .get(&url)
            .query(&[
                ("client", "gtx"),
                ("sl", source),
                ("tl", target),
                ("dt", "t"),
                ("q", text),
            ])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();
            return Err(TranslateError::Api(format!("{}: {}", status, error_text)));
        }

        let body: Value = response
            .json()
            .await
            .map_err(|e| TranslateError::Parse(e.to_string()))?;

        Self::extract_translation(&body)
    }

    /// Pull the translated segments out of the gtx response body
    fn extract_translation(body: &Value) -> Result<String> {
        let segments = body
            .get(0)
            .and_then(Value::as_array)
            .ok_or_else(|| TranslateError::Parse("missing segment array".to_string()))?;

        let mut translated = String::new();
        for segment in segments {
            if let Some(text) = segment.get(0).and_then(Value::as_str) {
                translated.push_str(text);
            }
        }

        Ok(translated)
    }
}
