//! WhatsApp gateway REST API client
//!
//! Communicates with a whatsapp-gateway REST server exposing pairing,
//! session restore, polling receive, send, admin ping and disconnect.

use std::time::Duration;

use reqwest::Client;
use tracing::{debug, error, info};

use crate::error::{Result, WhatsAppError};
use crate::types::*;

/// Upper bound on the blocking wait for the user to scan the pairing code.
const PAIRING_WAIT_SECS: u64 = 300;

/// WhatsApp gateway API client
#[derive(Debug, Clone)]
pub struct WhatsAppApiClient {
    client: Client,
    base_url: String,
}

impl WhatsAppApiClient {
    /// Create a new gateway API client
    ///
    /// `connect_timeout_secs` bounds connection establishment; requests get a
    /// 30 second overall timeout.
    pub fn new(base_url: &str, connect_timeout_secs: u64) -> Result<Self> {
        let client = Client::builder()
            .connect_timeout(Duration::from_secs(connect_timeout_secs))
            .timeout(Duration::from_secs(30))
            .build()
            .map_err(WhatsAppError::Http)?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Check whether the gateway is reachable
    pub async fn health_check(&self) -> Result<bool> {
        let url = format!("{}/v1/health", self.base_url);

        match self.client.get(&url).send().await {
            Ok(response) => Ok(response.status().is_success()),
            Err(e) => {
                debug!("Health check failed: {}", e);
                Ok(false)
            }
        }
    }

    /// Restore a previously issued session
    ///
    /// The gateway may rotate the token; the returned session supersedes the
    /// one passed in.
    pub async fn restore_session(&self, session: &Session) -> Result<Session> {
        let url = format!("{}/v1/session/restore", self.base_url);

        let response = self
            .client
            .post(&url)
            .json(session)
            .send()
            .await
            .map_err(WhatsAppError::Http)?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();
            return Err(WhatsAppError::Session(format!(
                "restoring failed: {}: {}",
                status, error_text
            )));
        }

        let renewed: Session = response
            .json()
            .await
            .map_err(|e| WhatsAppError::Parse(e.to_string()))?;

        info!("Session restored for {}", renewed.wid);
        Ok(renewed)
    }

    /// Begin a fresh pairing flow and return the code to display
    pub async fn start_pairing(&self) -> Result<PairingCode> {
        let url = format!("{}/v1/session/pair", self.base_url);

        let response = self
            .client
            .post(&url)
            .send()
            .await
            .map_err(WhatsAppError::Http)?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();
            return Err(WhatsAppError::Pairing(format!("{}: {}", status, error_text)));
        }

        response
            .json()
            .await
            .map_err(|e| WhatsAppError::Parse(e.to_string()))
    }

    /// Block until the displayed pairing code has been scanned
    pub async fn wait_for_pairing(&self) -> Result<Session> {
        let url = format!("{}/v1/session/pair/wait", self.base_url);

        // Long poll; the default request timeout is far too short for a
        // human to pick up their phone.
        let response = self
            .client
            .get(&url)
            .timeout(Duration::from_secs(PAIRING_WAIT_SECS))
            .send()
            .await
            .map_err(WhatsAppError::Http)?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();
            return Err(WhatsAppError::Pairing(format!("{}: {}", status, error_text)));
        }

        let session: Session = response
            .json()
            .await
            .map_err(|e| WhatsAppError::Parse(e.to_string()))?;

        info!("Paired as {}", session.wid);
        Ok(session)
    }

    /// Receive pending inbound messages
    pub async fn receive_messages(&self) -> Result<Vec<InboundMessage>> {
        let url = format!("{}/v1/messages", self.base_url);

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(WhatsAppError::Http)?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();
            error!("Receive messages failed: {} - {}", status, error_text);
            return Err(WhatsAppError::Api(format!("{}: {}", status, error_text)));
        }

        let messages: Vec<InboundMessage> = response
            .json()
            .await
            .map_err(|e| WhatsAppError::Parse(e.to_string()))?;

        debug!("Received {} messages", messages.len());
        Ok(messages)
    }

    /// Send a text message on a conversation, optionally quoting context
    pub async fn send_message(
        &self,
        conversation: &str,
        text: &str,
        quoted_text: Option<&str>,
    ) -> Result<SendResponse> {
        let url = format!("{}/v1/messages", self.base_url);

        let body = SendMessage {
            conversation: conversation.to_string(),
            text: text.to_string(),
            quoted_text: quoted_text.map(str::to_string),
        };

        debug!("Sending message to {}", conversation);

        let response = self
            .client
            .post(&url)
            .json(&body)
            .send()
            .await
            .map_err(WhatsAppError::Http)?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();
            error!("Send message failed: {} - {}", status, error_text);
            return Err(WhatsAppError::Api(format!("{}: {}", status, error_text)));
        }

        response
            .json()
            .await
            .map_err(|e| WhatsAppError::Parse(e.to_string()))
    }

    /// Verify connectivity with the paired phone
    pub async fn admin_test(&self) -> Result<bool> {
        let url = format!("{}/v1/admin/ping", self.base_url);

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(WhatsAppError::Http)?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();
            return Err(WhatsAppError::Api(format!("{}: {}", status, error_text)));
        }

        let ping: PingResponse = response
            .json()
            .await
            .map_err(|e| WhatsAppError::Parse(e.to_string()))?;

        Ok(ping.pong)
    }

    /// Disconnect gracefully, yielding the renewed session token
    pub async fn disconnect(&self) -> Result<Session> {
        let url = format!("{}/v1/session/disconnect", self.base_url);

        let response = self
            .client
            .post(&url)
            .send()
            .await
            .map_err(WhatsAppError::Http)?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();
            return Err(WhatsAppError::Api(format!("{}: {}", status, error_text)));
        }

        response
            .json()
            .await
            .map_err(|e| WhatsAppError::Parse(e.to_string()))
    }
}
