//! WhatsApp bot
//!
//! Ties the gateway client, session store and message handler together:
//! restore-or-pair login at startup, a polling receive loop while running,
//! and disconnect-and-persist on shutdown.

use std::time::Duration;

use tokio::time::interval;
use tracing::{error, info, warn};

use gobot_core::Config;
use gobot_translate::TranslateClient;
use gobot_weather::WeatherClient;

use crate::api::WhatsAppApiClient;
use crate::dispatch::Dispatcher;
use crate::error::{Result, WhatsAppError};
use crate::handler::MessageHandler;
use crate::session::SessionStore;
use crate::types::Session;

/// WhatsApp bot for gobot
pub struct WhatsAppBot {
    api: WhatsAppApiClient,
    store: SessionStore,
    handler: MessageHandler,
    poll_interval_secs: u64,
}

impl WhatsAppBot {
    /// Create a new bot from configuration
    pub fn new(config: &Config) -> Result<Self> {
        let api = WhatsAppApiClient::new(
            &config.gateway.base_url,
            config.gateway.connect_timeout_secs,
        )?;
        let store = SessionStore::new(&config.gateway.session_path);

        let weather = WeatherClient::new(&config.weather.base_url, &config.weather.api_key)
            .map_err(|e| WhatsAppError::Config(e.to_string()))?;
        let translate = TranslateClient::new(&config.translate.base_url)
            .map_err(|e| WhatsAppError::Config(e.to_string()))?;
        let dispatcher = Dispatcher::new(weather, translate, &config.trigger);

        let start_time = chrono::Utc::now().timestamp().max(0) as u64;
        let handler = MessageHandler::new(api.clone(), dispatcher, &config.trigger, start_time);

        Ok(Self {
            api,
            store,
            handler,
            poll_interval_secs: config.gateway.poll_interval_secs,
        })
    }

    /// Check whether the gateway is reachable
    pub async fn health_check(&self) -> Result<bool> {
        self.api.health_check().await
    }

    /// Log in: restore the stored session or run the pairing flow
    ///
    /// Any trouble with the stored token (missing file, corrupt file,
    /// gateway rejection) falls back to fresh pairing. The resulting session
    /// is persisted; a persist failure is logged and the login still counts,
    /// the session just won't survive a restart.
    pub async fn login(&self) -> Result<()> {
        let session = match self.store.load() {
            Ok(Some(stored)) => match self.api.restore_session(&stored).await {
                Ok(renewed) => renewed,
                Err(e) => {
                    warn!("Session restore failed, re-pairing: {}", e);
                    self.pair().await?
                }
            },
            Ok(None) => self.pair().await?,
            Err(e) => {
                warn!("Stored session unreadable, re-pairing: {}", e);
                self.pair().await?
            }
        };

        if let Err(e) = self.store.save(&session) {
            warn!("Error saving session: {}", e);
        }

        Ok(())
    }

    /// Run the interactive pairing flow
    async fn pair(&self) -> Result<Session> {
        let pairing = self.api.start_pairing().await?;

        // The code must reach a human; this is deliberately not a log line.
        println!("Scan this pairing code with the WhatsApp app on your phone:");
        println!("{}", pairing.code);

        let session = self.api.wait_for_pairing().await?;
        info!("Pairing complete");
        Ok(session)
    }

    /// Verify connectivity with the paired phone
    pub async fn admin_test(&self) -> Result<bool> {
        self.api.admin_test().await
    }

    /// Poll for inbound messages until shutdown is signalled
    pub async fn run(&self, mut shutdown: tokio::sync::broadcast::Receiver<()>) -> Result<()> {
        info!(
            "Polling gateway for messages every {}s",
            self.poll_interval_secs
        );

        let mut poll_interval = interval(Duration::from_secs(self.poll_interval_secs));

        loop {
            tokio::select! {
                _ = shutdown.recv() => {
                    info!("Received shutdown signal");
                    break;
                }
                _ = poll_interval.tick() => {
                    match self.api.receive_messages().await {
                        Ok(messages) => {
                            for msg in &messages {
                                if let Err(e) = self.handler.process_message(msg).await {
                                    error!("Error processing message: {}", e);
                                }
                            }
                        }
                        Err(e) => error!("Error polling messages: {}", e),
                    }
                }
            }
        }

        Ok(())
    }

    /// Disconnect from the gateway and persist the renewed session
    pub async fn shutdown(&self) -> Result<()> {
        let session = self.api.disconnect().await?;
        self.store.save(&session)?;
        info!("Disconnected, session persisted");
        Ok(())
    }
}
