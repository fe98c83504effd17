//! Inbound message handling
//!
//! The handler is an explicitly constructed context object carrying the
//! gateway client, the dispatcher and the process start time; messages that
//! predate startup or lack the trigger mention are ignored.

use tracing::{error, info};

use crate::api::WhatsAppApiClient;
use crate::dispatch::Dispatcher;
use crate::error::Result;
use crate::types::InboundMessage;

/// Message handler for the WhatsApp gateway
pub struct MessageHandler {
    api: WhatsAppApiClient,
    dispatcher: Dispatcher,
    trigger: String,
    start_time: u64,
}

impl MessageHandler {
    /// Create a new message handler
    pub fn new(
        api: WhatsAppApiClient,
        dispatcher: Dispatcher,
        trigger: &str,
        start_time: u64,
    ) -> Self {
        Self {
            api,
            dispatcher,
            trigger: trigger.to_string(),
            start_time,
        }
    }

    /// Whether a message is addressed to the bot and fresh
    ///
    /// Messages delivered before process start are replays from the session
    /// restore and must never be answered.
    pub fn should_handle(&self, msg: &InboundMessage) -> bool {
        msg.timestamp >= self.start_time
            && msg
                .text
                .to_lowercase()
                .contains(&self.trigger.to_lowercase())
    }

    /// Dispatch one inbound message and send the reply
    ///
    /// A failed send is logged and swallowed; one flaky delivery must not
    /// take down a long-running bot.
    pub async fn process_message(&self, msg: &InboundMessage) -> Result<()> {
        if !self.should_handle(msg) {
            return Ok(());
        }

        let reply = self.dispatcher.dispatch(&msg.text).await;

        match self
            .api
            .send_message(&msg.conversation, &reply, Some(&msg.text))
            .await
        {
            Ok(response) => info!("Message sent -> id: {}", response.id),
            Err(e) => error!("Error sending message: {}", e),
        }

        info!(
            "{} {}: recv: {} resp: {}",
            msg.timestamp, msg.conversation, msg.text, reply
        );

        Ok(())
    }
}
