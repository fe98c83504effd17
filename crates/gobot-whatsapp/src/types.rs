//! WhatsApp gateway message and session types

use serde::{Deserialize, Serialize};

/// Authentication session issued by the gateway
///
/// The token contents are opaque to the bot; they are stored and handed back
/// verbatim on restore.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    /// Client identifier
    pub client_id: String,
    /// Client-side token
    pub client_token: String,
    /// Server-side token
    pub server_token: String,
    /// Encoded encryption key material
    pub enc_key: String,
    /// Encoded MAC key material
    pub mac_key: String,
    /// WhatsApp id of the paired account
    pub wid: String,
}

/// Received WhatsApp message
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InboundMessage {
    /// Conversation id the message arrived on
    pub conversation: String,
    /// Sender id
    pub sender: String,
    /// Message text
    pub text: String,
    /// Delivery timestamp, unix seconds
    pub timestamp: u64,
}

/// Message to send via the gateway
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SendMessage {
    /// Conversation id to reply on
    pub conversation: String,
    /// Message text
    pub text: String,
    /// Quoted context text (optional)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quoted_text: Option<String>,
}

/// Gateway response for a sent message
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SendResponse {
    /// Id assigned to the sent message
    pub id: String,
}

/// Pairing code to display for out-of-band scanning
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PairingCode {
    /// Scannable code contents
    pub code: String,
}

/// Gateway response for the admin connectivity check
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PingResponse {
    /// Whether the paired phone answered
    pub pong: bool,
}
