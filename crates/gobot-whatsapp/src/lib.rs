//! gobot-whatsapp: WhatsApp gateway integration for gobot
//!
//! Talks to a WhatsApp gateway REST API for pairing, session restore,
//! message send/receive and graceful disconnect. Inbound mentions are parsed
//! into commands and answered with weather or translation replies.

pub mod api;
pub mod bot;
pub mod command;
pub mod dispatch;
pub mod error;
pub mod handler;
pub mod session;
pub mod types;

pub use api::WhatsAppApiClient;
pub use bot::WhatsAppBot;
pub use command::Command;
pub use dispatch::Dispatcher;
pub use error::{Result, WhatsAppError};
pub use handler::MessageHandler;
pub use session::SessionStore;
pub use types::{InboundMessage, PairingCode, SendResponse, Session};
