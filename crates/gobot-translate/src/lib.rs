//! gobot-translate: machine translation client for gobot
//!
//! Talks to the free `translate_a/single` endpoint (the `client=gtx` API)
//! with explicit source/target locale codes.

pub mod client;
pub mod error;

pub use client::TranslateClient;
pub use error::{Result, TranslateError};
