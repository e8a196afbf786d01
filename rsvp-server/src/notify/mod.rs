//! Outbound notifications
//!
//! The registry only sees [`Notifier`]; [`smtp::SmtpNotifier`] is the
//! production implementation and [`template`] renders the message body.

pub mod smtp;
pub mod template;

use async_trait::async_trait;
use thiserror::Error;

pub use smtp::SmtpNotifier;

#[derive(Debug, Error)]
pub enum NotifyError {
    #[error("Invalid address: {0}")]
    Address(String),

    #[error("Failed to build message: {0}")]
    Build(String),

    #[error("Delivery failed: {0}")]
    Transport(String),
}

/// Image embedded in the HTML body, referenced as `cid:{content_id}`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InlineImage {
    pub content_id: String,
    pub content_type: String,
    pub bytes: Vec<u8>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutboundEmail {
    pub to: String,
    pub subject: String,
    pub html_body: String,
    pub inline_image: Option<InlineImage>,
}

/// Delivers a rendered message
#[async_trait]
pub trait Notifier: Send + Sync {
    async fn send(&self, email: OutboundEmail) -> Result<(), NotifyError>;
}
