//! Email provider implementations

pub mod mock;
pub mod smtp;

pub use mock::MockSmtpProvider;
pub use smtp::SmtpProvider;

use async_trait::async_trait;
use eyre::Result;
use lettre::Message;

/// Result of sending an email
#[derive(Debug, Clone)]
pub struct SendResult {
    /// Server-assigned or `Message-ID` identifier
    pub message_id: String,
    /// The `To` field the message went out with
    pub to: String,
}

/// Trait for email providers
#[async_trait]
pub trait EmailProvider: Send + Sync {
    /// Transmit a composed message
    async fn deliver(&self, message: Message) -> Result<SendResult>;

    /// Check if the provider is healthy
    async fn health_check(&self) -> Result<()>;

    /// Get provider name
    fn name(&self) -> &'static str;
}

pub(crate) fn to_header(message: &Message) -> String {
    message
        .headers()
        .get_raw("To")
        .map(str::to_string)
        .unwrap_or_default()
}

pub(crate) fn message_id_header(message: &Message) -> Option<String> {
    message.headers().get_raw("Message-ID").map(str::to_string)
}
