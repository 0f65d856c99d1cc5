//! Mock email provider for testing

use super::{message_id_header, to_header, EmailProvider, SendResult};
use async_trait::async_trait;
use eyre::Result;
use lettre::Message;
use std::sync::Arc;
use tokio::sync::Mutex;

/// A message as the mock received it
#[derive(Debug, Clone)]
pub struct CapturedEmail {
    pub to: String,
    /// Full RFC 5322 rendering, headers and MIME parts included
    pub raw: String,
}

/// Mock email provider that captures delivered messages
#[derive(Clone)]
pub struct MockSmtpProvider {
    sent_emails: Arc<Mutex<Vec<CapturedEmail>>>,
    should_fail: bool,
    failure_message: Option<String>,
}

impl MockSmtpProvider {
    /// Create a new mock provider
    pub fn new() -> Self {
        Self {
            sent_emails: Arc::new(Mutex::new(Vec::new())),
            should_fail: false,
            failure_message: None,
        }
    }

    /// Create a mock provider that always fails
    pub fn failing(message: impl Into<String>) -> Self {
        Self {
            sent_emails: Arc::new(Mutex::new(Vec::new())),
            should_fail: true,
            failure_message: Some(message.into()),
        }
    }

    /// Get all delivered messages
    pub async fn sent_emails(&self) -> Vec<CapturedEmail> {
        self.sent_emails.lock().await.clone()
    }

    /// Get the count of delivered messages
    pub async fn sent_count(&self) -> usize {
        self.sent_emails.lock().await.len()
    }

    /// Check if a message went out with this exact `To` field
    pub async fn was_sent_to(&self, to: &str) -> bool {
        self.sent_emails.lock().await.iter().any(|e| e.to == to)
    }
}

impl Default for MockSmtpProvider {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl EmailProvider for MockSmtpProvider {
    async fn deliver(&self, message: Message) -> Result<SendResult> {
        if self.should_fail {
            let message = self
                .failure_message
                .clone()
                .unwrap_or_else(|| "Mock failure".to_string());
            return Err(eyre::eyre!(message));
        }

        let to = to_header(&message);
        let message_id = message_id_header(&message)
            .unwrap_or_else(|| format!("mock-{}", uuid::Uuid::new_v4()));

        self.sent_emails.lock().await.push(CapturedEmail {
            to: to.clone(),
            raw: String::from_utf8_lossy(&message.formatted()).into_owned(),
        });

        Ok(SendResult { message_id, to })
    }

    async fn health_check(&self) -> Result<()> {
        if self.should_fail {
            return Err(eyre::eyre!("Mock health check failed"));
        }
        Ok(())
    }

    fn name(&self) -> &'static str {
        "mock"
    }
}
