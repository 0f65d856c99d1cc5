//! SMTP email provider using lettre

use super::{message_id_header, to_header, EmailProvider, SendResult};
use crate::config::SmtpConfig;
use async_trait::async_trait;
use eyre::{Result, WrapErr};
use lettre::{
    transport::smtp::authentication::Credentials, AsyncSmtpTransport, AsyncTransport, Message,
    Tokio1Executor,
};

/// STARTTLS submission provider
///
/// Built without a connection pool: every `deliver` opens a session, upgrades it,
/// logs in, transmits and quits.
pub struct SmtpProvider {
    transport: AsyncSmtpTransport<Tokio1Executor>,
    host: String,
}

impl SmtpProvider {
    pub fn new(config: &SmtpConfig) -> Result<Self> {
        let creds = Credentials::new(
            config.username.clone(),
            config.password.expose().to_string(),
        );
        let transport = AsyncSmtpTransport::<Tokio1Executor>::starttls_relay(&config.host)
            .wrap_err("Failed to create SMTP relay")?
            .credentials(creds)
            .port(config.port)
            .build();

        Ok(Self {
            transport,
            host: config.host.clone(),
        })
    }
}

#[async_trait]
impl EmailProvider for SmtpProvider {
    async fn deliver(&self, message: Message) -> Result<SendResult> {
        let to = to_header(&message);
        let header_id = message_id_header(&message);

        let response = self
            .transport
            .send(message)
            .await
            .wrap_err_with(|| format!("Failed to send email via SMTP ({})", self.host))?;

        // Prefer the server's queue id, e.g. "2.0.0 OK  1700000000 abc.123 - gsmtp"
        let message_id = response
            .message()
            .next()
            .map(|s| s.to_string())
            .or(header_id)
            .unwrap_or_default();

        Ok(SendResult { message_id, to })
    }

    async fn health_check(&self) -> Result<()> {
        let reachable = self
            .transport
            .test_connection()
            .await
            .wrap_err("SMTP health check failed")?;
        if !reachable {
            eyre::bail!("SMTP server {} did not accept a connection", self.host);
        }
        Ok(())
    }

    fn name(&self) -> &'static str {
        "smtp"
    }
}
