use std::path::Path;

use core_config::FromEnv;
use tracing::{error, info};

use crate::compose::compose;
use crate::config::SmtpConfig;
use crate::error::{NotificationError, NotificationResult};
use crate::models::{OutgoingEmail, Recipients};
use crate::provider::{EmailProvider, SendResult, SmtpProvider};

/// Composes report emails and hands them to a provider
///
/// # Example
/// ```ignore
/// use email::{MockSmtpProvider, Notifier};
///
/// let notifier = Notifier::new("reports@example.com", MockSmtpProvider::new());
/// let receipt = notifier.send("ops@example.com", "Daily", "<p>ok</p>", None).await?;
/// ```
pub struct Notifier<P: EmailProvider = SmtpProvider> {
    sender: String,
    provider: P,
}

impl Notifier<SmtpProvider> {
    /// SMTP notifier sending as `config.username`
    pub fn from_config(config: &SmtpConfig) -> NotificationResult<Self> {
        let provider = SmtpProvider::new(config)
            .map_err(|e| NotificationError::Config(format!("{:#}", e)))?;
        Ok(Self::new(config.sender(), provider))
    }

    /// SMTP notifier from `EMAIL_*` environment variables
    pub fn from_env() -> NotificationResult<Self> {
        Self::from_config(&SmtpConfig::from_env()?)
    }
}

impl<P: EmailProvider> Notifier<P> {
    pub fn new(sender: impl Into<String>, provider: P) -> Self {
        Self {
            sender: sender.into(),
            provider,
        }
    }

    pub fn sender(&self) -> &str {
        &self.sender
    }

    pub fn provider(&self) -> &P {
        &self.provider
    }

    /// Send an HTML email with an optional attachment
    ///
    /// A missing attachment file is skipped and the body is still sent.
    pub async fn send(
        &self,
        recipients: impl Into<Recipients>,
        subject: &str,
        body: &str,
        attachment: Option<&Path>,
    ) -> NotificationResult<SendResult> {
        let mut email = OutgoingEmail::new(recipients, subject, body);
        if let Some(path) = attachment {
            email = email.with_attachment(path);
        }
        self.send_email(&email).await
    }

    pub async fn send_email(&self, email: &OutgoingEmail) -> NotificationResult<SendResult> {
        match self.try_send(email).await {
            Ok(result) => {
                info!(
                    provider = self.provider.name(),
                    message_id = %result.message_id,
                    "Email sent successfully to {}",
                    result.to
                );
                Ok(result)
            }
            Err(e) => {
                error!(
                    provider = self.provider.name(),
                    "Failed to send email to {}: {}",
                    email.recipients.to_field(),
                    e
                );
                Err(e)
            }
        }
    }

    async fn try_send(&self, email: &OutgoingEmail) -> NotificationResult<SendResult> {
        let message = compose(&self.sender, email).await?;
        Ok(self.provider.deliver(message).await?)
    }

    /// Check that the provider can reach its server
    pub async fn health_check(&self) -> NotificationResult<()> {
        Ok(self.provider.health_check().await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::provider::MockSmtpProvider;
    use std::io::Write;

    fn notifier() -> Notifier<MockSmtpProvider> {
        Notifier::new("reports@example.com", MockSmtpProvider::new())
    }

    fn to_line(raw: &str) -> String {
        raw.lines()
            .find(|line| line.starts_with("To: "))
            .unwrap_or_default()
            .to_string()
    }

    #[tokio::test]
    async fn test_send_body_only() {
        let notifier = notifier();

        let result = notifier
            .send("ops@example.com", "Daily", "<b>ok</b>", None)
            .await
            .unwrap();

        assert_eq!(result.to, "ops@example.com");
        let sent = notifier.provider().sent_emails().await;
        assert_eq!(sent.len(), 1);
        assert!(sent[0].raw.contains("From: reports@example.com"));
        assert!(sent[0].raw.contains("<b>ok</b>"));
    }

    #[tokio::test]
    async fn test_single_string_and_one_element_list_give_same_to() {
        let notifier = notifier();

        notifier
            .send("ops@example.com", "Daily", "<p>a</p>", None)
            .await
            .unwrap();
        notifier
            .send(vec!["ops@example.com"], "Daily", "<p>b</p>", None)
            .await
            .unwrap();

        let sent = notifier.provider().sent_emails().await;
        assert_eq!(sent[0].to, sent[1].to);
        assert_eq!(to_line(&sent[0].raw), to_line(&sent[1].raw));
        assert_eq!(to_line(&sent[0].raw), "To: ops@example.com");
    }

    #[tokio::test]
    async fn test_multiple_recipients_share_one_to_field() {
        let notifier = notifier();

        let result = notifier
            .send(
                vec!["ops@example.com", "finance@example.com"],
                "Daily",
                "<p>x</p>",
                None,
            )
            .await
            .unwrap();

        assert_eq!(result.to, "ops@example.com, finance@example.com");
    }

    #[tokio::test]
    async fn test_nonexistent_attachment_still_sends_body() {
        let notifier = notifier();

        let result = notifier
            .send(
                "ops@example.com",
                "Daily",
                "<p>no file today</p>",
                Some(Path::new("/nonexistent/dir/report.xlsx")),
            )
            .await;

        assert!(result.is_ok());
        let sent = notifier.provider().sent_emails().await;
        assert_eq!(sent.len(), 1);
        assert!(sent[0].raw.contains("<p>no file today</p>"));
        assert!(!sent[0].raw.contains("report.xlsx"));
    }

    #[tokio::test]
    async fn test_attachment_delivered() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("summary.bin");
        std::fs::File::create(&path)
            .unwrap()
            .write_all(&[0x00, 0xff, 0x10, 0x80])
            .unwrap();

        let notifier = notifier();
        notifier
            .send("ops@example.com", "Daily", "<p>see file</p>", Some(&path))
            .await
            .unwrap();

        let raw = &notifier.provider().sent_emails().await[0].raw;
        assert!(raw.contains("filename=\"summary.bin\""));
        assert!(raw.contains("AP8QgA=="));
    }

    #[tokio::test]
    async fn test_provider_failure_surfaces_as_send_error() {
        let notifier = Notifier::new(
            "reports@example.com",
            MockSmtpProvider::failing("535 5.7.8 Username and Password not accepted"),
        );

        let err = notifier
            .send("ops@example.com", "Daily", "<p>x</p>", None)
            .await
            .unwrap_err();

        match err {
            NotificationError::Send(msg) => assert!(msg.contains("535")),
            other => panic!("expected Send error, got {:?}", other),
        }
        assert!(notifier.health_check().await.is_err());
    }

    #[test]
    fn test_from_env_requires_credentials() {
        temp_env::with_vars(
            [("EMAIL_USER", None::<&str>), ("EMAIL_PASS", None)],
            || {
                let result = Notifier::from_env();
                assert!(matches!(result, Err(NotificationError::Config(_))));
            },
        );
    }

    #[test]
    fn test_from_env_builds_smtp_notifier() {
        temp_env::with_vars(
            [
                ("EMAIL_SMTP", Some("smtp.example.com")),
                ("EMAIL_PORT", Some("587")),
                ("EMAIL_USER", Some("reports@example.com")),
                ("EMAIL_PASS", Some("pw")),
            ],
            || {
                let notifier = Notifier::from_env().unwrap();
                assert_eq!(notifier.sender(), "reports@example.com");
                assert_eq!(notifier.provider().name(), "smtp");
            },
        );
    }
}
