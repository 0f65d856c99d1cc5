//! MIME assembly for outgoing reports

use std::io;
use std::path::Path;

use lettre::message::header::{ContentTransferEncoding, ContentType};
use lettre::message::{Attachment, Body, Mailbox, Mailboxes, MultiPart, SinglePart};
use lettre::Message;
use tracing::warn;

use crate::error::{NotificationError, NotificationResult};
use crate::models::OutgoingEmail;

const ATTACHMENT_CONTENT_TYPE: &str = "application/octet-stream";

/// Build a multipart/mixed message: one HTML part, plus the attachment when present
///
/// A missing attachment file is skipped with a warning. Any other read failure is
/// an error.
pub async fn compose(sender: &str, email: &OutgoingEmail) -> NotificationResult<Message> {
    let from: Mailbox = sender
        .parse()
        .map_err(|e| NotificationError::InvalidAddress(format!("sender '{}': {}", sender, e)))?;

    if email.recipients.is_empty() {
        return Err(NotificationError::InvalidAddress(
            "no recipients given".to_string(),
        ));
    }
    let to_field = email.recipients.to_field();
    let to: Mailboxes = to_field.parse().map_err(|e| {
        NotificationError::InvalidAddress(format!("recipients '{}': {}", to_field, e))
    })?;

    let mut builder = Message::builder().from(from).subject(&email.subject);
    for mailbox in to {
        builder = builder.to(mailbox);
    }

    let mut parts = MultiPart::mixed().singlepart(SinglePart::html(email.body.clone()));
    if let Some(path) = &email.attachment {
        if let Some(attachment) = read_attachment(path).await? {
            parts = parts.singlepart(attachment);
        }
    }

    builder
        .multipart(parts)
        .map_err(|e| NotificationError::Compose(e.to_string()))
}

async fn read_attachment(path: &Path) -> NotificationResult<Option<SinglePart>> {
    let content = match tokio::fs::read(path).await {
        Ok(content) => content,
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            warn!("Attachment {} not found, sending without it", path.display());
            return Ok(None);
        }
        Err(source) => {
            return Err(NotificationError::Attachment {
                path: path.to_path_buf(),
                source,
            })
        }
    };

    let filename = path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| "attachment".to_string());

    let body = Body::new_with_encoding(content, ContentTransferEncoding::Base64)
        .map_err(|_| NotificationError::Compose(format!("cannot base64-encode {}", filename)))?;
    let content_type = ContentType::parse(ATTACHMENT_CONTENT_TYPE)
        .map_err(|e| NotificationError::Compose(e.to_string()))?;

    Ok(Some(Attachment::new(filename).body(body, content_type)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use base64::Engine;
    use std::io::Write;

    fn rendered(message: &Message) -> String {
        String::from_utf8_lossy(&message.formatted()).into_owned()
    }

    #[tokio::test]
    async fn test_html_body_part() {
        let email = OutgoingEmail::new("ops@example.com", "Daily", "<h1>Totals</h1>");
        let message = compose("bot@example.com", &email).await.unwrap();
        let raw = rendered(&message);

        assert!(raw.contains("Content-Type: multipart/mixed"));
        assert!(raw.contains("Content-Type: text/html; charset=utf-8"));
        assert!(raw.contains("<h1>Totals</h1>"));
        assert!(raw.contains("Subject: Daily"));
        assert!(raw.contains("From: bot@example.com"));
    }

    #[tokio::test]
    async fn test_attachment_is_base64_with_filename() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("revenue.csv");
        let content = b"region,total\nemea,1200\n";
        std::fs::File::create(&path)
            .unwrap()
            .write_all(content)
            .unwrap();

        let email = OutgoingEmail::new("ops@example.com", "Daily", "<p>attached</p>")
            .with_attachment(&path);
        let raw = rendered(&compose("bot@example.com", &email).await.unwrap());

        assert!(raw.contains("Content-Type: application/octet-stream"));
        assert!(raw.contains("Content-Transfer-Encoding: base64"));
        assert!(raw.contains("Content-Disposition: attachment; filename=\"revenue.csv\""));
        let encoded = base64::engine::general_purpose::STANDARD.encode(content);
        assert!(raw.contains(&encoded));
    }

    #[tokio::test]
    async fn test_missing_attachment_is_skipped() {
        let email = OutgoingEmail::new("ops@example.com", "Daily", "<p>body</p>")
            .with_attachment("/nonexistent/report.csv");
        let raw = rendered(&compose("bot@example.com", &email).await.unwrap());

        assert!(!raw.contains("Content-Disposition: attachment"));
        assert!(raw.contains("<p>body</p>"));
    }

    #[tokio::test]
    async fn test_unreadable_attachment_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let email = OutgoingEmail::new("ops@example.com", "Daily", "<p>body</p>")
            .with_attachment(dir.path());

        let err = compose("bot@example.com", &email).await.unwrap_err();
        assert!(matches!(err, NotificationError::Attachment { .. }));
    }

    #[tokio::test]
    async fn test_blank_recipient_entry_is_ignored() {
        let email = OutgoingEmail::new(vec!["ops@example.com", ""], "Daily", "<p>body</p>");
        let raw = rendered(&compose("bot@example.com", &email).await.unwrap());
        assert!(raw.contains("To: ops@example.com\r\n"));
    }

    #[tokio::test]
    async fn test_invalid_addresses() {
        let email = OutgoingEmail::new("not an address", "Daily", "<p>body</p>");
        let err = compose("bot@example.com", &email).await.unwrap_err();
        assert!(matches!(err, NotificationError::InvalidAddress(_)));

        let email = OutgoingEmail::new(Vec::<String>::new(), "Daily", "<p>body</p>");
        let err = compose("bot@example.com", &email).await.unwrap_err();
        assert!(matches!(err, NotificationError::InvalidAddress(_)));

        let email = OutgoingEmail::new("ops@example.com", "Daily", "<p>body</p>");
        let err = compose("", &email).await.unwrap_err();
        assert!(matches!(err, NotificationError::InvalidAddress(_)));
    }
}
