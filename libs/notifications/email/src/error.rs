//! Error types for the notifier.

use std::fmt;
use std::io;
use std::path::PathBuf;

use core_config::ConfigError;

/// Result type for notification operations.
pub type NotificationResult<T> = Result<T, NotificationError>;

/// Errors that can occur while composing or sending an email.
#[derive(Debug)]
pub enum NotificationError {
    /// Missing or malformed SMTP configuration
    Config(String),
    /// Sender or recipient is not a valid mailbox
    InvalidAddress(String),
    /// The attachment exists but could not be read
    Attachment { path: PathBuf, source: io::Error },
    /// MIME message could not be assembled
    Compose(String),
    /// SMTP session, authentication or transmission failed
    Send(String),
}

impl fmt::Display for NotificationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Config(msg) => write!(f, "Configuration error: {}", msg),
            Self::InvalidAddress(msg) => write!(f, "Invalid address: {}", msg),
            Self::Attachment { path, source } => {
                write!(f, "Failed to read attachment {}: {}", path.display(), source)
            }
            Self::Compose(msg) => write!(f, "Failed to compose message: {}", msg),
            Self::Send(msg) => write!(f, "Failed to send email: {}", msg),
        }
    }
}

impl std::error::Error for NotificationError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Attachment { source, .. } => Some(source),
            _ => None,
        }
    }
}

impl From<ConfigError> for NotificationError {
    fn from(err: ConfigError) -> Self {
        Self::Config(err.to_string())
    }
}

/// Provider failures arrive as `eyre` reports; the full context chain is kept.
impl From<eyre::Report> for NotificationError {
    fn from(err: eyre::Report) -> Self {
        Self::Send(format!("{:#}", err))
    }
}
