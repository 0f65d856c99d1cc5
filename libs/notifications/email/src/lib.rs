//! Email notifications for reporting jobs
//!
//! A [`Notifier`] composes an HTML message with an optional file attachment and
//! hands it to an [`EmailProvider`]. The SMTP provider submits over STARTTLS with
//! a fresh authenticated session per message.
//!
//! ## Components
//!
//! - **Configuration**: `SmtpConfig` from `EMAIL_*` environment variables
//! - **Models**: `Recipients`, `OutgoingEmail`
//! - **Providers**: SMTP via lettre, and Mock (captures messages in memory)
//!
//! ## Usage
//!
//! ```ignore
//! use email::Notifier;
//! use std::path::Path;
//!
//! let notifier = Notifier::from_env()?;
//! notifier
//!     .send(
//!         vec!["ops@example.com", "finance@example.com"],
//!         "Daily revenue",
//!         "<h1>Revenue</h1><p>See attached.</p>",
//!         Some(Path::new("out/revenue.csv")),
//!     )
//!     .await?;
//! ```

pub mod compose;
pub mod config;
pub mod error;
pub mod models;
pub mod notifier;
pub mod provider;

// Re-export main types
pub use config::SmtpConfig;
pub use error::{NotificationError, NotificationResult};
pub use models::{OutgoingEmail, Recipients};
pub use notifier::Notifier;
pub use provider::{EmailProvider, MockSmtpProvider, SendResult, SmtpProvider};
