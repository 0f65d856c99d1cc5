//! Shared pieces of the manual check binaries
//!
//! - `db-check`: connect to and close every configured backend
//! - `email-check <recipient>`: send the sample report
//! - `logger-check`: write a few lines through a named logger

use std::fmt::Display;

use core_config::{Environment, tracing::init_tracing, tracing::install_color_eyre};
use email::Notifier;
use eyre::WrapErr;

/// Sample report body used by `email-check`
pub const SAMPLE_REPORT_HTML: &str = r#"<html>
    <body>
        <h2>Test Report</h2>
        <p>This is a test email from the automated reporting system.</p>
    </body>
</html>"#;

/// Load `.env`, install error reporting and the global subscriber
pub fn bootstrap() -> Environment {
    dotenv::dotenv().ok();
    install_color_eyre();

    let environment = Environment::from_env();
    init_tracing(&environment);
    environment
}

/// SMTP notifier from `EMAIL_*`, with a hint about which variables to set
pub fn notifier_from_env() -> eyre::Result<Notifier> {
    Notifier::from_env()
        .wrap_err("Failed to configure SMTP notifier (set EMAIL_USER and EMAIL_PASS)")
}

/// `✓ label` or `✗ label: error`
pub fn status_line<E: Display>(label: &str, result: &Result<(), E>) -> String {
    match result {
        Ok(()) => format!("✓ {}", label),
        Err(e) => format!("✗ {}: {}", label, e),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_line() {
        assert_eq!(status_line::<String>("MySQL", &Ok(())), "✓ MySQL");
        assert_eq!(
            status_line("MySQL", &Err("connection refused")),
            "✗ MySQL: connection refused"
        );
    }

    #[test]
    fn test_notifier_from_env_adds_context() {
        temp_env::with_vars(
            [("EMAIL_USER", None::<&str>), ("EMAIL_PASS", None)],
            || {
                let err = notifier_from_env().err().unwrap();
                let rendered = format!("{:#}", err);
                assert!(rendered.contains("Failed to configure SMTP notifier"));
                assert!(rendered.contains("EMAIL_USER"));
            },
        );
    }

    #[test]
    fn test_sample_report_is_html() {
        assert!(SAMPLE_REPORT_HTML.contains("<h2>Test Report</h2>"));
    }
}
