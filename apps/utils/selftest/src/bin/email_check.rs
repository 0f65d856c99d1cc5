//! Send the sample HTML report through the configured SMTP server.

use std::path::PathBuf;

use clap::Parser;
use selftest::{SAMPLE_REPORT_HTML, bootstrap, notifier_from_env, status_line};

#[derive(Parser, Debug)]
#[command(about = "Send a test report email")]
struct Args {
    /// Recipient addresses
    #[arg(required = true, num_args = 1..)]
    recipients: Vec<String>,

    /// Subject line
    #[arg(short, long, default_value = "Test Email")]
    subject: String,

    /// File to attach
    #[arg(short, long)]
    attachment: Option<PathBuf>,

    /// Only check that the SMTP server is reachable
    #[arg(long)]
    health: bool,
}

#[tokio::main]
async fn main() -> color_eyre::Result<()> {
    bootstrap();
    let args = Args::parse();

    let notifier = notifier_from_env()?;

    if args.health {
        let reachable = notifier.health_check().await;
        println!("{}", status_line("SMTP server reachable", &reachable));
        return Ok(reachable?);
    }

    let result = notifier
        .send(
            args.recipients,
            &args.subject,
            SAMPLE_REPORT_HTML,
            args.attachment.as_deref(),
        )
        .await;

    match result {
        Ok(receipt) => {
            println!("✓ Email sent successfully to {}", receipt.to);
            Ok(())
        }
        Err(e) => {
            println!("✗ Email sending failed: {}", e);
            Err(e.into())
        }
    }
}
