//! Write sample lines through a named logger into `$LOG_DIR` (default `logs/`).

use clap::Parser;
use core_config::{LogLevel, LoggerRegistry, env_or_default, logger::DEFAULT_LOG_DIR};
use selftest::bootstrap;

#[derive(Parser, Debug)]
#[command(about = "Exercise the named file + console logger")]
struct Args {
    /// Logger name, also the log file prefix
    #[arg(short, long, default_value = "test_script")]
    name: String,

    /// Minimum level: debug, info, warning, error, critical
    #[arg(short, long, default_value = "info")]
    level: LogLevel,
}

fn main() -> color_eyre::Result<()> {
    bootstrap();
    let args = Args::parse();

    let registry = LoggerRegistry::new(env_or_default("LOG_DIR", DEFAULT_LOG_DIR));
    let logger = registry.setup(&args.name, args.level)?;

    logger.info("This is an info message");
    logger.warning("This is a warning message");
    logger.error("This is an error message");

    // A second setup must reuse the same sinks
    let again = registry.setup(&args.name, args.level)?;
    again.info("Logger reused without duplicate sinks");

    println!(
        "✓ Logger '{}' writing to {} ({} sinks)",
        logger.name(),
        logger.log_file().display(),
        logger.sink_count()
    );
    Ok(())
}
