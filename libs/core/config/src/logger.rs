//! Named loggers with a daily file sink and a console sink
//!
//! A [`LoggerRegistry`] is owned by the process entry point. The first
//! [`LoggerRegistry::setup`] call for a name builds a `tracing` dispatcher with two
//! layers sharing one line format:
//!
//! ```text
//! 2024-05-01 09:30:00 - job1 - INFO - report generated
//! ```
//!
//! one appending to `{log_dir}/{name}_{YYYYMMDD}.log`, the other writing to stdout.
//! Later calls for the same name return the already-configured handle untouched.
//!
//! # Example
//!
//! ```ignore
//! use core_config::{LoggerRegistry, LogLevel};
//!
//! let registry = LoggerRegistry::default(); // logs/
//! let logger = registry.setup("daily_report", LogLevel::Info)?;
//! logger.info("Starting report");
//!
//! // Anything instrumented with `tracing` can be routed through the logger too
//! logger.in_scope(|| tracing::warn!(rows = 0, "Empty result set"));
//! ```

use chrono::{Local, NaiveDate};
use std::collections::HashMap;
use std::fmt;
use std::fs::{self, OpenOptions};
use std::io;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use std::sync::{Arc, Mutex, PoisonError};
use tracing::{Dispatch, Event, Level, Metadata, Subscriber};
use tracing_subscriber::filter::filter_fn;
use tracing_subscriber::fmt::format::{FormatEvent, FormatFields, Writer};
use tracing_subscriber::fmt::writer::{BoxMakeWriter, MakeWriter};
use tracing_subscriber::fmt::FmtContext;
use tracing_subscriber::prelude::*;
use tracing_subscriber::registry::LookupSpan;

/// Directory used by [`LoggerRegistry::default`]
pub const DEFAULT_LOG_DIR: &str = "logs";

const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// `tracing` has no level above ERROR; critical events are ERROR events on this target.
const CRITICAL_TARGET: &str = "critical";

/// Severity threshold for a named logger
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum LogLevel {
    Debug,
    #[default]
    Info,
    Warning,
    Error,
    Critical,
}

impl LogLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            LogLevel::Debug => "DEBUG",
            LogLevel::Info => "INFO",
            LogLevel::Warning => "WARNING",
            LogLevel::Error => "ERROR",
            LogLevel::Critical => "CRITICAL",
        }
    }

    fn of(metadata: &Metadata<'_>) -> Self {
        if metadata.target() == CRITICAL_TARGET {
            return LogLevel::Critical;
        }
        match *metadata.level() {
            Level::ERROR => LogLevel::Error,
            Level::WARN => LogLevel::Warning,
            Level::INFO => LogLevel::Info,
            _ => LogLevel::Debug,
        }
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for LogLevel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "debug" | "trace" => Ok(LogLevel::Debug),
            "info" => Ok(LogLevel::Info),
            "warning" | "warn" => Ok(LogLevel::Warning),
            "error" => Ok(LogLevel::Error),
            "critical" | "fatal" => Ok(LogLevel::Critical),
            other => Err(format!("unknown log level '{}'", other)),
        }
    }
}

/// Output destination attached to a named logger
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Sink {
    File(PathBuf),
    Console,
}

/// `{timestamp} - {name} - {LEVEL} - {message}`, shared by both sinks
#[derive(Clone)]
struct NamedFormat {
    name: Arc<str>,
}

impl<S, N> FormatEvent<S, N> for NamedFormat
where
    S: Subscriber + for<'a> LookupSpan<'a>,
    N: for<'a> FormatFields<'a> + 'static,
{
    fn format_event(
        &self,
        ctx: &FmtContext<'_, S, N>,
        mut writer: Writer<'_>,
        event: &Event<'_>,
    ) -> fmt::Result {
        write!(
            writer,
            "{} - {} - {} - ",
            Local::now().format(TIMESTAMP_FORMAT),
            self.name,
            LogLevel::of(event.metadata())
        )?;
        ctx.field_format().format_fields(writer.by_ref(), event)?;
        writeln!(writer)
    }
}

struct LoggerInner {
    name: String,
    level: LogLevel,
    log_file: PathBuf,
    sinks: Vec<Sink>,
    dispatch: Dispatch,
}

/// Handle to one configured named logger
///
/// Cheap to clone; clones share the same sinks.
#[derive(Clone)]
pub struct LoggerHandle {
    inner: Arc<LoggerInner>,
}

impl LoggerHandle {
    pub fn name(&self) -> &str {
        &self.inner.name
    }

    pub fn level(&self) -> LogLevel {
        self.inner.level
    }

    /// Daily file the file sink appends to
    pub fn log_file(&self) -> &Path {
        &self.inner.log_file
    }

    pub fn sinks(&self) -> &[Sink] {
        &self.inner.sinks
    }

    pub fn sink_count(&self) -> usize {
        self.inner.sinks.len()
    }

    /// Whether both handles point at the same configured logger
    pub fn same_logger(&self, other: &LoggerHandle) -> bool {
        Arc::ptr_eq(&self.inner, &other.inner)
    }

    /// Run `f` with this logger's sinks as the current `tracing` dispatcher
    pub fn in_scope<T>(&self, f: impl FnOnce() -> T) -> T {
        tracing::dispatcher::with_default(&self.inner.dispatch, f)
    }

    pub fn debug(&self, message: impl fmt::Display) {
        self.in_scope(|| tracing::debug!("{}", message));
    }

    pub fn info(&self, message: impl fmt::Display) {
        self.in_scope(|| tracing::info!("{}", message));
    }

    pub fn warning(&self, message: impl fmt::Display) {
        self.in_scope(|| tracing::warn!("{}", message));
    }

    pub fn error(&self, message: impl fmt::Display) {
        self.in_scope(|| tracing::error!("{}", message));
    }

    pub fn critical(&self, message: impl fmt::Display) {
        self.in_scope(|| tracing::error!(target: CRITICAL_TARGET, "{}", message));
    }
}

impl fmt::Debug for LoggerHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LoggerHandle")
            .field("name", &self.inner.name)
            .field("level", &self.inner.level)
            .field("sinks", &self.inner.sinks)
            .finish()
    }
}

type ConsoleWriter = Arc<dyn Fn() -> BoxMakeWriter + Send + Sync>;

/// Get-or-create registry of named loggers
///
/// Setup for a given name runs under a lock, so concurrent first-time calls
/// attach sinks exactly once.
pub struct LoggerRegistry {
    log_dir: PathBuf,
    console: ConsoleWriter,
    loggers: Mutex<HashMap<String, LoggerHandle>>,
}

impl LoggerRegistry {
    pub fn new(log_dir: impl Into<PathBuf>) -> Self {
        Self {
            log_dir: log_dir.into(),
            console: Arc::new(|| BoxMakeWriter::new(io::stdout)),
            loggers: Mutex::new(HashMap::new()),
        }
    }

    /// Send console output somewhere other than stdout
    pub fn with_console_writer<W>(mut self, writer: W) -> Self
    where
        W: for<'a> MakeWriter<'a> + Clone + Send + Sync + 'static,
    {
        self.console = Arc::new(move || BoxMakeWriter::new(writer.clone()));
        self
    }

    pub fn log_dir(&self) -> &Path {
        &self.log_dir
    }

    /// Get the logger for `name`, building its sinks on first use
    ///
    /// The log directory is created if missing; failing to create it, or to open the
    /// daily file, is returned to the caller.
    pub fn setup(&self, name: &str, level: LogLevel) -> io::Result<LoggerHandle> {
        fs::create_dir_all(&self.log_dir)?;

        let mut loggers = self.loggers.lock().unwrap_or_else(PoisonError::into_inner);
        if let Some(existing) = loggers.get(name) {
            return Ok(existing.clone());
        }

        let log_file = self
            .log_dir
            .join(daily_file_name(name, Local::now().date_naive()));
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&log_file)?;

        let format = NamedFormat {
            name: Arc::from(name),
        };

        let file_layer = tracing_subscriber::fmt::layer()
            .event_format(format.clone())
            .with_ansi(false)
            .with_writer(Mutex::new(file))
            .with_filter(filter_fn(move |meta| LogLevel::of(meta) >= level));

        let console_layer = tracing_subscriber::fmt::layer()
            .event_format(format)
            .with_ansi(false)
            .with_writer((self.console)())
            .with_filter(filter_fn(move |meta| LogLevel::of(meta) >= level));

        let dispatch = Dispatch::new(
            tracing_subscriber::registry()
                .with(file_layer)
                .with(console_layer),
        );

        let handle = LoggerHandle {
            inner: Arc::new(LoggerInner {
                name: name.to_string(),
                level,
                log_file: log_file.clone(),
                sinks: vec![Sink::File(log_file), Sink::Console],
                dispatch,
            }),
        };

        loggers.insert(name.to_string(), handle.clone());
        Ok(handle)
    }

    /// Already-configured logger for `name`, if any
    pub fn get(&self, name: &str) -> Option<LoggerHandle> {
        self.loggers
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .get(name)
            .cloned()
    }

    pub fn len(&self) -> usize {
        self.loggers
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Default for LoggerRegistry {
    fn default() -> Self {
        Self::new(DEFAULT_LOG_DIR)
    }
}

impl fmt::Debug for LoggerRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LoggerRegistry")
            .field("log_dir", &self.log_dir)
            .field("loggers", &self.len())
            .finish()
    }
}

/// `{name}_{YYYYMMDD}.log`
pub fn daily_file_name(name: &str, date: NaiveDate) -> String {
    format!("{}_{}.log", name, date.format("%Y%m%d"))
}
