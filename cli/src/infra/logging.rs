//! Tracing subscriber construction.
//!
//! The subscriber is built once by the entry point from `LoggingOptions`.
//! Log events go to stderr by default so `--json` output on stdout stays
//! machine-readable.

use std::str::FromStr;

use anyhow::Result;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt::writer::BoxMakeWriter;

use crate::domain::config::{VALID_LOG_FORMATS, VALID_LOG_LEVELS};
use crate::domain::error::ConfigError;

/// SDK internals are capped at this level whatever the requested level.
const QUIET_TARGETS: &[&str] = &[
    "aws_config",
    "aws_smithy_runtime",
    "aws_sdk_ec2",
    "aws_sdk_elasticbeanstalk",
    "hyper",
    "h2",
];

/// Minimum severity of emitted events.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogLevel {
    Trace,
    Debug,
    Info,
    Warn,
    Error,
}

impl LogLevel {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Trace => "trace",
            Self::Debug => "debug",
            Self::Info => "info",
            Self::Warn => "warn",
            Self::Error => "error",
        }
    }
}

impl FromStr for LogLevel {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "trace" => Ok(Self::Trace),
            "debug" => Ok(Self::Debug),
            "info" => Ok(Self::Info),
            "warn" => Ok(Self::Warn),
            "error" => Ok(Self::Error),
            other => Err(ConfigError::InvalidValue {
                key: "logging.level".to_string(),
                value: other.to_string(),
                valid: VALID_LOG_LEVELS.join(", "),
            }),
        }
    }
}

/// Event line format.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    /// `2024-01-01T00:00:00Z  INFO found environment application=...`
    Text,
    /// One JSON object per event.
    Json,
}

impl FromStr for LogFormat {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "text" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            other => Err(ConfigError::InvalidValue {
                key: "logging.format".to_string(),
                value: other.to_string(),
                valid: VALID_LOG_FORMATS.join(", "),
            }),
        }
    }
}

/// Where log events are written.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogSink {
    #[default]
    Stderr,
    Stdout,
}

/// Everything needed to build the subscriber.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoggingOptions {
    pub level: LogLevel,
    pub format: LogFormat,
    pub sink: LogSink,
}

impl Default for LoggingOptions {
    fn default() -> Self {
        Self {
            level: LogLevel::Info,
            format: LogFormat::Text,
            sink: LogSink::Stderr,
        }
    }
}

/// Filter directives for `level`, with SDK internals held at `warn` unless
/// the requested level is already stricter.
#[must_use]
pub fn filter_directives(level: LogLevel) -> String {
    let mut directives = vec![level.as_str().to_string()];
    if matches!(level, LogLevel::Trace | LogLevel::Debug | LogLevel::Info) {
        directives.extend(QUIET_TARGETS.iter().map(|t| format!("{t}=warn")));
    }
    directives.join(",")
}

/// Install the global subscriber.
///
/// # Errors
///
/// Returns an error if a global subscriber is already installed.
pub fn init(options: LoggingOptions) -> Result<()> {
    let filter = EnvFilter::new(filter_directives(options.level));
    let writer = match options.sink {
        LogSink::Stderr => BoxMakeWriter::new(std::io::stderr),
        LogSink::Stdout => BoxMakeWriter::new(std::io::stdout),
    };
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(writer)
        .with_target(false);
    let installed = match options.format {
        LogFormat::Text => builder.try_init(),
        LogFormat::Json => builder.json().try_init(),
    };
    installed.map_err(|e| anyhow::anyhow!("cannot install logger: {e}"))
}
