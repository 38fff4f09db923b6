//! Application context: unified state passed to every command handler.
//!
//! `AppContext` is built once from the top-level flags and the config file,
//! and resolves the effective settings (flag > environment > config > default)
//! so command handlers never look at more than one source.

use anyhow::Result;

use crate::application::ports::ConfigStore;
use crate::domain::config::CleanerConfig;
use crate::infra::config::YamlConfigStore;
use crate::infra::logging::{LogFormat, LogLevel, LogSink, LoggingOptions};
use crate::output::{HumanRenderer, JsonRenderer, OutputContext, Renderer};

/// Output rendering mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputMode {
    /// Human-readable terminal output (default).
    Human,
    /// Machine-readable JSON output.
    Json,
}

/// Output rendering flags.
pub struct OutputFlags {
    /// Disable ANSI color output.
    pub no_color: bool,
    /// Suppress non-error output.
    pub quiet: bool,
    /// Enable JSON output mode.
    pub json: bool,
}

/// Logging overrides from the command line or environment.
#[derive(Default)]
pub struct LoggingFlags {
    pub level: Option<String>,
    pub format: Option<String>,
}

/// Flags passed from the top-level CLI to `AppContext::new`.
pub struct AppFlags {
    /// Output rendering options.
    pub output: OutputFlags,
    /// Logging options.
    pub logging: LoggingFlags,
}

/// Account and region every cloud call is scoped to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AwsTarget {
    pub profile: String,
    pub region: Option<String>,
}

/// Unified application context passed to every command handler.
pub struct AppContext {
    /// Terminal output context (colors, quiet mode).
    pub output: OutputContext,
    /// Output rendering mode (human vs JSON).
    pub mode: OutputMode,
    /// Where configuration is read from and written to.
    pub config_store: YamlConfigStore,
    /// Configuration loaded at startup.
    pub config: CleanerConfig,
    logging: LoggingFlags,
}

impl AppContext {
    /// Construct an `AppContext` from top-level CLI flags.
    ///
    /// # Errors
    ///
    /// Returns an error if the config file exists but cannot be read or parsed.
    pub fn new(flags: AppFlags) -> Result<Self> {
        Self::with_store(flags, YamlConfigStore::new())
    }

    /// Construct an `AppContext` reading configuration from `store`.
    ///
    /// # Errors
    ///
    /// Returns an error if the config file exists but cannot be read or parsed.
    pub fn with_store(flags: AppFlags, store: YamlConfigStore) -> Result<Self> {
        let mode = if flags.output.json {
            OutputMode::Json
        } else {
            OutputMode::Human
        };
        let config = store.load()?;
        Ok(Self {
            output: OutputContext::new(flags.output.no_color, flags.output.quiet),
            mode,
            config_store: store,
            config,
            logging: flags.logging,
        })
    }

    /// Returns `true` when JSON output mode is active.
    #[must_use]
    pub fn is_json(&self) -> bool {
        self.mode == OutputMode::Json
    }

    /// Returns the appropriate `Renderer` variant for the current output mode.
    #[must_use]
    pub fn renderer(&self) -> Renderer<'_> {
        match self.mode {
            OutputMode::Human => Renderer::Human(HumanRenderer::new(&self.output)),
            OutputMode::Json => Renderer::Json(JsonRenderer),
        }
    }

    /// Effective logger settings. Events always go to stderr.
    ///
    /// # Errors
    ///
    /// Returns an error if the level or format is not recognised.
    pub fn logging_options(&self) -> Result<LoggingOptions> {
        let level = self
            .logging
            .level
            .as_deref()
            .unwrap_or(&self.config.logging.level);
        let format = self
            .logging
            .format
            .as_deref()
            .unwrap_or(&self.config.logging.format);
        Ok(LoggingOptions {
            level: level.parse::<LogLevel>()?,
            format: format.parse::<LogFormat>()?,
            sink: LogSink::Stderr,
        })
    }

    /// Profile and region, falling back to the config file.
    #[must_use]
    pub fn aws_target(&self, profile: Option<&str>, region: Option<&str>) -> AwsTarget {
        AwsTarget {
            profile: profile.map_or_else(|| self.config.aws.profile.clone(), str::to_string),
            region: region
                .map(str::to_string)
                .or_else(|| self.config.aws.region.clone()),
        }
    }

    /// Kill-oldest-instance switch, falling back to the config file.
    #[must_use]
    pub fn kill_oldest_instance(&self, flag: Option<bool>) -> bool {
        flag.unwrap_or(self.config.policy.kill_oldest_instance)
    }
}
