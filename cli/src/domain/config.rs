//! Domain types and validators for cleaner configuration.
//!
//! Pure functions only: no I/O, no async, no filesystem access.

use anyhow::Result;
use serde::{Deserialize, Serialize};

use crate::domain::error::ConfigError;

// ── Constants ────────────────────────────────────────────────────────────────

pub const VALID_CONFIG_KEYS: &[&str] = &[
    "aws.profile",
    "aws.region",
    "policy.kill_oldest_instance",
    "logging.level",
    "logging.format",
];
pub const VALID_LOG_LEVELS: &[&str] = &["trace", "debug", "info", "warn", "error"];
pub const VALID_LOG_FORMATS: &[&str] = &["text", "json"];
const VALID_BOOLS: &[&str] = &["true", "false"];

/// Profile used when neither the CLI, the environment, nor the config file names one.
pub const DEFAULT_AWS_PROFILE: &str = "klue-publish";

// ── Config schema ────────────────────────────────────────────────────────────

/// Top-level configuration stored in `~/.beanstalk-cleaner/config.yaml`.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(default)]
pub struct CleanerConfig {
    pub aws: AwsConfig,
    pub policy: PolicyConfig,
    pub logging: LoggingConfig,
}

/// AWS account scoping.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct AwsConfig {
    /// Named credentials profile.
    pub profile: String,
    /// Region override; the SDK default chain applies when unset.
    pub region: Option<String>,
}

impl Default for AwsConfig {
    fn default() -> Self {
        Self {
            profile: DEFAULT_AWS_PROFILE.to_string(),
            region: None,
        }
    }
}

/// Live-environment instance policy.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(default)]
pub struct PolicyConfig {
    pub kill_oldest_instance: bool,
}

/// Log level and format for the tracing subscriber.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct LoggingConfig {
    /// One of `trace`, `debug`, `info` (default), `warn`, `error`.
    pub level: String,
    /// `text` (default) or `json`.
    pub format: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: "text".to_string(),
        }
    }
}

// ── Validators ───────────────────────────────────────────────────────────────

/// Validates a configuration key against the whitelist.
///
/// # Errors
///
/// Returns an error if the key is not in the allowed list.
pub fn validate_config_key(key: &str) -> Result<()> {
    if !VALID_CONFIG_KEYS.contains(&key) {
        return Err(ConfigError::UnknownKey {
            key: key.to_string(),
            valid: VALID_CONFIG_KEYS.join(", "),
        }
        .into());
    }
    Ok(())
}

/// Validates a configuration value for the given key.
///
/// # Errors
///
/// Returns an error if the value is not valid for the key.
pub fn validate_config_value(key: &str, value: &str) -> Result<()> {
    let allowed = match key {
        "policy.kill_oldest_instance" => Some(VALID_BOOLS),
        "logging.level" => Some(VALID_LOG_LEVELS),
        "logging.format" => Some(VALID_LOG_FORMATS),
        _ => None,
    };
    if let Some(allowed) = allowed {
        if !allowed.contains(&value) {
            return Err(invalid(key, value, &allowed.join(", ")));
        }
        return Ok(());
    }
    if value.is_empty() || value.chars().any(char::is_whitespace) {
        return Err(invalid(key, value, "a non-empty name without spaces"));
    }
    Ok(())
}

/// Validate `key`/`value` and write the value into `config`.
///
/// # Errors
///
/// Returns an error if the key or value is invalid.
pub fn apply_config_value(config: &mut CleanerConfig, key: &str, value: &str) -> Result<()> {
    validate_config_key(key)?;
    validate_config_value(key, value)?;
    match key {
        "aws.profile" => config.aws.profile = value.to_string(),
        "aws.region" => config.aws.region = Some(value.to_string()),
        "policy.kill_oldest_instance" => config.policy.kill_oldest_instance = value == "true",
        "logging.level" => config.logging.level = value.to_string(),
        "logging.format" => config.logging.format = value.to_string(),
        _ => anyhow::bail!("Unknown setting: {key}"),
    }
    Ok(())
}

fn invalid(key: &str, value: &str, valid: &str) -> anyhow::Error {
    ConfigError::InvalidValue {
        key: key.to_string(),
        value: value.to_string(),
        valid: valid.to_string(),
    }
    .into()
}

// ── Unit tests ───────────────────────────────────────────────────────────────
