//! JSON output helpers.
//!
//! Every `--json` code path prints exactly one pretty-printed JSON document
//! on stdout. Failures use the error object from [`format_error`].

use anyhow::{Context, Result};
use serde::Serialize;

use crate::application::services::plan::PlannedAction;
use crate::application::services::reconcile::RunReport;
use crate::domain::config::CleanerConfig;

/// Format a JSON error object.
///
/// Output (pretty-printed):
/// ```json
/// {
///   "error": true,
///   "message": "...",
///   "code": "..."
/// }
/// ```
///
/// # Errors
///
/// Returns an error if JSON serialization fails.
pub fn format_error(message: &str, code: &str) -> Result<String> {
    let obj = serde_json::json!({
        "error": true,
        "message": message,
        "code": code,
    });
    serde_json::to_string_pretty(&obj).context("JSON serialization failed")
}

/// Serialize a `clean` report together with its summary counts.
///
/// # Errors
///
/// Returns an error if JSON serialization fails.
pub fn format_report(report: &RunReport) -> Result<String> {
    let obj = serde_json::json!({
        "dry_run": report.dry_run,
        "profile": report.profile,
        "summary": report.summary(),
        "environments": report.environments,
    });
    serde_json::to_string_pretty(&obj).context("JSON serialization failed")
}

fn pretty<T: Serialize + ?Sized>(value: &T) -> Result<String> {
    serde_json::to_string_pretty(value).context("JSON serialization failed")
}

/// Machine-readable renderer for `--json`.
pub struct JsonRenderer;

impl JsonRenderer {
    /// Print `{"version": "..."}`.
    ///
    /// # Errors
    ///
    /// Returns an error if JSON serialization fails.
    pub fn render_version(&self, version: &str) -> Result<()> {
        println!("{}", pretty(&serde_json::json!({ "version": version }))?);
        Ok(())
    }

    /// Print the run report.
    ///
    /// # Errors
    ///
    /// Returns an error if JSON serialization fails.
    pub fn render_report(&self, report: &RunReport) -> Result<()> {
        println!("{}", format_report(report)?);
        Ok(())
    }

    /// Print the planned actions as an array.
    ///
    /// # Errors
    ///
    /// Returns an error if JSON serialization fails.
    pub fn render_plan(&self, planned: &[PlannedAction]) -> Result<()> {
        println!("{}", pretty(planned)?);
        Ok(())
    }

    /// Print the configuration and its path.
    ///
    /// # Errors
    ///
    /// Returns an error if JSON serialization fails.
    pub fn render_config(&self, config: &CleanerConfig, path: &std::path::Path) -> Result<()> {
        let obj = serde_json::json!({
            "path": path.display().to_string(),
            "config": config,
        });
        println!("{}", pretty(&obj)?);
        Ok(())
    }
}
