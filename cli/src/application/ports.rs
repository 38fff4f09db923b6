//! Port trait definitions for the Application layer.
//!
//! Ports are the interfaces (contracts) that infrastructure must fulfill.
//! This file imports only from `crate::domain`, never from `crate::infra`,
//! `crate::commands`, or `crate::output`.

use std::path::PathBuf;

use anyhow::Result;

use crate::domain::{CleanerConfig, EnvironmentDescriptor, InstanceStatus, ResourceSet};

// ── Cloud API Ports ───────────────────────────────────────────────────────────

/// Elastic Beanstalk environment operations: three reads and one write.
#[allow(async_fn_in_trait)]
pub trait EnvironmentCatalog {
    /// List every environment visible to the configured profile.
    async fn describe_environments(&self) -> Result<Vec<EnvironmentDescriptor>>;
    /// List the instances backing one environment, in API order.
    async fn describe_environment_resources(&self, environment_name: &str)
    -> Result<ResourceSet>;
    /// Terminate one environment. This is the only write the cleaner issues.
    async fn terminate_environment(&self, environment_name: &str) -> Result<()>;
}

/// EC2 instance status lookup.
#[allow(async_fn_in_trait)]
pub trait InstanceStatusSource {
    /// Fetch the current status of one instance.
    async fn describe_instance_status(&self, instance_id: &str) -> Result<InstanceStatus>;
}

// ── Progress Reporting Port ───────────────────────────────────────────────────

/// Abstracts progress reporting so services can emit events without
/// depending on the Presentation layer. Sync trait.
pub trait ProgressReporter {
    /// Emit an in-progress step message.
    fn step(&self, message: &str);
    /// Emit a success message.
    fn success(&self, message: &str);
    /// Emit a warning message.
    fn warn(&self, message: &str);
}

// ── Config Port ───────────────────────────────────────────────────────────────

/// Abstracts configuration persistence.
pub trait ConfigStore {
    /// Load configuration, returning defaults when no file exists.
    fn load(&self) -> Result<CleanerConfig>;
    /// Persist configuration.
    fn save(&self, config: &CleanerConfig) -> Result<()>;
    /// Location of the configuration file.
    fn path(&self) -> Result<PathBuf>;
}
