//! Domain layer: pure business logic, types, and validation.
//!
//! This module has zero imports from `crate::infra`, `crate::commands`,
//! `crate::application`, `tokio`, the AWS SDK, `std::fs`, or `std::process`.
//! All functions are synchronous and take data in, returning data out.

pub mod classify;
pub mod config;
pub mod environment;
pub mod error;
pub mod policy;

pub use classify::{Action, classify, is_stale_cname};
pub use config::CleanerConfig;
pub use environment::{
    EnvironmentDescriptor, EnvironmentStatus, InstanceRef, InstanceStatus, ResourceSet,
};
pub use error::{CloudError, ConfigError};
pub use policy::{PolicyDecision, evaluate_instance_policy};
