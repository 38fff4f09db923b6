//! Environment and instance snapshot types.
//!
//! Values here are built by the cloud adapter from a single API response and
//! never outlive one run of the cleaner.

use std::fmt;

use serde::{Deserialize, Serialize};

// ── Environment status ───────────────────────────────────────────────────────

/// Lifecycle status reported by Elastic Beanstalk for an environment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(into = "String", from = "String")]
pub enum EnvironmentStatus {
    Launching,
    Updating,
    Ready,
    Terminating,
    Terminated,
    Aborting,
    LinkingFrom,
    LinkingTo,
    /// A status string this tool does not know about.
    Other(String),
}

impl EnvironmentStatus {
    /// Parse the wire value returned by the API.
    #[must_use]
    pub fn parse(value: &str) -> Self {
        match value {
            "Launching" => Self::Launching,
            "Updating" => Self::Updating,
            "Ready" => Self::Ready,
            "Terminating" => Self::Terminating,
            "Terminated" => Self::Terminated,
            "Aborting" => Self::Aborting,
            "LinkingFrom" => Self::LinkingFrom,
            "LinkingTo" => Self::LinkingTo,
            other => Self::Other(other.to_string()),
        }
    }

    /// Wire value of this status.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Launching => "Launching",
            Self::Updating => "Updating",
            Self::Ready => "Ready",
            Self::Terminating => "Terminating",
            Self::Terminated => "Terminated",
            Self::Aborting => "Aborting",
            Self::LinkingFrom => "LinkingFrom",
            Self::LinkingTo => "LinkingTo",
            Self::Other(s) => s,
        }
    }

    #[must_use]
    pub fn is_ready(&self) -> bool {
        *self == Self::Ready
    }
}

impl fmt::Display for EnvironmentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<String> for EnvironmentStatus {
    fn from(value: String) -> Self {
        Self::parse(&value)
    }
}

impl From<EnvironmentStatus> for String {
    fn from(value: EnvironmentStatus) -> Self {
        value.as_str().to_string()
    }
}

// ── Environment descriptor ───────────────────────────────────────────────────

/// Immutable snapshot of one environment from `DescribeEnvironments`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnvironmentDescriptor {
    pub application_name: String,
    pub environment_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub environment_id: Option<String>,
    pub version_label: String,
    pub cname: String,
    pub status: EnvironmentStatus,
}

// ── Resources and instances ──────────────────────────────────────────────────

/// Reference to an EC2 instance backing an environment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InstanceRef {
    pub id: String,
}

/// Instances attached to an environment, in API order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResourceSet {
    pub instances: Vec<InstanceRef>,
}

impl ResourceSet {
    #[must_use]
    pub fn len(&self) -> usize {
        self.instances.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.instances.is_empty()
    }
}

/// Result of an EC2 `DescribeInstanceStatus` lookup for one instance.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InstanceStatus {
    pub instance_id: String,
    /// EC2 state name, e.g. `running`. `unknown` when EC2 returned no entry.
    pub state: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub availability_zone: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub system_status: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub instance_status: Option<String>,
}

impl InstanceStatus {
    /// Placeholder for an instance EC2 reported nothing about.
    #[must_use]
    pub fn unknown(instance_id: &str) -> Self {
        Self {
            instance_id: instance_id.to_string(),
            state: "unknown".to_string(),
            availability_zone: None,
            system_status: None,
            instance_status: None,
        }
    }
}
