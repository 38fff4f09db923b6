//! Shared fakes for unit tests.
//!
//! Provides an in-memory [`EnvironmentCatalog`] / [`InstanceStatusSource`]
//! that records every call, plus a reporter that captures messages, so each
//! test file doesn't have to re-define the same boilerplate.

#![allow(clippy::expect_used, dead_code)]

use std::cell::RefCell;
use std::collections::HashMap;
use std::path::PathBuf;

use anyhow::Result;
use beanstalk_cleaner::application::ports::{
    ConfigStore, EnvironmentCatalog, InstanceStatusSource, ProgressReporter,
};
use beanstalk_cleaner::domain::{
    CleanerConfig, EnvironmentDescriptor, EnvironmentStatus, InstanceRef, InstanceStatus,
    ResourceSet,
};

// ── Builders ──────────────────────────────────────────────────────────────────

pub fn env(app: &str, name: &str, cname: &str, status: EnvironmentStatus) -> EnvironmentDescriptor {
    EnvironmentDescriptor {
        application_name: app.to_string(),
        environment_name: name.to_string(),
        environment_id: Some(format!("e-{name}")),
        version_label: format!("{name}-v1"),
        cname: cname.to_string(),
        status,
    }
}

/// A ready environment still answering on a timestamped slot.
pub fn stale(name: &str) -> EnvironmentDescriptor {
    env(
        "web",
        name,
        "web-240115-1030-1.us-east-1.elasticbeanstalk.com",
        EnvironmentStatus::Ready,
    )
}

/// A ready environment answering on the stable name.
pub fn live(name: &str) -> EnvironmentDescriptor {
    env(
        "web",
        name,
        "web.us-east-1.elasticbeanstalk.com",
        EnvironmentStatus::Ready,
    )
}

pub fn running(id: &str) -> InstanceStatus {
    InstanceStatus {
        instance_id: id.to_string(),
        state: "running".to_string(),
        availability_zone: Some("us-east-1a".to_string()),
        system_status: Some("ok".to_string()),
        instance_status: Some("ok".to_string()),
    }
}

// ── Fake cloud ────────────────────────────────────────────────────────────────

/// Which call should fail, if any.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FailOn {
    Nothing,
    Describe,
    Resources(String),
    Terminate(String),
    InstanceStatus(String),
}

/// In-memory cloud that records every call in order.
pub struct FakeCloud {
    environments: Vec<EnvironmentDescriptor>,
    resources: HashMap<String, Vec<String>>,
    fail_on: FailOn,
    pub calls: RefCell<Vec<String>>,
}

impl FakeCloud {
    pub fn new(environments: Vec<EnvironmentDescriptor>) -> Self {
        Self {
            environments,
            resources: HashMap::new(),
            fail_on: FailOn::Nothing,
            calls: RefCell::new(Vec::new()),
        }
    }

    #[must_use]
    pub fn with_instances(mut self, environment: &str, ids: &[&str]) -> Self {
        self.resources.insert(
            environment.to_string(),
            ids.iter().map(ToString::to_string).collect(),
        );
        self
    }

    #[must_use]
    pub fn failing(mut self, fail_on: FailOn) -> Self {
        self.fail_on = fail_on;
        self
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.borrow().clone()
    }

    pub fn terminated(&self) -> Vec<String> {
        self.calls()
            .into_iter()
            .filter_map(|c| c.strip_prefix("terminate:").map(String::from))
            .collect()
    }

    pub fn status_lookups(&self) -> Vec<String> {
        self.calls()
            .into_iter()
            .filter_map(|c| c.strip_prefix("status:").map(String::from))
            .collect()
    }

    fn record(&self, call: String) {
        self.calls.borrow_mut().push(call);
    }
}

impl EnvironmentCatalog for FakeCloud {
    async fn describe_environments(&self) -> Result<Vec<EnvironmentDescriptor>> {
        self.record("describe".to_string());
        if self.fail_on == FailOn::Describe {
            anyhow::bail!("DescribeEnvironments failed: AccessDenied");
        }
        Ok(self.environments.clone())
    }

    async fn describe_environment_resources(&self, environment_name: &str) -> Result<ResourceSet> {
        self.record(format!("resources:{environment_name}"));
        if self.fail_on == FailOn::Resources(environment_name.to_string()) {
            anyhow::bail!("DescribeEnvironmentResources failed: Throttling");
        }
        let instances = self
            .resources
            .get(environment_name)
            .map(|ids| {
                ids.iter()
                    .map(|id| InstanceRef { id: id.clone() })
                    .collect()
            })
            .unwrap_or_default();
        Ok(ResourceSet { instances })
    }

    async fn terminate_environment(&self, environment_name: &str) -> Result<()> {
        self.record(format!("terminate:{environment_name}"));
        if self.fail_on == FailOn::Terminate(environment_name.to_string()) {
            anyhow::bail!("TerminateEnvironment failed: InsufficientPrivileges");
        }
        Ok(())
    }
}

impl InstanceStatusSource for FakeCloud {
    async fn describe_instance_status(&self, instance_id: &str) -> Result<InstanceStatus> {
        self.record(format!("status:{instance_id}"));
        if self.fail_on == FailOn::InstanceStatus(instance_id.to_string()) {
            anyhow::bail!("DescribeInstanceStatus failed: InvalidInstanceID.NotFound");
        }
        Ok(running(instance_id))
    }
}

// ── Reporter ──────────────────────────────────────────────────────────────────

/// Captures reporter messages prefixed by kind.
#[derive(Default)]
pub struct RecordingReporter {
    pub messages: RefCell<Vec<String>>,
}

impl RecordingReporter {
    pub fn warnings(&self) -> Vec<String> {
        self.messages
            .borrow()
            .iter()
            .filter_map(|m| m.strip_prefix("warn:").map(String::from))
            .collect()
    }
}

impl ProgressReporter for RecordingReporter {
    fn step(&self, message: &str) {
        self.messages.borrow_mut().push(format!("step:{message}"));
    }
    fn success(&self, message: &str) {
        self.messages.borrow_mut().push(format!("success:{message}"));
    }
    fn warn(&self, message: &str) {
        self.messages.borrow_mut().push(format!("warn:{message}"));
    }
}

// ── Config store ──────────────────────────────────────────────────────────────

/// Config store backed by a cell; `saves` counts writes.
#[derive(Default)]
pub struct MemoryConfigStore {
    pub config: RefCell<CleanerConfig>,
    pub saves: RefCell<usize>,
}

impl ConfigStore for MemoryConfigStore {
    fn load(&self) -> Result<CleanerConfig> {
        Ok(self.config.borrow().clone())
    }
    fn save(&self, config: &CleanerConfig) -> Result<()> {
        *self.config.borrow_mut() = config.clone();
        *self.saves.borrow_mut() += 1;
        Ok(())
    }
    fn path(&self) -> Result<PathBuf> {
        Ok(PathBuf::from("/nonexistent/config.yaml"))
    }
}
