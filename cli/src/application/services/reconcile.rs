//! Application service: environment reconciliation use-case.
//!
//! Walks every environment once, in API order, and acts on its
//! classification. Calls are issued one at a time and the first failing call
//! aborts the run: environments after the failure are not visited and no
//! partial report is returned.

use anyhow::{Context, Result};
use serde::Serialize;
use tracing::{debug, info, warn};

use crate::application::ports::{EnvironmentCatalog, InstanceStatusSource, ProgressReporter};
use crate::domain::{
    Action, EnvironmentDescriptor, EnvironmentStatus, InstanceStatus, PolicyDecision, classify,
    evaluate_instance_policy,
};

/// Run-wide switches.
#[derive(Debug, Clone)]
pub struct ReconcileOptions {
    /// Log what would be terminated instead of terminating it.
    pub dry_run: bool,
    /// Request the kill-oldest-instance policy on live environments.
    pub kill_oldest_instance: bool,
    /// Credentials profile, echoed in dry-run command lines.
    pub profile: String,
}

/// What happened to one environment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum Outcome {
    Skipped {
        status: EnvironmentStatus,
    },
    Terminated,
    /// Dry run: the equivalent `aws` command line that was not executed.
    WouldTerminate {
        command: String,
    },
    Inspected {
        policy: PolicyDecision,
        instances: Vec<InstanceStatus>,
    },
}

/// Per-environment line of the run report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EnvironmentOutcome {
    pub application_name: String,
    pub environment_name: String,
    pub version_label: String,
    pub cname: String,
    #[serde(flatten)]
    pub outcome: Outcome,
}

/// Result of a complete, successful run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct RunReport {
    pub dry_run: bool,
    pub profile: String,
    pub environments: Vec<EnvironmentOutcome>,
}

/// Outcome counts for summaries.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct RunSummary {
    pub skipped: usize,
    pub terminated: usize,
    pub would_terminate: usize,
    pub inspected: usize,
    pub kill_oldest_pending: usize,
}

impl RunReport {
    #[must_use]
    pub fn summary(&self) -> RunSummary {
        let mut s = RunSummary::default();
        for env in &self.environments {
            match &env.outcome {
                Outcome::Skipped { .. } => s.skipped += 1,
                Outcome::Terminated => s.terminated += 1,
                Outcome::WouldTerminate { .. } => s.would_terminate += 1,
                Outcome::Inspected { policy, .. } => {
                    s.inspected += 1;
                    if matches!(policy, PolicyDecision::KillOldestNotImplemented { .. }) {
                        s.kill_oldest_pending += 1;
                    }
                }
            }
        }
        s
    }
}

/// Equivalent AWS CLI invocation for terminating `environment_name`.
#[must_use]
pub fn terminate_command(environment_name: &str, profile: &str) -> String {
    format!(
        "aws elasticbeanstalk terminate-environment --environment-name {environment_name} --profile {profile}"
    )
}

/// Reconcile every environment visible to the catalog.
///
/// # Errors
///
/// Returns the first error raised by any cloud call.
pub async fn reconcile(
    catalog: &impl EnvironmentCatalog,
    instances: &impl InstanceStatusSource,
    options: &ReconcileOptions,
    reporter: &impl ProgressReporter,
) -> Result<RunReport> {
    let environments = catalog
        .describe_environments()
        .await
        .context("cannot list environments")?;
    info!(count = environments.len(), "described environments");

    let mut report = RunReport {
        dry_run: options.dry_run,
        profile: options.profile.clone(),
        environments: Vec::with_capacity(environments.len()),
    };

    for env in environments {
        info!(
            application = %env.application_name,
            version = %env.version_label,
            cname = %env.cname,
            "found environment"
        );
        let outcome = match classify(&env) {
            Action::Skip { status } => {
                info!(%status, "environment is not ready, ignoring it");
                Outcome::Skipped { status }
            }
            Action::Terminate => terminate(catalog, &env, options, reporter).await?,
            Action::Inspect => inspect(catalog, instances, &env, options, reporter).await?,
        };
        report.environments.push(EnvironmentOutcome {
            application_name: env.application_name,
            environment_name: env.environment_name,
            version_label: env.version_label,
            cname: env.cname,
            outcome,
        });
    }

    Ok(report)
}

async fn terminate(
    catalog: &impl EnvironmentCatalog,
    env: &EnvironmentDescriptor,
    options: &ReconcileOptions,
    reporter: &impl ProgressReporter,
) -> Result<Outcome> {
    info!(environment = %env.environment_name, "environment is not live, terminating it");
    let command = terminate_command(&env.environment_name, &options.profile);

    if options.dry_run {
        debug!(%command, "dry run, would execute");
        reporter.step(&format!("Would terminate {}", env.environment_name));
        return Ok(Outcome::WouldTerminate { command });
    }

    reporter.step(&format!("Terminating {}...", env.environment_name));
    catalog
        .terminate_environment(&env.environment_name)
        .await
        .with_context(|| format!("cannot terminate {}", env.environment_name))?;
    reporter.success(&format!("Terminated {}", env.environment_name));
    Ok(Outcome::Terminated)
}

async fn inspect(
    catalog: &impl EnvironmentCatalog,
    instances: &impl InstanceStatusSource,
    env: &EnvironmentDescriptor,
    options: &ReconcileOptions,
    reporter: &impl ProgressReporter,
) -> Result<Outcome> {
    info!(environment = %env.environment_name, "environment is live, examining its instances");
    let resources = catalog
        .describe_environment_resources(&env.environment_name)
        .await
        .with_context(|| format!("cannot describe resources of {}", env.environment_name))?;

    let policy = evaluate_instance_policy(resources.len(), options.kill_oldest_instance);
    if !policy.inspects_instances() {
        info!(
            instances = resources.len(),
            "environment has too few instances, not touching them"
        );
        return Ok(Outcome::Inspected {
            policy,
            instances: Vec::new(),
        });
    }

    let mut statuses = Vec::with_capacity(resources.len());
    for instance in &resources.instances {
        let status = instances
            .describe_instance_status(&instance.id)
            .await
            .with_context(|| format!("cannot describe instance {}", instance.id))?;
        debug!(
            instance = %status.instance_id,
            state = %status.state,
            system_status = status.system_status.as_deref().unwrap_or("-"),
            instance_status = status.instance_status.as_deref().unwrap_or("-"),
            "instance status"
        );
        statuses.push(status);
    }

    if let PolicyDecision::KillOldestNotImplemented { count } = policy {
        warn!(
            environment = %env.environment_name,
            instances = count,
            "kill-oldest-instance requested but not implemented, leaving instances running"
        );
        reporter.warn(&format!(
            "{}: kill-oldest-instance is not implemented; no instance was terminated",
            env.environment_name
        ));
    }

    info!("nothing to do with this environment");
    Ok(Outcome::Inspected {
        policy,
        instances: statuses,
    })
}
