//! Human-readable terminal renderer.

use owo_colors::OwoColorize as _;

use crate::application::services::plan::PlannedAction;
use crate::application::services::reconcile::{EnvironmentOutcome, Outcome, RunReport, RunSummary};
use crate::domain::config::CleanerConfig;
use crate::domain::PolicyDecision;
use crate::infra::config::CONFIG_ENV_VAR;
use crate::output::OutputContext;

/// Renders domain types as human-readable terminal output using `OutputContext`.
pub struct HumanRenderer<'a> {
    ctx: &'a OutputContext,
}

impl<'a> HumanRenderer<'a> {
    /// Create a new `HumanRenderer` wrapping the given output context.
    #[must_use]
    pub fn new(ctx: &'a OutputContext) -> Self {
        Self { ctx }
    }

    /// Render the CLI version.
    pub fn render_version(&self, version: &str) {
        println!("beanstalk-cleaner {version}");
    }

    /// Render the outcome of a `clean` run.
    pub fn render_report(&self, report: &RunReport) {
        if report.environments.is_empty() {
            self.ctx.info(&format!(
                "No environments found for profile '{}'",
                report.profile
            ));
            return;
        }

        if !self.ctx.quiet {
            println!();
        }
        self.ctx.header(&format!("Environments ({})", report.profile));
        for env in &report.environments {
            let line = format_outcome_line(env);
            match &env.outcome {
                Outcome::Terminated => self.ctx.success(&line),
                Outcome::WouldTerminate { .. } => self.ctx.warn(&line),
                Outcome::Inspected {
                    policy: PolicyDecision::KillOldestNotImplemented { .. },
                    ..
                } => self.ctx.warn(&line),
                Outcome::Skipped { .. } | Outcome::Inspected { .. } => self.ctx.info(&line),
            }
            if let Outcome::Inspected { instances, .. } = &env.outcome {
                for instance in instances {
                    self.ctx.kv(
                        &format!("    {}", instance.instance_id),
                        &format!(
                            "{} (system: {}, instance: {})",
                            instance.state,
                            instance.system_status.as_deref().unwrap_or("-"),
                            instance.instance_status.as_deref().unwrap_or("-"),
                        ),
                    );
                }
            }
        }
        if !self.ctx.quiet {
            println!();
        }
        self.ctx
            .kv("Summary:", &format_summary(report.summary(), report.dry_run));
    }

    /// Render the classification preview.
    pub fn render_plan(&self, planned: &[PlannedAction]) {
        if planned.is_empty() {
            self.ctx.info("No environments found");
            return;
        }
        for p in planned {
            let label = format!("{:<10}", p.action.label());
            println!(
                "  {} {}/{}  {}  [{}]",
                label.style(self.ctx.styles.action(&p.action)),
                p.environment.application_name,
                p.environment.environment_name,
                p.environment.cname,
                p.environment.status,
            );
        }
    }

    /// Render the current configuration.
    pub fn render_config(&self, config: &CleanerConfig, path: &std::path::Path) {
        println!();
        println!(
            "  {}",
            format!("Configuration ({})", path.display()).style(self.ctx.styles.header)
        );
        println!();
        println!("  {:<30} {}", "aws.profile:", config.aws.profile);
        println!(
            "  {:<30} {}",
            "aws.region:",
            config.aws.region.as_deref().unwrap_or("(sdk default)")
        );
        println!(
            "  {:<30} {}",
            "policy.kill_oldest_instance:", config.policy.kill_oldest_instance
        );
        println!("  {:<30} {}", "logging.level:", config.logging.level);
        println!("  {:<30} {}", "logging.format:", config.logging.format);
        println!();
        println!("  {}", "Environment:".style(self.ctx.styles.bold));
        for var in [CONFIG_ENV_VAR, "AWS_PROFILE", "AWS_REGION", "NO_COLOR"] {
            println!(
                "    {:<28} {}",
                format!("{var}:"),
                std::env::var(var).unwrap_or_else(|_| "(not set)".to_string())
            );
        }
        println!();
    }
}

// ── Display helpers ───────────────────────────────────────────────────────────

/// One-line description of what happened to an environment.
#[must_use]
pub fn format_outcome_line(env: &EnvironmentOutcome) -> String {
    let name = format!("{}/{}", env.application_name, env.environment_name);
    match &env.outcome {
        Outcome::Skipped { status } => format!("{name}: skipped (status {status})"),
        Outcome::Terminated => format!("{name}: terminated ({})", env.cname),
        Outcome::WouldTerminate { command } => format!("{name}: would run '{command}'"),
        Outcome::Inspected { policy, .. } => match policy {
            PolicyDecision::TooFewInstances { count } => {
                format!("{name}: live, {} - not touching it", instances(*count))
            }
            PolicyDecision::InspectOnly { count } => {
                format!("{name}: live, {} - nothing to do", instances(*count))
            }
            PolicyDecision::KillOldestNotImplemented { count } => format!(
                "{name}: live, {} - kill-oldest-instance not implemented",
                instances(*count)
            ),
        },
    }
}

/// Totals line printed after the per-environment list.
#[must_use]
pub fn format_summary(summary: RunSummary, dry_run: bool) -> String {
    let removed = if dry_run {
        format!("{} would be terminated", summary.would_terminate)
    } else {
        format!("{} terminated", summary.terminated)
    };
    format!(
        "{removed}, {} live, {} skipped",
        summary.inspected, summary.skipped
    )
}

fn instances(count: usize) -> String {
    let noun = if count == 1 { "instance" } else { "instances" };
    format!("{count} {noun}")
}
