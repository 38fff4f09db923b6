//! `beanstalk-cleaner clean`: terminate stale environments.

use anyhow::Result;
use clap::Args;
use tracing::info;

use crate::app::AppContext;
use crate::application::services::reconcile::{self, ReconcileOptions};
use crate::commands::AwsArgs;
use crate::infra::aws::AwsCloud;
use crate::output::{SilentReporter, TerminalReporter};

/// Arguments for the clean command.
#[derive(Args, Debug, Default)]
pub struct CleanArgs {
    /// Log the termination commands instead of running them
    #[arg(long = "test", visible_alias = "dry-run")]
    pub dry_run: bool,

    /// Request termination of the oldest instance in each live environment
    /// (not implemented: instances are only inspected)
    #[arg(long, overrides_with = "no_kill_oldest_instance")]
    pub kill_oldest_instance: bool,

    /// Never touch instances of live environments
    #[arg(long, overrides_with = "kill_oldest_instance")]
    pub no_kill_oldest_instance: bool,

    #[command(flatten)]
    pub aws: AwsArgs,
}

impl CleanArgs {
    /// Kill-oldest switch as given on the command line, if given at all.
    #[must_use]
    pub fn kill_oldest_flag(&self) -> Option<bool> {
        if self.kill_oldest_instance {
            Some(true)
        } else if self.no_kill_oldest_instance {
            Some(false)
        } else {
            None
        }
    }
}

/// Run `beanstalk-cleaner clean`.
///
/// # Errors
///
/// Returns the first AWS API error; the run stops there.
pub async fn run(app: &AppContext, args: &CleanArgs) -> Result<()> {
    let target = app.aws_target(args.aws.profile.as_deref(), args.aws.region.as_deref());
    let options = ReconcileOptions {
        dry_run: args.dry_run,
        kill_oldest_instance: app.kill_oldest_instance(args.kill_oldest_flag()),
        profile: target.profile.clone(),
    };
    info!(
        profile = %target.profile,
        region = target.region.as_deref().unwrap_or("default"),
        dry_run = options.dry_run,
        kill_oldest_instance = options.kill_oldest_instance,
        "starting cleanup"
    );

    let cloud = AwsCloud::connect(&target.profile, target.region.as_deref()).await;
    let report = if app.is_json() {
        reconcile::reconcile(&cloud, &cloud, &options, &SilentReporter).await?
    } else {
        let reporter = TerminalReporter::new(&app.output);
        reconcile::reconcile(&cloud, &cloud, &options, &reporter).await?
    };

    app.renderer().render_report(&report)
}
