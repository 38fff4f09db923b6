//! `beanstalk-cleaner plan`: classify environments without acting on them.

use anyhow::Result;
use clap::Args;

use crate::app::AppContext;
use crate::application::services::plan;
use crate::commands::AwsArgs;
use crate::infra::aws::AwsCloud;

/// Arguments for the plan command.
#[derive(Args, Debug, Default)]
pub struct PlanArgs {
    #[command(flatten)]
    pub aws: AwsArgs,
}

/// Run `beanstalk-cleaner plan`.
///
/// # Errors
///
/// Returns an error if environments cannot be listed.
pub async fn run(app: &AppContext, args: &PlanArgs) -> Result<()> {
    let target = app.aws_target(args.aws.profile.as_deref(), args.aws.region.as_deref());
    let cloud = AwsCloud::connect(&target.profile, target.region.as_deref()).await;
    let planned = plan::plan(&cloud).await?;
    app.renderer().render_plan(&planned)
}
