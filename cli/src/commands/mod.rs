//! Command implementations

pub mod clean;
pub mod config;
pub mod plan;
pub mod version;

use clap::Args;

/// Account scoping shared by every command that talks to AWS.
#[derive(Args, Debug, Default)]
pub struct AwsArgs {
    /// AWS credentials profile [default: from config, else klue-publish]
    #[arg(long = "aws-profile", env = "AWS_PROFILE")]
    pub profile: Option<String>,

    /// AWS region [default: from config, else the SDK default chain]
    #[arg(long, env = "AWS_REGION")]
    pub region: Option<String>,
}
