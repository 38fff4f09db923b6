//! Infrastructure implementation of the cloud API ports on the AWS SDK.
//!
//! `AwsCloud` implements `EnvironmentCatalog` over Elastic Beanstalk and
//! `InstanceStatusSource` over EC2. SDK response shapes are mapped to domain
//! types here so nothing above this module sees an SDK type.

use aws_config::{BehaviorVersion, Region};
use aws_sdk_ec2::types as ec2;
use aws_sdk_elasticbeanstalk::error::DisplayErrorContext;
use aws_sdk_elasticbeanstalk::types as eb;
use tracing::debug;

use crate::application::ports::{EnvironmentCatalog, InstanceStatusSource};
use crate::domain::{
    CloudError, EnvironmentDescriptor, EnvironmentStatus, InstanceRef, InstanceStatus,
    ResourceSet,
};

/// Elastic Beanstalk + EC2 clients scoped to one profile and region.
pub struct AwsCloud {
    beanstalk: aws_sdk_elasticbeanstalk::Client,
    ec2: aws_sdk_ec2::Client,
}

impl AwsCloud {
    /// Load credentials for `profile` through the SDK's default chain and
    /// build both clients.
    pub async fn connect(profile: &str, region: Option<&str>) -> Self {
        let mut loader = aws_config::defaults(BehaviorVersion::latest()).profile_name(profile);
        if let Some(region) = region {
            loader = loader.region(Region::new(region.to_string()));
        }
        let shared = loader.load().await;
        debug!(
            profile,
            region = shared.region().map_or("default", |r| r.as_ref()),
            "loaded AWS configuration"
        );
        Self {
            beanstalk: aws_sdk_elasticbeanstalk::Client::new(&shared),
            ec2: aws_sdk_ec2::Client::new(&shared),
        }
    }
}

impl EnvironmentCatalog for AwsCloud {
    async fn describe_environments(&self) -> anyhow::Result<Vec<EnvironmentDescriptor>> {
        let mut environments = Vec::new();
        let mut next_token: Option<String> = None;
        loop {
            let page = self
                .beanstalk
                .describe_environments()
                .set_next_token(next_token.take())
                .send()
                .await
                .map_err(|e| api_error("DescribeEnvironments", e))?;
            environments.extend(page.environments().iter().map(environment_from_sdk));
            match page.next_token() {
                Some(token) if !token.is_empty() => next_token = Some(token.to_string()),
                _ => break,
            }
        }
        Ok(environments)
    }

    async fn describe_environment_resources(
        &self,
        environment_name: &str,
    ) -> anyhow::Result<ResourceSet> {
        let output = self
            .beanstalk
            .describe_environment_resources()
            .environment_name(environment_name)
            .send()
            .await
            .map_err(|e| api_error("DescribeEnvironmentResources", e))?;
        let resources = output
            .environment_resources()
            .ok_or(CloudError::MissingField {
                operation: "DescribeEnvironmentResources",
                field: "EnvironmentResources",
            })?;
        Ok(resources_from_sdk(resources))
    }

    async fn terminate_environment(&self, environment_name: &str) -> anyhow::Result<()> {
        self.beanstalk
            .terminate_environment()
            .environment_name(environment_name)
            .send()
            .await
            .map_err(|e| api_error("TerminateEnvironment", e))?;
        Ok(())
    }
}

impl InstanceStatusSource for AwsCloud {
    async fn describe_instance_status(&self, instance_id: &str) -> anyhow::Result<InstanceStatus> {
        let output = self
            .ec2
            .describe_instance_status()
            .instance_ids(instance_id)
            .include_all_instances(true)
            .send()
            .await
            .map_err(|e| api_error("DescribeInstanceStatus", e))?;
        Ok(output
            .instance_statuses()
            .iter()
            .find(|s| s.instance_id() == Some(instance_id))
            .map_or_else(|| InstanceStatus::unknown(instance_id), instance_status_from_sdk))
    }
}

// ── SDK → domain mapping ──────────────────────────────────────────────────────

fn api_error<E: std::error::Error>(operation: &'static str, err: E) -> CloudError {
    CloudError::Api {
        operation,
        message: DisplayErrorContext(err).to_string(),
    }
}

fn text(value: Option<&str>) -> String {
    value.unwrap_or_default().to_string()
}

pub(crate) fn environment_from_sdk(env: &eb::EnvironmentDescription) -> EnvironmentDescriptor {
    EnvironmentDescriptor {
        application_name: text(env.application_name()),
        environment_name: text(env.environment_name()),
        environment_id: env.environment_id().map(str::to_string),
        version_label: text(env.version_label()),
        cname: text(env.cname()),
        status: EnvironmentStatus::parse(env.status().map_or("", eb::EnvironmentStatus::as_str)),
    }
}

pub(crate) fn resources_from_sdk(resources: &eb::EnvironmentResourceDescription) -> ResourceSet {
    ResourceSet {
        instances: resources
            .instances()
            .iter()
            .filter_map(|i| i.id())
            .map(|id| InstanceRef { id: id.to_string() })
            .collect(),
    }
}

pub(crate) fn instance_status_from_sdk(status: &ec2::InstanceStatus) -> InstanceStatus {
    InstanceStatus {
        instance_id: text(status.instance_id()),
        state: status
            .instance_state()
            .and_then(ec2::InstanceState::name)
            .map_or_else(|| "unknown".to_string(), |n| n.as_str().to_string()),
        availability_zone: status.availability_zone().map(str::to_string),
        system_status: status
            .system_status()
            .and_then(ec2::InstanceStatusSummary::status)
            .map(|s| s.as_str().to_string()),
        instance_status: status
            .instance_status()
            .and_then(ec2::InstanceStatusSummary::status)
            .map(|s| s.as_str().to_string()),
    }
}
