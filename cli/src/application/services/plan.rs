//! Application service: read-only classification preview.

use anyhow::{Context, Result};
use serde::Serialize;

use crate::application::ports::EnvironmentCatalog;
use crate::domain::{Action, EnvironmentDescriptor, classify};

/// One environment with the action `clean` would take on it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PlannedAction {
    pub environment: EnvironmentDescriptor,
    #[serde(flatten)]
    pub action: Action,
}

/// Classify every environment without issuing any further call.
///
/// # Errors
///
/// Returns an error if the environments cannot be listed.
pub async fn plan(catalog: &impl EnvironmentCatalog) -> Result<Vec<PlannedAction>> {
    let environments = catalog
        .describe_environments()
        .await
        .context("cannot list environments")?;
    Ok(environments
        .into_iter()
        .map(|environment| PlannedAction {
            action: classify(&environment),
            environment,
        })
        .collect())
}
