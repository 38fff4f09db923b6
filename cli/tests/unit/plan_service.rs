//! Unit tests for the plan use-case.

#![allow(clippy::expect_used)]

use beanstalk_cleaner::application::services::plan::plan;
use beanstalk_cleaner::domain::{Action, EnvironmentStatus};

use crate::mocks::{FailOn, FakeCloud, env, live, stale};

#[tokio::test]
async fn test_plan_classifies_without_acting() {
    let cloud = FakeCloud::new(vec![
        stale("web-old"),
        live("web-prod"),
        env(
            "web",
            "web-new",
            "web-240301-0900-2.us-east-1.elasticbeanstalk.com",
            EnvironmentStatus::Launching,
        ),
    ]);

    let planned = plan(&cloud).await.expect("plan");

    assert_eq!(cloud.calls(), vec!["describe"]);
    let actions: Vec<_> = planned.iter().map(|p| p.action.clone()).collect();
    assert_eq!(
        actions,
        vec![
            Action::Terminate,
            Action::Inspect,
            Action::Skip {
                status: EnvironmentStatus::Launching
            },
        ]
    );
    assert_eq!(planned[0].environment.environment_name, "web-old");
}

#[tokio::test]
async fn test_plan_propagates_listing_error() {
    let cloud = FakeCloud::new(Vec::new()).failing(FailOn::Describe);
    assert!(plan(&cloud).await.is_err());
}
