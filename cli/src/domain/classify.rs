//! Live/stale classification of Elastic Beanstalk environments.
//!
//! Every blue/green deploy creates a fresh environment whose CNAME is
//! `<application>-YYMMDD-HHMM-<n>.<region>.elasticbeanstalk.com`. After the
//! CNAME swap the live environment answers on the stable name and the
//! timestamped slot is left behind. That naming convention is the only
//! signal used to tell the two apart.

#![allow(clippy::expect_used)] // Pattern is a compile-time constant

use std::sync::LazyLock;

use regex::Regex;
use serde::Serialize;

use crate::domain::environment::{EnvironmentDescriptor, EnvironmentStatus};

/// Suffix that follows the application name in a stale CNAME:
/// six digits, dash, four digits, dash, one or more digits, dot.
static STALE_SUFFIX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^-\d{6}-\d{4}-\d+\.").expect("valid stale suffix pattern"));

/// What the reconciler should do with one environment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum Action {
    /// Environment is not `Ready`; leave it alone.
    Skip { status: EnvironmentStatus },
    /// Ready, auto-named slot left over from a superseded deploy.
    Terminate,
    /// Ready, serving on the stable CNAME.
    Inspect,
}

impl Action {
    /// Short lowercase label for display.
    #[must_use]
    pub fn label(&self) -> &'static str {
        match self {
            Self::Skip { .. } => "skip",
            Self::Terminate => "terminate",
            Self::Inspect => "inspect",
        }
    }
}

/// Returns `true` when `cname` is an auto-generated slot of `application_name`.
///
/// The application name is matched literally at the start of the CNAME, so
/// names containing pattern metacharacters (`my.app`) never match anything
/// but themselves.
#[must_use]
pub fn is_stale_cname(application_name: &str, cname: &str) -> bool {
    cname
        .strip_prefix(application_name)
        .is_some_and(|rest| STALE_SUFFIX.is_match(rest))
}

/// Decide the action for one environment.
#[must_use]
pub fn classify(env: &EnvironmentDescriptor) -> Action {
    if !env.status.is_ready() {
        return Action::Skip {
            status: env.status.clone(),
        };
    }
    if is_stale_cname(&env.application_name, &env.cname) {
        Action::Terminate
    } else {
        Action::Inspect
    }
}
