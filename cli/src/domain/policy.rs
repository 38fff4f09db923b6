//! Instance-count policy for live environments.

use serde::Serialize;

/// Environments with fewer instances than this are never touched, so the
/// policy can't take down an environment's last instance.
pub const MIN_INSTANCES_FOR_POLICY: usize = 2;

/// Outcome of evaluating the instance policy for one live environment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "decision", rename_all = "snake_case")]
pub enum PolicyDecision {
    /// Not enough redundant capacity; nothing is looked up or changed.
    TooFewInstances { count: usize },
    /// Instances are inspected and reported; nothing is terminated.
    InspectOnly { count: usize },
    /// Kill-oldest was requested, but oldest-instance selection does not
    /// exist yet. Instances are inspected and reported; nothing is terminated.
    KillOldestNotImplemented { count: usize },
}

impl PolicyDecision {
    /// Whether instance statuses should be fetched for this decision.
    #[must_use]
    pub fn inspects_instances(self) -> bool {
        !matches!(self, Self::TooFewInstances { .. })
    }

    #[must_use]
    pub fn instance_count(self) -> usize {
        match self {
            Self::TooFewInstances { count }
            | Self::InspectOnly { count }
            | Self::KillOldestNotImplemented { count } => count,
        }
    }
}

/// Evaluate the policy for a live environment with `instance_count` instances.
#[must_use]
pub fn evaluate_instance_policy(instance_count: usize, kill_oldest: bool) -> PolicyDecision {
    if instance_count < MIN_INSTANCES_FOR_POLICY {
        PolicyDecision::TooFewInstances {
            count: instance_count,
        }
    } else if kill_oldest {
        PolicyDecision::KillOldestNotImplemented {
            count: instance_count,
        }
    } else {
        PolicyDecision::InspectOnly {
            count: instance_count,
        }
    }
}
