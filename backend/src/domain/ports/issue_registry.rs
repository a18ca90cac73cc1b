//! Driven port for the issue store and its typed failures.

use crate::domain::{Issue, IssueChanges, IssueId, IssueStatus, NewIssue, UserId};

use super::define_port_error;

define_port_error! {
    /// Failures raised by issue registry operations.
    ///
    /// Every failure leaves the store exactly as it was before the call.
    pub enum IssueRegistryError {
        /// The referenced assignee does not exist.
        UserNotFound { user_id: UserId } => "user not found",
        /// The referenced issue does not exist.
        IssueNotFound { issue_id: IssueId } => "issue not found",
        /// A status string is not one of the recognised values.
        InvalidStatus { value: String } => "invalid status",
        /// The issue is completed or cancelled and cannot change.
        IssueLocked { issue_id: IssueId, status: IssueStatus } =>
            "cannot update completed or cancelled issue",
        /// The resulting status would need an assignee the issue lacks.
        InvalidStateTransition { status: IssueStatus } =>
            "cannot set status to {status} without assignee",
    }
}

impl IssueRegistryError {
    /// Stable snake_case tag naming the failure kind.
    #[must_use]
    pub const fn reason(&self) -> &'static str {
        match self {
            Self::UserNotFound { .. } => "user_not_found",
            Self::IssueNotFound { .. } => "issue_not_found",
            Self::InvalidStatus { .. } => "invalid_status",
            Self::IssueLocked { .. } => "issue_locked",
            Self::InvalidStateTransition { .. } => "invalid_state_transition",
        }
    }
}

/// Issue store enforcing the status/assignment lifecycle.
///
/// Implementations must run each mutation as one atomic step: no reader may
/// observe a half-applied update and a failed call must not write anything.
pub trait IssueRegistry: Send + Sync {
    /// Open an issue. Its initial status is `IN_PROGRESS` when an assignee
    /// is given and resolves, `PENDING` otherwise.
    fn create(&self, issue: NewIssue) -> Result<Issue, IssueRegistryError>;

    /// Fetch one issue.
    fn get(&self, id: IssueId) -> Result<Issue, IssueRegistryError>;

    /// Issues whose status matches `status`, or all of them when the filter
    /// is absent or empty. Order is unspecified.
    fn list(&self, status: Option<&str>) -> Result<Vec<Issue>, IssueRegistryError>;

    /// Apply a partial update under the lifecycle rules.
    fn update(&self, id: IssueId, changes: IssueChanges) -> Result<Issue, IssueRegistryError>;
}
