//! Driving port for issue mutations.
//!
//! Inbound adapters call this port with already-parsed requests and receive
//! either the resulting issue snapshot or a transport-agnostic [`Error`].

use async_trait::async_trait;

use crate::domain::{Error, Issue, IssueChanges, IssueId, NewIssue};

/// Domain use-case port for opening and updating issues.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait IssuesCommand: Send + Sync {
    /// Open a new issue, deriving its initial status from the assignee.
    async fn create_issue(&self, issue: NewIssue) -> Result<Issue, Error>;

    /// Apply a partial update to an existing issue.
    ///
    /// Fails with `not_found` for unknown issues or assignees, `conflict`
    /// for completed or cancelled issues and `invalid_request` for unknown
    /// statuses or transitions that would leave active work unassigned.
    async fn update_issue(&self, id: IssueId, changes: IssueChanges) -> Result<Issue, Error>;
}
