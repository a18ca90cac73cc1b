//! Driving port for issue reads.

use async_trait::async_trait;

use crate::domain::{Error, Issue, IssueId};

/// Domain use-case port for reading issues.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait IssuesQuery: Send + Sync {
    /// Fetch a single issue.
    async fn get_issue(&self, id: IssueId) -> Result<Issue, Error>;

    /// List issues, optionally restricted to one status.
    ///
    /// `None` and `Some("")` both mean "no filter".
    async fn list_issues(&self, status: Option<String>) -> Result<Vec<Issue>, Error>;
}
