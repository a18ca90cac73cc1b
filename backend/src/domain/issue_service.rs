//! Issue domain service.
//!
//! Implements the issue driving ports on top of an [`IssueRegistry`] and
//! translates registry failures into API errors.

use std::sync::Arc;

use async_trait::async_trait;
use serde_json::json;
use tracing::{debug, info, warn};

use crate::domain::ports::{IssueRegistry, IssueRegistryError, IssuesCommand, IssuesQuery};
use crate::domain::{Error, Issue, IssueChanges, IssueId, NewIssue};

fn map_registry_error(error: IssueRegistryError) -> Error {
    let reason = error.reason();
    let message = error.to_string();
    let mapped = match error {
        IssueRegistryError::UserNotFound { .. } | IssueRegistryError::IssueNotFound { .. } => {
            Error::not_found(message)
        }
        IssueRegistryError::IssueLocked { .. } => Error::conflict(message),
        IssueRegistryError::InvalidStatus { .. }
        | IssueRegistryError::InvalidStateTransition { .. } => Error::invalid_request(message),
    };
    mapped.with_details(json!({ "reason": reason }))
}

/// Issue service implementing both issue driving ports.
#[derive(Clone)]
pub struct IssueService<R> {
    registry: Arc<R>,
}

impl<R> IssueService<R> {
    /// Create a service backed by `registry`.
    pub fn new(registry: Arc<R>) -> Self {
        Self { registry }
    }
}

#[async_trait]
impl<R> IssuesCommand for IssueService<R>
where
    R: IssueRegistry,
{
    async fn create_issue(&self, issue: NewIssue) -> Result<Issue, Error> {
        let created = self.registry.create(issue).map_err(|err| {
            warn!(reason = err.reason(), "issue creation rejected");
            map_registry_error(err)
        })?;
        info!(issue_id = %created.id, status = %created.status, "issue created");
        Ok(created)
    }

    async fn update_issue(&self, id: IssueId, changes: IssueChanges) -> Result<Issue, Error> {
        let updated = self.registry.update(id, changes).map_err(|err| {
            warn!(issue_id = %id, reason = err.reason(), "issue update rejected");
            map_registry_error(err)
        })?;
        info!(issue_id = %updated.id, status = %updated.status, "issue updated");
        Ok(updated)
    }
}

#[async_trait]
impl<R> IssuesQuery for IssueService<R>
where
    R: IssueRegistry,
{
    async fn get_issue(&self, id: IssueId) -> Result<Issue, Error> {
        self.registry.get(id).map_err(map_registry_error)
    }

    async fn list_issues(&self, status: Option<String>) -> Result<Vec<Issue>, Error> {
        let issues = self
            .registry
            .list(status.as_deref())
            .map_err(map_registry_error)?;
        debug!(count = issues.len(), filter = ?status, "issues listed");
        Ok(issues)
    }
}

#[cfg(test)]
#[path = "issue_service_tests.rs"]
mod tests;
