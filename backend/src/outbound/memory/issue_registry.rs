//! In-memory issue registry.
//!
//! The whole update sequence (lookup, lifecycle planning, write) runs under
//! one write lock, so concurrent updates to the same issue serialise and a
//! rejected update leaves nothing behind.

use std::collections::BTreeMap;
use std::sync::Arc;

use mockable::Clock;
use parking_lot::RwLock;
use tracing::debug;

use crate::domain::issue_lifecycle::{apply_transition, open_issue, parse_status, plan_update};
use crate::domain::ports::{IssueRegistry, IssueRegistryError, UserRegistry};
use crate::domain::{Issue, IssueChanges, IssueId, IssueRecord, NewIssue};

#[derive(Debug)]
struct IssueTable {
    issues: BTreeMap<IssueId, IssueRecord>,
    next_id: IssueId,
}

impl Default for IssueTable {
    fn default() -> Self {
        Self {
            issues: BTreeMap::new(),
            next_id: IssueId::FIRST,
        }
    }
}

/// Issue store resolving assignees through a [`UserRegistry`].
pub struct InMemoryIssueRegistry {
    table: RwLock<IssueTable>,
    users: Arc<dyn UserRegistry>,
    clock: Arc<dyn Clock>,
}

impl InMemoryIssueRegistry {
    /// Empty registry allocating identifiers from 1.
    pub fn new(users: Arc<dyn UserRegistry>, clock: Arc<dyn Clock>) -> Self {
        Self {
            table: RwLock::new(IssueTable::default()),
            users,
            clock,
        }
    }

    fn snapshot(&self, record: &IssueRecord) -> Issue {
        // A stored reference to a vanished user reads back as unassigned.
        let assignee = record.assignee.and_then(|id| self.users.get(id));
        record.snapshot(assignee)
    }
}

impl IssueRegistry for InMemoryIssueRegistry {
    fn create(&self, issue: NewIssue) -> Result<Issue, IssueRegistryError> {
        let mut table = self.table.write();

        if let Some(missing) = issue.assignee.filter(|id| self.users.get(*id).is_none()) {
            return Err(IssueRegistryError::user_not_found(missing));
        }

        let id = table.next_id;
        let record = open_issue(id, issue, self.clock.utc());
        table.next_id = id.next();
        let created = self.snapshot(&record);
        table.issues.insert(id, record);
        debug!(issue_id = %id, "issue stored");
        Ok(created)
    }

    fn get(&self, id: IssueId) -> Result<Issue, IssueRegistryError> {
        let table = self.table.read();
        table
            .issues
            .get(&id)
            .map(|record| self.snapshot(record))
            .ok_or_else(|| IssueRegistryError::issue_not_found(id))
    }

    fn list(&self, status: Option<&str>) -> Result<Vec<Issue>, IssueRegistryError> {
        let wanted = status
            .filter(|raw| !raw.is_empty())
            .map(parse_status)
            .transpose()?;

        let table = self.table.read();
        Ok(table
            .issues
            .values()
            .filter(|record| wanted.is_none_or(|status| record.status == status))
            .map(|record| self.snapshot(record))
            .collect())
    }

    fn update(&self, id: IssueId, changes: IssueChanges) -> Result<Issue, IssueRegistryError> {
        let mut table = self.table.write();
        let record = table
            .issues
            .get_mut(&id)
            .ok_or_else(|| IssueRegistryError::issue_not_found(id))?;

        let plan = plan_update(record, &changes, |user_id| self.users.get(user_id))?;
        apply_transition(record, changes, plan, self.clock.utc());
        Ok(self.snapshot(record))
    }
}

#[cfg(test)]
#[path = "issue_registry_tests.rs"]
mod tests;
