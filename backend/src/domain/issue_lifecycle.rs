//! Issue status lifecycle.
//!
//! Pure rules deciding the status and assignee an issue ends up with after a
//! create or update request. Storage adapters fetch the current record, ask
//! [`plan_update`] for the outcome and only then write it back, so every
//! rejection happens before anything is mutated.
//!
//! Status rules, in priority order:
//! 1. `COMPLETED` and `CANCELLED` issues never change.
//! 2. Removing the assignee always yields `PENDING`, even when the request
//!    names another status.
//! 3. Assigning someone to a `PENDING` issue moves it to `IN_PROGRESS`,
//!    unless the request names a status explicitly.
//! 4. Otherwise an explicit status wins over the current one.
//!
//! After that, only `PENDING` and `CANCELLED` may be left unassigned.

use chrono::{DateTime, Utc};

use crate::domain::ports::IssueRegistryError;
use crate::domain::{
    AssigneeChange, IssueChanges, IssueId, IssueRecord, IssueStatus, NewIssue, User, UserId,
};

/// Status and assignee an update resolves to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlannedTransition {
    /// Status to store.
    pub status: IssueStatus,
    /// Assignee to store.
    pub assignee: Option<UserId>,
}

/// Status given to a freshly opened issue.
#[must_use]
pub const fn initial_status(has_assignee: bool) -> IssueStatus {
    if has_assignee {
        IssueStatus::InProgress
    } else {
        IssueStatus::Pending
    }
}

/// Build the stored record for a new issue.
///
/// The caller has already resolved `issue.assignee`; the status is derived
/// from its presence.
#[must_use]
pub fn open_issue(id: IssueId, issue: NewIssue, now: DateTime<Utc>) -> IssueRecord {
    let NewIssue {
        title,
        description,
        assignee,
    } = issue;
    IssueRecord {
        id,
        title,
        description,
        status: initial_status(assignee.is_some()),
        assignee,
        created_at: now,
        updated_at: now,
    }
}

/// Decide the outcome of applying `changes` to `current`.
///
/// `resolve_user` is consulted only when the request assigns someone.
///
/// # Errors
/// - [`IssueRegistryError::IssueLocked`] when `current` is terminal.
/// - [`IssueRegistryError::InvalidStatus`] for an unknown status string.
/// - [`IssueRegistryError::UserNotFound`] when the new assignee is unknown.
/// - [`IssueRegistryError::InvalidStateTransition`] when the outcome would
///   leave an `IN_PROGRESS` or `COMPLETED` issue without an assignee.
pub fn plan_update<F>(
    current: &IssueRecord,
    changes: &IssueChanges,
    resolve_user: F,
) -> Result<PlannedTransition, IssueRegistryError>
where
    F: FnOnce(UserId) -> Option<User>,
{
    if current.status.is_terminal() {
        return Err(IssueRegistryError::issue_locked(current.id, current.status));
    }

    let requested = changes
        .status
        .as_deref()
        .map(parse_status)
        .transpose()?;

    let (assignee, assignee_changed) = match changes.assignee {
        AssigneeChange::Assign(user_id) => {
            let user = resolve_user(user_id)
                .ok_or_else(|| IssueRegistryError::user_not_found(user_id))?;
            (Some(user.id()), true)
        }
        AssigneeChange::Clear => (None, true),
        AssigneeChange::Unspecified => (current.assignee, false),
    };

    let status = derive_status(current.status, requested, assignee.is_some(), assignee_changed);

    if assignee.is_none() && status.requires_assignee() {
        return Err(IssueRegistryError::invalid_state_transition(status));
    }

    Ok(PlannedTransition { status, assignee })
}

/// Write an accepted plan and the plain field edits into `record`.
pub fn apply_transition(
    record: &mut IssueRecord,
    changes: IssueChanges,
    plan: PlannedTransition,
    now: DateTime<Utc>,
) {
    if let Some(title) = changes.title {
        record.title = title;
    }
    if let Some(description) = changes.description {
        record.description = description;
    }
    record.status = plan.status;
    record.assignee = plan.assignee;
    record.updated_at = now;
}

/// Parse a status filter or requested status.
///
/// # Errors
/// [`IssueRegistryError::InvalidStatus`] when `raw` names no status.
pub fn parse_status(raw: &str) -> Result<IssueStatus, IssueRegistryError> {
    raw.parse()
        .map_err(|_| IssueRegistryError::invalid_status(raw))
}

fn derive_status(
    current: IssueStatus,
    requested: Option<IssueStatus>,
    has_assignee: bool,
    assignee_changed: bool,
) -> IssueStatus {
    let status = requested.unwrap_or(current);
    if !assignee_changed {
        return status;
    }
    if !has_assignee {
        // Unassigned work cannot stay in progress, whatever was asked for.
        return IssueStatus::Pending;
    }
    if current == IssueStatus::Pending && requested.is_none() {
        return IssueStatus::InProgress;
    }
    status
}

#[cfg(test)]
#[path = "issue_lifecycle_tests.rs"]
mod tests;
