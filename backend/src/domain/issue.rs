//! Issue data model.
//!
//! [`IssueRecord`] is the stored form: it references its assignee by
//! [`UserId`]. [`Issue`] is the read snapshot handed to callers, with the
//! assignee resolved into a [`User`].

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::{User, UserId};

/// Stable numeric issue identifier, allocated from 1 and never reused.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, ToSchema,
)]
#[serde(transparent)]
#[schema(value_type = u64, example = 1)]
pub struct IssueId(u64);

impl IssueId {
    /// First identifier handed out by an empty registry.
    pub const FIRST: Self = Self(1);

    /// Wrap a raw identifier.
    #[must_use]
    pub const fn new(raw: u64) -> Self {
        Self(raw)
    }

    /// Raw numeric value.
    #[must_use]
    pub const fn get(self) -> u64 {
        self.0
    }

    /// Identifier following this one.
    #[must_use]
    pub const fn next(self) -> Self {
        Self(self.0.saturating_add(1))
    }
}

impl From<u64> for IssueId {
    fn from(value: u64) -> Self {
        Self(value)
    }
}

impl fmt::Display for IssueId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Lifecycle status of an issue.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum IssueStatus {
    /// Waiting for an assignee or for work to start.
    Pending,
    /// Assigned and being worked on.
    InProgress,
    /// Finished. Terminal.
    Completed,
    /// Abandoned. Terminal.
    Cancelled,
}

/// Raised when a string does not name an [`IssueStatus`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown issue status: {0}")]
pub struct UnknownIssueStatus(pub String);

impl IssueStatus {
    /// Every status in lifecycle order.
    pub const ALL: [Self; 4] = [
        Self::Pending,
        Self::InProgress,
        Self::Completed,
        Self::Cancelled,
    ];

    /// Wire representation, e.g. `IN_PROGRESS`.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Pending => "PENDING",
            Self::InProgress => "IN_PROGRESS",
            Self::Completed => "COMPLETED",
            Self::Cancelled => "CANCELLED",
        }
    }

    /// Terminal statuses lock the issue against any further update.
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        matches!(self, Self::Completed | Self::Cancelled)
    }

    /// Whether an issue in this status must have an assignee.
    #[must_use]
    pub const fn requires_assignee(self) -> bool {
        !matches!(self, Self::Pending | Self::Cancelled)
    }
}

impl fmt::Display for IssueStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for IssueStatus {
    type Err = UnknownIssueStatus;

    /// Matching is exact and case sensitive.
    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|status| status.as_str() == value)
            .ok_or_else(|| UnknownIssueStatus(value.to_owned()))
    }
}

/// Fields supplied when opening an issue.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewIssue {
    /// Short summary.
    pub title: String,
    /// Free-form description; empty when not supplied.
    pub description: String,
    /// Optional user to assign immediately.
    pub assignee: Option<UserId>,
}

impl NewIssue {
    /// Unassigned issue with the given title and description.
    pub fn new(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            assignee: None,
        }
    }

    /// Assign the issue to `user` on creation.
    #[must_use]
    pub fn assigned_to(mut self, user: UserId) -> Self {
        self.assignee = Some(user);
        self
    }
}

/// Requested change to an issue's assignee.
///
/// Distinguishes "leave it alone" from "remove it", which a plain
/// `Option<UserId>` cannot express.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AssigneeChange {
    /// The request did not mention the assignee.
    #[default]
    Unspecified,
    /// Assign the given user.
    Assign(UserId),
    /// Remove the current assignee.
    Clear,
}

impl From<Option<Option<UserId>>> for AssigneeChange {
    /// `None` is an absent field, `Some(None)` an explicit null.
    fn from(value: Option<Option<UserId>>) -> Self {
        match value {
            None => Self::Unspecified,
            Some(None) => Self::Clear,
            Some(Some(id)) => Self::Assign(id),
        }
    }
}

/// Partial update applied to an existing issue.
///
/// `status` stays a raw string so that an unknown value is reported only
/// after the terminal-state check, matching the update rule order.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct IssueChanges {
    /// Replacement title.
    pub title: Option<String>,
    /// Replacement description.
    pub description: Option<String>,
    /// Explicitly requested status.
    pub status: Option<String>,
    /// Assignee change.
    pub assignee: AssigneeChange,
}

impl IssueChanges {
    /// Request the given status.
    #[must_use]
    pub fn with_status(mut self, status: impl Into<String>) -> Self {
        self.status = Some(status.into());
        self
    }

    /// Request an assignee change.
    #[must_use]
    pub fn with_assignee(mut self, assignee: AssigneeChange) -> Self {
        self.assignee = assignee;
        self
    }

    /// Replace the title.
    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Replace the description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}

/// Stored issue state owned by the issue registry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IssueRecord {
    /// Identifier.
    pub id: IssueId,
    /// Short summary.
    pub title: String,
    /// Free-form description.
    pub description: String,
    /// Current lifecycle status.
    pub status: IssueStatus,
    /// Reference to the assigned user.
    pub assignee: Option<UserId>,
    /// Creation time.
    pub created_at: DateTime<Utc>,
    /// Time of the last successful update.
    pub updated_at: DateTime<Utc>,
}

impl IssueRecord {
    /// Build the read snapshot, attaching the resolved assignee.
    #[must_use]
    pub fn snapshot(&self, assignee: Option<User>) -> Issue {
        Issue {
            id: self.id,
            title: self.title.clone(),
            description: self.description.clone(),
            status: self.status,
            assignee,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}

/// Issue snapshot returned to callers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Issue {
    /// Identifier.
    pub id: IssueId,
    /// Short summary.
    #[schema(example = "Fix bug")]
    pub title: String,
    /// Free-form description.
    pub description: String,
    /// Current lifecycle status.
    pub status: IssueStatus,
    /// Assigned user, resolved at read time. Written as `assignee`; older
    /// clients that send the object as `user` are still understood.
    #[serde(default, alias = "user", skip_serializing_if = "Option::is_none")]
    pub assignee: Option<User>,
    /// Creation time.
    pub created_at: DateTime<Utc>,
    /// Time of the last successful update.
    pub updated_at: DateTime<Utc>,
}
