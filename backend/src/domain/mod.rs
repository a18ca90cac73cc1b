//! Domain primitives, lifecycle rules and services.
//!
//! Purpose: define the issue and user entities, the status lifecycle that
//! governs issue updates, and the services implementing the driving ports.
//! Nothing here depends on HTTP or on a concrete store.
//!
//! Public surface:
//! - Error / ErrorCode: transport-agnostic failure payload.
//! - User, UserId, NewUser: registered people who can own issues.
//! - Issue, IssueRecord, IssueStatus, IssueChanges: tracked work items.
//! - IssueService, UserService: driving port implementations.

pub mod error;
pub mod issue;
pub mod issue_lifecycle;
pub mod issue_service;
pub mod ports;
pub mod trace_id;
pub mod user;
pub mod user_service;

pub use self::error::{Error, ErrorCode, ErrorValidationError, TRACE_ID_HEADER};
pub use self::issue::{
    AssigneeChange, Issue, IssueChanges, IssueId, IssueRecord, IssueStatus, NewIssue,
    UnknownIssueStatus,
};
pub use self::issue_service::IssueService;
pub use self::trace_id::TraceId;
pub use self::user::{NewUser, User, UserId};
pub use self::user_service::UserService;
