//! In-memory registries.
//!
//! State lives for the lifetime of the process. Both registries are safe to
//! share across Actix workers behind an `Arc`.
//!
//! Lock order: the issue table lock is always taken before the user table
//! lock. The user registry never calls back into the issue registry.

mod issue_registry;
mod user_registry;

pub use issue_registry::InMemoryIssueRegistry;
pub use user_registry::InMemoryUserRegistry;
