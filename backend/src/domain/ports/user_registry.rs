//! Driven port for the user store.
//!
//! The issue registry resolves assignee references through this port, so it
//! is synchronous: lookups happen while the issue store lock is held.

use crate::domain::{NewUser, User, UserId};

/// Identifier-keyed store of users.
#[cfg_attr(test, mockall::automock)]
pub trait UserRegistry: Send + Sync {
    /// Look up a user snapshot.
    fn get(&self, id: UserId) -> Option<User>;

    /// Store a new user under the next unused identifier
    /// (highest existing identifier plus one, or 1 when empty).
    fn create(&self, user: NewUser) -> User;

    /// Every stored user. Callers must not rely on the order.
    fn list_all(&self) -> Vec<User>;
}
