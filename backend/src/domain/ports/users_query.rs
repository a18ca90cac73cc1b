//! Driving port for user-facing queries.
//!
//! Inbound adapters use this port to fetch user snapshots without touching
//! the registry adapter directly.

use async_trait::async_trait;

use crate::domain::{Error, User, UserId};

/// Domain use-case port for reading users.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UsersQuery: Send + Sync {
    /// Fetch a single user.
    async fn get_user(&self, id: UserId) -> Result<User, Error>;

    /// Return every registered user.
    async fn list_users(&self) -> Result<Vec<User>, Error>;
}
