//! Driving port for registering users.

use async_trait::async_trait;

use crate::domain::{Error, NewUser, User};

/// Domain use-case port for user registration.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UsersCommand: Send + Sync {
    /// Register a user under the next free identifier.
    async fn create_user(&self, user: NewUser) -> Result<User, Error>;
}
