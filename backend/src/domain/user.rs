//! User data model.
//!
//! Users are immutable once created. Issues only hold a [`UserId`] and
//! resolve it back into a [`User`] snapshot whenever they are read.

use std::fmt;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Stable numeric user identifier.
///
/// Identifiers are allocated by the user registry and never reused.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, ToSchema,
)]
#[serde(transparent)]
#[schema(value_type = u64, example = 1)]
pub struct UserId(u64);

impl UserId {
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
}

impl From<u64> for UserId {
    fn from(value: u64) -> Self {
        Self(value)
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Fields supplied when registering a user.
///
/// No uniqueness checks apply to either field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewUser {
    /// Display name.
    pub name: String,
    /// Contact email address.
    pub email: String,
}

impl NewUser {
    /// Bundle the user fields.
    pub fn new(name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
        }
    }
}

/// Registered user.
///
/// # Examples
/// ```
/// use issue_tracker::domain::{NewUser, User, UserId};
///
/// let user = User::new(UserId::new(7), NewUser::new("Ada", "ada@example.com"));
/// assert_eq!(user.id(), UserId::new(7));
/// assert_eq!(user.name(), "Ada");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct User {
    id: UserId,
    #[schema(example = "김개발")]
    name: String,
    #[schema(example = "kim@example.com")]
    email: String,
}

impl User {
    /// Build a user from an allocated identifier and its fields.
    #[must_use]
    pub fn new(id: UserId, fields: NewUser) -> Self {
        let NewUser { name, email } = fields;
        Self { id, name, email }
    }

    /// Stable user identifier.
    #[must_use]
    pub fn id(&self) -> UserId {
        self.id
    }

    /// Display name.
    #[must_use]
    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    /// Contact email address.
    #[must_use]
    pub fn email(&self) -> &str {
        self.email.as_str()
    }
}
