//! In-memory user registry.

use std::collections::BTreeMap;

use parking_lot::RwLock;

use crate::domain::ports::UserRegistry;
use crate::domain::{NewUser, User, UserId};

/// Users available out of the box when seeding is enabled.
const SEED_USERS: [(u64, &str, &str); 3] = [
    (1, "김개발", "kim@example.com"),
    (2, "이디자인", "lee@example.com"),
    (3, "박기획", "park@example.com"),
];

/// User store keyed by identifier.
///
/// # Examples
/// ```
/// use issue_tracker::domain::UserId;
/// use issue_tracker::domain::ports::UserRegistry;
/// use issue_tracker::outbound::memory::InMemoryUserRegistry;
///
/// let registry = InMemoryUserRegistry::seeded();
/// assert_eq!(registry.get(UserId::new(1)).map(|u| u.email().to_owned()),
///     Some("kim@example.com".to_owned()));
/// ```
#[derive(Debug, Default)]
pub struct InMemoryUserRegistry {
    users: RwLock<BTreeMap<UserId, User>>,
}

impl InMemoryUserRegistry {
    /// Empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry pre-populated with the three default users.
    #[must_use]
    pub fn seeded() -> Self {
        let users = SEED_USERS
            .into_iter()
            .map(|(id, name, email)| {
                let id = UserId::new(id);
                (id, User::new(id, NewUser::new(name, email)))
            })
            .collect();
        Self {
            users: RwLock::new(users),
        }
    }
}

impl UserRegistry for InMemoryUserRegistry {
    fn get(&self, id: UserId) -> Option<User> {
        self.users.read().get(&id).cloned()
    }

    fn create(&self, user: NewUser) -> User {
        let mut users = self.users.write();
        let next = users
            .last_key_value()
            .map_or(1, |(id, _)| id.get().saturating_add(1));
        let id = UserId::new(next);
        let created = User::new(id, user);
        users.insert(id, created.clone());
        created
    }

    fn list_all(&self) -> Vec<User> {
        self.users.read().values().cloned().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn seeded_registry_holds_default_users() {
        let registry = InMemoryUserRegistry::seeded();

        let names: Vec<_> = registry
            .list_all()
            .iter()
            .map(|user| user.name().to_owned())
            .collect();

        assert_eq!(names, ["김개발", "이디자인", "박기획"]);
    }

    #[rstest]
    fn empty_registry_allocates_from_one() {
        let registry = InMemoryUserRegistry::new();

        let user = registry.create(NewUser::new("Ada", "ada@example.com"));

        assert_eq!(user.id(), UserId::new(1));
        assert_eq!(registry.get(UserId::new(1)), Some(user));
    }

    #[rstest]
    fn new_users_follow_highest_identifier() {
        let registry = InMemoryUserRegistry::seeded();

        let first = registry.create(NewUser::new("Ada", "ada@example.com"));
        let second = registry.create(NewUser::new("Ada", "ada@example.com"));

        assert_eq!(first.id(), UserId::new(4));
        assert_eq!(second.id(), UserId::new(5));
    }

    #[rstest]
    fn unknown_user_is_absent() {
        assert!(InMemoryUserRegistry::seeded().get(UserId::new(99)).is_none());
    }
}
