//! User domain service.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::info;

use crate::domain::ports::{UserRegistry, UsersCommand, UsersQuery};
use crate::domain::{Error, NewUser, User, UserId};

/// User service implementing the user driving ports.
#[derive(Clone)]
pub struct UserService<R> {
    registry: Arc<R>,
}

impl<R> UserService<R> {
    /// Create a service backed by `registry`.
    pub fn new(registry: Arc<R>) -> Self {
        Self { registry }
    }
}

#[async_trait]
impl<R> UsersQuery for UserService<R>
where
    R: UserRegistry,
{
    async fn get_user(&self, id: UserId) -> Result<User, Error> {
        self.registry
            .get(id)
            .ok_or_else(|| Error::not_found("user not found"))
    }

    async fn list_users(&self) -> Result<Vec<User>, Error> {
        Ok(self.registry.list_all())
    }
}

#[async_trait]
impl<R> UsersCommand for UserService<R>
where
    R: UserRegistry,
{
    async fn create_user(&self, user: NewUser) -> Result<User, Error> {
        let created = self.registry.create(user);
        info!(user_id = %created.id(), "user registered");
        Ok(created)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ErrorCode;
    use crate::domain::ports::MockUserRegistry;

    fn ada() -> User {
        User::new(UserId::new(4), NewUser::new("Ada", "ada@example.com"))
    }

    #[tokio::test]
    async fn get_user_returns_registry_snapshot() {
        let mut registry = MockUserRegistry::new();
        registry
            .expect_get()
            .withf(|id| *id == UserId::new(4))
            .return_once(|_| Some(ada()));
        let service = UserService::new(Arc::new(registry));

        let user = service.get_user(UserId::new(4)).await.expect("user");

        assert_eq!(user, ada());
    }

    #[tokio::test]
    async fn get_user_maps_absence_to_not_found() {
        let mut registry = MockUserRegistry::new();
        registry.expect_get().return_once(|_| None);
        let service = UserService::new(Arc::new(registry));

        let error = service
            .get_user(UserId::new(99))
            .await
            .expect_err("missing user");

        assert_eq!(error.code(), ErrorCode::NotFound);
        assert_eq!(error.message(), "user not found");
    }

    #[tokio::test]
    async fn create_user_delegates_to_registry() {
        let mut registry = MockUserRegistry::new();
        registry
            .expect_create()
            .times(1)
            .withf(|user| user.name == "Ada")
            .return_once(|_| ada());
        let service = UserService::new(Arc::new(registry));

        let user = service
            .create_user(NewUser::new("Ada", "ada@example.com"))
            .await
            .expect("created");

        assert_eq!(user.id(), UserId::new(4));
    }
}
