//! User service - staff account use cases.

use async_trait::async_trait;
use std::sync::Arc;
use uuid::Uuid;

use crate::domain::{NewUser, Password, UpdateUser, User, UserRole};
use crate::errors::{AppError, AppResult};
use crate::infra::UnitOfWork;

/// User service trait for dependency injection.
#[async_trait]
pub trait UserService: Send + Sync {
    async fn get_user(&self, id: Uuid) -> AppResult<User>;
    async fn list_users(&self) -> AppResult<Vec<User>>;
    /// Create an account; the plain-text password is hashed here and
    /// never stored.
    async fn create_user(
        &self,
        email: String,
        password: String,
        name: String,
        role: UserRole,
    ) -> AppResult<User>;
    async fn update_user(&self, id: Uuid, data: UpdateUser) -> AppResult<User>;
    async fn delete_user(&self, id: Uuid) -> AppResult<()>;
}

/// Concrete implementation of UserService using Unit of Work.
pub struct UserManager<U: UnitOfWork> {
    uow: Arc<U>,
}

impl<U: UnitOfWork> UserManager<U> {
    pub fn new(uow: Arc<U>) -> Self {
        Self { uow }
    }
}

#[async_trait]
impl<U: UnitOfWork> UserService for UserManager<U> {
    async fn get_user(&self, id: Uuid) -> AppResult<User> {
        self.uow.users().find_by_id(id).await?.ok_or(AppError::NotFound)
    }

    async fn list_users(&self) -> AppResult<Vec<User>> {
        self.uow.users().list().await
    }

    async fn create_user(
        &self,
        email: String,
        password: String,
        name: String,
        role: UserRole,
    ) -> AppResult<User> {
        let password_hash = Password::new(&password)?.as_str().to_string();

        self.uow
            .users()
            .create(NewUser {
                email,
                password_hash,
                name,
                role,
            })
            .await
    }

    async fn update_user(&self, id: Uuid, data: UpdateUser) -> AppResult<User> {
        self.uow.users().update(id, data).await
    }

    async fn delete_user(&self, id: Uuid) -> AppResult<()> {
        self.uow.users().delete(id).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infra::test_support::{SharedTestUow, TestUnitOfWork};
    use chrono::Utc;

    #[tokio::test]
    async fn test_create_user_hashes_password() {
        let mut uow = TestUnitOfWork::default();
        uow.users.expect_create().returning(|data| {
            // The repository must never see the plain-text password
            assert_ne!(data.password_hash, "SecurePass123!");
            Ok(User {
                id: Uuid::new_v4(),
                email: data.email,
                password_hash: data.password_hash,
                name: data.name,
                role: data.role,
                created_at: Utc::now(),
                updated_at: Utc::now(),
            })
        });

        let service = UserManager::new(Arc::new(SharedTestUow::from(uow)));
        let user = service
            .create_user(
                "fitter@yard.example".to_string(),
                "SecurePass123!".to_string(),
                "Asha Rahman".to_string(),
                UserRole::Technician,
            )
            .await
            .unwrap();

        assert_eq!(user.role, UserRole::Technician);
    }

    #[tokio::test]
    async fn test_create_user_rejects_short_password() {
        let uow = TestUnitOfWork::default();
        let service = UserManager::new(Arc::new(SharedTestUow::from(uow)));

        let result = service
            .create_user(
                "fitter@yard.example".to_string(),
                "short".to_string(),
                "Asha Rahman".to_string(),
                UserRole::Technician,
            )
            .await;

        assert!(matches!(result.unwrap_err(), AppError::Validation(_)));
    }

    #[tokio::test]
    async fn test_get_user_not_found() {
        let mut uow = TestUnitOfWork::default();
        uow.users.expect_find_by_id().returning(|_| Ok(None));

        let service = UserManager::new(Arc::new(SharedTestUow::from(uow)));
        let result = service.get_user(Uuid::new_v4()).await;

        assert!(matches!(result.unwrap_err(), AppError::NotFound));
    }
}
