use crate::errors::Result;
use crate::users::users_model::User;
use async_trait::async_trait;

/// Trait for user repository operations.
#[async_trait]
pub trait UserRepositoryTrait: Send + Sync {
    fn find_by_email(&self, email: &str) -> Result<Option<User>>;
    fn find_by_id(&self, user_id: &str) -> Result<Option<User>>;
    async fn insert(&self, user: User) -> Result<User>;
}

/// Trait for user service operations.
#[async_trait]
pub trait UserServiceTrait: Send + Sync {
    /// Creates a user from a normalized email and a pre-hashed password;
    /// a duplicate email surfaces as a unique violation.
    async fn register(&self, email: &str, password_hash: String) -> Result<User>;
    fn find_by_email(&self, email: &str) -> Result<Option<User>>;
    fn find_by_id(&self, user_id: &str) -> Result<Option<User>>;
}
