use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use uuid::Uuid;

use crate::errors::{DatabaseError, Error, Result, ValidationError};

use super::users_model::User;
use super::users_traits::{UserRepositoryTrait, UserServiceTrait};

pub struct UserService {
    repository: Arc<dyn UserRepositoryTrait>,
}

impl UserService {
    pub fn new(repository: Arc<dyn UserRepositoryTrait>) -> Self {
        UserService { repository }
    }
}

/// Emails are stored and compared lowercased.
fn normalize_email(email: &str) -> String {
    email.trim().to_lowercase()
}

/// Rewords raw unique-index violations so a register losing the race to
/// the index reads the same as one caught by the pre-check.
fn map_duplicate_email(err: Error) -> Error {
    match err {
        Error::Database(DatabaseError::UniqueViolation(_)) => duplicate_email(),
        other => other,
    }
}

fn duplicate_email() -> Error {
    Error::Database(DatabaseError::UniqueViolation(
        "Email already registered".to_string(),
    ))
}

#[async_trait]
impl UserServiceTrait for UserService {
    async fn register(&self, email: &str, password_hash: String) -> Result<User> {
        let email = normalize_email(email);
        if email.is_empty() {
            return Err(Error::Validation(ValidationError::MissingField(
                "email".to_string(),
            )));
        }
        // The unique index backs this check up under concurrent registers.
        if self.repository.find_by_email(&email)?.is_some() {
            return Err(duplicate_email());
        }

        let now = Utc::now().naive_utc();
        let user = User {
            id: Uuid::new_v4().to_string(),
            email,
            password_hash,
            created_at: now,
            updated_at: now,
        };
        log::info!("Registering user {}", user.email);
        self.repository
            .insert(user)
            .await
            .map_err(map_duplicate_email)
    }

    fn find_by_email(&self, email: &str) -> Result<Option<User>> {
        self.repository.find_by_email(&normalize_email(email))
    }

    fn find_by_id(&self, user_id: &str) -> Result<Option<User>> {
        self.repository.find_by_id(user_id)
    }
}
