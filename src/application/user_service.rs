use std::sync::Arc;

use tracing::{info, instrument};

use crate::data::user_repository::UserRepository;
use crate::domain::{error::DomainError, user::User};

/// Thin application layer over a [`UserRepository`]: validates input,
/// delegates persistence, and stamps identity/timestamps on new records.
#[derive(Clone)]
pub struct UserService<R: UserRepository + 'static> {
    repo: Arc<R>,
}

impl<R> UserService<R>
where
    R: UserRepository + 'static,
{
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    pub async fn get_user(&self, id: &str) -> Result<User, DomainError> {
        if id.is_empty() {
            return Err(DomainError::Validation(
                "user ID must not be empty".to_string(),
            ));
        }

        self.repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| DomainError::UserNotFound(id.to_string()))
    }

    #[instrument(skip(self))]
    pub async fn create_user(&self, username: String, email: String) -> Result<User, DomainError> {
        if username.is_empty() {
            return Err(DomainError::Validation(
                "username must not be empty".to_string(),
            ));
        }
        if email.is_empty() {
            return Err(DomainError::Validation(
                "email must not be empty".to_string(),
            ));
        }

        let user = User::new(username, email);
        self.repo.save(&user).await?;

        info!(user_id = %user.id, "user created");
        Ok(user)
    }
}
