use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;
use tracing::info;

use crate::domain::error::DomainError;
use crate::domain::user::User;

/// Abstract storage port the service depends on. Implementations decide
/// where users live (in memory, SQL, remote service) and what ordering or
/// isolation guarantees concurrent callers get.
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// `Ok(None)` means the id is unknown; `Err` means the backing store
    /// failed.
    async fn find_by_id(&self, id: &str) -> Result<Option<User>, DomainError>;

    async fn save(&self, user: &User) -> Result<(), DomainError>;
}

/// In-memory implementation of `UserRepository` (for development/testing).
#[derive(Debug, Default, Clone)]
pub struct InMemoryUserRepository {
    users: Arc<RwLock<HashMap<String, User>>>,
}

impl InMemoryUserRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn find_by_id(&self, id: &str) -> Result<Option<User>, DomainError> {
        let users = self.users.read().await;
        Ok(users.get(id).cloned())
    }

    async fn save(&self, user: &User) -> Result<(), DomainError> {
        let mut users = self.users.write().await;
        users.insert(user.id.clone(), user.clone());

        info!(user_id = %user.id, email = %user.email, "user saved");
        Ok(())
    }
}
