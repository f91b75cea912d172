use thiserror::Error;

#[derive(Debug, Error)]
pub enum DomainError {
    #[error("{0}")]
    Validation(String),
    #[error("user not found: {0}")]
    UserNotFound(String),
    #[error("storage error: {0}")]
    Storage(String),
}
