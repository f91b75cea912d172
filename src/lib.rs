pub mod application;
pub mod data;
pub mod domain;
pub mod infrastructure;

pub use application::user_service::UserService;
pub use data::user_repository::{InMemoryUserRepository, UserRepository};
pub use domain::error::DomainError;
pub use domain::user::User;
