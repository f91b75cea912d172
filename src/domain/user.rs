use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub username: String,
    pub email: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl User {
    pub fn new(username: String, email: String) -> Self {
        let now = Utc::now();
        Self {
            id: generate_id(),
            username,
            email,
            created_at: now,
            updated_at: now,
        }
    }
}

// Fixed prefix plus a random v4 UUID. The prefix keeps ids recognizable in
// logs; uniqueness comes from the UUID.
fn generate_id() -> String {
    format!("user_{}", Uuid::new_v4())
}
