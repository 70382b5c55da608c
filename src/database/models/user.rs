use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A stored account row. `password_hash` holds the hex credential digest,
/// never the plaintext, and never serializes out of the entity.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct UserEntity {
    pub id: i32,
    pub name: String,
    pub login: String,
    pub email: String,
    #[serde(skip_serializing)]
    pub password_hash: String,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: Option<chrono::DateTime<chrono::Utc>>,
}

/// Account fields supplied at registration; `password_hash` is already the
/// digest by the time it reaches the repository.
#[derive(Debug, Clone, Deserialize)]
pub struct NewUser {
    pub name: String,
    pub login: String,
    pub email: String,
    pub password_hash: String,
}
