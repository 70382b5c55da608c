use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A stored contact row. Every contact belongs to exactly one user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct ContactEntity {
    pub id: i32,
    pub user_id: i32,
    pub name: String,
    pub email: String,
    pub phone: String,
}

/// Contact fields supplied by the caller before the store assigns an id.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewContact {
    pub name: String,
    pub email: String,
    pub phone: String,
}
