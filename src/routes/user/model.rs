use serde::{Deserialize, Serialize};

use crate::database::UserEntity;

#[derive(Debug, Deserialize)]
pub struct RegisterRequest {
    pub name: String,
    pub login: String,
    pub email: String,
    pub password: String,
}

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub login: String,
    pub password: String,
}

#[derive(Debug, Serialize)]
pub struct AuthResponse {
    pub user: UserInfo,
    pub token: String,
    pub expires_at: i64,
}

#[derive(Debug, Serialize)]
pub struct UserInfo {
    pub id: i32,
    pub name: String,
    pub login: String,
    pub email: String,
}

impl From<UserEntity> for UserInfo {
    fn from(user: UserEntity) -> Self {
        Self {
            id: user.id,
            name: user.name,
            login: user.login,
            email: user.email,
        }
    }
}
