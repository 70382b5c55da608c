use axum::{
    extract::{Extension, Json, State},
    http::StatusCode,
    response::IntoResponse,
};

use crate::{
    AppState,
    database::{NewUser, UserRepository},
    utils::{
        Claims, error_codes, error_to_api_response, generate_token, hash_credential,
        success_to_api_response,
    },
};

use super::model::{AuthResponse, LoginRequest, RegisterRequest, UserInfo};

#[axum::debug_handler]
pub async fn register(
    State(state): State<AppState>,
    Json(req): Json<RegisterRequest>,
) -> impl IntoResponse {
    if req.login.is_empty() || !req.login.chars().all(|c| c.is_alphanumeric() || c == '_') {
        return (
            StatusCode::OK,
            error_to_api_response(
                error_codes::VALIDATION_ERROR,
                "login may only contain letters, digits and underscores".to_string(),
            ),
        );
    }
    if req.password.is_empty() {
        return (
            StatusCode::OK,
            error_to_api_response(
                error_codes::VALIDATION_ERROR,
                "password must not be empty".to_string(),
            ),
        );
    }

    let new_user = NewUser {
        name: req.name,
        login: req.login,
        email: req.email,
        password_hash: hash_credential(&req.password),
    };

    let user = match UserRepository::create(&state.pool, &new_user).await {
        Ok(user) => user,
        Err(sqlx::Error::Database(e)) if e.is_unique_violation() => {
            return (
                StatusCode::OK,
                error_to_api_response(error_codes::USER_EXISTS, "login already taken".to_string()),
            );
        }
        Err(e) => {
            tracing::error!("Failed to register user: {}", e);
            return (
                StatusCode::OK,
                error_to_api_response(
                    error_codes::INTERNAL_ERROR,
                    "failed to create user".to_string(),
                ),
            );
        }
    };

    match generate_token(user.id, &state.config) {
        Ok((token, expires_at)) => (
            StatusCode::CREATED,
            success_to_api_response(AuthResponse {
                user: UserInfo::from(user),
                token,
                expires_at,
            }),
        ),
        Err(e) => {
            tracing::error!("Failed to issue token: {}", e);
            (
                StatusCode::OK,
                error_to_api_response(
                    error_codes::INTERNAL_ERROR,
                    "failed to issue token".to_string(),
                ),
            )
        }
    }
}

#[axum::debug_handler]
pub async fn login(
    State(state): State<AppState>,
    Json(req): Json<LoginRequest>,
) -> impl IntoResponse {
    let digest = hash_credential(&req.password);

    let user = match UserRepository::find_by_credentials(&state.pool, &req.login, &digest).await {
        Ok(Some(user)) => user,
        Ok(None) => {
            // Unknown login and wrong password answer identically.
            return (
                StatusCode::OK,
                error_to_api_response(
                    error_codes::AUTH_FAILED,
                    "invalid login or password".to_string(),
                ),
            );
        }
        Err(e) => {
            tracing::error!("Login lookup failed: {}", e);
            return (
                StatusCode::OK,
                error_to_api_response(error_codes::INTERNAL_ERROR, "database error".to_string()),
            );
        }
    };

    match generate_token(user.id, &state.config) {
        Ok((token, expires_at)) => (
            StatusCode::OK,
            success_to_api_response(AuthResponse {
                user: UserInfo::from(user),
                token,
                expires_at,
            }),
        ),
        Err(e) => {
            tracing::error!("Failed to issue token: {}", e);
            (
                StatusCode::OK,
                error_to_api_response(
                    error_codes::INTERNAL_ERROR,
                    "failed to issue token".to_string(),
                ),
            )
        }
    }
}

#[axum::debug_handler]
pub async fn me(
    State(state): State<AppState>,
    Extension(claims): Extension<Claims>,
) -> impl IntoResponse {
    match UserRepository::find_by_id(&state.pool, claims.sub).await {
        Ok(Some(user)) => (StatusCode::OK, success_to_api_response(UserInfo::from(user))),
        Ok(None) => (
            StatusCode::OK,
            error_to_api_response(error_codes::NOT_FOUND, "user not found".to_string()),
        ),
        Err(e) => {
            tracing::error!("User lookup failed: {}", e);
            (
                StatusCode::OK,
                error_to_api_response(error_codes::INTERNAL_ERROR, "database error".to_string()),
            )
        }
    }
}
