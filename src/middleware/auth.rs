use axum::{
    body::Body,
    extract::State,
    http::{Request, header},
    middleware::Next,
    response::Response,
};

use crate::{AppState, error::AppError, utils::verify_token};

/// Validates the bearer token and injects the verified `Claims` as a request
/// extension for the handlers behind this layer.
pub async fn auth_middleware(
    State(state): State<AppState>,
    mut request: Request<Body>,
    next: Next,
) -> Result<Response, AppError> {
    let token = request
        .headers()
        .get(header::AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.strip_prefix("Bearer "));

    let claims = match token {
        Some(token) => verify_token(token, &state.config).map_err(|e| {
            tracing::debug!("Token rejected: {}", e);
            AppError::Unauthorized
        })?,
        None => return Err(AppError::Unauthorized),
    };

    request.extensions_mut().insert(claims);
    Ok(next.run(request).await)
}
