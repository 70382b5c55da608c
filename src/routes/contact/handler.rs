use axum::{
    extract::{Extension, Json, Query, State},
    http::StatusCode,
    response::IntoResponse,
};
use serde::Deserialize;

use crate::{
    AppState,
    database::{ContactEntity, ContactRepository, NewContact},
    utils::{Claims, error_codes, error_to_api_response, success_to_api_response},
};

use super::model::{
    ContactInfo, CreateContactRequest, DeleteContactResponse, UpdateContactRequest,
};

#[derive(Debug, Deserialize)]
pub struct IdQuery {
    pub id: i32,
}

#[axum::debug_handler]
pub async fn list_contacts(
    State(state): State<AppState>,
    Extension(claims): Extension<Claims>,
) -> impl IntoResponse {
    match ContactRepository::list_all(&state.pool, claims.sub).await {
        Ok(contacts) => (
            StatusCode::OK,
            success_to_api_response(
                contacts.into_iter().map(ContactInfo::from).collect::<Vec<_>>(),
            ),
        ),
        Err(e) => {
            tracing::error!("Failed to list contacts for user {}: {}", claims.sub, e);
            (
                StatusCode::OK,
                error_to_api_response(error_codes::INTERNAL_ERROR, "database error".to_string()),
            )
        }
    }
}

#[axum::debug_handler]
pub async fn find_by_id(
    State(state): State<AppState>,
    Extension(claims): Extension<Claims>,
    Query(query): Query<IdQuery>,
) -> impl IntoResponse {
    match ContactRepository::find_by_id(&state.pool, query.id).await {
        // The repository lookup is unscoped; ownership is enforced here.
        Ok(Some(contact)) if contact.user_id == claims.sub => (
            StatusCode::OK,
            success_to_api_response(ContactInfo::from(contact)),
        ),
        Ok(Some(_)) => (
            StatusCode::OK,
            error_to_api_response(
                error_codes::PERMISSION_DENIED,
                "contact belongs to another user".to_string(),
            ),
        ),
        Ok(None) => (
            StatusCode::OK,
            error_to_api_response(error_codes::NOT_FOUND, "contact not found".to_string()),
        ),
        Err(e) => {
            tracing::error!("Contact lookup failed: {}", e);
            (
                StatusCode::OK,
                error_to_api_response(error_codes::INTERNAL_ERROR, "database error".to_string()),
            )
        }
    }
}

#[axum::debug_handler]
pub async fn create_contact(
    State(state): State<AppState>,
    Extension(claims): Extension<Claims>,
    Json(req): Json<CreateContactRequest>,
) -> impl IntoResponse {
    if req.name.trim().is_empty() {
        return (
            StatusCode::OK,
            error_to_api_response(
                error_codes::VALIDATION_ERROR,
                "contact name must not be empty".to_string(),
            ),
        );
    }

    let new_contact = NewContact {
        name: req.name,
        email: req.email,
        phone: req.phone,
    };

    match ContactRepository::create(&state.pool, claims.sub, &new_contact).await {
        Ok(contact) => (
            StatusCode::CREATED,
            success_to_api_response(ContactInfo::from(contact)),
        ),
        Err(e) => {
            tracing::error!("Failed to create contact for user {}: {}", claims.sub, e);
            (
                StatusCode::OK,
                error_to_api_response(
                    error_codes::INTERNAL_ERROR,
                    "failed to create contact".to_string(),
                ),
            )
        }
    }
}

#[axum::debug_handler]
pub async fn update_contact(
    State(state): State<AppState>,
    Extension(claims): Extension<Claims>,
    Json(req): Json<UpdateContactRequest>,
) -> impl IntoResponse {
    // Ownership check before touching the row; the update itself never
    // creates a row for a missing id.
    let existing = match ContactRepository::find_by_id(&state.pool, req.id).await {
        Ok(Some(contact)) => contact,
        Ok(None) => {
            return (
                StatusCode::OK,
                error_to_api_response(error_codes::NOT_FOUND, "contact not found".to_string()),
            );
        }
        Err(e) => {
            tracing::error!("Contact lookup failed: {}", e);
            return (
                StatusCode::OK,
                error_to_api_response(error_codes::INTERNAL_ERROR, "database error".to_string()),
            );
        }
    };

    if existing.user_id != claims.sub {
        return (
            StatusCode::OK,
            error_to_api_response(
                error_codes::PERMISSION_DENIED,
                "contact belongs to another user".to_string(),
            ),
        );
    }

    let replacement = ContactEntity {
        id: existing.id,
        user_id: existing.user_id,
        name: req.name,
        email: req.email,
        phone: req.phone,
    };

    match ContactRepository::update(&state.pool, &replacement).await {
        Ok(contact) => (
            StatusCode::OK,
            success_to_api_response(ContactInfo::from(contact)),
        ),
        Err(sqlx::Error::RowNotFound) => (
            StatusCode::OK,
            error_to_api_response(error_codes::NOT_FOUND, "contact not found".to_string()),
        ),
        Err(e) => {
            tracing::error!("Failed to update contact {}: {}", req.id, e);
            (
                StatusCode::OK,
                error_to_api_response(
                    error_codes::INTERNAL_ERROR,
                    "failed to update contact".to_string(),
                ),
            )
        }
    }
}

#[axum::debug_handler]
pub async fn delete_contact(
    State(state): State<AppState>,
    Extension(claims): Extension<Claims>,
    Query(query): Query<IdQuery>,
) -> impl IntoResponse {
    match ContactRepository::find_by_id(&state.pool, query.id).await {
        Ok(Some(contact)) if contact.user_id != claims.sub => {
            return (
                StatusCode::OK,
                error_to_api_response(
                    error_codes::PERMISSION_DENIED,
                    "contact belongs to another user".to_string(),
                ),
            );
        }
        Ok(_) => {}
        Err(e) => {
            tracing::error!("Contact lookup failed: {}", e);
            return (
                StatusCode::OK,
                error_to_api_response(error_codes::INTERNAL_ERROR, "database error".to_string()),
            );
        }
    }

    match ContactRepository::delete(&state.pool, query.id).await {
        Ok(deleted) => (
            StatusCode::OK,
            success_to_api_response(DeleteContactResponse { deleted }),
        ),
        Err(e) => {
            tracing::error!("Failed to delete contact {}: {}", query.id, e);
            (
                StatusCode::OK,
                error_to_api_response(
                    error_codes::INTERNAL_ERROR,
                    "failed to delete contact".to_string(),
                ),
            )
        }
    }
}
