//! Handlers for `/api/services`.

use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use smilecare_core::content::ContentType;
use smilecare_db::models::service::{CreateService, Service, UpdateService};

use super::{not_found, parse_id, validated_body};
use crate::error::AppResult;
use crate::state::AppState;

const KIND: ContentType = ContentType::Service;

/// GET /api/services
pub async fn list_services(State(state): State<AppState>) -> Json<Vec<Service>> {
    Json(state.storage.list_services().await)
}

/// GET /api/services/{id}
pub async fn get_service(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<Service>> {
    let id = parse_id(&id, KIND)?;
    let service = state
        .storage
        .find_service(id)
        .await
        .ok_or_else(|| not_found(KIND))?;

    Ok(Json(service))
}

/// POST /api/services
pub async fn create_service(
    State(state): State<AppState>,
    payload: Result<Json<CreateService>, JsonRejection>,
) -> AppResult<impl IntoResponse> {
    let input = validated_body(payload, KIND)?;
    let service = state.storage.create_service(&input).await?;

    tracing::info!(service_id = service.id, "Service created");

    Ok((StatusCode::CREATED, Json(service)))
}

/// PUT /api/services/{id}
pub async fn update_service(
    State(state): State<AppState>,
    Path(id): Path<String>,
    payload: Result<Json<UpdateService>, JsonRejection>,
) -> AppResult<Json<Service>> {
    let id = parse_id(&id, KIND)?;
    let input = validated_body(payload, KIND)?;
    let service = state
        .storage
        .update_service(id, &input)
        .await?
        .ok_or_else(|| not_found(KIND))?;

    tracing::info!(service_id = id, "Service updated");

    Ok(Json(service))
}

/// DELETE /api/services/{id}
pub async fn delete_service(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<StatusCode> {
    let id = parse_id(&id, KIND)?;
    if !state.storage.delete_service(id).await? {
        return Err(not_found(KIND));
    }

    tracing::info!(service_id = id, "Service deleted");

    Ok(StatusCode::NO_CONTENT)
}
