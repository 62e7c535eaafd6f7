//! Handlers for `/api/testimonials`.

use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use smilecare_core::content::ContentType;
use smilecare_db::models::testimonial::{CreateTestimonial, Testimonial, UpdateTestimonial};

use super::{not_found, parse_id, validated_body};
use crate::error::AppResult;
use crate::query::ActiveFilterParams;
use crate::state::AppState;

const KIND: ContentType = ContentType::Testimonial;

/// GET /api/testimonials?active=true
pub async fn list_testimonials(
    State(state): State<AppState>,
    Query(params): Query<ActiveFilterParams>,
) -> Json<Vec<Testimonial>> {
    Json(state.storage.list_testimonials(params.active_only()).await)
}

/// GET /api/testimonials/{id}
pub async fn get_testimonial(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<Testimonial>> {
    let id = parse_id(&id, KIND)?;
    let testimonial = state
        .storage
        .find_testimonial(id)
        .await
        .ok_or_else(|| not_found(KIND))?;

    Ok(Json(testimonial))
}

/// POST /api/testimonials
pub async fn create_testimonial(
    State(state): State<AppState>,
    payload: Result<Json<CreateTestimonial>, JsonRejection>,
) -> AppResult<impl IntoResponse> {
    let input = validated_body(payload, KIND)?;
    let testimonial = state.storage.create_testimonial(&input).await?;

    tracing::info!(testimonial_id = testimonial.id, "Testimonial created");

    Ok((StatusCode::CREATED, Json(testimonial)))
}

/// PUT /api/testimonials/{id}
pub async fn update_testimonial(
    State(state): State<AppState>,
    Path(id): Path<String>,
    payload: Result<Json<UpdateTestimonial>, JsonRejection>,
) -> AppResult<Json<Testimonial>> {
    let id = parse_id(&id, KIND)?;
    let input = validated_body(payload, KIND)?;
    let testimonial = state
        .storage
        .update_testimonial(id, &input)
        .await?
        .ok_or_else(|| not_found(KIND))?;

    tracing::info!(testimonial_id = id, "Testimonial updated");

    Ok(Json(testimonial))
}

/// DELETE /api/testimonials/{id}
pub async fn delete_testimonial(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<StatusCode> {
    let id = parse_id(&id, KIND)?;
    if !state.storage.delete_testimonial(id).await? {
        return Err(not_found(KIND));
    }

    tracing::info!(testimonial_id = id, "Testimonial deleted");

    Ok(StatusCode::NO_CONTENT)
}
