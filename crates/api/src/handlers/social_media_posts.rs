//! Handlers for `/api/social-media-posts`.

use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use smilecare_core::content::ContentType;
use smilecare_db::models::social_media_post::{
    CreateSocialMediaPost, SocialMediaPost, UpdateSocialMediaPost,
};

use super::{not_found, parse_id, validated_body};
use crate::error::AppResult;
use crate::state::AppState;

const KIND: ContentType = ContentType::SocialMediaPost;

/// GET /api/social-media-posts
///
/// Never empty: falls back to the seed list when the store has no posts.
pub async fn list_social_media_posts(
    State(state): State<AppState>,
) -> Json<Vec<SocialMediaPost>> {
    Json(state.storage.list_social_media_posts().await)
}

/// GET /api/social-media-posts/{id}
pub async fn get_social_media_post(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<SocialMediaPost>> {
    let id = parse_id(&id, KIND)?;
    let post = state
        .storage
        .find_social_media_post(id)
        .await
        .ok_or_else(|| not_found(KIND))?;

    Ok(Json(post))
}

/// POST /api/social-media-posts
pub async fn create_social_media_post(
    State(state): State<AppState>,
    payload: Result<Json<CreateSocialMediaPost>, JsonRejection>,
) -> AppResult<impl IntoResponse> {
    let input = validated_body(payload, KIND)?;
    let post = state.storage.create_social_media_post(&input).await?;

    tracing::info!(post_id = post.id, platform = %post.platform, "Social media post created");

    Ok((StatusCode::CREATED, Json(post)))
}

/// PUT /api/social-media-posts/{id}
pub async fn update_social_media_post(
    State(state): State<AppState>,
    Path(id): Path<String>,
    payload: Result<Json<UpdateSocialMediaPost>, JsonRejection>,
) -> AppResult<Json<SocialMediaPost>> {
    let id = parse_id(&id, KIND)?;
    let input = validated_body(payload, KIND)?;
    let post = state
        .storage
        .update_social_media_post(id, &input)
        .await?
        .ok_or_else(|| not_found(KIND))?;

    tracing::info!(post_id = id, "Social media post updated");

    Ok(Json(post))
}

/// DELETE /api/social-media-posts/{id}
pub async fn delete_social_media_post(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<StatusCode> {
    let id = parse_id(&id, KIND)?;
    if !state.storage.delete_social_media_post(id).await? {
        return Err(not_found(KIND));
    }

    tracing::info!(post_id = id, "Social media post deleted");

    Ok(StatusCode::NO_CONTENT)
}
