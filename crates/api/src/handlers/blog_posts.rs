//! Handlers for `/api/blog-posts`.

use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use smilecare_core::content::ContentType;
use smilecare_db::models::blog_post::{BlogPost, CreateBlogPost, UpdateBlogPost};

use super::{not_found, parse_id, validated_body};
use crate::error::AppResult;
use crate::state::AppState;

const KIND: ContentType = ContentType::BlogPost;

/// GET /api/blog-posts
pub async fn list_blog_posts(State(state): State<AppState>) -> Json<Vec<BlogPost>> {
    Json(state.storage.list_blog_posts().await)
}

/// GET /api/blog-posts/{id}
pub async fn get_blog_post(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<BlogPost>> {
    let id = parse_id(&id, KIND)?;
    let post = state
        .storage
        .find_blog_post(id)
        .await
        .ok_or_else(|| not_found(KIND))?;

    Ok(Json(post))
}

/// POST /api/blog-posts
pub async fn create_blog_post(
    State(state): State<AppState>,
    payload: Result<Json<CreateBlogPost>, JsonRejection>,
) -> AppResult<impl IntoResponse> {
    let input = validated_body(payload, KIND)?;
    let post = state.storage.create_blog_post(&input).await?;

    tracing::info!(blog_post_id = post.id, "Blog post created");

    Ok((StatusCode::CREATED, Json(post)))
}

/// PUT /api/blog-posts/{id}
pub async fn update_blog_post(
    State(state): State<AppState>,
    Path(id): Path<String>,
    payload: Result<Json<UpdateBlogPost>, JsonRejection>,
) -> AppResult<Json<BlogPost>> {
    let id = parse_id(&id, KIND)?;
    let input = validated_body(payload, KIND)?;
    let post = state
        .storage
        .update_blog_post(id, &input)
        .await?
        .ok_or_else(|| not_found(KIND))?;

    tracing::info!(blog_post_id = id, "Blog post updated");

    Ok(Json(post))
}

/// DELETE /api/blog-posts/{id}
pub async fn delete_blog_post(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<StatusCode> {
    let id = parse_id(&id, KIND)?;
    if !state.storage.delete_blog_post(id).await? {
        return Err(not_found(KIND));
    }

    tracing::info!(blog_post_id = id, "Blog post deleted");

    Ok(StatusCode::NO_CONTENT)
}
