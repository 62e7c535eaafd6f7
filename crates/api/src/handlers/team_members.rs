//! Handlers for `/api/team-members`.

use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use smilecare_core::content::ContentType;
use smilecare_db::models::team_member::{CreateTeamMember, TeamMember, UpdateTeamMember};

use super::{not_found, parse_id, validated_body};
use crate::error::AppResult;
use crate::state::AppState;

const KIND: ContentType = ContentType::TeamMember;

/// GET /api/team-members
pub async fn list_team_members(State(state): State<AppState>) -> Json<Vec<TeamMember>> {
    Json(state.storage.list_team_members().await)
}

/// GET /api/team-members/{id}
pub async fn get_team_member(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<TeamMember>> {
    let id = parse_id(&id, KIND)?;
    let team_member = state
        .storage
        .find_team_member(id)
        .await
        .ok_or_else(|| not_found(KIND))?;

    Ok(Json(team_member))
}

/// POST /api/team-members
pub async fn create_team_member(
    State(state): State<AppState>,
    payload: Result<Json<CreateTeamMember>, JsonRejection>,
) -> AppResult<impl IntoResponse> {
    let input = validated_body(payload, KIND)?;
    let team_member = state.storage.create_team_member(&input).await?;

    tracing::info!(team_member_id = team_member.id, "Team member created");

    Ok((StatusCode::CREATED, Json(team_member)))
}

/// PUT /api/team-members/{id}
pub async fn update_team_member(
    State(state): State<AppState>,
    Path(id): Path<String>,
    payload: Result<Json<UpdateTeamMember>, JsonRejection>,
) -> AppResult<Json<TeamMember>> {
    let id = parse_id(&id, KIND)?;
    let input = validated_body(payload, KIND)?;
    let team_member = state
        .storage
        .update_team_member(id, &input)
        .await?
        .ok_or_else(|| not_found(KIND))?;

    tracing::info!(team_member_id = id, "Team member updated");

    Ok(Json(team_member))
}

/// DELETE /api/team-members/{id}
pub async fn delete_team_member(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<StatusCode> {
    let id = parse_id(&id, KIND)?;
    if !state.storage.delete_team_member(id).await? {
        return Err(not_found(KIND));
    }

    tracing::info!(team_member_id = id, "Team member deleted");

    Ok(StatusCode::NO_CONTENT)
}
