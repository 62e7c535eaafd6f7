//! Team member (doctor) model and DTOs.

use serde::{Deserialize, Serialize};
use smilecare_core::types::{DbId, Timestamp};
use sqlx::FromRow;
use validator::Validate;

/// A row from the `team_members` table.
#[derive(Debug, Clone, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TeamMember {
    pub id: DbId,
    pub name: String,
    pub role: Option<String>,
    pub role_ro: Option<String>,
    pub role_ru: Option<String>,
    pub role_en: Option<String>,
    pub bio: Option<String>,
    pub bio_ro: Option<String>,
    pub bio_ru: Option<String>,
    pub bio_en: Option<String>,
    pub image_url: Option<String>,
    pub specialties: Vec<String>,
    pub order_index: i32,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a team member.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateTeamMember {
    #[validate(length(min = 1, max = 200))]
    pub name: String,
    pub role: Option<String>,
    pub role_ro: Option<String>,
    pub role_ru: Option<String>,
    pub role_en: Option<String>,
    pub bio: Option<String>,
    pub bio_ro: Option<String>,
    pub bio_ru: Option<String>,
    pub bio_en: Option<String>,
    #[validate(url)]
    pub image_url: Option<String>,
    pub specialties: Option<Vec<String>>,
    #[validate(range(min = 0))]
    pub order_index: Option<i32>,
}

/// DTO for partially updating a team member.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateTeamMember {
    #[validate(length(min = 1, max = 200))]
    pub name: Option<String>,
    pub role: Option<String>,
    pub role_ro: Option<String>,
    pub role_ru: Option<String>,
    pub role_en: Option<String>,
    pub bio: Option<String>,
    pub bio_ro: Option<String>,
    pub bio_ru: Option<String>,
    pub bio_en: Option<String>,
    #[validate(url)]
    pub image_url: Option<String>,
    pub specialties: Option<Vec<String>>,
    #[validate(range(min = 0))]
    pub order_index: Option<i32>,
}
