//! Repository for the `team_members` table.

use smilecare_core::types::DbId;
use sqlx::PgPool;

use crate::models::team_member::{CreateTeamMember, TeamMember, UpdateTeamMember};

/// Column list for `team_members` queries.
const COLUMNS: &str = "\
    id, name, role, role_ro, role_ru, role_en, \
    bio, bio_ro, bio_ru, bio_en, image_url, specialties, order_index, \
    created_at, updated_at";

/// Provides CRUD operations for team members.
pub struct TeamMemberRepo;

impl TeamMemberRepo {
    /// List all team members by `order_index`.
    pub async fn list(pool: &PgPool) -> Result<Vec<TeamMember>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM team_members ORDER BY order_index, id");
        sqlx::query_as::<_, TeamMember>(&query).fetch_all(pool).await
    }

    /// Find a team member by its ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<TeamMember>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM team_members WHERE id = $1");
        sqlx::query_as::<_, TeamMember>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Insert a new team member, returning the created row.
    pub async fn create(pool: &PgPool, dto: &CreateTeamMember) -> Result<TeamMember, sqlx::Error> {
        let query = format!(
            "INSERT INTO team_members \
                 (name, role, role_ro, role_ru, role_en, \
                  bio, bio_ro, bio_ru, bio_en, image_url, specialties, order_index) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, \
                     COALESCE($11, '{{}}'::text[]), COALESCE($12, 0)) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, TeamMember>(&query)
            .bind(&dto.name)
            .bind(&dto.role)
            .bind(&dto.role_ro)
            .bind(&dto.role_ru)
            .bind(&dto.role_en)
            .bind(&dto.bio)
            .bind(&dto.bio_ro)
            .bind(&dto.bio_ru)
            .bind(&dto.bio_en)
            .bind(&dto.image_url)
            .bind(&dto.specialties)
            .bind(dto.order_index)
            .fetch_one(pool)
            .await
    }

    /// Partially update a team member. Returns `None` if the ID is unknown.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        dto: &UpdateTeamMember,
    ) -> Result<Option<TeamMember>, sqlx::Error> {
        let query = format!(
            "UPDATE team_members SET \
                 name = COALESCE($2, name), \
                 role = COALESCE($3, role), \
                 role_ro = COALESCE($4, role_ro), \
                 role_ru = COALESCE($5, role_ru), \
                 role_en = COALESCE($6, role_en), \
                 bio = COALESCE($7, bio), \
                 bio_ro = COALESCE($8, bio_ro), \
                 bio_ru = COALESCE($9, bio_ru), \
                 bio_en = COALESCE($10, bio_en), \
                 image_url = COALESCE($11, image_url), \
                 specialties = COALESCE($12, specialties), \
                 order_index = COALESCE($13, order_index) \
             WHERE id = $1 \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, TeamMember>(&query)
            .bind(id)
            .bind(&dto.name)
            .bind(&dto.role)
            .bind(&dto.role_ro)
            .bind(&dto.role_ru)
            .bind(&dto.role_en)
            .bind(&dto.bio)
            .bind(&dto.bio_ro)
            .bind(&dto.bio_ru)
            .bind(&dto.bio_en)
            .bind(&dto.image_url)
            .bind(&dto.specialties)
            .bind(dto.order_index)
            .fetch_optional(pool)
            .await
    }

    /// Delete a team member by ID. Returns `true` if a row was deleted.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM team_members WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
