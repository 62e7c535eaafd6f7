//! Clinic service model and DTOs.
//!
//! Feature lists exist both flat (`features`) and per language inside
//! `translations` (`{"ru": {"features": [...]}}`).

use serde::{Deserialize, Serialize};
use smilecare_core::types::{DbId, Timestamp};
use sqlx::FromRow;
use validator::{Validate, ValidationError};

use super::{any_text, blanks_every_provided, missing_localized};

/// A row from the `services` table.
#[derive(Debug, Clone, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Service {
    pub id: DbId,
    pub title: String,
    pub title_ro: Option<String>,
    pub title_ru: Option<String>,
    pub title_en: Option<String>,
    pub description: Option<String>,
    pub description_ro: Option<String>,
    pub description_ru: Option<String>,
    pub description_en: Option<String>,
    pub features: Vec<String>,
    pub translations: serde_json::Value,
    pub price: Option<String>,
    pub icon: Option<String>,
    pub order_index: i32,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a service. At least one title form is required.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
#[validate(schema(function = "validate_create_title"))]
pub struct CreateService {
    pub title: Option<String>,
    pub title_ro: Option<String>,
    pub title_ru: Option<String>,
    pub title_en: Option<String>,
    pub description: Option<String>,
    pub description_ro: Option<String>,
    pub description_ru: Option<String>,
    pub description_en: Option<String>,
    pub features: Option<Vec<String>>,
    #[validate(custom(function = "validate_translations"))]
    pub translations: Option<serde_json::Value>,
    pub price: Option<String>,
    pub icon: Option<String>,
    #[validate(range(min = 0))]
    pub order_index: Option<i32>,
}

/// DTO for partially updating a service.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
#[validate(schema(function = "validate_update_title"))]
pub struct UpdateService {
    pub title: Option<String>,
    pub title_ro: Option<String>,
    pub title_ru: Option<String>,
    pub title_en: Option<String>,
    pub description: Option<String>,
    pub description_ro: Option<String>,
    pub description_ru: Option<String>,
    pub description_en: Option<String>,
    pub features: Option<Vec<String>>,
    #[validate(custom(function = "validate_translations"))]
    pub translations: Option<serde_json::Value>,
    pub price: Option<String>,
    pub icon: Option<String>,
    #[validate(range(min = 0))]
    pub order_index: Option<i32>,
}

fn validate_create_title(dto: &CreateService) -> Result<(), ValidationError> {
    if any_text(&[&dto.title, &dto.title_ro, &dto.title_ru, &dto.title_en]) {
        Ok(())
    } else {
        Err(missing_localized("title_required"))
    }
}

fn validate_update_title(dto: &UpdateService) -> Result<(), ValidationError> {
    if blanks_every_provided(&[&dto.title, &dto.title_ro, &dto.title_ru, &dto.title_en]) {
        Err(missing_localized("title_required"))
    } else {
        Ok(())
    }
}

/// `translations` must be an object keyed by language code.
fn validate_translations(value: &serde_json::Value) -> Result<(), ValidationError> {
    if value.is_object() {
        Ok(())
    } else {
        Err(ValidationError::new("translations_not_object"))
    }
}
