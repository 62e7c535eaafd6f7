//! Patient testimonial model and DTOs.

use serde::{Deserialize, Serialize};
use smilecare_core::types::{DbId, Timestamp};
use sqlx::FromRow;
use validator::{Validate, ValidationError};

use super::{any_text, missing_localized};

/// A row from the `testimonials` table.
#[derive(Debug, Clone, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Testimonial {
    pub id: DbId,
    pub patient_name: String,
    pub content: Option<String>,
    pub content_ro: Option<String>,
    pub content_ru: Option<String>,
    pub content_en: Option<String>,
    pub rating: i32,
    pub treatment: Option<String>,
    pub image_url: Option<String>,
    pub is_active: bool,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a testimonial. At least one content form is required.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
#[validate(schema(function = "validate_create_content"))]
pub struct CreateTestimonial {
    #[validate(length(min = 1, max = 200))]
    pub patient_name: String,
    pub content: Option<String>,
    pub content_ro: Option<String>,
    pub content_ru: Option<String>,
    pub content_en: Option<String>,
    #[validate(range(min = 1, max = 5))]
    pub rating: Option<i32>,
    pub treatment: Option<String>,
    #[validate(url)]
    pub image_url: Option<String>,
    pub is_active: Option<bool>,
}

/// DTO for partially updating a testimonial.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateTestimonial {
    #[validate(length(min = 1, max = 200))]
    pub patient_name: Option<String>,
    pub content: Option<String>,
    pub content_ro: Option<String>,
    pub content_ru: Option<String>,
    pub content_en: Option<String>,
    #[validate(range(min = 1, max = 5))]
    pub rating: Option<i32>,
    pub treatment: Option<String>,
    #[validate(url)]
    pub image_url: Option<String>,
    pub is_active: Option<bool>,
}

fn validate_create_content(dto: &CreateTestimonial) -> Result<(), ValidationError> {
    if any_text(&[&dto.content, &dto.content_ro, &dto.content_ru, &dto.content_en]) {
        Ok(())
    } else {
        Err(missing_localized("content_required"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid() -> CreateTestimonial {
        CreateTestimonial {
            patient_name: "Ana M.".into(),
            content_ro: Some("Mulțumesc pentru zâmbet!".into()),
            ..Default::default()
        }
    }

    #[test]
    fn valid_testimonial_passes() {
        assert!(valid().validate().is_ok());
    }

    #[test]
    fn rating_must_be_one_to_five() {
        for rating in [0, 6] {
            let dto = CreateTestimonial {
                rating: Some(rating),
                ..valid()
            };
            assert!(dto.validate().is_err(), "rating {rating} should be rejected");
        }
    }

    #[test]
    fn content_is_required() {
        let dto = CreateTestimonial {
            content_ro: None,
            ..valid()
        };
        assert!(dto.validate().is_err());
    }
}
