//! Social media post model and DTOs.

use serde::{Deserialize, Serialize};
use smilecare_core::types::{DbId, Timestamp};
use sqlx::FromRow;
use validator::{Validate, ValidationError};

/// Platforms a social post may link to.
pub const PLATFORMS: [&str; 4] = ["instagram", "tiktok", "facebook", "youtube"];

/// A row from the `social_media_posts` table.
#[derive(Debug, Clone, PartialEq, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SocialMediaPost {
    pub id: DbId,
    pub platform: String,
    pub url: String,
    pub thumbnail_url: Option<String>,
    pub caption: Option<String>,
    pub caption_ro: Option<String>,
    pub caption_ru: Option<String>,
    pub caption_en: Option<String>,
    pub display_order: i32,
    pub is_active: bool,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a social media post.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateSocialMediaPost {
    #[validate(custom(function = "validate_platform"))]
    pub platform: String,
    #[validate(url)]
    pub url: String,
    #[validate(url)]
    pub thumbnail_url: Option<String>,
    pub caption: Option<String>,
    pub caption_ro: Option<String>,
    pub caption_ru: Option<String>,
    pub caption_en: Option<String>,
    #[validate(range(min = 0))]
    pub display_order: Option<i32>,
    pub is_active: Option<bool>,
}

/// DTO for partially updating a social media post.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateSocialMediaPost {
    #[validate(custom(function = "validate_platform"))]
    pub platform: Option<String>,
    #[validate(url)]
    pub url: Option<String>,
    #[validate(url)]
    pub thumbnail_url: Option<String>,
    pub caption: Option<String>,
    pub caption_ro: Option<String>,
    pub caption_ru: Option<String>,
    pub caption_en: Option<String>,
    #[validate(range(min = 0))]
    pub display_order: Option<i32>,
    pub is_active: Option<bool>,
}

fn validate_platform(platform: &str) -> Result<(), ValidationError> {
    if PLATFORMS.contains(&platform) {
        Ok(())
    } else {
        Err(ValidationError::new("unknown_platform"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn platform_must_be_known() {
        let dto = CreateSocialMediaPost {
            platform: "myspace".into(),
            url: "https://myspace.com/clinic".into(),
            ..Default::default()
        };
        assert!(dto.validate().is_err());

        let dto = CreateSocialMediaPost {
            platform: "tiktok".into(),
            ..dto
        };
        assert!(dto.validate().is_ok());
    }

    #[test]
    fn update_checks_platform_only_when_present() {
        assert!(UpdateSocialMediaPost::default().validate().is_ok());
        let dto = UpdateSocialMediaPost {
            platform: Some("fax".into()),
            ..Default::default()
        };
        assert!(dto.validate().is_err());
    }
}
