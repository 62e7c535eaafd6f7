//! Blog post model and DTOs.

use serde::{Deserialize, Serialize};
use smilecare_core::types::{DbId, Timestamp};
use sqlx::FromRow;
use validator::{Validate, ValidationError};

use super::{any_text, blanks_every_provided, missing_localized};

/// A row from the `blog_posts` table.
#[derive(Debug, Clone, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BlogPost {
    pub id: DbId,
    pub slug: Option<String>,
    pub title: String,
    pub title_ro: Option<String>,
    pub title_ru: Option<String>,
    pub title_en: Option<String>,
    pub excerpt: Option<String>,
    pub excerpt_ro: Option<String>,
    pub excerpt_ru: Option<String>,
    pub excerpt_en: Option<String>,
    pub content: Option<String>,
    pub content_ro: Option<String>,
    pub content_ru: Option<String>,
    pub content_en: Option<String>,
    pub image_url: Option<String>,
    pub author: Option<String>,
    pub category: Option<String>,
    pub published: bool,
    pub published_at: Option<Timestamp>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a blog post. At least one title form is required.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
#[validate(schema(function = "validate_create_title"))]
pub struct CreateBlogPost {
    #[validate(length(min = 1, max = 200))]
    pub slug: Option<String>,
    pub title: Option<String>,
    pub title_ro: Option<String>,
    pub title_ru: Option<String>,
    pub title_en: Option<String>,
    pub excerpt: Option<String>,
    pub excerpt_ro: Option<String>,
    pub excerpt_ru: Option<String>,
    pub excerpt_en: Option<String>,
    pub content: Option<String>,
    pub content_ro: Option<String>,
    pub content_ru: Option<String>,
    pub content_en: Option<String>,
    #[validate(url)]
    pub image_url: Option<String>,
    pub author: Option<String>,
    pub category: Option<String>,
    pub published: Option<bool>,
    pub published_at: Option<Timestamp>,
}

/// DTO for partially updating a blog post.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
#[validate(schema(function = "validate_update_title"))]
pub struct UpdateBlogPost {
    #[validate(length(min = 1, max = 200))]
    pub slug: Option<String>,
    pub title: Option<String>,
    pub title_ro: Option<String>,
    pub title_ru: Option<String>,
    pub title_en: Option<String>,
    pub excerpt: Option<String>,
    pub excerpt_ro: Option<String>,
    pub excerpt_ru: Option<String>,
    pub excerpt_en: Option<String>,
    pub content: Option<String>,
    pub content_ro: Option<String>,
    pub content_ru: Option<String>,
    pub content_en: Option<String>,
    #[validate(url)]
    pub image_url: Option<String>,
    pub author: Option<String>,
    pub category: Option<String>,
    pub published: Option<bool>,
    pub published_at: Option<Timestamp>,
}

fn validate_create_title(dto: &CreateBlogPost) -> Result<(), ValidationError> {
    if any_text(&[&dto.title, &dto.title_ro, &dto.title_ru, &dto.title_en]) {
        Ok(())
    } else {
        Err(missing_localized("title_required"))
    }
}

fn validate_update_title(dto: &UpdateBlogPost) -> Result<(), ValidationError> {
    if blanks_every_provided(&[&dto.title, &dto.title_ro, &dto.title_ru, &dto.title_en]) {
        Err(missing_localized("title_required"))
    } else {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn create_requires_some_title() {
        let dto = CreateBlogPost::default();
        assert!(dto.validate().is_err());

        let dto = CreateBlogPost {
            title_ru: Some("Имплантация".into()),
            ..Default::default()
        };
        assert!(dto.validate().is_ok());
    }

    #[test]
    fn blank_title_forms_do_not_count() {
        let dto = CreateBlogPost {
            title: Some("   ".into()),
            title_en: Some(String::new()),
            ..Default::default()
        };
        assert!(dto.validate().is_err());
    }

    #[test]
    fn update_cannot_blank_every_provided_title() {
        let dto = UpdateBlogPost {
            title_ro: Some(String::new()),
            title_en: Some("  ".into()),
            ..Default::default()
        };
        assert!(dto.validate().is_err());

        let dto = UpdateBlogPost {
            title_ro: Some(String::new()),
            title_ru: Some("Отбеливание".into()),
            ..Default::default()
        };
        assert!(dto.validate().is_ok());

        let dto = UpdateBlogPost {
            author: Some("Dr. Rusu".into()),
            ..Default::default()
        };
        assert!(dto.validate().is_ok());
    }

    #[test]
    fn image_url_must_be_a_url() {
        let dto = UpdateBlogPost {
            image_url: Some("not a url".into()),
            ..Default::default()
        };
        assert!(dto.validate().is_err());
    }

    #[test]
    fn create_accepts_camel_case_json() {
        let dto: CreateBlogPost = serde_json::from_value(serde_json::json!({
            "titleRo": "Albirea dinților",
            "excerptEn": "Whitening basics",
            "imageUrl": "https://cdn.example.com/whitening.jpg"
        }))
        .unwrap();
        assert_eq!(dto.title_ro.as_deref(), Some("Albirea dinților"));
        assert!(dto.validate().is_ok());
    }
}
