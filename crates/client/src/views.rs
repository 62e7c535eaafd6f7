//! Localized view models built from effective content.
//!
//! Every builder takes the language explicitly. Missing fields fall back
//! through the resolver and finally to a locally translated label.

use std::collections::BTreeMap;

use serde::Serialize;
use smilecare_core::content::ContentType;
use smilecare_core::language::LanguageCode;
use smilecare_core::record::{ContentId, ContentRecord};
use smilecare_core::selection::ContentSource;

use crate::loader::{Page, PageContent};

/// Default labels shown when a record lacks a displayable value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Label {
    Dentist,
    Untitled,
    ClinicTeam,
    Patient,
}

impl Label {
    pub fn text(self, lang: LanguageCode) -> &'static str {
        match (self, lang) {
            (Label::Dentist, LanguageCode::Ro) => "Medic stomatolog",
            (Label::Dentist, LanguageCode::Ru) => "Стоматолог",
            (Label::Dentist, LanguageCode::En) => "Dentist",
            (Label::Untitled, LanguageCode::Ro) => "Fără titlu",
            (Label::Untitled, LanguageCode::Ru) => "Без названия",
            (Label::Untitled, LanguageCode::En) => "Untitled",
            (Label::ClinicTeam, LanguageCode::Ro) => "Echipa SmileCare",
            (Label::ClinicTeam, LanguageCode::Ru) => "Команда SmileCare",
            (Label::ClinicTeam, LanguageCode::En) => "SmileCare team",
            (Label::Patient, LanguageCode::Ro) => "Pacient",
            (Label::Patient, LanguageCode::Ru) => "Пациент",
            (Label::Patient, LanguageCode::En) => "Patient",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BlogCard {
    pub id: Option<ContentId>,
    pub title: String,
    pub excerpt: String,
    pub content: String,
    pub image_url: Option<String>,
    pub author: String,
    pub published_at: Option<String>,
}

impl BlogCard {
    pub fn from_record(record: &ContentRecord, lang: LanguageCode) -> Self {
        Self {
            id: record.id(),
            title: record.text("title", lang, Label::Untitled.text(lang)),
            excerpt: record.text("excerpt", lang, ""),
            content: record.text("content", lang, ""),
            image_url: owned(record.str_field("imageUrl")),
            author: record
                .str_field("author")
                .unwrap_or(Label::ClinicTeam.text(lang))
                .to_string(),
            published_at: owned(record.str_field("publishedAt")),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TeamCard {
    pub id: Option<ContentId>,
    pub name: String,
    pub role: String,
    pub bio: String,
    pub image_url: Option<String>,
    pub specialties: Vec<String>,
}

impl TeamCard {
    pub fn from_record(record: &ContentRecord, lang: LanguageCode) -> Self {
        Self {
            id: record.id(),
            name: record.text("name", lang, ""),
            role: record.text("role", lang, Label::Dentist.text(lang)),
            bio: record.text("bio", lang, ""),
            image_url: owned(record.str_field("imageUrl")),
            specialties: record.list("specialties", lang),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TestimonialCard {
    pub id: Option<ContentId>,
    pub patient_name: String,
    pub content: String,
    pub rating: i64,
    pub treatment: Option<String>,
}

impl TestimonialCard {
    pub fn from_record(record: &ContentRecord, lang: LanguageCode) -> Self {
        Self {
            id: record.id(),
            patient_name: record
                .str_field("patientName")
                .unwrap_or(Label::Patient.text(lang))
                .to_string(),
            content: record.text("content", lang, ""),
            rating: record.int_field("rating").unwrap_or(5).clamp(1, 5),
            treatment: owned(record.str_field("treatment")),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ServiceCard {
    pub id: Option<ContentId>,
    pub title: String,
    pub description: String,
    pub features: Vec<String>,
    pub price: Option<String>,
    pub icon: Option<String>,
}

impl ServiceCard {
    pub fn from_record(record: &ContentRecord, lang: LanguageCode) -> Self {
        Self {
            id: record.id(),
            title: record.text("title", lang, Label::Untitled.text(lang)),
            description: record.text("description", lang, ""),
            features: record.list("features", lang),
            price: owned(record.str_field("price")),
            icon: owned(record.str_field("icon")),
        }
    }
}

/// A before/after comparison item.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GalleryCard {
    pub id: Option<ContentId>,
    pub title: String,
    pub description: String,
    pub before_image: Option<String>,
    pub after_image: Option<String>,
}

impl GalleryCard {
    pub fn from_record(record: &ContentRecord, lang: LanguageCode) -> Self {
        Self {
            id: record.id(),
            title: record.text("title", lang, ""),
            description: record.text("description", lang, ""),
            before_image: owned(record.str_field("beforeImage")),
            after_image: owned(record.str_field("afterImage")),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SocialCard {
    pub id: Option<ContentId>,
    pub platform: String,
    pub url: Option<String>,
    pub thumbnail_url: Option<String>,
    pub caption: String,
}

impl SocialCard {
    pub fn from_record(record: &ContentRecord, lang: LanguageCode) -> Self {
        Self {
            id: record.id(),
            platform: record.str_field("platform").unwrap_or_default().to_string(),
            url: owned(record.str_field("url")),
            thumbnail_url: owned(record.str_field("thumbnailUrl")),
            caption: record.text("caption", lang, ""),
        }
    }
}

/// Localized view of one page load.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PageView {
    pub page: Page,
    pub language: LanguageCode,
    /// Which source each section came from.
    pub sources: BTreeMap<ContentType, ContentSource>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub services: Option<Vec<ServiceCard>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub team: Option<Vec<TeamCard>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub testimonials: Option<Vec<TestimonialCard>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub blog_posts: Option<Vec<BlogCard>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gallery: Option<Vec<GalleryCard>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub social_media_posts: Option<Vec<SocialCard>>,
}

impl PageView {
    pub fn build(content: &PageContent, lang: LanguageCode) -> Self {
        fn cards<C>(
            content: &PageContent,
            content_type: ContentType,
            lang: LanguageCode,
            build: fn(&ContentRecord, LanguageCode) -> C,
        ) -> Option<Vec<C>> {
            content
                .get(content_type)
                .map(|set| set.iter().map(|record| build(record, lang)).collect())
        }

        Self {
            page: content.page,
            language: lang,
            sources: content.sets().map(|(ct, set)| (ct, set.source)).collect(),
            services: cards(content, ContentType::Service, lang, ServiceCard::from_record),
            team: cards(content, ContentType::TeamMember, lang, TeamCard::from_record),
            testimonials: cards(content, ContentType::Testimonial, lang, TestimonialCard::from_record),
            blog_posts: cards(content, ContentType::BlogPost, lang, BlogCard::from_record),
            gallery: cards(content, ContentType::GalleryMedia, lang, GalleryCard::from_record),
            social_media_posts: cards(
                content,
                ContentType::SocialMediaPost,
                lang,
                SocialCard::from_record,
            ),
        }
    }
}

fn owned(value: Option<&str>) -> Option<String> {
    value.map(str::to_string)
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn record(value: serde_json::Value) -> ContentRecord {
        ContentRecord::from_value(value).unwrap()
    }

    #[test]
    fn team_member_without_role_is_a_dentist() {
        let member = record(json!({"id": 7, "name": "Dr. Ion"}));
        assert_eq!(TeamCard::from_record(&member, LanguageCode::Ru).role, "Стоматолог");
        assert_eq!(TeamCard::from_record(&member, LanguageCode::Ro).role, "Medic stomatolog");
    }

    #[test]
    fn blog_card_follows_fallback_chain() {
        let post = record(json!({"_id": "a1", "titleEn": "Hello", "titleRo": "", "excerpt": "Legacy"}));
        let card = BlogCard::from_record(&post, LanguageCode::Ro);
        assert_eq!(card.title, "Hello");
        assert_eq!(card.excerpt, "Legacy");
        assert_eq!(card.author, "Echipa SmileCare");
        assert_eq!(card.id, Some(ContentId::Text("a1".into())));
    }

    #[test]
    fn service_card_reads_translated_features() {
        let service = record(json!({
            "title": "Implant",
            "features": ["flat"],
            "translations": {"ru": {"features": ["Консультация"]}, "ro": {"features": ["Consultație"]}}
        }));
        assert_eq!(ServiceCard::from_record(&service, LanguageCode::Ru).features, ["Консультация"]);
        assert_eq!(ServiceCard::from_record(&service, LanguageCode::En).features, ["Consultație"]);
    }

    #[test]
    fn testimonial_rating_is_clamped() {
        let testimonial = record(json!({"patientName": "Ana", "contentEn": "Great", "rating": 9}));
        let card = TestimonialCard::from_record(&testimonial, LanguageCode::En);
        assert_eq!(card.rating, 5);
        assert_eq!(card.content, "Great");
    }

    #[test]
    fn untitled_default_is_localized() {
        let card = ServiceCard::from_record(&record(json!({})), LanguageCode::En);
        assert_eq!(card.title, "Untitled");
        assert!(card.features.is_empty());
    }
}
