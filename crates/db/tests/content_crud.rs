//! Repository and storage round trips against a real database.
//!
//! These need `DATABASE_URL` pointing at a PostgreSQL server that
//! `#[sqlx::test]` can create scratch databases on, so they are ignored by
//! default: `cargo test -p smilecare-db -- --ignored`.

use serde_json::json;
use smilecare_db::models::blog_post::{CreateBlogPost, UpdateBlogPost};
use smilecare_db::models::service::CreateService;
use smilecare_db::models::social_media_post::CreateSocialMediaPost;
use smilecare_db::models::team_member::CreateTeamMember;
use smilecare_db::models::testimonial::{CreateTestimonial, UpdateTestimonial};
use smilecare_db::repositories::{BlogPostRepo, ServiceRepo, TeamMemberRepo, TestimonialRepo};
use smilecare_db::storage::ContentStorage;
use sqlx::PgPool;

#[sqlx::test(migrations = "../../db/migrations")]
#[ignore = "requires DATABASE_URL"]
async fn blog_post_crud(pool: PgPool) {
    let created = BlogPostRepo::create(
        &pool,
        &CreateBlogPost {
            title_ro: Some("Albirea dinților".into()),
            title_en: Some("Teeth whitening".into()),
            ..Default::default()
        },
    )
    .await
    .unwrap();
    assert!(created.published);
    assert!(created.published_at.is_some());
    assert_eq!(created.title, "");

    let updated = BlogPostRepo::update(
        &pool,
        created.id,
        &UpdateBlogPost {
            title_ru: Some("Отбеливание зубов".into()),
            ..Default::default()
        },
    )
    .await
    .unwrap()
    .unwrap();
    assert_eq!(updated.title_ru.as_deref(), Some("Отбеливание зубов"));
    assert_eq!(updated.title_en.as_deref(), Some("Teeth whitening"));

    assert!(BlogPostRepo::delete(&pool, created.id).await.unwrap());
    assert!(BlogPostRepo::find_by_id(&pool, created.id).await.unwrap().is_none());
    assert!(!BlogPostRepo::delete(&pool, created.id).await.unwrap());
}

#[sqlx::test(migrations = "../../db/migrations")]
#[ignore = "requires DATABASE_URL"]
async fn team_members_list_by_order_index(pool: PgPool) {
    for (name, order) in [("Dr. C", 3), ("Dr. A", 1), ("Dr. B", 2)] {
        TeamMemberRepo::create(
            &pool,
            &CreateTeamMember {
                name: name.into(),
                order_index: Some(order),
                specialties: Some(vec!["Implantology".into()]),
                ..Default::default()
            },
        )
        .await
        .unwrap();
    }

    let names: Vec<_> = TeamMemberRepo::list(&pool)
        .await
        .unwrap()
        .into_iter()
        .map(|m| m.name)
        .collect();
    assert_eq!(names, ["Dr. A", "Dr. B", "Dr. C"]);
}

#[sqlx::test(migrations = "../../db/migrations")]
#[ignore = "requires DATABASE_URL"]
async fn testimonials_active_filter(pool: PgPool) {
    let visible = TestimonialRepo::create(
        &pool,
        &CreateTestimonial {
            patient_name: "Maria".into(),
            content_ro: Some("Excelent!".into()),
            ..Default::default()
        },
    )
    .await
    .unwrap();
    let hidden = TestimonialRepo::create(
        &pool,
        &CreateTestimonial {
            patient_name: "Victor".into(),
            content_en: Some("Great".into()),
            rating: Some(4),
            ..Default::default()
        },
    )
    .await
    .unwrap();
    TestimonialRepo::update(
        &pool,
        hidden.id,
        &UpdateTestimonial {
            is_active: Some(false),
            ..Default::default()
        },
    )
    .await
    .unwrap();

    let active = TestimonialRepo::list(&pool, true).await.unwrap();
    assert_eq!(active.len(), 1);
    assert_eq!(active[0].id, visible.id);
    assert_eq!(active[0].rating, 5);
    assert_eq!(TestimonialRepo::list(&pool, false).await.unwrap().len(), 2);
}

#[sqlx::test(migrations = "../../db/migrations")]
#[ignore = "requires DATABASE_URL"]
async fn service_translations_round_trip(pool: PgPool) {
    let translations = json!({"ru": {"features": ["Консультация"]}});
    let created = ServiceRepo::create(
        &pool,
        &CreateService {
            title_en: Some("Implants".into()),
            features: Some(vec!["Consultation".into()]),
            translations: Some(translations.clone()),
            ..Default::default()
        },
    )
    .await
    .unwrap();
    assert_eq!(created.translations, translations);
    assert_eq!(created.features, ["Consultation"]);
}

#[sqlx::test(migrations = "../../db/migrations")]
#[ignore = "requires DATABASE_URL"]
async fn empty_social_table_serves_seed_then_stored_rows(pool: PgPool) {
    let storage = ContentStorage::with_pool(pool);
    assert_eq!(storage.list_social_media_posts().await.len(), 3);

    storage
        .create_social_media_post(&CreateSocialMediaPost {
            platform: "facebook".into(),
            url: "https://facebook.com/smilecare/posts/1".into(),
            display_order: Some(1),
            ..Default::default()
        })
        .await
        .unwrap();

    let posts = storage.list_social_media_posts().await;
    assert_eq!(posts.len(), 1);
    assert_eq!(posts[0].platform, "facebook");
}
