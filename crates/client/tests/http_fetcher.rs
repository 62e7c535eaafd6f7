//! `HttpContentFetcher` against a local axum server.

use std::net::SocketAddr;

use assert_matches::assert_matches;
use axum::extract::RawQuery;
use axum::http::StatusCode;
use axum::routing::get;
use axum::{Json, Router};
use serde_json::{json, Value};
use smilecare_client::config::ClientConfig;
use smilecare_client::fetcher::{ContentTransport, FetchError, HttpContentFetcher};
use smilecare_client::loader::{ContentLoader, Page};
use smilecare_core::content::ContentType;
use smilecare_core::selection::ContentSource;

/// Serve `app` on an ephemeral port and return its address.
async fn spawn(app: Router) -> SocketAddr {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    addr
}

fn fetcher(addr: SocketAddr, with_cms: bool) -> HttpContentFetcher {
    HttpContentFetcher::new(&ClientConfig {
        api_base_url: format!("http://{addr}/api"),
        cms_base_url: with_cms.then(|| format!("http://{addr}/cms")),
        fetch_timeout_secs: 5,
    })
    .unwrap()
}

fn backend() -> Router {
    Router::new()
        .route(
            "/api/team-members",
            get(|| async { Json(json!([{"id": 1, "name": "Dr. Test", "roleEn": "Surgeon"}])) }),
        )
        .route(
            "/api/testimonials",
            get(|RawQuery(query): RawQuery| async move {
                Json(json!([{"id": 1, "patientName": "Query", "content": query}]))
            }),
        )
        .route(
            "/api/services",
            get(|| async { (StatusCode::INTERNAL_SERVER_ERROR, "boom") }),
        )
        .route(
            "/api/social-media-posts",
            get(|| async { Json(json!({"not": "an array"})) }),
        )
        .route(
            "/cms/blog-posts",
            get(|| async { Json(json!([{"_id": "65a1f0", "blogTitleEn": "CMS post"}])) }),
        )
        .route("/cms/gallery", get(|| async { Json(json!([])) }))
}

#[tokio::test]
async fn success_returns_records_as_is() {
    let addr = spawn(backend()).await;

    let records = fetcher(addr, true)
        .fetch_content_list(ContentType::TeamMember)
        .await
        .unwrap();

    assert_eq!(records.len(), 1);
    assert_eq!(records[0].str_field("roleEn"), Some("Surgeon"));
}

#[tokio::test]
async fn testimonials_are_requested_with_active_filter() {
    let addr = spawn(backend()).await;

    let records = fetcher(addr, true)
        .fetch_content_list(ContentType::Testimonial)
        .await
        .unwrap();

    assert_eq!(records[0].get("content"), Some(&Value::from("active=true")));
}

#[tokio::test]
async fn non_success_status_is_an_error() {
    let addr = spawn(backend()).await;

    let result = fetcher(addr, true)
        .fetch_content_list(ContentType::Service)
        .await;

    assert_matches!(result, Err(FetchError::Status { status: 500, .. }));
}

#[tokio::test]
async fn non_array_body_is_an_error() {
    let addr = spawn(backend()).await;

    let result = fetcher(addr, true)
        .fetch_content_list(ContentType::SocialMediaPost)
        .await;

    assert_matches!(result, Err(FetchError::Request(_)));
}

#[tokio::test]
async fn missing_cms_base_is_an_error() {
    let addr = spawn(backend()).await;

    let result = fetcher(addr, false)
        .fetch_content_list(ContentType::BlogPost)
        .await;

    assert_matches!(result, Err(FetchError::NotConfigured { .. }));
}

#[tokio::test]
async fn unreachable_server_is_an_error() {
    // Bind then drop to get a port nobody listens on.
    let addr = {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        listener.local_addr().unwrap()
    };

    let result = fetcher(addr, true)
        .fetch_content_list(ContentType::TeamMember)
        .await;

    assert_matches!(result, Err(FetchError::Request(_)));
}

#[tokio::test]
async fn home_page_mixes_sources_per_type() {
    let addr = spawn(backend()).await;
    let content = ContentLoader::new(fetcher(addr, true)).load(Page::Home).await;

    let source = |ct| content.get(ct).unwrap().source;
    assert_eq!(source(ContentType::TeamMember), ContentSource::Api);
    assert_eq!(source(ContentType::Testimonial), ContentSource::Api);
    assert_eq!(source(ContentType::BlogPost), ContentSource::Api);
    // 500, non-array body and empty list all fall back.
    assert_eq!(source(ContentType::Service), ContentSource::Static);
    assert_eq!(source(ContentType::SocialMediaPost), ContentSource::Static);
    assert_eq!(source(ContentType::GalleryMedia), ContentSource::Static);

    assert_eq!(content.records(ContentType::Service).len(), 4);
    assert_eq!(
        content.find_blog_post("65a1f0").and_then(|post| post.str_field("titleEn")),
        Some("CMS post")
    );
}
