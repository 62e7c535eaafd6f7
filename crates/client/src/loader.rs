//! Page-level content loading.
//!
//! A page needs several content types. They are fetched concurrently and
//! each one picks its effective set on its own: a failed or empty fetch of
//! one type falls back to that type's bundled list and leaves the others
//! alone.

use std::collections::BTreeMap;

use futures::future::join_all;
use serde::Serialize;
use smilecare_core::content::ContentType;
use smilecare_core::record::{self, ContentRecord};
use smilecare_core::selection::{select_from_result, EffectiveContentSet};

use crate::adapter;
use crate::fallback;
use crate::fetcher::ContentTransport;

/// Site pages that render content.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Page {
    Home,
    About,
    Services,
    Blog,
    Contact,
}

impl Page {
    /// Content types the page renders, in section order.
    pub fn content_types(self) -> &'static [ContentType] {
        match self {
            Page::Home => &[
                ContentType::Service,
                ContentType::TeamMember,
                ContentType::Testimonial,
                ContentType::BlogPost,
                ContentType::GalleryMedia,
                ContentType::SocialMediaPost,
            ],
            Page::About => &[ContentType::TeamMember, ContentType::Testimonial],
            Page::Services => &[ContentType::Service, ContentType::GalleryMedia],
            Page::Blog => &[ContentType::BlogPost],
            Page::Contact => &[ContentType::SocialMediaPost],
        }
    }
}

/// Effective content of one page load.
#[derive(Debug, Clone)]
pub struct PageContent {
    pub page: Page,
    sets: BTreeMap<ContentType, EffectiveContentSet<ContentRecord>>,
}

impl PageContent {
    pub fn get(&self, content_type: ContentType) -> Option<&EffectiveContentSet<ContentRecord>> {
        self.sets.get(&content_type)
    }

    /// Records of a content type; empty if the page did not load it.
    pub fn records(&self, content_type: ContentType) -> &[ContentRecord] {
        self.sets
            .get(&content_type)
            .map(|set| set.records.as_slice())
            .unwrap_or_default()
    }

    pub fn sets(&self) -> impl Iterator<Item = (ContentType, &EffectiveContentSet<ContentRecord>)> {
        self.sets.iter().map(|(content_type, set)| (*content_type, set))
    }

    /// Blog post by id, accepting CMS string ids and static integer ids alike.
    pub fn find_blog_post(&self, raw_id: &str) -> Option<&ContentRecord> {
        record::find_by_id(self.records(ContentType::BlogPost), raw_id)
    }
}

/// Loads page content through a [`ContentTransport`].
pub struct ContentLoader<T> {
    transport: T,
}

impl<T: ContentTransport> ContentLoader<T> {
    pub fn new(transport: T) -> Self {
        Self { transport }
    }

    /// Load every content type `page` renders, concurrently.
    pub async fn load(&self, page: Page) -> PageContent {
        let content_types = page.content_types();
        let sets = join_all(content_types.iter().map(|&ct| self.load_type(ct))).await;

        PageContent {
            page,
            sets: content_types.iter().copied().zip(sets).collect(),
        }
    }

    /// Fetch, adapt and select the effective set of a single content type.
    pub async fn load_type(&self, content_type: ContentType) -> EffectiveContentSet<ContentRecord> {
        let result = self
            .transport
            .fetch_content_list(content_type)
            .await
            .map(|mut records| {
                adapter::adapt_all(content_type, &mut records);
                records
            });

        if let Err(err) = &result {
            tracing::warn!(resource = %content_type, error = %err, "Content fetch failed");
        }

        let set = select_from_result(result, fallback::records(content_type));
        if set.is_fallback() {
            tracing::debug!(resource = %content_type, count = set.len(), "Using bundled content");
        }
        set
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use async_trait::async_trait;
    use serde_json::{json, Value};
    use smilecare_core::record::ContentId;
    use smilecare_core::selection::ContentSource;

    use super::*;
    use crate::fetcher::FetchError;

    /// Transport answering from a fixed table; missing entries fail with 500.
    #[derive(Default)]
    struct StubTransport {
        responses: HashMap<ContentType, Vec<Value>>,
    }

    impl StubTransport {
        fn with(mut self, content_type: ContentType, records: Vec<Value>) -> Self {
            self.responses.insert(content_type, records);
            self
        }
    }

    #[async_trait]
    impl ContentTransport for StubTransport {
        async fn fetch_content_list(
            &self,
            content_type: ContentType,
        ) -> Result<Vec<ContentRecord>, FetchError> {
            match self.responses.get(&content_type) {
                Some(values) => Ok(values
                    .iter()
                    .cloned()
                    .filter_map(ContentRecord::from_value)
                    .collect()),
                None => Err(FetchError::Status {
                    status: 500,
                    url: format!("http://stub/{content_type}"),
                }),
            }
        }
    }

    #[tokio::test]
    async fn empty_team_list_shows_bundled_doctors() {
        let loader = ContentLoader::new(StubTransport::default().with(ContentType::TeamMember, vec![]));

        let set = loader.load_type(ContentType::TeamMember).await;

        assert_eq!(set.source, ContentSource::Static);
        assert_eq!(set.len(), 6);
    }

    #[tokio::test]
    async fn failures_are_isolated_per_type() {
        let transport = StubTransport::default().with(
            ContentType::BlogPost,
            vec![json!({"_id": "65a1f0", "blogTitleEn": "From the CMS"})],
        );
        let content = ContentLoader::new(transport).load(Page::Home).await;

        let blog = content.get(ContentType::BlogPost).unwrap();
        assert_eq!(blog.source, ContentSource::Api);
        assert_eq!(blog.len(), 1);

        let services = content.get(ContentType::Service).unwrap();
        assert_eq!(services.source, ContentSource::Static);
        assert_eq!(services.len(), 4);
    }

    #[tokio::test]
    async fn page_loads_only_its_types() {
        let content = ContentLoader::new(StubTransport::default()).load(Page::About).await;

        let loaded: Vec<_> = content.sets().map(|(ct, _)| ct).collect();
        assert_eq!(loaded, [ContentType::TeamMember, ContentType::Testimonial]);
        assert!(content.records(ContentType::BlogPost).is_empty());
    }

    #[tokio::test]
    async fn fetched_blog_posts_are_adapted_and_addressable() {
        let transport = StubTransport::default().with(
            ContentType::BlogPost,
            vec![json!({"_id": "65a1f0", "blogTitleRu": "Новость"})],
        );
        let content = ContentLoader::new(transport).load(Page::Blog).await;

        let post = content.find_blog_post("65a1f0").unwrap();
        assert_eq!(post.id(), Some(ContentId::Text("65a1f0".into())));
        assert_eq!(post.str_field("titleRu"), Some("Новость"));
    }

    #[tokio::test]
    async fn static_blog_posts_match_string_ids() {
        let content = ContentLoader::new(StubTransport::default()).load(Page::Blog).await;

        assert!(content.get(ContentType::BlogPost).unwrap().is_fallback());
        assert_eq!(
            content.find_blog_post("2").and_then(ContentRecord::id),
            Some(ContentId::Number(2))
        );
        assert!(content.find_blog_post("4").is_none());
    }
}
