//! HTTP transport for content lists.
//!
//! Each content type is served by exactly one backend: the internal API or
//! the external CMS. A fetch is a single GET returning a JSON array. There
//! are no retries, no caching and no failover between backends; failures
//! are returned to the caller, which falls back to bundled static data.

use std::time::Duration;

use async_trait::async_trait;
use smilecare_core::content::ContentType;
use smilecare_core::record::ContentRecord;

use crate::config::ClientConfig;

/// Errors from the content transport layer.
#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    /// The HTTP request failed (network, DNS, TLS, timeout) or the body was
    /// not a JSON array of objects.
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The backend answered with a non-2xx status.
    #[error("{url} returned {status}")]
    Status { status: u16, url: String },

    /// The backend serving this content type has no base URL configured.
    #[error("no base URL configured for {backend:?} content")]
    NotConfigured { backend: Backend },
}

/// The two backends content can come from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Backend {
    /// The bundled JSON API (`/api`).
    Internal,
    /// The separately hosted CMS.
    Cms,
}

impl Backend {
    /// The backend a content type is wired to.
    pub fn for_content(content_type: ContentType) -> Self {
        match content_type {
            ContentType::BlogPost | ContentType::GalleryMedia => Backend::Cms,
            ContentType::TeamMember
            | ContentType::Testimonial
            | ContentType::Service
            | ContentType::SocialMediaPost => Backend::Internal,
        }
    }
}

/// Source of content lists. Implemented over HTTP by [`HttpContentFetcher`]
/// and by stubs in tests.
#[async_trait]
pub trait ContentTransport: Send + Sync {
    /// Fetch every record of one content type, as the backend returns them.
    async fn fetch_content_list(
        &self,
        content_type: ContentType,
    ) -> Result<Vec<ContentRecord>, FetchError>;
}

/// [`ContentTransport`] over `reqwest`.
pub struct HttpContentFetcher {
    client: reqwest::Client,
    api_base_url: String,
    cms_base_url: Option<String>,
}

impl HttpContentFetcher {
    pub fn new(config: &ClientConfig) -> Result<Self, FetchError> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.fetch_timeout_secs))
            .build()?;
        Ok(Self::with_client(client, config))
    }

    /// Build a fetcher reusing an existing [`reqwest::Client`].
    pub fn with_client(client: reqwest::Client, config: &ClientConfig) -> Self {
        Self {
            client,
            api_base_url: config.api_base_url.clone(),
            cms_base_url: config.cms_base_url.clone(),
        }
    }

    /// Full list URL for a content type, or `None` if its backend is unset.
    pub fn list_url(&self, content_type: ContentType) -> Option<String> {
        let base = match Backend::for_content(content_type) {
            Backend::Internal => self.api_base_url.as_str(),
            Backend::Cms => self.cms_base_url.as_deref()?,
        };

        let mut url = format!("{base}/{}", content_type.resource());
        if content_type == ContentType::Testimonial {
            url.push_str("?active=true");
        }
        Some(url)
    }
}

#[async_trait]
impl ContentTransport for HttpContentFetcher {
    async fn fetch_content_list(
        &self,
        content_type: ContentType,
    ) -> Result<Vec<ContentRecord>, FetchError> {
        let url = self.list_url(content_type).ok_or(FetchError::NotConfigured {
            backend: Backend::for_content(content_type),
        })?;

        let response = self.client.get(&url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status {
                status: status.as_u16(),
                url,
            });
        }

        let records: Vec<ContentRecord> = response.json().await?;
        tracing::debug!(resource = %content_type, count = records.len(), "Fetched content list");
        Ok(records)
    }
}
