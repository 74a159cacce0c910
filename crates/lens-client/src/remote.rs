//! HTTP content client.

use std::time::Duration;

use lens_core::{PaperDocument, PaperIndex};

use crate::error::ContentError;
use crate::http::check_response;
use crate::{ContentSource, decode_index, decode_paper};

/// Fetches documents from a site origin over HTTP.
#[derive(Debug, Clone)]
pub struct HttpContentClient {
    http: reqwest::Client,
    base_url: String,
}

impl HttpContentClient {
    /// Create a client for `base_url` (e.g. `https://papers.example.com`).
    ///
    /// # Errors
    ///
    /// Returns [`ContentError::Transport`] if the underlying client fails to build.
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, ContentError> {
        let http = reqwest::Client::builder()
            .user_agent(concat!("paperlens/", env!("CARGO_PKG_VERSION")))
            .timeout(timeout)
            .build()?;
        Ok(Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    #[must_use]
    pub fn index_url(&self) -> String {
        format!("{}/data/papers.json", self.base_url)
    }

    #[must_use]
    pub fn paper_url(&self, slug: &str) -> String {
        format!(
            "{}/data/papers/{}.json",
            self.base_url,
            urlencoding::encode(slug)
        )
    }
}

impl ContentSource for HttpContentClient {
    async fn fetch_index(&self) -> Result<PaperIndex, ContentError> {
        let url = self.index_url();
        tracing::debug!(%url, "fetching paper index");
        let resp = check_response(self.http.get(&url).send().await?, None)?;
        let body = resp.bytes().await?;
        decode_index(&body, &url)
    }

    async fn fetch_paper(&self, slug: &str) -> Result<PaperDocument, ContentError> {
        let url = self.paper_url(slug);
        tracing::debug!(%url, slug, "fetching paper");
        let resp = check_response(self.http.get(&url).send().await?, Some(slug))?;
        let body = resp.bytes().await?;
        decode_paper(&body, &url)
    }
}
