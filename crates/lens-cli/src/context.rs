use std::time::Duration;

use anyhow::Context;
use lens_app::{FileStore, MemoryHistory, Preferences, Router, UnavailableStore};
use lens_client::{ContentError, ContentSource, DirContentSource, HttpContentClient};
use lens_config::LensConfig;
use lens_core::{PaperDocument, PaperIndex};

/// Shared state for command handlers.
pub struct AppContext {
    pub config: LensConfig,
}

impl AppContext {
    pub const fn new(config: LensConfig) -> Self {
        Self { config }
    }

    /// Content source selected by `content.base_url`.
    pub fn source(&self) -> anyhow::Result<Source> {
        let content = &self.config.content;
        if content.is_remote() {
            let client =
                HttpContentClient::new(&content.base_url, Duration::from_secs(content.timeout_secs))
                    .context("failed to build HTTP content client")?;
            Ok(Source::Http(client))
        } else {
            Ok(Source::Dir(DirContentSource::new(content.data_path())))
        }
    }

    /// File-backed preferences, or disabled storage when no path resolves.
    pub fn preferences(&self) -> Preferences {
        match self.config.preferences.resolved_store_path() {
            Some(path) => Preferences::new(FileStore::new(path)),
            None => {
                tracing::debug!("no preference store path; preferences are not persisted");
                Preferences::new(UnavailableStore)
            }
        }
    }

    pub fn locale(&self) -> String {
        self.config.preferences.resolved_locale()
    }

    /// Router positioned at `path`, not yet routed.
    pub fn router(&self, path: &str, prefs: Preferences) -> anyhow::Result<Router<Source>> {
        Ok(Router::new(
            self.source()?,
            prefs,
            MemoryHistory::new(path),
            &self.locale(),
        ))
    }
}

/// Either content source, chosen at runtime.
pub enum Source {
    Http(HttpContentClient),
    Dir(DirContentSource),
}

impl ContentSource for Source {
    async fn fetch_index(&self) -> Result<PaperIndex, ContentError> {
        match self {
            Self::Http(client) => client.fetch_index().await,
            Self::Dir(dir) => dir.fetch_index().await,
        }
    }

    async fn fetch_paper(&self, slug: &str) -> Result<PaperDocument, ContentError> {
        match self {
            Self::Http(client) => client.fetch_paper(slug).await,
            Self::Dir(dir) => dir.fetch_paper(slug).await,
        }
    }
}
