//! # lens-client
//!
//! Content clients for PaperLens documents.
//!
//! Two documents are consumed:
//! - the index, `GET /data/papers.json` (`{ updated, papers: [IndexEntry] }`)
//! - one paper per slug, `GET /data/papers/<slug>.json`
//!
//! [`HttpContentClient`] fetches them from a site origin; [`DirContentSource`]
//! reads the same layout from a local data directory. Both implement
//! [`ContentSource`], which is what the router depends on.
//!
//! Each fetch is a single attempt. Failures are classified by
//! [`ContentError::kind`]: a missing paper is [`ErrorKind::NotFound`],
//! everything else is [`ErrorKind::Transport`].

mod error;
mod http;
mod local;
mod remote;

pub use error::{ContentError, ErrorKind};
pub use local::DirContentSource;
pub use remote::HttpContentClient;

use std::future::Future;

use lens_core::{PaperDocument, PaperIndex};

/// Where the router gets its documents from.
pub trait ContentSource: Send + Sync {
    /// Fetch the paper index.
    fn fetch_index(&self) -> impl Future<Output = Result<PaperIndex, ContentError>> + Send;

    /// Fetch one paper document by slug.
    fn fetch_paper(
        &self,
        slug: &str,
    ) -> impl Future<Output = Result<PaperDocument, ContentError>> + Send;
}

/// Decode an index document, warning about duplicate slugs.
pub(crate) fn decode_index(bytes: &[u8], location: &str) -> Result<PaperIndex, ContentError> {
    let index: PaperIndex =
        serde_json::from_slice(bytes).map_err(|source| ContentError::Decode {
            location: location.to_string(),
            source,
        })?;
    let duplicates = index.duplicate_slugs();
    if !duplicates.is_empty() {
        tracing::warn!(location, ?duplicates, "paper index has duplicate slugs");
    }
    Ok(index)
}

pub(crate) fn decode_paper(bytes: &[u8], location: &str) -> Result<PaperDocument, ContentError> {
    serde_json::from_slice(bytes).map_err(|source| ContentError::Decode {
        location: location.to_string(),
        source,
    })
}
