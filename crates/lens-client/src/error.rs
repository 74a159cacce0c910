//! Content client error types.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while fetching content documents.
#[derive(Debug, Error)]
pub enum ContentError {
    /// HTTP transport error (connection, timeout, body read).
    #[error("HTTP error: {0}")]
    Transport(#[from] reqwest::Error),

    /// The requested paper does not exist.
    #[error("paper not found: {slug}")]
    NotFound { slug: String },

    /// The server answered with a non-success status other than "absent".
    #[error("unexpected status {status} from {url}")]
    Status { status: u16, url: String },

    /// Reading a local document failed.
    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The document is not valid JSON for the content model.
    #[error("malformed document at {location}: {source}")]
    Decode {
        location: String,
        #[source]
        source: serde_json::Error,
    },
}

/// Coarse classification used by the router.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// The resource is absent. Only produced by paper fetches.
    NotFound,
    /// Anything else: the request itself failed.
    Transport,
}

impl ContentError {
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::NotFound { .. } => ErrorKind::NotFound,
            Self::Transport(_) | Self::Status { .. } | Self::Io { .. } | Self::Decode { .. } => {
                ErrorKind::Transport
            }
        }
    }

    #[must_use]
    pub const fn is_not_found(&self) -> bool {
        matches!(self.kind(), ErrorKind::NotFound)
    }
}
