//! Cross-cutting error types for PaperLens.
//!
//! Transport and storage errors live in their own crates (`ContentError` in
//! `lens-client`, `StorageUnavailable` in `lens-app`). A unified error is
//! deferred to `lens-cli` where everything converges on `anyhow`.

use thiserror::Error;

/// Errors raised while validating or (de)serializing content documents.
#[derive(Debug, Error)]
pub enum CoreError {
    /// Data failed validation (slug format, duplicate entries, etc.).
    #[error("Validation error: {0}")]
    Validation(String),

    /// A document could not be encoded or decoded.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
