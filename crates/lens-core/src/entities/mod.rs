//! Content documents consumed by the rendering engine.
//!
//! Two documents are served: the index (`papers.json`) and one paper document
//! per slug (`papers/<slug>.json`). Optional string fields treat an empty
//! value the same as a missing one, since the scaffolder writes `""`
//! placeholders for authors to fill in.

mod block;
mod index;
mod links;
mod paper;

pub use block::{BlockBody, ContentBlock};
pub use index::{IndexEntry, PaperIndex};
pub use links::{Link, Links};
pub use paper::{PaperDocument, Section};

use serde::{Deserialize, Deserializer};

/// Deserialize an optional string, mapping blank values to `None`.
pub(crate) fn blank_as_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<String>::deserialize(deserializer)?;
    Ok(value.filter(|v| !v.trim().is_empty()))
}

/// Deserialize a collection, mapping `null` to its default.
pub(crate) fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
