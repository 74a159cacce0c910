use serde::{Deserialize, Serialize};

use super::block::ContentBlock;
use super::index::IndexEntry;
use super::links::Links;
use crate::localized::{Localized, Summary};

/// A full paper document (`papers/<slug>.json`).
///
/// Carries every [`IndexEntry`] field plus the detail-page content.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaperDocument {
    pub slug: String,
    #[serde(default)]
    pub title: Localized,
    #[serde(default)]
    pub subtitle: Localized,
    #[serde(default)]
    pub summary: Summary,
    #[serde(default, deserialize_with = "super::null_as_default")]
    pub authors: Vec<String>,
    #[serde(
        default,
        deserialize_with = "super::blank_as_none",
        skip_serializing_if = "Option::is_none"
    )]
    pub arxiv_id: Option<String>,
    #[serde(
        default,
        deserialize_with = "super::blank_as_none",
        skip_serializing_if = "Option::is_none"
    )]
    pub date: Option<String>,
    #[serde(
        default,
        deserialize_with = "super::blank_as_none",
        skip_serializing_if = "Option::is_none"
    )]
    pub venue: Option<String>,
    #[serde(default, deserialize_with = "super::null_as_default")]
    pub tags: Vec<String>,
    #[serde(default)]
    pub links: Links,
    #[serde(default, deserialize_with = "super::null_as_default")]
    pub sections: Vec<Section>,
}

impl PaperDocument {
    /// The index-entry projection of this document.
    #[must_use]
    pub fn to_index_entry(&self) -> IndexEntry {
        IndexEntry {
            slug: self.slug.clone(),
            title: self.title.clone(),
            summary: self.summary.clone(),
            arxiv_id: self.arxiv_id.clone(),
            date: self.date.clone(),
            tags: self.tags.clone(),
        }
    }
}

/// A titled group of content blocks.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Section {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub title: Localized,
    #[serde(default, deserialize_with = "super::null_as_default")]
    pub blocks: Vec<ContentBlock>,
}
