use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use crate::errors::CoreError;
use crate::localized::{Localized, Summary};

/// One entry of the paper index.
///
/// `slug` is unique across the index and is the only routing key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IndexEntry {
    pub slug: String,
    #[serde(default)]
    pub title: Localized,
    #[serde(default)]
    pub summary: Summary,
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
    #[serde(default, deserialize_with = "super::null_as_default")]
    pub tags: Vec<String>,
}

/// The `papers.json` envelope.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaperIndex {
    #[serde(default)]
    pub updated: String,
    #[serde(default, deserialize_with = "super::null_as_default")]
    pub papers: Vec<IndexEntry>,
}

impl PaperIndex {
    #[must_use]
    pub fn contains(&self, slug: &str) -> bool {
        self.papers.iter().any(|entry| entry.slug == slug)
    }

    /// Slugs that occur more than once, in first-repeat order.
    #[must_use]
    pub fn duplicate_slugs(&self) -> Vec<&str> {
        let mut seen = HashSet::new();
        let mut duplicates = Vec::new();
        for entry in &self.papers {
            let slug = entry.slug.as_str();
            if !seen.insert(slug) && !duplicates.contains(&slug) {
                duplicates.push(slug);
            }
        }
        duplicates
    }

    /// Insert `entry` at the head of the index.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::Validation`] if the slug is already present.
    pub fn prepend(&mut self, entry: IndexEntry) -> Result<(), CoreError> {
        if self.contains(&entry.slug) {
            return Err(CoreError::Validation(format!(
                "slug already in index: {}",
                entry.slug
            )));
        }
        self.papers.insert(0, entry);
        Ok(())
    }
}
