//! Content source configuration.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

fn default_data_dir() -> String {
    String::from("data")
}

/// Default request timeout in seconds.
const fn default_timeout_secs() -> u64 {
    10
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ContentConfig {
    /// Site origin serving `/data/papers.json` (e.g. `https://papers.example.com`).
    /// Empty means documents are read from `data_dir`.
    #[serde(default)]
    pub base_url: String,

    /// Local directory holding `papers.json` and `papers/<slug>.json`.
    #[serde(default = "default_data_dir")]
    pub data_dir: String,

    /// HTTP request timeout, in seconds.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for ContentConfig {
    fn default() -> Self {
        Self {
            base_url: String::new(),
            data_dir: default_data_dir(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl ContentConfig {
    /// Whether documents are fetched over HTTP.
    #[must_use]
    pub fn is_remote(&self) -> bool {
        !self.base_url.trim().is_empty()
    }

    #[must_use]
    pub fn data_path(&self) -> PathBuf {
        PathBuf::from(&self.data_dir)
    }
}
