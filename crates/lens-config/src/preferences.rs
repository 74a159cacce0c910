//! Reader preference persistence and locale configuration.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct PreferencesConfig {
    /// JSON file holding `preferredLang` / `preferredLevel`.
    /// Empty means `<config dir>/paperlens/preferences.json`.
    #[serde(default)]
    pub store_path: String,

    /// Reported user-agent locale (e.g. `zh-CN`). Empty means `LC_ALL`, then `LANG`.
    #[serde(default)]
    pub locale: String,
}

impl PreferencesConfig {
    /// Resolved preference file path, if one can be determined.
    #[must_use]
    pub fn resolved_store_path(&self) -> Option<PathBuf> {
        if self.store_path.trim().is_empty() {
            dirs::config_dir().map(|p| p.join("paperlens").join("preferences.json"))
        } else {
            Some(PathBuf::from(&self.store_path))
        }
    }

    /// Resolved locale string; empty when nothing is reported.
    #[must_use]
    pub fn resolved_locale(&self) -> String {
        if !self.locale.trim().is_empty() {
            return self.locale.clone();
        }
        ["LC_ALL", "LANG"]
            .iter()
            .filter_map(|key| std::env::var(key).ok())
            .find(|value| !value.trim().is_empty())
            .unwrap_or_default()
    }
}
