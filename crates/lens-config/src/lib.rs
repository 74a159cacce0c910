//! # lens-config
//!
//! Layered configuration loading for PaperLens using figment.
//!
//! Configuration sources (in priority order, highest wins):
//! 1. Environment variables (`PAPERLENS_*` prefix, `__` as separator)
//! 2. Project-level `.paperlens/config.toml`
//! 3. User-level `~/.config/paperlens/config.toml`
//! 4. Built-in defaults
//!
//! # Environment Variable Mapping
//!
//! Figment maps `PAPERLENS_CONTENT__BASE_URL` -> `content.base_url`,
//! `PAPERLENS_PREFERENCES__LOCALE` -> `preferences.locale`, etc.
//!
//! # Usage
//!
//! ```no_run
//! use lens_config::LensConfig;
//!
//! let config = LensConfig::load_with_dotenv().expect("config");
//! if config.content.is_remote() {
//!     println!("serving from {}", config.content.base_url);
//! }
//! ```

mod content;
mod error;
mod general;
mod preferences;

pub use content::ContentConfig;
pub use error::ConfigError;
pub use general::GeneralConfig;
pub use preferences::PreferencesConfig;

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Environment variable prefix for every setting.
pub const ENV_PREFIX: &str = "PAPERLENS_";

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct LensConfig {
    #[serde(default)]
    pub content: ContentConfig,
    #[serde(default)]
    pub preferences: PreferencesConfig,
    #[serde(default)]
    pub general: GeneralConfig,
}

impl LensConfig {
    /// Load configuration from all sources (TOML files + environment variables).
    ///
    /// Does NOT call `dotenvy` -- use [`Self::load_with_dotenv`] for `.env` support.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if a source cannot be parsed or a value fails
    /// [`Self::validate`].
    pub fn load() -> Result<Self, ConfigError> {
        let config: Self = Self::figment().extract()?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration with `.env` file support.
    ///
    /// # Errors
    ///
    /// Same as [`Self::load`].
    pub fn load_with_dotenv() -> Result<Self, ConfigError> {
        let _ = dotenvy::dotenv();
        Self::load()
    }

    /// Build the figment provider chain.
    ///
    /// Public so tests can add providers on top.
    #[must_use]
    pub fn figment() -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        // Layer 1: User-global config
        if let Some(global_path) = Self::global_config_path()
            && global_path.exists()
        {
            figment = figment.merge(Toml::file(global_path));
        }

        // Layer 2: Project-local config
        let local_path = PathBuf::from(".paperlens/config.toml");
        if local_path.exists() {
            figment = figment.merge(Toml::file(local_path));
        }

        // Layer 3: Environment variables (highest priority)
        figment.merge(Env::prefixed(ENV_PREFIX).split("__"))
    }

    /// Reject values that would only fail later at request time.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidValue`] for a zero timeout or a base URL
    /// without an `http://` / `https://` scheme.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.content.timeout_secs == 0 {
            return Err(ConfigError::InvalidValue {
                field: "content.timeout_secs".to_string(),
                reason: "must be greater than zero".to_string(),
            });
        }
        if self.content.is_remote()
            && !(self.content.base_url.starts_with("http://")
                || self.content.base_url.starts_with("https://"))
        {
            return Err(ConfigError::InvalidValue {
                field: "content.base_url".to_string(),
                reason: format!("expected an http(s) URL, got '{}'", self.content.base_url),
            });
        }
        Ok(())
    }

    /// Path to the user-global config file.
    fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("paperlens").join("config.toml"))
    }
}
