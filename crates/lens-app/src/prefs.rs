//! Preference store.
//!
//! A [`KeyValueStore`] is a string key/value capability that may be
//! unavailable at any time. [`Preferences`] sits on top of it and never
//! fails: unavailable storage reads as "no preference" and writes are
//! dropped.

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use lens_core::{Lang, Level};
use serde_json::{Map, Value};
use thiserror::Error;

/// Stored key for the preferred language.
pub const LANG_KEY: &str = "preferredLang";
/// Stored key for the preferred reading level.
pub const LEVEL_KEY: &str = "preferredLevel";

/// The backing storage cannot be used.
#[derive(Debug, Error)]
#[error("preference storage unavailable: {reason}")]
pub struct StorageUnavailable {
    pub reason: String,
}

impl StorageUnavailable {
    pub fn new(reason: impl Into<String>) -> Self {
        Self {
            reason: reason.into(),
        }
    }
}

/// String key/value storage that may fail.
pub trait KeyValueStore: Send + Sync {
    /// # Errors
    ///
    /// Returns [`StorageUnavailable`] if the store cannot be read.
    fn get(&self, key: &str) -> Result<Option<String>, StorageUnavailable>;

    /// # Errors
    ///
    /// Returns [`StorageUnavailable`] if the store cannot be written.
    fn set(&self, key: &str, value: &str) -> Result<(), StorageUnavailable>;
}

// ---------------------------------------------------------------------------
// MemoryStore
// ---------------------------------------------------------------------------

/// In-process store. Always available.
#[derive(Debug, Default)]
pub struct MemoryStore {
    values: Mutex<HashMap<String, String>>,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageUnavailable> {
        let values = self
            .values
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner);
        Ok(values.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageUnavailable> {
        self.values
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
            .insert(key.to_string(), value.to_string());
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// FileStore
// ---------------------------------------------------------------------------

/// A JSON object file of string values.
///
/// Read on every `get`; `set` is read-modify-write. A missing file holds no
/// values. Non-string values are never returned by `get` but survive `set`.
#[derive(Debug, Clone)]
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_all(&self) -> Result<Map<String, Value>, StorageUnavailable> {
        let raw = match fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Map::new()),
            Err(e) => {
                return Err(StorageUnavailable::new(format!(
                    "read {}: {e}",
                    self.path.display()
                )));
            }
        };
        if raw.trim().is_empty() {
            return Ok(Map::new());
        }
        serde_json::from_str(&raw)
            .map_err(|e| StorageUnavailable::new(format!("parse {}: {e}", self.path.display())))
    }

    fn write_all(&self, values: &Map<String, Value>) -> Result<(), StorageUnavailable> {
        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent).map_err(|e| {
                StorageUnavailable::new(format!("mkdir {}: {e}", parent.display()))
            })?;
        }
        let json = serde_json::to_string_pretty(values)
            .map_err(|e| StorageUnavailable::new(format!("encode preferences: {e}")))?;
        fs::write(&self.path, json)
            .map_err(|e| StorageUnavailable::new(format!("write {}: {e}", self.path.display())))
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageUnavailable> {
        Ok(match self.read_all()?.remove(key) {
            Some(Value::String(value)) => Some(value),
            _ => None,
        })
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageUnavailable> {
        let mut values = self.read_all()?;
        values.insert(key.to_string(), Value::String(value.to_string()));
        self.write_all(&values)
    }
}

// ---------------------------------------------------------------------------
// UnavailableStore
// ---------------------------------------------------------------------------

/// Storage that is switched off: every operation fails.
#[derive(Debug, Clone, Copy, Default)]
pub struct UnavailableStore;

impl KeyValueStore for UnavailableStore {
    fn get(&self, _key: &str) -> Result<Option<String>, StorageUnavailable> {
        Err(StorageUnavailable::new("storage disabled"))
    }

    fn set(&self, _key: &str, _value: &str) -> Result<(), StorageUnavailable> {
        Err(StorageUnavailable::new("storage disabled"))
    }
}

// ---------------------------------------------------------------------------
// Preferences
// ---------------------------------------------------------------------------

/// Best-effort language and level preferences.
pub struct Preferences {
    store: Box<dyn KeyValueStore>,
}

impl std::fmt::Debug for Preferences {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Preferences").finish_non_exhaustive()
    }
}

impl Preferences {
    pub fn new(store: impl KeyValueStore + 'static) -> Self {
        Self {
            store: Box::new(store),
        }
    }

    /// Preferences that are never remembered.
    #[must_use]
    pub fn in_memory() -> Self {
        Self::new(MemoryStore::new())
    }

    /// Stored value, or `None` when absent or storage is unavailable.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<String> {
        match self.store.get(key) {
            Ok(value) => value,
            Err(error) => {
                tracing::debug!(key, %error, "preference read ignored");
                None
            }
        }
    }

    /// Store a value; failures are logged and dropped.
    pub fn set(&self, key: &str, value: &str) {
        if let Err(error) = self.store.set(key, value) {
            tracing::debug!(key, %error, "preference write ignored");
        }
    }

    #[must_use]
    pub fn stored_lang(&self) -> Option<Lang> {
        self.get(LANG_KEY)?.parse().ok()
    }

    #[must_use]
    pub fn stored_level(&self) -> Option<Level> {
        self.get(LEVEL_KEY)?.parse().ok()
    }

    /// Stored language, else `zh` for a Chinese locale, else `en`.
    #[must_use]
    pub fn initial_lang(&self, locale: &str) -> Lang {
        self.stored_lang().unwrap_or_else(|| {
            if locale.to_lowercase().contains("zh") {
                Lang::Zh
            } else {
                Lang::En
            }
        })
    }

    #[must_use]
    pub fn initial_level(&self) -> Level {
        self.stored_level().unwrap_or_default()
    }

    pub fn save_lang(&self, lang: Lang) {
        self.set(LANG_KEY, lang.as_str());
    }

    pub fn save_level(&self, level: Level) {
        self.set(LEVEL_KEY, level.as_str());
    }
}

impl Default for Preferences {
    fn default() -> Self {
        Self::in_memory()
    }
}
