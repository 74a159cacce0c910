//! Per-language content containers.

use serde::{Deserialize, Serialize};

use crate::enums::{Lang, Level};

/// A value keyed by language.
///
/// Missing and `null` translations are both absent. Keys other than `en` and
/// `zh` are ignored when reading documents.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Localized<T = String> {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub en: Option<T>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub zh: Option<T>,
}

impl<T> Default for Localized<T> {
    fn default() -> Self {
        Self { en: None, zh: None }
    }
}

impl<T> Localized<T> {
    /// Both translations present.
    pub fn new(en: T, zh: T) -> Self {
        Self {
            en: Some(en),
            zh: Some(zh),
        }
    }

    #[must_use]
    pub const fn get(&self, lang: Lang) -> Option<&T> {
        match lang {
            Lang::En => self.en.as_ref(),
            Lang::Zh => self.zh.as_ref(),
        }
    }

    /// Present translations in canonical language order.
    pub fn iter(&self) -> impl Iterator<Item = (Lang, &T)> {
        Lang::ALL
            .into_iter()
            .filter_map(move |lang| self.get(lang).map(|value| (lang, value)))
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.en.is_none() && self.zh.is_none()
    }
}

impl Localized<String> {
    /// Borrow a translation as `&str`, empty when absent.
    #[must_use]
    pub fn text(&self, lang: Lang) -> &str {
        self.get(lang).map_or("", String::as_str)
    }
}

/// Leveled summary: one localized paragraph per reading level.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Summary {
    #[serde(default)]
    pub hs: Localized,
    #[serde(default)]
    pub grad: Localized,
}

impl Summary {
    #[must_use]
    pub const fn get(&self, level: Level) -> &Localized {
        match level {
            Level::Hs => &self.hs,
            Level::Grad => &self.grad,
        }
    }
}
