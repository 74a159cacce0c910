//! Language and reading-level enums.
//!
//! Both serialize to the short lowercase codes used in the JSON documents,
//! the page root attributes, and the preference store.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::errors::CoreError;

// ---------------------------------------------------------------------------
// Lang
// ---------------------------------------------------------------------------

/// Content and UI language.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Lang {
    #[default]
    En,
    Zh,
}

impl Lang {
    /// Every language, in render order.
    pub const ALL: [Self; 2] = [Self::En, Self::Zh];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::En => "en",
            Self::Zh => "zh",
        }
    }
}

impl fmt::Display for Lang {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Lang {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "en" => Ok(Self::En),
            "zh" => Ok(Self::Zh),
            other => Err(CoreError::Validation(format!("unknown language: {other}"))),
        }
    }
}

// ---------------------------------------------------------------------------
// Level
// ---------------------------------------------------------------------------

/// Reading level of explanatory content.
///
/// `hs` targets high-school readers, `grad` targets graduate readers.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Level {
    #[default]
    Hs,
    Grad,
}

impl Level {
    /// Every level, in render order.
    pub const ALL: [Self; 2] = [Self::Hs, Self::Grad];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Hs => "hs",
            Self::Grad => "grad",
        }
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Level {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "hs" => Ok(Self::Hs),
            "grad" => Ok(Self::Grad),
            other => Err(CoreError::Validation(format!("unknown level: {other}"))),
        }
    }
}
