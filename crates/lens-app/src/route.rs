//! URL path to view mapping.

use std::fmt;

use lens_render::index_view;

/// What a URL path asks to show.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Route {
    Index,
    Paper(String),
}

impl Route {
    /// Parse a URL path.
    ///
    /// Empty segments are skipped, so `/`, `//` and `` all mean the index and
    /// `/slug/` means `/slug`. Only the first segment names the paper; any
    /// further segments are ignored. The slug is percent-decoded; a segment
    /// that does not decode to UTF-8 is used as written.
    #[must_use]
    pub fn from_path(path: &str) -> Self {
        let path = path.split(['?', '#']).next().unwrap_or_default();
        path.split('/')
            .find(|segment| !segment.is_empty())
            .map_or(Self::Index, |segment| {
                let slug = urlencoding::decode(segment)
                    .map_or_else(|_| segment.to_string(), std::borrow::Cow::into_owned);
                Self::Paper(slug)
            })
    }

    /// Canonical path for this route.
    #[must_use]
    pub fn path(&self) -> String {
        match self {
            Self::Index => String::from("/"),
            Self::Paper(slug) => index_view::card_href(slug),
        }
    }

    #[must_use]
    pub fn slug(&self) -> Option<&str> {
        match self {
            Self::Index => None,
            Self::Paper(slug) => Some(slug),
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.path())
    }
}
