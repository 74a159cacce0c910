use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// A labelled external link (`"PDF" -> "https://..."`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Link {
    pub label: String,
    pub url: String,
}

/// Ordered `label -> URL` mapping.
///
/// Serialized as a JSON object; document order is kept so the links panel
/// lists entries the way the author wrote them.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Links(Vec<Link>);

impl Links {
    #[must_use]
    pub const fn new(links: Vec<Link>) -> Self {
        Self(links)
    }

    /// Every link, including placeholders with an empty URL.
    pub fn iter(&self) -> impl Iterator<Item = &Link> {
        self.0.iter()
    }

    /// Links whose URL is not blank.
    pub fn non_empty(&self) -> impl Iterator<Item = &Link> {
        self.0.iter().filter(|link| !link.url.trim().is_empty())
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl Serialize for Links {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for link in &self.0 {
            map.serialize_entry(&link.label, &link.url)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for Links {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct LinksVisitor;

        impl<'de> Visitor<'de> for LinksVisitor {
            type Value = Links;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("an object mapping link labels to URLs")
            }

            fn visit_unit<E: serde::de::Error>(self) -> Result<Links, E> {
                Ok(Links::default())
            }

            fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Links, A::Error> {
                let mut links = Vec::with_capacity(access.size_hint().unwrap_or(0));
                while let Some((label, url)) = access.next_entry::<String, Option<String>>()? {
                    links.push(Link {
                        label,
                        url: url.unwrap_or_default(),
                    });
                }
                Ok(Links(links))
            }
        }

        deserializer.deserialize_any(LinksVisitor)
    }
}
