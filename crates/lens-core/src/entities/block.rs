use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::enums::Level;
use crate::localized::Localized;

/// One leveled unit of section content.
///
/// On the wire a block is flat: `{"level": "hs", "type": "text", "text": {...}}`.
/// The level only gates visibility; every block is rendered regardless.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawBlock", into = "RawBlock")]
pub struct ContentBlock {
    pub level: Level,
    pub body: BlockBody,
}

/// Kind-specific payload of a [`ContentBlock`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BlockBody {
    Text(Localized),
    List(Localized<Vec<String>>),
    Note(Localized),
    Equation(Localized<Vec<String>>),
    /// A `type` this version does not know; renders as an empty container.
    Unknown(String),
}

impl BlockBody {
    /// The wire `type` tag.
    #[must_use]
    pub fn kind(&self) -> &str {
        match self {
            Self::Text(_) => "text",
            Self::List(_) => "list",
            Self::Note(_) => "note",
            Self::Equation(_) => "equation",
            Self::Unknown(kind) => kind,
        }
    }
}

#[derive(Serialize, Deserialize)]
struct RawBlock {
    #[serde(default)]
    level: Level,
    #[serde(rename = "type", default)]
    kind: String,
    #[serde(flatten)]
    payload: Map<String, Value>,
}

fn take<T: DeserializeOwned + Default>(
    payload: &mut Map<String, Value>,
    kind: &str,
    key: &str,
) -> Result<T, String> {
    match payload.remove(key) {
        None | Some(Value::Null) => Ok(T::default()),
        Some(value) => serde_json::from_value(value).map_err(|e| format!("{kind} block `{key}`: {e}")),
    }
}

impl TryFrom<RawBlock> for ContentBlock {
    type Error = String;

    fn try_from(raw: RawBlock) -> Result<Self, Self::Error> {
        let RawBlock {
            level,
            kind,
            mut payload,
        } = raw;
        let body = match kind.as_str() {
            "text" => BlockBody::Text(take(&mut payload, &kind, "text")?),
            "list" => BlockBody::List(take(&mut payload, &kind, "items")?),
            "note" => BlockBody::Note(take(&mut payload, &kind, "text")?),
            "equation" => BlockBody::Equation(take(&mut payload, &kind, "lines")?),
            _ => BlockBody::Unknown(kind),
        };
        Ok(Self { level, body })
    }
}

impl From<ContentBlock> for RawBlock {
    fn from(block: ContentBlock) -> Self {
        let kind = block.body.kind().to_string();
        let mut payload = Map::new();
        let (key, value) = match block.body {
            BlockBody::Text(text) | BlockBody::Note(text) => {
                ("text", serde_json::to_value(text).unwrap_or_default())
            }
            BlockBody::List(items) => ("items", serde_json::to_value(items).unwrap_or_default()),
            BlockBody::Equation(lines) => {
                ("lines", serde_json::to_value(lines).unwrap_or_default())
            }
            BlockBody::Unknown(_) => {
                return Self {
                    level: block.level,
                    kind,
                    payload,
                };
            }
        };
        payload.insert(key.to_string(), value);
        Self {
            level: block.level,
            kind,
            payload,
        }
    }
}
