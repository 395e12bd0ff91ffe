//! Document model for Blockbench `.bbmodel` files.
//!
//! The format is loosely typed and evolves between Blockbench releases, so
//! every field here is optional on input and unknown fields are ignored. Only
//! the pieces the preview needs are typed; the rest is carried as raw JSON.
//! Nothing is validated and nothing is written back out.

#[cfg(test)]
#[path = "file_test.rs"]
mod file_test;

use serde::de::{DeserializeOwned, Deserializer, Error as _};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Element kind used by Blockbench for box geometry.
pub const CUBE_KIND: &str = "cube";

/// A parsed bbmodel document.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BBModelFile {
    #[serde(deserialize_with = "lenient")]
    pub meta: Map<String, Value>,
    #[serde(deserialize_with = "lenient")]
    pub name: String,
    #[serde(deserialize_with = "lenient")]
    pub model_format: String,
    #[serde(deserialize_with = "lenient")]
    pub box_uv: bool,
    #[serde(deserialize_with = "lenient")]
    pub resolution: Resolution,
    #[serde(deserialize_with = "lenient_seq")]
    pub elements: Vec<BBModelElement>,
    #[serde(deserialize_with = "lenient")]
    pub outliner: Vec<Value>,
    #[serde(deserialize_with = "lenient_seq")]
    pub animations: Vec<BBModelAnimation>,
}

impl BBModelFile {
    /// Parse a document from raw bytes as returned by the download endpoint.
    ///
    /// Only the top level must be a JSON object. Any field holding `null` or
    /// a value of the wrong shape reads as its default, and list entries that
    /// are not objects are skipped.
    ///
    /// # Errors
    ///
    /// Returns an error if the bytes are not a JSON object.
    pub fn from_slice(bytes: &[u8]) -> Result<Self, serde_json::Error> {
        let value: Value = serde_json::from_slice(bytes)?;
        if !value.is_object() {
            return Err(serde_json::Error::custom("bbmodel document must be a JSON object"));
        }
        serde_json::from_value(value)
    }

    /// Elements whose kind is [`CUBE_KIND`].
    pub fn cubes(&self) -> impl Iterator<Item = &BBModelElement> {
        self.elements.iter().filter(|element| element.is_cube())
    }
}

/// Texture resolution block.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Resolution {
    #[serde(deserialize_with = "lenient")]
    pub width: f64,
    #[serde(deserialize_with = "lenient")]
    pub height: f64,
}

/// One geometry element.
///
/// Blockbench writes `from`/`to` only for cubes; meshes carry `vertices` and
/// `faces` in shapes this preview does not interpret.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BBModelElement {
    #[serde(deserialize_with = "lenient")]
    pub uuid: String,
    #[serde(deserialize_with = "lenient")]
    pub name: String,
    /// Element kind. Files written by older Blockbench versions omit it, and
    /// those elements are cubes.
    #[serde(rename = "type", deserialize_with = "lenient")]
    pub kind: Option<String>,
    #[serde(deserialize_with = "lenient")]
    pub from: Option<[f64; 3]>,
    #[serde(deserialize_with = "lenient")]
    pub to: Option<[f64; 3]>,
    #[serde(deserialize_with = "lenient")]
    pub origin: Option<[f64; 3]>,
    /// Euler rotation in degrees.
    #[serde(deserialize_with = "lenient")]
    pub rotation: Option<[f64; 3]>,
    pub vertices: Option<Value>,
    pub faces: Option<Value>,
}

impl BBModelElement {
    #[must_use]
    pub fn is_cube(&self) -> bool {
        self.kind.as_deref().is_none_or(|kind| kind == CUBE_KIND)
    }
}

/// Animation metadata. Playback is not supported; this is listed for display.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BBModelAnimation {
    #[serde(deserialize_with = "lenient")]
    pub uuid: String,
    #[serde(deserialize_with = "lenient")]
    pub name: String,
    #[serde(rename = "loop", deserialize_with = "lenient")]
    pub loop_mode: String,
    #[serde(deserialize_with = "lenient")]
    pub length: f64,
    #[serde(deserialize_with = "lenient")]
    pub snapping: f64,
    #[serde(deserialize_with = "lenient")]
    pub animators: Map<String, Value>,
}

/// Read a field, falling back to its default on `null` or a mismatched shape.
fn lenient<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned + Default,
{
    let value = Value::deserialize(deserializer)?;
    Ok(T::deserialize(value).unwrap_or_default())
}

/// Read a list, skipping entries that do not parse. A non-list reads as empty.
fn lenient_seq<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::Array(items) => items.into_iter().filter_map(|item| T::deserialize(item).ok()).collect(),
        _ => Vec::new(),
    })
}
