// ─── Version Descriptor ───
// Typed, read-only view over the version JSON fields the detector inspects.

use std::path::Path;

use serde::de::{DeserializeOwned, Error as _};
use serde::{Deserialize, Deserializer};
use serde_json::Value;

use super::arguments::{self, Argument};
use super::version_type::VersionType;
use crate::core::error::{DetectorError, DetectorResult};
use crate::core::loaders::{self, LoaderIdentification};
use crate::core::maven::MavenCoordinate;

/// A parsed launcher version JSON.
///
/// Fields of the wrong JSON type are read as absent rather than failing the
/// whole document, so a single odd field can only ever make a candidate loader
/// decline.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VersionDescriptor {
    #[serde(default, deserialize_with = "lenient")]
    id: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    inherits_from: Option<String>,
    #[serde(default, rename = "type", deserialize_with = "lenient")]
    version_type: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    main_class: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    arguments: Option<Arguments>,
    #[serde(default, deserialize_with = "lenient_seq")]
    libraries: Vec<Library>,
}

#[derive(Debug, Clone, Default, Deserialize)]
struct Arguments {
    #[serde(default, deserialize_with = "lenient_seq")]
    game: Vec<Argument>,
}

#[derive(Debug, Clone, Deserialize)]
struct Library {
    name: String,
}

impl VersionDescriptor {
    /// Parse a descriptor from raw JSON text.
    pub fn from_json_str(raw: &str) -> DetectorResult<Self> {
        let value: Value = serde_json::from_str(raw)?;
        Self::from_value(&value)
    }

    /// Build a descriptor from an already parsed JSON value.
    ///
    /// The value must be an object.
    pub fn from_value(value: &Value) -> DetectorResult<Self> {
        if !value.is_object() {
            return Err(DetectorError::Json(serde_json::Error::custom(format!(
                "expected a version JSON object, found {}",
                json_kind(value)
            ))));
        }
        Ok(Self::deserialize(value)?)
    }

    /// Read and parse a descriptor file (UTF-8).
    pub async fn read(path: &Path) -> DetectorResult<Self> {
        let raw = tokio::fs::read_to_string(path)
            .await
            .map_err(|source| DetectorError::Io {
                path: path.to_path_buf(),
                source,
            })?;
        Self::from_json_str(&raw)
    }

    /// Classify this descriptor. See [`loaders::identify`].
    pub fn identify(&self) -> Option<LoaderIdentification> {
        loaders::identify(self)
    }

    pub fn id(&self) -> Option<&str> {
        non_empty(&self.id)
    }

    /// Parent version this one is derived from (`inheritsFrom`).
    pub fn inherits_from(&self) -> Option<&str> {
        non_empty(&self.inherits_from)
    }

    /// The `type` label exactly as written.
    pub fn raw_version_type(&self) -> Option<&str> {
        self.version_type.as_deref()
    }

    pub fn version_type(&self) -> Option<VersionType> {
        self.version_type.as_deref().map(VersionType::from_name)
    }

    pub fn main_class(&self) -> Option<&str> {
        self.main_class.as_deref()
    }

    /// `arguments.game` entries as decoded, before flattening.
    pub fn raw_game_arguments(&self) -> &[Argument] {
        self.arguments
            .as_ref()
            .map(|args| args.game.as_slice())
            .unwrap_or(&[])
    }

    /// `arguments.game` flattened into a token list.
    pub fn game_arguments(&self) -> Vec<String> {
        arguments::flatten(self.raw_game_arguments())
    }

    pub fn library_names(&self) -> impl Iterator<Item = &str> {
        self.libraries.iter().map(|lib| lib.name.as_str())
    }

    /// Library coordinates that parse, in declaration order.
    pub fn coordinates(&self) -> Vec<MavenCoordinate> {
        self.library_names()
            .filter_map(|name| MavenCoordinate::parse(name).ok())
            .collect()
    }
}

fn non_empty(field: &Option<String>) -> Option<&str> {
    field.as_deref().filter(|s| !s.is_empty())
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

/// Deserialize a field, reading a value of the wrong shape as `None`.
fn lenient<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let value = Value::deserialize(deserializer)?;
    Ok(serde_json::from_value(value).ok())
}

/// Deserialize a list, dropping elements of the wrong shape. A non-array is empty.
fn lenient_seq<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let items = match Value::deserialize(deserializer)? {
        Value::Array(items) => items,
        _ => return Ok(Vec::new()),
    };
    Ok(items
        .into_iter()
        .filter_map(|item| serde_json::from_value(item).ok())
        .collect())
}
