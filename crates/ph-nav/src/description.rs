//! Declarative sidebar grammar.
//!
//! A sidebars file maps sidebar names to ordered entry lists:
//!
//! ```text
//! Tree  := { <sidebarName>: Entry[] }
//! Entry := string
//!        | { type: "category", label: string, items: Entry[] }
//! ```
//!
//! Types here only describe shape. Nothing is validated until the
//! description goes through [`build_tree`](crate::build_tree).

use std::collections::BTreeMap;
use std::collections::btree_map;
use std::fmt;

use serde::de::{self, MapAccess, Visitor};
use serde::{Deserialize, Deserializer, Serialize};

use crate::ConfigurationError;

/// Value of the `type` tag that marks a category entry.
pub const CATEGORY_TYPE: &str = "category";

/// One entry of a sidebar description, as written in the sidebars file.
///
/// Numeric scalars are accepted as document ids (YAML reads `- 2024` as a
/// number) and kept as their decimal text.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum EntryDescription {
    /// Bare string: a link to the document with this id.
    Doc(String),
    /// Object entry, expected to carry `type: "category"`.
    Category(CategoryDescription),
}

impl EntryDescription {
    /// Shorthand for a document link description.
    pub fn doc(document_id: impl Into<String>) -> Self {
        Self::Doc(document_id.into())
    }

    /// Shorthand for a well-formed category description.
    pub fn category(label: impl Into<String>, items: Vec<EntryDescription>) -> Self {
        Self::Category(CategoryDescription {
            entry_type: Some(CATEGORY_TYPE.to_owned()),
            label: label.into(),
            items,
        })
    }
}

impl<'de> Deserialize<'de> for EntryDescription {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(EntryVisitor)
    }
}

struct EntryVisitor;

impl<'de> Visitor<'de> for EntryVisitor {
    type Value = EntryDescription;

    fn expecting(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str("a document id string or a category object")
    }

    fn visit_str<E: de::Error>(self, value: &str) -> Result<Self::Value, E> {
        Ok(EntryDescription::Doc(value.to_owned()))
    }

    fn visit_string<E: de::Error>(self, value: String) -> Result<Self::Value, E> {
        Ok(EntryDescription::Doc(value))
    }

    fn visit_u64<E: de::Error>(self, value: u64) -> Result<Self::Value, E> {
        Ok(EntryDescription::Doc(value.to_string()))
    }

    fn visit_i64<E: de::Error>(self, value: i64) -> Result<Self::Value, E> {
        Ok(EntryDescription::Doc(value.to_string()))
    }

    fn visit_f64<E: de::Error>(self, value: f64) -> Result<Self::Value, E> {
        Ok(EntryDescription::Doc(value.to_string()))
    }

    fn visit_map<A: MapAccess<'de>>(self, map: A) -> Result<Self::Value, A::Error> {
        CategoryDescription::deserialize(de::value::MapAccessDeserializer::new(map))
            .map(EntryDescription::Category)
    }
}

/// Object entry of a sidebar description.
///
/// Every field is lenient on input so that the builder can report a
/// precise [`ConfigurationError`] instead of a generic parse failure.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryDescription {
    /// The `type` tag. Only [`CATEGORY_TYPE`] is accepted by the builder.
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub entry_type: Option<String>,
    /// Display label.
    #[serde(default)]
    pub label: String,
    /// Child entries in display order.
    #[serde(default)]
    pub items: Vec<EntryDescription>,
}

/// All sidebars of a site, keyed by sidebar name.
///
/// A name may be defined only once; a repeated key is rejected instead of
/// replacing the earlier sidebar.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct SidebarsDescription(BTreeMap<String, Vec<EntryDescription>>);

impl<'de> Deserialize<'de> for SidebarsDescription {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = RawSidebars::deserialize(deserializer)?;
        Self::from_raw(raw).map_err(de::Error::custom)
    }
}

/// Sidebars in file order, repeated names included.
struct RawSidebars(Vec<(String, Vec<EntryDescription>)>);

impl<'de> Deserialize<'de> for RawSidebars {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_map(RawSidebarsVisitor)
    }
}

struct RawSidebarsVisitor;

impl<'de> Visitor<'de> for RawSidebarsVisitor {
    type Value = RawSidebars;

    fn expecting(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str("a map of sidebar names to entry lists")
    }

    fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<Self::Value, A::Error> {
        let mut sidebars = Vec::with_capacity(map.size_hint().unwrap_or(0));
        while let Some(entry) = map.next_entry()? {
            sidebars.push(entry);
        }
        Ok(RawSidebars(sidebars))
    }
}

impl SidebarsDescription {
    /// Create an empty description.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a description from JSON.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigurationError::Parse`] if the JSON does not match the grammar,
    /// or [`ConfigurationError::DuplicateSidebar`] if a sidebar name repeats.
    pub fn from_json(content: &str) -> Result<Self, ConfigurationError> {
        let trimmed = content.trim();
        if trimmed.is_empty() {
            return Ok(Self::default());
        }

        let raw: RawSidebars = serde_json::from_str(trimmed)
            .map_err(|e| ConfigurationError::Parse(format!("Invalid JSON: {e}")))?;
        Self::from_raw(raw)
    }

    /// Parse a description from YAML.
    ///
    /// Empty content yields an empty description.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigurationError::Parse`] if the YAML does not match the grammar,
    /// or [`ConfigurationError::DuplicateSidebar`] if a sidebar name repeats.
    pub fn from_yaml(content: &str) -> Result<Self, ConfigurationError> {
        let trimmed = content.trim();
        if trimmed.is_empty() {
            return Ok(Self::default());
        }

        let raw: RawSidebars = serde_yaml::from_str(trimmed)
            .map_err(|e| ConfigurationError::Parse(format!("Invalid YAML: {e}")))?;
        Self::from_raw(raw)
    }

    fn from_raw(raw: RawSidebars) -> Result<Self, ConfigurationError> {
        let mut sidebars = BTreeMap::new();
        for (name, entries) in raw.0 {
            if sidebars.contains_key(&name) {
                return Err(ConfigurationError::DuplicateSidebar { name });
            }
            sidebars.insert(name, entries);
        }
        Ok(Self(sidebars))
    }

    /// Parse a description in the given format.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigurationError::Parse`] on malformed input.
    pub fn parse(content: &str, format: SourceFormat) -> Result<Self, ConfigurationError> {
        match format {
            SourceFormat::Json => Self::from_json(content),
            SourceFormat::Yaml => Self::from_yaml(content),
        }
    }

    /// Add or replace a sidebar.
    pub fn insert(&mut self, name: impl Into<String>, entries: Vec<EntryDescription>) {
        self.0.insert(name.into(), entries);
    }

    /// Entries of the named sidebar.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&[EntryDescription]> {
        self.0.get(name).map(Vec::as_slice)
    }

    /// Iterate sidebars in name order.
    pub fn iter(&self) -> btree_map::Iter<'_, String, Vec<EntryDescription>> {
        self.0.iter()
    }

    /// Number of sidebars.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// True if no sidebar is described.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<'a> IntoIterator for &'a SidebarsDescription {
    type Item = (&'a String, &'a Vec<EntryDescription>);
    type IntoIter = btree_map::Iter<'a, String, Vec<EntryDescription>>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl FromIterator<(String, Vec<EntryDescription>)> for SidebarsDescription {
    fn from_iter<T: IntoIterator<Item = (String, Vec<EntryDescription>)>>(iter: T) -> Self {
        Self(iter.into_iter().collect())
    }
}

/// Serialization format of a sidebars file.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SourceFormat {
    /// `.json`
    Json,
    /// `.yaml` or `.yml`
    Yaml,
}

impl SourceFormat {
    /// Detect the format from a file extension (without the dot).
    #[must_use]
    pub fn from_extension(extension: &str) -> Option<Self> {
        match extension.to_ascii_lowercase().as_str() {
            "json" => Some(Self::Json),
            "yaml" | "yml" => Some(Self::Yaml),
            _ => None,
        }
    }
}
