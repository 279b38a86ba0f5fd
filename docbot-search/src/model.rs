//! Data model for the documentation corpus.
//!
//! Mirrors the schema of docs.json as emitted by the docs generator: a JSON object
//! keyed by page path, each value holding title, library, kind, description,
//! optional example, structured details, and the public documentation URL.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Which library a documentation entry belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Library {
    PyTgCalls,
    NTgCalls,
    /// Pages the generator could not attribute to either library.
    #[serde(other)]
    Unknown,
}

impl fmt::Display for Library {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Library::PyTgCalls => "PyTgCalls",
            Library::NTgCalls => "NTgCalls",
            Library::Unknown => "Unknown",
        };
        f.write_str(s)
    }
}

impl FromStr for Library {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "pytgcalls" => Ok(Library::PyTgCalls),
            "ntgcalls" => Ok(Library::NTgCalls),
            other => Err(format!("unknown library: {other}")),
        }
    }
}

/// Category of a documentation entry, as classified by the generator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntryKind {
    Method,
    Enum,
    Struct,
    Type,
    Descriptor,
    #[serde(other)]
    Misc,
}

impl fmt::Display for EntryKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            EntryKind::Method => "method",
            EntryKind::Enum => "enum",
            EntryKind::Struct => "struct",
            EntryKind::Type => "type",
            EntryKind::Descriptor => "descriptor",
            EntryKind::Misc => "misc",
        };
        f.write_str(s)
    }
}

/// One named item inside an entry: a parameter, enum member, or type property.
/// The generator uses a single shape for all three.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocItem {
    #[serde(default)]
    pub name: String,
    #[serde(rename = "type", default)]
    pub item_type: Option<String>,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub source_config: Option<String>,
    /// Assigned value, for enum members.
    #[serde(default)]
    pub value: Option<String>,
}

/// A titled list of items, e.g. PARAMETERS or RAISES on a method page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Section {
    pub title: String,
    #[serde(default)]
    pub items: Vec<DocItem>,
}

/// Structured details of an entry; which lists are populated depends on the kind.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Details {
    #[serde(default)]
    pub signature: Option<String>,
    /// Method sections such as PARAMETERS and RAISES.
    #[serde(default)]
    pub sections: Vec<Section>,
    /// Enum members.
    #[serde(default)]
    pub members: Vec<DocItem>,
    /// Type properties.
    #[serde(default)]
    pub properties: Vec<DocItem>,
    /// Constructor parameters, for types and descriptors.
    #[serde(default)]
    pub parameters: Vec<DocItem>,
}

/// Example code attached to an entry. Empty object in the corpus when absent.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Example {
    #[serde(default)]
    pub language: Option<String>,
    #[serde(default)]
    pub code: Option<String>,
}

/// A single documentation record. Immutable once loaded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocEntry {
    pub title: String,
    pub lib: Library,
    pub kind: EntryKind,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub example: Example,
    #[serde(default)]
    pub details: Details,
    pub doc_url: String,
}
