//! Document types the seek engine can walk.
//!
//! `Value` is the crate's own dynamic model, including structured `Record`s
//! reachable through attribute lookup. The `json` and `yaml` modules make
//! `serde_json::Value` and `serde_yaml::Value` walkable as well, and
//! `Document` wraps either one for files loaded from disk.

mod json;
pub mod value;
mod yaml;

pub use value::{Record, Value};

use crate::seek::{Accessor, Indexable, SeekError, SeekOptions};
use serde::Serialize;

/// A parsed JSON or YAML document.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Document {
    Json(serde_json::Value),
    Yaml(serde_yaml::Value),
}

impl Document {
    /// Type name of the document's root value.
    pub fn type_name(&self) -> &str {
        match self {
            Document::Json(value) => value.type_name(),
            Document::Yaml(value) => value.type_name(),
        }
    }

    /// Strict lookup; the found subtree is copied out of the document.
    pub fn seek(&self, accessors: &[Accessor], options: &SeekOptions) -> Result<Document, SeekError> {
        match self {
            Document::Json(value) => options
                .seek(value, accessors)
                .map(|found| Document::Json(found.into_owned())),
            Document::Yaml(value) => options
                .seek(value, accessors)
                .map(|found| Document::Yaml(found.into_owned())),
        }
    }

    /// Permissive lookup; `None` when any step fails.
    pub fn dig(&self, accessors: &[Accessor], options: &SeekOptions) -> Option<Document> {
        match self {
            Document::Json(value) => options
                .dig(value, accessors)
                .map(|found| Document::Json(found.into_owned())),
            Document::Yaml(value) => options
                .dig(value, accessors)
                .map(|found| Document::Yaml(found.into_owned())),
        }
    }
}
