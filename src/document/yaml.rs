//! Seek support for `serde_yaml::Value` documents.
//!
//! YAML mappings may have keys of any scalar type. An `Int` accessor matches
//! an integer key and a `Str` accessor matches a string key; `1` and `"1"` are
//! different keys. Tagged values are transparent.

use crate::seek::capability::{index_chars, index_sequence};
use crate::seek::{Accessor, Cause, FieldAccessible, Indexable};
use serde_yaml::Value as YamlValue;
use std::borrow::Cow;

fn mapping_key(accessor: &Accessor) -> YamlValue {
    match accessor {
        Accessor::Int(index) => YamlValue::Number((*index).into()),
        Accessor::Str(name) => YamlValue::String(name.clone()),
    }
}

impl Indexable for YamlValue {
    fn type_name(&self) -> &str {
        match self {
            YamlValue::Null => "null",
            YamlValue::Bool(_) => "bool",
            YamlValue::Number(_) => "number",
            YamlValue::String(_) => "string",
            YamlValue::Sequence(_) => "sequence",
            YamlValue::Mapping(_) => "mapping",
            YamlValue::Tagged(_) => "tagged",
        }
    }

    fn subscript(&self, accessor: &Accessor) -> Result<Cow<'_, Self>, Cause> {
        match self {
            YamlValue::Mapping(entries) => entries
                .get(mapping_key(accessor))
                .map(Cow::Borrowed)
                .ok_or(Cause::KeyNotFound),
            YamlValue::Sequence(items) => index_sequence(items, accessor).map(Cow::Borrowed),
            YamlValue::String(text) => index_chars(text, accessor)
                .map(|character| Cow::Owned(YamlValue::String(character))),
            YamlValue::Tagged(tagged) => tagged.value.subscript(accessor),
            YamlValue::Null | YamlValue::Bool(_) | YamlValue::Number(_) => {
                Err(Cause::TypeMismatch)
            }
        }
    }
}

impl FieldAccessible for YamlValue {
    fn field(&self, _name: &str) -> Option<&Self> {
        None
    }
}
