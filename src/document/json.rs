//! Seek support for `serde_json::Value` documents.
//!
//! JSON objects only have string keys, so an `Int` accessor never matches an
//! object entry: `{"0": ..}` is reached with `"0"`, not `0`.

use crate::seek::capability::{index_chars, index_sequence};
use crate::seek::{Accessor, Cause, FieldAccessible, Indexable};
use serde_json::Value as JsonValue;
use std::borrow::Cow;

impl Indexable for JsonValue {
    fn type_name(&self) -> &str {
        match self {
            JsonValue::Null => "null",
            JsonValue::Bool(_) => "bool",
            JsonValue::Number(_) => "number",
            JsonValue::String(_) => "string",
            JsonValue::Array(_) => "array",
            JsonValue::Object(_) => "object",
        }
    }

    fn subscript(&self, accessor: &Accessor) -> Result<Cow<'_, Self>, Cause> {
        match self {
            JsonValue::Object(entries) => match accessor {
                Accessor::Str(key) => entries
                    .get(key)
                    .map(Cow::Borrowed)
                    .ok_or(Cause::KeyNotFound),
                Accessor::Int(_) => Err(Cause::KeyNotFound),
            },
            JsonValue::Array(items) => index_sequence(items, accessor).map(Cow::Borrowed),
            JsonValue::String(text) => index_chars(text, accessor)
                .map(|character| Cow::Owned(JsonValue::String(character))),
            JsonValue::Null | JsonValue::Bool(_) | JsonValue::Number(_) => {
                Err(Cause::TypeMismatch)
            }
        }
    }
}

// JSON has no fields besides object keys.
impl FieldAccessible for JsonValue {
    fn field(&self, _name: &str) -> Option<&Self> {
        None
    }
}
