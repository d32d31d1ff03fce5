//! Dynamic value representation for nested data.
//!
//! `Value` can hold anything the seek engine knows how to walk: mappings,
//! lists, tuples, strings, scalars, and structured `Record`s whose contents
//! are reachable only through named fields.
//!
//! # Example
//!
//! ```
//! use datadig::document::{Record, Value};
//!
//! let object = Record::new("SomeObject")
//!     .with("nested_dict", Value::dict([("nested_array", Value::list([9, 8, 7]))]))
//!     .with("nested_string", "This is a string inside object");
//!
//! let data = Value::dict([
//!     ("string_item", Value::from("This is a string")),
//!     ("object_item", Value::from(object)),
//!     ("keys", Value::list(["The key 1", "The key 2"])),
//! ]);
//!
//! assert!(data.is_container());
//! ```

use crate::seek::capability::{index_chars, index_sequence};
use crate::seek::{Accessor, Cause, FieldAccessible, Indexable};
use indexmap::IndexMap;
use serde::{Serialize, Serializer};
use std::borrow::Cow;

/// A structured object: a type name plus ordered named fields.
///
/// Records are not subscriptable. Their fields are only reachable when
/// attribute lookup is enabled.
#[derive(Debug, Clone, PartialEq)]
pub struct Record {
    type_name: String,
    fields: IndexMap<String, Value>,
}

impl Record {
    /// Creates a record with no fields.
    pub fn new(type_name: impl Into<String>) -> Self {
        Self {
            type_name: type_name.into(),
            fields: IndexMap::new(),
        }
    }

    /// Adds a field and returns the record, for chained construction.
    pub fn with(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.insert(name, value);
        self
    }

    /// Sets a field, replacing any previous value with the same name.
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<Value>) {
        self.fields.insert(name.into(), value.into());
    }

    pub fn type_name(&self) -> &str {
        &self.type_name
    }

    pub fn get(&self, name: &str) -> Option<&Value> {
        self.fields.get(name)
    }

    pub fn fields(&self) -> &IndexMap<String, Value> {
        &self.fields
    }
}

/// A nested data value.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    /// Text, indexable by character position
    Str(String),
    /// A mutable-style ordered sequence
    List(Vec<Value>),
    /// A fixed ordered sequence; indexes like `List` but keeps its own type name
    Tuple(Vec<Value>),
    /// A mapping keyed by accessor tokens, in insertion order
    Dict(IndexMap<Accessor, Value>),
    /// A structured object with named fields
    Record(Record),
}

impl Value {
    /// Builds a `Dict` from key/value pairs.
    pub fn dict<K, V, I>(entries: I) -> Self
    where
        K: Into<Accessor>,
        V: Into<Value>,
        I: IntoIterator<Item = (K, V)>,
    {
        Value::Dict(
            entries
                .into_iter()
                .map(|(key, value)| (key.into(), value.into()))
                .collect(),
        )
    }

    /// Builds a `List` from items.
    pub fn list<V, I>(items: I) -> Self
    where
        V: Into<Value>,
        I: IntoIterator<Item = V>,
    {
        Value::List(items.into_iter().map(Into::into).collect())
    }

    /// Builds a `Tuple` from items.
    pub fn tuple<V, I>(items: I) -> Self
    where
        V: Into<Value>,
        I: IntoIterator<Item = V>,
    {
        Value::Tuple(items.into_iter().map(Into::into).collect())
    }

    /// Returns true for values that hold other values.
    pub fn is_container(&self) -> bool {
        matches!(
            self,
            Value::List(_) | Value::Tuple(_) | Value::Dict(_) | Value::Record(_)
        )
    }
}

impl Indexable for Value {
    fn type_name(&self) -> &str {
        match self {
            Value::Null => "null",
            Value::Bool(_) => "bool",
            Value::Int(_) => "int",
            Value::Float(_) => "float",
            Value::Str(_) => "str",
            Value::List(_) => "list",
            Value::Tuple(_) => "tuple",
            Value::Dict(_) => "dict",
            Value::Record(record) => record.type_name(),
        }
    }

    fn subscript(&self, accessor: &Accessor) -> Result<Cow<'_, Self>, Cause> {
        match self {
            Value::Dict(entries) => entries
                .get(accessor)
                .map(Cow::Borrowed)
                .ok_or(Cause::KeyNotFound),
            Value::List(items) | Value::Tuple(items) => {
                index_sequence(items, accessor).map(Cow::Borrowed)
            }
            Value::Str(text) => {
                index_chars(text, accessor).map(|character| Cow::Owned(Value::Str(character)))
            }
            Value::Null
            | Value::Bool(_)
            | Value::Int(_)
            | Value::Float(_)
            | Value::Record(_) => Err(Cause::TypeMismatch),
        }
    }
}

impl FieldAccessible for Value {
    fn field(&self, name: &str) -> Option<&Self> {
        match self {
            Value::Record(record) => record.get(name),
            _ => None,
        }
    }
}

impl Serialize for Value {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Value::Null => serializer.serialize_unit(),
            Value::Bool(b) => serializer.serialize_bool(*b),
            Value::Int(i) => serializer.serialize_i64(*i),
            Value::Float(f) => serializer.serialize_f64(*f),
            Value::Str(s) => serializer.serialize_str(s),
            Value::List(items) | Value::Tuple(items) => serializer.collect_seq(items),
            Value::Dict(entries) => serializer.collect_map(entries),
            Value::Record(record) => serializer.collect_map(record.fields()),
        }
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<i32> for Value {
    fn from(i: i32) -> Self {
        Value::Int(i64::from(i))
    }
}

impl From<i64> for Value {
    fn from(i: i64) -> Self {
        Value::Int(i)
    }
}

impl From<f64> for Value {
    fn from(f: f64) -> Self {
        Value::Float(f)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::Str(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::Str(s)
    }
}

impl From<Vec<Value>> for Value {
    fn from(items: Vec<Value>) -> Self {
        Value::List(items)
    }
}

impl From<Record> for Value {
    fn from(record: Record) -> Self {
        Value::Record(record)
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(value: Option<T>) -> Self {
        value.map_or(Value::Null, Into::into)
    }
}
