//! datadig - seek values inside nested data by key, index or field name.
//!
//! Give it a root value and a list of accessors and it walks the structure one
//! step at a time. `seek` returns the value or a `SeekError` naming exactly
//! where the walk stopped and why; `dig` and `dig_or` return `None` or a
//! default instead.
//!
//! ```
//! use datadig::document::{Record, Value};
//! use datadig::{dig, path, SeekOptions};
//!
//! let person = Record::new("Person").with("name", "John Doe");
//! let data = Value::dict([("item_with_object", Value::from(person))]);
//!
//! let name = SeekOptions::new()
//!     .attribute_lookup(true)
//!     .seek(&data, &path!["item_with_object", "name"])
//!     .unwrap();
//! assert_eq!(*name, Value::from("John Doe"));
//!
//! assert!(dig(&data, &path!["item_with_object", "age"]).is_none());
//! ```

pub mod config;
pub mod document;
pub mod file;
pub mod seek;

pub use seek::{
    dig, dig_or, seek, Accessor, Cause, FallbackPolicy, FieldAccessible, Indexable, SeekError,
    SeekOptions,
};
