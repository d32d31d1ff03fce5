//! Path-based seeking through nested data.
//!
//! This module walks a root value one accessor at a time, resolving each
//! accessor against whatever the current value supports: a key for mappings,
//! an index for sequences and strings, and optionally a field name for
//! structured records.
//!
//! # Resolution Order
//!
//! For every step the resolver:
//!
//! 1. Tries key/index access (`Indexable::subscript`)
//! 2. If that failed because the accessor is the wrong kind for the value, and
//!    attribute lookup is enabled, tries field access (`FieldAccessible::field`)
//! 3. Otherwise stops with the classified `Cause`
//!
//! A missing key or an out-of-range index never falls back to field access
//! unless `FallbackPolicy::AnyFailure` is selected.
//!
//! # Examples
//!
//! ```
//! use datadig::document::Value;
//! use datadig::{dig_or, path, seek, Cause};
//!
//! let data = Value::dict([("item_a", Value::list(["apple", "pea"]))]);
//!
//! assert_eq!(*seek(&data, &path!["item_a", 0]).unwrap(), Value::from("apple"));
//!
//! let err = seek(&data, &path!["item_b", 0]).unwrap_err();
//! assert_eq!(err.cause(), Cause::KeyNotFound);
//! assert_eq!(err.trail(), "dict -> item_b");
//!
//! assert_eq!(*dig_or(&data, &path!["item_b"], Value::Null), Value::Null);
//! ```

pub mod accessor;
pub mod capability;
pub mod error;
pub mod options;
pub mod resolver;
pub mod walker;

pub use accessor::Accessor;
pub use capability::{FieldAccessible, Indexable};
pub use error::{Cause, SeekError};
pub use options::{FallbackPolicy, SeekOptions};
pub use resolver::resolve;
pub use walker::{dig, dig_or, seek, walk};
