//! Options controlling how a walk resolves accessors.

use super::accessor::Accessor;
use super::capability::{FieldAccessible, Indexable};
use super::error::{Cause, SeekError};
use super::walker::walk;
use std::borrow::Cow;

/// Which subscript failures may fall back to field lookup.
///
/// Only consulted when attribute lookup is enabled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FallbackPolicy {
    /// Fall back only when the accessor kind does not apply to the value.
    /// A missing key or an out-of-range index stops the walk.
    #[default]
    TypeMismatch,
    /// Fall back on every subscript failure, including missing keys and
    /// out-of-range indices.
    AnyFailure,
}

impl FallbackPolicy {
    /// Returns true if a subscript failing with `cause` may try field lookup.
    pub fn allows(self, cause: Cause) -> bool {
        match self {
            FallbackPolicy::TypeMismatch => cause == Cause::TypeMismatch,
            FallbackPolicy::AnyFailure => true,
        }
    }
}

/// Settings for one seek.
///
/// The default disables attribute lookup, so only keys and indices are
/// followed.
///
/// # Example
///
/// ```
/// use datadig::document::{Record, Value};
/// use datadig::{path, Cause, SeekOptions};
///
/// let person = Value::from(Record::new("Person").with("name", "John Doe"));
///
/// let err = SeekOptions::new().seek(&person, &path!["name"]).unwrap_err();
/// assert_eq!(err.cause(), Cause::TypeMismatch);
///
/// let name = SeekOptions::new()
///     .attribute_lookup(true)
///     .seek(&person, &path!["name"])
///     .unwrap();
/// assert_eq!(*name, Value::from("John Doe"));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SeekOptions {
    attribute_lookup: bool,
    fallback: FallbackPolicy,
}

impl SeekOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Enables or disables named-field lookup.
    pub fn attribute_lookup(mut self, enabled: bool) -> Self {
        self.attribute_lookup = enabled;
        self
    }

    /// Selects which subscript failures may fall back to field lookup.
    pub fn fallback(mut self, policy: FallbackPolicy) -> Self {
        self.fallback = policy;
        self
    }

    pub fn is_attribute_lookup_enabled(&self) -> bool {
        self.attribute_lookup
    }

    pub fn fallback_policy(&self) -> FallbackPolicy {
        self.fallback
    }

    /// Returns true if a subscript failing with `cause` should try field lookup.
    pub fn falls_back_on(&self, cause: Cause) -> bool {
        self.attribute_lookup && self.fallback.allows(cause)
    }

    /// Strict lookup: the resolved value, or the diagnostics of the first
    /// step that failed.
    pub fn seek<'a, T>(&self, root: &'a T, accessors: &[Accessor]) -> Result<Cow<'a, T>, SeekError>
    where
        T: Indexable + FieldAccessible,
    {
        walk(root, accessors, self)
    }

    /// Permissive lookup: the resolved value, or `None` if any step failed.
    pub fn dig<'a, T>(&self, root: &'a T, accessors: &[Accessor]) -> Option<Cow<'a, T>>
    where
        T: Indexable + FieldAccessible,
    {
        match walk(root, accessors, self) {
            Ok(value) => Some(value),
            Err(err) => {
                log::debug!("dig absorbed failure at step {}: {}", err.step(), err.trail());
                None
            }
        }
    }

    /// Permissive lookup: the resolved value, or `default` if any step failed.
    pub fn dig_or<'a, T>(&self, root: &'a T, accessors: &[Accessor], default: T) -> Cow<'a, T>
    where
        T: Indexable + FieldAccessible,
    {
        self.dig(root, accessors).unwrap_or(Cow::Owned(default))
    }
}
