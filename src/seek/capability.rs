//! Capability traits a value implements to be walked.
//!
//! The resolver never inspects concrete types. It asks the current value for
//! keyed/indexed access first and, when allowed, for named-field access.

use super::accessor::Accessor;
use super::error::Cause;
use std::borrow::Cow;

/// Keyed or indexed access, i.e. `value[accessor]`.
pub trait Indexable: Clone {
    /// Name of the value's kind, used at the head of diagnostic trails.
    fn type_name(&self) -> &str;

    /// Looks up `accessor` inside `self`.
    ///
    /// Most lookups borrow a child of `self`. Values that produce a fresh child
    /// (a one-character string taken out of a string) return it owned.
    ///
    /// Implementations report:
    ///
    /// * `Cause::KeyNotFound` when a mapping has no such key
    /// * `Cause::IndexOutOfRange` when a sequence index is outside its bounds
    /// * `Cause::TypeMismatch` when the accessor kind does not apply, or the
    ///   value supports no subscript at all
    fn subscript(&self, accessor: &Accessor) -> Result<Cow<'_, Self>, Cause>;
}

/// Named-field access, i.e. `value.name`.
pub trait FieldAccessible {
    /// Returns the field called `name`, or `None` if there is none.
    ///
    /// Types without named fields simply return `None`.
    fn field(&self, name: &str) -> Option<&Self>;
}

/// Normalizes a signed index against `len`.
///
/// Negative indices count from the end, once: `-1` is the last position and
/// `-len` the first. Returns `None` when the normalized index is outside
/// `[0, len)`.
pub fn normalize_index(index: i64, len: usize) -> Option<usize> {
    let len = i64::try_from(len).ok()?;
    let normalized = if index < 0 { len + index } else { index };

    if (0..len).contains(&normalized) {
        usize::try_from(normalized).ok()
    } else {
        None
    }
}

/// Indexes into a sequence with an `Int` accessor.
///
/// A `Str` accessor is a `TypeMismatch`: sequences have no keys.
pub fn index_sequence<'a, T>(items: &'a [T], accessor: &Accessor) -> Result<&'a T, Cause> {
    let index = accessor.as_int().ok_or(Cause::TypeMismatch)?;
    normalize_index(index, items.len())
        .map(|position| &items[position])
        .ok_or(Cause::IndexOutOfRange)
}

/// Takes the character at an `Int` accessor out of `text`, as a new string.
///
/// Positions count Unicode scalar values, not bytes.
pub fn index_chars(text: &str, accessor: &Accessor) -> Result<String, Cause> {
    let index = accessor.as_int().ok_or(Cause::TypeMismatch)?;
    let position =
        normalize_index(index, text.chars().count()).ok_or(Cause::IndexOutOfRange)?;

    text.chars()
        .nth(position)
        .map(String::from)
        .ok_or(Cause::IndexOutOfRange)
}
