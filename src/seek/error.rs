//! Failure types for seek resolution.

use super::accessor::Accessor;
use std::fmt;
use thiserror::Error;

/// Why a single step could not be resolved.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Cause {
    /// The mapping has no entry for the key.
    KeyNotFound,
    /// The normalized index falls outside the sequence or string.
    IndexOutOfRange,
    /// The accessor kind does not apply to the value (a string index into a
    /// list, anything into a scalar or record), and no field lookup rescued it.
    TypeMismatch,
    /// Field lookup was attempted but the value has no field of that name.
    AttributeNotFound,
}

impl Cause {
    /// Returns the name used in diagnostics.
    pub fn name(&self) -> &'static str {
        match self {
            Cause::KeyNotFound => "KeyNotFound",
            Cause::IndexOutOfRange => "IndexOutOfRange",
            Cause::TypeMismatch => "TypeMismatch",
            Cause::AttributeNotFound => "AttributeNotFound",
        }
    }
}

impl fmt::Display for Cause {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Separator placed between the root type name and each accessor in a trail.
pub const TRAIL_SEPARATOR: &str = " -> ";

/// Raised by the strict lookup when the walk cannot go any further.
///
/// The message is two lines: the underlying cause, then the path traveled
/// starting at the root's type name and ending at the failing accessor.
///
/// ```text
/// cannot seek any further: KeyNotFound
/// Path traveled: dict -> nested_dict -> sub_item_dict -> unknown_key
/// ```
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("cannot seek any further: {cause}\nPath traveled: {trail}")]
pub struct SeekError {
    step: usize,
    root_type: String,
    path: Vec<Accessor>,
    trail: String,
    cause: Cause,
}

impl SeekError {
    /// Builds the diagnostics for a failure at `accessors[step]`.
    ///
    /// `accessors` is the full sequence of the walk; only the prefix up to and
    /// including `step` is kept. `step` must index into `accessors`.
    pub(crate) fn new(step: usize, root_type: &str, accessors: &[Accessor], cause: Cause) -> Self {
        debug_assert!(step < accessors.len(), "step {step} outside of the accessors");
        let end = step.saturating_add(1).min(accessors.len());
        let path = accessors[..end].to_vec();

        let mut trail = root_type.to_string();
        for accessor in &path {
            trail.push_str(TRAIL_SEPARATOR);
            trail.push_str(&accessor.to_string());
        }

        Self {
            step,
            root_type: root_type.to_string(),
            path,
            trail,
            cause,
        }
    }

    /// Position of the failing accessor in the sequence.
    pub fn step(&self) -> usize {
        self.step
    }

    /// Type name of the value the walk started from.
    pub fn root_type(&self) -> &str {
        &self.root_type
    }

    /// Accessors traversed, including the failing one.
    pub fn path(&self) -> &[Accessor] {
        &self.path
    }

    /// Human-readable trail, e.g. `dict -> a -> b -> c`.
    pub fn trail(&self) -> &str {
        &self.trail
    }

    pub fn cause(&self) -> Cause {
        self.cause
    }
}
