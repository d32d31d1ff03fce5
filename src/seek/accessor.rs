//! Accessor tokens used as path steps.

use serde::{Serialize, Serializer};
use std::fmt;

/// A single step of a seek path.
///
/// An accessor only records what kind of token it is. What it *means* is
/// decided by the value it is applied to: against a mapping any accessor is a
/// key, against a sequence or string an `Int` is an index, and against a
/// record a `Str` is a field name. An `Int` applied to a mapping is a key
/// lookup, never a positional one.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Accessor {
    /// An integer token (`0`, `-1`, `42`).
    Int(i64),
    /// A string token (`"name"`).
    Str(String),
}

impl Accessor {
    /// Classifies a single command-line token.
    ///
    /// Tokens that parse as a signed integer become `Int`, everything else is
    /// kept verbatim as `Str`. This works on one token only; there is no path
    /// syntax.
    ///
    /// # Example
    ///
    /// ```
    /// use datadig::Accessor;
    ///
    /// assert_eq!(Accessor::parse_token("-1"), Accessor::Int(-1));
    /// assert_eq!(Accessor::parse_token("name"), Accessor::Str("name".to_string()));
    /// assert_eq!(Accessor::parse_token("1.5"), Accessor::Str("1.5".to_string()));
    /// ```
    pub fn parse_token(token: &str) -> Self {
        match token.parse::<i64>() {
            Ok(index) => Accessor::Int(index),
            Err(_) => Accessor::Str(token.to_string()),
        }
    }

    /// Returns the integer value for `Int` tokens.
    pub fn as_int(&self) -> Option<i64> {
        match self {
            Accessor::Int(index) => Some(*index),
            Accessor::Str(_) => None,
        }
    }

    /// Returns the string value for `Str` tokens.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Accessor::Int(_) => None,
            Accessor::Str(name) => Some(name),
        }
    }
}

impl fmt::Display for Accessor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Accessor::Int(index) => write!(f, "{}", index),
            Accessor::Str(name) => write!(f, "{}", name),
        }
    }
}

impl Serialize for Accessor {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Accessor::Int(index) => serializer.serialize_i64(*index),
            Accessor::Str(name) => serializer.serialize_str(name),
        }
    }
}

impl From<i64> for Accessor {
    fn from(index: i64) -> Self {
        Accessor::Int(index)
    }
}

impl From<i32> for Accessor {
    fn from(index: i32) -> Self {
        Accessor::Int(i64::from(index))
    }
}

impl From<&str> for Accessor {
    fn from(name: &str) -> Self {
        Accessor::Str(name.to_string())
    }
}

impl From<String> for Accessor {
    fn from(name: String) -> Self {
        Accessor::Str(name)
    }
}

impl From<&String> for Accessor {
    fn from(name: &String) -> Self {
        Accessor::Str(name.clone())
    }
}

/// Builds a `Vec<Accessor>` from mixed string and integer literals.
///
/// ```
/// use datadig::{path, Accessor};
///
/// let accessors = path!["nested_dict", "sub_item_array", -1];
/// assert_eq!(accessors[2], Accessor::Int(-1));
/// assert!(path![].is_empty());
/// ```
#[macro_export]
macro_rules! path {
    () => {
        ::std::vec::Vec::<$crate::Accessor>::new()
    };
    ($($accessor:expr),+ $(,)?) => {
        ::std::vec![$($crate::Accessor::from($accessor)),+]
    };
}
