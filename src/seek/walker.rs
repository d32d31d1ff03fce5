use super::accessor::Accessor;
use super::capability::{FieldAccessible, Indexable};
use super::error::SeekError;
use super::options::SeekOptions;
use super::resolver::resolve;
use std::borrow::Cow;

/// Walks `accessors` from `root`, left to right.
///
/// Stops at the first step that fails and reports it with the root's type
/// name, the accessors traversed so far (including the failing one) and the
/// step's cause. An empty accessor list returns `root` itself.
pub fn walk<'a, T>(
    root: &'a T,
    accessors: &[Accessor],
    options: &SeekOptions,
) -> Result<Cow<'a, T>, SeekError>
where
    T: Indexable + FieldAccessible,
{
    let mut current = Cow::Borrowed(root);

    for (step, accessor) in accessors.iter().enumerate() {
        let next = match &current {
            Cow::Borrowed(value) => resolve(*value, accessor, options),
            // An owned value only lives for this step, so its child is detached too.
            Cow::Owned(value) => {
                resolve(value, accessor, options).map(|child| Cow::Owned(child.into_owned()))
            }
        };

        current = match next {
            Ok(value) => {
                log::trace!("step {} ({}) resolved to {}", step, accessor, value.type_name());
                value
            }
            Err(cause) => {
                let err = SeekError::new(step, root.type_name(), accessors, cause);
                log::debug!("seek stopped at step {}: {}", step, err.trail());
                return Err(err);
            }
        };
    }

    Ok(current)
}

/// Strict lookup with default options: keys and indices only.
///
/// ```
/// use datadig::document::Value;
/// use datadig::{path, seek, Cause};
///
/// let data = Value::dict([("a", Value::dict([("b", Value::dict([("x", 1)]))]))]);
/// let err = seek(&data, &path!["a", "b", "c"]).unwrap_err();
///
/// assert_eq!(err.trail(), "dict -> a -> b -> c");
/// assert_eq!(err.cause(), Cause::KeyNotFound);
/// ```
pub fn seek<'a, T>(root: &'a T, accessors: &[Accessor]) -> Result<Cow<'a, T>, SeekError>
where
    T: Indexable + FieldAccessible,
{
    SeekOptions::default().seek(root, accessors)
}

/// Permissive lookup with default options; `None` when any step fails.
pub fn dig<'a, T>(root: &'a T, accessors: &[Accessor]) -> Option<Cow<'a, T>>
where
    T: Indexable + FieldAccessible,
{
    SeekOptions::default().dig(root, accessors)
}

/// Permissive lookup with default options; `default` when any step fails.
pub fn dig_or<'a, T>(root: &'a T, accessors: &[Accessor], default: T) -> Cow<'a, T>
where
    T: Indexable + FieldAccessible,
{
    SeekOptions::default().dig_or(root, accessors, default)
}
