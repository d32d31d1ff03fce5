use super::accessor::Accessor;
use super::capability::{FieldAccessible, Indexable};
use super::error::Cause;
use super::options::SeekOptions;
use std::borrow::Cow;

/// Resolves a single accessor against `current`.
///
/// Subscript access is always tried first. Field lookup is only attempted when
/// `options` allows falling back on the subscript's failure, and only for
/// `Str` accessors; an `Int` cannot name a field, so the subscript's cause
/// stands.
pub fn resolve<'a, T>(
    current: &'a T,
    accessor: &Accessor,
    options: &SeekOptions,
) -> Result<Cow<'a, T>, Cause>
where
    T: Indexable + FieldAccessible,
{
    match current.subscript(accessor) {
        Ok(next) => Ok(next),
        Err(cause) if options.falls_back_on(cause) => lookup_field(current, accessor, cause),
        Err(cause) => Err(cause),
    }
}

fn lookup_field<'a, T>(current: &'a T, accessor: &Accessor, cause: Cause) -> Result<Cow<'a, T>, Cause>
where
    T: Indexable + FieldAccessible,
{
    let Some(name) = accessor.as_str() else {
        return Err(cause);
    };

    log::trace!(
        "subscript on {} failed with {}, trying field '{}'",
        current.type_name(),
        cause,
        name
    );

    current
        .field(name)
        .map(Cow::Borrowed)
        .ok_or(Cause::AttributeNotFound)
}
