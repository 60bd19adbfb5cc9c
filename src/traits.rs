use crate::{Tag, Value};

/// A Rust type that corresponds to exactly one tagpack value kind.
///
/// This is what typed access on [`AnyValue`](crate::AnyValue) is generic
/// over: the wrapper compares its own tag against `T::TAG` before handing
/// out the payload.
pub trait Kind: Sized {
    /// The tag written ahead of values of this kind.
    const TAG: Tag;

    /// Wraps `self` in the matching `Value` variant.
    fn into_value(self) -> Value;

    /// Extracts the payload from `value`.
    ///
    /// Fails with `TypeMismatch` when `value` is of a different kind.
    /// Conversions that add a check on top of the kind (such as UTF-8
    /// validation for `String`) fail with their own error kind.
    fn from_value(value: Value) -> crate::Result<Self>;
}
