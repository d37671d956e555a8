//! The `Defaultable` trait and the applicator entry point.

use crate::cache;
use crate::field::FieldMeta;

/// A struct whose fields can be populated from declarative default annotations.
///
/// Normally implemented with `#[derive(Defaultable)]`, which builds the field
/// table from `#[default_value("...")]` attributes. Hand-written
/// implementations work the same way; see the `cache` module tests for one.
pub trait Defaultable: 'static {
    /// Every field in declaration order, annotated or not.
    fn fields() -> &'static [FieldMeta]
    where
        Self: Sized;

    /// Apply one field's default annotation to `self`.
    ///
    /// Scalar fields are only written while still at their zero value; list
    /// fields always append. Unknown indices and fields of unsupported kind
    /// are no-ops.
    fn apply_field(&mut self, meta: &FieldMeta);
}

/// Populate zero-valued annotated fields of `record` with their declared
/// defaults.
///
/// Never fails: annotation text that does not parse leaves its field
/// unchanged, and no other field is affected. Scalar fields that already hold
/// a non-zero value are never overwritten. List fields append on every call,
/// so repeated application accumulates their annotation tokens.
pub fn apply_defaults<T: Defaultable>(record: &mut T) {
    for meta in cache::fields_with_default::<T>().iter() {
        record.apply_field(meta);
    }
}
