//! Process-wide memoization of which fields carry a default annotation.
//!
//! The cache maps a record type (by `TypeId`) to the ordered subset of its
//! fields that carry a default annotation. It is populated lazily on first
//! use and is grow-only: entries are never invalidated or evicted, which is
//! safe because type structure is immutable at run time. Concurrent first-use
//! of the same type may redundantly compute the subset, but exactly one entry
//! wins and later calls return it unchanged.

use std::any::TypeId;
use std::sync::Arc;

use dashmap::DashMap;
use once_cell::sync::Lazy;

use crate::field::FieldMeta;
use crate::record::Defaultable;

static FIELD_TAG_CACHE: Lazy<DashMap<TypeId, Arc<[FieldMeta]>>> = Lazy::new(DashMap::new);

/// The fields of `T` that carry a default annotation, in declaration order.
///
/// Computed at most once per type and reused for the lifetime of the process.
pub fn fields_with_default<T: Defaultable>() -> Arc<[FieldMeta]> {
    let key = TypeId::of::<T>();
    if let Some(entry) = FIELD_TAG_CACHE.get(&key) {
        return Arc::clone(&entry);
    }

    let annotated: Arc<[FieldMeta]> = T::fields()
        .iter()
        .filter(|meta| meta.default.is_some())
        .copied()
        .collect();

    Arc::clone(&FIELD_TAG_CACHE.entry(key).or_insert(annotated))
}
