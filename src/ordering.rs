use std::sync::Arc;

use serde::Serialize;

use crate::direction::SortDirection;
use crate::error::SortError;
use crate::sort_key::sort_key_of;

/// A reusable ordering function: a pure transform from a slice of records to
/// a new vector sorted by one field in one direction.
pub type OrderingFn<T> = Arc<dyn Fn(&[T]) -> Result<Vec<T>, SortError> + Send + Sync>;

/// Build the ordering function for one (field, direction) pair.
///
/// The returned function extracts the field's sort key from every record,
/// stable-sorts by key, and clones the records out in the new order. Records
/// with equal keys keep their relative input order in both directions. The
/// source slice is never mutated; a failed key extraction aborts the whole
/// application with no partial output.
pub fn build_ordering<T>(field: &str, direction: SortDirection) -> OrderingFn<T>
where
    T: Serialize + Clone + 'static,
{
    let field = field.to_string();
    Arc::new(move |source: &[T]| {
        let mut keyed = Vec::with_capacity(source.len());
        for (position, record) in source.iter().enumerate() {
            keyed.push((sort_key_of(record, &field)?, position));
        }

        // Equal keys compare equal under either comparator, so the stable
        // sort preserves input order in both directions.
        match direction {
            SortDirection::Ascending => keyed.sort_by(|a, b| a.0.cmp(&b.0)),
            SortDirection::Descending => keyed.sort_by(|a, b| b.0.cmp(&a.0)),
        }

        Ok(keyed
            .into_iter()
            .map(|(_, position)| source[position].clone())
            .collect())
    })
}

/// Apply an ordering function to a source slice.
///
/// Restoring the original order is simply not applying any function.
pub fn apply_ordering<T>(ordering: &OrderingFn<T>, source: &[T]) -> Result<Vec<T>, SortError> {
    ordering(source)
}
