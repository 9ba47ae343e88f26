//! Search, filter and pagination stages
//!
//! Every stage is a pure function over borrowed records, so the derived view
//! can be recomputed from scratch on each change without touching the source.
//!
//! # Iterator Adapters
//!
//! [`RecordFilterExt`] adds the search and filter stages to any slice of
//! records:
//!
//! ```ignore
//! use tripdesk::browser::pipeline::RecordFilterExt;
//!
//! let matched: Vec<_> = bookings
//!     .apply_criteria(&schema, "dubai", &filters)
//!     .collect();
//! ```

use super::query::FilterSet;
use crate::record::Record;
use crate::schema::EntitySchema;

/// Whether `record` matches an already normalized search query
///
/// An empty query matches everything. Otherwise at least one of `fields`
/// must contain the query, ignoring case. Missing fields never match.
pub fn matches_search<R: Record + ?Sized>(record: &R, query: &str, fields: &[String]) -> bool {
    query.is_empty()
        || fields.iter().any(|key| {
            record
                .field(key)
                .is_some_and(|value| value.contains_normalized(query))
        })
}

/// Whether `record` passes every active filter
///
/// Filter names are resolved to record fields through `schema`. A filter
/// the schema does not know can never be satisfied.
pub fn matches_filters<R: Record + ?Sized>(
    record: &R,
    filters: &FilterSet,
    schema: &EntitySchema,
) -> bool {
    filters.active().all(|(name, value)| {
        schema.filter(name).is_some_and(|spec| {
            record
                .field(spec.field())
                .is_some_and(|field| field.equals(value))
        })
    })
}

/// Number of pages needed for `total` items (0 when there are none)
#[must_use]
pub const fn total_pages(total: usize, page_size: usize) -> usize {
    if page_size == 0 {
        0
    } else {
        total.div_ceil(page_size)
    }
}

/// Clamp a requested page into `1..=max(1, total_pages)`
#[must_use]
pub fn clamp_page(page: usize, total_pages: usize) -> usize {
    page.clamp(1, total_pages.max(1))
}

/// Slice out page `page` (1-based) of `items`
///
/// Pages past the end yield an empty slice.
#[must_use]
pub fn paginate<T>(items: &[T], page: usize, page_size: usize) -> &[T] {
    let start = page.saturating_sub(1).saturating_mul(page_size).min(items.len());
    let end = start.saturating_add(page_size).min(items.len());
    &items[start..end]
}

/// Extension trait applying the search and filter stages to a record slice
pub trait RecordFilterExt<R: Record> {
    /// Records matching `query` (normalized) and every filter in `filters`
    ///
    /// Source order is preserved.
    fn apply_criteria<'a>(
        &'a self,
        schema: &'a EntitySchema,
        query: &'a str,
        filters: &'a FilterSet,
    ) -> impl Iterator<Item = &'a R> + 'a
    where
        R: 'a;
}

impl<R: Record> RecordFilterExt<R> for [R] {
    fn apply_criteria<'a>(
        &'a self,
        schema: &'a EntitySchema,
        query: &'a str,
        filters: &'a FilterSet,
    ) -> impl Iterator<Item = &'a R> + 'a
    where
        R: 'a,
    {
        self.iter().filter(move |record| {
            matches_search(*record, query, &schema.searchable)
                && matches_filters(*record, filters, schema)
        })
    }
}
