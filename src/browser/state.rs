//! Collection browser state and builder
//!
//! Provides a stateful API over the pure pipeline stages:
//! ```no_run
//! use tripdesk::browser::CollectionBrowser;
//! use tripdesk::entities::FlightBooking;
//! # fn example(bookings: Vec<FlightBooking>) -> Result<(), tripdesk::browser::BrowseError> {
//! let mut browser = CollectionBrowser::for_entity(bookings)?;
//!
//! browser.set_search_query("dubai");
//! browser.set_filter("status", "confirmed")?;
//! browser.set_sort("price")?;
//!
//! let view = browser.derived_view();
//! println!("{} of {} bookings", view.visible_items.len(), view.total_matched);
//! # Ok(())
//! # }
//! ```

use super::error::{BrowseError, Result};
use super::pipeline::{self, RecordFilterExt};
use super::query::{FilterSet, normalize_query};
use super::sort::{self, SortSpec};
use super::view::DerivedView;
use crate::entities::Entity;
use crate::record::Record;
use crate::schema::{ALL, EntitySchema};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};

/// Page size used when neither the caller nor the schema chooses one
pub const DEFAULT_PAGE_SIZE: usize = 5;

/// What happens to the current page when the sort column changes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum SortPagePolicy {
    /// Go back to page 1, like search and filter changes do
    #[default]
    Reset,
    /// Stay on the current page
    Preserve,
}

/// Stateful search / filter / sort / paginate session over one record source
///
/// Use `CollectionBrowser::builder()` or `CollectionBrowser::for_entity()`
/// to construct.
#[derive(Debug)]
pub struct CollectionBrowser<R> {
    records: Vec<R>,
    schema: EntitySchema,
    query: String,
    filters: FilterSet,
    sort: Option<SortSpec>,
    current_page: usize,
    page_size: usize,
    sort_page_policy: SortPagePolicy,
}

impl<R: Record> CollectionBrowser<R> {
    /// Create a new builder for constructing a `CollectionBrowser`
    #[must_use]
    pub fn builder() -> CollectionBrowserBuilder<R> {
        CollectionBrowserBuilder::new()
    }

    /// Browse typed entity records with their built-in schema
    ///
    /// # Errors
    ///
    /// Returns `BrowseError::Schema` if the entity's schema references fields
    /// the entity does not expose.
    pub fn for_entity(records: Vec<R>) -> Result<Self>
    where
        R: Entity,
    {
        let schema = R::schema()?;
        schema.validate_fields(R::FIELDS)?;
        Self::builder().schema(schema).records(records).build()
    }

    /// Set the free-text search and go back to page 1
    ///
    /// The text is trimmed and case-folded; an empty string matches everything.
    pub fn set_search_query(&mut self, text: &str) {
        self.query = normalize_query(text);
        self.current_page = 1;
        tracing::debug!(query = %self.query, "search query updated");
    }

    /// Select `value` for the filter `name` and go back to page 1
    ///
    /// Selecting `"all"` lifts the constraint.
    ///
    /// # Errors
    ///
    /// Returns `BrowseError::UnknownFilter` if the schema declares no such
    /// filter, or `BrowseError::InvalidFilterValue` if the filter has a
    /// closed value set that does not contain `value`.
    pub fn set_filter(&mut self, name: &str, value: &str) -> Result<()> {
        let spec = self.schema.filter(name).ok_or_else(|| {
            tracing::warn!(filter = name, schema = %self.schema.name, "unknown filter");
            BrowseError::UnknownFilter(name.to_string())
        })?;

        if !spec.accepts(value) {
            tracing::warn!(filter = name, value, "value not allowed for filter");
            return Err(BrowseError::InvalidFilterValue {
                filter: name.to_string(),
                value: value.to_string(),
            });
        }

        self.filters.set(name, value);
        self.current_page = 1;
        tracing::debug!(filter = name, value, "filter updated");
        Ok(())
    }

    /// Sort by `field`, flipping direction if it is already the sort column
    ///
    /// Whether the page resets follows the configured `SortPagePolicy`.
    ///
    /// # Errors
    ///
    /// Returns `BrowseError::UnknownSortField` if `field` is not sortable.
    pub fn set_sort(&mut self, field: &str) -> Result<()> {
        if self.schema.sort_field(field).is_none() {
            tracing::warn!(field, schema = %self.schema.name, "field is not sortable");
            return Err(BrowseError::UnknownSortField(field.to_string()));
        }

        let spec = SortSpec::toggle(self.sort.as_ref(), field);
        tracing::debug!(field, direction = %spec.direction, "sort updated");
        self.sort = Some(spec);

        if self.sort_page_policy == SortPagePolicy::Reset {
            self.current_page = 1;
        }
        Ok(())
    }

    /// Go to page `page`, clamped into `1..=max(1, total_pages)`
    pub fn set_page(&mut self, page: usize) {
        let total_pages = pipeline::total_pages(self.count_matched(), self.page_size);
        self.current_page = pipeline::clamp_page(page, total_pages);
        tracing::debug!(requested = page, page = self.current_page, "page updated");
    }

    /// Step forward one page (stays on the last page)
    pub fn next_page(&mut self) {
        self.set_page(self.current_page.saturating_add(1));
    }

    /// Step back one page (stays on page 1)
    pub fn previous_page(&mut self) {
        self.set_page(self.current_page.saturating_sub(1));
    }

    /// Clear search, filters and sort and go back to page 1
    pub fn reset(&mut self) {
        self.query.clear();
        self.filters.clear();
        self.sort = None;
        self.current_page = 1;
        tracing::debug!("browser reset");
    }

    /// Swap in a refreshed record source
    ///
    /// Query, filters and sort are kept; the current page is clamped against
    /// the new result count.
    pub fn replace_records(&mut self, records: Vec<R>) {
        tracing::debug!(
            old = self.records.len(),
            new = records.len(),
            "record source replaced"
        );
        self.records = records;
        let current = self.current_page;
        self.set_page(current);
    }

    /// Compute the current view
    ///
    /// Always succeeds; when nothing matches the view has no visible items.
    #[must_use]
    pub fn derived_view(&self) -> DerivedView<'_, R> {
        let matched = self.matched();
        let total_matched = matched.len();
        let total_pages = pipeline::total_pages(total_matched, self.page_size);
        let current_page = pipeline::clamp_page(self.current_page, total_pages);

        DerivedView {
            visible_items: pipeline::paginate(&matched, current_page, self.page_size).to_vec(),
            total_matched,
            current_page,
            total_pages,
            page_size: self.page_size,
            active_sort: self.sort.clone(),
        }
    }

    /// Options for a filter dropdown
    ///
    /// Closed filters list their declared values; open filters list the
    /// distinct values present in the source, sorted.
    ///
    /// # Errors
    ///
    /// Returns `BrowseError::UnknownFilter` if the schema declares no such filter.
    pub fn filter_options(&self, name: &str) -> Result<Vec<String>> {
        let spec = self
            .schema
            .filter(name)
            .ok_or_else(|| BrowseError::UnknownFilter(name.to_string()))?;

        if !spec.is_open() {
            return Ok(spec.values.iter().filter(|v| *v != ALL).cloned().collect());
        }

        let distinct: BTreeSet<String> = self
            .records
            .iter()
            .filter_map(|record| record.field(spec.field()))
            .map(|value| value.as_text().into_owned())
            .collect();
        Ok(distinct.into_iter().collect())
    }

    /// Count source records per value of a filter's field
    ///
    /// Counts the whole source, ignoring the current search and filters.
    /// Records lacking the field are not counted.
    ///
    /// # Errors
    ///
    /// Returns `BrowseError::UnknownFilter` if the schema declares no such filter.
    pub fn tally(&self, name: &str) -> Result<BTreeMap<String, usize>> {
        let spec = self
            .schema
            .filter(name)
            .ok_or_else(|| BrowseError::UnknownFilter(name.to_string()))?;

        let mut counts = BTreeMap::new();
        for record in &self.records {
            if let Some(value) = record.field(spec.field()) {
                *counts.entry(value.as_text().into_owned()).or_insert(0) += 1;
            }
        }
        Ok(counts)
    }

    /// Current normalized search text
    #[must_use]
    pub fn search_query(&self) -> &str {
        &self.query
    }

    /// Current filter selections
    #[must_use]
    pub const fn filters(&self) -> &FilterSet {
        &self.filters
    }

    /// Active sort, if any
    #[must_use]
    pub const fn sort(&self) -> Option<&SortSpec> {
        self.sort.as_ref()
    }

    /// Stored page number
    #[must_use]
    pub const fn current_page(&self) -> usize {
        self.current_page
    }

    /// Records per page
    #[must_use]
    pub const fn page_size(&self) -> usize {
        self.page_size
    }

    /// Sort page policy in effect
    #[must_use]
    pub const fn sort_page_policy(&self) -> SortPagePolicy {
        self.sort_page_policy
    }

    /// Schema the browser was configured with
    #[must_use]
    pub const fn schema(&self) -> &EntitySchema {
        &self.schema
    }

    /// Full record source, in source order
    #[must_use]
    pub fn records(&self) -> &[R] {
        &self.records
    }

    fn count_matched(&self) -> usize {
        self.records
            .apply_criteria(&self.schema, &self.query, &self.filters)
            .count()
    }

    fn matched(&self) -> Vec<&R> {
        let mut matched: Vec<&R> = self
            .records
            .apply_criteria(&self.schema, &self.query, &self.filters)
            .collect();

        if let Some(spec) = &self.sort
            && let Some(field) = self.schema.sort_field(&spec.field)
        {
            sort::sort_records(&mut matched, field, spec.direction);
        }

        matched
    }
}

/// Builder for `CollectionBrowser`
///
/// Provides a fluent API for configuring a browser:
/// ```no_run
/// # use tripdesk::browser::{CollectionBrowser, SortPagePolicy};
/// # use tripdesk::record::DynamicRecord;
/// # use tripdesk::schema::EntitySchema;
/// # fn example(schema: EntitySchema, rows: Vec<DynamicRecord>) -> Result<(), tripdesk::browser::BrowseError> {
/// let browser = CollectionBrowser::builder()
///     .schema(schema)
///     .records(rows)
///     .page_size(10)
///     .sort_page_policy(SortPagePolicy::Preserve)
///     .build()?;
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct CollectionBrowserBuilder<R> {
    schema: Option<EntitySchema>,
    records: Vec<R>,
    page_size: Option<usize>,
    default_page_size: usize,
    sort_page_policy: SortPagePolicy,
}

impl<R: Record> CollectionBrowserBuilder<R> {
    /// Create a new builder with default settings
    #[must_use]
    pub const fn new() -> Self {
        Self {
            schema: None,
            records: Vec::new(),
            page_size: None,
            default_page_size: DEFAULT_PAGE_SIZE,
            sort_page_policy: SortPagePolicy::Reset,
        }
    }

    /// Set the entity schema (required)
    #[must_use]
    pub fn schema(mut self, schema: EntitySchema) -> Self {
        self.schema = Some(schema);
        self
    }

    /// Set the record source
    #[must_use]
    pub fn records(mut self, records: Vec<R>) -> Self {
        self.records = records;
        self
    }

    /// Set the page size, overriding the schema's preference
    #[must_use]
    pub const fn page_size(mut self, size: usize) -> Self {
        self.page_size = Some(size);
        self
    }

    /// Set the page size used when neither caller nor schema picks one
    #[must_use]
    pub const fn default_page_size(mut self, size: usize) -> Self {
        self.default_page_size = size;
        self
    }

    /// Choose whether sorting resets the page
    #[must_use]
    pub const fn sort_page_policy(mut self, policy: SortPagePolicy) -> Self {
        self.sort_page_policy = policy;
        self
    }

    /// Apply defaults from the user configuration
    #[must_use]
    pub const fn config(mut self, config: &crate::config::TripdeskConfig) -> Self {
        self.default_page_size = config.page_size;
        self
    }

    /// Build the `CollectionBrowser`
    ///
    /// # Errors
    ///
    /// Returns `BrowseError::BuildError` if no schema was provided or the
    /// resolved page size is zero, and `BrowseError::Schema` if the schema
    /// is invalid.
    pub fn build(self) -> Result<CollectionBrowser<R>> {
        let schema = self
            .schema
            .ok_or_else(|| BrowseError::BuildError("Schema is required".to_string()))?;
        schema.validate()?;

        let page_size = self
            .page_size
            .or(schema.page_size)
            .unwrap_or(self.default_page_size);
        if page_size == 0 {
            return Err(BrowseError::BuildError(
                "Page size must be at least 1".to_string(),
            ));
        }

        tracing::debug!(
            schema = %schema.name,
            records = self.records.len(),
            page_size,
            "collection browser created"
        );

        Ok(CollectionBrowser {
            records: self.records,
            schema,
            query: String::new(),
            filters: FilterSet::new(),
            sort: None,
            current_page: 1,
            page_size,
            sort_page_policy: self.sort_page_policy,
        })
    }
}

impl<R: Record> Default for CollectionBrowserBuilder<R> {
    fn default() -> Self {
        Self::new()
    }
}
