//! Search text and filter selections
//!
//! These are the two "query-shape" inputs of the pipeline. Both are plain
//! values: the browser owns one of each and replaces them on user input.

use crate::schema::ALL;
use std::collections::BTreeMap;

/// Normalize free-text search input (pure function)
///
/// Trims surrounding whitespace and lower-cases the text. Internal
/// whitespace is kept as typed so that the query is still a plain substring.
///
/// # Examples
///
/// ```
/// use tripdesk::browser::normalize_query;
///
/// assert_eq!(normalize_query("  Dubai "), "dubai");
/// assert_eq!(normalize_query("   "), "");
/// ```
#[must_use]
pub fn normalize_query(raw: &str) -> String {
    raw.trim().to_lowercase()
}

/// Active filter selections, keyed by filter name
///
/// Selecting [`ALL`] removes the constraint, so the set only ever holds
/// filters that actually narrow the results.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterSet {
    selected: BTreeMap<String, String>,
}

impl FilterSet {
    /// Create an empty filter set
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Select `value` for `name`; returns whether the selection changed
    pub fn set(&mut self, name: &str, value: &str) -> bool {
        if value == ALL {
            self.selected.remove(name).is_some()
        } else {
            self.selected
                .insert(name.to_string(), value.to_string())
                .as_deref()
                != Some(value)
        }
    }

    /// Currently selected value for `name` (`"all"` when unconstrained)
    #[must_use]
    pub fn get(&self, name: &str) -> &str {
        self.selected.get(name).map_or(ALL, String::as_str)
    }

    /// Active constraints in name order
    pub fn active(&self) -> impl Iterator<Item = (&str, &str)> {
        self.selected.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Whether no filter is constraining the results
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.selected.is_empty()
    }

    /// Drop every constraint
    pub fn clear(&mut self) {
        self.selected.clear();
    }
}
