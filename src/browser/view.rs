//! Derived, ready-to-render output of the browser pipeline

use super::sort::SortSpec;
use std::fmt;

/// The "Showing X to Y of Z" range of a page (1-based, inclusive)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageWindow {
    pub first: usize,
    pub last: usize,
    pub total: usize,
}

impl fmt::Display for PageWindow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Showing {} to {} of {}",
            self.first, self.last, self.total
        )
    }
}

/// Materialized result of search → filter → sort → paginate
///
/// Borrowed from the browser that produced it; recomputed on every request
/// and never cached.
#[derive(Debug, PartialEq)]
pub struct DerivedView<'a, R> {
    /// Records on the current page, at most `page_size` of them
    pub visible_items: Vec<&'a R>,

    /// Records matching search and filters, before pagination
    pub total_matched: usize,

    pub current_page: usize,

    /// `ceil(total_matched / page_size)`; 0 when nothing matched
    pub total_pages: usize,

    pub page_size: usize,

    pub active_sort: Option<SortSpec>,
}

impl<R> DerivedView<'_, R> {
    /// Whether the "no results" state should be shown
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.visible_items.is_empty()
    }

    /// Range of records shown on this page, `None` when the page is empty
    #[must_use]
    pub fn window(&self) -> Option<PageWindow> {
        if self.visible_items.is_empty() {
            return None;
        }

        let first = (self.current_page - 1) * self.page_size + 1;
        Some(PageWindow {
            first,
            last: first + self.visible_items.len() - 1,
            total: self.total_matched,
        })
    }

    /// Whether the "previous" control is enabled
    #[must_use]
    pub const fn has_previous(&self) -> bool {
        self.current_page > 1
    }

    /// Whether the "next" control is enabled
    #[must_use]
    pub const fn has_next(&self) -> bool {
        self.current_page < self.total_pages
    }

    /// Numbers for the page buttons
    pub fn page_numbers(&self) -> impl Iterator<Item = usize> {
        1..=self.total_pages
    }

    /// Pagination controls are only shown when results overflow one page
    #[must_use]
    pub const fn needs_pagination(&self) -> bool {
        self.total_matched > self.page_size
    }
}
