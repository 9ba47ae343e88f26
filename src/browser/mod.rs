//! Collection browser: search, filter, sort and paginate in-memory records
//!
//! The browser holds one record source plus the user's query state and
//! derives the visible page on demand:
//!
//! ```text
//! records ──► search ──► filters ──► sort ──► paginate ──► DerivedView
//!              (any searchable  (AND of      (stable)  (clamped page)
//!               field contains)  selections)
//! ```
//!
//! The source is never mutated; every `derived_view()` call recomputes the
//! pipeline from the current state.
//!
//! # Module Structure
//!
//! - `query`: search normalization and filter selections
//! - `pipeline`: pure search, filter and pagination stages
//! - `sort`: sort specification, key extraction and ordering
//! - `view`: the derived, ready-to-render page
//! - `state`: `CollectionBrowser` and its builder
//! - `error`: browser configuration errors

pub mod error;
pub mod pipeline;
pub mod query;
pub mod sort;
pub mod state;
pub mod view;

pub use error::{BrowseError, Result};
pub use pipeline::{RecordFilterExt, clamp_page, paginate, total_pages};
pub use query::{FilterSet, normalize_query};
pub use sort::{SortDirection, SortSpec, parse_date, sort_records};
pub use state::{CollectionBrowser, CollectionBrowserBuilder, DEFAULT_PAGE_SIZE, SortPagePolicy};
pub use view::{DerivedView, PageWindow};
