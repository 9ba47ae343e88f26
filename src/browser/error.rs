//! Browser-specific error types
//!
//! Data never makes the browser fail: empty results, out-of-range pages and
//! records missing a field all degrade to well-defined states. The errors in
//! this module are configuration errors, raised when a caller addresses a
//! filter, sort column or schema the browser was not configured with.
//!
//! # Error Types
//!
//! - **`UnknownFilter`**: `set_filter` named a filter the schema does not declare
//! - **`InvalidFilterValue`**: value outside a filter's closed value set
//! - **`UnknownSortField`**: `set_sort` named a column that is not sortable
//! - **`BuildError`**: the browser builder was missing required input
//! - **`Schema`**: the schema itself is invalid (wraps `SchemaError`)

use thiserror::Error;

/// Browser configuration errors
#[derive(Debug, Error)]
pub enum BrowseError {
    /// Filter name not declared by the schema
    #[error("Unknown filter '{0}'")]
    UnknownFilter(String),

    /// Value not among the filter's legal values
    #[error("Invalid value '{value}' for filter '{filter}'")]
    InvalidFilterValue { filter: String, value: String },

    /// Field not declared as sortable
    #[error("Field '{0}' is not sortable")]
    UnknownSortField(String),

    /// Failed to build the browser
    #[error("Failed to build browser: {0}")]
    BuildError(String),

    /// Invalid schema
    #[error("Schema error: {0}")]
    Schema(#[from] crate::schema::SchemaError),
}

/// Browser result type
pub type Result<T> = std::result::Result<T, BrowseError>;

#[cfg(test)]
#[path = "error_tests.rs"]
mod error_tests;
