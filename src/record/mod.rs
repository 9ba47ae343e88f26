//! Record abstraction shared by every browsable entity
//!
//! The browser never looks inside a concrete entity type. Instead, records
//! expose a borrowed, key-addressed view of their fields through the
//! [`Record`] trait, and the search, filter and sort stages only ever see
//! [`FieldValue`]s.
//!
//! ```text
//! ┌─────────────────────────────────────┐
//! │  Record Trait                       │  ← Adaptation layer
//! │  - id() -> &str                     │
//! │  - field(key) -> Option<FieldValue> │
//! └─────────────────────────────────────┘
//!            ▲
//!            │ implements
//!    ┌───────┴────────┬──────────────┐
//!    │                │              │
//!  FlightBooking   CorporateUser   DynamicRecord
//! ```
//!
//! A field that a record does not carry is reported as `None`. The pipeline
//! treats it as "never matches" for search and filter, and as the minimum
//! value for sorting.

pub mod dynamic;

pub use dynamic::{DynamicRecord, DynamicValue};

use std::borrow::Cow;
use std::fmt;

/// A single field value as seen by the browser
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue<'a> {
    /// String, enum or date-like string field
    Text(Cow<'a, str>),
    /// Numeric field
    Number(f64),
}

impl<'a> FieldValue<'a> {
    /// Borrow a string field
    #[must_use]
    pub const fn text(value: &'a str) -> Self {
        Self::Text(Cow::Borrowed(value))
    }

    /// Wrap a value computed from the record (e.g. a joined name)
    #[must_use]
    pub const fn owned(value: String) -> Self {
        Self::Text(Cow::Owned(value))
    }

    /// Text used for search and filter comparisons
    ///
    /// Numbers render without a trailing `.0` when integral, so a filter
    /// value of `"150"` matches a numeric field holding `150.0`.
    #[must_use]
    pub fn as_text(&self) -> Cow<'_, str> {
        match self {
            Self::Text(text) => Cow::Borrowed(text.as_ref()),
            Self::Number(number) => Cow::Owned(format_number(*number)),
        }
    }

    /// Numeric interpretation of the value, parsing text when needed
    #[must_use]
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Self::Number(number) => Some(*number),
            Self::Text(text) => text.trim().parse::<f64>().ok(),
        }
    }

    /// Case-insensitive substring match against an already normalized query
    #[must_use]
    pub fn contains_normalized(&self, normalized_query: &str) -> bool {
        self.as_text().to_lowercase().contains(normalized_query)
    }

    /// Exact match against a filter value
    #[must_use]
    pub fn equals(&self, value: &str) -> bool {
        self.as_text() == value
    }
}

impl fmt::Display for FieldValue<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.as_text())
    }
}

impl<'a> From<&'a str> for FieldValue<'a> {
    fn from(value: &'a str) -> Self {
        Self::text(value)
    }
}

impl From<String> for FieldValue<'_> {
    fn from(value: String) -> Self {
        Self::owned(value)
    }
}

impl From<f64> for FieldValue<'_> {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

impl From<u32> for FieldValue<'_> {
    fn from(value: u32) -> Self {
        Self::Number(f64::from(value))
    }
}

/// Render a number the way the dashboards display it
#[must_use]
pub fn format_number(number: f64) -> String {
    if number.fract() == 0.0 && number.abs() < 1e15 {
        #[allow(clippy::cast_possible_truncation)]
        let integral = number as i64;
        integral.to_string()
    } else {
        number.to_string()
    }
}

/// Trait for types that can be browsed
///
/// Implementors hand out field values by key without copying the record.
///
/// # Examples
///
/// ```ignore
/// impl Record for Hotel {
///     fn id(&self) -> &str {
///         &self.id
///     }
///
///     fn field(&self, key: &str) -> Option<FieldValue<'_>> {
///         match key {
///             "name" => Some(FieldValue::text(&self.name)),
///             "stars" => Some(self.stars.into()),
///             _ => None,
///         }
///     }
/// }
/// ```
pub trait Record {
    /// Stable identity of the record
    fn id(&self) -> &str;

    /// Value of the field named `key`, or `None` if the record lacks it
    fn field(&self, key: &str) -> Option<FieldValue<'_>>;
}

impl<T: Record + ?Sized> Record for &T {
    fn id(&self) -> &str {
        (**self).id()
    }

    fn field(&self, key: &str) -> Option<FieldValue<'_>> {
        (**self).field(key)
    }
}
