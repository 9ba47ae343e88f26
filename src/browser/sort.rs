//! Sort specification and comparator
//!
//! Sort keys are extracted once per record according to the column's
//! [`FieldKind`], then ordered with a stable sort so that records comparing
//! equal keep their upstream order. Missing or unparseable values sort as
//! the minimum, i.e. first when ascending and last when descending.

use crate::record::{FieldValue, Record};
use crate::schema::{FieldKind, SortField};
use chrono::{DateTime, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::cmp::Ordering;
use std::fmt;

/// Sort direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    #[default]
    Ascending,
    Descending,
}

impl SortDirection {
    /// The opposite direction
    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            Self::Ascending => Self::Descending,
            Self::Descending => Self::Ascending,
        }
    }

    /// Header indicator for this direction
    #[must_use]
    pub const fn arrow(self) -> &'static str {
        match self {
            Self::Ascending => "↑",
            Self::Descending => "↓",
        }
    }
}

impl fmt::Display for SortDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Ascending => f.write_str("ascending"),
            Self::Descending => f.write_str("descending"),
        }
    }
}

/// Active sort column and direction
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortSpec {
    pub field: String,
    pub direction: SortDirection,
}

impl SortSpec {
    /// Ascending sort on `field`
    #[must_use]
    pub fn ascending(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            direction: SortDirection::Ascending,
        }
    }

    /// Next spec after the user asks to sort by `field`
    ///
    /// Re-selecting the active field flips its direction; any other field
    /// starts ascending.
    #[must_use]
    pub fn toggle(current: Option<&Self>, field: &str) -> Self {
        match current {
            Some(spec) if spec.field == field => Self {
                field: spec.field.clone(),
                direction: spec.direction.toggled(),
            },
            _ => Self::ascending(field),
        }
    }
}

/// Comparable key extracted from one record
#[derive(Debug, Clone, PartialEq)]
enum SortKey<'a> {
    Missing,
    Text(Cow<'a, str>),
    Number(f64),
    Date(NaiveDateTime),
}

impl SortKey<'_> {
    const fn rank(&self) -> u8 {
        match self {
            Self::Missing => 0,
            Self::Text(_) => 1,
            Self::Number(_) => 2,
            Self::Date(_) => 3,
        }
    }

    fn compare(&self, other: &Self) -> Ordering {
        match (self, other) {
            (Self::Text(a), Self::Text(b)) => a.cmp(b),
            (Self::Number(a), Self::Number(b)) => a.total_cmp(b),
            (Self::Date(a), Self::Date(b)) => a.cmp(b),
            _ => self.rank().cmp(&other.rank()),
        }
    }
}

fn extract_key<'a>(value: Option<FieldValue<'a>>, kind: FieldKind) -> SortKey<'a> {
    let Some(value) = value else {
        return SortKey::Missing;
    };

    match kind {
        FieldKind::Text => match value {
            FieldValue::Text(text) => SortKey::Text(text),
            FieldValue::Number(_) => SortKey::Text(Cow::Owned(value.as_text().into_owned())),
        },
        FieldKind::Number => value
            .as_number()
            .filter(|number| number.is_finite())
            .map_or(SortKey::Missing, SortKey::Number),
        FieldKind::Date => match value {
            FieldValue::Text(text) => parse_date(&text).map_or(SortKey::Missing, SortKey::Date),
            FieldValue::Number(seconds) if !seconds.is_finite() => SortKey::Missing,
            // Saturating cast; out-of-range seconds are rejected by `from_timestamp`
            #[allow(clippy::cast_possible_truncation)]
            FieldValue::Number(seconds) => DateTime::from_timestamp(seconds as i64, 0)
                .map_or(SortKey::Missing, |dt| SortKey::Date(dt.naive_utc())),
        },
    }
}

/// Parse a date-like string
///
/// Accepts `YYYY-MM-DD`, RFC 3339 timestamps (`2024-01-15T10:30:00.000Z`, as
/// produced by API backends) and naive `YYYY-MM-DD HH:MM:SS` / `T`-separated
/// timestamps. Returns `None` for anything else.
#[must_use]
pub fn parse_date(text: &str) -> Option<NaiveDateTime> {
    let text = text.trim();

    if let Ok(date) = NaiveDate::parse_from_str(text, "%Y-%m-%d") {
        return date.and_hms_opt(0, 0, 0);
    }

    if let Ok(timestamp) = DateTime::parse_from_rfc3339(text) {
        return Some(timestamp.naive_utc());
    }

    ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"]
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(text, format).ok())
}

/// Stable-sort `items` by `field` in `direction`
pub fn sort_records<R: Record + ?Sized>(
    items: &mut Vec<&R>,
    field: &SortField,
    direction: SortDirection,
) {
    let mut keyed: Vec<(SortKey<'_>, &R)> = items
        .iter()
        .map(|&record| (extract_key(record.field(&field.key), field.kind), record))
        .collect();

    keyed.sort_by(|(a, _), (b, _)| match direction {
        SortDirection::Ascending => a.compare(b),
        SortDirection::Descending => b.compare(a),
    });

    *items = keyed.into_iter().map(|(_, record)| record).collect();
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::DynamicRecord;

    fn field(key: &str, kind: FieldKind) -> SortField {
        SortField {
            key: key.to_string(),
            kind,
            label: None,
        }
    }

    fn ids(items: &[&DynamicRecord]) -> Vec<String> {
        items.iter().map(|r| r.id.clone()).collect()
    }

    #[test]
    fn test_toggle() {
        let first = SortSpec::toggle(None, "price");
        assert_eq!(first, SortSpec::ascending("price"));

        let second = SortSpec::toggle(Some(&first), "price");
        assert_eq!(second.direction, SortDirection::Descending);

        let third = SortSpec::toggle(Some(&second), "price");
        assert_eq!(third.direction, SortDirection::Ascending);

        let other = SortSpec::toggle(Some(&second), "status");
        assert_eq!(other, SortSpec::ascending("status"));
    }

    #[test]
    fn test_direction_display_and_arrow() {
        assert_eq!(SortDirection::Ascending.to_string(), "ascending");
        assert_eq!(SortDirection::Descending.arrow(), "↓");
        assert_eq!(SortDirection::Descending.toggled(), SortDirection::Ascending);
    }

    #[test]
    fn test_parse_date_formats() {
        let day = parse_date("2023-06-15").unwrap();
        assert_eq!(day.to_string(), "2023-06-15 00:00:00");

        let rfc = parse_date("2024-01-15T10:30:00.000Z").unwrap();
        assert_eq!(rfc.to_string(), "2024-01-15 10:30:00");

        let naive = parse_date("2024-01-15 08:00:00").unwrap();
        assert_eq!(naive.to_string(), "2024-01-15 08:00:00");

        assert!(parse_date("15/06/2023").is_none());
        assert!(parse_date("").is_none());
    }

    #[test]
    fn test_sort_numbers() {
        let a = DynamicRecord::new("a").with_number("price", 7500.0);
        let b = DynamicRecord::new("b").with_number("price", 4200.0);
        let c = DynamicRecord::new("c").with_number("price", 48500.0);
        let mut items = vec![&a, &b, &c];

        sort_records(&mut items, &field("price", FieldKind::Number), SortDirection::Ascending);
        assert_eq!(ids(&items), vec!["b", "a", "c"]);

        sort_records(&mut items, &field("price", FieldKind::Number), SortDirection::Descending);
        assert_eq!(ids(&items), vec!["c", "a", "b"]);
    }

    #[test]
    fn test_sort_numbers_not_lexicographic() {
        let a = DynamicRecord::new("a").with_text("count", "9");
        let b = DynamicRecord::new("b").with_text("count", "10");
        let mut items = vec![&a, &b];

        sort_records(&mut items, &field("count", FieldKind::Number), SortDirection::Ascending);
        assert_eq!(ids(&items), vec!["a", "b"]);

        sort_records(&mut items, &field("count", FieldKind::Text), SortDirection::Ascending);
        assert_eq!(ids(&items), vec!["b", "a"]);
    }

    #[test]
    fn test_sort_dates_chronologically() {
        let a = DynamicRecord::new("a").with_text("at", "2023-08-05");
        let b = DynamicRecord::new("b").with_text("at", "2023-06-15T09:00:00Z");
        let c = DynamicRecord::new("c").with_text("at", "2023-07-10");
        let mut items = vec![&a, &b, &c];

        sort_records(&mut items, &field("at", FieldKind::Date), SortDirection::Ascending);
        assert_eq!(ids(&items), vec!["b", "c", "a"]);
    }

    #[test]
    fn test_missing_sorts_as_minimum() {
        let a = DynamicRecord::new("a").with_number("price", 10.0);
        let b = DynamicRecord::new("b");
        let c = DynamicRecord::new("c").with_text("price", "unknown");
        let mut items = vec![&a, &b, &c];

        sort_records(&mut items, &field("price", FieldKind::Number), SortDirection::Ascending);
        assert_eq!(ids(&items), vec!["b", "c", "a"]);

        sort_records(&mut items, &field("price", FieldKind::Number), SortDirection::Descending);
        assert_eq!(ids(&items), vec!["a", "b", "c"]);
    }

    #[test]
    fn test_non_finite_numbers_sort_as_missing() {
        let a = DynamicRecord::new("a").with_number("at", 1_686_787_200.0);
        let b = DynamicRecord::new("b").with_number("at", f64::NAN);
        let c = DynamicRecord::new("c").with_number("at", f64::INFINITY);
        let d = DynamicRecord::new("d").with_text("at", "2020-01-01");
        let h = DynamicRecord::new("h").with_number("at", 1e300);
        let mut items = vec![&a, &b, &c, &d, &h];

        sort_records(&mut items, &field("at", FieldKind::Date), SortDirection::Ascending);
        assert_eq!(ids(&items), vec!["b", "c", "h", "d", "a"]);

        let e = DynamicRecord::new("e").with_number("score", 3.0);
        let f = DynamicRecord::new("f").with_number("score", f64::NEG_INFINITY);
        let g = DynamicRecord::new("g").with_text("score", "NaN");
        let mut items = vec![&e, &f, &g];

        sort_records(&mut items, &field("score", FieldKind::Number), SortDirection::Descending);
        assert_eq!(ids(&items), vec!["e", "f", "g"]);
    }

    #[test]
    fn test_sort_is_stable() {
        let a = DynamicRecord::new("a").with_text("status", "pending");
        let b = DynamicRecord::new("b").with_text("status", "active");
        let c = DynamicRecord::new("c").with_text("status", "pending");
        let d = DynamicRecord::new("d").with_text("status", "active");
        let mut items = vec![&a, &b, &c, &d];

        sort_records(&mut items, &field("status", FieldKind::Text), SortDirection::Ascending);
        assert_eq!(ids(&items), vec!["b", "d", "a", "c"]);

        let mut items = vec![&a, &b, &c, &d];
        sort_records(&mut items, &field("status", FieldKind::Text), SortDirection::Descending);
        assert_eq!(ids(&items), vec!["a", "c", "b", "d"]);
    }

    #[test]
    fn test_text_sort_is_case_sensitive() {
        let a = DynamicRecord::new("a").with_text("name", "beta");
        let b = DynamicRecord::new("b").with_text("name", "Alpha");
        let c = DynamicRecord::new("c").with_text("name", "alpha");
        let mut items = vec![&a, &b, &c];

        sort_records(&mut items, &field("name", FieldKind::Text), SortDirection::Ascending);
        assert_eq!(ids(&items), vec!["b", "c", "a"]);
    }
}
