//! Schemaless records
//!
//! `DynamicRecord` backs record sources whose shape is only known at runtime
//! (a JSON export, a CSV sheet). Field keys are whatever the source uses.

use super::{FieldValue, Record, format_number};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A scalar field stored by a [`DynamicRecord`]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum DynamicValue {
    Number(f64),
    Text(String),
}

impl DynamicValue {
    /// Interpret a raw cell: numeric-looking cells become numbers
    ///
    /// A cell only becomes a number when formatting that number gives the
    /// cell back, so codes such as `007` or `1.50` stay text.
    #[must_use]
    pub fn infer(raw: &str) -> Self {
        let trimmed = raw.trim();
        match trimmed.parse::<f64>() {
            Ok(number) if number.is_finite() && format_number(number) == trimmed => {
                Self::Number(number)
            }
            _ => Self::Text(raw.to_string()),
        }
    }
}

/// Record with an identity and an ordered map of scalar fields
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DynamicRecord {
    pub id: String,
    #[serde(default)]
    pub fields: BTreeMap<String, DynamicValue>,
}

impl DynamicRecord {
    /// Create a record with no fields
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            fields: BTreeMap::new(),
        }
    }

    /// Add a text field
    #[must_use]
    pub fn with_text(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.fields.insert(key.into(), DynamicValue::Text(value.into()));
        self
    }

    /// Add a numeric field
    #[must_use]
    pub fn with_number(mut self, key: impl Into<String>, value: f64) -> Self {
        self.fields.insert(key.into(), DynamicValue::Number(value));
        self
    }

    /// Insert or replace a field
    pub fn insert(&mut self, key: impl Into<String>, value: DynamicValue) {
        self.fields.insert(key.into(), value);
    }

    /// Field keys carried by this record
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.fields.keys().map(String::as_str)
    }
}

impl Record for DynamicRecord {
    fn id(&self) -> &str {
        &self.id
    }

    fn field(&self, key: &str) -> Option<FieldValue<'_>> {
        if key == "id" {
            return Some(FieldValue::text(&self.id));
        }

        self.fields.get(key).map(|value| match value {
            DynamicValue::Number(number) => FieldValue::Number(*number),
            DynamicValue::Text(text) => FieldValue::text(text),
        })
    }
}
