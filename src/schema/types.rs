use heck::ToTitleCase;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::Path;

use super::error::{Result, SchemaError};

/// Filter value meaning "no constraint for this filter"
pub const ALL: &str = "all";

/// How a sortable field is compared
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum FieldKind {
    /// Lexicographic string comparison
    #[default]
    Text,
    /// Numeric comparison
    Number,
    /// Chronological comparison of date-like strings
    Date,
}

/// A categorical filter exposed by an entity
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterSpec {
    /// Name the presentation layer uses to address the filter
    pub name: String,

    /// Record field the filter constrains (defaults to `name`)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub field: Option<String>,

    /// Legal values; empty means "whatever the records contain"
    #[serde(default)]
    pub values: Vec<String>,
}

impl FilterSpec {
    /// Record field the filter constrains
    #[must_use]
    pub fn field(&self) -> &str {
        self.field.as_deref().unwrap_or(&self.name)
    }

    /// Whether the legal values are taken from the data
    #[must_use]
    pub fn is_open(&self) -> bool {
        self.values.is_empty()
    }

    /// Whether `value` may be selected for this filter
    #[must_use]
    pub fn accepts(&self, value: &str) -> bool {
        value == ALL || self.is_open() || self.values.iter().any(|v| v == value)
    }
}

/// A column the records can be ordered by
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortField {
    pub key: String,

    #[serde(default)]
    pub kind: FieldKind,

    /// Column header; derived from the key when absent
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
}

impl SortField {
    /// Column header for this field
    #[must_use]
    pub fn label(&self) -> String {
        self.label
            .clone()
            .unwrap_or_else(|| self.key.to_title_case())
    }
}

/// Per-entity browser configuration
///
/// Declares which fields are searchable, which categorical filters exist and
/// which columns can be sorted (and how). The engine itself knows nothing
/// about bookings, agents or refunds; each entity only supplies one of these.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntitySchema {
    pub name: String,

    /// Preferred page size for this entity
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub page_size: Option<usize>,

    #[serde(default)]
    pub searchable: Vec<String>,

    #[serde(default)]
    pub filters: Vec<FilterSpec>,

    #[serde(default)]
    pub sortable: Vec<SortField>,
}

impl EntitySchema {
    /// Start building a schema for the named entity
    #[must_use]
    pub fn builder(name: impl Into<String>) -> EntitySchemaBuilder {
        EntitySchemaBuilder::new(name)
    }

    /// Look up a filter by name
    #[must_use]
    pub fn filter(&self, name: &str) -> Option<&FilterSpec> {
        self.filters.iter().find(|f| f.name == name)
    }

    /// Look up a sortable field by key
    #[must_use]
    pub fn sort_field(&self, key: &str) -> Option<&SortField> {
        self.sortable.iter().find(|s| s.key == key)
    }

    /// Every record field this schema reads
    pub fn referenced_fields(&self) -> impl Iterator<Item = &str> {
        self.searchable
            .iter()
            .map(String::as_str)
            .chain(self.filters.iter().map(FilterSpec::field))
            .chain(self.sortable.iter().map(|s| s.key.as_str()))
    }

    /// Check internal consistency
    ///
    /// # Errors
    /// Returns error if:
    /// - Any name is empty
    /// - A searchable field, filter or sort key is declared twice
    /// - A filter is named `all`
    /// - The page size is zero
    pub fn validate(&self) -> Result<()> {
        if self.name.trim().is_empty() {
            return Err(SchemaError::EmptyName("schema"));
        }

        if let Some(0) = self.page_size {
            return Err(SchemaError::InvalidPageSize(0));
        }

        self.check_unique("searchable field", self.searchable.iter().map(String::as_str))?;
        self.check_unique("filter", self.filters.iter().map(|f| f.name.as_str()))?;
        self.check_unique("sort field", self.sortable.iter().map(|s| s.key.as_str()))?;

        for filter in &self.filters {
            if filter.name == ALL {
                return Err(SchemaError::ReservedFilterName(filter.name.clone()));
            }
            if filter.field().trim().is_empty() {
                return Err(SchemaError::EmptyName("filter field"));
            }
            self.check_unique(
                "filter value",
                filter.values.iter().map(String::as_str),
            )?;
        }

        Ok(())
    }

    /// Check that every referenced field is one of `known`
    ///
    /// # Errors
    /// Returns `SchemaError::UnknownField` for the first field not in `known`
    pub fn validate_fields(&self, known: &[&str]) -> Result<()> {
        match self.referenced_fields().find(|field| !known.contains(field)) {
            Some(field) => Err(SchemaError::UnknownField {
                schema: self.name.clone(),
                field: field.to_string(),
            }),
            None => Ok(()),
        }
    }

    fn check_unique<'a>(
        &self,
        kind: &'static str,
        names: impl Iterator<Item = &'a str>,
    ) -> Result<()> {
        let mut seen = HashSet::new();
        for name in names {
            if name.trim().is_empty() {
                return Err(SchemaError::EmptyName(kind));
            }
            if !seen.insert(name) {
                return Err(SchemaError::Duplicate {
                    schema: self.name.clone(),
                    kind,
                    name: name.to_string(),
                });
            }
        }
        Ok(())
    }

    /// Parse and validate a schema from TOML
    ///
    /// # Errors
    /// Returns error if the TOML is malformed or the schema is invalid
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let schema: Self = toml::from_str(content)?;
        schema.validate()?;
        Ok(schema)
    }

    /// Serialize to pretty TOML
    ///
    /// # Errors
    /// Returns error if serialization fails
    pub fn to_toml_string(&self) -> Result<String> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Load and validate a schema file
    ///
    /// # Errors
    /// Returns error if the file cannot be read, parsed or validated
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    /// Save the schema as TOML, creating parent directories
    ///
    /// # Errors
    /// Returns error if the file cannot be written
    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        std::fs::write(path, self.to_toml_string()?)?;
        Ok(())
    }
}

/// Builder for `EntitySchema`
#[derive(Debug, Clone)]
pub struct EntitySchemaBuilder {
    schema: EntitySchema,
}

impl EntitySchemaBuilder {
    /// Create a builder with no fields declared
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            schema: EntitySchema {
                name: name.into(),
                page_size: None,
                searchable: Vec::new(),
                filters: Vec::new(),
                sortable: Vec::new(),
            },
        }
    }

    /// Set the preferred page size
    #[must_use]
    pub const fn page_size(mut self, size: usize) -> Self {
        self.schema.page_size = Some(size);
        self
    }

    /// Declare searchable fields
    #[must_use]
    pub fn search<I, S>(mut self, fields: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.schema.searchable.extend(fields.into_iter().map(Into::into));
        self
    }

    /// Declare a filter with a closed set of legal values
    #[must_use]
    pub fn filter<I, S>(self, name: &str, values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.filter_on(name, name, values)
    }

    /// Declare a closed filter whose name differs from the field it reads
    #[must_use]
    pub fn filter_on<I, S>(mut self, name: &str, field: &str, values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.schema.filters.push(FilterSpec {
            name: name.to_string(),
            field: (name != field).then(|| field.to_string()),
            values: values.into_iter().map(Into::into).collect(),
        });
        self
    }

    /// Declare a filter whose options come from the data
    #[must_use]
    pub fn open_filter(self, name: &str) -> Self {
        self.filter_on(name, name, std::iter::empty::<String>())
    }

    /// Declare a sortable field
    #[must_use]
    pub fn sort(mut self, key: &str, kind: FieldKind) -> Self {
        self.schema.sortable.push(SortField {
            key: key.to_string(),
            kind,
            label: None,
        });
        self
    }

    /// Declare a sortable field with an explicit column header
    #[must_use]
    pub fn sort_labeled(mut self, key: &str, kind: FieldKind, label: &str) -> Self {
        self.schema.sortable.push(SortField {
            key: key.to_string(),
            kind,
            label: Some(label.to_string()),
        });
        self
    }

    /// Validate and return the schema
    ///
    /// # Errors
    /// Returns error if the schema fails `EntitySchema::validate`
    pub fn build(self) -> Result<EntitySchema> {
        self.schema.validate()?;
        Ok(self.schema)
    }
}
