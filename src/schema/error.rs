use thiserror::Error;

#[derive(Debug, Error)]
pub enum SchemaError {
    /// I/O error when reading/writing schema file
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// TOML deserialization error
    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    /// TOML serialization error
    #[error("TOML serialization error: {0}")]
    TomlSer(#[from] toml::ser::Error),

    /// A schema, field or filter name is empty
    #[error("Empty {0} name in schema")]
    EmptyName(&'static str),

    /// The same name is declared twice within one section
    #[error("Duplicate {kind} '{name}' in schema '{schema}'")]
    Duplicate {
        schema: String,
        kind: &'static str,
        name: String,
    },

    /// A filter was named after the "no constraint" sentinel
    #[error("Filter name '{0}' is reserved")]
    ReservedFilterName(String),

    /// Page size must be at least one
    #[error("Invalid page size {0}: must be at least 1")]
    InvalidPageSize(usize),

    /// Schema references a field the entity does not expose
    #[error("Schema '{schema}' references unknown field '{field}'")]
    UnknownField { schema: String, field: String },

    /// No built-in schema with this name
    #[error("Unknown entity '{0}'")]
    UnknownEntity(String),
}

/// Type alias for cleaner function signatures
pub type Result<T> = std::result::Result<T, SchemaError>;

#[cfg(test)]
#[path = "error_tests.rs"]
mod error_tests;
