//! Entity schemas: which fields a browser searches, filters and sorts
//!
//! A schema is the only per-entity input the collection browser needs:
//! - **Searchable fields**: matched case-insensitively by the free-text query
//! - **Filters**: named categorical constraints with their legal values
//! - **Sortable fields**: column keys and how they compare (text, number, date)
//!
//! Built-in entities provide their schema in code (see `crate::entities`).
//! Additional schemas can be stored as TOML files in the schema directory
//! (`~/.config/tripdesk/schemas/` by default).
//!
//! # Examples
//!
//! ```no_run
//! use tripdesk::schema::{EntitySchema, FieldKind};
//!
//! let schema = EntitySchema::builder("hotel-bookings")
//!     .search(["guestName", "hotelName", "city"])
//!     .filter("status", ["confirmed", "pending", "cancelled"])
//!     .open_filter("city")
//!     .sort("checkIn", FieldKind::Date)
//!     .sort("amount", FieldKind::Number)
//!     .build()?;
//!
//! schema.save(std::path::Path::new("hotel-bookings.toml"))?;
//! # Ok::<(), tripdesk::schema::SchemaError>(())
//! ```

pub mod error;
pub mod types;

pub use error::{Result, SchemaError};
pub use types::{ALL, EntitySchema, EntitySchemaBuilder, FieldKind, FilterSpec, SortField};

use std::path::{Path, PathBuf};

/// Get the tripdesk config directory
///
/// Returns `~/.config/tripdesk/` on Linux, or `None` if the platform has no
/// config directory
#[must_use]
pub fn config_dir() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("tripdesk"))
}

/// Get the default directory for user-defined schemas
#[must_use]
pub fn default_schema_dir() -> Option<PathBuf> {
    config_dir().map(|dir| dir.join("schemas"))
}

/// Load every `*.toml` schema in `dir`, sorted by schema name
///
/// A missing directory yields no schemas.
///
/// # Errors
/// Returns error if the directory cannot be listed or any schema file is invalid
pub fn load_dir(dir: &Path) -> Result<Vec<EntitySchema>> {
    if !dir.exists() {
        return Ok(Vec::new());
    }

    let mut schemas = Vec::new();
    for entry in std::fs::read_dir(dir)? {
        let path = entry?.path();
        if path.extension().is_some_and(|ext| ext == "toml") {
            tracing::debug!(path = %path.display(), "loading entity schema");
            schemas.push(EntitySchema::load(&path)?);
        }
    }

    schemas.sort_by(|a, b| a.name.cmp(&b.name));
    Ok(schemas)
}
