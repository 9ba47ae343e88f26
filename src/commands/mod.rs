//! Command implementations
//!
//! Each command is a module with an execute function that takes parsed CLI args
//! and runs the operation against a record file. Shared here: turning the
//! `--entity` / `--schema` arguments into a schema and opening a browser.

/// Run `$body` with `$entity` bound to the entity type for `$kind`
macro_rules! with_entity {
    ($kind:expr, $entity:ident => $body:expr) => {
        match $kind {
            $crate::entities::EntityKind::CorporateUsers => {
                type $entity = $crate::entities::CorporateUser;
                $body
            }
            $crate::entities::EntityKind::FlightBookings => {
                type $entity = $crate::entities::FlightBooking;
                $body
            }
            $crate::entities::EntityKind::HotelBookings => {
                type $entity = $crate::entities::HotelBooking;
                $body
            }
            $crate::entities::EntityKind::TransportBookings => {
                type $entity = $crate::entities::TransportBooking;
                $body
            }
            $crate::entities::EntityKind::Agents => {
                type $entity = $crate::entities::Agent;
                $body
            }
            $crate::entities::EntityKind::Refunds => {
                type $entity = $crate::entities::RefundRequest;
                $body
            }
            $crate::entities::EntityKind::VisaApplications => {
                type $entity = $crate::entities::VisaApplication;
                $body
            }
        }
    };
}

pub mod entities;
pub mod options;
pub mod schema;
pub mod show;

// Re-export execute functions for convenience
pub use entities::execute as entities;
pub use options::execute as options;
pub use schema::execute as schema;
pub use show::execute as show;

use crate::browser::CollectionBrowser;
use crate::cli::{QueryArgs, SourceArgs};
use crate::config::TripdeskConfig;
use crate::entities::{Entity, EntityKind, builtin_schema};
use crate::record::{DynamicRecord, Record};
use crate::schema::{self as schemas, EntitySchema};
use crate::{TripdeskError, source};
use std::path::Path;

type Result<T> = std::result::Result<T, TripdeskError>;

/// What a record file should be read as
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolved {
    /// Typed built-in entity
    Entity(EntityKind),
    /// Schemaless records described by a schema
    Schema(EntitySchema),
}

/// Resolve `--entity` / `--schema` into something that can be browsed
///
/// `--schema` accepts a path to a TOML file, the name of a schema in the
/// schema directory, or the name of a built-in schema.
///
/// # Errors
///
/// Returns `TripdeskError` if the schema cannot be loaded or found.
pub fn resolve(source: &SourceArgs, config: &TripdeskConfig) -> Result<Resolved> {
    if let Some(kind) = source.entity {
        return Ok(Resolved::Entity(kind));
    }

    let Some(name) = source.schema.as_deref() else {
        return Err(TripdeskError::InvalidInput(
            "Either --entity or --schema is required".to_string(),
        ));
    };

    let path = Path::new(name);
    if path.extension().is_some_and(|ext| ext == "toml") || path.is_file() {
        tracing::debug!(path = %path.display(), "loading schema file");
        return Ok(Resolved::Schema(EntitySchema::load(path)?));
    }

    if let Some(dir) = config.schema_dir() {
        let found = schemas::load_dir(&dir)?.into_iter().find(|s| s.name == name);
        if let Some(schema) = found {
            tracing::debug!(schema = name, dir = %dir.display(), "using user schema");
            return Ok(Resolved::Schema(schema));
        }
    }

    Ok(Resolved::Schema(builtin_schema(name)?))
}

/// Build a browser over `records` with config and command-line overrides
///
/// # Errors
///
/// Returns `TripdeskError` if the browser cannot be built.
pub fn open_browser<R: Record>(
    schema: EntitySchema,
    records: Vec<R>,
    config: &TripdeskConfig,
    query: Option<&QueryArgs>,
) -> Result<CollectionBrowser<R>> {
    let mut builder = CollectionBrowser::builder()
        .schema(schema)
        .records(records)
        .config(config);

    if let Some(query) = query {
        if let Some(size) = query.page_size {
            builder = builder.page_size(usize::from(size));
        }
    }

    Ok(builder.build()?)
}

/// Load a typed entity file and open a browser over it
///
/// # Errors
///
/// Returns `TripdeskError` if the file cannot be loaded or the schema is invalid.
pub fn open_entity<E: Entity>(
    file: &Path,
    config: &TripdeskConfig,
    query: Option<&QueryArgs>,
) -> Result<CollectionBrowser<E>> {
    let schema = E::schema()?;
    schema.validate_fields(E::FIELDS)?;
    let records = source::load_typed::<E>(file)?;
    open_browser(schema, records, config, query)
}

/// Load a schemaless file and open a browser over it
///
/// # Errors
///
/// Returns `TripdeskError` if the file cannot be loaded or the browser cannot be built.
pub fn open_dynamic(
    file: &Path,
    schema: EntitySchema,
    config: &TripdeskConfig,
    query: Option<&QueryArgs>,
) -> Result<CollectionBrowser<DynamicRecord>> {
    let records = source::load_records(file)?;
    open_browser(schema, records, config, query)
}

/// Apply search, filters, sorts and page from the command line, in that order
///
/// The page is selected last, so `--page` always addresses the sorted
/// result and never depends on the browser's `SortPagePolicy`.
///
/// # Errors
///
/// Returns `TripdeskError` if a filter or sort field is not part of the schema.
pub fn apply_query<R: Record>(browser: &mut CollectionBrowser<R>, query: &QueryArgs) -> Result<()> {
    if let Some(text) = &query.search {
        browser.set_search_query(text);
    }
    for (name, value) in &query.filters {
        browser.set_filter(name, value)?;
    }
    for field in &query.sort {
        browser.set_sort(field)?;
    }
    browser.set_page(query.page);
    Ok(())
}
