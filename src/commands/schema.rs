//! Schema command - print or export a built-in schema as TOML
//!
//! Exported schemas are a starting point for user-defined schemas: copy one
//! into the schema directory, rename it and adjust its fields.

use crate::TripdeskError;
use crate::entities::EntityKind;
use std::path::Path;

type Result<T> = std::result::Result<T, TripdeskError>;

/// Execute the schema command
pub fn execute(entity: EntityKind, output: Option<&Path>, quiet: bool) -> Result<()> {
    let schema = entity.schema()?;

    match output {
        Some(path) => {
            schema.save(path)?;
            if !quiet {
                println!("Saved schema '{}' to {}", schema.name, path.display());
            }
        }
        None => print!("{}", schema.to_toml_string()?),
    }
    Ok(())
}
