//! Entities command - list built-in and user-defined schemas

use crate::config::TripdeskConfig;
use crate::entities::catalogue;
use crate::schema::{self, EntitySchema};
use crate::{TripdeskError, output};

type Result<T> = std::result::Result<T, TripdeskError>;

/// Execute the entities command
pub fn execute(config: &TripdeskConfig, quiet: bool) -> Result<()> {
    let builtin = catalogue()?;
    let user = match config.schema_dir() {
        Some(dir) => schema::load_dir(&dir)?,
        None => Vec::new(),
    };

    print!("{}", render(&builtin, &user, quiet));
    Ok(())
}

fn render(builtin: &[EntitySchema], user: &[EntitySchema], quiet: bool) -> String {
    let mut out = String::new();

    if !quiet {
        out.push_str("Built-in entities:\n");
    }
    for schema in builtin {
        out.push_str(&output::schema_summary(schema, quiet));
        out.push('\n');
    }

    if !user.is_empty() {
        if !quiet {
            out.push_str("\nUser schemas:\n");
        }
        for schema in user {
            out.push_str(&output::schema_summary(schema, quiet));
            out.push('\n');
        }
    }

    out
}
