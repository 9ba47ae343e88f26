//! Show command - print one page of a record file

use super::{Resolved, apply_query, open_dynamic, open_entity, resolve};
use crate::browser::CollectionBrowser;
use crate::cli::{QueryArgs, SourceArgs};
use crate::config::TripdeskConfig;
use crate::record::Record;
use crate::{TripdeskError, output};
use colored::Colorize;
use std::path::Path;

type Result<T> = std::result::Result<T, TripdeskError>;

/// Execute the show command
pub fn execute(
    file: &Path,
    source: &SourceArgs,
    query: &QueryArgs,
    config: &TripdeskConfig,
    quiet: bool,
) -> Result<()> {
    let page = match resolve(source, config)? {
        Resolved::Entity(kind) => with_entity!(kind, E => {
            let mut browser = open_entity::<E>(file, config, Some(query))?;
            render_page(&mut browser, query, quiet)?
        }),
        Resolved::Schema(schema) => {
            let mut browser = open_dynamic(file, schema, config, Some(query))?;
            render_page(&mut browser, query, quiet)?
        }
    };

    print!("{page}");
    Ok(())
}

/// Apply the query and render the resulting page
///
/// # Errors
///
/// Returns `TripdeskError` if the query names an unknown filter or sort field.
pub fn render_page<R: Record>(
    browser: &mut CollectionBrowser<R>,
    query: &QueryArgs,
    quiet: bool,
) -> Result<String> {
    apply_query(browser, query)?;
    let view = browser.derived_view();

    if quiet {
        return Ok(output::render_ids(&view));
    }

    let mut out = String::new();
    if let Some(description) = output::describe_query(browser.search_query(), browser.filters()) {
        out.push_str(&format!("{} {description}\n", "Matching".dimmed()));
    }
    out.push_str(&output::render_table(&view, browser.schema()));
    out.push_str(&output::render_footer(&view));
    Ok(out)
}
