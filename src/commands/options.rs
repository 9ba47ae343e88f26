//! Options command - list the choices of one filter

use super::{Resolved, open_dynamic, open_entity, resolve};
use crate::browser::CollectionBrowser;
use crate::cli::SourceArgs;
use crate::config::TripdeskConfig;
use crate::record::Record;
use crate::{TripdeskError, output};
use std::path::Path;

type Result<T> = std::result::Result<T, TripdeskError>;

/// Execute the options command
pub fn execute(
    file: &Path,
    filter: &str,
    source: &SourceArgs,
    counts: bool,
    config: &TripdeskConfig,
    quiet: bool,
) -> Result<()> {
    let listing = match resolve(source, config)? {
        Resolved::Entity(kind) => with_entity!(kind, E => {
            let browser = open_entity::<E>(file, config, None)?;
            render_options(&browser, filter, counts, quiet)?
        }),
        Resolved::Schema(schema) => {
            let browser = open_dynamic(file, schema, config, None)?;
            render_options(&browser, filter, counts, quiet)?
        }
    };

    print!("{listing}");
    Ok(())
}

/// Render the options of `filter`, with per-value counts if requested
///
/// # Errors
///
/// Returns `TripdeskError` if the schema has no such filter.
pub fn render_options<R: Record>(
    browser: &CollectionBrowser<R>,
    filter: &str,
    counts: bool,
    quiet: bool,
) -> Result<String> {
    let options = browser.filter_options(filter)?;
    let tally = if counts { Some(browser.tally(filter)?) } else { None };
    Ok(output::render_options(&options, tally.as_ref(), quiet))
}
