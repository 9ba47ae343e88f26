//! Output formatting for CLI display
//!
//! Renders a derived view as a plain-text table with the active sort arrow in
//! its column header, followed by a "Showing X to Y of Z" footer and page
//! controls. Quiet mode prints only record ids.

use crate::browser::{DerivedView, FilterSet};
use crate::record::Record;
use crate::schema::{ALL, EntitySchema};
use colored::Colorize;
use heck::ToTitleCase;
use std::collections::BTreeMap;
use std::fmt::Write;

const MAX_CELL_WIDTH: usize = 28;

/// Columns shown for a schema: id first, then every referenced field once
#[must_use]
pub fn display_columns(schema: &EntitySchema) -> Vec<String> {
    let mut columns = vec!["id".to_string()];
    for field in schema.referenced_fields() {
        if !columns.iter().any(|c| c == field) {
            columns.push(field.to_string());
        }
    }
    columns
}

/// Column header: sort label if declared, else the key in title case
#[must_use]
pub fn column_header(schema: &EntitySchema, key: &str) -> String {
    schema
        .sort_field(key)
        .map_or_else(|| key.to_title_case(), crate::schema::SortField::label)
}

fn truncate(text: &str) -> String {
    if text.chars().count() <= MAX_CELL_WIDTH {
        text.to_string()
    } else {
        let kept: String = text.chars().take(MAX_CELL_WIDTH - 1).collect();
        format!("{kept}…")
    }
}

fn pad(text: &str, width: usize) -> String {
    let len = text.chars().count();
    format!("{text}{}", " ".repeat(width.saturating_sub(len)))
}

/// Render the visible page as a table
///
/// An empty view renders a "No matching records" line instead.
#[must_use]
pub fn render_table<R: Record>(view: &DerivedView<'_, R>, schema: &EntitySchema) -> String {
    if view.is_empty() {
        return format!("{}\n", "No matching records".yellow());
    }

    let columns = display_columns(schema);
    let headers: Vec<String> = columns
        .iter()
        .map(|key| {
            let header = column_header(schema, key);
            match &view.active_sort {
                Some(sort) if &sort.field == key => format!("{header} {}", sort.direction.arrow()),
                _ => header,
            }
        })
        .collect();

    let rows: Vec<Vec<String>> = view
        .visible_items
        .iter()
        .map(|record| {
            columns
                .iter()
                .map(|key| {
                    record
                        .field(key)
                        .map_or_else(|| "-".to_string(), |value| truncate(&value.as_text()))
                })
                .collect()
        })
        .collect();

    let widths: Vec<usize> = headers
        .iter()
        .enumerate()
        .map(|(i, header)| {
            rows.iter()
                .map(|row| row[i].chars().count())
                .chain(std::iter::once(header.chars().count()))
                .max()
                .unwrap_or(0)
        })
        .collect();

    let mut out = String::new();
    let header_line: Vec<String> = headers
        .iter()
        .zip(&widths)
        .zip(&columns)
        .map(|((header, width), key)| {
            let cell = pad(header, *width);
            if view.active_sort.as_ref().is_some_and(|s| &s.field == key) {
                cell.yellow().bold().to_string()
            } else {
                cell.bold().to_string()
            }
        })
        .collect();
    let _ = writeln!(out, "{}", header_line.join("  ").trim_end());

    for row in &rows {
        let line: Vec<String> = row
            .iter()
            .zip(&widths)
            .enumerate()
            .map(|(i, (cell, width))| {
                let cell = pad(cell, *width);
                if i == 0 { cell.cyan().to_string() } else { cell }
            })
            .collect();
        let _ = writeln!(out, "{}", line.join("  ").trim_end());
    }

    out
}

/// Render the page window and navigation state
///
/// Page controls are only listed when results overflow one page.
#[must_use]
pub fn render_footer<R>(view: &DerivedView<'_, R>) -> String {
    let Some(window) = view.window() else {
        return String::new();
    };

    let mut out = format!("{window}\n");
    if view.needs_pagination() {
        let previous = if view.has_previous() {
            "‹ prev".normal()
        } else {
            "‹ prev".dimmed()
        };
        let next = if view.has_next() {
            "next ›".normal()
        } else {
            "next ›".dimmed()
        };
        let pages: Vec<String> = view
            .page_numbers()
            .map(|n| {
                if n == view.current_page {
                    format!("[{n}]").bold().to_string()
                } else {
                    n.to_string()
                }
            })
            .collect();
        let _ = writeln!(out, "{previous}  {}  {next}", pages.join(" "));
    }
    out
}

/// One id per line, for scripting
#[must_use]
pub fn render_ids<R: Record>(view: &DerivedView<'_, R>) -> String {
    view.visible_items
        .iter()
        .map(|record| format!("{}\n", record.id()))
        .collect()
}

/// Describe the active search and filters, e.g. `search "dubai", status = confirmed`
#[must_use]
pub fn describe_query(query: &str, filters: &FilterSet) -> Option<String> {
    let mut parts = Vec::new();
    if !query.is_empty() {
        parts.push(format!("search \"{query}\""));
    }
    parts.extend(filters.active().map(|(name, value)| format!("{name} = {value}")));
    (!parts.is_empty()).then(|| parts.join(", "))
}

/// Render filter options, with counts when available
#[must_use]
pub fn render_options(
    options: &[String],
    counts: Option<&BTreeMap<String, usize>>,
    quiet: bool,
) -> String {
    let mut out = String::new();
    if !quiet {
        let _ = writeln!(out, "  {}", ALL.dimmed());
    }
    for option in options {
        match counts {
            Some(counts) if !quiet => {
                let count = counts.get(option).copied().unwrap_or(0);
                let _ = writeln!(out, "  {option} ({count})");
            }
            _ if quiet => {
                let _ = writeln!(out, "{option}");
            }
            _ => {
                let _ = writeln!(out, "  {option}");
            }
        }
    }
    out
}

/// One-line summary of a schema for the entity listing
#[must_use]
pub fn schema_summary(schema: &EntitySchema, quiet: bool) -> String {
    if quiet {
        return schema.name.clone();
    }

    let filters: Vec<&str> = schema.filters.iter().map(|f| f.name.as_str()).collect();
    let sortable: Vec<&str> = schema.sortable.iter().map(|s| s.key.as_str()).collect();
    format!(
        "  {}  search: {}; filters: {}; sort: {}",
        schema.name.green(),
        schema.searchable.join(", "),
        if filters.is_empty() { "-".to_string() } else { filters.join(", ") },
        if sortable.is_empty() { "-".to_string() } else { sortable.join(", ") },
    )
}
