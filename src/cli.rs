//! Command-line interface definitions and parsing
//!
//! This module defines the complete CLI structure for tripdesk using the `clap` crate.
//!
//! # Commands
//!
//! - **show**: Search, filter, sort and page through a record file (default alias `s`)
//! - **options**: List the choices of one filter, optionally with counts
//! - **entities**: List the built-in and user-defined schemas
//! - **schema**: Print or export a built-in schema as TOML
//!
//! # Design Features
//!
//! - Records are read from `.json` or `.csv` exports
//! - A file is interpreted either as a built-in entity (`--entity`) or through
//!   a schema TOML (`--schema`)
//! - Repeating `--sort FIELD` toggles direction, just like clicking a column header twice
//! - Global `--quiet` flag for scripting-friendly output (ids only)
//!
//! # Examples
//!
//! ```bash
//! tripdesk show bookings.json --entity flight-bookings -s dubai
//! tripdesk show users.json -e corporate-users -f status=verified --sort employeesCount --sort employeesCount
//! tripdesk show hotels.csv --schema ./hotels.toml -p 2
//! tripdesk options users.json -e corporate-users industry --counts
//! ```

use crate::entities::EntityKind;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// How to interpret a record file
#[derive(Args, Debug, Clone, PartialEq, Eq)]
#[group(required = true, multiple = false)]
pub struct SourceArgs {
    /// Built-in entity the file contains
    #[arg(short = 'e', long = "entity", value_enum)]
    pub entity: Option<EntityKind>,

    /// Schema TOML file, or the name of a schema in the schema directory
    #[arg(long = "schema", value_name = "NAME|PATH")]
    pub schema: Option<String>,
}

/// Search, filter, sort and paging options
#[derive(Args, Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryArgs {
    /// Free-text search across the searchable fields
    #[arg(short = 's', long = "search", value_name = "TEXT")]
    pub search: Option<String>,

    /// Filter selection; repeat for several filters (`all` lifts a filter)
    #[arg(short = 'f', long = "filter", value_name = "NAME=VALUE", value_parser = parse_filter)]
    pub filters: Vec<(String, String)>,

    /// Sort column; repeat the same column to sort descending
    #[arg(long = "sort", value_name = "FIELD")]
    pub sort: Vec<String>,

    /// Page to show (clamped into range)
    #[arg(short = 'p', long = "page", value_name = "N", default_value_t = 1)]
    pub page: usize,

    /// Records per page (overrides schema and config)
    #[arg(long = "page-size", value_name = "N", value_parser = clap::value_parser!(u16).range(1..))]
    pub page_size: Option<u16>,
}

/// Main CLI structure for parsing command-line arguments
#[derive(Parser, Debug)]
#[command(name = "tripdesk")]
#[command(about = "Browse travel-desk records from the command line", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Suppress informational output (only print record ids)
    #[arg(short = 'q', long = "quiet", global = true)]
    pub quiet: bool,
}

/// Available CLI commands
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Show one page of records
    #[command(visible_alias = "s")]
    Show {
        /// Record file (.json or .csv)
        #[arg(value_name = "FILE")]
        file: PathBuf,

        #[command(flatten)]
        source: SourceArgs,

        #[command(flatten)]
        query: QueryArgs,
    },

    /// List the options of a filter
    #[command(visible_alias = "o")]
    Options {
        /// Record file (.json or .csv)
        #[arg(value_name = "FILE")]
        file: PathBuf,

        /// Filter name
        #[arg(value_name = "FILTER")]
        filter: String,

        #[command(flatten)]
        source: SourceArgs,

        /// Show how many records carry each value
        #[arg(short = 'c', long = "counts")]
        counts: bool,
    },

    /// List available schemas
    #[command(visible_alias = "ls")]
    Entities,

    /// Print a built-in schema as TOML
    Schema {
        /// Built-in entity
        #[arg(value_enum, value_name = "ENTITY")]
        entity: EntityKind,

        /// Write to this file instead of stdout
        #[arg(short = 'o', long = "output", value_name = "PATH")]
        output: Option<PathBuf>,
    },
}

/// Parse a `NAME=VALUE` filter selection
///
/// # Errors
///
/// Returns a message if there is no `=` or the name is empty.
pub fn parse_filter(raw: &str) -> Result<(String, String), String> {
    match raw.split_once('=') {
        Some((name, value)) if !name.trim().is_empty() => {
            Ok((name.trim().to_string(), value.to_string()))
        }
        _ => Err(format!("expected NAME=VALUE, got '{raw}'")),
    }
}

impl Cli {
    /// Parse command line arguments
    #[must_use]
    pub fn parse_args() -> Self {
        Self::parse()
    }
}
