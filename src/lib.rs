//! Tripdesk - search, filter, sort and paginate travel-desk records
//!
//! This library provides a generic collection browser for in-memory records
//! (bookings, corporate accounts, agents, refunds, visa applications) driven
//! by a per-entity schema, plus loaders for JSON and CSV exports.

use thiserror::Error;

pub mod browser;
pub mod cli;
pub mod commands;
pub mod config;
pub mod entities;
pub mod output;
pub mod record;
pub mod schema;
pub mod source;

#[cfg(test)]
pub mod testing;

/// Error enum, contains all failure states of the program
#[derive(Debug, Error)]
pub enum TripdeskError {
    /// Browser configuration error
    #[error("Browse error: {0}")]
    BrowseError(#[from] browser::BrowseError),
    /// Schema error
    #[error("Schema error: {0}")]
    SchemaError(#[from] schema::SchemaError),
    /// Record source error
    #[error("Source error: {0}")]
    SourceError(#[from] source::SourceError),
    /// Represents a configuration error
    #[error("Configuration error: {0}")]
    ConfigError(#[from] ::config::ConfigError),
    /// Represents an I/O error
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),
    /// Invalid input error
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}
