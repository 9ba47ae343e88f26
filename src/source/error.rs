//! Record source error types

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while loading records from a file
#[derive(Debug, Error)]
pub enum SourceError {
    /// File could not be opened or read
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Malformed JSON, or JSON that does not fit the entity type
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Malformed CSV, or a row that does not fit the entity type
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// File extension is not `.json` or `.csv`
    #[error("Unsupported record file '{}': expected .json or .csv", .0.display())]
    UnsupportedFormat(PathBuf),

    /// JSON document is not an array of records
    #[error("Expected a JSON array of records")]
    NotAnArray,

    /// Array element at the given position is not an object
    #[error("Record {0} is not a JSON object")]
    NotAnObject(usize),

    /// Record at the given position has neither `id` nor `_id`
    #[error("Record {0} has no 'id' or '_id' field")]
    MissingId(usize),
}

/// Record source result type
pub type Result<T> = std::result::Result<T, SourceError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = SourceError::UnsupportedFormat(PathBuf::from("bookings.xlsx"));
        assert_eq!(
            err.to_string(),
            "Unsupported record file 'bookings.xlsx': expected .json or .csv"
        );
        assert_eq!(SourceError::MissingId(3).to_string(), "Record 3 has no 'id' or '_id' field");
        assert_eq!(SourceError::NotAnObject(0).to_string(), "Record 0 is not a JSON object");
    }

    #[test]
    fn test_from_json_error() {
        let json_err = serde_json::from_str::<Vec<u8>>("{").unwrap_err();
        let err: SourceError = json_err.into();
        assert!(matches!(err, SourceError::Json(_)));
        assert!(err.to_string().starts_with("JSON error:"));
    }
}
