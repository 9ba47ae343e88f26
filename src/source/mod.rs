//! Loading record sources from exported files
//!
//! Two shapes are supported, chosen by file extension:
//!
//! - **JSON** (`.json`): an array of objects, as returned by the admin APIs
//! - **CSV** (`.csv`): one record per row, with a header row
//!
//! Records can be loaded schemalessly as [`DynamicRecord`]s (identity taken
//! from an `id` or `_id` field) or deserialized straight into a typed entity
//! with [`load_typed`].

pub mod error;

pub use error::{Result, SourceError};

use crate::record::{DynamicRecord, DynamicValue};
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

/// Supported record file formats
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    Json,
    Csv,
}

impl Format {
    /// Detect the format from a file extension (case-insensitive)
    ///
    /// # Errors
    ///
    /// Returns `SourceError::UnsupportedFormat` for anything but `.json` or `.csv`.
    pub fn from_path(path: &Path) -> Result<Self> {
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(str::to_ascii_lowercase);

        match extension.as_deref() {
            Some("json") => Ok(Self::Json),
            Some("csv") => Ok(Self::Csv),
            _ => Err(SourceError::UnsupportedFormat(path.to_path_buf())),
        }
    }
}

/// Load schemaless records from a JSON or CSV file
///
/// Nested JSON values (objects, arrays) are skipped with a warning, as are
/// `null`s; the browser sees such fields as missing. Empty CSV cells are
/// missing too.
///
/// # Errors
///
/// Returns `SourceError` if the file cannot be read or parsed, or a record
/// has no identity.
pub fn load_records(path: &Path) -> Result<Vec<DynamicRecord>> {
    let format = Format::from_path(path)?;
    let reader = BufReader::new(File::open(path)?);

    let records = match format {
        Format::Json => parse_json(reader)?,
        Format::Csv => parse_csv(reader)?,
    };

    tracing::debug!(path = %path.display(), count = records.len(), "loaded records");
    Ok(records)
}

/// Deserialize typed entities from a JSON or CSV file
///
/// CSV only suits flat entities; nested fields need JSON.
///
/// # Errors
///
/// Returns `SourceError` if the file cannot be read or a record does not
/// match `T`.
pub fn load_typed<T: DeserializeOwned>(path: &Path) -> Result<Vec<T>> {
    let format = Format::from_path(path)?;
    let reader = BufReader::new(File::open(path)?);

    let records: Vec<T> = match format {
        Format::Json => serde_json::from_reader(reader)?,
        Format::Csv => csv::Reader::from_reader(reader)
            .deserialize()
            .collect::<std::result::Result<_, _>>()?,
    };

    tracing::debug!(
        path = %path.display(),
        count = records.len(),
        entity = std::any::type_name::<T>(),
        "loaded typed records"
    );
    Ok(records)
}

/// Parse a JSON array of objects into dynamic records
///
/// # Errors
///
/// Returns `SourceError` if the input is not an array of objects with ids.
pub fn parse_json<R: Read>(reader: R) -> Result<Vec<DynamicRecord>> {
    let Value::Array(items) = serde_json::from_reader(reader)? else {
        return Err(SourceError::NotAnArray);
    };

    items
        .into_iter()
        .enumerate()
        .map(|(index, item)| {
            let Value::Object(object) = item else {
                return Err(SourceError::NotAnObject(index));
            };

            let id = ["id", "_id"]
                .iter()
                .find_map(|key| object.get(*key).and_then(scalar_text))
                .ok_or(SourceError::MissingId(index))?;

            let mut record = DynamicRecord::new(id);
            for (key, value) in object {
                if key == "id" {
                    continue;
                }
                match value {
                    Value::String(text) => record.insert(key, DynamicValue::Text(text)),
                    Value::Number(number) => match number.as_f64() {
                        Some(n) => record.insert(key, DynamicValue::Number(n)),
                        None => record.insert(key, DynamicValue::Text(number.to_string())),
                    },
                    Value::Bool(flag) => record.insert(key, DynamicValue::Text(flag.to_string())),
                    Value::Null => {}
                    Value::Array(_) | Value::Object(_) => {
                        tracing::warn!(record = index, field = %key, "skipping nested field");
                    }
                }
            }
            Ok(record)
        })
        .collect()
}

/// Parse CSV with a header row into dynamic records
///
/// Numeric-looking cells become numbers.
///
/// # Errors
///
/// Returns `SourceError` if the CSV is malformed or a row has no id.
pub fn parse_csv<R: Read>(reader: R) -> Result<Vec<DynamicRecord>> {
    let mut reader = csv::Reader::from_reader(reader);
    let headers = reader.headers()?.clone();
    let id_column = headers
        .iter()
        .position(|h| h == "id")
        .or_else(|| headers.iter().position(|h| h == "_id"));

    reader
        .records()
        .enumerate()
        .map(|(index, row)| {
            let row = row?;
            let id = id_column
                .and_then(|column| row.get(column))
                .filter(|id| !id.trim().is_empty())
                .ok_or(SourceError::MissingId(index))?;

            let mut record = DynamicRecord::new(id);
            for (column, (header, cell)) in headers.iter().zip(row.iter()).enumerate() {
                if Some(column) == id_column || cell.is_empty() {
                    continue;
                }
                record.insert(header, DynamicValue::infer(cell));
            }
            Ok(record)
        })
        .collect()
}

fn scalar_text(value: &Value) -> Option<String> {
    match value {
        Value::String(text) if !text.is_empty() => Some(text.clone()),
        Value::Number(number) => Some(number.to_string()),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::FlightBooking;
    use crate::record::{FieldValue, Record};
    use std::io::Write;
    use tempfile::TempDir;

    fn write_file(dir: &TempDir, name: &str, content: &str) -> std::path::PathBuf {
        let path = dir.path().join(name);
        let mut file = File::create(&path).unwrap();
        file.write_all(content.as_bytes()).unwrap();
        path
    }

    #[test]
    fn test_format_from_path() {
        assert_eq!(Format::from_path(Path::new("a.json")).unwrap(), Format::Json);
        assert_eq!(Format::from_path(Path::new("a.CSV")).unwrap(), Format::Csv);
        assert!(matches!(
            Format::from_path(Path::new("a.xlsx")),
            Err(SourceError::UnsupportedFormat(_))
        ));
        assert!(Format::from_path(Path::new("noext")).is_err());
    }

    #[test]
    fn test_parse_json_scalars() {
        let json = r#"[
            {"id": "H1", "hotel": "Taj", "nights": 3, "breakfast": true, "notes": null},
            {"_id": "665f1a", "country": "Singapore", "passportData": [{"a": 1}]}
        ]"#;
        let records = parse_json(json.as_bytes()).unwrap();
        assert_eq!(records.len(), 2);

        assert_eq!(records[0].id(), "H1");
        assert_eq!(records[0].field("nights"), Some(FieldValue::Number(3.0)));
        assert_eq!(records[0].field("breakfast").unwrap().as_text(), "true");
        assert!(records[0].field("notes").is_none());

        assert_eq!(records[1].id(), "665f1a");
        assert_eq!(records[1].field("_id").unwrap().as_text(), "665f1a");
        assert!(records[1].field("passportData").is_none());
    }

    #[test]
    fn test_parse_json_numeric_id() {
        let records = parse_json(r#"[{"id": 42, "name": "x"}]"#.as_bytes()).unwrap();
        assert_eq!(records[0].id(), "42");
    }

    #[test]
    fn test_parse_json_rejects_bad_shapes() {
        assert!(matches!(
            parse_json(r#"{"id": "x"}"#.as_bytes()),
            Err(SourceError::NotAnArray)
        ));
        assert!(matches!(
            parse_json(r#"[{"id": "x"}, 5]"#.as_bytes()),
            Err(SourceError::NotAnObject(1))
        ));
        assert!(matches!(
            parse_json(r#"[{"name": "x"}]"#.as_bytes()),
            Err(SourceError::MissingId(0))
        ));
    }

    #[test]
    fn test_parse_csv() {
        let csv = "id,guest,amount,phone\nHB1,Asha,12500,+91 9876543210\nHB2,Ravi,,\n";
        let records = parse_csv(csv.as_bytes()).unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].field("amount"), Some(FieldValue::Number(12500.0)));
        assert_eq!(
            records[0].field("phone").unwrap().as_text(),
            "+91 9876543210"
        );
        assert!(records[1].field("amount").is_none());
        assert_eq!(records[1].field("guest").unwrap().as_text(), "Ravi");
    }

    #[test]
    fn test_parse_csv_keeps_zero_padded_codes() {
        use crate::browser::CollectionBrowser;
        use crate::schema::EntitySchema;

        let records = parse_csv("id,pin,code\nA,007,0123\nB,42,9\n".as_bytes()).unwrap();
        assert_eq!(records[0].field("pin"), Some(FieldValue::text("007")));
        assert_eq!(records[0].field("code").unwrap().as_text(), "0123");
        assert_eq!(records[1].field("pin"), Some(FieldValue::Number(42.0)));

        let schema = EntitySchema::builder("codes")
            .search(["code"])
            .open_filter("pin")
            .build()
            .unwrap();
        let mut browser = CollectionBrowser::builder()
            .schema(schema)
            .records(records)
            .build()
            .unwrap();
        assert_eq!(browser.filter_options("pin").unwrap(), vec!["007", "42"]);

        browser.set_search_query("0123");
        assert_eq!(browser.derived_view().total_matched, 1);

        browser.set_search_query("");
        browser.set_filter("pin", "007").unwrap();
        let view = browser.derived_view();
        assert_eq!(view.total_matched, 1);
        assert_eq!(view.visible_items[0].id(), "A");
    }

    #[test]
    fn test_parse_csv_requires_id_column() {
        let csv = "name\nAsha\n";
        assert!(matches!(
            parse_csv(csv.as_bytes()),
            Err(SourceError::MissingId(0))
        ));
    }

    #[test]
    fn test_load_records_from_file() {
        let dir = TempDir::new().unwrap();
        let path = write_file(&dir, "hotels.json", r#"[{"id": "H1", "city": "Goa"}]"#);
        let records = load_records(&path).unwrap();
        assert_eq!(records[0].field("city").unwrap().as_text(), "Goa");

        let missing = dir.path().join("missing.json");
        assert!(matches!(load_records(&missing), Err(SourceError::Io(_))));
    }

    #[test]
    fn test_load_typed_json_and_csv() {
        let dir = TempDir::new().unwrap();
        let bookings = crate::testing::sample_flight_bookings();

        let json_path = write_file(&dir, "b.json", &serde_json::to_string(&bookings).unwrap());
        let from_json: Vec<FlightBooking> = load_typed(&json_path).unwrap();
        assert_eq!(from_json, bookings);

        let csv_path = dir.path().join("b.csv");
        let mut writer = csv::Writer::from_path(&csv_path).unwrap();
        for booking in &bookings {
            writer.serialize(booking).unwrap();
        }
        writer.flush().unwrap();

        let from_csv: Vec<FlightBooking> = load_typed(&csv_path).unwrap();
        assert_eq!(from_csv.len(), 7);
        assert_eq!(from_csv[1].destination, "Dubai (DXB)");
        assert_eq!(from_csv[1].price, 22500.0);
    }
}
