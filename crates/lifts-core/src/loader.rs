//! Input loaders for the attempts and registrations datasets
//!
//! Three source formats are supported, selected by file extension:
//! - `.csv`: record-per-line with a header row
//! - `.json`: a JSON array of records
//! - anything else: legacy source file with an embedded array literal,
//!   located by a marker substring and parsed as JSON (never evaluated)

use crate::error::{Error, Result};
use crate::model::{LiftAttempt, Registration};
use serde::de::DeserializeOwned;
use std::fs;
use std::path::Path;

/// Marker introducing the attempts array in legacy sources
pub const ATTEMPTS_MARKER: &str = "liftingResults";
/// Marker introducing the registrations array in legacy sources
pub const ENTRIES_MARKER: &str = "entries";

/// Load the raw lift attempts dataset
pub fn load_attempts<P: AsRef<Path>>(path: P) -> Result<Vec<LiftAttempt>> {
    load_records(path.as_ref(), ATTEMPTS_MARKER)
}

/// Load the entry registrations dataset
pub fn load_registrations<P: AsRef<Path>>(path: P) -> Result<Vec<Registration>> {
    load_records(path.as_ref(), ENTRIES_MARKER)
}

/// Load a dataset, dispatching on file extension
fn load_records<T: DeserializeOwned>(path: &Path, marker: &str) -> Result<Vec<T>> {
    match path.extension().and_then(|e| e.to_str()) {
        Some("csv") => {
            let content = read_source(path)?;
            parse_csv_records(&content, path)
        }
        Some("json") => {
            let content = read_source(path)?;
            serde_json::from_str(&content).map_err(|e| Error::JsonParse {
                path: path.to_path_buf(),
                source: e,
            })
        }
        _ => {
            let content = read_source(path)?;
            let slice = extract_array(&content, marker, path)?;
            serde_json::from_str(slice).map_err(|e| Error::JsonParse {
                path: path.to_path_buf(),
                source: e,
            })
        }
    }
}

fn read_source(path: &Path) -> Result<String> {
    fs::read_to_string(path).map_err(|e| Error::FileRead {
        path: path.to_path_buf(),
        source: e,
    })
}

/// Parse CSV records from a string (useful for testing)
pub fn parse_csv_records<T: DeserializeOwned>(content: &str, source_name: impl AsRef<Path>) -> Result<Vec<T>> {
    let path = source_name.as_ref();
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_reader(content.as_bytes());

    let mut records = Vec::new();
    for result in reader.deserialize() {
        let record: T = result.map_err(|e| Error::Csv {
            path: path.to_path_buf(),
            source: e,
        })?;
        records.push(record);
    }
    Ok(records)
}

/// Slice the embedded array literal out of a legacy source file
///
/// The array runs from the first `[` at or after the marker through the
/// file's last `]`. Exactly one array per source is expected.
fn extract_array<'a>(content: &'a str, marker: &str, path: &Path) -> Result<&'a str> {
    let marker_pos = content.find(marker).ok_or_else(|| Error::MarkerNotFound {
        marker: marker.to_string(),
        path: path.to_path_buf(),
    })?;

    let start = content[marker_pos..]
        .find('[')
        .map(|i| marker_pos + i)
        .ok_or_else(|| Error::ArrayNotFound {
            path: path.to_path_buf(),
        })?;

    let end = content.rfind(']').ok_or_else(|| Error::ArrayNotFound {
        path: path.to_path_buf(),
    })?;

    if end < start {
        return Err(Error::ArrayNotFound {
            path: path.to_path_buf(),
        });
    }

    Ok(&content[start..=end])
}
