//! Dataset loading for record collections

use crate::error::LoadError;
use crate::store::Record;
use serde_json::Value;
use std::io::Read;
use std::path::Path;
use tracing::info;

/// Load records from a JSON file holding a top-level array of objects.
pub fn load_records<P: AsRef<Path>>(path: P) -> Result<Vec<Record>, LoadError> {
    let path = path.as_ref();
    let file = std::fs::File::open(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let records = read_records(std::io::BufReader::new(file))?;
    info!(path = %path.display(), count = records.len(), "Dataset loaded");
    Ok(records)
}

/// Read records from any JSON source.
pub fn read_records<R: Read>(reader: R) -> Result<Vec<Record>, LoadError> {
    let value: Value = serde_json::from_reader(reader)?;
    records_from_value(value)
}

/// Parse records from a JSON string.
pub fn parse_records(json: &str) -> Result<Vec<Record>, LoadError> {
    let value: Value = serde_json::from_str(json)?;
    records_from_value(value)
}

fn records_from_value(value: Value) -> Result<Vec<Record>, LoadError> {
    let items = match value {
        Value::Array(items) => items,
        other => return Err(LoadError::NotAnArray(json_kind(&other))),
    };

    items
        .into_iter()
        .enumerate()
        .map(|(index, item)| {
            serde_json::from_value(item).map_err(|source| LoadError::InvalidRecord { index, source })
        })
        .collect()
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
