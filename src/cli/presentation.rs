//! CLI presentation: text and JSON formatters for query results.

mod records;
mod stats;

pub use records::{
    format_item_json, format_item_text, format_records_json, format_records_text,
};
pub use stats::{format_stats_json, format_stats_text};

use crate::error::ApiError;
use serde::Serialize;

fn to_json<T: Serialize + ?Sized>(value: &T, pretty: bool) -> Result<String, ApiError> {
    let rendered = if pretty {
        serde_json::to_string_pretty(value)
    } else {
        serde_json::to_string(value)
    };
    rendered.map_err(|e| ApiError::OutputError(e.to_string()))
}
