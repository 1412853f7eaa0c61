//! Record presentation: tables for text output, arrays for JSON.

use super::to_json;
use crate::error::ApiError;
use crate::store::{Parent, Record};
use crate::types::RecordId;
use comfy_table::Table;

fn parent_cell(parent: &Parent, root_label: &str) -> String {
    match parent {
        Parent::Root => root_label.to_string(),
        Parent::Id(id) => id.to_string(),
    }
}

fn fields_cell(record: &Record) -> String {
    if record.fields.is_empty() {
        "-".to_string()
    } else {
        serde_json::Value::Object(record.fields.clone().into()).to_string()
    }
}

/// Render records as a table, or `empty_message` when there are none.
pub fn format_records_text(records: &[&Record], root_label: &str, empty_message: &str) -> String {
    if records.is_empty() {
        return empty_message.to_string();
    }
    let mut table = Table::new();
    table.load_preset(comfy_table::presets::UTF8_FULL);
    table.set_header(vec!["ID", "Parent", "Fields"]);
    for record in records {
        table.add_row(vec![
            record.id.to_string(),
            parent_cell(&record.parent, root_label),
            fields_cell(record),
        ]);
    }
    table.to_string()
}

pub fn format_records_json(records: &[&Record], pretty: bool) -> Result<String, ApiError> {
    to_json(records, pretty)
}

pub fn format_item_text(item: Option<&Record>, item_id: RecordId, root_label: &str) -> String {
    match item {
        Some(record) => format_records_text(&[record], root_label, ""),
        None => format!("Item {} not found", item_id),
    }
}

/// A missing item renders as `null`.
pub fn format_item_json(item: Option<&Record>, pretty: bool) -> Result<String, ApiError> {
    to_json(&item, pretty)
}
