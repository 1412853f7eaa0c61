//! Collection summary presentation.

use super::to_json;
use crate::error::ApiError;
use crate::store::CollectionStats;
use comfy_table::Table;

pub fn format_stats_text(stats: &CollectionStats) -> String {
    let deepest = stats
        .deepest
        .map(|id| id.to_string())
        .unwrap_or_else(|| "-".to_string());
    let mut table = Table::new();
    table.load_preset(comfy_table::presets::UTF8_FULL);
    table.set_header(vec!["Records", "Roots", "Max depth", "Deepest record"]);
    table.add_row(vec![
        stats.records.to_string(),
        stats.roots.to_string(),
        stats.max_depth.to_string(),
        deepest,
    ]);
    table.to_string()
}

pub fn format_stats_json(stats: &CollectionStats, pretty: bool) -> Result<String, ApiError> {
    to_json(stats, pretty)
}
