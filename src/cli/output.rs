//! CLI output: error mapping from domain errors to stable CLI surface.

use crate::error::{ApiError, StoreError};

/// Map domain errors to a string for CLI output.
pub fn map_error(e: &ApiError) -> String {
    match e {
        ApiError::StoreError(StoreError::MissingChild(id)) => {
            format!("Record {} not found; cannot resolve its ancestors", id)
        }
        ApiError::StoreError(StoreError::DanglingParent { parent, child }) => format!(
            "Record {} references parent {}, which is not in the dataset",
            child, parent
        ),
        other => other.to_string(),
    }
}
