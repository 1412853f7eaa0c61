//! Error types for the treestore query layer.

use crate::types::RecordId;
use std::path::PathBuf;
use thiserror::Error;

/// Query errors raised by the ancestor walk
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    #[error("Missing reference: no record with id {0}")]
    MissingChild(RecordId),

    #[error("Missing reference: parent {parent} of record {child} is not in the collection")]
    DanglingParent { parent: RecordId, child: RecordId },
}

/// Dataset loading errors
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("Failed to read dataset {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Malformed dataset JSON: {0}")]
    Malformed(#[from] serde_json::Error),

    #[error("Dataset must be a JSON array of records, found {0}")]
    NotAnArray(&'static str),

    #[error("Invalid record at index {index}: {source}")]
    InvalidRecord {
        index: usize,
        #[source]
        source: serde_json::Error,
    },
}

/// Top-level errors surfaced by the CLI, configuration and logging layers
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Store error: {0}")]
    StoreError(#[from] StoreError),

    #[error("Load error: {0}")]
    LoadError(#[from] LoadError),

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Output error: {0}")]
    OutputError(String),

    #[error("No dataset configured. Pass --data <FILE> or set `dataset` in config/config.toml.")]
    MissingDataset,
}

impl From<config::ConfigError> for ApiError {
    fn from(err: config::ConfigError) -> Self {
        ApiError::ConfigError(err.to_string())
    }
}
