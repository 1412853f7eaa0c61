//! Configuration System
//!
//! Layered configuration for the treestore CLI: merge-policy defaults, the
//! global user file, workspace files and `TREESTORE__*` environment overrides.
//! Tests included.

use crate::logging::LoggingConfig;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

mod facade;
mod merge;
mod sources;

pub use facade::ConfigLoader;

/// Supported output formats
pub const OUTPUT_FORMATS: [&str; 2] = ["text", "json"];

/// Root configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TreeStoreConfig {
    /// Dataset file; relative paths resolve against the workspace root
    #[serde(default)]
    pub dataset: Option<PathBuf>,

    /// Query output settings
    #[serde(default)]
    pub output: OutputConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Query output configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Output format: text, json
    #[serde(default = "default_output_format")]
    pub format: String,

    /// Label shown for root-parented records in text output
    #[serde(default = "default_root_label")]
    pub root_label: String,

    /// Pretty-print JSON output
    #[serde(default = "default_true")]
    pub pretty: bool,
}

fn default_output_format() -> String {
    "text".to_string()
}

fn default_root_label() -> String {
    crate::types::ROOT_SENTINEL.to_string()
}

fn default_true() -> bool {
    true
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: default_output_format(),
            root_label: default_root_label(),
            pretty: default_true(),
        }
    }
}

/// Configuration validation errors
#[derive(Debug, Clone)]
pub enum ValidationError {
    Output(String),
    Logging(String),
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ValidationError::Output(msg) => write!(f, "Output: {}", msg),
            ValidationError::Logging(msg) => write!(f, "Logging: {}", msg),
        }
    }
}

impl std::error::Error for ValidationError {}

impl OutputConfig {
    pub fn validate(&self) -> Result<(), String> {
        if !OUTPUT_FORMATS.contains(&self.format.as_str()) {
            return Err(format!(
                "Invalid output format: {} (must be 'text' or 'json')",
                self.format
            ));
        }
        if self.root_label.trim().is_empty() {
            return Err("Root label cannot be empty".to_string());
        }
        Ok(())
    }
}

impl TreeStoreConfig {
    /// Validate the entire configuration
    pub fn validate(&self) -> Result<(), Vec<ValidationError>> {
        let mut errors = Vec::new();

        if let Err(e) = self.output.validate() {
            errors.push(ValidationError::Output(e));
        }
        if let Err(e) = self.logging.validate() {
            errors.push(ValidationError::Logging(e));
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }

    /// Dataset path resolved against `workspace_root`, if one is configured.
    pub fn resolve_dataset(&self, workspace_root: &Path) -> Option<PathBuf> {
        self.dataset.as_ref().map(|path| {
            if path.is_absolute() {
                path.clone()
            } else {
                workspace_root.join(path)
            }
        })
    }
}
