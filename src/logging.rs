//! Logging System
//!
//! Structured logging implementation using the `tracing` crate. Provides configurable
//! log levels, output formats, and destinations.

use crate::error::ApiError;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::Arc;
use tracing_subscriber::fmt::time::ChronoUtc;
use tracing_subscriber::fmt::writer::BoxMakeWriter;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Registry};

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Install a subscriber at all
    #[serde(default = "default_true")]
    pub enabled: bool,

    /// Log level: trace, debug, info, warn, error, off
    #[serde(default = "default_log_level")]
    pub level: String,

    /// Output format: json, text (default: text)
    #[serde(default = "default_format")]
    pub format: String,

    /// Output destination: stdout, stderr, file
    #[serde(default = "default_output")]
    pub output: String,

    /// Log file path (if output is "file"); defaults to the platform state directory
    #[serde(default)]
    pub file: Option<PathBuf>,

    /// Enable colored output (text format only, stdout/stderr only)
    #[serde(default = "default_true")]
    pub color: bool,

    /// Module-specific log levels
    #[serde(default)]
    pub modules: HashMap<String, String>,
}

const LOG_LEVELS: [&str; 6] = ["trace", "debug", "info", "warn", "error", "off"];

fn default_log_level() -> String {
    "warn".to_string()
}

fn default_format() -> String {
    "text".to_string()
}

fn default_output() -> String {
    "stderr".to_string()
}

fn default_true() -> bool {
    true
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            enabled: default_true(),
            level: default_log_level(),
            format: default_format(),
            output: default_output(),
            file: None,
            color: default_true(),
            modules: HashMap::new(),
        }
    }
}

impl LoggingConfig {
    pub fn validate(&self) -> Result<(), String> {
        if !LOG_LEVELS.contains(&self.level.as_str()) {
            return Err(format!("Invalid log level: {}", self.level));
        }
        if self.format != "json" && self.format != "text" {
            return Err(format!(
                "Invalid log format: {} (must be 'json' or 'text')",
                self.format
            ));
        }
        parse_output_destination(&self.output)?;
        Ok(())
    }
}

/// Default log file: `<state dir>/treestore.log`, falling back to the local data dir.
pub fn default_log_file_path() -> Option<PathBuf> {
    ProjectDirs::from("", "", "treestore").map(|dirs| {
        dirs.state_dir()
            .unwrap_or_else(|| dirs.data_local_dir())
            .join("treestore.log")
    })
}

/// Initialize the logging system
///
/// Priority order (highest to lowest):
/// 1. Environment variables (TREESTORE_LOG, TREESTORE_LOG_FORMAT, TREESTORE_LOG_OUTPUT)
/// 2. The given config (CLI flags are folded in by the binary)
/// 3. Defaults
pub fn init_logging(config: Option<&LoggingConfig>) -> Result<(), ApiError> {
    if !config.map(|c| c.enabled).unwrap_or(true) {
        return Ok(());
    }

    let filter = build_env_filter(config)?;
    let format = determine_format(config)?;
    let output = determine_output(config)?;
    let use_color = config.map(|c| c.color).unwrap_or(true) && output != OutputDestination::File;

    let writer = match output {
        OutputDestination::Stdout => BoxMakeWriter::new(std::io::stdout),
        OutputDestination::Stderr => BoxMakeWriter::new(std::io::stderr),
        OutputDestination::File => {
            let log_file = config
                .and_then(|c| c.file.clone())
                .or_else(default_log_file_path)
                .ok_or_else(|| {
                    ApiError::ConfigError("No log file path could be determined".to_string())
                })?;
            BoxMakeWriter::new(Arc::new(open_log_file(&log_file)?))
        }
    };

    let base_subscriber = Registry::default().with(filter);
    let result = if format == "json" {
        base_subscriber
            .with(
                fmt::layer()
                    .json()
                    .with_target(true)
                    .with_timer(ChronoUtc::rfc_3339())
                    .with_writer(writer),
            )
            .try_init()
    } else {
        base_subscriber
            .with(
                fmt::layer()
                    .with_target(true)
                    .with_timer(ChronoUtc::rfc_3339())
                    .with_ansi(use_color)
                    .with_writer(writer),
            )
            .try_init()
    };

    result.map_err(|e| ApiError::ConfigError(format!("Failed to initialize logging: {}", e)))
}

fn open_log_file(log_file: &std::path::Path) -> Result<std::fs::File, ApiError> {
    if let Some(parent) = log_file.parent() {
        std::fs::create_dir_all(parent).map_err(|e| {
            ApiError::ConfigError(format!("Failed to create log directory: {}", e))
        })?;
    }
    std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(log_file)
        .map_err(|e| {
            ApiError::ConfigError(format!("Failed to open log file {:?}: {}", log_file, e))
        })
}

/// Build environment filter from config or environment variables
fn build_env_filter(config: Option<&LoggingConfig>) -> Result<EnvFilter, ApiError> {
    if let Ok(filter) = EnvFilter::try_from_env("TREESTORE_LOG") {
        return Ok(filter);
    }

    let level = config.map(|c| c.level.as_str()).unwrap_or("warn");
    if level == "off" {
        return Ok(EnvFilter::new("off"));
    }

    let mut filter = EnvFilter::new(level);

    if let Some(config) = config {
        for (module, module_level) in &config.modules {
            let directive = format!("{}={}", module, module_level);
            filter = filter.add_directive(
                directive
                    .parse()
                    .map_err(|e| ApiError::ConfigError(format!("Invalid log directive: {}", e)))?,
            );
        }
    }

    if let Ok(modules_str) = std::env::var("TREESTORE_LOG_MODULES") {
        for module_spec in modules_str.split(',') {
            let parts: Vec<&str> = module_spec.split('=').collect();
            if parts.len() == 2 {
                let directive = format!("{}={}", parts[0].trim(), parts[1].trim());
                filter = filter.add_directive(directive.parse().map_err(|e| {
                    ApiError::ConfigError(format!("Invalid log directive from env: {}", e))
                })?);
            }
        }
    }

    Ok(filter)
}

/// Determine output format from config or environment
fn determine_format(config: Option<&LoggingConfig>) -> Result<String, ApiError> {
    if let Ok(format) = std::env::var("TREESTORE_LOG_FORMAT") {
        if format == "json" || format == "text" {
            return Ok(format);
        }
    }

    let format = config.map(|c| c.format.as_str()).unwrap_or("text");

    if format != "json" && format != "text" {
        return Err(ApiError::ConfigError(format!(
            "Invalid log format: {} (must be 'json' or 'text')",
            format
        )));
    }

    Ok(format.to_string())
}

/// Output destination
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum OutputDestination {
    Stdout,
    Stderr,
    File,
}

/// Determine output destination from config or environment
fn determine_output(config: Option<&LoggingConfig>) -> Result<OutputDestination, ApiError> {
    if let Ok(output) = std::env::var("TREESTORE_LOG_OUTPUT") {
        return parse_output_destination(&output).map_err(ApiError::ConfigError);
    }

    let output = config.map(|c| c.output.as_str()).unwrap_or("stderr");
    parse_output_destination(output).map_err(ApiError::ConfigError)
}

fn parse_output_destination(output: &str) -> Result<OutputDestination, String> {
    match output {
        "stdout" => Ok(OutputDestination::Stdout),
        "stderr" => Ok(OutputDestination::Stderr),
        "file" => Ok(OutputDestination::File),
        _ => Err(format!(
            "Invalid log output: {} (must be 'stdout', 'stderr', or 'file')",
            output
        )),
    }
}
