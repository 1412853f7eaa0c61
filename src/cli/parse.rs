//! CLI parse: clap types for treestore. No behavior; definitions only.

use crate::types::RecordId;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Treestore CLI - query parent-linked record collections
#[derive(Parser)]
#[command(name = "treestore")]
#[command(about = "Query a collection of parent-linked records by id, children and ancestors")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Workspace root directory
    #[arg(long, default_value = ".")]
    pub workspace: PathBuf,

    /// Configuration file path (overrides default config loading)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Dataset file (JSON array of records); overrides `dataset` from config
    #[arg(long)]
    pub data: Option<PathBuf>,

    /// Output format (text, json); overrides `output.format` from config
    #[arg(long)]
    pub format: Option<String>,

    /// Enable verbose logging (default: off)
    #[arg(long, default_value = "false")]
    pub verbose: bool,

    /// Log level (trace, debug, info, warn, error, off)
    #[arg(long)]
    pub log_level: Option<String>,

    /// Log format (json, text)
    #[arg(long)]
    pub log_format: Option<String>,

    /// Log output (stdout, stderr, file)
    #[arg(long)]
    pub log_output: Option<String>,

    /// Log file path (if output is "file")
    #[arg(long)]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List every record in input order
    All,
    /// Show the first record with the given id
    Item {
        #[arg(allow_negative_numbers = true)]
        id: RecordId,
    },
    /// List direct children of a record
    Children {
        #[arg(allow_negative_numbers = true)]
        parent_id: RecordId,
    },
    /// List ancestors of a record, nearest first
    Parents {
        #[arg(allow_negative_numbers = true)]
        child_id: RecordId,
    },
    /// Summarize the collection (records, roots, deepest chain)
    Stats,
    /// Print the effective configuration as TOML
    Config,
}
