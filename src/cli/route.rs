//! CLI route: single route table and run context. Dispatches to the store and presentation.

use crate::cli::help::{command_name, needs_dataset};
use crate::cli::parse::Commands;
use crate::cli::presentation::{
    format_item_json, format_item_text, format_records_json, format_records_text,
    format_stats_json, format_stats_text,
};
use crate::config::{ConfigLoader, TreeStoreConfig};
use crate::error::ApiError;
use crate::store::loader::load_records;
use crate::store::{CollectionStats, Record, TreeStore};
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Runtime context for CLI execution: workspace, effective config and dataset location.
/// Built from workspace path and optional config path using ConfigLoader only.
pub struct RunContext {
    workspace_root: PathBuf,
    config: TreeStoreConfig,
}

impl RunContext {
    /// Create run context from workspace root and optional config path.
    pub fn new(workspace_root: PathBuf, config_path: Option<PathBuf>) -> Result<Self, ApiError> {
        let config = if let Some(ref cfg_path) = config_path {
            ConfigLoader::load_from_file(cfg_path)?
        } else {
            ConfigLoader::load(&workspace_root)?
        };
        Ok(Self::with_config(workspace_root, config))
    }

    pub fn with_config(workspace_root: PathBuf, config: TreeStoreConfig) -> Self {
        Self {
            workspace_root,
            config,
        }
    }

    /// Override the dataset path. Relative paths resolve against the process cwd.
    pub fn with_dataset(mut self, dataset: Option<PathBuf>) -> Self {
        if let Some(path) = dataset {
            let resolved = std::env::current_dir()
                .map(|cwd| cwd.join(&path))
                .unwrap_or(path);
            self.config.dataset = Some(resolved);
        }
        self
    }

    /// Override the output format.
    pub fn with_format(mut self, format: Option<String>) -> Self {
        if let Some(format) = format {
            self.config.output.format = format;
        }
        self
    }

    pub fn config(&self) -> &TreeStoreConfig {
        &self.config
    }

    pub fn workspace_root(&self) -> &Path {
        &self.workspace_root
    }

    /// Execute a command and return its rendered output.
    pub fn execute(&self, command: &Commands) -> Result<String, ApiError> {
        let name = command_name(command);
        debug!(command = name, "Executing command");

        // Overrides land after construction, so validate the effective config here.
        self.config.validate().map_err(|errors| {
            let error_msgs: Vec<String> = errors.iter().map(|e| e.to_string()).collect();
            ApiError::ConfigError(format!(
                "Configuration validation failed:\n{}",
                error_msgs.join("\n")
            ))
        })?;

        if !needs_dataset(command) {
            return self.render_config();
        }

        let records = self.load_dataset()?;
        let store = TreeStore::new(&records);
        let output = self.dispatch(&store, command)?;
        info!(command = name, records = store.len(), "Command completed");
        Ok(output)
    }

    fn load_dataset(&self) -> Result<Vec<Record>, ApiError> {
        let path = self
            .config
            .resolve_dataset(&self.workspace_root)
            .ok_or(ApiError::MissingDataset)?;
        Ok(load_records(path)?)
    }

    fn dispatch(&self, store: &TreeStore<'_>, command: &Commands) -> Result<String, ApiError> {
        let output = &self.config.output;
        let json = output.format == "json";
        let root_label = output.root_label.as_str();

        match command {
            Commands::All => {
                let records: Vec<&Record> = store.get_all().iter().collect();
                if json {
                    format_records_json(&records, output.pretty)
                } else {
                    Ok(format_records_text(&records, root_label, "No records."))
                }
            }
            Commands::Item { id } => {
                let item = store.get_item(*id);
                if json {
                    format_item_json(item, output.pretty)
                } else {
                    Ok(format_item_text(item, *id, root_label))
                }
            }
            Commands::Children { parent_id } => {
                let children = store.get_children(*parent_id);
                if json {
                    format_records_json(&children, output.pretty)
                } else {
                    let empty = format!("Record {} has no children.", parent_id);
                    Ok(format_records_text(&children, root_label, &empty))
                }
            }
            Commands::Parents { child_id } => {
                let parents = store.get_all_parents(*child_id)?;
                if json {
                    format_records_json(&parents, output.pretty)
                } else {
                    let empty = format!("Record {} has no ancestors.", child_id);
                    Ok(format_records_text(&parents, root_label, &empty))
                }
            }
            Commands::Stats => {
                let stats = CollectionStats::collect(store)?;
                if json {
                    format_stats_json(&stats, output.pretty)
                } else {
                    Ok(format_stats_text(&stats))
                }
            }
            Commands::Config => self.render_config(),
        }
    }

    fn render_config(&self) -> Result<String, ApiError> {
        toml::to_string_pretty(&self.config).map_err(|e| ApiError::OutputError(e.to_string()))
    }
}
