//! Config loader facade: assembles sources in precedence order.

use super::merge::merge_policy;
use super::sources::{global_file, workspace_file};
use super::TreeStoreConfig;
use config::{ConfigError, Environment, File};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Prefix for environment overrides, e.g. `TREESTORE__OUTPUT__FORMAT=json`.
pub const ENV_PREFIX: &str = "TREESTORE";

/// Loads [`TreeStoreConfig`] from layered sources
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration for a workspace.
    ///
    /// Precedence (lowest to highest): defaults, global user file,
    /// workspace `config/config.toml`, workspace `config/{TREESTORE_ENV}.toml`,
    /// `TREESTORE__*` environment variables.
    pub fn load(workspace_root: &Path) -> Result<TreeStoreConfig, ConfigError> {
        let global = Self::global_config_path();
        Self::load_layers(workspace_root, global.as_deref())
    }

    /// Load configuration with an explicit global file (or none).
    pub fn load_layers(
        workspace_root: &Path,
        global_config: Option<&Path>,
    ) -> Result<TreeStoreConfig, ConfigError> {
        let mut builder = merge_policy::builder_with_defaults()?;
        if let Some(path) = global_config {
            builder = global_file::add_to_builder(builder, path);
        }
        builder = workspace_file::add_to_builder(builder, workspace_root);
        builder = builder.add_source(Environment::with_prefix(ENV_PREFIX).separator("__"));

        let config: TreeStoreConfig = builder.build()?.try_deserialize()?;
        debug!(workspace = %workspace_root.display(), "Configuration loaded");
        Ok(config)
    }

    /// Load configuration from a single explicit file over the defaults.
    pub fn load_from_file(path: &Path) -> Result<TreeStoreConfig, ConfigError> {
        if !path.exists() {
            return Err(ConfigError::NotFound(path.display().to_string()));
        }
        merge_policy::builder_with_defaults()?
            .add_source(File::from(path).required(true))
            .build()?
            .try_deserialize()
    }

    /// Path of the global user config file, if a home directory is known.
    pub fn global_config_path() -> Option<PathBuf> {
        global_file::global_config_path()
    }
}
