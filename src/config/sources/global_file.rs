//! Global config file source: $XDG_CONFIG_HOME/treestore/config.toml

use config::builder::DefaultState;
use config::ConfigBuilder;
use config::File;
use directories::ProjectDirs;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Path to global config file.
pub fn global_config_path() -> Option<PathBuf> {
    ProjectDirs::from("", "", "treestore").map(|dirs| dirs.config_dir().join("config.toml"))
}

/// Add global config file source to builder if it exists.
pub fn add_to_builder(
    builder: ConfigBuilder<DefaultState>,
    config_path: &Path,
) -> ConfigBuilder<DefaultState> {
    if config_path.exists() {
        builder.add_source(File::from(config_path).required(false))
    } else {
        debug!(
            config_path = %config_path.display(),
            "Global configuration file not found, skipping"
        );
        builder
    }
}
