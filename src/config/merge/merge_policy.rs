//! Merge rules: defaults, override order, conflict handling.

use config::Config;
use config::ConfigBuilder;
use config::ConfigError;

/// Create a Config builder with merge policy defaults applied.
pub fn builder_with_defaults() -> Result<ConfigBuilder<config::builder::DefaultState>, ConfigError>
{
    Config::builder()
        .set_default("output.format", "text")?
        .set_default("output.root_label", crate::types::ROOT_SENTINEL)?
        .set_default("output.pretty", true)?
        .set_default("logging.enabled", true)?
        .set_default("logging.level", "warn")
}
