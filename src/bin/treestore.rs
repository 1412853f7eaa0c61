//! Treestore CLI Binary
//!
//! Command-line interface for querying parent-linked record collections.

use clap::Parser;
use std::process;
use tracing::{error, info};
use treestore::cli::{Cli, RunContext};
use treestore::config::ConfigLoader;
use treestore::logging::{init_logging, LoggingConfig};

fn main() {
    let cli = Cli::parse();

    // Build logging config from CLI args, env vars, and config file
    let logging_config = build_logging_config(&cli);

    if let Err(e) = logging_config.validate() {
        eprintln!("Invalid logging configuration: {}", e);
        process::exit(1);
    }

    // Initialize logging early
    if let Err(e) = init_logging(Some(&logging_config)) {
        eprintln!("Failed to initialize logging: {}", e);
        process::exit(1);
    }

    info!("Treestore CLI starting");

    let context = match RunContext::new(cli.workspace.clone(), cli.config.clone()) {
        Ok(ctx) => ctx
            .with_dataset(cli.data.clone())
            .with_format(cli.format.clone()),
        Err(e) => {
            error!("Error loading configuration: {}", e);
            eprintln!("{}", treestore::cli::map_error(&e));
            process::exit(1);
        }
    };

    match context.execute(&cli.command) {
        Ok(output) => {
            info!("Command completed successfully");
            println!("{}", output);
        }
        Err(e) => {
            error!("Command failed: {}", e);
            eprintln!("{}", treestore::cli::map_error(&e));
            process::exit(1);
        }
    }
}

/// Build logging configuration from CLI args, environment, and config file.
/// Logging stays off unless --verbose is given; explicit flags then override the config file.
fn build_logging_config(cli: &Cli) -> LoggingConfig {
    if !cli.verbose {
        return LoggingConfig {
            enabled: false,
            ..LoggingConfig::default()
        };
    }

    let loaded = if let Some(ref config_path) = cli.config {
        ConfigLoader::load_from_file(config_path)
    } else {
        ConfigLoader::load(&cli.workspace)
    };
    // Logging is not up yet; report on stderr and fall back to defaults.
    let mut config = match loaded {
        Ok(c) => c.logging,
        Err(e) => {
            eprintln!(
                "Failed to load configuration for logging, using defaults: {}",
                e
            );
            LoggingConfig::default()
        }
    };

    config.enabled = true;
    config.level = "debug".to_string();
    if let Some(ref level) = cli.log_level {
        config.level = level.clone();
    }
    if let Some(ref format) = cli.log_format {
        config.format = format.clone();
    }
    if let Some(ref output) = cli.log_output {
        config.output = output.clone();
    }
    if let Some(ref file) = cli.log_file {
        config.file = Some(file.clone());
    }

    config
}
