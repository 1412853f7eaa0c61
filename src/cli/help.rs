//! CLI command-name contract for logging.

use crate::cli::parse::Commands;

/// Command name string for log events (e.g. "parents", "config").
pub fn command_name(command: &Commands) -> &'static str {
    match command {
        Commands::All => "all",
        Commands::Item { .. } => "item",
        Commands::Children { .. } => "children",
        Commands::Parents { .. } => "parents",
        Commands::Stats => "stats",
        Commands::Config => "config",
    }
}

/// Whether the command reads the dataset.
pub fn needs_dataset(command: &Commands) -> bool {
    !matches!(command, Commands::Config)
}
