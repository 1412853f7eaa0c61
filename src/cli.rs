//! CLI domain: parse, route, help, output, and presentation only.
//! No domain logic; a single route table dispatches to the store.

mod help;
mod output;
mod parse;
mod presentation;
mod route;

pub use help::{command_name, needs_dataset};
pub use output::map_error;
pub use parse::{Cli, Commands};
pub use presentation::{
    format_item_json, format_item_text, format_records_json, format_records_text,
    format_stats_json, format_stats_text,
};
pub use route::RunContext;
