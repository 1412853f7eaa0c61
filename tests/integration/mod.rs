//! Integration tests for the treestore query layer

mod cli_queries;
mod config_integration;
mod record_loading;
mod reference_dataset;
