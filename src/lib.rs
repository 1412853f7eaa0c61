//! Treestore: Parent-Linked Record Queries
//!
//! A read-only query layer over a caller-supplied collection of records that
//! reference each other through a `parent` field. Answers lookups by id,
//! direct-children queries and full ancestor-chain walks.

pub mod cli;
pub mod config;
pub mod error;
pub mod logging;
pub mod store;
pub mod tree;
pub mod types;

pub use error::{ApiError, LoadError, StoreError};
pub use store::{Parent, Record, RecordFields, TreeStore};
pub use types::RecordId;
