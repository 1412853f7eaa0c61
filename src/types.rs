//! Shared identifier types.

/// Record identifier. Unique across a collection by caller contract.
pub type RecordId = i64;

/// Wire value conventionally used for the root sentinel.
pub const ROOT_SENTINEL: &str = "root";
