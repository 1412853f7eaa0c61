//! Parent-Link Traversal
//!
//! Walks the forest that records encode implicitly through their `parent`
//! field.

pub mod walker;

pub use walker::ParentWalker;
