//! Record Store
//!
//! Read-only query index over a caller-supplied slice of parent-linked
//! records. Nothing is copied or re-indexed at construction; every query scans
//! the slice or builds its own scratch structures.

pub mod loader;
pub mod record;
pub mod stats;

pub use record::{Parent, Record, RecordFields};
pub use stats::CollectionStats;

use crate::error::StoreError;
use crate::tree::ParentWalker;
use crate::types::RecordId;
use tracing::debug;

/// Query index over a borrowed record collection
#[derive(Debug, Clone, Copy)]
pub struct TreeStore<'a> {
    records: &'a [Record],
}

impl<'a> TreeStore<'a> {
    pub fn new(records: &'a [Record]) -> Self {
        Self { records }
    }

    /// The original collection, in input order.
    pub fn get_all(&self) -> &'a [Record] {
        self.records
    }

    /// First record with the given id, if any.
    pub fn get_item(&self, item_id: RecordId) -> Option<&'a Record> {
        self.records.iter().find(|record| record.id == item_id)
    }

    /// Direct children of `parent_id`, in input order.
    pub fn get_children(&self, parent_id: RecordId) -> Vec<&'a Record> {
        let children: Vec<&'a Record> = self
            .records
            .iter()
            .filter(|record| record.parent == Parent::Id(parent_id))
            .collect();
        debug!(parent_id, count = children.len(), "Children resolved");
        children
    }

    /// Ancestor chain of `child_id`, nearest first, root sentinel excluded.
    ///
    /// Fails with [`StoreError::MissingChild`] when `child_id` is absent and
    /// with [`StoreError::DanglingParent`] when a parent id on the way up has
    /// no record.
    pub fn get_all_parents(&self, child_id: RecordId) -> Result<Vec<&'a Record>, StoreError> {
        let ancestors = ParentWalker::new(self.records).walk(child_id)?;
        debug!(child_id, depth = ancestors.len(), "Ancestors resolved");
        Ok(ancestors)
    }

    /// Records parented by the root sentinel.
    pub fn roots(&self) -> Vec<&'a Record> {
        self.records
            .iter()
            .filter(|record| record.parent.is_root())
            .collect()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl<'a> From<&'a [Record]> for TreeStore<'a> {
    fn from(records: &'a [Record]) -> Self {
        Self::new(records)
    }
}

impl<'a> From<&'a Vec<Record>> for TreeStore<'a> {
    fn from(records: &'a Vec<Record>) -> Self {
        Self::new(records)
    }
}
