//! Ancestor walker for following parent links up to the root sentinel

use crate::error::StoreError;
use crate::store::{Parent, Record};
use crate::types::RecordId;
use std::collections::HashMap;
use tracing::trace;

/// Walks parent links of a borrowed record slice.
///
/// Each id's parent pointer is expanded at most once per walk: entries are
/// removed from `pending` as they are consumed, so the walk terminates on
/// any input, cyclic or not.
pub struct ParentWalker<'a> {
    records: &'a [Record],
    pending: HashMap<RecordId, Vec<Parent>>,
}

impl<'a> ParentWalker<'a> {
    /// Snapshot the parent pointers of `records`. A later duplicate id
    /// overwrites an earlier one.
    pub fn new(records: &'a [Record]) -> Self {
        let pending = records
            .iter()
            .map(|record| (record.id, vec![record.parent]))
            .collect();
        Self { records, pending }
    }

    /// Collect the ancestors of `child_id`, nearest first.
    ///
    /// The work list is a stack (LIFO); order is depth-first.
    pub fn walk(mut self, child_id: RecordId) -> Result<Vec<&'a Record>, StoreError> {
        let mut stack = self
            .pending
            .get(&child_id)
            .cloned()
            .ok_or(StoreError::MissingChild(child_id))?;
        let mut ancestors = Vec::new();

        while let Some(pid) = stack.pop() {
            let Parent::Id(id) = pid else {
                continue;
            };
            if let Some(next) = self.pending.remove(&id) {
                stack.extend(next);
            }
            let record = self
                .records
                .iter()
                .find(|record| record.id == id)
                .ok_or(StoreError::DanglingParent {
                    parent: id,
                    child: child_id,
                })?;
            trace!(child_id, ancestor_id = id, "Ancestor resolved");
            ancestors.push(record);
        }

        Ok(ancestors)
    }
}
