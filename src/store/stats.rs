//! Collection summary computed through the store's own queries.

use crate::error::StoreError;
use crate::store::TreeStore;
use crate::types::RecordId;
use serde::Serialize;

/// Summary of a record collection
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CollectionStats {
    pub records: usize,
    pub roots: usize,
    /// Length of the longest ancestor chain
    pub max_depth: usize,
    /// First record (in input order) whose chain reaches `max_depth`
    pub deepest: Option<RecordId>,
}

impl CollectionStats {
    /// Walk every record's ancestor chain. A dangling parent anywhere fails the whole summary.
    ///
    /// Each walk rebuilds its id map and scans the slice per ancestor, so the
    /// cost is O(n * (n + d * n)) for n records and chain depth d. Expect it to
    /// stall around 10^5 records.
    pub fn collect(store: &TreeStore<'_>) -> Result<Self, StoreError> {
        let mut max_depth = 0;
        let mut deepest = None;
        for record in store.get_all() {
            let depth = store.get_all_parents(record.id)?.len();
            if deepest.is_none() || depth > max_depth {
                max_depth = depth;
                deepest = Some(record.id);
            }
        }

        Ok(Self {
            records: store.len(),
            roots: store.roots().len(),
            max_depth,
            deepest,
        })
    }
}
