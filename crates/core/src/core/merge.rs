//! Pair merging for BPE.
//!
//! Rewrites an id sequence by collapsing every occurrence of one specific
//! adjacent pair into a single new id.

use crate::core::merges::Pair;

/// Replace every non-overlapping occurrence of `pair` in `ids` with `new_id`.
///
/// Scans left to right: a match consumes both elements and scanning resumes
/// after them, so merging `(a, a)` over `[a, a, a]` yields `[new_id, a]`.
/// The input is never mutated; callers are responsible for picking a
/// `new_id` that does not already carry meaning in `ids`.
///
/// `merge(&[5, 6, 3, 5, 6], (5, 6), 4)` yields `[4, 3, 4]`.
pub fn merge(ids: &[u32], pair: Pair, new_id: u32) -> Vec<u32> {
    let mut merged = Vec::with_capacity(ids.len());
    let mut i = 0;

    while i < ids.len() {
        if i + 1 < ids.len() && ids[i] == pair.0 && ids[i + 1] == pair.1 {
            merged.push(new_id);
            i += 2;
        } else {
            merged.push(ids[i]);
            i += 1;
        }
    }

    merged
}
