//! Pair counting for BPE.
//!
//! Counts frequencies of consecutive adjacent token id pairs, with support
//! for accumulating across many independent sequences and an optional
//! parallel path for large batches.

use crate::core::merges::Pair;
use ahash::AHashMap;
use rayon::prelude::*;

/// Pair -> frequency count.
pub type PairCounts = AHashMap<Pair, u64>;

/// Count consecutive adjacent pairs in `ids`.
///
/// `[5, 6, 3, 5, 6]` yields `{(5, 6): 2, (6, 3): 1, (3, 5): 1}`.
/// Sequences of length 0 or 1 yield an empty table.
pub fn count_pairs(ids: &[u32]) -> PairCounts {
    let mut counts = PairCounts::new();
    count_pairs_into(ids, &mut counts);
    counts
}

/// Count consecutive adjacent pairs in `ids`, accumulating into `counts`.
///
/// Allows batched counting over many independent chunks without
/// reallocating a table per chunk. Pairs never span chunk boundaries:
/// each call only sees adjacency within its own `ids`.
pub fn count_pairs_into(ids: &[u32], counts: &mut PairCounts) {
    for window in ids.windows(2) {
        let pair = (window[0], window[1]);
        *counts.entry(pair).or_insert(0) += 1;
    }
}

/// Count pairs across chunks in parallel, merging per-chunk tables.
///
/// Equivalent to calling [`count_pairs_into`] over every chunk with one
/// shared accumulator; pair counts are associative and commutative, so the
/// partial tables can be combined in any order.
pub fn count_pairs_batched(chunks: &[Vec<u32>]) -> PairCounts {
    chunks
        .par_iter()
        .map(|chunk| count_pairs(chunk))
        .reduce(PairCounts::new, |mut acc, counts| {
            for (pair, count) in counts {
                *acc.entry(pair).or_insert(0) += count;
            }
            acc
        })
}
