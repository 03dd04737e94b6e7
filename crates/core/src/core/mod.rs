//! Core BPE algorithm implementation.
//!
//! This module contains the fundamental data structures and algorithms
//! for byte-pair encoding, independent of any segmentation policy.

pub mod merge;
pub mod merges;
pub mod stats;
pub mod vocab;

pub use merge::merge;
pub use merges::{MergeMap, MergeRules, Pair};
pub use stats::{count_pairs, count_pairs_batched, count_pairs_into, PairCounts};
pub use vocab::{build_vocab, SpecialTokens, Vocab};
