//! Bytepair-core - Core BPE algorithm implementation
//!
//! This crate provides the fundamental primitives of byte-pair encoding,
//! independent of any segmentation policy or storage format:
//!
//! - pair counting over id sequences ([`count_pairs`])
//! - pair merging within id sequences ([`merge`])
//! - deterministic vocabulary derivation from an ordered merge rule list
//!   and a special-token mapping ([`build_vocab`])
//!
//! # Example
//!
//! ```rust
//! use bytepair_core::{count_pairs, merge};
//!
//! let ids = vec![5, 6, 3, 5, 6];
//! let counts = count_pairs(&ids);
//! assert_eq!(counts.get(&(5, 6)), Some(&2));
//!
//! let merged = merge(&ids, (5, 6), 256);
//! assert_eq!(merged, vec![256, 3, 256]);
//! ```

pub mod error;
pub use error::{Result, TokenizerError};

// Core BPE algorithm modules
pub mod core;
pub use core::{
    build_vocab, count_pairs, count_pairs_batched, count_pairs_into, merge, MergeMap, MergeRules,
    Pair, PairCounts, SpecialTokens, Vocab,
};
