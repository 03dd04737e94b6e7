//! Bytepair-tokenizer - Tokenizer API over the BPE core primitives
//!
//! This crate composes the primitives from `bytepair-core` into tokenizer
//! state (merge rules, special tokens, derived vocabulary) and a capability
//! trait for concrete variants. One variant ships here: a byte-level
//! tokenizer that works directly on UTF-8 bytes with no pre-tokenization.
//!
//! # Example
//!
//! ```rust
//! use bytepair_tokenizer::{ByteLevelTokenizer, Tokenizer};
//!
//! let mut tokenizer = ByteLevelTokenizer::new();
//! tokenizer.train("low lower lowest", 270, false)?;
//!
//! let ids = tokenizer.encode("lower")?;
//! assert_eq!(tokenizer.decode(&ids)?, "lower");
//! # Ok::<(), bytepair_tokenizer::TokenizerError>(())
//! ```

// Re-export core types
pub use bytepair_core::{MergeRules, Result, SpecialTokens, TokenizerError, Vocab};

// Tokenizer API
pub mod tokenizer;
pub use tokenizer::{ByteLevelTokenizer, Tokenizer, TokenizerState};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
