//! Error types for the BPE tokenizer library.

use std::str::Utf8Error;
use thiserror::Error;

/// Main error type for the tokenizer library.
#[derive(Error, Debug)]
pub enum TokenizerError {
    /// Error during training
    #[error("Training error: {0}")]
    Training(String),

    /// A merge rule referenced an id that was not yet defined in the
    /// vocabulary. Indicates a malformed or out-of-order merge list.
    #[error("Merge rule {rank} references undefined token id {id}")]
    UndefinedTokenId { id: u32, rank: u32 },

    /// Unknown token ID during decoding
    #[error("Unknown token ID: {0}")]
    UnknownTokenId(u32),

    /// Decoded token bytes did not form valid UTF-8
    #[error("Invalid UTF-8 in decoded bytes after offset {valid_up_to}: {source}")]
    InvalidUtf8 {
        valid_up_to: usize,
        #[source]
        source: Utf8Error,
    },
}

/// Result type alias for tokenizer operations.
pub type Result<T> = std::result::Result<T, TokenizerError>;
