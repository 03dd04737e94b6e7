//! Tokenizer state and the tokenizer capability trait.
//!
//! Different tokenizer variants (byte-level, regex-split, ...) share the
//! same concrete state — merge rules, special tokens, and the vocabulary
//! derived from them — and differ only in segmentation policy. The shared
//! state lives in [`TokenizerState`]; the variant-specific behavior is the
//! [`Tokenizer`] trait.

pub mod byte_level;

pub use byte_level::ByteLevelTokenizer;

use bytepair_core::{build_vocab, MergeRules, Result, SpecialTokens, Vocab};

/// Shared tokenizer state: merge rules, special tokens, derived vocabulary.
///
/// The vocabulary is a pure function of the other two fields and is rebuilt
/// through [`build_vocab`] on every mutation; it is never edited directly.
#[derive(Debug, Clone)]
pub struct TokenizerState {
    /// Learned merge rules, in training order
    merges: MergeRules,
    /// Special token mapping: string -> ID
    specials: SpecialTokens,
    /// Derived decoding table: ID -> byte string
    vocab: Vocab,
}

impl TokenizerState {
    /// Create empty state: no merges, no specials, byte-identity vocabulary.
    pub fn new() -> Self {
        let mut vocab = Vocab::with_capacity(256);
        for id in 0..=255u32 {
            vocab.insert(id, vec![id as u8]);
        }

        Self {
            merges: MergeRules::new(),
            specials: SpecialTokens::new(),
            vocab,
        }
    }

    /// Get the merge rules.
    #[inline]
    pub fn merges(&self) -> &MergeRules {
        &self.merges
    }

    /// Get the special token mapping.
    #[inline]
    pub fn special_tokens(&self) -> &SpecialTokens {
        &self.specials
    }

    /// Get the derived vocabulary.
    #[inline]
    pub fn vocab(&self) -> &Vocab {
        &self.vocab
    }

    /// Get the vocabulary size.
    #[inline]
    pub fn vocab_size(&self) -> usize {
        self.vocab.len()
    }

    /// Replace the merge rules and rebuild the vocabulary.
    ///
    /// Fails if the new rules are malformed or out of order; the state is
    /// left untouched on failure.
    pub fn set_merges(&mut self, merges: MergeRules) -> Result<()> {
        let vocab = build_vocab(&merges, &self.specials)?;
        self.merges = merges;
        self.vocab = vocab;
        Ok(())
    }

    /// Replace the special tokens and rebuild the vocabulary.
    pub fn set_special_tokens(&mut self, specials: SpecialTokens) -> Result<()> {
        let vocab = build_vocab(&self.merges, &specials)?;
        self.specials = specials;
        self.vocab = vocab;
        Ok(())
    }
}

impl Default for TokenizerState {
    fn default() -> Self {
        Self::new()
    }
}

/// Capability trait implemented by concrete tokenizer variants.
pub trait Tokenizer {
    /// Learn merge rules from `text` until the vocabulary reaches
    /// `vocab_size`. `verbose` enables per-merge progress events.
    fn train(&mut self, text: &str, vocab_size: usize, verbose: bool) -> Result<()>;

    /// Encode text into token IDs.
    fn encode(&self, text: &str) -> Result<Vec<u32>>;

    /// Decode token IDs back into text.
    fn decode(&self, ids: &[u32]) -> Result<String>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use bytepair_core::TokenizerError;

    #[test]
    fn test_new_state_is_byte_identity() {
        let state = TokenizerState::new();

        assert_eq!(state.vocab_size(), 256);
        assert!(state.merges().is_empty());
        assert!(state.special_tokens().is_empty());
        assert_eq!(state.vocab().get(&104), Some(&vec![104u8]));
    }

    #[test]
    fn test_set_merges_rebuilds_vocab() {
        let mut state = TokenizerState::new();
        state
            .set_merges(MergeRules::from(vec![((0, 1), 256), ((256, 2), 257)]))
            .unwrap();

        assert_eq!(state.vocab_size(), 258);
        assert_eq!(state.vocab().get(&257), Some(&vec![0u8, 1, 2]));
    }

    #[test]
    fn test_set_special_tokens_rebuilds_vocab() {
        let mut state = TokenizerState::new();
        let mut specials = SpecialTokens::new();
        specials.insert("<|endoftext|>".into(), 256);
        state.set_special_tokens(specials).unwrap();

        assert_eq!(state.vocab().get(&256), Some(&b"<|endoftext|>".to_vec()));
    }

    #[test]
    fn test_malformed_merges_leave_state_untouched() {
        let mut state = TokenizerState::new();
        let err = state
            .set_merges(MergeRules::from(vec![((300, 1), 301)]))
            .unwrap_err();

        assert!(matches!(err, TokenizerError::UndefinedTokenId { id: 300, .. }));
        assert!(state.merges().is_empty());
        assert_eq!(state.vocab_size(), 256);
    }
}
