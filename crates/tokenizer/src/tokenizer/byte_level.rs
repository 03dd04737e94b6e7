//! Byte-level BPE tokenizer.
//!
//! The minimal member of the tokenizer family: text is mapped straight to
//! its UTF-8 bytes with no pre-tokenization split, and merges are learned
//! and applied over the resulting id sequence.

use super::{Tokenizer, TokenizerState};
use bytepair_core::{
    count_pairs, merge, MergeRules, Pair, Result, SpecialTokens, TokenizerError,
};

/// Byte-level BPE tokenizer.
pub struct ByteLevelTokenizer {
    state: TokenizerState,
}

impl ByteLevelTokenizer {
    /// Create a new tokenizer with no merges and no special tokens.
    pub fn new() -> Self {
        Self {
            state: TokenizerState::new(),
        }
    }

    /// Create a new tokenizer with the given special tokens.
    ///
    /// Special token ids must not collide with ids that training will
    /// assign (256 upward); conventionally they sit above the target
    /// vocabulary size.
    pub fn with_special_tokens(specials: SpecialTokens) -> Result<Self> {
        let mut state = TokenizerState::new();
        state.set_special_tokens(specials)?;
        Ok(Self { state })
    }

    /// Access the tokenizer state (merges, specials, vocabulary).
    pub fn state(&self) -> &TokenizerState {
        &self.state
    }

    /// Select the most frequent pair, breaking count ties by
    /// lexicographically smallest pair so training is reproducible.
    fn most_frequent_pair(ids: &[u32]) -> Option<(Pair, u64)> {
        let counts = count_pairs(ids);
        counts
            .iter()
            .max_by(|a, b| a.1.cmp(b.1).then_with(|| b.0.cmp(a.0)))
            .map(|(&pair, &count)| (pair, count))
    }
}

impl Default for ByteLevelTokenizer {
    fn default() -> Self {
        Self::new()
    }
}

impl Tokenizer for ByteLevelTokenizer {
    fn train(&mut self, text: &str, vocab_size: usize, verbose: bool) -> Result<()> {
        let reserved = 256 + self.state.special_tokens().len();
        if vocab_size < reserved {
            return Err(TokenizerError::Training(format!(
                "vocab_size {} is below the {} ids reserved for bytes and special tokens",
                vocab_size, reserved
            )));
        }
        let target_merges = vocab_size - reserved;

        let mut ids: Vec<u32> = text.bytes().map(u32::from).collect();
        let mut merges = MergeRules::with_capacity(target_merges);

        for k in 0..target_merges {
            // Stops early when no pairs remain to merge.
            let Some((pair, count)) = Self::most_frequent_pair(&ids) else {
                tracing::debug!(
                    learned = k,
                    requested = target_merges,
                    "ran out of pairs before reaching target vocab size"
                );
                break;
            };

            let new_id = 256 + k as u32;
            ids = merge(&ids, pair, new_id);
            merges.push(pair, new_id);

            if verbose {
                tracing::info!(rank = k, ?pair, count, new_id, "learned merge");
            }
        }

        self.state.set_merges(merges)
    }

    fn encode(&self, text: &str) -> Result<Vec<u32>> {
        let mut ids: Vec<u32> = text.bytes().map(u32::from).collect();

        // Apply stored rules in training order: of all pairs currently
        // present, always collapse the one with the lowest rank.
        while ids.len() >= 2 {
            let mut best: Option<(u32, Pair, u32)> = None;
            for window in ids.windows(2) {
                let pair = (window[0], window[1]);
                if let Some((rank, new_id)) = self.state.merges().get(pair) {
                    if best.map_or(true, |(best_rank, _, _)| rank < best_rank) {
                        best = Some((rank, pair, new_id));
                    }
                }
            }

            let Some((_, pair, new_id)) = best else {
                break;
            };
            ids = merge(&ids, pair, new_id);
        }

        Ok(ids)
    }

    fn decode(&self, ids: &[u32]) -> Result<String> {
        let mut bytes = Vec::with_capacity(ids.len());
        for &id in ids {
            let token = self
                .state
                .vocab()
                .get(&id)
                .ok_or(TokenizerError::UnknownTokenId(id))?;
            bytes.extend_from_slice(token);
        }

        String::from_utf8(bytes).map_err(|e| TokenizerError::InvalidUtf8 {
            valid_up_to: e.utf8_error().valid_up_to(),
            source: e.utf8_error(),
        })
    }
}
