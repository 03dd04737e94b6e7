//! Vocabulary derivation.
//!
//! The vocabulary (id -> byte string) is never stored as independent state:
//! it is a pure function of the merge rule list and the special-token
//! mapping, and is rebuilt from them whenever either changes.

use crate::core::merges::MergeRules;
use crate::error::{Result, TokenizerError};
use ahash::AHashMap;
use compact_str::CompactString;

/// Decoding table: token ID -> byte string.
pub type Vocab = AHashMap<u32, Vec<u8>>;

/// Special token mapping: token string -> ID.
///
/// Special tokens are atomic; their ids live outside the byte/merge
/// hierarchy (e.g. `{"<|endoftext|>": 100257}`).
pub type SpecialTokens = AHashMap<CompactString, u32>;

/// Derive the full vocabulary from merge rules and special tokens.
///
/// Ids 0-255 map to their single-byte strings. Merge rules are applied
/// strictly in training order, each concatenating the byte strings of its
/// operands; a rule whose operand is not yet defined means the merge list
/// is malformed or out of order and fails with
/// [`TokenizerError::UndefinedTokenId`]. Special tokens are applied last
/// as the UTF-8 bytes of their string, last-write-wins on an id collision.
///
/// Pure and idempotent: the same inputs always produce the same mapping.
pub fn build_vocab(merges: &MergeRules, specials: &SpecialTokens) -> Result<Vocab> {
    let mut vocab = Vocab::with_capacity(256 + merges.len() + specials.len());

    for id in 0..=255u32 {
        vocab.insert(id, vec![id as u8]);
    }

    for (rank, &((p0, p1), idx)) in merges.iter().enumerate() {
        let rank = rank as u32;
        let left = vocab
            .get(&p0)
            .ok_or(TokenizerError::UndefinedTokenId { id: p0, rank })?;
        let right = vocab
            .get(&p1)
            .ok_or(TokenizerError::UndefinedTokenId { id: p1, rank })?;

        let mut bytes = Vec::with_capacity(left.len() + right.len());
        bytes.extend_from_slice(left);
        bytes.extend_from_slice(right);
        vocab.insert(idx, bytes);
    }

    for (special, &idx) in specials {
        vocab.insert(idx, special.as_bytes().to_vec());
    }

    Ok(vocab)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_vocab_is_byte_identity() {
        let vocab = build_vocab(&MergeRules::new(), &SpecialTokens::new()).unwrap();

        assert_eq!(vocab.len(), 256);
        for id in 0..=255u32 {
            assert_eq!(vocab.get(&id), Some(&vec![id as u8]));
        }
    }

    #[test]
    fn test_merges_concatenate_operands() {
        let merges = MergeRules::from(vec![((0, 1), 256), ((256, 2), 257)]);
        let vocab = build_vocab(&merges, &SpecialTokens::new()).unwrap();

        assert_eq!(vocab.get(&256), Some(&vec![0u8, 1]));
        assert_eq!(vocab.get(&257), Some(&vec![0u8, 1, 2]));
    }

    #[test]
    fn test_special_tokens_use_utf8_bytes() {
        let mut specials = SpecialTokens::new();
        specials.insert("<|endoftext|>".into(), 256);

        let vocab = build_vocab(&MergeRules::new(), &specials).unwrap();
        assert_eq!(vocab.get(&256), Some(&b"<|endoftext|>".to_vec()));
    }

    #[test]
    fn test_rebuild_is_idempotent() {
        let merges = MergeRules::from(vec![((104, 105), 256)]);
        let mut specials = SpecialTokens::new();
        specials.insert("<eos>".into(), 257);

        let first = build_vocab(&merges, &specials).unwrap();
        let second = build_vocab(&merges, &specials).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_undefined_operand_is_an_error() {
        let merges = MergeRules::from(vec![((300, 1), 301)]);

        let err = build_vocab(&merges, &SpecialTokens::new()).unwrap_err();
        match err {
            TokenizerError::UndefinedTokenId { id, rank } => {
                assert_eq!(id, 300);
                assert_eq!(rank, 0);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_out_of_order_merge_list_is_an_error() {
        // Rule 0 depends on id 257, which rule 1 would only define later.
        let merges = MergeRules::from(vec![((257, 0), 256), ((1, 2), 257)]);

        assert!(matches!(
            build_vocab(&merges, &SpecialTokens::new()),
            Err(TokenizerError::UndefinedTokenId { id: 257, rank: 0 })
        ));
    }
}
