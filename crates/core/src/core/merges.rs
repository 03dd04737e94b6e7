//! Merge rule management for BPE.
//!
//! Merge rules are stored as an ordered list because their order encodes
//! training priority: the k-th rule was learned k-th and must be applied
//! (and used for vocabulary derivation) in exactly that order. A hash index
//! over the same rules provides O(1) rank lookups during encoding.

use ahash::AHashMap;
use serde::{Deserialize, Serialize};

/// A pair of token IDs that can be merged. Order-sensitive: `(a, b) != (b, a)`.
pub type Pair = (u32, u32);

/// Merge rule index: pair -> (rank, new_token_id).
///
/// The rank indicates the priority of this merge rule (lower rank = learned
/// earlier = higher priority). The new_token_id is the ID of the token
/// created by merging this pair.
pub type MergeMap = AHashMap<Pair, (u32, u32)>;

/// Ordered collection of BPE merge rules with efficient rank lookup.
///
/// Serializes as the bare ordered rule list so external persistence can
/// round-trip merges without losing the order they were learned in.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(from = "Vec<(Pair, u32)>", into = "Vec<(Pair, u32)>")]
pub struct MergeRules {
    /// Rules in training order: rules[rank] = (pair, new_token_id)
    rules: Vec<(Pair, u32)>,
    /// Lookup index: pair -> (rank, new_token_id)
    by_pair: MergeMap,
}

impl MergeRules {
    /// Create a new empty collection of merge rules.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a new collection with capacity.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            rules: Vec::with_capacity(capacity),
            by_pair: MergeMap::with_capacity(capacity),
        }
    }

    /// Append a merge rule, assigning it the next rank.
    ///
    /// Returns the rank the rule was stored under.
    pub fn push(&mut self, pair: Pair, new_token_id: u32) -> u32 {
        let rank = self.rules.len() as u32;
        self.rules.push((pair, new_token_id));
        self.by_pair.insert(pair, (rank, new_token_id));
        rank
    }

    /// Get the merge rule for a pair.
    ///
    /// Returns Some((rank, new_token_id)) if this pair has a learned merge,
    /// None otherwise.
    #[inline]
    pub fn get(&self, pair: Pair) -> Option<(u32, u32)> {
        self.by_pair.get(&pair).copied()
    }

    /// Get the rank of a pair's merge rule, if any.
    #[inline]
    pub fn rank(&self, pair: Pair) -> Option<u32> {
        self.by_pair.get(&pair).map(|&(rank, _)| rank)
    }

    /// Iterate rules in training order as (pair, new_token_id).
    pub fn iter(&self) -> impl Iterator<Item = &(Pair, u32)> {
        self.rules.iter()
    }

    /// Get the number of merge rules.
    #[inline]
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// Check if there are no merge rules.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

impl From<Vec<(Pair, u32)>> for MergeRules {
    fn from(rules: Vec<(Pair, u32)>) -> Self {
        let by_pair = rules
            .iter()
            .enumerate()
            .map(|(rank, &(pair, id))| (pair, (rank as u32, id)))
            .collect();
        Self { rules, by_pair }
    }
}

impl From<MergeRules> for Vec<(Pair, u32)> {
    fn from(rules: MergeRules) -> Self {
        rules.rules
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_and_get() {
        let mut rules = MergeRules::new();
        rules.push((0, 1), 256);
        rules.push((1, 2), 257);

        assert_eq!(rules.get((0, 1)), Some((0, 256)));
        assert_eq!(rules.get((1, 2)), Some((1, 257)));
        assert_eq!(rules.get((2, 3)), None);
        assert_eq!(rules.rank((1, 2)), Some(1));
        assert_eq!(rules.len(), 2);
    }

    #[test]
    fn test_iteration_preserves_training_order() {
        let mut rules = MergeRules::new();
        rules.push((9, 9), 256);
        rules.push((0, 1), 257);
        rules.push((256, 2), 258);

        let collected: Vec<_> = rules.iter().copied().collect();
        assert_eq!(collected, vec![((9, 9), 256), ((0, 1), 257), ((256, 2), 258)]);
    }

    #[test]
    fn test_from_vec_assigns_ranks_in_order() {
        let rules = MergeRules::from(vec![((0, 1), 256), ((256, 2), 257)]);

        assert_eq!(rules.get((0, 1)), Some((0, 256)));
        assert_eq!(rules.get((256, 2)), Some((1, 257)));
    }

    #[test]
    fn test_serde_roundtrip_keeps_order() {
        let mut rules = MergeRules::new();
        rules.push((5, 6), 256);
        rules.push((256, 3), 257);
        rules.push((0, 0), 258);

        let json = serde_json::to_string(&rules).unwrap();
        let restored: MergeRules = serde_json::from_str(&json).unwrap();

        let before: Vec<_> = rules.iter().copied().collect();
        let after: Vec<_> = restored.iter().copied().collect();
        assert_eq!(before, after);
        assert_eq!(restored.get((256, 3)), Some((1, 257)));
    }
}
