use std::hash::Hash;

/// Identifies a game position for caching. The key must distinguish any
/// two positions that can score differently, so equal keys always mean
/// equal search results.
pub trait TranspositionKey {
    type Key: Hash + Eq + Clone;

    fn transposition_key(&self) -> Self::Key;
}
