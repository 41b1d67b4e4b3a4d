//! Surrogate key minting and link deduplication
//!
//! Every extractor turns natural values into dense integer ids the same way:
//! walk the source rows in order and hand out the next id the first time a value
//! is seen. Ids start at 1 and are only meaningful within one run.

use std::collections::HashMap;
use std::collections::HashSet;
use std::hash::Hash;

/// Surrogate id minted by the pipeline
pub type SurrogateId = i64;

/// Ordered natural-key → surrogate-id mapping, exposed as get-or-create
#[derive(Debug, Clone)]
pub struct SurrogateKeys<K> {
    ids: HashMap<K, SurrogateId>,
    order: Vec<K>,
}

impl<K: Eq + Hash + Clone> SurrogateKeys<K> {
    pub fn new() -> Self {
        SurrogateKeys {
            ids: HashMap::new(),
            order: Vec::new(),
        }
    }

    /// Return the id for `key`, minting the next one if the key is new
    pub fn get_or_create(&mut self, key: &K) -> SurrogateId {
        if let Some(id) = self.ids.get(key) {
            return *id;
        }
        self.order.push(key.clone());
        let id = self.order.len() as SurrogateId;
        self.ids.insert(key.clone(), id);
        id
    }

    /// Look up an already minted id without creating one
    pub fn get(&self, key: &K) -> Option<SurrogateId> {
        self.ids.get(key).copied()
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// `(id, key)` pairs in minting order
    pub fn iter(&self) -> impl Iterator<Item = (SurrogateId, &K)> {
        self.order
            .iter()
            .enumerate()
            .map(|(idx, key)| (idx as SurrogateId + 1, key))
    }

    /// Consume the mapping, yielding `(id, key)` pairs in minting order
    pub fn into_entries(self) -> impl Iterator<Item = (SurrogateId, K)> {
        self.order
            .into_iter()
            .enumerate()
            .map(|(idx, key)| (idx as SurrogateId + 1, key))
    }
}

impl<K: Eq + Hash + Clone> Default for SurrogateKeys<K> {
    fn default() -> Self {
        Self::new()
    }
}

/// Entities keyed by a source-provided identifier; the first value seen wins
#[derive(Debug, Clone)]
pub struct FirstSeen<K, V> {
    seen: HashSet<K>,
    entries: Vec<(K, V)>,
}

impl<K: Eq + Hash + Clone, V> FirstSeen<K, V> {
    pub fn new() -> Self {
        FirstSeen {
            seen: HashSet::new(),
            entries: Vec::new(),
        }
    }

    /// Record `value` under `key` unless the key is already known
    pub fn insert_with(&mut self, key: &K, value: impl FnOnce() -> V) {
        if self.seen.insert(key.clone()) {
            self.entries.push((key.clone(), value()));
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn into_entries(self) -> Vec<(K, V)> {
        self.entries
    }
}

impl<K: Eq + Hash + Clone, V> Default for FirstSeen<K, V> {
    fn default() -> Self {
        Self::new()
    }
}

/// Link table builder that keeps the first occurrence of each pair
#[derive(Debug, Clone)]
pub struct LinkSet<A, B> {
    seen: HashSet<(A, B)>,
    pairs: Vec<(A, B)>,
}

impl<A: Eq + Hash + Clone, B: Eq + Hash + Clone> LinkSet<A, B> {
    pub fn new() -> Self {
        LinkSet {
            seen: HashSet::new(),
            pairs: Vec::new(),
        }
    }

    /// Add a pair; returns false when it was already present
    pub fn insert(&mut self, left: A, right: B) -> bool {
        let pair = (left, right);
        if self.seen.contains(&pair) {
            return false;
        }
        self.seen.insert(pair.clone());
        self.pairs.push(pair);
        true
    }

    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    pub fn into_pairs(self) -> Vec<(A, B)> {
        self.pairs
    }
}

impl<A: Eq + Hash + Clone, B: Eq + Hash + Clone> Default for LinkSet<A, B> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mint_by_first_appearance() {
        let mut keys = SurrogateKeys::new();
        let ids: Vec<_> = ["Drama", "Comedy", "Drama", "Action", "Comedy"]
            .iter()
            .map(|g| keys.get_or_create(&g.to_string()))
            .collect();

        assert_eq!(ids, vec![1, 2, 1, 3, 2]);
        assert_eq!(keys.len(), 3);
        assert_eq!(keys.get(&"Action".to_string()), Some(3));
        assert_eq!(keys.get(&"Horror".to_string()), None);
    }

    #[test]
    fn test_ids_are_contiguous_from_one() {
        let mut keys = SurrogateKeys::new();
        for n in [5, 3, 5, 9, 1, 3, 7] {
            keys.get_or_create(&n);
        }
        let ids: Vec<_> = keys.iter().map(|(id, _)| id).collect();
        assert_eq!(ids, (1..=5).collect::<Vec<_>>());

        let keys: Vec<_> = keys.into_entries().map(|(_, k)| k).collect();
        assert_eq!(keys, vec![5, 3, 9, 1, 7]);
    }

    #[test]
    fn test_first_seen_keeps_first_value() {
        let mut companies = FirstSeen::new();
        companies.insert_with(&289, || "Ingenious Film Partners");
        companies.insert_with(&306, || "Twentieth Century Fox");
        companies.insert_with(&289, || "Ingenious");

        assert_eq!(
            companies.into_entries(),
            vec![(289, "Ingenious Film Partners"), (306, "Twentieth Century Fox")]
        );
    }

    #[test]
    fn test_link_set_dedups_pairs() {
        let mut links = LinkSet::new();
        assert!(links.insert(1, 10));
        assert!(links.insert(1, 11));
        assert!(!links.insert(1, 10));
        assert!(links.insert(2, 10));
        assert_eq!(links.into_pairs(), vec![(1, 10), (1, 11), (2, 10)]);
    }
}
