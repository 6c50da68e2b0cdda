//! Insertion-ordered frequency counter.

use std::collections::HashMap;
use std::hash::Hash;

use serde::ser::{Serialize, SerializeMap, Serializer};

/// Counts occurrences of keys, remembering the order each key was first seen.
///
/// [`Tally::most_common`] ranks by count with ties left in discovery order,
/// which keeps ranked output reproducible across runs.
#[derive(Debug, Clone)]
pub struct Tally<K> {
    entries: Vec<(K, usize)>,
    index: HashMap<K, usize>,
}

impl<K> Default for Tally<K> {
    fn default() -> Self {
        Self {
            entries: Vec::new(),
            index: HashMap::new(),
        }
    }
}

impl<K: Eq + Hash + Clone> Tally<K> {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn increment(&mut self, key: K) {
        if let Some(&slot) = self.index.get(&key) {
            self.entries[slot].1 += 1;
        } else {
            self.index.insert(key.clone(), self.entries.len());
            self.entries.push((key, 1));
        }
    }

    #[must_use]
    pub fn count(&self, key: &K) -> usize {
        self.index.get(key).map_or(0, |&slot| self.entries[slot].1)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries in discovery order.
    pub fn iter(&self) -> impl Iterator<Item = (&K, usize)> {
        self.entries.iter().map(|(k, n)| (k, *n))
    }

    /// The `n` highest counts, descending; equal counts keep discovery order.
    #[must_use]
    pub fn most_common(&self, n: usize) -> Vec<(&K, usize)> {
        let mut ranked: Vec<(&K, usize)> = self.iter().collect();
        // `sort_by` is stable, which is what preserves the tie order.
        ranked.sort_by(|a, b| b.1.cmp(&a.1));
        ranked.truncate(n);
        ranked
    }
}

/// Serialises as a JSON object in discovery order.
impl<K: Serialize> Serialize for Tally<K> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (key, count) in &self.entries {
            map.serialize_entry(key, count)?;
        }
        map.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counts_repeated_keys() {
        let mut tally = Tally::new();
        for key in ["a", "b", "a", "c", "a", "b"] {
            tally.increment(key);
        }
        assert_eq!(tally.count(&"a"), 3);
        assert_eq!(tally.count(&"b"), 2);
        assert_eq!(tally.count(&"c"), 1);
        assert_eq!(tally.count(&"missing"), 0);
        assert_eq!(tally.len(), 3);
    }

    #[test]
    fn most_common_breaks_ties_by_discovery_order() {
        let mut tally = Tally::new();
        for key in ["late", "early", "late", "early", "solo", "third", "third"] {
            tally.increment(key);
        }
        let ranked: Vec<_> = tally.most_common(10).into_iter().map(|(k, n)| (*k, n)).collect();
        assert_eq!(
            ranked,
            vec![("late", 2), ("early", 2), ("third", 2), ("solo", 1)]
        );
    }

    #[test]
    fn most_common_truncates() {
        let mut tally = Tally::new();
        for key in 0..10 {
            tally.increment(key);
        }
        let ranked = tally.most_common(6);
        assert_eq!(ranked.len(), 6);
        assert_eq!(*ranked[0].0, 0);
        assert_eq!(*ranked[5].0, 5);
    }

    #[test]
    fn empty_tally_ranks_nothing() {
        let tally: Tally<String> = Tally::new();
        assert!(tally.is_empty());
        assert!(tally.most_common(6).is_empty());
    }
}
