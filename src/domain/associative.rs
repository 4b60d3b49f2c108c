//! Map traversal strategies
//!
//! Walking the entries hands out key and value together in one pass.
//! Walking the keys and looking each value up again costs one extra lookup
//! per key. `CountingMap` counts lookups so the difference is measurable.

use std::cell::Cell;
use std::collections::{BTreeMap, HashMap};
use std::hash::Hash;

use tracing::{instrument, trace};

use crate::domain::traits::AssociativeContainer;

impl<K: Eq + Hash, V> AssociativeContainer<K, V> for HashMap<K, V> {
    fn put(&mut self, key: K, value: V) -> Option<V> {
        self.insert(key, value)
    }

    fn lookup(&self, key: &K) -> Option<&V> {
        self.get(key)
    }

    fn entry_count(&self) -> usize {
        self.len()
    }

    fn keys_iter(&self) -> Box<dyn Iterator<Item = &K> + '_> {
        Box::new(self.keys())
    }

    fn entries_iter(&self) -> Box<dyn Iterator<Item = (&K, &V)> + '_> {
        Box::new(self.iter())
    }
}

impl<K: Ord, V> AssociativeContainer<K, V> for BTreeMap<K, V> {
    fn put(&mut self, key: K, value: V) -> Option<V> {
        self.insert(key, value)
    }

    fn lookup(&self, key: &K) -> Option<&V> {
        self.get(key)
    }

    fn entry_count(&self) -> usize {
        self.len()
    }

    fn keys_iter(&self) -> Box<dyn Iterator<Item = &K> + '_> {
        Box::new(self.keys())
    }

    fn entries_iter(&self) -> Box<dyn Iterator<Item = (&K, &V)> + '_> {
        Box::new(self.iter())
    }
}

/// Wraps a map and counts calls to `lookup`.
#[derive(Debug, Default)]
pub struct CountingMap<M> {
    inner: M,
    lookups: Cell<usize>,
}

impl<M> CountingMap<M> {
    pub fn new(inner: M) -> Self {
        Self {
            inner,
            lookups: Cell::new(0),
        }
    }

    pub fn lookups(&self) -> usize {
        self.lookups.get()
    }

    pub fn into_inner(self) -> M {
        self.inner
    }
}

impl<K, V, M> AssociativeContainer<K, V> for CountingMap<M>
where
    M: AssociativeContainer<K, V>,
{
    fn put(&mut self, key: K, value: V) -> Option<V> {
        self.inner.put(key, value)
    }

    fn lookup(&self, key: &K) -> Option<&V> {
        self.lookups.set(self.lookups.get() + 1);
        self.inner.lookup(key)
    }

    fn entry_count(&self) -> usize {
        self.inner.entry_count()
    }

    fn keys_iter(&self) -> Box<dyn Iterator<Item = &K> + '_> {
        self.inner.keys_iter()
    }

    fn entries_iter(&self) -> Box<dyn Iterator<Item = (&K, &V)> + '_> {
        self.inner.entries_iter()
    }
}

/// Pairs visited by a traversal and the lookups it needed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Traversal<K, V> {
    pub pairs: Vec<(K, V)>,
    pub lookups: usize,
}

/// Single pass over the entries.
#[instrument(level = "debug", skip_all)]
pub fn traverse_entries<K, V, M>(map: &CountingMap<M>) -> Traversal<K, V>
where
    K: Clone,
    V: Clone,
    M: AssociativeContainer<K, V>,
{
    let before = map.lookups();
    let pairs: Vec<(K, V)> = AssociativeContainer::<K, V>::entries_iter(map)
        .map(|(k, v)| (k.clone(), v.clone()))
        .collect();
    trace!(entries = pairs.len(), "entry traversal done");
    Traversal {
        pairs,
        lookups: map.lookups() - before,
    }
}

/// Key traversal followed by one lookup per key.
#[instrument(level = "debug", skip_all)]
pub fn traverse_keys_then_lookup<K, V, M>(map: &CountingMap<M>) -> Traversal<K, V>
where
    K: Clone,
    V: Clone,
    M: AssociativeContainer<K, V>,
{
    let before = map.lookups();
    let mut pairs = Vec::with_capacity(AssociativeContainer::<K, V>::entry_count(map));
    for key in AssociativeContainer::<K, V>::keys_iter(map) {
        if let Some(value) = map.lookup(key) {
            pairs.push((key.clone(), value.clone()));
        }
    }
    trace!(entries = pairs.len(), "key traversal done");
    Traversal {
        pairs,
        lookups: map.lookups() - before,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn letters<M: AssociativeContainer<i32, String> + Default>() -> CountingMap<M> {
        let mut map = CountingMap::new(M::default());
        for (k, v) in [(10, "A"), (11, "B"), (12, "C"), (13, "D")] {
            map.put(k, v.to_string());
        }
        map
    }

    fn sorted(mut pairs: Vec<(i32, String)>) -> Vec<(i32, String)> {
        pairs.sort();
        pairs
    }

    #[test]
    fn given_hash_map_when_traversing_entries_then_all_pairs_once_without_lookups() {
        let map = letters::<HashMap<i32, String>>();
        let traversal = traverse_entries(&map);
        assert_eq!(traversal.lookups, 0);
        assert_eq!(
            sorted(traversal.pairs),
            vec![
                (10, "A".to_string()),
                (11, "B".to_string()),
                (12, "C".to_string()),
                (13, "D".to_string()),
            ]
        );
    }

    #[test]
    fn given_hash_map_when_traversing_keys_then_one_lookup_per_key() {
        let map = letters::<HashMap<i32, String>>();
        let by_keys = traverse_keys_then_lookup(&map);
        let by_entries = traverse_entries(&map);
        assert_eq!(by_keys.lookups, 4);
        assert_eq!(sorted(by_keys.pairs), sorted(by_entries.pairs));
        assert_eq!(map.lookups(), 4);

        let inner: HashMap<i32, String> = map.into_inner();
        assert_eq!(inner.len(), 4);
    }

    #[test]
    fn given_btree_map_when_traversing_entries_then_sorted_by_key() {
        let map = letters::<BTreeMap<i32, String>>();
        let keys: Vec<i32> = traverse_entries(&map)
            .pairs
            .into_iter()
            .map(|(k, _)| k)
            .collect();
        assert_eq!(keys, vec![10, 11, 12, 13]);
    }
}
