//! Set semantics and list de-duplication
//!
//! Hash and tree sets satisfy `UniqueContainer` directly. When the original
//! order of a list matters, `LinkedUniqueSet` keeps first-insertion order.

use std::collections::{BTreeSet, HashSet};
use std::hash::Hash;

use tracing::{debug, instrument};

use crate::domain::error::CollectionResult;
use crate::domain::list::SharedList;
use crate::domain::traits::{OrderedContainer, UniqueContainer};

impl<T: Eq + Hash> UniqueContainer<T> for HashSet<T> {
    fn insert_unique(&mut self, value: T) -> bool {
        self.insert(value)
    }

    fn contains_value(&self, value: &T) -> bool {
        self.contains(value)
    }

    fn unique_len(&self) -> usize {
        self.len()
    }

    fn preserves_insertion_order(&self) -> bool {
        false
    }

    fn into_values(self) -> Vec<T> {
        self.into_iter().collect()
    }
}

/// Iterates in sorted order, which is not insertion order.
impl<T: Ord> UniqueContainer<T> for BTreeSet<T> {
    fn insert_unique(&mut self, value: T) -> bool {
        self.insert(value)
    }

    fn contains_value(&self, value: &T) -> bool {
        self.contains(value)
    }

    fn unique_len(&self) -> usize {
        self.len()
    }

    fn preserves_insertion_order(&self) -> bool {
        false
    }

    fn into_values(self) -> Vec<T> {
        self.into_iter().collect()
    }
}

/// Hash set that remembers the order elements were first inserted in.
#[derive(Debug, Clone)]
pub struct LinkedUniqueSet<T> {
    seen: HashSet<T>,
    order: Vec<T>,
}

impl<T> Default for LinkedUniqueSet<T> {
    fn default() -> Self {
        Self {
            seen: HashSet::new(),
            order: Vec::new(),
        }
    }
}

impl<T: Clone + Eq + Hash> LinkedUniqueSet<T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.order.iter()
    }
}

impl<T: Clone + Eq + Hash> UniqueContainer<T> for LinkedUniqueSet<T> {
    fn insert_unique(&mut self, value: T) -> bool {
        if self.seen.insert(value.clone()) {
            self.order.push(value);
            true
        } else {
            false
        }
    }

    fn contains_value(&self, value: &T) -> bool {
        self.seen.contains(value)
    }

    fn unique_len(&self) -> usize {
        self.order.len()
    }

    fn preserves_insertion_order(&self) -> bool {
        true
    }

    fn into_values(self) -> Vec<T> {
        self.order
    }
}

impl<T: Clone + Eq + Hash> FromIterator<T> for LinkedUniqueSet<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut set = Self::new();
        for value in iter {
            set.insert_unique(value);
        }
        set
    }
}

/// Replace the list's contents by its distinct elements, routed through `S`.
///
/// Returns the number of duplicates dropped. The resulting order is the
/// iteration order of `S`.
#[instrument(level = "debug", skip(list))]
pub fn dedup_via<T, S>(list: &SharedList<T>) -> CollectionResult<usize>
where
    T: Clone,
    S: UniqueContainer<T> + Default,
{
    let mut set = S::default();
    let before = list.len();
    for value in list.to_vec()? {
        set.insert_unique(value);
    }
    debug!(
        distinct = set.unique_len(),
        ordered = set.preserves_insertion_order(),
        "collected distinct values"
    );

    list.clear()?;
    list.extend_from(set.into_values());
    Ok(before - list.len())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn duplicates() -> SharedList<i32> {
        vec![1, 1, 2, 2, 3].into_iter().collect()
    }

    #[test]
    fn given_duplicates_when_dedup_via_hash_set_then_each_value_once() {
        let list = duplicates();
        let dropped = dedup_via::<_, HashSet<i32>>(&list).unwrap();
        assert_eq!(dropped, 2);

        let mut values = list.to_vec().unwrap();
        values.sort_unstable();
        assert_eq!(values, vec![1, 2, 3]);
    }

    #[test]
    fn given_duplicates_when_dedup_via_linked_set_then_first_seen_order_kept() {
        let list: SharedList<i32> = vec![3, 1, 3, 2, 1].into_iter().collect();
        dedup_via::<_, LinkedUniqueSet<i32>>(&list).unwrap();
        assert_eq!(list.to_vec().unwrap(), vec![3, 1, 2]);
    }

    #[test]
    fn given_tree_set_when_deduplicating_then_sorted_not_insertion_order() {
        let list: SharedList<i32> = vec![3, 1, 3].into_iter().collect();
        dedup_via::<_, BTreeSet<i32>>(&list).unwrap();
        assert_eq!(list.to_vec().unwrap(), vec![1, 3]);
        assert!(!BTreeSet::<i32>::new().preserves_insertion_order());
    }

    #[test]
    fn given_linked_set_when_inserting_duplicate_then_rejected() {
        let mut set: LinkedUniqueSet<&str> = ["a", "b"].into_iter().collect();
        assert!(!set.insert_unique("a"));
        assert!(set.contains_value(&"b"));
        assert_eq!(set.iter().copied().collect::<Vec<_>>(), vec!["a", "b"]);
    }
}
