//! Capability contracts shared by the crate's containers and the std collections
//!
//! The aliasing containers (`SharedList`, `SubList`, `ArrayView`) use interior
//! mutability, so the ordered contract takes `&self` even for writes. Every
//! operation is fallible because views may reject a write or be invalidated.

use crate::domain::error::CollectionResult;

/// Indexable, appendable sequence.
pub trait OrderedContainer<T> {
    /// Number of elements.
    ///
    /// Not checked for invalidation: a `SubList` reports the size it recorded
    /// even after its parent changed. Use `get`/`to_vec` to detect that.
    fn len(&self) -> usize;

    /// `len() == 0`; unchecked like `len`.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn get(&self, index: usize) -> CollectionResult<T>;

    /// Replace the element at `index`, returning the previous one.
    ///
    /// Not a structural modification: views stay valid.
    fn set(&self, index: usize, value: T) -> CollectionResult<T>;

    fn push(&self, value: T) -> CollectionResult<()>;

    fn insert(&self, index: usize, value: T) -> CollectionResult<()>;

    fn remove_at(&self, index: usize) -> CollectionResult<T>;

    fn clear(&self) -> CollectionResult<()>;

    /// Snapshot of the current contents.
    fn to_vec(&self) -> CollectionResult<Vec<T>>;
}

/// Set semantics: every element is stored at most once.
pub trait UniqueContainer<T> {
    /// Returns false if the element was already present.
    fn insert_unique(&mut self, value: T) -> bool;

    fn contains_value(&self, value: &T) -> bool;

    fn unique_len(&self) -> usize;

    /// Whether iteration yields elements in the order they were first inserted.
    fn preserves_insertion_order(&self) -> bool;

    fn into_values(self) -> Vec<T>;
}

/// Key-unique mapping with single-pass entry traversal.
pub trait AssociativeContainer<K, V> {
    fn put(&mut self, key: K, value: V) -> Option<V>;

    fn lookup(&self, key: &K) -> Option<&V>;

    fn entry_count(&self) -> usize;

    fn keys_iter(&self) -> Box<dyn Iterator<Item = &K> + '_>;

    /// Key and value together, one pass, no lookups.
    fn entries_iter(&self) -> Box<dyn Iterator<Item = (&K, &V)> + '_>;
}
