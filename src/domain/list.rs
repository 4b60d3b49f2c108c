//! Growable list with reference semantics and a structural modification counter
//!
//! `SharedList` behaves like a heap-allocated list that several handles can
//! observe at once: fail-fast iterators, removal cursors and live sub-list
//! views all hold a reference to the same state. Every structural
//! modification (push, insert, remove, clear, sort) bumps `mod_count`;
//! in-place replacement via `set` does not.

use std::cell::RefCell;
use std::cmp::Ordering;
use std::fmt;
use std::rc::Rc;

use tracing::{debug, instrument, trace};

use crate::domain::cursor::{FailFastIter, ListCursor};
use crate::domain::error::{CollectionError, CollectionResult};
use crate::domain::ordering::verify_comparator;
use crate::domain::sublist::SubList;
use crate::domain::traits::OrderedContainer;

/// Backing storage shared between a list and the handles derived from it.
#[derive(Debug)]
pub(crate) struct ListState<T> {
    pub(crate) items: Vec<T>,
    pub(crate) mod_count: u64,
}

impl<T> ListState<T> {
    pub(crate) fn bump(&mut self) {
        self.mod_count += 1;
        trace!(mod_count = self.mod_count, "structural modification");
    }
}

pub(crate) type SharedState<T> = Rc<RefCell<ListState<T>>>;

pub(crate) fn check_index(index: usize, len: usize) -> CollectionResult<()> {
    if index < len {
        Ok(())
    } else {
        Err(CollectionError::IndexOutOfBounds { index, len })
    }
}

/// Like `check_index`, but `index == len` is a valid insertion point.
pub(crate) fn check_position(index: usize, len: usize) -> CollectionResult<()> {
    if index <= len {
        Ok(())
    } else {
        Err(CollectionError::IndexOutOfBounds { index, len })
    }
}

pub struct SharedList<T> {
    state: SharedState<T>,
}

impl<T> Default for SharedList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> SharedList<T> {
    pub fn new() -> Self {
        Self::from_vec(Vec::new())
    }

    /// Pre-allocate room for `capacity` elements. The list is still empty.
    ///
    /// # Panics
    ///
    /// If the allocation size overflows, like `Vec::with_capacity`. Use
    /// `try_with_capacity` for untrusted hints.
    pub fn with_capacity(capacity: usize) -> Self {
        debug!(capacity, "presized list");
        Self::from_vec(Vec::with_capacity(capacity))
    }

    /// Fallible `with_capacity`.
    ///
    /// # Errors
    ///
    /// `CapacityExceeded` if the allocation overflows or fails.
    pub fn try_with_capacity(capacity: usize) -> CollectionResult<Self> {
        let mut items = Vec::new();
        items.try_reserve(capacity).map_err(|e| {
            debug!(capacity, error = %e, "reservation failed");
            CollectionError::CapacityExceeded {
                requested: capacity,
            }
        })?;
        Ok(Self::from_vec(items))
    }

    fn from_vec(items: Vec<T>) -> Self {
        Self {
            state: Rc::new(RefCell::new(ListState {
                items,
                mod_count: 0,
            })),
        }
    }

    pub fn capacity(&self) -> usize {
        self.state.borrow().items.capacity()
    }

    /// Number of structural modifications so far.
    pub fn mod_count(&self) -> u64 {
        self.state.borrow().mod_count
    }

    /// Append every element as one structural modification.
    pub fn extend_from<I: IntoIterator<Item = T>>(&self, items: I) {
        let mut state = self.state.borrow_mut();
        state.items.extend(items);
        state.bump();
    }

    /// Fail-fast traversal: any structural change made to the list outside
    /// this iterator makes the next step yield `ConcurrentModification`.
    pub fn iter(&self) -> FailFastIter<T> {
        FailFastIter::new(Rc::clone(&self.state))
    }

    /// Traversal that supports removing the element it last returned.
    pub fn cursor(&self) -> ListCursor<T> {
        ListCursor::new(Rc::clone(&self.state))
    }

    /// Live view of `from..to`.
    #[instrument(level = "debug", skip(self))]
    pub fn sub_list(&self, from: usize, to: usize) -> CollectionResult<SubList<T>> {
        let len = self.state.borrow().items.len();
        if from > to || to > len {
            return Err(CollectionError::InvalidRange { from, to, len });
        }
        Ok(SubList::new(Rc::clone(&self.state), from, to - from))
    }

    /// Sort after verifying the comparator over the current elements.
    ///
    /// The list stays mutably borrowed while `cmp` runs; a comparator that
    /// reads this list (or a view of it) panics with a borrow error.
    ///
    /// # Errors
    ///
    /// `InvalidOrdering` if the comparator is inconsistent; the list is left
    /// untouched in that case.
    pub fn sort_checked<F>(&self, cmp: F) -> CollectionResult<()>
    where
        F: Fn(&T, &T) -> Ordering,
    {
        let mut state = self.state.borrow_mut();
        verify_comparator(&state.items, &cmp)?;
        state.items.sort_by(|a, b| cmp(a, b));
        state.bump();
        Ok(())
    }
}

impl<T: Clone> SharedList<T> {
    /// Copy into a freshly allocated array of exactly `len()` elements.
    pub fn to_array(&self) -> Box<[T]> {
        self.state.borrow().items.clone().into_boxed_slice()
    }

    /// Copy into a caller-provided array that must be sized exactly `len()`.
    pub fn copy_into(&self, dest: &mut [T]) -> CollectionResult<()> {
        let state = self.state.borrow();
        if dest.len() != state.items.len() {
            return Err(CollectionError::LengthMismatch {
                expected: state.items.len(),
                found: dest.len(),
            });
        }
        dest.clone_from_slice(&state.items);
        Ok(())
    }
}

impl<T: PartialEq> SharedList<T> {
    /// Remove the first element equal to `value`.
    pub fn remove_value(&self, value: &T) -> bool {
        let mut state = self.state.borrow_mut();
        match state.items.iter().position(|item| item == value) {
            Some(index) => {
                state.items.remove(index);
                state.bump();
                true
            }
            None => false,
        }
    }
}

impl<T: Clone> OrderedContainer<T> for SharedList<T> {
    fn len(&self) -> usize {
        self.state.borrow().items.len()
    }

    fn get(&self, index: usize) -> CollectionResult<T> {
        let state = self.state.borrow();
        check_index(index, state.items.len())?;
        Ok(state.items[index].clone())
    }

    fn set(&self, index: usize, value: T) -> CollectionResult<T> {
        let mut state = self.state.borrow_mut();
        check_index(index, state.items.len())?;
        Ok(std::mem::replace(&mut state.items[index], value))
    }

    fn push(&self, value: T) -> CollectionResult<()> {
        let mut state = self.state.borrow_mut();
        state.items.push(value);
        state.bump();
        Ok(())
    }

    fn insert(&self, index: usize, value: T) -> CollectionResult<()> {
        let mut state = self.state.borrow_mut();
        check_position(index, state.items.len())?;
        state.items.insert(index, value);
        state.bump();
        Ok(())
    }

    fn remove_at(&self, index: usize) -> CollectionResult<T> {
        let mut state = self.state.borrow_mut();
        check_index(index, state.items.len())?;
        let removed = state.items.remove(index);
        state.bump();
        Ok(removed)
    }

    fn clear(&self) -> CollectionResult<()> {
        let mut state = self.state.borrow_mut();
        state.items.clear();
        state.bump();
        Ok(())
    }

    fn to_vec(&self) -> CollectionResult<Vec<T>> {
        Ok(self.state.borrow().items.clone())
    }
}

impl<T> FromIterator<T> for SharedList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::from_vec(iter.into_iter().collect())
    }
}

impl<T: fmt::Debug> fmt::Debug for SharedList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let state = self.state.borrow();
        f.debug_struct("SharedList")
            .field("items", &state.items)
            .field("mod_count", &state.mod_count)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn letters() -> SharedList<String> {
        ["a", "b", "c"].into_iter().map(String::from).collect()
    }

    #[test]
    fn given_list_when_converted_to_array_then_same_length_and_order() {
        let list = letters();
        let array = list.to_array();
        assert_eq!(array.len(), list.len());
        assert_eq!(&*array, &["a", "b", "c"]);
    }

    #[test]
    fn given_empty_list_when_converted_to_array_then_array_is_empty() {
        let list: SharedList<String> = SharedList::new();
        assert!(list.to_array().is_empty());
    }

    #[test]
    fn given_wrongly_sized_destination_when_copying_then_length_mismatch() {
        let list = letters();
        let mut dest = vec![String::new(); 2];
        assert_eq!(
            list.copy_into(&mut dest),
            Err(CollectionError::LengthMismatch {
                expected: 3,
                found: 2
            })
        );

        let mut dest = vec![String::new(); 3];
        list.copy_into(&mut dest).unwrap();
        assert_eq!(dest, vec!["a", "b", "c"]);
    }

    #[test]
    fn given_capacity_hint_when_created_then_empty_with_reserved_room() {
        let list: SharedList<String> = SharedList::with_capacity(100);
        assert_eq!(list.len(), 0);
        assert!(list.capacity() >= 100);
    }

    #[test]
    fn given_overflowing_capacity_hint_when_trying_then_capacity_exceeded() {
        let result = SharedList::<String>::try_with_capacity(usize::MAX);
        assert_eq!(
            result.err(),
            Some(CollectionError::CapacityExceeded {
                requested: usize::MAX
            })
        );

        let list = SharedList::<String>::try_with_capacity(16).unwrap();
        assert!(list.is_empty());
        assert!(list.capacity() >= 16);
    }

    #[test]
    fn given_set_when_replacing_then_mod_count_unchanged() {
        let list = letters();
        let old = list.set(0, "z".into()).unwrap();
        assert_eq!(old, "a");
        assert_eq!(list.mod_count(), 0);

        list.push("d".into()).unwrap();
        list.remove_at(0).unwrap();
        assert_eq!(list.mod_count(), 2);
    }

    #[test]
    fn given_out_of_range_index_when_reading_then_index_error() {
        let list = letters();
        assert_eq!(
            list.get(3),
            Err(CollectionError::IndexOutOfBounds { index: 3, len: 3 })
        );
        assert!(list.insert(3, "d".into()).is_ok());
        assert!(list.insert(5, "x".into()).is_err());
    }

    #[test]
    fn given_inverted_range_when_slicing_then_invalid_range() {
        let list = letters();
        assert_eq!(
            list.sub_list(2, 1).err(),
            Some(CollectionError::InvalidRange {
                from: 2,
                to: 1,
                len: 3
            })
        );
        assert!(list.sub_list(0, 4).is_err());
    }

    #[test]
    fn given_present_value_when_removing_by_value_then_first_match_removed() {
        let list: SharedList<i32> = vec![1, 2, 1].into_iter().collect();
        assert!(list.remove_value(&1));
        assert!(!list.remove_value(&7));
        assert_eq!(list.to_vec().unwrap(), vec![2, 1]);
    }

    #[test]
    fn given_consistent_comparator_when_sorting_then_sorted_descending() {
        let list: SharedList<i32> = vec![3, 1, 2].into_iter().collect();
        list.sort_checked(|a, b| b.cmp(a)).unwrap();
        assert_eq!(list.to_vec().unwrap(), vec![3, 2, 1]);
        assert_eq!(list.mod_count(), 1);
    }
}
