//! Live view over a range of a `SharedList`
//!
//! Writes through the view land in the parent list. The view records the
//! parent's modification count; once the parent is changed structurally by
//! anyone else, every further operation on the view fails with
//! `ConcurrentModification`.

use std::cell::Cell;
use std::fmt;

use tracing::{debug, instrument};

use crate::domain::cursor::ModGuard;
use crate::domain::error::CollectionResult;
use crate::domain::list::{check_index, check_position, SharedList, SharedState};
use crate::domain::traits::OrderedContainer;

pub struct SubList<T> {
    parent: SharedState<T>,
    offset: usize,
    size: Cell<usize>,
    guard: Cell<ModGuard>,
}

impl<T> SubList<T> {
    pub(crate) fn new(parent: SharedState<T>, offset: usize, size: usize) -> Self {
        let guard = ModGuard::new(parent.borrow().mod_count);
        debug!(offset, size, "sub-list view created");
        Self {
            parent,
            offset,
            size: Cell::new(size),
            guard: Cell::new(guard),
        }
    }

    /// Start index of the view inside the parent.
    pub fn offset(&self) -> usize {
        self.offset
    }

    fn check_for_comodification(&self) -> CollectionResult<()> {
        self.guard.get().verify(self.parent.borrow().mod_count)
    }

    /// Record a structural change made through this view.
    fn resync(&self, current: u64) {
        let mut guard = self.guard.get();
        guard.sync(current);
        self.guard.set(guard);
    }

    pub fn iter(&self) -> SubListIter<'_, T> {
        SubListIter {
            view: self,
            next_index: 0,
            failed: false,
        }
    }
}

impl<T: Clone> SubList<T> {
    /// Independent copy of the viewed range.
    pub fn to_list(&self) -> CollectionResult<SharedList<T>> {
        Ok(self.to_vec()?.into_iter().collect())
    }
}

impl<T: Clone> OrderedContainer<T> for SubList<T> {
    /// Size recorded by the view; not re-validated against the parent.
    /// Invalidation shows up on the next element access or traversal step.
    fn len(&self) -> usize {
        self.size.get()
    }

    fn get(&self, index: usize) -> CollectionResult<T> {
        self.check_for_comodification()?;
        check_index(index, self.size.get())?;
        Ok(self.parent.borrow().items[self.offset + index].clone())
    }

    fn set(&self, index: usize, value: T) -> CollectionResult<T> {
        self.check_for_comodification()?;
        check_index(index, self.size.get())?;
        let mut parent = self.parent.borrow_mut();
        Ok(std::mem::replace(
            &mut parent.items[self.offset + index],
            value,
        ))
    }

    fn push(&self, value: T) -> CollectionResult<()> {
        self.insert(self.size.get(), value)
    }

    #[instrument(level = "debug", skip(self, value))]
    fn insert(&self, index: usize, value: T) -> CollectionResult<()> {
        self.check_for_comodification()?;
        check_position(index, self.size.get())?;
        let mut parent = self.parent.borrow_mut();
        parent.items.insert(self.offset + index, value);
        parent.bump();
        self.resync(parent.mod_count);
        self.size.set(self.size.get() + 1);
        Ok(())
    }

    fn remove_at(&self, index: usize) -> CollectionResult<T> {
        self.check_for_comodification()?;
        check_index(index, self.size.get())?;
        let mut parent = self.parent.borrow_mut();
        let removed = parent.items.remove(self.offset + index);
        parent.bump();
        self.resync(parent.mod_count);
        self.size.set(self.size.get() - 1);
        Ok(removed)
    }

    fn clear(&self) -> CollectionResult<()> {
        self.check_for_comodification()?;
        let mut parent = self.parent.borrow_mut();
        let range = self.offset..self.offset + self.size.get();
        parent.items.drain(range);
        parent.bump();
        self.resync(parent.mod_count);
        self.size.set(0);
        Ok(())
    }

    fn to_vec(&self) -> CollectionResult<Vec<T>> {
        self.check_for_comodification()?;
        let parent = self.parent.borrow();
        Ok(parent.items[self.offset..self.offset + self.size.get()].to_vec())
    }
}

impl<T: fmt::Debug> fmt::Debug for SubList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SubList")
            .field("offset", &self.offset)
            .field("size", &self.size.get())
            .finish_non_exhaustive()
    }
}

/// Fail-fast traversal of a sub-list view.
pub struct SubListIter<'a, T> {
    view: &'a SubList<T>,
    next_index: usize,
    failed: bool,
}

impl<T: Clone> Iterator for SubListIter<'_, T> {
    type Item = CollectionResult<T>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed {
            return None;
        }
        if let Err(e) = self.view.check_for_comodification() {
            self.failed = true;
            return Some(Err(e));
        }
        if self.next_index >= self.view.size.get() {
            return None;
        }
        let item = self.view.get(self.next_index);
        self.next_index += 1;
        Some(item)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::error::CollectionError;

    fn abcd() -> SharedList<String> {
        ["a", "b", "c", "d"].into_iter().map(String::from).collect()
    }

    #[test]
    fn given_view_when_pushing_then_parent_sees_element_after_range() {
        let list = abcd();
        let view = list.sub_list(0, 2).unwrap();
        assert_eq!(view.to_vec().unwrap(), vec!["a", "b"]);

        view.push("xiao".into()).unwrap();
        assert_eq!(view.len(), 3);
        assert_eq!(list.to_vec().unwrap(), vec!["a", "b", "xiao", "c", "d"]);
    }

    #[test]
    fn given_parent_push_after_view_when_traversing_then_concurrent_modification() {
        let list = abcd();
        let view = list.sub_list(0, 2).unwrap();
        view.push("xiao".into()).unwrap();
        list.push("3".into()).unwrap();

        let first = view.iter().next().unwrap();
        assert!(matches!(
            first,
            Err(CollectionError::ConcurrentModification { .. })
        ));
        assert!(view.get(0).unwrap_err().is_concurrent_modification());
        assert!(view.push("late".into()).is_err());
        // size is the recorded one; only element access fails fast
        assert_eq!(view.len(), 3);
        assert!(view.to_vec().unwrap_err().is_concurrent_modification());
    }

    #[test]
    fn given_parent_set_after_view_when_reading_then_view_stays_valid() {
        let list = abcd();
        let view = list.sub_list(1, 3).unwrap();
        assert_eq!(view.offset(), 1);
        list.set(1, "B".into()).unwrap();
        assert_eq!(view.get(0).unwrap(), "B");
    }

    #[test]
    fn given_view_when_clearing_then_range_removed_from_parent() {
        let list = abcd();
        let view = list.sub_list(1, 3).unwrap();
        view.clear().unwrap();
        assert!(view.is_empty());
        assert_eq!(list.to_vec().unwrap(), vec!["a", "d"]);
    }

    #[test]
    fn given_view_when_copied_then_copy_is_independent() {
        let list = abcd();
        let view = list.sub_list(2, 4).unwrap();
        let copy = view.to_list().unwrap();
        list.push("e".into()).unwrap();
        copy.push("x".into()).unwrap();
        assert_eq!(copy.to_vec().unwrap(), vec!["c", "d", "x"]);
        assert_eq!(list.len(), 5);
    }
}
