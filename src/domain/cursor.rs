//! Traversals over a `SharedList`
//!
//! Both traversals record the list's modification count when created and
//! fail fast once it changes behind their back. Only `ListCursor::remove`
//! may change the list structurally without invalidating the traversal.

use tracing::{debug, instrument};

use crate::domain::error::{CollectionError, CollectionResult};
use crate::domain::list::SharedState;

/// Expected modification count of the backing list.
#[derive(Debug, Clone, Copy)]
pub(crate) struct ModGuard {
    expected: u64,
}

impl ModGuard {
    pub(crate) fn new(expected: u64) -> Self {
        Self { expected }
    }

    pub(crate) fn verify(&self, found: u64) -> CollectionResult<()> {
        if found == self.expected {
            Ok(())
        } else {
            debug!(expected = self.expected, found, "stale traversal");
            Err(CollectionError::ConcurrentModification {
                expected: self.expected,
                found,
            })
        }
    }

    pub(crate) fn sync(&mut self, current: u64) {
        self.expected = current;
    }
}

/// Plain for-each traversal.
///
/// The check runs before the exhaustion test, so removing the last element
/// during traversal is reported too. After the first error the iterator is
/// fused and yields `None`.
pub struct FailFastIter<T> {
    state: SharedState<T>,
    next_index: usize,
    guard: ModGuard,
    failed: bool,
}

impl<T> FailFastIter<T> {
    pub(crate) fn new(state: SharedState<T>) -> Self {
        let guard = ModGuard::new(state.borrow().mod_count);
        Self {
            state,
            next_index: 0,
            guard,
            failed: false,
        }
    }
}

impl<T: Clone> Iterator for FailFastIter<T> {
    type Item = CollectionResult<T>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed {
            return None;
        }
        let state = self.state.borrow();
        if let Err(e) = self.guard.verify(state.mod_count) {
            self.failed = true;
            return Some(Err(e));
        }
        let item = state.items.get(self.next_index)?.clone();
        self.next_index += 1;
        Some(Ok(item))
    }
}

/// Traversal with safe removal of the element last returned by `next`.
pub struct ListCursor<T> {
    state: SharedState<T>,
    next_index: usize,
    last_returned: Option<usize>,
    guard: ModGuard,
    failed: bool,
}

impl<T> ListCursor<T> {
    pub(crate) fn new(state: SharedState<T>) -> Self {
        let guard = ModGuard::new(state.borrow().mod_count);
        Self {
            state,
            next_index: 0,
            last_returned: None,
            guard,
            failed: false,
        }
    }

    pub fn has_next(&self) -> bool {
        self.next_index < self.state.borrow().items.len()
    }

    /// Remove the element returned by the previous `next` call.
    ///
    /// # Errors
    ///
    /// `NoCurrentElement` before the first `next` or on a second call in a
    /// row; `ConcurrentModification` if the list changed behind the cursor.
    #[instrument(level = "debug", skip(self))]
    pub fn remove(&mut self) -> CollectionResult<T> {
        let index = self
            .last_returned
            .take()
            .ok_or(CollectionError::NoCurrentElement)?;
        let mut state = self.state.borrow_mut();
        self.guard.verify(state.mod_count)?;

        let removed = state.items.remove(index);
        state.bump();
        self.guard.sync(state.mod_count);
        self.next_index = index;
        Ok(removed)
    }
}

impl<T: Clone> Iterator for ListCursor<T> {
    type Item = CollectionResult<T>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed {
            return None;
        }
        let state = self.state.borrow();
        if let Err(e) = self.guard.verify(state.mod_count) {
            self.failed = true;
            return Some(Err(e));
        }
        let item = state.items.get(self.next_index)?.clone();
        self.last_returned = Some(self.next_index);
        self.next_index += 1;
        Some(Ok(item))
    }
}
