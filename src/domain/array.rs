//! Fixed-size array and the list adapter over it
//!
//! `ArrayView` is an adapter, not a copy: it reads and writes the array's
//! slots directly. The array cannot grow or shrink, so every structural
//! operation on the view fails with `UnsupportedOperation`.

use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

use tracing::debug;

use crate::domain::error::{CollectionError, CollectionResult};
use crate::domain::list::check_index;
use crate::domain::traits::OrderedContainer;

type Slots<T> = Rc<RefCell<Box<[T]>>>;

pub struct FixedArray<T> {
    slots: Slots<T>,
}

impl<T: Clone> FixedArray<T> {
    pub fn len(&self) -> usize {
        self.slots.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn get(&self, index: usize) -> CollectionResult<T> {
        let slots = self.slots.borrow();
        check_index(index, slots.len())?;
        Ok(slots[index].clone())
    }

    /// Write a slot; visible through every view of this array.
    pub fn set(&self, index: usize, value: T) -> CollectionResult<T> {
        let mut slots = self.slots.borrow_mut();
        check_index(index, slots.len())?;
        Ok(std::mem::replace(&mut slots[index], value))
    }

    pub fn to_vec(&self) -> Vec<T> {
        self.slots.borrow().to_vec()
    }

    /// List view backed by this array's storage.
    pub fn as_list(&self) -> ArrayView<T> {
        ArrayView {
            slots: Rc::clone(&self.slots),
        }
    }
}

impl<T> From<Vec<T>> for FixedArray<T> {
    fn from(items: Vec<T>) -> Self {
        Self {
            slots: Rc::new(RefCell::new(items.into_boxed_slice())),
        }
    }
}

impl<T> FromIterator<T> for FixedArray<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::from(iter.into_iter().collect::<Vec<_>>())
    }
}

impl<T: fmt::Debug> fmt::Debug for FixedArray<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.slots.borrow().iter()).finish()
    }
}

pub struct ArrayView<T> {
    slots: Slots<T>,
}

fn unsupported<R>(operation: &'static str) -> CollectionResult<R> {
    debug!(operation, "structural change rejected by fixed-size view");
    Err(CollectionError::UnsupportedOperation { operation })
}

impl<T: Clone> OrderedContainer<T> for ArrayView<T> {
    fn len(&self) -> usize {
        self.slots.borrow().len()
    }

    fn get(&self, index: usize) -> CollectionResult<T> {
        let slots = self.slots.borrow();
        check_index(index, slots.len())?;
        Ok(slots[index].clone())
    }

    fn set(&self, index: usize, value: T) -> CollectionResult<T> {
        let mut slots = self.slots.borrow_mut();
        check_index(index, slots.len())?;
        Ok(std::mem::replace(&mut slots[index], value))
    }

    fn push(&self, _value: T) -> CollectionResult<()> {
        unsupported("push")
    }

    fn insert(&self, _index: usize, _value: T) -> CollectionResult<()> {
        unsupported("insert")
    }

    fn remove_at(&self, _index: usize) -> CollectionResult<T> {
        unsupported("remove")
    }

    fn clear(&self) -> CollectionResult<()> {
        unsupported("clear")
    }

    fn to_vec(&self) -> CollectionResult<Vec<T>> {
        Ok(self.slots.borrow().to_vec())
    }
}

impl<T: fmt::Debug> fmt::Debug for ArrayView<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("ArrayView")
            .field(&self.slots.borrow())
            .finish()
    }
}
