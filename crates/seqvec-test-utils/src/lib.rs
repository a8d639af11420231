//! Test utilities and fixtures for seqvec development.
//!
//! - [`DropTracker`] / [`DropCounter`]: element type that counts its own
//!   drops, for checking that every live element is released exactly once.
//! - [`grown_by_push`], [`grown_by_reserve`], [`grown_by_insert`]: the same
//!   logical contents reached through different growth histories.

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

use std::cell::Cell;
use std::rc::Rc;

use seqvec::DynamicArray;

/// Shared drop counter handed out to [`DropCounter`] values.
#[derive(Clone, Default)]
pub struct DropTracker {
    drops: Rc<Cell<usize>>,
}

impl DropTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// A new tracked value carrying `id`.
    pub fn track(&self, id: u32) -> DropCounter {
        DropCounter {
            id,
            drops: Rc::clone(&self.drops),
        }
    }

    /// Number of tracked values dropped so far.
    pub fn drops(&self) -> usize {
        self.drops.get()
    }
}

/// Element that increments its tracker when dropped.
///
/// Cloning produces a second tracked value with the same `id`.
#[derive(Clone, Debug)]
pub struct DropCounter {
    pub id: u32,
    drops: Rc<Cell<usize>>,
}

impl PartialEq for DropCounter {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Drop for DropCounter {
    fn drop(&mut self) {
        self.drops.set(self.drops.get() + 1);
    }
}

/// `items` appended one at a time to an empty array (doubling history).
pub fn grown_by_push<T: Clone>(items: &[T]) -> DynamicArray<T> {
    let mut array = DynamicArray::new();
    for item in items {
        array.push_back(item.clone());
    }
    array
}

/// `items` written into an array reserved with `extra` spare slots.
pub fn grown_by_reserve<T: Clone>(items: &[T], extra: usize) -> DynamicArray<T> {
    let mut array = DynamicArray::with_capacity(items.len() + extra);
    array.extend(items.iter().cloned());
    array
}

/// `items` built back to front with `push_front`.
pub fn grown_by_insert<T: Clone>(items: &[T]) -> DynamicArray<T> {
    let mut array = DynamicArray::new();
    for item in items.iter().rev() {
        array.push_front(item.clone());
    }
    array
}
