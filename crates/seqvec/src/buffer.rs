//! Owned storage block with explicit capacity accounting.
//!
//! A [`Buffer`] is the single owner of an array's elements. It keeps its own
//! `capacity` rather than trusting `Vec::capacity()`, so the reported value is
//! exactly what the growth policy asked for. The backing `Vec` is always
//! allocated with at least that many slots, which means pushes and inserts
//! within `capacity` never move the elements.
//!
//! Every path that needs more room goes through [`Buffer::reallocate`]:
//! allocate a fresh block, move the logical elements across, drop the old
//! block, advance the generation.

use std::ops::Range;

use crate::config::GrowthConfig;
use crate::id::Generation;

pub(crate) struct Buffer<T> {
    /// Logical elements. `data.len()` is the logical length.
    data: Vec<T>,
    /// Accounted slot count, always `>= data.len()`.
    capacity: usize,
    /// Bumped on every reallocation.
    generation: Generation,
}

impl<T> Buffer<T> {
    pub(crate) fn new() -> Self {
        Self {
            data: Vec::new(),
            capacity: 0,
            generation: Generation::default(),
        }
    }

    /// Exactly `capacity` slots, none populated.
    pub(crate) fn with_capacity(capacity: usize) -> Self {
        Self {
            data: Vec::with_capacity(capacity),
            capacity,
            generation: Generation::default(),
        }
    }

    /// Take ownership of `data`, accounting an exact-fit capacity.
    pub(crate) fn from_vec(mut data: Vec<T>) -> Self {
        data.shrink_to_fit();
        let capacity = data.len();
        Self {
            data,
            capacity,
            generation: Generation::default(),
        }
    }

    pub(crate) fn len(&self) -> usize {
        self.data.len()
    }

    pub(crate) fn capacity(&self) -> usize {
        self.capacity
    }

    pub(crate) fn generation(&self) -> Generation {
        self.generation
    }

    pub(crate) fn as_slice(&self) -> &[T] {
        &self.data
    }

    pub(crate) fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.data
    }

    pub(crate) fn into_vec(self) -> Vec<T> {
        self.data
    }

    /// Replace the storage block with one of exactly `new_capacity` slots.
    ///
    /// # Panics
    ///
    /// Panics if `new_capacity` is smaller than the logical length.
    pub(crate) fn reallocate(&mut self, new_capacity: usize) {
        assert!(
            new_capacity >= self.data.len(),
            "reallocation to {new_capacity} slots would drop {} live elements",
            self.data.len() - new_capacity
        );
        let mut fresh = Vec::with_capacity(new_capacity);
        fresh.append(&mut self.data);
        self.data = fresh;
        self.capacity = new_capacity;
        self.generation = self.generation.advanced();
    }

    /// Make room for one more element, growing by `config` when full.
    ///
    /// Returns `true` if the buffer was reallocated.
    pub(crate) fn grow_for_one(&mut self, config: &GrowthConfig) -> bool {
        if self.data.len() < self.capacity {
            return false;
        }
        self.reallocate(config.grown_capacity(self.capacity));
        true
    }

    /// Make room for `additional` more elements in one step.
    ///
    /// When the requirement exceeds the current capacity, the new block is
    /// sized with headroom proportional to the requirement.
    pub(crate) fn grow_for_bulk(&mut self, additional: usize, config: &GrowthConfig) -> bool {
        let required = required_len(self.data.len(), additional);
        if required <= self.capacity {
            return false;
        }
        self.reallocate(config.headroom_for(required));
        true
    }

    /// Grow to exactly `capacity` slots if currently smaller.
    pub(crate) fn reserve_exact(&mut self, capacity: usize) -> bool {
        if capacity <= self.capacity {
            return false;
        }
        self.reallocate(capacity);
        true
    }

    /// Release unused slots. Reallocates only if there are any.
    pub(crate) fn shrink_to_fit(&mut self) -> bool {
        if self.capacity == self.data.len() {
            return false;
        }
        self.reallocate(self.data.len());
        true
    }

    pub(crate) fn push(&mut self, value: T) {
        debug_assert!(self.data.len() < self.capacity, "push into a full buffer");
        self.data.push(value);
    }

    /// Append `items` without growing. The caller must have made room.
    pub(crate) fn extend_within<I: IntoIterator<Item = T>>(&mut self, items: I) {
        self.data.extend(items);
        debug_assert!(self.data.len() <= self.capacity, "extend past capacity");
    }

    pub(crate) fn pop(&mut self) -> Option<T> {
        self.data.pop()
    }

    /// Shift `[index, len)` one slot later and write `value` at `index`.
    pub(crate) fn insert(&mut self, index: usize, value: T) {
        debug_assert!(self.data.len() < self.capacity, "insert into a full buffer");
        self.data.insert(index, value);
    }

    /// Insert `items` before `index`, preserving their order.
    pub(crate) fn insert_many(&mut self, index: usize, items: Vec<T>) {
        debug_assert!(self.data.len() + items.len() <= self.capacity);
        let tail = self.data.split_off(index);
        self.data.extend(items);
        self.data.extend(tail);
    }

    /// Remove the element at `index`, shifting the tail one slot earlier.
    pub(crate) fn remove(&mut self, index: usize) -> T {
        self.data.remove(index)
    }

    /// Remove `range`, shifting the tail into the gap.
    pub(crate) fn remove_range(&mut self, range: Range<usize>) {
        self.data.drain(range);
    }

    /// Drop all elements; capacity and generation are kept.
    pub(crate) fn clear(&mut self) {
        self.data.clear();
    }
}

impl<T: Clone> Buffer<T> {
    /// Deep copy with the same accounted capacity and a fresh generation.
    pub(crate) fn duplicate(&self) -> Self {
        let mut data = Vec::with_capacity(self.capacity);
        data.extend_from_slice(&self.data);
        Self {
            data,
            capacity: self.capacity,
            generation: Generation::default(),
        }
    }

    /// Overwrite contents with a copy of `src`, reallocating to exactly
    /// `src.len()` slots only if they do not fit.
    pub(crate) fn copy_from(&mut self, src: &[T]) {
        self.data.clear();
        self.reserve_exact(src.len());
        self.data.extend_from_slice(src);
    }
}

/// `len + additional`, panicking on overflow like `Vec` does.
fn required_len(len: usize, additional: usize) -> usize {
    match len.checked_add(additional) {
        Some(required) => required,
        None => panic!("capacity overflow: {len} + {additional} elements"),
    }
}
