//! The [`DynamicArray`] container.
//!
//! # Growth policy
//!
//! Explicit construction allocates exactly what it holds: `with_len`,
//! `from_elem`, `from_range`, `From<[T; N]>`, `collect()` and `seqvec![..]`
//! all report `capacity() == len()`. `Clone` keeps the source's capacity.
//!
//! Organic growth uses the array's [`GrowthConfig`] (doubling by default):
//!
//! | operation | when full | new capacity |
//! |---|---|---|
//! | `push_back`, `push_front`, `insert` | `len == capacity` | `max(min_capacity, factor * capacity)` |
//! | `insert_iter`, `insert_slice`, `insert_range` | `len + k > capacity` | `factor * (len + k)` |
//! | `assign` | `count > capacity` | `count` |
//! | `assign_slice`, `assign_iter` | always | `factor * list.len()` |
//! | `reserve(n)` | `n > capacity` | `n` |
//!
//! # Cursor invalidation
//!
//! Any operation that reallocates advances [`DynamicArray::generation`].
//! Cursors from an earlier generation are stale and must not be passed back;
//! debug builds panic when they are, release builds treat them as bare
//! indices. Operations that do not reallocate keep cursors valid, but the
//! element a cursor refers to may shift after an insert or erase.

use std::fmt;
use std::hash::{Hash, Hasher};
use std::ops::{Index, IndexMut};

use crate::buffer::Buffer;
use crate::config::GrowthConfig;
use crate::cursor::{Access, ConstCursor, Cursor, Position};
use crate::error::ArrayError;
use crate::id::{ArrayId, Generation};
use crate::iter::{IntoIter, Iter, IterMut};
use crate::render::{Render, Slots};

/// A contiguous, owned, growable sequence.
///
/// ```
/// use seqvec::{seqvec, DynamicArray};
///
/// let mut v = seqvec![10, 20, 30, 40];
/// let pos = v.begin() + 2;
/// v.insert(pos, 3);
/// assert_eq!(v, [10, 20, 3, 30, 40]);
///
/// let mut w = DynamicArray::new();
/// for x in [5, 4, 3] {
///     w.push_front(x);
/// }
/// assert_eq!(w, [3, 4, 5]);
/// ```
pub struct DynamicArray<T> {
    buf: Buffer<T>,
    id: ArrayId,
    config: GrowthConfig,
}

// ── Construction ────────────────────────────────────────────────

impl<T> DynamicArray<T> {
    /// An empty array with no allocated slots.
    pub fn new() -> Self {
        Self::with_config(GrowthConfig::default())
    }

    /// An empty array that grows according to `config`.
    pub fn with_config(config: GrowthConfig) -> Self {
        Self::from_buffer(Buffer::new(), config)
    }

    /// An empty array with exactly `capacity` reserved slots.
    pub fn with_capacity(capacity: usize) -> Self {
        Self::from_buffer(Buffer::with_capacity(capacity), GrowthConfig::default())
    }

    /// `count` default-valued elements, capacity exactly `count`.
    pub fn with_len(count: usize) -> Self
    where
        T: Default,
    {
        std::iter::repeat_with(T::default).take(count).collect()
    }

    /// `count` copies of `value`, capacity exactly `count`.
    pub fn from_elem(value: T, count: usize) -> Self
    where
        T: Clone,
    {
        Self::from(vec![value; count])
    }

    /// Copy of `source`'s elements in `[first, last)`, exact-fit.
    ///
    /// # Panics
    ///
    /// Panics if the range is reversed or extends past `source.end()`.
    pub fn from_range<A: Access, B: Access>(
        source: &DynamicArray<T>,
        first: Position<A>,
        last: Position<B>,
    ) -> Self
    where
        T: Clone,
    {
        Self::from(source.span(first, last))
    }

    fn from_buffer(buf: Buffer<T>, config: GrowthConfig) -> Self {
        Self {
            buf,
            id: ArrayId::next(),
            config,
        }
    }
}

// ── Size and capacity ──────────────────────────────────────────

impl<T> DynamicArray<T> {
    /// Number of logical elements.
    pub fn len(&self) -> usize {
        self.buf.len()
    }

    /// Alias of [`len`](Self::len).
    pub fn size(&self) -> usize {
        self.len()
    }

    /// Whether the array holds no elements.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Alias of [`is_empty`](Self::is_empty).
    pub fn empty(&self) -> bool {
        self.is_empty()
    }

    /// Number of allocated slots. Always `>= len()`.
    pub fn capacity(&self) -> usize {
        self.buf.capacity()
    }

    /// Reallocation generation. Cursors created in an older generation are
    /// stale.
    pub fn generation(&self) -> Generation {
        self.buf.generation()
    }

    /// This array's instance identifier.
    pub fn id(&self) -> ArrayId {
        self.id
    }

    /// The growth policy in effect.
    pub fn config(&self) -> &GrowthConfig {
        &self.config
    }

    /// Ensure at least `capacity` slots.
    ///
    /// If `capacity <= self.capacity()` nothing happens. Otherwise the
    /// buffer is reallocated to exactly `capacity` slots. Never changes the
    /// logical contents.
    pub fn reserve(&mut self, capacity: usize) {
        self.buf.reserve_exact(capacity);
    }

    /// Reduce capacity to the current length.
    pub fn shrink_to_fit(&mut self) {
        self.buf.shrink_to_fit();
    }
}

// ── Element access ─────────────────────────────────────────────

impl<T> DynamicArray<T> {
    /// Checked access.
    ///
    /// Returns [`ArrayError::OutOfRange`] if `pos >= len()`.
    pub fn at(&self, pos: usize) -> Result<&T, ArrayError> {
        let len = self.len();
        self.buf
            .as_slice()
            .get(pos)
            .ok_or(ArrayError::OutOfRange { pos, len })
    }

    /// Checked mutable access.
    pub fn at_mut(&mut self, pos: usize) -> Result<&mut T, ArrayError> {
        let len = self.len();
        self.buf
            .as_mut_slice()
            .get_mut(pos)
            .ok_or(ArrayError::OutOfRange { pos, len })
    }

    /// The element at `pos`, if any.
    pub fn get(&self, pos: usize) -> Option<&T> {
        self.buf.as_slice().get(pos)
    }

    /// Mutable element at `pos`, if any.
    pub fn get_mut(&mut self, pos: usize) -> Option<&mut T> {
        self.buf.as_mut_slice().get_mut(pos)
    }

    /// The first element.
    ///
    /// # Panics
    ///
    /// Panics if the array is empty. Use [`first`](Self::first) for an
    /// `Option`.
    pub fn front(&self) -> &T {
        match self.first() {
            Some(value) => value,
            None => panic!("front() called on an empty array"),
        }
    }

    /// The last element.
    ///
    /// # Panics
    ///
    /// Panics if the array is empty. Use [`last`](Self::last) for an
    /// `Option`.
    pub fn back(&self) -> &T {
        match self.last() {
            Some(value) => value,
            None => panic!("back() called on an empty array"),
        }
    }

    /// Mutable first element.
    ///
    /// # Panics
    ///
    /// Panics if the array is empty.
    pub fn front_mut(&mut self) -> &mut T {
        match self.buf.as_mut_slice().first_mut() {
            Some(value) => value,
            None => panic!("front_mut() called on an empty array"),
        }
    }

    /// Mutable last element.
    ///
    /// # Panics
    ///
    /// Panics if the array is empty.
    pub fn back_mut(&mut self) -> &mut T {
        match self.buf.as_mut_slice().last_mut() {
            Some(value) => value,
            None => panic!("back_mut() called on an empty array"),
        }
    }

    /// The first element, or `None` if empty.
    pub fn first(&self) -> Option<&T> {
        self.buf.as_slice().first()
    }

    /// The last element, or `None` if empty.
    pub fn last(&self) -> Option<&T> {
        self.buf.as_slice().last()
    }

    /// The logical elements as a slice.
    pub fn as_slice(&self) -> &[T] {
        self.buf.as_slice()
    }

    /// The logical elements as a mutable slice.
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        self.buf.as_mut_slice()
    }

    /// Consume the array, returning its elements.
    pub fn into_vec(self) -> Vec<T> {
        self.buf.into_vec()
    }
}

// ── Mutation at the ends ───────────────────────────────────────

impl<T> DynamicArray<T> {
    /// Append `value`. Amortized O(1).
    pub fn push_back(&mut self, value: T) {
        self.buf.grow_for_one(&self.config);
        self.buf.push(value);
    }

    /// Prepend `value`, shifting every element one slot later. O(n).
    pub fn push_front(&mut self, value: T) {
        self.buf.grow_for_one(&self.config);
        self.buf.insert(0, value);
    }

    /// Remove and return the last element. No-op on an empty array.
    pub fn pop_back(&mut self) -> Option<T> {
        self.buf.pop()
    }

    /// Remove and return the first element, shifting the rest one slot
    /// earlier. No-op on an empty array. O(n).
    pub fn pop_front(&mut self) -> Option<T> {
        if self.is_empty() {
            return None;
        }
        Some(self.buf.remove(0))
    }

    /// Drop all elements. Capacity is retained and cursors stay in the
    /// current generation.
    pub fn clear(&mut self) {
        self.buf.clear();
    }

    /// Replace the contents with `count` copies of `value`.
    ///
    /// Grows to exactly `count` slots if needed; never shrinks.
    pub fn assign(&mut self, count: usize, value: T)
    where
        T: Clone,
    {
        self.buf.clear();
        self.buf.reserve_exact(count);
        self.buf.extend_within(std::iter::repeat_n(value, count));
    }

    /// Replace the contents with a copy of `list`.
    ///
    /// Capacity becomes `factor * list.len()` to leave room for growth.
    pub fn assign_slice(&mut self, list: &[T])
    where
        T: Clone,
    {
        self.assign_iter(list.iter().cloned());
    }

    /// Replace the contents with the items of `iter`.
    ///
    /// Capacity becomes `factor * n` where `n` is the number of items.
    pub fn assign_iter<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        let items: Vec<T> = iter.into_iter().collect();
        let capacity = items.len().saturating_mul(self.config.factor);
        self.buf.clear();
        if capacity != self.buf.capacity() {
            self.buf.reallocate(capacity);
        }
        self.buf.extend_within(items);
    }
}

// ── Cursors ────────────────────────────────────────────────────

impl<T> DynamicArray<T> {
    /// Cursor at the first element (equal to `end()` when empty).
    pub fn begin(&self) -> Cursor {
        self.position(0)
    }

    /// Cursor one past the last element. Not dereferenceable.
    pub fn end(&self) -> Cursor {
        self.position(self.len())
    }

    /// Read-only cursor at the first element.
    pub fn cbegin(&self) -> ConstCursor {
        self.position(0)
    }

    /// Read-only cursor one past the last element.
    pub fn cend(&self) -> ConstCursor {
        self.position(self.len())
    }

    /// Cursor at `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index > len()`.
    pub fn cursor_at(&self, index: usize) -> Cursor {
        self.checked_position(index)
    }

    /// Read-only cursor at `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index > len()`.
    pub fn const_cursor_at(&self, index: usize) -> ConstCursor {
        self.checked_position(index)
    }

    /// Whether `cursor` was produced by this array in its current
    /// generation and lies within `[begin, end]`.
    pub fn is_valid<A: Access>(&self, cursor: Position<A>) -> bool {
        self.check_origin(&cursor).is_ok() && cursor.index <= self.len()
    }

    /// The element under `cursor`.
    ///
    /// # Panics
    ///
    /// Panics if the cursor is at or past `end()`. Debug builds also panic
    /// on stale or foreign cursors.
    pub fn value_at<A: Access>(&self, cursor: Position<A>) -> &T {
        let index = self.locate(cursor);
        &self.buf.as_slice()[index]
    }

    /// Mutable access to the element under `cursor`. Read-only cursors are
    /// rejected at compile time.
    ///
    /// # Panics
    ///
    /// As for [`value_at`](Self::value_at).
    pub fn value_at_mut(&mut self, cursor: Cursor) -> &mut T {
        let index = self.locate(cursor);
        &mut self.buf.as_mut_slice()[index]
    }

    /// Fully checked dereference.
    pub fn try_value_at<A: Access>(&self, cursor: Position<A>) -> Result<&T, ArrayError> {
        self.check_origin(&cursor)?;
        self.at(cursor.index)
    }

    /// Iterator over `[first, last)`.
    ///
    /// # Panics
    ///
    /// Panics if the range is reversed or extends past `end()`.
    pub fn range<A: Access, B: Access>(&self, first: Position<A>, last: Position<B>) -> Iter<'_, T> {
        Iter::new(self.span(first, last))
    }

    fn position<A: Access>(&self, index: usize) -> Position<A> {
        Position::new(self.id, self.buf.generation(), index)
    }

    fn checked_position<A: Access>(&self, index: usize) -> Position<A> {
        assert!(
            index <= self.len(),
            "cursor index {index} past end {}",
            self.len()
        );
        self.position(index)
    }

    fn check_origin<A: Access>(&self, cursor: &Position<A>) -> Result<(), ArrayError> {
        if cursor.array != self.id {
            return Err(ArrayError::ForeignCursor);
        }
        if cursor.generation != self.buf.generation() {
            return Err(ArrayError::StaleCursor {
                cursor_generation: cursor.generation,
                array_generation: self.buf.generation(),
            });
        }
        Ok(())
    }

    /// Resolve a cursor to an index. Provenance is only checked in debug
    /// builds.
    fn locate<A: Access>(&self, cursor: Position<A>) -> usize {
        #[cfg(debug_assertions)]
        {
            if let Err(err) = self.check_origin(&cursor) {
                panic!("invalid {cursor:?} for array {}: {err}", self.id);
            }
        }
        cursor.index
    }

    fn span<A: Access, B: Access>(&self, first: Position<A>, last: Position<B>) -> &[T] {
        let (f, l) = (self.locate(first), self.locate(last));
        assert!(f <= l, "reversed cursor range {f}..{l}");
        &self.buf.as_slice()[f..l]
    }
}

// ── Positional insert / erase ──────────────────────────────────

impl<T> DynamicArray<T> {
    /// Insert `value` before `pos`. Returns a cursor at the new element.
    ///
    /// # Panics
    ///
    /// Panics if `pos` is past `end()`.
    pub fn insert<A: Access>(&mut self, pos: Position<A>, value: T) -> Cursor {
        let index = self.insertion_index(pos);
        self.buf.grow_for_one(&self.config);
        self.buf.insert(index, value);
        self.position(index)
    }

    /// Insert the items of `iter` before `pos`, in order.
    ///
    /// Returns a cursor at the first inserted element, or at `pos` when
    /// `iter` is empty.
    ///
    /// # Panics
    ///
    /// Panics if `pos` is past `end()`.
    pub fn insert_iter<A, I>(&mut self, pos: Position<A>, iter: I) -> Cursor
    where
        A: Access,
        I: IntoIterator<Item = T>,
    {
        let index = self.insertion_index(pos);
        let items: Vec<T> = iter.into_iter().collect();
        if !items.is_empty() {
            self.buf.grow_for_bulk(items.len(), &self.config);
            self.buf.insert_many(index, items);
        }
        self.position(index)
    }

    /// Insert copies of `list` before `pos`.
    pub fn insert_slice<A: Access>(&mut self, pos: Position<A>, list: &[T]) -> Cursor
    where
        T: Clone,
    {
        self.insert_iter(pos, list.iter().cloned())
    }

    /// Insert copies of `source`'s `[first, last)` before `pos`.
    pub fn insert_range<A, B, C>(
        &mut self,
        pos: Position<A>,
        source: &DynamicArray<T>,
        first: Position<B>,
        last: Position<C>,
    ) -> Cursor
    where
        T: Clone,
        A: Access,
        B: Access,
        C: Access,
    {
        self.insert_slice(pos, source.span(first, last))
    }

    /// Remove the element at `pos`. Returns a cursor at the element that
    /// followed it.
    ///
    /// # Panics
    ///
    /// Panics if `pos` is at or past `end()`.
    pub fn erase<A: Access>(&mut self, pos: Position<A>) -> Cursor {
        let index = self.locate(pos);
        assert!(
            index < self.len(),
            "erase position {index} out of range for length {}",
            self.len()
        );
        drop(self.buf.remove(index));
        self.position(index)
    }

    /// Remove `[first, last)`. Returns a cursor at the element that followed
    /// the range.
    ///
    /// # Panics
    ///
    /// Panics if the range is reversed or extends past `end()`.
    pub fn erase_range<A: Access, B: Access>(
        &mut self,
        first: Position<A>,
        last: Position<B>,
    ) -> Cursor {
        let (f, l) = (self.locate(first), self.locate(last));
        assert!(
            f <= l && l <= self.len(),
            "erase range {f}..{l} invalid for length {}",
            self.len()
        );
        self.buf.remove_range(f..l);
        self.position(f)
    }

    fn insertion_index<A: Access>(&self, pos: Position<A>) -> usize {
        let index = self.locate(pos);
        assert!(
            index <= self.len(),
            "insertion position {index} past end {}",
            self.len()
        );
        index
    }
}

// ── Iteration and rendering ────────────────────────────────────

impl<T> DynamicArray<T> {
    /// Iterator over the logical elements.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter::new(self.buf.as_slice())
    }

    /// Mutable iterator over the logical elements.
    pub fn iter_mut(&mut self) -> IterMut<'_, T> {
        IterMut::new(self.buf.as_mut_slice())
    }

    /// Every storage slot, occupied then vacant.
    pub fn slots(&self) -> Slots<'_, T> {
        Slots::new(self.buf.as_slice(), self.buf.capacity())
    }

    /// Display adapter showing elements and unused capacity, e.g.
    /// `[1, 2 | _, _]`.
    pub fn render(&self) -> Render<'_, T> {
        Render::new(self.slots())
    }
}

// ── Trait impls ────────────────────────────────────────────────

impl<T> Default for DynamicArray<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// Deep copy with the same capacity and growth config. The copy gets a new
/// [`ArrayId`], so cursors of the source do not apply to it.
impl<T: Clone> Clone for DynamicArray<T> {
    fn clone(&self) -> Self {
        Self::from_buffer(self.buf.duplicate(), self.config)
    }

    /// Copy assignment: reuses this array's buffer when `source` fits.
    fn clone_from(&mut self, source: &Self) {
        self.buf.copy_from(source.as_slice());
        self.config = source.config;
    }
}

impl<T: fmt::Debug> fmt::Debug for DynamicArray<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T, U> PartialEq<DynamicArray<U>> for DynamicArray<T>
where
    T: PartialEq<U>,
{
    fn eq(&self, other: &DynamicArray<U>) -> bool {
        self.as_slice() == other.as_slice()
    }
}

impl<T: Eq> Eq for DynamicArray<T> {}

impl<T, U, const N: usize> PartialEq<[U; N]> for DynamicArray<T>
where
    T: PartialEq<U>,
{
    fn eq(&self, other: &[U; N]) -> bool {
        self.as_slice() == other.as_slice()
    }
}

impl<T, U> PartialEq<[U]> for DynamicArray<T>
where
    T: PartialEq<U>,
{
    fn eq(&self, other: &[U]) -> bool {
        self.as_slice() == other
    }
}

impl<T, U> PartialEq<&[U]> for DynamicArray<T>
where
    T: PartialEq<U>,
{
    fn eq(&self, other: &&[U]) -> bool {
        self.as_slice() == *other
    }
}

impl<T, U> PartialEq<Vec<U>> for DynamicArray<T>
where
    T: PartialEq<U>,
{
    fn eq(&self, other: &Vec<U>) -> bool {
        self.as_slice() == other.as_slice()
    }
}

impl<T: Hash> Hash for DynamicArray<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.as_slice().hash(state);
    }
}

/// Unchecked by contract: `pos >= len()` panics.
impl<T> Index<usize> for DynamicArray<T> {
    type Output = T;

    fn index(&self, pos: usize) -> &T {
        &self.buf.as_slice()[pos]
    }
}

impl<T> IndexMut<usize> for DynamicArray<T> {
    fn index_mut(&mut self, pos: usize) -> &mut T {
        &mut self.buf.as_mut_slice()[pos]
    }
}

impl<T> AsRef<[T]> for DynamicArray<T> {
    fn as_ref(&self) -> &[T] {
        self.as_slice()
    }
}

impl<T> AsMut<[T]> for DynamicArray<T> {
    fn as_mut(&mut self) -> &mut [T] {
        self.as_mut_slice()
    }
}

impl<T> From<Vec<T>> for DynamicArray<T> {
    fn from(v: Vec<T>) -> Self {
        Self::from_buffer(Buffer::from_vec(v), GrowthConfig::default())
    }
}

impl<T, const N: usize> From<[T; N]> for DynamicArray<T> {
    fn from(list: [T; N]) -> Self {
        Self::from(Vec::from(list))
    }
}

impl<T: Clone> From<&[T]> for DynamicArray<T> {
    fn from(list: &[T]) -> Self {
        Self::from(list.to_vec())
    }
}

impl<T> From<DynamicArray<T>> for Vec<T> {
    fn from(array: DynamicArray<T>) -> Self {
        array.into_vec()
    }
}

impl<T> FromIterator<T> for DynamicArray<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::from(iter.into_iter().collect::<Vec<T>>())
    }
}

impl<T> Extend<T> for DynamicArray<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.push_back(value);
        }
    }
}

impl<'a, T: Copy + 'a> Extend<&'a T> for DynamicArray<T> {
    fn extend<I: IntoIterator<Item = &'a T>>(&mut self, iter: I) {
        self.extend(iter.into_iter().copied());
    }
}

impl<T> IntoIterator for DynamicArray<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> IntoIter<T> {
        IntoIter::new(self.buf.into_vec())
    }
}

impl<'a, T> IntoIterator for &'a DynamicArray<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Iter<'a, T> {
        self.iter()
    }
}

impl<'a, T> IntoIterator for &'a mut DynamicArray<T> {
    type Item = &'a mut T;
    type IntoIter = IterMut<'a, T>;

    fn into_iter(self) -> IterMut<'a, T> {
        self.iter_mut()
    }
}
