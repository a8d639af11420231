//! Position handles into a [`DynamicArray`](crate::DynamicArray).
//!
//! A cursor is a plain `Copy` value: the producing array's [`ArrayId`], the
//! [`Generation`] it was created in, and an index. It borrows nothing, so
//! holding one never blocks mutation of the array. Instead, every
//! reallocation advances the array's generation and all earlier cursors
//! become stale.
//!
//! Two flavours share one representation:
//!
//! - [`Cursor`] (from `begin`/`end`) may be used for mutable access.
//! - [`ConstCursor`] (from `cbegin`/`cend`) is read-only.
//!
//! A `Cursor` converts into a `ConstCursor`, never the other way round.
//!
//! Arithmetic follows pointer rules: stepping is unchecked until the cursor
//! is dereferenced, except that moving before index 0 panics (an index
//! cannot represent it).

use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::marker::PhantomData;
use std::ops::{Add, AddAssign, Sub, SubAssign};

use crate::id::{ArrayId, Generation};

mod sealed {
    pub trait Sealed {}
}

/// Access level carried by a [`Position`].
pub trait Access: sealed::Sealed {
    /// Short name used in `Debug` output.
    const NAME: &'static str;
}

/// Marker for cursors that permit mutable access.
#[derive(Debug)]
pub enum Mutable {}

/// Marker for read-only cursors.
#[derive(Debug)]
pub enum ReadOnly {}

impl sealed::Sealed for Mutable {}
impl sealed::Sealed for ReadOnly {}

impl Access for Mutable {
    const NAME: &'static str = "Cursor";
}

impl Access for ReadOnly {
    const NAME: &'static str = "ConstCursor";
}

/// A position within a specific array generation.
pub struct Position<A: Access> {
    pub(crate) array: ArrayId,
    pub(crate) generation: Generation,
    pub(crate) index: usize,
    _access: PhantomData<fn() -> A>,
}

/// Mutable position handle.
pub type Cursor = Position<Mutable>;

/// Read-only position handle.
pub type ConstCursor = Position<ReadOnly>;

impl<A: Access> Position<A> {
    pub(crate) fn new(array: ArrayId, generation: Generation, index: usize) -> Self {
        Self {
            array,
            generation,
            index,
            _access: PhantomData,
        }
    }

    /// Index this cursor refers to.
    pub fn index(&self) -> usize {
        self.index
    }

    /// Generation of the array when this cursor was created.
    pub fn generation(&self) -> Generation {
        self.generation
    }

    /// Identifier of the array that produced this cursor.
    pub fn array_id(&self) -> ArrayId {
        self.array
    }

    /// Step forward one element (`++it`).
    pub fn advance(&mut self) -> &mut Self {
        *self += 1;
        self
    }

    /// Step back one element (`--it`).
    ///
    /// # Panics
    ///
    /// Panics if the cursor is already at index 0.
    pub fn retreat(&mut self) -> &mut Self {
        *self -= 1;
        self
    }

    /// Copy of this cursor moved by `n` elements.
    pub fn offset(self, n: isize) -> Self {
        let index = match self.index.checked_add_signed(n) {
            Some(index) => index,
            None => panic!("cursor at {} moved by {n} leaves the array", self.index),
        };
        Self::new(self.array, self.generation, index)
    }

    /// Signed number of steps from this cursor to `other` (`other - self`).
    ///
    /// Both cursors must come from the same array generation; debug builds
    /// assert this.
    pub fn distance_to(self, other: Self) -> isize {
        debug_assert!(
            self.same_origin(&other),
            "distance between cursors of different arrays or generations"
        );
        (other.index as isize).wrapping_sub(self.index as isize)
    }

    /// Whether `other` was produced by the same array in the same generation.
    pub fn same_origin<B: Access>(&self, other: &Position<B>) -> bool {
        self.array == other.array && self.generation == other.generation
    }
}

impl From<Cursor> for ConstCursor {
    fn from(c: Cursor) -> Self {
        Self::new(c.array, c.generation, c.index)
    }
}

impl<A: Access> Clone for Position<A> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<A: Access> Copy for Position<A> {}

impl<A: Access> fmt::Debug for Position<A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct(A::NAME)
            .field("array", &self.array)
            .field("generation", &self.generation)
            .field("index", &self.index)
            .finish()
    }
}

impl<A: Access> PartialEq for Position<A> {
    fn eq(&self, other: &Self) -> bool {
        self.same_origin(other) && self.index == other.index
    }
}

impl<A: Access> Eq for Position<A> {}

impl<A: Access> Hash for Position<A> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.array.hash(state);
        self.generation.hash(state);
        self.index.hash(state);
    }
}

/// Cursors of different arrays or generations are unordered.
impl<A: Access> PartialOrd for Position<A> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        if self.same_origin(other) {
            Some(self.index.cmp(&other.index))
        } else {
            None
        }
    }
}

impl<A: Access> Add<isize> for Position<A> {
    type Output = Self;

    fn add(self, n: isize) -> Self {
        self.offset(n)
    }
}

impl<A: Access> Sub<isize> for Position<A> {
    type Output = Self;

    fn sub(self, n: isize) -> Self {
        match n.checked_neg() {
            Some(neg) => self.offset(neg),
            None => panic!("cursor offset {n} cannot be negated"),
        }
    }
}

impl<A: Access> AddAssign<isize> for Position<A> {
    fn add_assign(&mut self, n: isize) {
        *self = *self + n;
    }
}

impl<A: Access> SubAssign<isize> for Position<A> {
    fn sub_assign(&mut self, n: isize) {
        *self = *self - n;
    }
}
