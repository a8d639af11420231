//! Growable contiguous sequence container.
//!
//! [`DynamicArray`] owns a single block of storage with an explicit logical
//! length and capacity. It supports insertion and removal at both ends and
//! at arbitrary positions, random access, capacity management, and two
//! kinds of position handle:
//!
//! - Rust iterators ([`Iter`], [`IterMut`], [`IntoIter`]) that borrow the
//!   array for their lifetime.
//! - Cursors ([`Cursor`], [`ConstCursor`]) that borrow nothing and are
//!   checked against the array's reallocation [`Generation`].
//!
//! # Architecture
//!
//! ```text
//! DynamicArray<T>
//! ├── Buffer<T>      (Vec-backed block, accounted capacity, generation)
//! ├── ArrayId        (process-unique, from an atomic counter)
//! └── GrowthConfig   (factor + minimum capacity for organic growth)
//!
//! Position<A: Access> = (ArrayId, Generation, index)
//! ├── Cursor         = Position<Mutable>
//! └── ConstCursor    = Position<ReadOnly>
//! ```
//!
//! # Error model
//!
//! Only [`DynamicArray::at`], [`DynamicArray::at_mut`] and
//! [`DynamicArray::try_value_at`] return errors ([`ArrayError`]). Indexing,
//! `front`/`back` on an empty array, and out-of-range cursors are caller
//! contract violations and panic. Stale or foreign cursors are additionally
//! caught in debug builds.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod array;
mod buffer;
pub mod config;
pub mod cursor;
pub mod error;
pub mod id;
pub mod iter;
pub mod render;

pub use array::DynamicArray;
pub use config::GrowthConfig;
pub use cursor::{ConstCursor, Cursor, Position};
pub use error::{ArrayError, ConfigError};
pub use id::{ArrayId, Generation};
pub use iter::{IntoIter, Iter, IterMut};
pub use render::{Render, Slot, Slots};

/// Build a [`DynamicArray`] from a literal list, exact-fit.
///
/// ```
/// use seqvec::seqvec;
///
/// let v = seqvec![1, 2, 3];
/// assert_eq!(v.capacity(), 3);
///
/// let zeros = seqvec![0u8; 4];
/// assert_eq!(zeros, [0, 0, 0, 0]);
///
/// let empty: seqvec::DynamicArray<i32> = seqvec![];
/// assert!(empty.is_empty());
/// ```
#[macro_export]
macro_rules! seqvec {
    () => {
        $crate::DynamicArray::new()
    };
    ($elem:expr; $n:expr) => {
        $crate::DynamicArray::from_elem($elem, $n)
    };
    ($($x:expr),+ $(,)?) => {
        $crate::DynamicArray::from([$($x),+])
    };
}
