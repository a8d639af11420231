//! Debug rendering of an array's storage, occupied and vacant slots alike.
//!
//! ```text
//! [10, 20, 30 | _, _]
//! ```
//!
//! Logical elements come first, then one `_` per unused capacity slot.
//! This is a diagnostic view, not a stable format.

use std::fmt;
use std::iter::FusedIterator;
use std::slice;

/// One storage slot as seen by [`Slots`].
#[derive(Debug, PartialEq, Eq)]
pub enum Slot<'a, T> {
    /// A logical element.
    Occupied(&'a T),
    /// Allocated but unused capacity.
    Vacant,
}

impl<T> Clone for Slot<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Slot<'_, T> {}

/// Lazy walk over every slot of an array's buffer.
///
/// Yields exactly `capacity()` items. Cloning restarts from the same point.
#[derive(Debug)]
pub struct Slots<'a, T> {
    occupied: slice::Iter<'a, T>,
    vacant: usize,
}

impl<T> Clone for Slots<'_, T> {
    fn clone(&self) -> Self {
        Self {
            occupied: self.occupied.clone(),
            vacant: self.vacant,
        }
    }
}

impl<'a, T> Slots<'a, T> {
    pub(crate) fn new(elements: &'a [T], capacity: usize) -> Self {
        debug_assert!(capacity >= elements.len());
        Self {
            occupied: elements.iter(),
            vacant: capacity - elements.len(),
        }
    }
}

impl<'a, T> Iterator for Slots<'a, T> {
    type Item = Slot<'a, T>;

    fn next(&mut self) -> Option<Slot<'a, T>> {
        if let Some(value) = self.occupied.next() {
            return Some(Slot::Occupied(value));
        }
        if self.vacant > 0 {
            self.vacant -= 1;
            return Some(Slot::Vacant);
        }
        None
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = self.occupied.len() + self.vacant;
        (n, Some(n))
    }
}

impl<T> ExactSizeIterator for Slots<'_, T> {}
impl<T> FusedIterator for Slots<'_, T> {}

/// `Display` adapter returned by
/// [`DynamicArray::render`](crate::DynamicArray::render).
pub struct Render<'a, T> {
    slots: Slots<'a, T>,
}

impl<'a, T> Render<'a, T> {
    pub(crate) fn new(slots: Slots<'a, T>) -> Self {
        Self { slots }
    }
}

impl<T: fmt::Display> fmt::Display for Render<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[")?;
        let mut occupied = 0usize;
        let mut vacant = 0usize;
        for slot in self.slots.clone() {
            match slot {
                Slot::Occupied(value) => {
                    if occupied > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{value}")?;
                    occupied += 1;
                }
                Slot::Vacant => {
                    if vacant == 0 {
                        f.write_str(if occupied > 0 { " | " } else { "| " })?;
                    } else {
                        f.write_str(", ")?;
                    }
                    f.write_str("_")?;
                    vacant += 1;
                }
            }
        }
        f.write_str("]")
    }
}

impl<T: fmt::Display> fmt::Debug for Render<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}
