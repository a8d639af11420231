//! Array instance identifiers and reallocation generations.

use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

/// Counter for unique [`ArrayId`] allocation.
static ARRAY_INSTANCE_COUNTER: AtomicU64 = AtomicU64::new(1);

/// Unique per-instance identifier for a `DynamicArray`.
///
/// Allocated from a monotonic atomic counter. Two arrays never share an
/// ID, even when one is a clone of the other, so a cursor can always tell
/// which array produced it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ArrayId(u64);

impl ArrayId {
    /// Allocate a fresh, unique instance ID. Thread-safe.
    pub fn next() -> Self {
        Self(ARRAY_INSTANCE_COUNTER.fetch_add(1, Ordering::Relaxed))
    }
}

impl fmt::Display for ArrayId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Reallocation counter of a single array.
///
/// Starts at 0 and advances each time the array replaces its buffer.
/// Cursors record the generation they were created in.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Generation(pub u64);

impl Generation {
    /// The generation following this one.
    pub(crate) fn advanced(self) -> Self {
        Self(self.0.wrapping_add(1))
    }
}

impl fmt::Display for Generation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn array_ids_are_unique() {
        let a = ArrayId::next();
        let b = ArrayId::next();
        assert_ne!(a, b);
        assert!(b > a);
    }

    #[test]
    fn generation_advances() {
        let g = Generation::default();
        assert_eq!(g, Generation(0));
        assert_eq!(g.advanced(), Generation(1));
        assert_eq!(Generation(u64::MAX).advanced(), Generation(0));
    }
}
