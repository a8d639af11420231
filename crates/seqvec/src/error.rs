//! Error types for checked array access and configuration.

use std::error::Error;
use std::fmt;

use crate::id::Generation;

/// Errors returned by the checked accessors of
/// [`DynamicArray`](crate::DynamicArray).
///
/// Only `at`, `at_mut` and `try_deref` report errors. Everything else
/// treats misuse as a caller contract violation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ArrayError {
    /// A position at or beyond the logical length.
    OutOfRange {
        /// The requested position.
        pos: usize,
        /// The array's logical length at the time of the call.
        len: usize,
    },
    /// A cursor obtained before the array last reallocated.
    StaleCursor {
        /// The generation encoded in the cursor.
        cursor_generation: Generation,
        /// The array's current generation.
        array_generation: Generation,
    },
    /// A cursor that was obtained from a different array.
    ForeignCursor,
}

impl fmt::Display for ArrayError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OutOfRange { pos, len } => {
                write!(f, "position {pos} out of range for length {len}")
            }
            Self::StaleCursor {
                cursor_generation,
                array_generation,
            } => {
                write!(
                    f,
                    "stale cursor: generation {cursor_generation}, array is at {array_generation}"
                )
            }
            Self::ForeignCursor => write!(f, "cursor belongs to a different array"),
        }
    }
}

impl Error for ArrayError {}

/// Errors from [`GrowthConfig::new`](crate::GrowthConfig::new).
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ConfigError {
    /// Growth factor below 2 would stall growth of a full buffer.
    FactorTooSmall {
        /// The rejected factor.
        factor: usize,
    },
    /// A zero minimum capacity would stall growth of an empty buffer.
    ZeroMinCapacity,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::FactorTooSmall { factor } => {
                write!(f, "growth factor {factor} is too small (minimum 2)")
            }
            Self::ZeroMinCapacity => write!(f, "minimum capacity must be non-zero"),
        }
    }
}

impl Error for ConfigError {}
