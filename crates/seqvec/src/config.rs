//! Growth configuration for [`DynamicArray`](crate::DynamicArray).

use crate::error::ConfigError;

/// Controls how an array's capacity grows when an organic insertion
/// (`push_back`, `push_front`, `insert`) finds the buffer full.
///
/// Explicit construction and `reserve` never consult this config; they
/// allocate exactly what was asked for.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GrowthConfig {
    /// Multiplier applied to the current capacity on growth.
    ///
    /// Default: 2. Must be at least 2, otherwise a full buffer could
    /// "grow" to its own size.
    pub factor: usize,

    /// Capacity used when growing from an empty (capacity 0) buffer.
    ///
    /// Default: 1. Must be non-zero so the first push always makes room.
    pub min_capacity: usize,
}

impl GrowthConfig {
    /// Default growth multiplier (doubling).
    pub const DEFAULT_FACTOR: usize = 2;

    /// Default capacity for the first allocation.
    pub const DEFAULT_MIN_CAPACITY: usize = 1;

    /// Create a validated growth config.
    pub fn new(factor: usize, min_capacity: usize) -> Result<Self, ConfigError> {
        if factor < 2 {
            return Err(ConfigError::FactorTooSmall { factor });
        }
        if min_capacity == 0 {
            return Err(ConfigError::ZeroMinCapacity);
        }
        Ok(Self {
            factor,
            min_capacity,
        })
    }

    /// The capacity a full buffer of `current` slots grows to.
    ///
    /// Saturates at `usize::MAX` instead of overflowing.
    pub fn grown_capacity(&self, current: usize) -> usize {
        current
            .saturating_mul(self.factor)
            .max(self.min_capacity)
    }

    /// Capacity to allocate when `required` slots are needed in one go.
    ///
    /// Bulk inserts leave `factor - 1` times the requirement as headroom.
    pub fn headroom_for(&self, required: usize) -> usize {
        required
            .saturating_mul(self.factor)
            .max(self.min_capacity)
    }
}

impl Default for GrowthConfig {
    fn default() -> Self {
        Self {
            factor: Self::DEFAULT_FACTOR,
            min_capacity: Self::DEFAULT_MIN_CAPACITY,
        }
    }
}
