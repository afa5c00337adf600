#[cfg(feature = "serialization")]
use serde::{Deserialize, Serialize};

use crate::sprite::{Vertex, VERTICES_PER_QUAD};

/// Capacity limits for a [`SpriteBatch`](crate::sprite::SpriteBatch),
/// measured in quads.
///
/// The vertex buffer starts at `initial_capacity` quads and doubles whenever
/// it fills up, never growing past `max_capacity`. The buffer is never
/// shrunk.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serialization", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serialization", serde(default))]
pub struct BatchConfig {
    initial_capacity: usize,
    max_capacity: usize,
}

impl Default for BatchConfig {
    fn default() -> Self {
        Self {
            initial_capacity: Self::DEFAULT_INITIAL_CAPACITY,
            max_capacity: Self::DEFAULT_MAX_CAPACITY,
        }
    }
}

impl BatchConfig {
    /// The number of quads a batch can hold before its first reallocation.
    pub const DEFAULT_INITIAL_CAPACITY: usize = 32;
    /// The largest number of quads a batch can hold in one cycle.
    pub const DEFAULT_MAX_CAPACITY: usize = 16_384;
    /// The most quads any configuration allows. A vertex buffer this large
    /// still has a byte length that fits in an `isize`.
    pub const CAPACITY_LIMIT: usize =
        (usize::MAX >> 1) / (VERTICES_PER_QUAD * std::mem::size_of::<Vertex>());

    /// Returns a configuration with the given limits, normalized with
    /// [`BatchConfig::normalized`].
    #[must_use]
    pub fn new(initial_capacity: usize, max_capacity: usize) -> Self {
        Self {
            initial_capacity,
            max_capacity,
        }
        .normalized()
    }

    /// Sets the initial capacity, in quads.
    #[must_use]
    pub fn with_initial_capacity(mut self, initial_capacity: usize) -> Self {
        self.initial_capacity = initial_capacity;
        self.normalized()
    }

    /// Sets the maximum capacity, in quads.
    #[must_use]
    pub fn with_max_capacity(mut self, max_capacity: usize) -> Self {
        self.max_capacity = max_capacity;
        self.normalized()
    }

    /// The number of quads allocated up front.
    #[must_use]
    pub const fn initial_capacity(&self) -> usize {
        self.initial_capacity
    }

    /// The hard ceiling on buffer growth, in quads.
    #[must_use]
    pub const fn max_capacity(&self) -> usize {
        self.max_capacity
    }

    /// Returns a copy where both limits are at least one quad, neither exceeds
    /// [`BatchConfig::CAPACITY_LIMIT`], and the initial capacity does not
    /// exceed the maximum. Deserialized configurations are
    /// not normalized until they reach a batch.
    #[must_use]
    pub fn normalized(self) -> Self {
        let max_capacity = self.max_capacity.max(1).min(Self::CAPACITY_LIMIT);
        let initial_capacity = self.initial_capacity.max(1).min(max_capacity);
        if max_capacity != self.max_capacity || initial_capacity != self.initial_capacity {
            tracing::warn!(
                requested_initial = self.initial_capacity,
                requested_max = self.max_capacity,
                initial_capacity,
                max_capacity,
                "sprite batch capacity adjusted"
            );
        }
        Self {
            initial_capacity,
            max_capacity,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let config = BatchConfig::default();
        assert_eq!(config.initial_capacity(), 32);
        assert_eq!(config.max_capacity(), 16_384);
        assert_eq!(config, config.normalized());
    }

    #[test]
    fn zero_is_raised_to_one() {
        let config = BatchConfig::new(0, 0);
        assert_eq!(config.initial_capacity(), 1);
        assert_eq!(config.max_capacity(), 1);
    }

    #[test]
    fn initial_is_clamped_to_max() {
        let config = BatchConfig::default()
            .with_max_capacity(8)
            .with_initial_capacity(64);
        assert_eq!(config.initial_capacity(), 8);
        assert_eq!(config.max_capacity(), 8);
    }

    #[test]
    fn lowering_max_drags_initial_down() {
        let config = BatchConfig::new(32, 1024).with_max_capacity(16);
        assert_eq!(config.initial_capacity(), 16);
    }

    #[test]
    fn huge_limits_are_clamped_so_buffer_sizes_cannot_overflow() {
        let config = BatchConfig::new(usize::MAX / 2, usize::MAX);
        assert_eq!(config.max_capacity(), BatchConfig::CAPACITY_LIMIT);
        assert_eq!(config.initial_capacity(), BatchConfig::CAPACITY_LIMIT);
        let bytes = config
            .max_capacity()
            .checked_mul(VERTICES_PER_QUAD * std::mem::size_of::<Vertex>());
        assert!(bytes.map_or(false, |bytes| bytes <= usize::MAX >> 1));
        assert_eq!(
            BatchConfig::default().with_max_capacity(usize::MAX).initial_capacity(),
            32
        );
    }
}
