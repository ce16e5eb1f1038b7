//! # Stack Limits
//!
//! Construction-time capacity configuration.
//!
//! ## Configuration Sources
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Where Limits Come From                               │
//! │                                                                         │
//! │  1. StackLimits::new(starting, maximum)   (validated)                   │
//! │                                                                         │
//! │  2. A host application's config file, deserialized with serde           │
//! │     (routed through the same validation)                                │
//! │                                                                         │
//! │  3. StackLimits::default()                                              │
//! │     STARTING_CAPACITY = 16, MAXIMUM_CAPACITY = 65536                    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! This crate never reads files or environment variables itself.
//!
//! ## Configuration File Format
//! ```toml
//! [stack]
//! starting_capacity = 16
//! maximum_capacity = 65536
//! ```

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::{MAXIMUM_CAPACITY, STARTING_CAPACITY};

/// Capacity bounds for one [`BoundedStack`](crate::BoundedStack).
///
/// Fields are private: every `StackLimits` in existence satisfies
/// `0 < starting_capacity <= maximum_capacity <= MAXIMUM_CAPACITY`.
///
/// ## Example
/// ```rust
/// use bounded_stack::StackLimits;
///
/// let limits = StackLimits::new(4, 64).unwrap();
/// assert_eq!(limits.starting_capacity(), 4);
/// assert_eq!(limits.maximum_capacity(), 64);
///
/// assert!(StackLimits::new(0, 64).is_err());
/// assert!(StackLimits::new(128, 64).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawLimits")]
pub struct StackLimits {
    starting_capacity: usize,
    maximum_capacity: usize,
}

/// Unvalidated mirror used by serde.
#[derive(Deserialize)]
struct RawLimits {
    #[serde(default = "default_starting_capacity")]
    starting_capacity: usize,
    #[serde(default = "default_maximum_capacity")]
    maximum_capacity: usize,
}

fn default_starting_capacity() -> usize {
    STARTING_CAPACITY
}

fn default_maximum_capacity() -> usize {
    MAXIMUM_CAPACITY
}

impl TryFrom<RawLimits> for StackLimits {
    type Error = ConfigError;

    fn try_from(raw: RawLimits) -> Result<Self, Self::Error> {
        StackLimits::new(raw.starting_capacity, raw.maximum_capacity)
    }
}

impl Default for StackLimits {
    fn default() -> Self {
        StackLimits {
            starting_capacity: STARTING_CAPACITY,
            maximum_capacity: MAXIMUM_CAPACITY,
        }
    }
}

impl StackLimits {
    /// Creates validated limits.
    pub fn new(starting_capacity: usize, maximum_capacity: usize) -> Result<Self, ConfigError> {
        let limits = StackLimits {
            starting_capacity,
            maximum_capacity,
        };
        limits.validate()?;
        Ok(limits)
    }

    /// Validates the limits.
    fn validate(&self) -> Result<(), ConfigError> {
        if self.starting_capacity == 0 {
            return Err(ConfigError::ZeroStartingCapacity);
        }

        if self.maximum_capacity > MAXIMUM_CAPACITY {
            return Err(ConfigError::MaximumAboveLimit {
                maximum: self.maximum_capacity,
                limit: MAXIMUM_CAPACITY,
            });
        }

        if self.starting_capacity > self.maximum_capacity {
            return Err(ConfigError::StartingAboveMaximum {
                starting: self.starting_capacity,
                maximum: self.maximum_capacity,
            });
        }

        Ok(())
    }

    /// Slot count allocated at construction.
    #[inline]
    pub const fn starting_capacity(&self) -> usize {
        self.starting_capacity
    }

    /// Ceiling that capacity never exceeds.
    #[inline]
    pub const fn maximum_capacity(&self) -> usize {
        self.maximum_capacity
    }

    /// Next capacity when growing from `current`.
    ///
    /// Doubles, clamped to the ceiling. A released (zero-capacity) buffer
    /// grows back to the starting capacity. Returns `None` when `current` is
    /// already at the ceiling.
    ///
    /// ```rust
    /// use bounded_stack::StackLimits;
    ///
    /// let limits = StackLimits::default();
    /// assert_eq!(limits.next_capacity(16), Some(32));
    /// assert_eq!(limits.next_capacity(49152), Some(65536));
    /// assert_eq!(limits.next_capacity(65536), None);
    /// assert_eq!(limits.next_capacity(0), Some(16));
    /// ```
    pub fn next_capacity(&self, current: usize) -> Option<usize> {
        if current >= self.maximum_capacity {
            return None;
        }
        if current == 0 {
            return Some(self.starting_capacity);
        }
        Some(current.saturating_mul(2).min(self.maximum_capacity))
    }
}
