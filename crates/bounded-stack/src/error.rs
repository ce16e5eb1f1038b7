//! # Error Types
//!
//! Error types for bounded-stack.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  StackError        - Every operation on a stack                         │
//! │  ├── InvalidValue  - wraps ValueError (empty / too long)                │
//! │  ├── StackFull     - ceiling reached                                    │
//! │  ├── StackEmpty    - pop/peek with nothing stored                       │
//! │  ├── OutOfMemory   - buffer could not be allocated                      │
//! │  └── UseAfterRelease - handle already freed (status API)                │
//! │                                                                         │
//! │  ConfigError       - StackLimits rejected at construction               │
//! │                                                                         │
//! │  Flow: ValueError → StackError → ResponseCode (status module)           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Recovery
//! Every error is reported synchronously and leaves the stack exactly as it
//! was before the call. None of them is fatal; the caller decides.

use thiserror::Error;

// =============================================================================
// Stack Error
// =============================================================================

/// Errors returned by stack operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StackError {
    /// The pushed value was rejected before touching the stack.
    #[error("invalid value: {0}")]
    InvalidValue(#[from] ValueError),

    /// Push while every slot up to the ceiling is occupied.
    ///
    /// ## When This Occurs
    /// - `size == capacity == maximum`
    /// - Growth is no longer possible, so the value is refused
    #[error("stack is full (maximum capacity {max})")]
    StackFull { max: usize },

    /// Pop or peek on a stack holding no entries.
    #[error("stack is empty")]
    StackEmpty,

    /// The backing buffer could not be allocated.
    ///
    /// ## When This Occurs
    /// - Construction: the starting buffer could not be reserved
    /// - Growth: the doubled buffer could not be reserved; the push fails
    ///   and the stack keeps its pre-growth buffer
    #[error("out of memory allocating {requested} slots")]
    OutOfMemory { requested: usize },

    /// Operation on a handle whose stack was already released.
    #[error("stack has been released")]
    UseAfterRelease,
}

// =============================================================================
// Value Error
// =============================================================================

/// Reasons a string cannot become an [`Entry`](crate::Entry).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValueError {
    /// Zero-length value.
    #[error("empty")]
    Empty,

    /// Value longer than the entry limit, in bytes.
    #[error("too long ({len} bytes, maximum {max})")]
    TooLong { len: usize, max: usize },
}

// =============================================================================
// Config Error
// =============================================================================

/// Rejected [`StackLimits`](crate::StackLimits).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// Starting capacity of zero would leave nothing to double.
    #[error("starting capacity must be greater than 0")]
    ZeroStartingCapacity,

    /// Starting capacity above the configured ceiling.
    #[error("starting capacity {starting} exceeds maximum capacity {maximum}")]
    StartingAboveMaximum { starting: usize, maximum: usize },

    /// Configured ceiling above the absolute ceiling.
    #[error("maximum capacity {maximum} exceeds the absolute limit {limit}")]
    MaximumAboveLimit { maximum: usize, limit: usize },
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with StackError.
pub type StackResult<T> = Result<T, StackError>;

// =============================================================================
// Unit Tests
// =============================================================================
