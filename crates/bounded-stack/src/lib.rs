//! # bounded-stack: A Bounded, Growable String Stack
//!
//! This crate provides a LIFO container over short strings. The buffer starts
//! small, doubles when it runs out of room, and stops at a hard ceiling.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        bounded-stack Architecture                       │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                    Callers                                      │   │
//! │  │     typed errors (Result)        status codes (handle)          │   │
//! │  └──────────────┬──────────────────────────────┬───────────────────┘   │
//! │                 │                              │                        │
//! │  ┌──────────────▼──────────────┐  ┌────────────▼───────────────────┐   │
//! │  │        BoundedStack         │◄─┤   StackHandle (status module)  │   │
//! │  │  push / pop / peek / take   │  │   push / pop / peek / free     │   │
//! │  └──────────────┬──────────────┘  └────────────────────────────────┘   │
//! │                 │                                                       │
//! │  ┌──────────────▼──────────────┐  ┌────────────────────────────────┐   │
//! │  │   Entry (1..=16 bytes)      │  │   StackLimits (16 .. 65536)    │   │
//! │  │   validated on creation     │  │   validated on creation        │   │
//! │  └─────────────────────────────┘  └────────────────────────────────┘   │
//! │                                                                         │
//! │   NO I/O • NO LOCKING • ONE OWNER PER ENTRY                             │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`stack`] - The [`BoundedStack`] itself
//! - [`entry`] - The [`Entry`] value type stored in each slot
//! - [`limits`] - Construction-time capacity configuration
//! - [`status`] - Status-code presentation ([`StackHandle`], [`ResponseCode`])
//! - [`validation`] - Entry validation rules
//! - [`error`] - Error types
//!
//! ## Example Usage
//!
//! ```rust
//! use bounded_stack::{BoundedStack, StackError};
//!
//! let mut stack = BoundedStack::new().unwrap();
//! stack.push("a").unwrap();
//! stack.push("b").unwrap();
//!
//! assert_eq!(stack.peek().unwrap(), "b");
//! assert_eq!(stack.pop().unwrap(), "b");
//! assert_eq!(stack.pop().unwrap(), "a");
//! assert!(matches!(stack.pop(), Err(StackError::StackEmpty)));
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod entry;
pub mod error;
pub mod limits;
pub mod stack;
pub mod status;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use entry::Entry;
pub use error::{ConfigError, StackError, StackResult, ValueError};
pub use limits::StackLimits;
pub use stack::BoundedStack;
pub use status::{ResponseCode, StackHandle, StackResponse, StringResponse};

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Slot count of a freshly constructed stack.
pub const STARTING_CAPACITY: usize = 16;

/// Hard ceiling on the number of slots a stack may ever allocate.
///
/// A push that would need more room than this fails with
/// [`StackError::StackFull`].
pub const MAXIMUM_CAPACITY: usize = 65536;

/// Maximum length of a single entry, in bytes.
pub const MAX_ENTRY_LEN: usize = 16;
