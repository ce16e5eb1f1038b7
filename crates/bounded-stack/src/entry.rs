//! # Entry Module
//!
//! Provides the `Entry` type, the value held in one stack slot.
//!
//! ## Why Inline Bytes?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  One entry = one slot = 17 bytes, no heap                               │
//! │                                                                         │
//! │   bytes: [u8; 16]                                     len: u8           │
//! │   ┌───┬───┬───┬───┬───┬───┬───┬───┬───┬───┬───┬───┬───┬───┬───┬───┐ ┌──┐ │
//! │   │ H │ e │ l │ l │ o │ 0 │ 0 │ 0 │ 0 │ 0 │ 0 │ 0 │ 0 │ 0 │ 0 │ 0 │ │5 │ │
//! │   └───┴───┴───┴───┴───┴───┴───┴───┴───┴───┴───┴───┴───┴───┴───┴───┘ └──┘ │
//! │                                                                         │
//! │  The stack buffer is a contiguous run of these. Growing the buffer      │
//! │  moves entries by value; popping hands the whole entry to the caller.   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use bounded_stack::Entry;
//!
//! let entry = Entry::new("Hello").unwrap();
//! assert_eq!(entry.as_str(), "Hello");
//! assert_eq!(entry.len(), 5);
//!
//! assert!(Entry::new("").is_err());
//! assert!(Entry::new("this is way too long").is_err());
//! ```

use std::fmt;

use crate::validation::{validate_entry, ValidationResult};
use crate::MAX_ENTRY_LEN;

// =============================================================================
// Entry Type
// =============================================================================

/// A validated string of 1 to [`MAX_ENTRY_LEN`] bytes.
///
/// ## Design Decisions
/// - **Inline storage**: no per-entry allocation, so the stack's buffer is
///   the only allocation it ever makes
/// - **Clone, not Copy**: duplicating an entry is always an explicit
///   `clone()` (this is what `peek` does)
/// - **Unused bytes are zero**: derived `Eq`/`Hash`/`Ord` only ever compare
///   meaningful data
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Entry {
    bytes: [u8; MAX_ENTRY_LEN],
    len: u8,
}

impl Entry {
    /// Creates an entry from a string slice.
    ///
    /// ## Errors
    /// - [`ValueError::Empty`](crate::ValueError::Empty) for `""`
    /// - [`ValueError::TooLong`](crate::ValueError::TooLong) above 16 bytes
    pub fn new(value: &str) -> ValidationResult<Self> {
        validate_entry(value)?;

        let mut bytes = [0u8; MAX_ENTRY_LEN];
        bytes[..value.len()].copy_from_slice(value.as_bytes());

        Ok(Entry {
            bytes,
            len: value.len() as u8,
        })
    }

    /// Returns the entry as a string slice.
    pub fn as_str(&self) -> &str {
        // Bytes were copied from a &str in `new`, so this cannot fail.
        std::str::from_utf8(&self.bytes[..self.len as usize]).unwrap_or_default()
    }

    /// Length in bytes (always 1..=16).
    #[inline]
    pub fn len(&self) -> usize {
        self.len as usize
    }

    /// Always `false`; entries are never empty. Present for API symmetry
    /// with `len`.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

impl fmt::Display for Entry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Debug for Entry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Entry").field(&self.as_str()).finish()
    }
}

impl AsRef<str> for Entry {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl TryFrom<&str> for Entry {
    type Error = crate::ValueError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Entry::new(value)
    }
}

impl TryFrom<String> for Entry {
    type Error = crate::ValueError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Entry::new(&value)
    }
}

impl From<Entry> for String {
    fn from(entry: Entry) -> Self {
        entry.as_str().to_owned()
    }
}

impl PartialEq<str> for Entry {
    fn eq(&self, other: &str) -> bool {
        self.as_str() == other
    }
}

impl PartialEq<&str> for Entry {
    fn eq(&self, other: &&str) -> bool {
        self.as_str() == *other
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
