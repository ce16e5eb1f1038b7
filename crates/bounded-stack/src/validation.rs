//! # Validation Module
//!
//! Input validation for values entering the stack.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Where Values Are Checked                           │
//! │                                                                         │
//! │  BoundedStack::push(&str) ──┐                                           │
//! │                             ├──► Entry::new ──► validate_entry          │
//! │  StackHandle::push(&str) ───┘                      │                    │
//! │                                                    ├── len == 0  Empty  │
//! │                                                    ├── len > 16  TooLong│
//! │                                                    └── otherwise OK     │
//! │                                                                         │
//! │  Validation happens BEFORE the stack is touched, so a rejected value    │
//! │  never causes growth or any other state change.                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use bounded_stack::validation::validate_entry;
//!
//! assert!(validate_entry("hello").is_ok());
//! assert!(validate_entry("").is_err());
//! ```

use crate::error::ValueError;
use crate::MAX_ENTRY_LEN;

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValueError>;

/// Validates a candidate entry.
///
/// ## Rules
/// - Must not be empty
/// - Must be at most [`MAX_ENTRY_LEN`] (16) bytes long
///
/// Length is measured in bytes, not characters, and nothing is trimmed:
/// `" "` is a valid one-byte entry.
///
/// ## Example
/// ```rust
/// use bounded_stack::validation::validate_entry;
/// use bounded_stack::ValueError;
///
/// assert!(validate_entry("exactly16bytes!!").is_ok());
/// assert_eq!(validate_entry(""), Err(ValueError::Empty));
/// assert!(matches!(
///     validate_entry("seventeen bytes!!"),
///     Err(ValueError::TooLong { len: 17, max: 16 })
/// ));
/// ```
pub fn validate_entry(value: &str) -> ValidationResult<()> {
    if value.is_empty() {
        return Err(ValueError::Empty);
    }

    if value.len() > MAX_ENTRY_LEN {
        return Err(ValueError::TooLong {
            len: value.len(),
            max: MAX_ENTRY_LEN,
        });
    }

    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_entry() {
        // Valid entries
        assert!(validate_entry("a").is_ok());
        assert!(validate_entry(" ").is_ok());
        assert!(validate_entry(&"x".repeat(16)).is_ok());

        // Invalid entries
        assert_eq!(validate_entry(""), Err(ValueError::Empty));
        assert_eq!(
            validate_entry(&"x".repeat(17)),
            Err(ValueError::TooLong { len: 17, max: 16 })
        );
    }

    #[test]
    fn test_validate_entry_counts_bytes() {
        // 8 two-byte characters = 16 bytes
        assert!(validate_entry(&"é".repeat(8)).is_ok());
        // 9 two-byte characters = 18 bytes
        assert!(validate_entry(&"é".repeat(9)).is_err());
    }
}
