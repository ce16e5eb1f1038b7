//! # Status-Code Presentation
//!
//! The same stack, driven through status codes instead of `Result`.
//!
//! ## Two Presentations, One Contract
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                                                                         │
//! │  BoundedStack::push(v)  → Result<(), StackError>                        │
//! │  StackHandle::push(v)   → ResponseCode                                  │
//! │                                                                         │
//! │  StackError::InvalidValue(Empty)    ──► ResponseCode::InvalidString     │
//! │  StackError::InvalidValue(TooLong)  ──► ResponseCode::StringTooLong     │
//! │  StackError::StackFull              ──► ResponseCode::StackFull         │
//! │  StackError::StackEmpty             ──► ResponseCode::StackEmpty        │
//! │  StackError::OutOfMemory            ──► ResponseCode::OutOfMemory       │
//! │  StackError::UseAfterRelease        ──► ResponseCode::NoStack           │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! A handle can be freed explicitly. After that every operation on it
//! reports [`ResponseCode::NoStack`], and freeing it again is harmless.
//!
//! ## Usage
//! ```rust
//! use bounded_stack::{ResponseCode, StackHandle};
//!
//! let response = StackHandle::create();
//! assert_eq!(response.code, ResponseCode::Success);
//!
//! let mut stack = response.handle;
//! assert_eq!(stack.push("Hello"), ResponseCode::Success);
//! assert_eq!(stack.pop().value.unwrap(), "Hello");
//!
//! assert_eq!(stack.free(), ResponseCode::Success);
//! assert_eq!(stack.push("Hello"), ResponseCode::NoStack);
//! assert_eq!(stack.free(), ResponseCode::NoStack);
//! ```

use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::entry::Entry;
use crate::error::{StackError, StackResult, ValueError};
use crate::limits::StackLimits;
use crate::stack::BoundedStack;

// =============================================================================
// Response Code
// =============================================================================

/// Outcome of a status-style operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResponseCode {
    Success,
    OutOfMemory,
    StringTooLong,
    /// Empty value pushed.
    InvalidString,
    StackFull,
    StackEmpty,
    /// Handle used after [`StackHandle::free`].
    NoStack,
}

impl ResponseCode {
    #[inline]
    pub fn is_success(&self) -> bool {
        matches!(self, ResponseCode::Success)
    }

    /// Wire name, as used by serde.
    pub fn as_str(&self) -> &'static str {
        match self {
            ResponseCode::Success => "success",
            ResponseCode::OutOfMemory => "out_of_memory",
            ResponseCode::StringTooLong => "string_too_long",
            ResponseCode::InvalidString => "invalid_string",
            ResponseCode::StackFull => "stack_full",
            ResponseCode::StackEmpty => "stack_empty",
            ResponseCode::NoStack => "no_stack",
        }
    }
}

impl fmt::Display for ResponseCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<&StackError> for ResponseCode {
    fn from(err: &StackError) -> Self {
        match err {
            StackError::InvalidValue(ValueError::Empty) => ResponseCode::InvalidString,
            StackError::InvalidValue(ValueError::TooLong { .. }) => ResponseCode::StringTooLong,
            StackError::StackFull { .. } => ResponseCode::StackFull,
            StackError::StackEmpty => ResponseCode::StackEmpty,
            StackError::OutOfMemory { .. } => ResponseCode::OutOfMemory,
            StackError::UseAfterRelease => ResponseCode::NoStack,
        }
    }
}

impl<T> From<&StackResult<T>> for ResponseCode {
    fn from(result: &StackResult<T>) -> Self {
        match result {
            Ok(_) => ResponseCode::Success,
            Err(err) => err.into(),
        }
    }
}

// =============================================================================
// Responses
// =============================================================================

/// Result of [`StackHandle::create`].
#[derive(Debug)]
pub struct StackResponse {
    /// Released if `code` is not `Success`.
    pub handle: StackHandle,
    pub code: ResponseCode,
}

/// Result of [`StackHandle::pop`] and [`StackHandle::peek`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StringResponse {
    /// Present exactly when `code` is `Success`.
    pub value: Option<Entry>,
    pub code: ResponseCode,
}

impl StringResponse {
    fn from_result(result: StackResult<Entry>) -> Self {
        let code = ResponseCode::from(&result);
        StringResponse {
            value: result.ok(),
            code,
        }
    }

    /// Converts back into the typed-error form.
    pub fn into_result(self) -> StackResult<Entry> {
        match self.value {
            Some(entry) => Ok(entry),
            None if self.code == ResponseCode::StackEmpty => Err(StackError::StackEmpty),
            // pop/peek only ever fail with StackEmpty or NoStack
            None => Err(StackError::UseAfterRelease),
        }
    }
}

// =============================================================================
// Stack Handle
// =============================================================================

/// A stack that can be explicitly released, reporting status codes.
///
/// ## Lifecycle
/// ```text
/// create() ──► live ──free()──► released ──free()──► released (NoStack)
///               │                  │
///               │                  └── push/pop/peek → NoStack
///               └── push/pop/peek → Success | error code
/// ```
#[derive(Debug)]
pub struct StackHandle {
    stack: Option<BoundedStack>,
}

impl StackHandle {
    /// Creates a handle with the default limits.
    pub fn create() -> StackResponse {
        Self::create_with_limits(StackLimits::default())
    }

    /// Creates a handle with custom limits.
    pub fn create_with_limits(limits: StackLimits) -> StackResponse {
        match BoundedStack::with_limits(limits) {
            Ok(stack) => StackResponse {
                handle: StackHandle { stack: Some(stack) },
                code: ResponseCode::Success,
            },
            Err(err) => StackResponse {
                handle: StackHandle { stack: None },
                code: ResponseCode::from(&err),
            },
        }
    }

    fn live(&self) -> StackResult<&BoundedStack> {
        self.stack.as_ref().ok_or_else(|| {
            debug!("Operation on released stack handle");
            StackError::UseAfterRelease
        })
    }

    fn live_mut(&mut self) -> StackResult<&mut BoundedStack> {
        self.stack.as_mut().ok_or_else(|| {
            debug!("Operation on released stack handle");
            StackError::UseAfterRelease
        })
    }

    pub fn push(&mut self, value: &str) -> ResponseCode {
        let result = self.live_mut().and_then(|stack| stack.push(value));
        ResponseCode::from(&result)
    }

    pub fn pop(&mut self) -> StringResponse {
        StringResponse::from_result(self.live_mut().and_then(BoundedStack::pop))
    }

    /// The returned value is a copy; the stack is unchanged.
    pub fn peek(&self) -> StringResponse {
        StringResponse::from_result(self.live().and_then(BoundedStack::peek))
    }

    /// Releases every entry and the buffer.
    ///
    /// Returns `Success` the first time and `NoStack` afterwards.
    pub fn free(&mut self) -> ResponseCode {
        match self.stack.take() {
            Some(stack) => {
                debug!(size = stack.size(), "Stack handle released");
                drop(stack);
                ResponseCode::Success
            }
            None => ResponseCode::NoStack,
        }
    }

    #[inline]
    pub fn is_released(&self) -> bool {
        self.stack.is_none()
    }

    /// 0 once released.
    pub fn size(&self) -> usize {
        self.stack.as_ref().map_or(0, BoundedStack::size)
    }

    /// `true` once released.
    pub fn is_empty(&self) -> bool {
        self.stack.as_ref().is_none_or(BoundedStack::is_empty)
    }

    /// `false` once released.
    pub fn is_full(&self) -> bool {
        self.stack.as_ref().is_some_and(BoundedStack::is_full)
    }

    /// `false` once released.
    pub fn is_at_capacity(&self) -> bool {
        self.stack.as_ref().is_some_and(BoundedStack::is_at_capacity)
    }
}

impl From<BoundedStack> for StackHandle {
    fn from(stack: BoundedStack) -> Self {
        StackHandle { stack: Some(stack) }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
