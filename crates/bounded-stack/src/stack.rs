//! # Bounded Stack
//!
//! The LIFO container itself.
//!
//! ## Buffer Lifecycle
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Capacity Over Time (defaults)                        │
//! │                                                                         │
//! │  new()           capacity 16     size 0                                 │
//! │    │                                                                    │
//! │    ▼ push #17    size == capacity → grow                                │
//! │  capacity 32 ──► 64 ──► ... ──► 32768 ──► 65536 (ceiling)               │
//! │                                              │                          │
//! │                                              ▼ push #65537              │
//! │                                         StackFull, nothing changes      │
//! │                                                                         │
//! │  take() / StackHandle::free()  →  capacity 0, size 0 (released)         │
//! │  push onto released            →  re-allocates at starting capacity     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Failure Guarantee
//! Every operation either completes or returns an error with the stack
//! untouched. Validation runs before growth, and growth reserves the new
//! buffer before anything is written.
//!
//! ## Concurrency
//! There is no internal locking. A stack shared between threads or tasks
//! must be wrapped by the caller (e.g. in a `Mutex`) around every call.

use std::mem;

use tracing::{debug, trace, warn};

use crate::entry::Entry;
use crate::error::{StackError, StackResult};
use crate::limits::StackLimits;

// =============================================================================
// BoundedStack
// =============================================================================

/// A LIFO stack of [`Entry`] values with a doubling, bounded buffer.
///
/// ## Invariants
/// - `size <= capacity <= limits.maximum_capacity()`
/// - slots `[0, size)` each hold exactly one valid entry
/// - entries are owned by the stack until popped or the stack is dropped
///
/// ## Ownership
/// `BoundedStack` is move-only: it does not implement `Clone`, so the
/// entries it owns are never duplicated implicitly.
///
/// ```compile_fail
/// use bounded_stack::BoundedStack;
///
/// let a = BoundedStack::new().unwrap();
/// let b = a.clone();
/// ```
///
/// Moving transfers the whole buffer:
///
/// ```rust
/// use bounded_stack::BoundedStack;
///
/// let mut a = BoundedStack::new().unwrap();
/// a.push("x").unwrap();
///
/// let b = a.take();
/// assert!(a.is_empty());
/// assert_eq!(a.capacity(), 0);
/// assert_eq!(b.peek().unwrap(), "x");
/// ```
#[derive(Debug)]
pub struct BoundedStack {
    /// Occupied slots, bottom first. `slots.len()` is the size.
    slots: Vec<Entry>,
    /// Logical slot count currently reserved.
    capacity: usize,
    limits: StackLimits,
}

impl BoundedStack {
    /// Creates an empty stack with the default limits.
    ///
    /// ## Errors
    /// [`StackError::OutOfMemory`] if the starting buffer cannot be allocated.
    pub fn new() -> StackResult<Self> {
        Self::with_limits(StackLimits::default())
    }

    /// Creates an empty stack with custom limits.
    ///
    /// ## Example
    /// ```rust
    /// use bounded_stack::{BoundedStack, StackLimits};
    ///
    /// let limits = StackLimits::new(2, 4).unwrap();
    /// let stack = BoundedStack::with_limits(limits).unwrap();
    /// assert_eq!(stack.capacity(), 2);
    /// ```
    pub fn with_limits(limits: StackLimits) -> StackResult<Self> {
        let starting = limits.starting_capacity();

        let mut slots = Vec::new();
        slots
            .try_reserve_exact(starting)
            .map_err(|_| StackError::OutOfMemory {
                requested: starting,
            })?;

        debug!(
            capacity = starting,
            maximum = limits.maximum_capacity(),
            "Stack created"
        );

        Ok(BoundedStack {
            slots,
            capacity: starting,
            limits,
        })
    }

    /// The empty, zero-capacity state left behind by [`take`](Self::take).
    fn released(limits: StackLimits) -> Self {
        BoundedStack {
            slots: Vec::new(),
            capacity: 0,
            limits,
        }
    }

    // =========================================================================
    // Mutation
    // =========================================================================

    /// Pushes a value onto the top of the stack.
    ///
    /// ## Flow
    /// ```text
    /// push("v16")
    ///      │
    ///      ├── empty?           → InvalidValue(Empty)
    ///      ├── > 16 bytes?      → InvalidValue(TooLong)
    ///      │
    ///      ├── size == capacity?
    ///      │      ├── capacity == maximum → StackFull
    ///      │      ├── reserve failed      → OutOfMemory
    ///      │      └── capacity doubled (clamped)
    ///      │
    ///      └── slot[size] = entry, size += 1
    /// ```
    ///
    /// ## Example
    /// ```rust
    /// use bounded_stack::{BoundedStack, StackError, ValueError};
    ///
    /// let mut stack = BoundedStack::new().unwrap();
    /// assert!(stack.push("sixteen bytes!!!").is_ok());
    /// assert_eq!(
    ///     stack.push(""),
    ///     Err(StackError::InvalidValue(ValueError::Empty))
    /// );
    /// assert_eq!(stack.size(), 1);
    /// ```
    pub fn push<S: AsRef<str>>(&mut self, value: S) -> StackResult<()> {
        let entry = Entry::new(value.as_ref())?;
        self.push_entry(entry)
    }

    /// Pushes an already-validated entry.
    pub fn push_entry(&mut self, entry: Entry) -> StackResult<()> {
        if self.is_at_capacity() {
            self.grow()?;
        }

        trace!(size = self.slots.len() + 1, value = %entry, "push");
        self.slots.push(entry);
        Ok(())
    }

    /// Removes the top entry and hands ownership to the caller.
    ///
    /// ## Errors
    /// [`StackError::StackEmpty`] if there is nothing to pop.
    pub fn pop(&mut self) -> StackResult<Entry> {
        let entry = self.slots.pop().ok_or(StackError::StackEmpty)?;
        trace!(size = self.slots.len(), value = %entry, "pop");
        Ok(entry)
    }

    /// Returns an independent copy of the top entry.
    ///
    /// The stack is not modified.
    ///
    /// ## Errors
    /// [`StackError::StackEmpty`] if there is nothing to peek at.
    pub fn peek(&self) -> StackResult<Entry> {
        self.slots.last().cloned().ok_or(StackError::StackEmpty)
    }

    /// Moves the whole buffer out, leaving `self` released.
    ///
    /// The released stack is empty with capacity 0 and is safe to drop or to
    /// push onto again (the next push re-allocates at the starting capacity).
    pub fn take(&mut self) -> BoundedStack {
        mem::replace(self, Self::released(self.limits))
    }

    /// Doubles capacity, clamped to the ceiling.
    ///
    /// Reserves before touching any field, so a failure leaves the stack at
    /// its pre-growth state.
    fn grow(&mut self) -> StackResult<()> {
        let Some(new_capacity) = self.limits.next_capacity(self.capacity) else {
            warn!(
                size = self.slots.len(),
                maximum = self.limits.maximum_capacity(),
                "Push rejected: stack at maximum capacity"
            );
            return Err(StackError::StackFull {
                max: self.limits.maximum_capacity(),
            });
        };

        self.slots
            .try_reserve_exact(new_capacity - self.slots.len())
            .map_err(|_| StackError::OutOfMemory {
                requested: new_capacity,
            })?;

        debug!(
            old_capacity = self.capacity,
            new_capacity, "Stack buffer grown"
        );
        self.capacity = new_capacity;
        Ok(())
    }

    // =========================================================================
    // Queries
    // =========================================================================

    /// Number of occupied slots.
    #[inline]
    pub fn size(&self) -> usize {
        self.slots.len()
    }

    /// Current allocated slot count.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// The limits this stack was built with.
    #[inline]
    pub fn limits(&self) -> StackLimits {
        self.limits
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// `true` once size reaches the ceiling; the next push fails.
    #[inline]
    pub fn is_full(&self) -> bool {
        self.slots.len() >= self.limits.maximum_capacity()
    }

    /// `true` when every allocated slot is occupied; the next push grows.
    #[inline]
    pub fn is_at_capacity(&self) -> bool {
        self.slots.len() == self.capacity
    }

    /// Iterates entries from top to bottom without removing them.
    pub fn iter(&self) -> impl DoubleEndedIterator<Item = &Entry> + ExactSizeIterator + '_ {
        self.slots.iter().rev()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ValueError;
    use crate::{MAXIMUM_CAPACITY, STARTING_CAPACITY};

    fn filled(count: usize) -> BoundedStack {
        let mut stack = BoundedStack::new().unwrap();
        for i in 0..count {
            stack.push(format!("v{}", i)).unwrap();
        }
        stack
    }

    #[test]
    fn test_new_stack_is_empty() {
        let stack = BoundedStack::new().unwrap();
        assert_eq!(stack.size(), 0);
        assert_eq!(stack.capacity(), STARTING_CAPACITY);
        assert!(stack.is_empty());
        assert!(!stack.is_full());
        assert!(!stack.is_at_capacity());
    }

    #[test]
    fn test_lifo_order() {
        let mut stack = BoundedStack::new().unwrap();
        stack.push("a").unwrap();
        stack.push("b").unwrap();
        stack.push("c").unwrap();

        assert_eq!(stack.pop().unwrap(), "c");
        assert_eq!(stack.pop().unwrap(), "b");
        assert_eq!(stack.pop().unwrap(), "a");
        assert!(stack.is_empty());
    }

    #[test]
    fn test_empty_stack_errors() {
        let mut stack = BoundedStack::new().unwrap();
        assert_eq!(stack.pop(), Err(StackError::StackEmpty));
        assert_eq!(stack.peek(), Err(StackError::StackEmpty));
        assert_eq!(stack.size(), 0);
    }

    #[test]
    fn test_validation() {
        let mut stack = BoundedStack::new().unwrap();

        assert_eq!(
            stack.push(""),
            Err(StackError::InvalidValue(ValueError::Empty))
        );
        assert_eq!(
            stack.push("x".repeat(17)),
            Err(StackError::InvalidValue(ValueError::TooLong { len: 17, max: 16 }))
        );
        assert_eq!(stack.size(), 0);

        stack.push("x".repeat(16)).unwrap();
        assert_eq!(stack.size(), 1);
    }

    #[test]
    fn test_growth_at_boundary() {
        let mut stack = filled(STARTING_CAPACITY);
        assert!(stack.is_at_capacity());
        assert_eq!(stack.capacity(), 16);

        stack.push("v16").unwrap();
        assert_eq!(stack.capacity(), 32);
        assert!(!stack.is_at_capacity());

        for i in 17..32 {
            assert!(!stack.is_at_capacity());
            stack.push(format!("v{}", i)).unwrap();
        }
        assert!(stack.is_at_capacity());
        assert_eq!(stack.capacity(), 32);
    }

    #[test]
    fn test_capacity_doubles_at_each_boundary() {
        let mut stack = BoundedStack::new().unwrap();
        let mut seen = vec![stack.capacity()];
        for i in 0..1024 {
            stack.push(format!("{}", i)).unwrap();
            if *seen.last().unwrap() != stack.capacity() {
                seen.push(stack.capacity());
            }
        }
        assert_eq!(seen, vec![16, 32, 64, 128, 256, 512, 1024]);
    }

    #[test]
    fn test_growth_clamps_to_maximum() {
        let limits = StackLimits::new(3, 10).unwrap();
        let mut stack = BoundedStack::with_limits(limits).unwrap();

        for i in 0..10 {
            stack.push(format!("{}", i)).unwrap();
        }
        assert_eq!(stack.capacity(), 10);
        assert!(stack.is_full());
        assert!(stack.is_at_capacity());
    }

    #[test]
    fn test_full_stack_rejects_push() {
        let mut stack = filled(MAXIMUM_CAPACITY);
        assert!(stack.is_full());
        assert_eq!(stack.size(), MAXIMUM_CAPACITY);
        assert_eq!(stack.capacity(), MAXIMUM_CAPACITY);

        assert_eq!(
            stack.push("overflow"),
            Err(StackError::StackFull {
                max: MAXIMUM_CAPACITY
            })
        );
        assert_eq!(stack.size(), MAXIMUM_CAPACITY);
        assert_eq!(stack.peek().unwrap(), "v65535");
    }

    #[test]
    fn test_invalid_value_on_full_stack_reports_invalid_value() {
        let limits = StackLimits::new(1, 1).unwrap();
        let mut stack = BoundedStack::with_limits(limits).unwrap();
        stack.push("only").unwrap();

        assert_eq!(
            stack.push(""),
            Err(StackError::InvalidValue(ValueError::Empty))
        );
        assert_eq!(stack.push("more"), Err(StackError::StackFull { max: 1 }));
        assert_eq!(stack.size(), 1);
    }

    #[test]
    fn test_peek_does_not_mutate() {
        let mut stack = BoundedStack::new().unwrap();
        stack.push("top").unwrap();

        let copy = stack.peek().unwrap();
        assert_eq!(copy, "top");
        assert_eq!(stack.size(), 1);

        drop(copy);
        assert_eq!(stack.pop().unwrap(), "top");
    }

    #[test]
    fn test_move_transfers_entries() {
        let mut a = filled(20);
        let capacity = a.capacity();

        let mut b = a.take();
        assert!(a.is_empty());
        assert_eq!(a.capacity(), 0);
        assert_eq!(b.size(), 20);
        assert_eq!(b.capacity(), capacity);

        drop(a);
        for i in (0..20).rev() {
            assert_eq!(b.pop().unwrap(), format!("v{}", i).as_str());
        }
    }

    #[test]
    fn test_move_assignment_replaces_destination() {
        let mut a = filled(3);
        let mut b = filled(5);
        assert_eq!(b.size(), 5);

        b = a.take();
        assert_eq!(b.size(), 3);
        assert_eq!(a.size(), 0);
        assert_eq!(b.peek().unwrap(), "v2");
    }

    #[test]
    fn test_released_stack_can_be_reused() {
        let mut a = filled(2);
        let _b = a.take();

        assert!(a.is_at_capacity());
        assert_eq!(a.pop(), Err(StackError::StackEmpty));

        a.push("again").unwrap();
        assert_eq!(a.capacity(), STARTING_CAPACITY);
        assert_eq!(a.size(), 1);
    }

    #[test]
    fn test_iter_top_to_bottom() {
        let stack = filled(3);
        let values: Vec<&str> = stack.iter().map(Entry::as_str).collect();
        assert_eq!(values, vec!["v2", "v1", "v0"]);
        assert_eq!(stack.iter().len(), 3);
        assert_eq!(stack.size(), 3);
    }

    #[test]
    fn test_push_entry_skips_revalidation() {
        let mut stack = BoundedStack::new().unwrap();
        let entry = Entry::new("ready").unwrap();
        stack.push_entry(entry.clone()).unwrap();
        assert_eq!(stack.pop().unwrap(), entry);
    }

    #[test]
    fn test_example_scenario() {
        let mut stack = BoundedStack::new().unwrap();
        assert_eq!(stack.size(), 0);
        assert_eq!(stack.capacity(), 16);

        for i in 0..=16 {
            stack.push(format!("v{}", i)).unwrap();
        }
        assert_eq!(stack.size(), 17);
        assert_eq!(stack.capacity(), 32);
        assert_eq!(stack.peek().unwrap(), "v16");

        for _ in 0..17 {
            stack.pop().unwrap();
        }
        assert_eq!(stack.size(), 0);
        assert_eq!(stack.pop(), Err(StackError::StackEmpty));
    }

    #[tokio::test]
    async fn test_shared_stack_behind_caller_mutex() {
        use std::sync::Arc;
        use tokio::sync::Mutex;

        let stack = Arc::new(Mutex::new(BoundedStack::new().unwrap()));

        let mut handles = Vec::new();
        for task in 0..8 {
            let stack = Arc::clone(&stack);
            handles.push(tokio::spawn(async move {
                for i in 0..10 {
                    stack.lock().await.push(format!("t{}-{}", task, i)).unwrap();
                }
            }));
        }
        for handle in handles {
            handle.await.unwrap();
        }

        let stack = stack.lock().await;
        assert_eq!(stack.size(), 80);
        assert_eq!(stack.capacity(), 128);
    }
}
