//! # Allocation Failure
//!
//! Drives the `OutOfMemory` paths with a global allocator that refuses any
//! request above a per-thread size limit.
//!
//! Each test thread has its own limit, so tests running in parallel do not
//! interfere, and the test harness itself is never limited.

use std::alloc::{GlobalAlloc, Layout, System};
use std::cell::Cell;

use bounded_stack::{BoundedStack, ResponseCode, StackError, StackHandle, StackLimits};

// =============================================================================
// Limited Allocator
// =============================================================================

struct LimitedAllocator;

thread_local! {
    static MAX_ALLOC_SIZE: Cell<usize> = const { Cell::new(usize::MAX) };
}

unsafe impl GlobalAlloc for LimitedAllocator {
    unsafe fn alloc(&self, layout: Layout) -> *mut u8 {
        // Thread-local storage may already be gone during thread teardown.
        let limit = MAX_ALLOC_SIZE.try_with(Cell::get).unwrap_or(usize::MAX);
        if layout.size() > limit {
            return std::ptr::null_mut();
        }
        System.alloc(layout)
    }

    unsafe fn dealloc(&self, ptr: *mut u8, layout: Layout) {
        System.dealloc(ptr, layout)
    }
}

#[global_allocator]
static GLOBAL: LimitedAllocator = LimitedAllocator;

/// Runs `f` with allocations above `max_bytes` failing on this thread.
///
/// The limit is lifted before returning, so assertions on the result can
/// allocate freely.
fn with_alloc_limit<T>(max_bytes: usize, f: impl FnOnce() -> T) -> T {
    struct Reset;
    impl Drop for Reset {
        fn drop(&mut self) {
            MAX_ALLOC_SIZE.with(|limit| limit.set(usize::MAX));
        }
    }

    MAX_ALLOC_SIZE.with(|limit| limit.set(max_bytes));
    let _reset = Reset;
    f()
}

fn slot_bytes(slots: usize) -> usize {
    slots * std::mem::size_of::<bounded_stack::Entry>()
}

// =============================================================================
// Tests
// =============================================================================

#[test]
fn test_growth_failure_leaves_stack_unchanged() {
    let mut stack = BoundedStack::new().unwrap();
    for i in 0..16 {
        stack.push(format!("v{}", i)).unwrap();
    }
    assert!(stack.is_at_capacity());

    // The 16-slot buffer already exists; the 32-slot one cannot be made.
    let result = with_alloc_limit(slot_bytes(16), || stack.push("x"));

    assert_eq!(result, Err(StackError::OutOfMemory { requested: 32 }));
    assert_eq!(stack.size(), 16);
    assert_eq!(stack.capacity(), 16);
    assert_eq!(stack.peek().unwrap(), "v15");

    // Once memory is available again, growth proceeds normally.
    stack.push("x").unwrap();
    assert_eq!(stack.size(), 17);
    assert_eq!(stack.capacity(), 32);
    assert_eq!(stack.pop().unwrap(), "x");
    assert_eq!(stack.pop().unwrap(), "v15");
}

#[test]
fn test_construction_failure_with_limits() {
    let limits = StackLimits::new(64, 1024).unwrap();

    let result = with_alloc_limit(slot_bytes(64) - 1, || BoundedStack::with_limits(limits));

    assert!(matches!(
        result,
        Err(StackError::OutOfMemory { requested: 64 })
    ));
}

#[test]
fn test_handle_create_reports_out_of_memory() {
    let response = with_alloc_limit(slot_bytes(16) - 1, StackHandle::create);

    assert_eq!(response.code, ResponseCode::OutOfMemory);

    let mut handle = response.handle;
    assert!(handle.is_released());
    assert_eq!(handle.push("x"), ResponseCode::NoStack);
    assert_eq!(handle.free(), ResponseCode::NoStack);
}
