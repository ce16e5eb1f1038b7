//! # Stack Walkthrough
//!
//! Drives both presentations of the stack end to end and logs each step.
//!
//! ## Usage
//! ```bash
//! cargo run -p bounded-stack --features walkthrough --bin walkthrough
//!
//! # See every growth event
//! RUST_LOG=bounded_stack=debug cargo run -p bounded-stack --features walkthrough --bin walkthrough
//! ```
//!
//! Exits non-zero if any step does not behave as expected.

use bounded_stack::{BoundedStack, ResponseCode, StackError, StackHandle};
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .init();

    typed_errors()?;
    status_codes()?;

    info!("All steps passed");
    Ok(())
}

/// Result-returning API.
fn typed_errors() -> Result<(), Box<dyn std::error::Error>> {
    let mut stack = BoundedStack::new()?;
    info!(capacity = stack.capacity(), "String stack created");

    stack.push("!")?;
    stack.push("World")?;
    stack.push("Hello")?;

    match stack.push("This line is longer than sixteen bytes") {
        Err(StackError::InvalidValue(err)) => info!(%err, "Long value rejected"),
        other => return Err(format!("expected InvalidValue, got {:?}", other).into()),
    }

    info!(top = %stack.peek()?, "Peeked top of stack");

    while let Ok(entry) = stack.pop() {
        info!(value = %entry, "Popped");
    }
    if stack.pop() != Err(StackError::StackEmpty) {
        return Err("pop on empty stack did not report StackEmpty".into());
    }

    for i in 0..64 {
        stack.push(format!("String {}", i))?;
    }
    info!(
        size = stack.size(),
        capacity = stack.capacity(),
        "64 strings pushed"
    );

    let moved = stack.take();
    info!(
        source_size = stack.size(),
        source_capacity = stack.capacity(),
        destination_size = moved.size(),
        "Stack moved"
    );

    Ok(())
}

/// Status-code API, including use after release.
fn status_codes() -> Result<(), Box<dyn std::error::Error>> {
    let response = StackHandle::create();
    if !response.code.is_success() {
        return Err(format!("create failed: {}", response.code).into());
    }
    let mut stack = response.handle;

    let mut i = 0;
    while !stack.is_full() {
        let code = stack.push(&format!("String {}", i));
        if !code.is_success() {
            return Err(format!("push {} failed: {}", i, code).into());
        }
        i += 1;
    }
    info!(size = stack.size(), "Stack is full");

    let code = stack.push("overflow");
    info!(%code, "Push onto full stack");
    if code != ResponseCode::StackFull {
        return Err(format!("expected stack_full, got {}", code).into());
    }

    if let Some(top) = stack.peek().value {
        info!(top = %top, "Peeked top of stack");
    }

    let code = stack.free();
    info!(%code, "Stack freed");

    for (operation, code) in [
        ("push", stack.push("Hello")),
        ("pop", stack.pop().code),
        ("peek", stack.peek().code),
        ("free", stack.free()),
    ] {
        info!(operation, %code, "Operation on freed stack");
        if code != ResponseCode::NoStack {
            return Err(format!("{} on freed stack returned {}", operation, code).into());
        }
    }

    Ok(())
}
