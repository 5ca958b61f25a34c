//! Stack growth guard for the recursive passes.
//!
//! The parser, the type inference pass and the evaluator all recurse once
//! per nesting level of the input line. A line such as `((((...1...))))`
//! with a few hundred thousand parentheses would exhaust the native stack,
//! so every recursive step runs inside [`ensure_sufficient_stack`].
//!
//! On native targets the stack is grown on demand with `stacker`; on
//! `wasm32` the closure is simply called.

/// Remaining stack below which a new segment is allocated (128KB).
const RED_ZONE: usize = 128 * 1024;

/// Size of each newly allocated stack segment (1MB).
const SEGMENT_SIZE: usize = 1024 * 1024;

/// Run `f`, first growing the stack if less than the red zone remains.
#[inline]
#[cfg(not(target_arch = "wasm32"))]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    stacker::maybe_grow(RED_ZONE, SEGMENT_SIZE, f)
}

/// WASM manages its own stack; call through.
#[inline]
#[cfg(target_arch = "wasm32")]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    f()
}
