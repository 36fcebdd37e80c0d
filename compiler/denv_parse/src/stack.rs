//! Stack growth for recursive parsing.
//!
//! Arrays nest and opaque blocks are decoded by parsing their contents as
//! statements, so depth is bounded only by the input. Recursive entry points
//! run inside [`ensure_sufficient_stack`].

/// Grow when less than 100KB remains.
const RED_ZONE: usize = 100 * 1024;

/// Size of each new stack segment (1MB).
const STACK_PER_RECURSION: usize = 1024 * 1024;

/// Run `f`, first growing the stack if it is close to exhausted.
#[inline]
#[cfg(not(target_arch = "wasm32"))]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    stacker::maybe_grow(RED_ZONE, STACK_PER_RECURSION, f)
}

/// WASM manages its own stack.
#[inline]
#[cfg(target_arch = "wasm32")]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    f()
}

#[cfg(test)]
mod tests;
