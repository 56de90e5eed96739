//! Stack growth for recursive descent over deeply nested input.
//!
//! Pyret programs nest arbitrarily: parenthesised expressions, annotations,
//! blocks inside `fun` inside `cases`. The parser recurses once per level,
//! so pathological input can exhaust a fixed-size thread stack. Wrapping
//! the recursive entry points in [`ensure_sufficient_stack`] moves the work
//! to a freshly allocated segment when the current one runs low.
//!
//! On `wasm32` the wrapper is a plain call.

/// Remaining stack below which a new segment is allocated.
const RED_ZONE: usize = 128 * 1024;

/// Size of each newly allocated segment.
const SEGMENT_SIZE: usize = 2 * 1024 * 1024;

/// Run `f`, first growing the stack if less than the red zone remains.
///
/// ```text
/// fn parse_expr(&mut self) -> Result<(), ParseError> {
///     ensure_sufficient_stack(|| self.parse_binop_expr())
/// }
/// ```
#[inline]
#[cfg(not(target_arch = "wasm32"))]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    stacker::maybe_grow(RED_ZONE, SEGMENT_SIZE, f)
}

#[inline]
#[cfg(target_arch = "wasm32")]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    f()
}
