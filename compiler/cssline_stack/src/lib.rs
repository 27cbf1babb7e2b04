//! Stack growth for recursive tree walks.
//!
//! Value trees produced by stylesheet parsers can nest without bound
//! (`calc()` inside `var()` inside `calc()`, or Less/SCSS maps of maps).
//! Every recursive walk over such a tree goes through
//! [`ensure_sufficient_stack`], which grows the stack on demand instead of
//! imposing a depth limit.
//!
//! - **Native targets**: backed by `stacker::maybe_grow`.
//! - **WASM targets**: plain call; the runtime owns the stack.

/// Remaining stack below which a new segment is allocated (64KB).
const RED_ZONE: usize = 64 * 1024;

/// Size of each newly allocated stack segment (1MB).
const STACK_PER_RECURSION: usize = 1024 * 1024;

/// Run `f`, first growing the stack if less than [`RED_ZONE`] bytes remain.
///
/// ```
/// use cssline_stack::ensure_sufficient_stack;
///
/// fn depth(n: u32) -> u32 {
///     ensure_sufficient_stack(|| if n == 0 { 0 } else { depth(n - 1) + 1 })
/// }
///
/// assert_eq!(depth(1_000), 1_000);
/// ```
#[inline]
#[cfg(not(target_arch = "wasm32"))]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    stacker::maybe_grow(RED_ZONE, STACK_PER_RECURSION, f)
}

/// WASM version: call `f` directly.
#[inline]
#[cfg(target_arch = "wasm32")]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    f()
}
