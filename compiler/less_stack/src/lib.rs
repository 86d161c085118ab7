//! Stack growth guard for recursive tree walks.
//!
//! Style-sheet values nest arbitrarily: a call can take an operation whose
//! operands are calls taking further operations. Evaluation, emission and
//! visitor passes all recurse over that shape, so each recursive step runs
//! inside [`ensure_sufficient_stack`].
//!
//! - **Native targets**: grows the stack on demand through `stacker`.
//! - **WASM targets**: plain passthrough.

/// Remaining stack below which a new segment is allocated (128KB).
const RED_ZONE: usize = 128 * 1024;

/// Size of each newly allocated stack segment (1MB).
const SEGMENT_SIZE: usize = 1024 * 1024;

/// Run `f`, first growing the stack if less than the red zone remains.
///
/// ```text
/// fn evaluate(node: &Node, ctx: &mut EvalContext) -> EvalResult<Node> {
///     ensure_sufficient_stack(|| match &node.kind {
///         NodeKind::Call(call) => evaluate_call(call, Some(ctx)),
///         // ...
///     })
/// }
/// ```
#[inline]
#[cfg(not(target_arch = "wasm32"))]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    stacker::maybe_grow(RED_ZONE, SEGMENT_SIZE, f)
}

/// WASM version: call directly.
#[inline]
#[cfg(target_arch = "wasm32")]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    f()
}

#[cfg(test)]
mod tests;
