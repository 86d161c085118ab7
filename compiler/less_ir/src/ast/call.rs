//! Function call nodes: `name(arg, arg, ...)`.

use super::Node;
use crate::Span;

/// A call of a named function with ordered arguments.
///
/// The name may or may not resolve to a builtin at evaluation time; calls
/// that do not resolve are emitted back out verbatim, which is how plain
/// CSS functions (`url(...)`, `translate(...)`, vendor functions) survive
/// compilation.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Call {
    pub name: String,
    /// Argument order is significant and preserved by every rewrite.
    pub arguments: Vec<Node>,
    pub span: Span,
}

impl Call {
    pub fn new(name: impl Into<String>, arguments: Vec<Node>, span: Span) -> Self {
        Call {
            name: name.into(),
            arguments,
            span,
        }
    }
}
