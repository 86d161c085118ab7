//! Focused accessor traits.

use super::Span;

/// Anything with a source location.
pub trait Spanned {
    fn span(&self) -> Span;
}

impl Spanned for crate::Node {
    fn span(&self) -> Span {
        self.span
    }
}

impl Spanned for crate::Call {
    fn span(&self) -> Span {
        self.span
    }
}

impl Spanned for crate::Operation {
    fn span(&self) -> Span {
        self.left.span.merge(self.right.span)
    }
}
