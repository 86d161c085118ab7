//! Operation suppression for strict math.

use less_ir::{DeferredOperation, Node, NodeKind, Visitor};

/// Wraps every operation it reaches in a [`DeferredOperation`].
///
/// The walk stops at the first operation on each path: operands of a
/// wrapped operation stay as they were, and nodes that are already
/// deferred are returned unchanged. Everything else is recursed into, so
/// operations nested in expressions or call arguments are found.
#[derive(Clone, Copy, Debug, Default)]
pub struct SuppressOperationEvaluation;

impl Visitor for SuppressOperationEvaluation {
    fn visit(&mut self, mut node: Node) -> Node {
        match node.kind {
            NodeKind::Operation(operation) => {
                tracing::trace!(op = %operation.op, span = ?node.span, "deferring operation");
                Node::deferred(DeferredOperation::new(*operation), node.span)
            }
            NodeKind::Deferred(_) => node,
            _ => {
                node.accept(self);
                node
            }
        }
    }
}
