//! Binary arithmetic and its deferred form.

use super::{BinaryOp, Node};

/// An unevaluated binary arithmetic expression: `left op right`.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Operation {
    pub left: Node,
    pub op: BinaryOp,
    pub right: Node,
}

impl Operation {
    pub fn new(left: Node, op: BinaryOp, right: Node) -> Self {
        Operation { left, op, right }
    }
}

/// An operation whose arithmetic must not run.
///
/// Created while evaluating a call under strict math. Evaluating it yields
/// the wrapper itself and emitting it reproduces the infix source text of
/// the wrapped operands. Visitors are forwarded to the wrapped operation,
/// so later passes still reach (and may rewrite) the real operands.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DeferredOperation {
    pub(crate) operation: Operation,
}

impl DeferredOperation {
    pub fn new(operation: Operation) -> Self {
        DeferredOperation { operation }
    }

    pub fn operation(&self) -> &Operation {
        &self.operation
    }

    pub fn into_operation(self) -> Operation {
        self.operation
    }
}
