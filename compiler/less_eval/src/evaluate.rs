//! Node evaluation.
//!
//! [`Evaluate`] reduces a node to its value in a context. Leaves evaluate
//! to themselves, variables resolve through the environment, operations
//! compute, calls dispatch to builtins, and expressions evaluate their
//! items left to right. A [`DeferredOperation`] is opaque: it evaluates
//! to itself.

use less_ir::{Call, DeferredOperation, Node, NodeKind, Operation, Spanned};
use less_stack::ensure_sufficient_stack;

use crate::operators::evaluate_operation;
use crate::{evaluate_call, EvalContext, EvalResult};

pub trait Evaluate {
    fn evaluate(&self, ctx: &mut EvalContext) -> EvalResult;
}

impl Evaluate for Node {
    fn evaluate(&self, ctx: &mut EvalContext) -> EvalResult {
        ensure_sufficient_stack(|| evaluate_node(self, ctx))
    }
}

impl Evaluate for Operation {
    fn evaluate(&self, ctx: &mut EvalContext) -> EvalResult {
        evaluate_operation(self, self.span(), ctx)
    }
}

impl Evaluate for DeferredOperation {
    /// Identity: the wrapped operation is not computed.
    fn evaluate(&self, _ctx: &mut EvalContext) -> EvalResult {
        Ok(Node::deferred(self.clone(), self.operation().span()))
    }
}

impl Evaluate for Call {
    fn evaluate(&self, ctx: &mut EvalContext) -> EvalResult {
        evaluate_call(self, Some(ctx))
    }
}

fn evaluate_node(node: &Node, ctx: &mut EvalContext) -> EvalResult {
    match &node.kind {
        NodeKind::Number(_)
        | NodeKind::Color(_)
        | NodeKind::Keyword(_)
        | NodeKind::Quoted(_)
        | NodeKind::Text(_)
        | NodeKind::Deferred(_) => Ok(node.clone()),
        NodeKind::Variable(name) => ctx.resolve_variable(name, node.span),
        NodeKind::Operation(operation) => evaluate_operation(operation, node.span, ctx),
        NodeKind::Call(call) => evaluate_call(call, Some(ctx)),
        NodeKind::Expression(items) => {
            let items = items
                .iter()
                .map(|item| item.evaluate(ctx))
                .collect::<EvalResult<Vec<_>>>()?;
            Ok(Node::expression(items, node.span))
        }
    }
}
