//! In-place tree rewriting.
//!
//! A [`Visitor`] receives a node by value and returns its replacement,
//! which may be the same node, a rewritten copy, or something else
//! entirely. [`Node::accept`] hands each child of a node to the visitor and
//! stores whatever comes back in the child's slot, so argument count and
//! order survive every pass.
//!
//! The default [`Visitor::visit`] recurses via `accept` and returns the
//! node unchanged. Override it to intercept specific variants:
//!
//! ```text
//! struct Uppercase;
//!
//! impl Visitor for Uppercase {
//!     fn visit(&mut self, mut node: Node) -> Node {
//!         if let NodeKind::Keyword(word) = &mut node.kind {
//!             word.make_ascii_uppercase();
//!             return node;
//!         }
//!         node.accept(self);
//!         node
//!     }
//! }
//! ```
//!
//! A [`DeferredOperation`] forwards visitors to the operation it wraps
//! instead of presenting itself as a child-bearing node; passes that run
//! after strict-math suppression still see the real operands.

use less_stack::ensure_sufficient_stack;

use crate::ast::{Call, DeferredOperation, Node, NodeKind, Operation};

/// Tree rewriting pass.
pub trait Visitor {
    /// Visit `node` and return its replacement.
    fn visit(&mut self, node: Node) -> Node {
        let mut node = node;
        node.accept(self);
        node
    }
}

impl Node {
    /// Offer each child of this node to `visitor`, replacing it in place.
    pub fn accept<V: Visitor + ?Sized>(&mut self, visitor: &mut V) {
        ensure_sufficient_stack(|| walk_node(visitor, self));
    }
}

impl Call {
    pub fn accept<V: Visitor + ?Sized>(&mut self, visitor: &mut V) {
        visit_and_replace(&mut self.arguments, visitor);
    }
}

impl Operation {
    pub fn accept<V: Visitor + ?Sized>(&mut self, visitor: &mut V) {
        visit_in_place(&mut self.left, visitor);
        visit_in_place(&mut self.right, visitor);
    }
}

impl DeferredOperation {
    /// Forwards to the wrapped operation; the wrapper itself is transparent.
    pub fn accept<V: Visitor + ?Sized>(&mut self, visitor: &mut V) {
        self.operation.accept(visitor);
    }
}

/// Dispatch `visitor` over the children of `node`.
pub fn walk_node<V: Visitor + ?Sized>(visitor: &mut V, node: &mut Node) {
    match &mut node.kind {
        NodeKind::Call(call) => call.accept(visitor),
        NodeKind::Operation(operation) => operation.accept(visitor),
        NodeKind::Deferred(deferred) => deferred.accept(visitor),
        NodeKind::Expression(items) => visit_and_replace(items, visitor),
        NodeKind::Number(_)
        | NodeKind::Color(_)
        | NodeKind::Keyword(_)
        | NodeKind::Quoted(_)
        | NodeKind::Text(_)
        | NodeKind::Variable(_) => {}
    }
}

/// Visit every node in `nodes` left to right, replacing each in place.
pub fn visit_and_replace<V: Visitor + ?Sized>(nodes: &mut [Node], visitor: &mut V) {
    for node in nodes {
        visit_in_place(node, visitor);
    }
}

/// Visit a single slot, replacing its content with the visitor's result.
pub fn visit_in_place<V: Visitor + ?Sized>(slot: &mut Node, visitor: &mut V) {
    let node = std::mem::take(slot);
    *slot = visitor.visit(node);
}
