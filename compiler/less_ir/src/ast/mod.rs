//! Value tree nodes.
//!
//! A style-sheet value is a small tree: `rgba(255, @alpha * 0.5)` is a
//! [`Call`] whose second argument is an [`Operation`] over a variable and a
//! number. [`Node`] pairs a [`NodeKind`] with its source [`Span`].
//!
//! # Module Structure
//!
//! - `operators`: [`BinaryOp`]
//! - `values`: leaf payloads ([`Number`], [`Color`], [`Quoted`])
//! - `call`: [`Call`]
//! - `operation`: [`Operation`], [`DeferredOperation`]

mod call;
mod operation;
mod operators;
mod values;

pub use call::Call;
pub use operation::{DeferredOperation, Operation};
pub use operators::BinaryOp;
pub use values::{Color, Number, Quoted};

use std::fmt;

use crate::Span;

/// Node variants.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum NodeKind {
    Number(Number),
    Color(Color),
    /// Bare identifier: `auto`, `solid`, `red`.
    Keyword(String),
    Quoted(Quoted),
    /// Literal output text, e.g. the result of an unresolved call.
    Text(String),
    /// `@name` reference; the stored name excludes the `@`.
    Variable(String),
    Operation(Box<Operation>),
    Deferred(Box<DeferredOperation>),
    Call(Call),
    /// Space-separated list: `1px solid red`.
    Expression(Vec<Node>),
}

/// A value tree node.
#[derive(Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Node {
    pub kind: NodeKind,
    pub span: Span,
}

impl Node {
    pub fn new(kind: NodeKind, span: Span) -> Self {
        Node { kind, span }
    }

    pub fn number(value: f64, span: Span) -> Self {
        Node::new(NodeKind::Number(Number::new(value)), span)
    }

    pub fn dimension(value: f64, unit: impl Into<String>, span: Span) -> Self {
        Node::new(NodeKind::Number(Number::with_unit(value, unit)), span)
    }

    pub fn color(color: Color, span: Span) -> Self {
        Node::new(NodeKind::Color(color), span)
    }

    pub fn keyword(word: impl Into<String>, span: Span) -> Self {
        Node::new(NodeKind::Keyword(word.into()), span)
    }

    pub fn quoted(quoted: Quoted, span: Span) -> Self {
        Node::new(NodeKind::Quoted(quoted), span)
    }

    pub fn text(text: impl Into<String>, span: Span) -> Self {
        Node::new(NodeKind::Text(text.into()), span)
    }

    pub fn variable(name: impl Into<String>, span: Span) -> Self {
        Node::new(NodeKind::Variable(name.into()), span)
    }

    /// Build an operation node spanning both operands.
    pub fn operation(left: Node, op: BinaryOp, right: Node) -> Self {
        let span = left.span.merge(right.span);
        Node::new(
            NodeKind::Operation(Box::new(Operation::new(left, op, right))),
            span,
        )
    }

    pub fn deferred(operation: DeferredOperation, span: Span) -> Self {
        Node::new(NodeKind::Deferred(Box::new(operation)), span)
    }

    pub fn call(call: Call) -> Self {
        let span = call.span;
        Node::new(NodeKind::Call(call), span)
    }

    pub fn expression(items: Vec<Node>, span: Span) -> Self {
        Node::new(NodeKind::Expression(items), span)
    }

    /// Mark this node as the product of reducing the node at `origin`.
    ///
    /// The result of evaluating a call takes the call's location so
    /// diagnostics and source maps refer to the call site.
    #[must_use]
    pub fn reduced_from(mut self, origin: Span) -> Self {
        self.span = origin;
        self
    }

    pub fn as_number(&self) -> Option<&Number> {
        match &self.kind {
            NodeKind::Number(n) => Some(n),
            _ => None,
        }
    }

    pub fn as_color(&self) -> Option<&Color> {
        match &self.kind {
            NodeKind::Color(c) => Some(c),
            _ => None,
        }
    }

    pub fn is_operation(&self) -> bool {
        matches!(self.kind, NodeKind::Operation(_))
    }

    pub fn is_deferred(&self) -> bool {
        matches!(self.kind, NodeKind::Deferred(_))
    }

    /// Short description of the variant, for error messages.
    pub fn kind_name(&self) -> &'static str {
        match self.kind {
            NodeKind::Number(_) => "number",
            NodeKind::Color(_) => "color",
            NodeKind::Keyword(_) => "keyword",
            NodeKind::Quoted(_) => "string",
            NodeKind::Text(_) => "text",
            NodeKind::Variable(_) => "variable",
            NodeKind::Operation(_) => "operation",
            NodeKind::Deferred(_) => "deferred operation",
            NodeKind::Call(_) => "call",
            NodeKind::Expression(_) => "expression",
        }
    }
}

/// Empty text; the placeholder left behind while a visitor owns a child.
impl Default for Node {
    fn default() -> Self {
        Node::text(String::new(), Span::DUMMY)
    }
}

impl fmt::Debug for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?} @ {:?}", self.kind, self.span)
    }
}
