//! Less IR - value tree types for the less-rs compiler.
//!
//! This crate holds the data the evaluator works on:
//! - [`Span`] for source locations
//! - [`Node`] / [`NodeKind`] for value trees (numbers, colors, calls, operations, ...)
//! - [`Call`], [`Operation`] and [`DeferredOperation`] for the composite variants
//! - [`Visitor`] for in-place tree rewriting
//!
//! Nothing here evaluates or emits; see `less_eval` for that.

pub mod ast;
mod span;
mod traits;
pub mod visitor;

pub use ast::{
    BinaryOp, Call, Color, DeferredOperation, Node, NodeKind, Number, Operation, Quoted,
};
pub use span::{Span, SpanError};
pub use traits::Spanned;
pub use visitor::{visit_and_replace, visit_in_place, walk_node, Visitor};
