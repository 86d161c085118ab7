//! Less Eval - value evaluation and CSS emission for the less-rs compiler.
//!
//! Entry points:
//! - [`Evaluate`] reduces a value tree in an [`EvalContext`]
//! - [`evaluate_call`] evaluates a single function call, dispatching to the
//!   [`FunctionRegistry`] or printing the call back as text
//! - [`Emit`] / [`EvalContext::render`] print value trees as CSS
//!
//! Strict math is implemented as a tree rewrite: call arguments are passed
//! through [`SuppressOperationEvaluation`] before they are evaluated.

mod call;
mod context;
mod emit;
mod environment;
pub mod errors;
mod evaluate;
pub mod functions;
mod operators;
mod options;
mod output;
mod shared;
mod substitute;

pub use less_ir::{Call, DeferredOperation, Node, NodeKind, Operation, Span};

pub use call::{evaluate_call, SuppressOperationEvaluation};
pub use context::{EvalContext, EvalContextBuilder, ScopedOutput};
pub use emit::{format_color, format_number, Emit};
pub use environment::Environment;
pub use errors::{EvalError, EvalErrorKind, EvalResult};
pub use evaluate::Evaluate;
pub use functions::{CallSite, Function, FunctionRegistry};
pub use operators::evaluate_binary;
pub use options::EvalOptions;
pub use output::OutputStack;
pub use shared::SharedRegistry;
pub use substitute::SubstituteVariables;
