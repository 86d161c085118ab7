//! Function call evaluation.
//!
//! A call evaluates its arguments, then either dispatches to a registered
//! builtin or prints itself back as CSS text (`name(arg1, arg2)`), so
//! unknown functions such as `translate()` or `var()` pass through.
//!
//! Under strict math, arithmetic written directly in the arguments is not
//! computed. Before evaluation the arguments are rewritten with
//! [`SuppressOperationEvaluation`], which wraps each top-level operation in a
//! [`DeferredOperation`](less_ir::DeferredOperation). The rewrite acts on a
//! copy; the call node itself is never modified, so evaluating it twice
//! gives the same answer.

mod suppress;

pub use suppress::SuppressOperationEvaluation;

use less_ir::{visit_and_replace, Call, Node};

use crate::errors::invalid_argument;
use crate::functions::CallSite;
use crate::{EvalContext, EvalResult, Evaluate};

/// Evaluate `call` in `ctx`.
///
/// A missing context is reported as `InvalidArgument { param: "context" }`
/// without touching anything. Argument and builtin errors propagate
/// unchanged; for unknown functions the output stack is back at its entry
/// depth on every path.
#[tracing::instrument(level = "debug", skip_all, fields(name = %call.name))]
pub fn evaluate_call(call: &Call, ctx: Option<&mut EvalContext>) -> EvalResult {
    let Some(ctx) = ctx else {
        return Err(invalid_argument("context").with_span(call.span));
    };

    let mut arguments = call.arguments.clone();
    if ctx.strict_math() {
        visit_and_replace(&mut arguments, &mut SuppressOperationEvaluation);
    }

    let args = arguments
        .iter()
        .map(|argument| argument.evaluate(ctx))
        .collect::<EvalResult<Vec<_>>>()?;

    let functions = ctx.functions().clone();
    if let Some(function) = functions.get(&call.name) {
        tracing::debug!(args = args.len(), "calling builtin");
        let site = CallSite::new(&call.name, call.span);
        let result = function.call(&site, ctx, &args)?;
        return Ok(result.reduced_from(call.span));
    }

    tracing::debug!(args = args.len(), "unknown function, emitting as text");
    let separator = ctx.argument_separator();
    let mut scoped = ctx.scoped_output();
    scoped.output.append(&call.name).append("(");
    scoped.emit_joined(&args, separator);
    scoped.output.append(")");
    Ok(Node::text(scoped.finish(), call.span))
}
