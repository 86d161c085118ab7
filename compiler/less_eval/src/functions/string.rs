//! String builtins.

use less_ir::{Node, Quoted};

use super::{check_arity, text_arg, CallSite, FunctionRegistry};
use crate::{EvalContext, EvalResult};

pub(super) fn register(registry: &mut FunctionRegistry) {
    registry.register_fn("e", escape);
}

/// `e("ms:alwaysHasItsOwnSyntax()")` emits the string without quotes.
fn escape(site: &CallSite<'_>, _ctx: &mut EvalContext, args: &[Node]) -> EvalResult {
    check_arity(site, args, 1, Some(1))?;
    let text = text_arg(site, args, 0)?;
    Ok(Node::quoted(Quoted::escaped(text), site.span))
}
