//! Builtin function registry.
//!
//! A call whose name is registered here is dispatched to the function,
//! which receives the already-evaluated arguments and returns the node
//! that replaces the call. Unregistered names fall back to passthrough
//! text emission in [`crate::evaluate_call`].
//!
//! The registry is open: hosts add their own functions through
//! [`FunctionRegistry::register`] or [`FunctionRegistry::register_fn`].
//!
//! # Builtins
//!
//! - `math`: `percentage`, `round`, `ceil`, `floor`, `abs`, `sqrt`, `min`, `max`, `unit`
//! - `color`: `rgb`, `rgba`
//! - `string`: `e`

mod color;
mod math;
mod string;

use std::fmt;

use less_ir::{Color, Node, NodeKind, Number, Span};
use rustc_hash::FxHashMap;

use crate::errors::{arity_mismatch, wrong_argument_type};
use crate::{EvalContext, EvalResult};

/// Metadata stamped onto each invocation: the calling node's name (as
/// written) and source location.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CallSite<'a> {
    pub name: &'a str,
    pub span: Span,
}

impl<'a> CallSite<'a> {
    pub fn new(name: &'a str, span: Span) -> Self {
        CallSite { name, span }
    }
}

/// A callable builtin.
pub trait Function: Send + Sync {
    fn call(&self, site: &CallSite<'_>, ctx: &mut EvalContext, args: &[Node]) -> EvalResult;
}

impl<F> Function for F
where
    F: Fn(&CallSite<'_>, &mut EvalContext, &[Node]) -> EvalResult + Send + Sync,
{
    fn call(&self, site: &CallSite<'_>, ctx: &mut EvalContext, args: &[Node]) -> EvalResult {
        self(site, ctx, args)
    }
}

/// Name → function table. Names match ASCII case-insensitively, like CSS
/// function names.
pub struct FunctionRegistry {
    functions: FxHashMap<String, Box<dyn Function>>,
}

impl FunctionRegistry {
    /// Empty registry: every call is emitted as passthrough text.
    pub fn new() -> Self {
        FunctionRegistry {
            functions: FxHashMap::default(),
        }
    }

    /// Registry with the builtin library installed.
    pub fn with_builtins() -> Self {
        let mut registry = Self::new();
        math::register(&mut registry);
        color::register(&mut registry);
        string::register(&mut registry);
        registry
    }

    /// Register `function` under `name`, replacing any previous entry.
    pub fn register<F: Function + 'static>(&mut self, name: &str, function: F) {
        self.functions
            .insert(name.to_ascii_lowercase(), Box::new(function));
    }

    /// Register a plain function or closure.
    pub fn register_fn<F>(&mut self, name: &str, function: F)
    where
        F: Fn(&CallSite<'_>, &mut EvalContext, &[Node]) -> EvalResult + Send + Sync + 'static,
    {
        self.register(name, function);
    }

    pub fn get(&self, name: &str) -> Option<&dyn Function> {
        self.functions
            .get(name.to_ascii_lowercase().as_str())
            .map(|function| &**function)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.functions
            .contains_key(name.to_ascii_lowercase().as_str())
    }

    pub fn len(&self) -> usize {
        self.functions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.functions.is_empty()
    }

    /// Registered names, lowercased, in no particular order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.functions.keys().map(String::as_str)
    }
}

impl Default for FunctionRegistry {
    fn default() -> Self {
        Self::with_builtins()
    }
}

impl fmt::Debug for FunctionRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut names: Vec<&str> = self.names().collect();
        names.sort_unstable();
        f.debug_struct("FunctionRegistry")
            .field("functions", &names)
            .finish()
    }
}

// Argument helpers shared by the builtin modules.

/// Check `min <= args.len() <= max`; `max == None` means variadic.
pub fn check_arity(
    site: &CallSite<'_>,
    args: &[Node],
    min: usize,
    max: Option<usize>,
) -> EvalResult<()> {
    let got = args.len();
    if got < min || max.is_some_and(|max| got > max) {
        return Err(arity_mismatch(site.name, min, max, got).with_span(site.span));
    }
    Ok(())
}

/// The `index`th argument as a number.
pub fn number_arg<'a>(
    site: &CallSite<'_>,
    args: &'a [Node],
    index: usize,
) -> EvalResult<&'a Number> {
    match args.get(index) {
        Some(Node {
            kind: NodeKind::Number(number),
            ..
        }) => Ok(number),
        other => Err(argument_error(site, index, "number", other)),
    }
}

/// The `index`th argument as a color.
pub fn color_arg<'a>(
    site: &CallSite<'_>,
    args: &'a [Node],
    index: usize,
) -> EvalResult<&'a Color> {
    match args.get(index) {
        Some(Node {
            kind: NodeKind::Color(color),
            ..
        }) => Ok(color),
        other => Err(argument_error(site, index, "color", other)),
    }
}

/// Text of a keyword, string or text argument.
pub fn text_arg<'a>(
    site: &CallSite<'_>,
    args: &'a [Node],
    index: usize,
) -> EvalResult<&'a str> {
    match args.get(index).map(|node| &node.kind) {
        Some(NodeKind::Keyword(text) | NodeKind::Text(text)) => Ok(text.as_str()),
        Some(NodeKind::Quoted(quoted)) => Ok(quoted.value.as_str()),
        _ => Err(argument_error(site, index, "string", args.get(index))),
    }
}

fn argument_error(
    site: &CallSite<'_>,
    index: usize,
    expected: &'static str,
    got: Option<&Node>,
) -> crate::EvalError {
    let span = got.map_or(site.span, |node| node.span);
    let got = got.map_or("nothing", Node::kind_name);
    wrong_argument_type(site.name, index + 1, expected, got).with_span(span)
}
