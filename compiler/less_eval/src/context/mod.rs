//! Evaluation context.
//!
//! One [`EvalContext`] lives for one compilation. It is threaded by `&mut`
//! through every evaluate/emit step and carries:
//! - [`EvalOptions`]: strict math and compression flags
//! - the builtin [`FunctionRegistry`], behind a cheap-to-clone handle
//! - the scoped [`OutputStack`] that emission writes into
//! - the variable [`Environment`]
//!
//! Nested calls deepen and unwind the output stack strictly in order; the
//! context is not meant to be shared between threads mid-compilation.

mod builder;
mod scope_guard;

pub use builder::EvalContextBuilder;
pub use scope_guard::ScopedOutput;

use less_ir::{Node, Span};

use crate::errors::{recursive_variable, undefined_variable};
use crate::functions::{Function, FunctionRegistry};
use crate::{Emit, Environment, EvalOptions, EvalResult, Evaluate, OutputStack, SharedRegistry};

pub struct EvalContext {
    pub options: EvalOptions,
    pub output: OutputStack,
    pub env: Environment,
    functions: SharedRegistry<FunctionRegistry>,
    /// Variables currently being resolved, innermost last.
    resolving: Vec<String>,
}

impl EvalContext {
    /// Default options with the builtin function library.
    pub fn new() -> Self {
        EvalContextBuilder::new().build()
    }

    pub fn builder() -> EvalContextBuilder {
        EvalContextBuilder::new()
    }

    pub fn strict_math(&self) -> bool {
        self.options.strict_math
    }

    pub fn compress(&self) -> bool {
        self.options.compress
    }

    /// `","` when compressing, `", "` otherwise.
    pub fn argument_separator(&self) -> &'static str {
        self.options.argument_separator()
    }

    pub fn functions(&self) -> &SharedRegistry<FunctionRegistry> {
        &self.functions
    }

    /// Builtin registered under `name`. The borrow ties the function to the
    /// context, so call dispatch clones [`Self::functions`] instead.
    pub fn lookup_function(&self, name: &str) -> Option<&dyn Function> {
        self.functions.get(name)
    }

    /// Emit `node` into a fresh buffer and return the text.
    pub fn render(&mut self, node: &Node) -> String {
        let mut scoped = self.scoped_output();
        node.emit(&mut scoped);
        scoped.finish()
    }

    /// Emit `nodes` into the current buffer with `separator` between them.
    pub fn emit_joined(&mut self, nodes: &[Node], separator: &str) {
        for (i, node) in nodes.iter().enumerate() {
            if i > 0 {
                self.output.append(separator);
            }
            node.emit(self);
        }
    }

    /// Evaluate the value bound to `@name`.
    ///
    /// Fails on unbound names and on definitions that refer back to
    /// themselves (`@a: @b; @b: @a;`).
    pub fn resolve_variable(&mut self, name: &str, span: Span) -> EvalResult {
        if self.resolving.iter().any(|pending| pending == name) {
            return Err(recursive_variable(name).with_span(span));
        }
        let Some(value) = self.env.lookup(name).cloned() else {
            return Err(undefined_variable(name).with_span(span));
        };
        self.resolving.push(name.to_string());
        let result = value.evaluate(self);
        self.resolving.pop();
        result.map(|node| node.reduced_from(span))
    }
}

impl Default for EvalContext {
    fn default() -> Self {
        Self::new()
    }
}
