//! `EvalContextBuilder` for configuring an evaluation context.

use less_ir::Node;

use super::EvalContext;
use crate::functions::FunctionRegistry;
use crate::{Environment, EvalOptions, OutputStack, SharedRegistry};

/// Builder for [`EvalContext`].
///
/// ```text
/// let mut ctx = EvalContext::builder()
///     .strict_math(true)
///     .compress(true)
///     .variable("gutter", Node::dimension(20.0, "px", span))
///     .build();
/// ```
pub struct EvalContextBuilder {
    options: EvalOptions,
    functions: Option<SharedRegistry<FunctionRegistry>>,
    variables: Vec<(String, Node)>,
}

impl EvalContextBuilder {
    pub fn new() -> Self {
        EvalContextBuilder {
            options: EvalOptions::default(),
            functions: None,
            variables: Vec::new(),
        }
    }

    /// Replace all options at once, e.g. with values loaded from config.
    #[must_use]
    pub fn options(mut self, options: EvalOptions) -> Self {
        self.options = options;
        self
    }

    #[must_use]
    pub fn strict_math(mut self, strict_math: bool) -> Self {
        self.options.strict_math = strict_math;
        self
    }

    #[must_use]
    pub fn compress(mut self, compress: bool) -> Self {
        self.options.compress = compress;
        self
    }

    /// Use `registry` instead of the builtin library.
    #[must_use]
    pub fn functions(mut self, registry: FunctionRegistry) -> Self {
        self.functions = Some(SharedRegistry::new(registry));
        self
    }

    /// Share an existing registry with other contexts.
    #[must_use]
    pub fn shared_functions(mut self, registry: SharedRegistry<FunctionRegistry>) -> Self {
        self.functions = Some(registry);
        self
    }

    /// Bind a global variable (name without `@`).
    #[must_use]
    pub fn variable(mut self, name: impl Into<String>, value: Node) -> Self {
        self.variables.push((name.into(), value));
        self
    }

    pub fn build(self) -> EvalContext {
        let functions = self
            .functions
            .unwrap_or_else(|| SharedRegistry::new(FunctionRegistry::with_builtins()));

        let mut env = Environment::new();
        for (name, value) in self.variables {
            env.define(name, value);
        }

        tracing::debug!(
            strict_math = self.options.strict_math,
            compress = self.options.compress,
            functions = functions.len(),
            "built evaluation context"
        );

        EvalContext {
            options: self.options,
            output: OutputStack::new(),
            env,
            functions,
            resolving: Vec::new(),
        }
    }
}

impl Default for EvalContextBuilder {
    fn default() -> Self {
        Self::new()
    }
}
