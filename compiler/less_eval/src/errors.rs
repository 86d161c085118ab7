//! Evaluation errors.
//!
//! [`EvalErrorKind`] is the structured category; [`EvalError`] pairs it
//! with the span it was raised at. Factory functions below are the
//! public way to build errors so messages stay uniform.
//!
//! Errors raised by builtin functions pass through call evaluation
//! untouched: the call layer neither catches nor rewraps them.

use less_ir::{BinaryOp, Span};

use crate::Node;

/// Result of evaluating a node.
pub type EvalResult<T = Node> = Result<T, EvalError>;

/// Structured error category.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum EvalErrorKind {
    /// A required collaborator was not supplied (e.g. no evaluation context).
    #[error("invalid argument: `{param}` must be provided")]
    InvalidArgument { param: &'static str },

    #[error("undefined variable: @{name}")]
    UndefinedVariable { name: String },

    #[error("recursive variable definition for @{name}")]
    RecursiveVariable { name: String },

    #[error("{function}() expects {expected} argument(s), got {got}")]
    ArityMismatch {
        function: String,
        expected: String,
        got: usize,
    },

    #[error("{function}() expects a {expected} as argument {position}, got {got}")]
    WrongArgumentType {
        function: String,
        position: usize,
        expected: &'static str,
        got: &'static str,
    },

    #[error("{function}() cannot compare `{left}` with `{right}`")]
    IncompatibleUnits {
        function: String,
        left: String,
        right: String,
    },

    #[error("operator `{op}` cannot be applied to {left} and {right}")]
    InvalidOperation {
        op: BinaryOp,
        left: &'static str,
        right: &'static str,
    },

    #[error("division by zero")]
    DivisionByZero,

    /// Arithmetic overflowed or left the real numbers (`sqrt(-4)`).
    #[error("{operation} does not produce a finite number")]
    NonFinite { operation: String },

    /// Free-form error, mainly for user-registered functions.
    #[error("{message}")]
    Custom { message: String },
}

/// Evaluation error with an optional source location.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("{kind}")]
pub struct EvalError {
    pub kind: EvalErrorKind,
    pub span: Option<Span>,
}

impl EvalError {
    /// Free-form error with `Custom` kind.
    pub fn new(message: impl Into<String>) -> Self {
        EvalErrorKind::Custom {
            message: message.into(),
        }
        .into()
    }

    /// Attach a span, replacing any existing one.
    #[must_use]
    pub fn with_span(mut self, span: Span) -> Self {
        self.span = Some(span);
        self
    }

    /// Attach a span only if none was recorded closer to the fault.
    #[must_use]
    pub fn or_span(mut self, span: Span) -> Self {
        self.span.get_or_insert(span);
        self
    }
}

impl From<EvalErrorKind> for EvalError {
    fn from(kind: EvalErrorKind) -> Self {
        EvalError { kind, span: None }
    }
}

pub fn invalid_argument(param: &'static str) -> EvalError {
    EvalErrorKind::InvalidArgument { param }.into()
}

pub fn undefined_variable(name: &str) -> EvalError {
    EvalErrorKind::UndefinedVariable {
        name: name.to_string(),
    }
    .into()
}

pub fn recursive_variable(name: &str) -> EvalError {
    EvalErrorKind::RecursiveVariable {
        name: name.to_string(),
    }
    .into()
}

/// Arity error; `max == None` means variadic.
pub fn arity_mismatch(function: &str, min: usize, max: Option<usize>, got: usize) -> EvalError {
    let expected = match max {
        Some(max) if max == min => min.to_string(),
        Some(max) => format!("{min} to {max}"),
        None => format!("at least {min}"),
    };
    EvalErrorKind::ArityMismatch {
        function: function.to_string(),
        expected,
        got,
    }
    .into()
}

/// Arity error for functions taking one of several fixed counts.
pub fn arity_mismatch_choices(function: &str, counts: &[usize], got: usize) -> EvalError {
    let expected = match counts {
        [] => "0".to_string(),
        [only] => only.to_string(),
        [rest @ .., last] => {
            let rest: Vec<String> = rest.iter().map(ToString::to_string).collect();
            format!("{} or {last}", rest.join(", "))
        }
    };
    EvalErrorKind::ArityMismatch {
        function: function.to_string(),
        expected,
        got,
    }
    .into()
}

/// `position` is 1-based.
pub fn wrong_argument_type(
    function: &str,
    position: usize,
    expected: &'static str,
    got: &'static str,
) -> EvalError {
    EvalErrorKind::WrongArgumentType {
        function: function.to_string(),
        position,
        expected,
        got,
    }
    .into()
}

pub fn incompatible_units(function: &str, left: &str, right: &str) -> EvalError {
    EvalErrorKind::IncompatibleUnits {
        function: function.to_string(),
        left: left.to_string(),
        right: right.to_string(),
    }
    .into()
}

pub fn invalid_operation(op: BinaryOp, left: &'static str, right: &'static str) -> EvalError {
    EvalErrorKind::InvalidOperation { op, left, right }.into()
}

pub fn division_by_zero() -> EvalError {
    EvalErrorKind::DivisionByZero.into()
}

pub fn non_finite(operation: impl Into<String>) -> EvalError {
    EvalErrorKind::NonFinite {
        operation: operation.into(),
    }
    .into()
}
