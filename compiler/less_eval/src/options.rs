//! Evaluation options.

/// Flags that change how values evaluate and print.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(default)
)]
pub struct EvalOptions {
    /// Leave arithmetic inside function arguments unevaluated and print it
    /// as written (`rgba(255, 1 + 2)` stays `1 + 2`).
    pub strict_math: bool,
    /// Minified output: no space after argument commas, shortest color and
    /// number forms.
    pub compress: bool,
}

impl EvalOptions {
    /// Separator between function arguments.
    pub const fn argument_separator(self) -> &'static str {
        if self.compress {
            ","
        } else {
            ", "
        }
    }
}
