//! CSS text emission.
//!
//! [`Emit`] appends a node's CSS form to the context's current output
//! buffer. Emission never fails: unevaluated operations and unresolved
//! variables print as written.

use less_ir::{Call, Color, DeferredOperation, Node, NodeKind, Number, Operation};
use less_stack::ensure_sufficient_stack;

use crate::{EvalContext, EvalOptions};

/// Digits kept after the decimal point.
const MAX_DECIMALS: usize = 8;

pub trait Emit {
    fn emit(&self, ctx: &mut EvalContext);
}

impl Emit for Node {
    fn emit(&self, ctx: &mut EvalContext) {
        ensure_sufficient_stack(|| emit_node(self, ctx));
    }
}

impl Emit for Operation {
    fn emit(&self, ctx: &mut EvalContext) {
        emit_infix(self, ctx);
    }
}

impl Emit for DeferredOperation {
    /// `left op right`, exactly as the operation would print unwrapped.
    fn emit(&self, ctx: &mut EvalContext) {
        emit_infix(self.operation(), ctx);
    }
}

impl Emit for Call {
    fn emit(&self, ctx: &mut EvalContext) {
        let separator = ctx.argument_separator();
        ctx.output.append(&self.name).append("(");
        ctx.emit_joined(&self.arguments, separator);
        ctx.output.append(")");
    }
}

fn emit_node(node: &Node, ctx: &mut EvalContext) {
    match &node.kind {
        NodeKind::Number(number) => {
            let text = format_number(number, ctx.compress());
            ctx.output.append(&text);
        }
        NodeKind::Color(color) => {
            let text = format_color(color, ctx.options);
            ctx.output.append(&text);
        }
        NodeKind::Keyword(text) | NodeKind::Text(text) => {
            ctx.output.append(text);
        }
        NodeKind::Quoted(quoted) if quoted.escaped => {
            ctx.output.append(&quoted.value);
        }
        NodeKind::Quoted(quoted) => {
            let mut buf = [0; 4];
            let quote: &str = quoted.quote.encode_utf8(&mut buf);
            ctx.output.append(quote).append(&quoted.value).append(quote);
        }
        NodeKind::Variable(name) => {
            ctx.output.append("@").append(name);
        }
        NodeKind::Operation(operation) => operation.emit(ctx),
        NodeKind::Deferred(deferred) => deferred.emit(ctx),
        NodeKind::Call(call) => call.emit(ctx),
        NodeKind::Expression(items) => ctx.emit_joined(items, " "),
    }
}

fn emit_infix(operation: &Operation, ctx: &mut EvalContext) {
    operation.left.emit(ctx);
    ctx.output
        .append(" ")
        .append(operation.op.as_symbol())
        .append(" ");
    operation.right.emit(ctx);
}

/// Print a number with its unit.
///
/// At most eight decimals survive, trailing zeros are trimmed, and
/// negative zero prints as `0`. With `compress`, a leading `0.` shortens to
/// `.` (`0.5em` → `.5em`).
pub fn format_number(number: &Number, compress: bool) -> String {
    let mut text = format_float(number.value);
    if compress {
        if let Some(rest) = text.strip_prefix("0.") {
            text = format!(".{rest}");
        } else if let Some(rest) = text.strip_prefix("-0.") {
            text = format!("-.{rest}");
        }
    }
    text.push_str(number.unit_str());
    text
}

fn format_float(value: f64) -> String {
    let mut text = format!("{value:.MAX_DECIMALS$}");
    if text.contains('.') {
        let trimmed = text.trim_end_matches('0').trim_end_matches('.').len();
        text.truncate(trimmed);
    }
    if text == "-0" {
        text.remove(0);
    }
    text
}

/// Print a color.
///
/// Opaque colors print as hex, shortened to `#rgb` under `compress` when
/// every channel repeats its digit. Translucent colors print as
/// `rgba(r, g, b, a)`.
pub fn format_color(color: &Color, options: EvalOptions) -> String {
    let [r, g, b] = color.clamped_rgb();
    let alpha = color.clamped_alpha();
    if alpha < 1.0 {
        let separator = options.argument_separator();
        return format!(
            "rgba({r}{separator}{g}{separator}{b}{separator}{})",
            format_float(alpha)
        );
    }

    let shorthand = [r, g, b].iter().all(|c| c >> 4 == c & 0x0f);
    if options.compress && shorthand {
        format!("#{:x}{:x}{:x}", r & 0x0f, g & 0x0f, b & 0x0f)
    } else {
        format!("#{r:02x}{g:02x}{b:02x}")
    }
}
