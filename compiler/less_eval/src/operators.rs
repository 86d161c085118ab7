//! Binary arithmetic on evaluated operands.
//!
//! Direct enum dispatch over the operand pair. Supported shapes:
//! - number ∘ number: the result takes the left unit, else the right one
//! - color ∘ color: per channel; alphas composite
//! - color ∘ number: the number applies to every channel
//! - number + color, number * color: commuted to color ∘ number

use less_ir::{BinaryOp, Color, Node, NodeKind, Number, Operation, Span};

use crate::errors::{division_by_zero, invalid_operation, non_finite};
use crate::{EvalContext, EvalResult, Evaluate};

/// Evaluate both operands, then combine them. The result carries `span`.
pub fn evaluate_operation(operation: &Operation, span: Span, ctx: &mut EvalContext) -> EvalResult {
    let left = operation.left.evaluate(ctx)?;
    let right = operation.right.evaluate(ctx)?;
    let kind = evaluate_binary(&left, operation.op, &right).map_err(|e| e.or_span(span))?;
    Ok(Node::new(kind, span))
}

/// Combine two evaluated operands.
pub fn evaluate_binary(left: &Node, op: BinaryOp, right: &Node) -> EvalResult<NodeKind> {
    match (&left.kind, &right.kind) {
        (NodeKind::Number(a), NodeKind::Number(b)) => number_binary(a, op, b).map(NodeKind::Number),
        (NodeKind::Color(a), NodeKind::Color(b)) => color_binary(a, op, b).map(NodeKind::Color),
        (NodeKind::Color(a), NodeKind::Number(b)) => {
            color_scalar(a, op, b.value).map(NodeKind::Color)
        }
        (NodeKind::Number(a), NodeKind::Color(b)) if op.is_commutative() => {
            color_scalar(b, op, a.value).map(NodeKind::Color)
        }
        _ => Err(invalid_operation(op, left.kind_name(), right.kind_name())),
    }
}

fn apply(a: f64, op: BinaryOp, b: f64) -> EvalResult<f64> {
    let result = match op {
        BinaryOp::Add => a + b,
        BinaryOp::Sub => a - b,
        BinaryOp::Mul => a * b,
        BinaryOp::Div if b == 0.0 => return Err(division_by_zero()),
        BinaryOp::Div => a / b,
    };
    if !result.is_finite() {
        return Err(non_finite(format!("`{op}`")));
    }
    Ok(result)
}

fn number_binary(a: &Number, op: BinaryOp, b: &Number) -> EvalResult<Number> {
    Ok(Number {
        value: apply(a.value, op, b.value)?,
        unit: a.unit.clone().or_else(|| b.unit.clone()),
    })
}

fn color_binary(a: &Color, op: BinaryOp, b: &Color) -> EvalResult<Color> {
    let mut rgb = [0.0; 3];
    for (slot, (x, y)) in rgb.iter_mut().zip(a.rgb.iter().zip(&b.rgb)) {
        *slot = apply(*x, op, *y)?;
    }
    Ok(Color {
        rgb,
        alpha: a.alpha * (1.0 - b.alpha) + b.alpha,
    })
}

fn color_scalar(color: &Color, op: BinaryOp, scalar: f64) -> EvalResult<Color> {
    let mut rgb = [0.0; 3];
    for (slot, channel) in rgb.iter_mut().zip(&color.rgb) {
        *slot = apply(*channel, op, scalar)?;
    }
    Ok(Color {
        rgb,
        alpha: color.alpha,
    })
}

#[cfg(test)]
mod tests;
