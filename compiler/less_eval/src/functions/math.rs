//! Numeric builtins.

use less_ir::{Node, NodeKind, Number};

use super::{check_arity, number_arg, text_arg, CallSite, FunctionRegistry};
use crate::errors::{incompatible_units, non_finite};
use crate::{EvalContext, EvalResult};

/// Most decimal places `round` honours; `10^places` stays exact below this.
const MAX_ROUND_PLACES: f64 = 15.0;

pub(super) fn register(registry: &mut FunctionRegistry) {
    registry.register_fn("percentage", percentage);
    registry.register_fn("round", round);
    registry.register_fn("ceil", ceil);
    registry.register_fn("floor", floor);
    registry.register_fn("abs", abs);
    registry.register_fn("sqrt", sqrt);
    registry.register_fn("min", min);
    registry.register_fn("max", max);
    registry.register_fn("unit", unit);
}

/// `percentage(0.5)` → `50%`
fn percentage(site: &CallSite<'_>, _ctx: &mut EvalContext, args: &[Node]) -> EvalResult {
    check_arity(site, args, 1, Some(1))?;
    let number = number_arg(site, args, 0)?;
    let value = finite(site, number.value * 100.0)?;
    Ok(Node::dimension(value, "%", site.span))
}

/// `round(1.67)` → `2`, `round(1.67, 1)` → `1.7`
fn round(site: &CallSite<'_>, _ctx: &mut EvalContext, args: &[Node]) -> EvalResult {
    check_arity(site, args, 1, Some(2))?;
    let number = number_arg(site, args, 0)?;
    let places = if args.len() == 2 {
        number_arg(site, args, 1)?
            .value
            .trunc()
            .clamp(0.0, MAX_ROUND_PLACES)
    } else {
        0.0
    };
    let factor = 10f64.powf(places);
    with_value(number, (number.value * factor).round() / factor, site)
}

fn ceil(site: &CallSite<'_>, _ctx: &mut EvalContext, args: &[Node]) -> EvalResult {
    map_number(site, args, f64::ceil)
}

fn floor(site: &CallSite<'_>, _ctx: &mut EvalContext, args: &[Node]) -> EvalResult {
    map_number(site, args, f64::floor)
}

fn abs(site: &CallSite<'_>, _ctx: &mut EvalContext, args: &[Node]) -> EvalResult {
    map_number(site, args, f64::abs)
}

fn sqrt(site: &CallSite<'_>, _ctx: &mut EvalContext, args: &[Node]) -> EvalResult {
    map_number(site, args, f64::sqrt)
}

fn min(site: &CallSite<'_>, _ctx: &mut EvalContext, args: &[Node]) -> EvalResult {
    select(site, args, |candidate, best| candidate < best)
}

fn max(site: &CallSite<'_>, _ctx: &mut EvalContext, args: &[Node]) -> EvalResult {
    select(site, args, |candidate, best| candidate > best)
}

/// `unit(5, px)` → `5px`, `unit(5px)` → `5`
fn unit(site: &CallSite<'_>, _ctx: &mut EvalContext, args: &[Node]) -> EvalResult {
    check_arity(site, args, 1, Some(2))?;
    let number = number_arg(site, args, 0)?;
    let unit = if args.len() == 2 {
        Some(text_arg(site, args, 1)?)
    } else {
        None
    };
    let number = Number {
        value: number.value,
        unit: unit.filter(|u| !u.is_empty()).map(str::to_string),
    };
    Ok(Node::new(NodeKind::Number(number), site.span))
}

fn map_number(site: &CallSite<'_>, args: &[Node], f: fn(f64) -> f64) -> EvalResult {
    check_arity(site, args, 1, Some(1))?;
    let number = number_arg(site, args, 0)?;
    with_value(number, f(number.value), site)
}

fn with_value(number: &Number, value: f64, site: &CallSite<'_>) -> EvalResult {
    let number = Number {
        value: finite(site, value)?,
        unit: number.unit.clone(),
    };
    Ok(Node::new(NodeKind::Number(number), site.span))
}

fn finite(site: &CallSite<'_>, value: f64) -> EvalResult<f64> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(non_finite(format!("{}()", site.name)).with_span(site.span))
    }
}

/// Return the argument `prefer` favours. Units must agree where present.
fn select(site: &CallSite<'_>, args: &[Node], prefer: fn(f64, f64) -> bool) -> EvalResult {
    check_arity(site, args, 1, None)?;
    let mut best = number_arg(site, args, 0)?;
    let mut unit = best.unit.as_deref();
    for index in 1..args.len() {
        let candidate = number_arg(site, args, index)?;
        match (unit, candidate.unit.as_deref()) {
            (Some(seen), Some(other)) if seen != other => {
                return Err(incompatible_units(site.name, seen, other).with_span(site.span));
            }
            (None, Some(other)) => unit = Some(other),
            _ => {}
        }
        if prefer(candidate.value, best.value) {
            best = candidate;
        }
    }
    Ok(Node::new(NodeKind::Number(best.clone()), site.span))
}
