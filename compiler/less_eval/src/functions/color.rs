//! Color constructors.

use less_ir::{Color, Node};

use super::{check_arity, color_arg, number_arg, CallSite, FunctionRegistry};
use crate::errors::arity_mismatch_choices;
use crate::{EvalContext, EvalResult};

pub(super) fn register(registry: &mut FunctionRegistry) {
    registry.register_fn("rgb", rgb);
    registry.register_fn("rgba", rgba);
}

/// `rgb(255, 0, 50%)`
fn rgb(site: &CallSite<'_>, _ctx: &mut EvalContext, args: &[Node]) -> EvalResult {
    check_arity(site, args, 3, Some(3))?;
    let [r, g, b] = channels(site, args)?;
    Ok(Node::color(Color::rgb(r, g, b), site.span))
}

/// `rgba(255, 0, 0, 0.5)` or `rgba(#f00, 50%)`
fn rgba(site: &CallSite<'_>, _ctx: &mut EvalContext, args: &[Node]) -> EvalResult {
    match args.len() {
        2 => {
            let color = color_arg(site, args, 0)?;
            let [r, g, b] = color.rgb;
            Ok(Node::color(Color::rgba(r, g, b, alpha(site, args, 1)?), site.span))
        }
        4 => {
            let [r, g, b] = channels(site, args)?;
            Ok(Node::color(Color::rgba(r, g, b, alpha(site, args, 3)?), site.span))
        }
        got => Err(arity_mismatch_choices(site.name, &[2, 4], got).with_span(site.span)),
    }
}

/// First three arguments as 0..255 channels; `%` scales from 0..100.
fn channels(site: &CallSite<'_>, args: &[Node]) -> EvalResult<[f64; 3]> {
    let mut rgb = [0.0; 3];
    for (index, slot) in rgb.iter_mut().enumerate() {
        let number = number_arg(site, args, index)?;
        *slot = if number.unit_str() == "%" {
            number.value * 255.0 / 100.0
        } else {
            number.value
        };
    }
    Ok(rgb)
}

fn alpha(site: &CallSite<'_>, args: &[Node], index: usize) -> EvalResult<f64> {
    let number = number_arg(site, args, index)?;
    Ok(if number.unit_str() == "%" {
        number.value / 100.0
    } else {
        number.value
    })
}
