//! Property tests over generated value trees.

#![allow(clippy::unwrap_used, clippy::expect_used, reason = "Tests can panic")]
#![allow(
    clippy::doc_markdown,
    clippy::redundant_closure_for_method_calls,
    reason = "Proptest macros generate code with these patterns"
)]

mod common;

use less_eval::{
    evaluate_call, format_number, Call, CallSite, EvalContext, FunctionRegistry, Node, NodeKind,
    Span, SuppressOperationEvaluation,
};
use less_ir::{visit_and_replace, BinaryOp, Number, Visitor};
use proptest::prelude::*;

// -- Strategies --

fn leaf_strategy() -> impl Strategy<Value = Node> {
    prop_oneof![
        (-1000i32..1000).prop_map(|v| Node::number(f64::from(v), Span::DUMMY)),
        (0i32..100, prop::sample::select(vec!["px", "em", "%"]))
            .prop_map(|(v, unit)| Node::dimension(f64::from(v), unit, Span::DUMMY)),
        prop::sample::select(vec!["auto", "solid", "red"])
            .prop_map(|word| Node::keyword(word, Span::DUMMY)),
    ]
}

fn op_strategy() -> impl Strategy<Value = BinaryOp> {
    prop::sample::select(vec![BinaryOp::Add, BinaryOp::Sub, BinaryOp::Mul, BinaryOp::Div])
}

/// Leaves, operations, expressions and calls to an unregistered `fn`.
fn value_strategy() -> impl Strategy<Value = Node> {
    leaf_strategy().prop_recursive(4, 32, 4, |inner| {
        prop_oneof![
            (inner.clone(), op_strategy(), inner.clone())
                .prop_map(|(left, op, right)| Node::operation(left, op, right)),
            prop::collection::vec(inner.clone(), 1..4)
                .prop_map(|items| Node::expression(items, Span::DUMMY)),
            prop::collection::vec(inner, 0..3)
                .prop_map(|args| Node::call(Call::new("fn", args, Span::DUMMY))),
        ]
    })
}

fn call_strategy() -> impl Strategy<Value = Call> {
    prop::collection::vec(value_strategy(), 0..4)
        .prop_map(|args| Call::new("fn", args, Span::DUMMY))
}

/// An operation reachable without passing through a deferred wrapper.
fn has_bare_operation(node: &Node) -> bool {
    match &node.kind {
        NodeKind::Operation(_) => true,
        NodeKind::Call(call) => call.arguments.iter().any(has_bare_operation),
        NodeKind::Expression(items) => items.iter().any(has_bare_operation),
        _ => false,
    }
}

fn name_strategy() -> impl Strategy<Value = String> {
    prop::string::string_regex("[a-z][a-z0-9-]{0,8}").expect("valid regex")
}

/// Replaces the keyword `target` and leaves everything else alone.
struct ReplaceTarget;

impl Visitor for ReplaceTarget {
    fn visit(&mut self, mut node: Node) -> Node {
        if matches!(&node.kind, NodeKind::Keyword(word) if word == "target") {
            return Node::keyword("replaced", node.span);
        }
        node.accept(self);
        node
    }
}

fn identity_context(strict_math: bool) -> EvalContext {
    let mut registry = FunctionRegistry::new();
    registry.register_fn("id", |_: &CallSite<'_>, _: &mut EvalContext, args: &[Node]| {
        Ok(args[0].clone())
    });
    EvalContext::builder()
        .functions(registry)
        .strict_math(strict_math)
        .build()
}

fn strict_passthrough() -> EvalContext {
    EvalContext::builder()
        .functions(FunctionRegistry::new())
        .strict_math(true)
        .build()
}

proptest! {
    #[test]
    fn suppression_leaves_no_bare_operation(node in value_strategy()) {
        common::init_tracing();
        let suppressed = SuppressOperationEvaluation.visit(node);
        prop_assert!(!has_bare_operation(&suppressed));
    }

    #[test]
    fn suppression_is_idempotent(node in value_strategy()) {
        let once = SuppressOperationEvaluation.visit(node);
        let twice = SuppressOperationEvaluation.visit(once.clone());
        prop_assert_eq!(once, twice);
    }

    #[test]
    fn strict_passthrough_prints_call_as_written(call in call_strategy()) {
        let mut ctx = strict_passthrough();
        let written = ctx.render(&Node::call(call.clone()));
        let result = evaluate_call(&call, Some(&mut ctx)).unwrap();
        let NodeKind::Text(text) = result.kind else {
            panic!("expected text");
        };
        prop_assert_eq!(text, written);
        prop_assert_eq!(ctx.output.depth(), 1);
        prop_assert_eq!(ctx.output.current(), "");
    }

    #[test]
    fn call_evaluation_does_not_mutate_the_call(call in call_strategy()) {
        let mut ctx = strict_passthrough();
        let before = call.clone();
        let first = evaluate_call(&call, Some(&mut ctx)).unwrap();
        let second = evaluate_call(&call, Some(&mut ctx)).unwrap();
        prop_assert_eq!(&call, &before);
        prop_assert_eq!(first, second);
    }

    #[test]
    fn formatted_numbers_stay_close(value in -1.0e6f64..1.0e6) {
        let text = format_number(&Number::new(value), false);
        let parsed: f64 = text.parse().unwrap();
        prop_assert!((parsed - value).abs() <= 1.0e-8);
    }

    #[test]
    fn compressed_numbers_drop_leading_zero(value in -1.0f64..1.0) {
        let text = format_number(&Number::new(value), true);
        prop_assert!(!text.starts_with("0."));
        prop_assert!(!text.starts_with("-0."));
    }

    #[test]
    fn passthrough_joins_arguments(
        name in name_strategy(),
        values in prop::collection::vec(-500i32..500, 0..6),
        compress in any::<bool>(),
    ) {
        let mut ctx = EvalContext::builder()
            .functions(FunctionRegistry::new())
            .compress(compress)
            .build();
        let args = values.iter().map(|v| Node::number(f64::from(*v), Span::DUMMY)).collect();
        let result = evaluate_call(&Call::new(name.clone(), args, Span::DUMMY), Some(&mut ctx)).unwrap();

        let separator = if compress { "," } else { ", " };
        let joined = values.iter().map(|v| v.to_string()).collect::<Vec<_>>().join(separator);
        prop_assert_eq!(result.kind, NodeKind::Text(format!("{name}({joined})")));
    }

    #[test]
    fn visitors_preserve_argument_order(
        words in prop::collection::vec(prop::sample::select(vec!["a", "b", "c"]), 0..6),
        position in any::<prop::sample::Index>(),
    ) {
        let mut args: Vec<Node> = words.iter().map(|w| Node::keyword(*w, Span::DUMMY)).collect();
        let target = position.index(args.len() + 1);
        args.insert(target, Node::keyword("target", Span::DUMMY));
        let before = args.clone();

        visit_and_replace(&mut args, &mut ReplaceTarget);

        prop_assert_eq!(args.len(), before.len());
        for (index, (after, original)) in args.iter().zip(&before).enumerate() {
            if index == target {
                prop_assert_eq!(after, &Node::keyword("replaced", Span::DUMMY));
            } else {
                prop_assert_eq!(after, original);
            }
        }
    }

    #[test]
    fn builtin_arguments_compute_unless_strict(
        left in -100i32..100,
        right in -100i32..100,
        op in prop::sample::select(vec![BinaryOp::Add, BinaryOp::Sub, BinaryOp::Mul]),
    ) {
        let argument = Node::operation(
            Node::number(f64::from(left), Span::DUMMY),
            op,
            Node::number(f64::from(right), Span::DUMMY),
        );
        let call = Call::new("id", vec![argument], Span::new(0, 4));

        let mut ctx = identity_context(false);
        let expected = match op {
            BinaryOp::Add => left + right,
            BinaryOp::Sub => left - right,
            _ => left * right,
        };
        let computed = evaluate_call(&call, Some(&mut ctx)).unwrap();
        prop_assert_eq!(computed, Node::number(f64::from(expected), Span::new(0, 4)));

        let mut ctx = identity_context(true);
        let deferred = evaluate_call(&call, Some(&mut ctx)).unwrap();
        prop_assert_eq!(ctx.render(&deferred), format!("{left} {op} {right}"));
    }
}
