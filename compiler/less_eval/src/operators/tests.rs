use super::*;
use crate::errors::EvalErrorKind;
use pretty_assertions::assert_eq;

fn num(value: f64) -> Node {
    Node::number(value, Span::DUMMY)
}

fn dim(value: f64, unit: &str) -> Node {
    Node::dimension(value, unit, Span::DUMMY)
}

fn color(r: f64, g: f64, b: f64) -> Node {
    Node::color(Color::rgb(r, g, b), Span::DUMMY)
}

#[test]
fn test_number_arithmetic() {
    assert_eq!(
        evaluate_binary(&num(1.0), BinaryOp::Add, &num(2.0)).unwrap(),
        num(3.0).kind
    );
    assert_eq!(
        evaluate_binary(&num(5.0), BinaryOp::Sub, &num(3.0)).unwrap(),
        num(2.0).kind
    );
    assert_eq!(
        evaluate_binary(&num(4.0), BinaryOp::Mul, &num(2.5)).unwrap(),
        num(10.0).kind
    );
    assert_eq!(
        evaluate_binary(&num(9.0), BinaryOp::Div, &num(2.0)).unwrap(),
        num(4.5).kind
    );
}

#[test]
fn test_unit_comes_from_left_then_right() {
    assert_eq!(
        evaluate_binary(&dim(10.0, "px"), BinaryOp::Mul, &num(2.0)).unwrap(),
        dim(20.0, "px").kind
    );
    assert_eq!(
        evaluate_binary(&num(2.0), BinaryOp::Mul, &dim(10.0, "em")).unwrap(),
        dim(20.0, "em").kind
    );
    assert_eq!(
        evaluate_binary(&dim(1.0, "px"), BinaryOp::Add, &dim(2.0, "em")).unwrap(),
        dim(3.0, "px").kind
    );
}

#[test]
fn test_division_by_zero() {
    let err = evaluate_binary(&dim(1.0, "px"), BinaryOp::Div, &num(0.0)).unwrap_err();
    assert_eq!(err.kind, EvalErrorKind::DivisionByZero);
}

#[test]
fn test_color_arithmetic() {
    assert_eq!(
        evaluate_binary(&color(10.0, 20.0, 30.0), BinaryOp::Add, &color(1.0, 2.0, 3.0)).unwrap(),
        color(11.0, 22.0, 33.0).kind
    );
    assert_eq!(
        evaluate_binary(&color(10.0, 20.0, 30.0), BinaryOp::Mul, &num(2.0)).unwrap(),
        color(20.0, 40.0, 60.0).kind
    );
    // number + color is commuted
    assert_eq!(
        evaluate_binary(&num(5.0), BinaryOp::Add, &color(10.0, 20.0, 30.0)).unwrap(),
        color(15.0, 25.0, 35.0).kind
    );
}

#[test]
fn test_number_minus_color_is_rejected() {
    let err = evaluate_binary(&num(5.0), BinaryOp::Sub, &color(1.0, 1.0, 1.0)).unwrap_err();
    assert_eq!(
        err.kind,
        EvalErrorKind::InvalidOperation {
            op: BinaryOp::Sub,
            left: "number",
            right: "color",
        }
    );
}

#[test]
fn test_keywords_do_not_combine() {
    let keyword = Node::keyword("auto", Span::DUMMY);
    let err = evaluate_binary(&keyword, BinaryOp::Add, &num(1.0)).unwrap_err();
    assert!(matches!(err.kind, EvalErrorKind::InvalidOperation { .. }));
}

#[test]
fn test_evaluate_operation_resolves_operands_and_spans_errors() {
    let mut ctx = EvalContext::builder().variable("w", dim(4.0, "px")).build();
    let operation = Operation::new(
        Node::variable("w", Span::new(0, 2)),
        BinaryOp::Mul,
        num(3.0),
    );
    let result = evaluate_operation(&operation, Span::new(0, 6), &mut ctx).unwrap();
    assert_eq!(result, Node::dimension(12.0, "px", Span::new(0, 6)));

    let failing = Operation::new(num(1.0), BinaryOp::Div, num(0.0));
    let err = evaluate_operation(&failing, Span::new(3, 8), &mut ctx).unwrap_err();
    assert_eq!(err.span, Some(Span::new(3, 8)));
}

#[test]
fn test_overflow_is_an_error() {
    let err = evaluate_binary(&num(1.0e308), BinaryOp::Mul, &num(10.0)).unwrap_err();
    assert_eq!(
        err.kind,
        EvalErrorKind::NonFinite {
            operation: "`*`".to_string()
        }
    );

    let err = evaluate_binary(&color(1.0e308, 0.0, 0.0), BinaryOp::Add, &num(1.0e308))
        .unwrap_err();
    assert!(matches!(err.kind, EvalErrorKind::NonFinite { .. }));
}

#[test]
fn test_overflow_in_operation_takes_its_span() {
    let mut ctx = EvalContext::new();
    let operation = Operation::new(num(1.0e308), BinaryOp::Add, num(1.0e308));
    let err = evaluate_operation(&operation, Span::new(2, 9), &mut ctx).unwrap_err();
    assert_eq!(err.span, Some(Span::new(2, 9)));
}
