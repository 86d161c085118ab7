use super::*;
use pretty_assertions::assert_eq;

#[test]
fn test_appends_to_innermost() {
    let mut out = OutputStack::new();
    out.append("a { color: ");
    out.push();
    out.append("rgba").append("(").append("255").append(")");
    assert_eq!(out.depth(), 2);
    assert_eq!(out.current(), "rgba(255)");

    let inner = out.pop();
    assert_eq!(inner, "rgba(255)");
    assert_eq!(out.depth(), 1);
    assert_eq!(out.current(), "a { color: ");
}

#[test]
fn test_append_joined() {
    let mut out = OutputStack::new();
    out.append_joined(["1", "2", "3"], ", ");
    assert_eq!(out.current(), "1, 2, 3");

    let mut out = OutputStack::new();
    out.append_joined(Vec::<String>::new(), ",");
    assert_eq!(out.current(), "");

    let mut out = OutputStack::new();
    out.append_joined(vec!["solo".to_string()], ",");
    assert_eq!(out.current(), "solo");
}

#[test]
fn test_pop_on_root_drains_but_keeps_root() {
    let mut out = OutputStack::new();
    out.append("body");
    assert_eq!(out.pop(), "body");
    assert_eq!(out.depth(), 1);
    assert_eq!(out.current(), "");
}

#[test]
fn test_nested_buffers_do_not_interleave() {
    let mut out = OutputStack::new();
    out.push();
    out.append("outer(");
    out.push();
    out.append("inner()");
    let inner = out.pop();
    out.append(&inner).append(")");
    assert_eq!(out.pop(), "outer(inner())");
    assert_eq!(out.depth(), 1);
}

#[test]
fn test_take_current_leaves_buffer() {
    let mut out = OutputStack::new();
    out.push();
    out.append("x");
    assert_eq!(out.take_current(), "x");
    assert_eq!(out.depth(), 2);
    assert_eq!(out.current(), "");
}
