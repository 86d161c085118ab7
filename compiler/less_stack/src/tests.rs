use super::*;

#[test]
fn returns_closure_result() {
    assert_eq!(ensure_sufficient_stack(|| "1px"), "1px");
}

#[test]
fn propagates_result_errors() {
    let result: Result<u32, &str> = ensure_sufficient_stack(|| Err("undefined variable"));
    assert_eq!(result, Err("undefined variable"));
}

#[test]
fn deeply_nested_walk_does_not_overflow() {
    // Mimics a value nested 100k calls deep, e.g. `a(a(a(...)))`.
    fn depth(n: u64) -> u64 {
        ensure_sufficient_stack(|| if n == 0 { 0 } else { depth(n - 1) + 1 })
    }

    assert_eq!(depth(100_000), 100_000);
}
