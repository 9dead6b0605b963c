//! Integration tests for the operand stack

use plotstack_foundation::{Stack, Value};

fn lits(values: &[&str]) -> Stack {
    values.iter().map(|s| Value::literal(s)).collect()
}

#[test]
fn push_puts_value_on_top() {
    let stack = Stack::new().push("a".into()).push("b".into());
    assert_eq!(stack.peek(), Some(&Value::literal("b")));
    assert_eq!(stack.bottom(), Some(&Value::literal("a")));
    assert_eq!(stack, lits(&["b", "a"]));
}

#[test]
fn snapshots_survive_later_changes() {
    let before = lits(&["a"]);
    let after = before.push("b".into());
    let (_, popped) = after.pop().unwrap();
    assert_eq!(before.len(), 1);
    assert_eq!(after.len(), 2);
    assert_eq!(popped, before);
}

#[test]
fn pop_on_empty_is_none() {
    assert!(Stack::new().pop().is_none());
    assert!(lits(&["a"]).pop2().is_none());
}

#[test]
fn bottom_operations() {
    let stack = lits(&["c", "b", "a"]);
    let (bottom, rest) = stack.pop_bottom().unwrap();
    assert_eq!(bottom, Value::literal("a"));
    assert_eq!(rest.push_bottom(bottom), stack);
}

#[test]
fn concat_places_argument_below() {
    let active = lits(&["f", "e"]);
    let frozen = lits(&["c", "b", "a"]);
    assert_eq!(active.concat(&frozen), lits(&["f", "e", "c", "b", "a"]));
}

#[test]
fn type_summary_hides_list_contents() {
    let short = Stack::new().push(Value::list([Value::literal("x")])).push("a".into());
    let long = Stack::new()
        .push(Value::list(["x", "y", "z"].map(Value::literal)))
        .push("b".into());
    assert_eq!(short.type_summary(), "[String,List]");
    assert_eq!(short.type_summary(), long.type_summary());
    assert_eq!(Stack::new().type_summary(), "[]");
}

#[test]
fn default_is_empty() {
    assert_eq!(Stack::default(), Stack::new());
    assert!(Stack::default().is_empty());
}
