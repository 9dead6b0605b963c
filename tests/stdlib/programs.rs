//! End-to-end programs against the standard vocabulary

use plotstack_language::{Features, Value, Variables};
use plotstack_stdlib::{STANDARD, standard_interpreter, standard_vocabulary};

fn run(program: &str) -> Vec<String> {
    let ctx = standard_interpreter().eval(program).unwrap();
    ctx.stack().iter().map(ToString::to_string).collect()
}

fn err(program: &str) -> String {
    standard_interpreter().eval(program).unwrap_err().to_string()
}

#[test]
fn vocabulary_is_named_std() {
    assert_eq!(standard_vocabulary().name(), STANDARD);
    assert!(standard_vocabulary().dependencies().is_empty());
}

#[test]
fn set_then_get() {
    let ctx = standard_interpreter().eval("a,b,:set,a,:get").unwrap();
    assert_eq!(ctx.stack().iter().map(ToString::to_string).collect::<Vec<_>>(), vec!["b"]);
    assert_eq!(ctx.variables().get("a"), Some(&Value::literal("b")));
}

#[test]
fn freeze_then_clear() {
    assert_eq!(run("a,b,c,:freeze,d,e,f,:clear"), vec!["c", "b", "a"]);
}

#[test]
fn pick_edges() {
    assert_eq!(run("a,0,:pick"), vec!["a", "a"]);
    assert_eq!(err("a,b,2,:pick"), "cannot pick item 2 from stack of size 2");
    assert_eq!(err("a,b,-3,:pick"), "cannot pick item -3 from stack of size 2");
}

#[test]
fn stored_programs_can_be_called() {
    assert_eq!(
        run("double,(,:dup,:list,),:set,x,double,:fcall"),
        vec!["(,x,x,)"]
    );
}

#[test]
fn map_and_each() {
    assert_eq!(run("(,a,b,),(,:dup,),:map"), vec!["(,a,a,b,b,)"]);
    assert_eq!(run("(,a,b,),(,x,),:each"), vec!["x", "b", "x", "a"]);
}

#[test]
fn temporaries_do_not_survive_freeze() {
    let vars = Variables::new().insert("step".to_string(), Value::literal("60"));
    let interp = standard_interpreter();
    let ctx = interp
        .execute("tmp,1,:set,:freeze,step,:get", vars.clone(), Features::Stable)
        .unwrap();
    assert_eq!(ctx.stack().peek(), Some(&Value::literal("60")));
    let err = interp
        .execute("tmp,1,:set,:freeze,tmp,:get", vars, Features::Stable)
        .unwrap_err();
    assert_eq!(err.to_string(), "unknown variable 'tmp'");
}

#[test]
fn numbers_stay_literals() {
    // `1` is a variable name to get and an index to pick.
    assert_eq!(run("1,one,:set,1,:get"), vec!["one"]);
    assert_eq!(run("a,b,1,:pick"), vec!["a", "b", "a"]);
}
