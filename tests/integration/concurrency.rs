//! One interpreter shared by many threads

use std::sync::Arc;
use std::thread;

use plotstack_language::{Features, Interpreter, Value, Variables};
use plotstack_stdlib::standard_interpreter;

fn assert_send_sync<T: Send + Sync>() {}

#[test]
fn interpreter_is_shareable() {
    assert_send_sync::<Interpreter>();
    assert_send_sync::<Value>();
}

#[test]
fn concurrent_executions_do_not_interfere() {
    let interp = Arc::new(standard_interpreter());
    let handles: Vec<_> = (0..8)
        .map(|i| {
            let interp = Arc::clone(&interp);
            thread::spawn(move || {
                let vars = Variables::new().insert("i".to_string(), Value::literal(i.to_string()));
                let program = "i,:get,:dup,k,:swap,:set,(,a,b,),(,:drop,k,:get,),:map";
                interp.execute(program, vars, Features::Stable).map(|ctx| {
                    ctx.stack().iter().map(ToString::to_string).collect::<Vec<_>>()
                })
            })
        })
        .collect();

    for (i, handle) in handles.into_iter().enumerate() {
        let stack = handle.join().unwrap().unwrap();
        assert_eq!(stack, vec![format!("(,{i},{i},)"), i.to_string()]);
    }
}

#[test]
fn clones_share_the_word_table() {
    let interp = standard_interpreter();
    let clone = interp.clone();
    let a = thread::spawn(move || clone.eval("a,b,:swap").map(|c| c.stack().len()));
    assert_eq!(interp.eval("x,:dup").unwrap().stack().len(), 2);
    assert_eq!(a.join().unwrap().unwrap(), 2);
}
