//! A small query vocabulary layered on the standard one.
//!
//! Models the way a host builds domain words: objects on the stack, overloads
//! distinguished by stack shape, and experimental words behind the unstable
//! feature level.

use std::any::Any;
use std::sync::Arc;

use plotstack_foundation::{Error, Result, Stack, StackObject, Value};
use plotstack_language::{Features, Interpreter, Macro, Variables, Vocabulary, Word};
use plotstack_stdlib::standard_vocabulary;

/// A filter on a tag: `key = value`.
#[derive(Debug, PartialEq)]
struct Query(String);

impl StackObject for Query {
    fn type_name(&self) -> &str {
        "Query"
    }

    fn render(&self) -> String {
        self.0.clone()
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

fn query_at(stack: &Stack, index: usize) -> Option<&Query> {
    stack
        .get(index)
        .and_then(Value::as_object)
        .and_then(|o| o.as_any().downcast_ref::<Query>())
}

fn two_literals(stack: &Stack) -> bool {
    stack.len() >= 2 && stack.iter().take(2).all(Value::is_literal)
}

fn two_queries(stack: &Stack) -> bool {
    query_at(stack, 0).is_some() && query_at(stack, 1).is_some()
}

fn eq(stack: &Stack) -> Result<Stack> {
    let (value, key, rest) = stack.pop2().ok_or_else(|| Error::internal("eq"))?;
    Ok(rest.push(Value::object(Query(format!("{key}={value}")))))
}

fn and(stack: &Stack) -> Result<Stack> {
    let right = query_at(stack, 0).ok_or_else(|| Error::internal("and"))?;
    let left = query_at(stack, 1).ok_or_else(|| Error::internal("and"))?;
    let combined = Query(format!("({}) and ({})", left.0, right.0));
    let (_, rest) = stack.split_at(2);
    Ok(rest.push(Value::object(combined)))
}

/// Literal pair `and` builds an `eq` first.
fn and_literals(stack: &Stack) -> Result<Stack> {
    let (value, key, rest) = stack.pop2().ok_or_else(|| Error::internal("and"))?;
    Ok(rest.push(Value::literal(format!("{key}&{value}"))))
}

fn query_vocabulary() -> Vocabulary {
    Vocabulary::new(
        "query",
        vec![standard_vocabulary()],
        vec![
            Word::simple("eq", "k v -- Query", two_literals, eq),
            Word::simple("and", "Query Query -- Query", two_queries, and),
            Word::simple("and", "a b -- a&b", two_literals, and_literals).unstable(),
        ],
    )
    .with_word(Macro::parse("cq", ":swap,:eq").unwrap())
}

fn interpreter() -> Interpreter {
    Interpreter::from_vocabulary(&query_vocabulary())
}

#[test]
fn words_build_objects() {
    let ctx = interpreter().eval("name,sps,:eq").unwrap();
    let top = ctx.stack().peek().unwrap();
    assert_eq!(top.type_label(), "Query");
    assert_eq!(top.to_string(), "name=sps");
}

#[test]
fn overloads_dispatch_on_object_types() {
    let ctx = interpreter().eval("name,sps,:eq,app,www,:eq,:and").unwrap();
    assert_eq!(ctx.stack().len(), 1);
    assert_eq!(ctx.stack().peek().unwrap().to_string(), "(name=sps) and (app=www)");
}

#[test]
fn error_summary_names_object_types() {
    let err = interpreter().eval("name,sps,:eq,(,x,),:and").unwrap_err();
    assert_eq!(
        err.to_string(),
        "no matches for word ':and' with stack [List,Query], candidates: \
         [Query Query -- Query], [a b -- a&b]"
    );
}

#[test]
fn experimental_overload_is_gated() {
    let interp = interpreter();
    let err = interp.eval("a,b,:and").unwrap_err();
    assert_eq!(err.to_string(), "to use :and enable unstable features");

    let ctx = interp.execute("a,b,:and", Variables::new(), Features::Unstable).unwrap();
    assert_eq!(ctx.stack().peek(), Some(&Value::literal("a&b")));
}

#[test]
fn standard_words_work_on_objects() {
    let ctx = interpreter().eval("name,sps,:eq,:dup,q,:swap,:set,q,:get").unwrap();
    let top = ctx.stack().peek().and_then(Value::as_object).unwrap();
    let below = ctx.stack().get(1).and_then(Value::as_object).unwrap();
    // `dup` and variables share the object rather than copying it.
    assert!(Arc::ptr_eq(top, below));
}

#[test]
fn macros_compose_domain_words() {
    let ctx = interpreter().eval("sps,name,:cq").unwrap();
    assert_eq!(ctx.stack().peek().unwrap().to_string(), "name=sps");
}

#[test]
fn lists_map_over_domain_words() {
    let ctx = interpreter()
        .eval("(,a,b,),(,v,:eq,),:map")
        .unwrap();
    assert_eq!(ctx.stack().peek().unwrap().to_string(), "(,a=v,b=v,)");
}

#[test]
fn std_is_a_dependency() {
    let names: Vec<_> = query_vocabulary()
        .dependencies()
        .iter()
        .map(|v| v.name().to_string())
        .collect();
    assert_eq!(names, vec!["std"]);
}
