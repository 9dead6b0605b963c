//! Integration tests for Value types

use std::any::Any;

use plotstack_foundation::{StackObject, Value};

#[derive(Debug)]
struct Series {
    expr: String,
}

impl StackObject for Series {
    fn type_name(&self) -> &str {
        "Series"
    }

    fn render(&self) -> String {
        format!("series({})", self.expr)
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

#[test]
fn literals_are_lazily_numeric() {
    let v = Value::literal("42");
    assert_eq!(v.as_str(), Some("42"));
    assert_eq!(v.as_int(), Some(42));
    assert_eq!(v.as_number(), Some(42.0));
    assert_eq!(v.type_label(), "String");

    let name = Value::literal("name");
    assert_eq!(name.as_int(), None);
    assert_eq!(Value::literal("1.5").as_int(), None);
    assert_eq!(Value::literal("1.5").as_number(), Some(1.5));
}

#[test]
fn lists_render_as_program_text() {
    let list = Value::list([Value::literal("a"), Value::list([Value::literal("b")])]);
    assert_eq!(list.to_string(), "(,a,(,b,),)");
    assert_eq!(Value::list(Vec::new()).to_string(), "(,)");
    assert_eq!(list.type_label(), "List");
}

#[test]
fn objects_use_their_own_labels() {
    let v = Value::object(Series {
        expr: "name,sps,:eq".to_string(),
    });
    assert_eq!(v.type_label(), "Series");
    assert_eq!(v.to_string(), "series(name,sps,:eq)");
    let series = v
        .as_object()
        .and_then(|o| o.as_any().downcast_ref::<Series>())
        .unwrap();
    assert_eq!(series.expr, "name,sps,:eq");
}

#[test]
fn objects_compare_by_identity() {
    let a = Value::object(Series { expr: "x".into() });
    let b = Value::object(Series { expr: "x".into() });
    assert_eq!(a, a.clone());
    assert_ne!(a, b);
}

#[test]
fn variants_never_compare_equal() {
    assert_ne!(Value::literal("a"), Value::list([Value::literal("a")]));
}
