//! Integration tests for vocabulary composition

use plotstack_language::{Interpreter, Macro, Value, Vocabulary, Word};

fn tagged(name: &str, tag: &'static str) -> Word {
    Word::simple(name, tag, |_| true, move |s| Ok(s.push(Value::literal(tag))))
}

#[test]
fn dependency_words_are_tried_first() {
    let base = Vocabulary::new("base", vec![], vec![tagged("w", "base")]);
    let app = Vocabulary::new("app", vec![base], vec![tagged("w", "app")]);

    let ctx = Interpreter::from_vocabulary(&app).eval(":w").unwrap();
    assert_eq!(ctx.stack().peek(), Some(&Value::literal("base")));
}

#[test]
fn assembly_order_controls_dispatch() {
    let first = Vocabulary::new("first", vec![], vec![tagged("w", "first")]);
    let second = Vocabulary::new("second", vec![], vec![tagged("w", "second")]);

    let a = Vocabulary::new("a", vec![first.clone(), second.clone()], vec![]);
    let b = Vocabulary::new("b", vec![second, first], vec![]);

    let top = |v: &Vocabulary| {
        Interpreter::from_vocabulary(v)
            .eval(":w")
            .unwrap()
            .stack()
            .peek()
            .cloned()
    };
    assert_eq!(top(&a), Some(Value::literal("first")));
    assert_eq!(top(&b), Some(Value::literal("second")));
}

#[test]
fn builder_methods_append() {
    let base = Vocabulary::new("base", vec![], vec![]);
    let vocab = Vocabulary::new("app", vec![], vec![])
        .with_dependency(base)
        .with_word(tagged("x", "x"))
        .with_word(Macro::parse("xx", ":x,:x").unwrap());

    assert_eq!(vocab.name(), "app");
    assert_eq!(vocab.words().len(), 2);
    assert_eq!(vocab.dependencies().len(), 1);

    let ctx = Interpreter::from_vocabulary(&vocab).eval(":xx").unwrap();
    assert_eq!(ctx.stack().len(), 2);
}

#[test]
fn dependencies_follow_all_words_order() {
    let core = Vocabulary::new("core", vec![], vec![tagged("c", "c")]);
    let query = Vocabulary::new("query", vec![core.clone()], vec![tagged("q", "q")]);
    let style = Vocabulary::new("style", vec![core], vec![tagged("s", "s")]);
    let app = Vocabulary::new("app", vec![query, style], vec![]);

    let deps: Vec<_> = app.dependencies().iter().map(|v| v.name().to_string()).collect();
    assert_eq!(deps, vec!["core", "query", "style"]);

    let words: Vec<_> = app.all_words().iter().map(|w| w.name().to_string()).collect();
    assert_eq!(words, vec!["c", "q", "c", "s"]);
}
