//! Integration tests for overload resolution and the unstable gate

use plotstack_language::{Features, Interpreter, Stack, Value, Variables, Word};

fn push(tag: &'static str) -> impl Fn(&Stack) -> plotstack_language::Result<Stack> {
    move |s: &Stack| Ok(s.push(Value::literal(tag)))
}

#[test]
fn first_matching_candidate_wins() {
    let interp = Interpreter::new(vec![
        Word::simple("x", "never", |_| false, push("first")),
        Word::simple("x", "always", |_| true, push("second")),
        Word::simple("x", "also always", |_| true, push("third")),
    ]);
    for program in [":x", "a,:x", "(,a,),b,:x"] {
        let ctx = interp.eval(program).unwrap();
        assert_eq!(ctx.stack().peek(), Some(&Value::literal("second")), "{program}");
    }
}

#[test]
fn candidates_keep_declaration_order() {
    let interp = Interpreter::new(vec![
        Word::simple("x", "one", |_| true, push("1")),
        Word::simple("y", "y", |_| true, push("y")),
        Word::simple("x", "two", |_| true, push("2")),
    ]);
    let sigs: Vec<_> = interp.candidates("x").iter().map(Word::signature).collect();
    assert_eq!(sigs, vec!["one", "two"]);
    assert_eq!(interp.word_names(), &["x".to_string(), "y".to_string()]);
    assert!(interp.candidates("z").is_empty());
}

#[test]
fn no_match_lists_every_candidate() {
    let interp = Interpreter::new(vec![
        Word::simple("x", "a b --", |s| s.len() >= 2, push("x")),
        Word::simple("x", "List --", |s| s.peek().is_some_and(Value::is_list), push("x")),
    ]);
    let err = interp.eval("a,:x").unwrap_err();
    assert_eq!(
        err.to_string(),
        "no matches for word ':x' with stack [String], candidates: [a b --], [List --]"
    );
}

#[test]
fn unknown_word() {
    let err = Interpreter::new(Vec::new()).eval("a,:missing").unwrap_err();
    assert_eq!(err.to_string(), "unknown word ':missing'");
}

#[test]
fn unstable_words_need_the_feature() {
    let interp = Interpreter::new(vec![
        Word::simple("beta", "--", |_| true, push("ok")).unstable(),
    ]);
    let err = interp.eval(":beta").unwrap_err();
    assert_eq!(err.to_string(), "to use :beta enable unstable features");

    let ctx = interp
        .execute(":beta", Variables::new(), Features::Unstable)
        .unwrap();
    assert_eq!(ctx.stack().peek(), Some(&Value::literal("ok")));
}

#[test]
fn only_the_matched_candidate_is_gated() {
    let interp = Interpreter::new(vec![
        Word::simple("w", "list", |s| s.peek().is_some_and(Value::is_list), push("beta")).unstable(),
        Word::simple("w", "any", |_| true, push("stable")),
    ]);
    let ctx = interp.eval("a,:w").unwrap();
    assert_eq!(ctx.stack().peek(), Some(&Value::literal("stable")));
    assert!(interp.eval("(,a,),:w").is_err());
}
