//! The runtime layer driving the interpreter

use plotstack::runtime::{CliOptions, RuntimeConfig, Session, init_tracing};
use plotstack_foundation::Value;
use plotstack_language::{Features, Interpreter, Word};

#[test]
fn cli_options_configure_sessions() {
    let options = CliOptions::parse(
        ["--set", "step=60", "-e", "step,:get"].map(String::from),
    )
    .unwrap();
    let mut session = Session::standard(&options.config());
    for program in &options.programs {
        session.execute(program).unwrap();
    }
    assert_eq!(session.stack().peek(), Some(&Value::literal("60")));
}

#[test]
fn session_feature_level_gates_words() {
    let words = vec![Word::simple("beta", "--", |_| true, |s| Ok(s.push(Value::literal("b")))).unstable()];
    let interp = Interpreter::new(words);

    let mut stable = Session::new(interp.clone(), &RuntimeConfig::default());
    let err = stable.execute(":beta").unwrap_err();
    assert_eq!(err.to_string(), "to use :beta enable unstable features");

    let config = RuntimeConfig::default().with_features(Features::Unstable);
    let mut unstable = Session::new(interp, &config);
    assert_eq!(unstable.execute(":beta").unwrap().len(), 1);
}

#[test]
fn tracing_init_is_idempotent() {
    init_tracing();
    init_tracing();
    let mut session = Session::default();
    session.execute("a,:dup").unwrap();
    assert_eq!(session.stack().len(), 2);
}
