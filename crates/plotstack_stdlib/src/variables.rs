//! Variable and isolation words.
//!
//! Variables live in the context, not on the stack, so these words need the
//! full context rather than a stack transformation.

use plotstack_foundation::{Error, Result, Stack, Value};
use plotstack_language::{Context, Word};

use crate::underflow;

/// Variable words, in dispatch order.
#[must_use]
pub fn words() -> Vec<Word> {
    vec![
        Word::full("freeze", "* --", |_| true, |ctx| Ok(ctx.freeze()))
            .with_examples(["", "a", "a,b"]),
        Word::full("get", "k -- v", top_is_literal, get).with_examples(["k,v,:set,k"]),
        Word::full("set", "k v --", second_is_literal, set).with_examples(["k,v", "k,(,a,)"]),
        Word::full("sset", "v k --", top_is_literal_pair, sset)
            .with_examples(["v,k", "(,a,),k"]),
    ]
}

fn top_is_literal(stack: &Stack) -> bool {
    stack.peek().is_some_and(Value::is_literal)
}

fn second_is_literal(stack: &Stack) -> bool {
    stack.len() >= 2 && stack.get(1).is_some_and(Value::is_literal)
}

fn top_is_literal_pair(stack: &Stack) -> bool {
    stack.len() >= 2 && top_is_literal(stack)
}

/// Looks up a literal key in the context's variables.
pub(crate) fn lookup<'c>(context: &'c Context, key: &Value) -> Result<&'c Value> {
    let key = key.as_str().ok_or_else(|| underflow("get"))?;
    context
        .variables()
        .get(key)
        .ok_or_else(|| Error::unknown_variable(key))
}

fn get(context: Context) -> Result<Context> {
    let (key, rest) = context.stack().pop().ok_or_else(|| underflow("get"))?;
    let value = lookup(&context, &key)?.clone();
    Ok(context.with_stack(rest.push(value)))
}

fn bind(context: Context, key: &Value, value: Value, rest: Stack) -> Result<Context> {
    let key = key.as_str().ok_or_else(|| underflow("set"))?;
    let variables = context.variables().insert(key.to_string(), value);
    Ok(context.with_stack(rest).with_variables(variables))
}

fn set(context: Context) -> Result<Context> {
    let (value, key, rest) = context.stack().pop2().ok_or_else(|| underflow("set"))?;
    bind(context, &key, value, rest)
}

fn sset(context: Context) -> Result<Context> {
    let (key, value, rest) = context.stack().pop2().ok_or_else(|| underflow("sset"))?;
    bind(context, &key, value, rest)
}
