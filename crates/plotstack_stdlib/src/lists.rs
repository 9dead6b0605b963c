//! Words that build lists and run them as programs.
//!
//! A list is executed against the caller's context with the final unfreeze
//! disabled, exactly like a macro body.

use plotstack_foundation::{PsVec, Result, Stack, Value};
use plotstack_language::{Context, Word};
use tracing::trace;

use crate::underflow;
use crate::variables::lookup;

/// List words, in dispatch order.
#[must_use]
pub fn words() -> Vec<Word> {
    vec![
        Word::simple("list", "* -- List", |_| true, to_list).with_examples(["", "a,b"]),
        Word::simple("nlist", "aN ... a1 N -- List", top_is_count, nlist)
            .with_examples(["a,b,2", "a,b,5", "0"]),
        Word::full("call", "* List -- *", top_is_list, call)
            .with_examples(["(,a,)", "a,(,:dup,)"]),
        Word::full("each", "items:List f:List -- f(items[0]) ... f(items[N])", two_lists, each)
            .with_examples(["(,a,b,),(,)", "(,a,b,),(,:dup,)"]),
        Word::full("map", "items:List f:List -- List", two_lists, map)
            .with_examples(["(,a,b,),(,)", "(,a,b,),(,:dup,:drop,)"]),
        Word::full("fcall", "k -- *", is_literal, fcall).with_examples(["f,(,a,),:set,f"]),
    ]
}

fn is_literal(stack: &Stack) -> bool {
    stack.peek().is_some_and(Value::is_literal)
}

fn top_is_count(stack: &Stack) -> bool {
    stack.peek().and_then(Value::as_int).is_some_and(|n| n >= 0)
}

fn top_is_list(stack: &Stack) -> bool {
    stack.peek().is_some_and(Value::is_list)
}

fn two_lists(stack: &Stack) -> bool {
    top_is_list(stack) && stack.get(1).is_some_and(Value::is_list)
}

/// Collects the whole stack into one list, in program order.
fn to_list(stack: &Stack) -> Result<Stack> {
    Ok(Stack::new().push(Value::List(stack.to_list().reverse())))
}

fn nlist(stack: &Stack) -> Result<Stack> {
    let (count, rest) = stack.pop().ok_or_else(|| underflow("nlist"))?;
    let n = count
        .as_int()
        .and_then(|n| usize::try_from(n).ok())
        .ok_or_else(|| underflow("nlist"))?;
    let (top, rest) = rest.split_at(n);
    Ok(rest.push(Value::List(top.to_list().reverse())))
}

/// Runs `body` against `context`, leaving frozen values in place.
fn run(context: Context, body: &PsVec<Value>) -> Result<Context> {
    let tokens: Vec<Value> = body.iter().cloned().collect();
    let interpreter = context.interpreter().clone();
    interpreter.execute_tokens(&tokens, context, false)
}

fn call(context: Context) -> Result<Context> {
    let (body, rest) = context.stack().pop().ok_or_else(|| underflow("call"))?;
    let body = body.as_list().ok_or_else(|| underflow("call"))?;
    run(context.with_stack(rest), body)
}

fn pop_two_lists(context: &Context, name: &str) -> Result<(PsVec<Value>, PsVec<Value>, Stack)> {
    let (body, items, rest) = context.stack().pop2().ok_or_else(|| underflow(name))?;
    match (items, body) {
        (Value::List(items), Value::List(body)) => Ok((items, body, rest)),
        _ => Err(underflow(name)),
    }
}

fn each(context: Context) -> Result<Context> {
    let (items, body, rest) = pop_two_lists(&context, "each")?;
    trace!(items = items.len(), "each");
    let mut context = context.with_stack(rest);
    for item in items {
        let stack = context.stack().push(item);
        context = run(context.with_stack(stack), &body)?;
    }
    Ok(context)
}

/// Applies `body` to each item on an otherwise empty stack and collects the
/// values left behind (bottom first) into one list.
fn map(context: Context) -> Result<Context> {
    let (items, body, rest) = pop_two_lists(&context, "map")?;
    trace!(items = items.len(), "map");
    let mut results = PsVec::new();
    let mut variables = context.variables().clone();
    for item in items {
        let scratch = context
            .clone()
            .with_variables(variables)
            .with_stack(Stack::new().push(item));
        let done = run(scratch, &body)?;
        // Values the body froze sit above the caller's frozen values.
        let frozen = done.frozen_stack();
        let (fresh, _) = frozen.split_at(frozen.len().saturating_sub(context.frozen_stack().len()));
        let produced = done.stack().concat(&fresh);
        variables = done.variables().clone();
        results = results.concat(&produced.to_list().reverse());
    }
    Ok(context
        .with_stack(rest.push(Value::List(results)))
        .with_variables(variables))
}

fn fcall(context: Context) -> Result<Context> {
    let (key, rest) = context.stack().pop().ok_or_else(|| underflow("fcall"))?;
    let value = lookup(&context, &key)?.clone();
    match value {
        Value::List(body) => run(context.with_stack(rest), &body),
        other => Ok(context.with_stack(rest.push(other))),
    }
}
