//! Stack shuffling words.
//!
//! All of these are pure stack transformations.

use plotstack_foundation::{Error, Result, Stack, Value};
use plotstack_language::Word;

use crate::{at_least, underflow};

/// Stack words, in dispatch order.
#[must_use]
pub fn words() -> Vec<Word> {
    vec![
        Word::simple("clear", "* --", |_| true, |_| Ok(Stack::new()))
            .with_examples(["", "a", "a,b"]),
        Word::simple("depth", "* -- * N", |_| true, depth).with_examples(["", "a", "a,b"]),
        Word::simple("drop", "a --", at_least(1), drop_top).with_examples(["a", "a,b"]),
        Word::simple("dup", "a -- a a", at_least(1), dup).with_examples(["a", "a,b"]),
        Word::simple("ndrop", "* N -- *", top_count, ndrop)
            .with_examples(["a,0", "a,b,c,2", "a,5"]),
        Word::simple("over", "a b -- a b a", at_least(2), over).with_examples(["a,b"]),
        Word::simple("pick", "aN ... a0 N -- aN ... a0 aN", top_int, pick)
            .with_examples(["a,0", "a,b,1"]),
        Word::simple("roll", "aN ... a0 N -- aN-1 ... a0 aN", roll_in_range, roll)
            .with_examples(["a,0", "a,b,c,2"]),
        Word::simple("rot", "a ... b -- ... b a", at_least(1), rot)
            .with_examples(["a", "a,b,c"]),
        Word::simple("-rot", "... b a -- a ... b", at_least(1), rot_back)
            .with_examples(["a", "a,b,c"]),
        Word::simple("reverse", "* -- *", |_| true, |s| Ok(s.reverse()))
            .with_examples(["", "a,b,c"]),
        Word::simple("swap", "a b -- b a", at_least(2), swap).with_examples(["a,b"]),
    ]
}

/// Matches a non-negative integer literal on top of the stack.
fn top_count(stack: &Stack) -> bool {
    stack.peek().and_then(Value::as_int).is_some_and(|n| n >= 0)
}

/// Matches any integer literal on top of the stack.
fn top_int(stack: &Stack) -> bool {
    stack.peek().and_then(Value::as_int).is_some()
}

/// Pops a non-negative integer literal.
fn pop_count(stack: &Stack, name: &str) -> Result<(usize, Stack)> {
    let (top, rest) = stack.pop().ok_or_else(|| underflow(name))?;
    let n = top
        .as_int()
        .and_then(|n| usize::try_from(n).ok())
        .ok_or_else(|| underflow(name))?;
    Ok((n, rest))
}

fn depth(stack: &Stack) -> Result<Stack> {
    Ok(stack.push(Value::literal(stack.len().to_string())))
}

fn drop_top(stack: &Stack) -> Result<Stack> {
    let (_, rest) = stack.pop().ok_or_else(|| underflow("drop"))?;
    Ok(rest)
}

fn dup(stack: &Stack) -> Result<Stack> {
    let top = stack.peek().cloned().ok_or_else(|| underflow("dup"))?;
    Ok(stack.push(top))
}

fn ndrop(stack: &Stack) -> Result<Stack> {
    let (n, rest) = pop_count(stack, "ndrop")?;
    Ok(rest.split_at(n).1)
}

fn over(stack: &Stack) -> Result<Stack> {
    let second = stack.get(1).cloned().ok_or_else(|| underflow("over"))?;
    Ok(stack.push(second))
}

fn pick(stack: &Stack) -> Result<Stack> {
    let (top, rest) = stack.pop().ok_or_else(|| underflow("pick"))?;
    let n = top.as_int().ok_or_else(|| underflow("pick"))?;
    match usize::try_from(n).ok().and_then(|i| rest.get(i)) {
        Some(value) => Ok(rest.push(value.clone())),
        None => Err(Error::pick_out_of_range(n, rest.len())),
    }
}

fn roll_in_range(stack: &Stack) -> bool {
    match stack.peek().and_then(Value::as_int) {
        Some(n) => usize::try_from(n).is_ok_and(|n| n + 1 < stack.len()),
        None => false,
    }
}

fn roll(stack: &Stack) -> Result<Stack> {
    let (n, rest) = pop_count(stack, "roll")?;
    let (value, rest) = rest.remove(n).ok_or_else(|| underflow("roll"))?;
    Ok(rest.push(value))
}

fn rot(stack: &Stack) -> Result<Stack> {
    let (bottom, rest) = stack.pop_bottom().ok_or_else(|| underflow("rot"))?;
    Ok(rest.push(bottom))
}

fn rot_back(stack: &Stack) -> Result<Stack> {
    let (top, rest) = stack.pop().ok_or_else(|| underflow("-rot"))?;
    Ok(rest.push_bottom(top))
}

fn swap(stack: &Stack) -> Result<Stack> {
    let (a, b, rest) = stack.pop2().ok_or_else(|| underflow("swap"))?;
    Ok(rest.push(a).push(b))
}
