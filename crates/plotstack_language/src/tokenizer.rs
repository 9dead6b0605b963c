//! Tokenizer for plotstack programs.
//!
//! Programs are comma separated. Commas nested inside `(`, `[` or `{` do not
//! split, so `a,(b,c),e` yields three tokens. A parenthesis standing alone
//! between commas outside any bracket is a list delimiter token rather than
//! bracket syntax: `(,a,b,)` yields `(`, `a`, `b`, `)`. A lone `(` whose
//! matching `)` is not lone opens a bracket, so `(,a)` is one token. Inside
//! an open `(`, a lone `)` still closes it, so `f(a,),b` yields `f(a,)` and
//! `b`.

use plotstack_foundation::{Error, Result, Value};

/// Splits program text into trimmed, non-empty tokens.
///
/// # Errors
///
/// Returns an invalid syntax error for a closing bracket that does not match
/// the innermost open bracket, or for brackets left open at end of input.
pub fn split(program: &str) -> Result<Vec<String>> {
    let chars: Vec<char> = program.chars().collect();
    let mut tokens = Vec::new();
    let mut current = String::new();
    // Expected closers for the currently open brackets, innermost last.
    let mut closers: Vec<char> = Vec::new();

    for (i, &c) in chars.iter().enumerate() {
        match c {
            ',' if closers.is_empty() => flush(&mut tokens, &mut current),
            '(' | '[' | '{' if !(c == '(' && closers.is_empty() && is_lone_open(&chars, i)) => {
                closers.push(closer_for(c));
                current.push(c);
            }
            ')' | ']' | '}' if !(c == ')' && closers.last() != Some(&')') && is_lone(&chars, i)) => {
                match closers.pop() {
                    Some(expected) if expected == c => current.push(c),
                    _ => return Err(Error::unmatched_closing_character(c)),
                }
            }
            _ => current.push(c),
        }
    }

    if !closers.is_empty() {
        return Err(Error::unmatched_opening_character());
    }
    flush(&mut tokens, &mut current);
    Ok(tokens)
}

/// Splits program text into literal token values.
///
/// # Errors
///
/// Same as [`split`].
pub fn tokenize(program: &str) -> Result<Vec<Value>> {
    Ok(split(program)?.into_iter().map(Value::from).collect())
}

fn flush(tokens: &mut Vec<String>, current: &mut String) {
    let token = current.trim();
    if !token.is_empty() {
        tokens.push(token.to_string());
    }
    current.clear();
}

const fn closer_for(opener: char) -> char {
    match opener {
        '(' => ')',
        '[' => ']',
        _ => '}',
    }
}

/// True if the character at `index` is the only content of its token, i.e.
/// the nearest non-whitespace neighbours are commas or the ends of input.
fn is_lone(chars: &[char], index: usize) -> bool {
    let before = chars[..index].iter().rev().find(|c| !c.is_whitespace());
    let after = chars[index + 1..].iter().find(|c| !c.is_whitespace());
    matches!(before, None | Some(',')) && matches!(after, None | Some(','))
}

/// True if the lone `(` at `index` is a list delimiter: its matching `)` is
/// also lone, or it is never closed.
fn is_lone_open(chars: &[char], index: usize) -> bool {
    if !is_lone(chars, index) {
        return false;
    }
    let mut depth = 0usize;
    for (j, &c) in chars.iter().enumerate().skip(index) {
        match c {
            '(' => depth += 1,
            ')' => {
                depth -= 1;
                if depth == 0 {
                    return is_lone(chars, j);
                }
            }
            _ => {}
        }
    }
    true
}
