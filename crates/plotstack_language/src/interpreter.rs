//! The interpreter: folds tokens over a [`Context`].
//!
//! Each token is one of:
//! - `(` - starts a list capture that runs to the matching `)`; the captured
//!   tokens are pushed unexecuted as a single list value
//! - `:name` - invokes the word `name`
//! - anything else - pushed as a literal
//!
//! The word table is immutable once built, so an interpreter can be cloned
//! cheaply and shared between threads; every execution threads its own
//! context.

use std::collections::HashMap;
use std::sync::Arc;

use plotstack_foundation::{Error, PsVec, Result, Value, Variables};
use tracing::{debug, trace};

use crate::context::{Context, Features};
use crate::tokenizer::tokenize;
use crate::vocabulary::Vocabulary;
use crate::word::Word;

/// Words grouped by name, each group in registration order.
struct WordTable {
    by_name: HashMap<String, Vec<Word>>,
    /// Distinct names in order of first registration.
    names: Vec<String>,
}

/// A reusable evaluator for plotstack programs.
#[derive(Clone)]
pub struct Interpreter {
    table: Arc<WordTable>,
}

/// One snapshot of a debug trace.
#[derive(Clone, Debug)]
pub struct Step {
    /// Tokens not yet processed.
    pub remaining: Vec<Value>,
    /// State after processing everything before `remaining`.
    pub context: Context,
}

impl Interpreter {
    /// Creates an interpreter from a flat word list.
    ///
    /// Words sharing a name are tried in the order they appear in `words`.
    #[must_use]
    pub fn new(words: Vec<Word>) -> Self {
        let mut by_name: HashMap<String, Vec<Word>> = HashMap::new();
        let mut names = Vec::new();
        for word in words {
            let candidates = by_name.entry(word.name().to_string()).or_insert_with(|| {
                names.push(word.name().to_string());
                Vec::new()
            });
            candidates.push(word);
        }
        Self {
            table: Arc::new(WordTable { by_name, names }),
        }
    }

    /// Creates an interpreter from every word reachable from `vocabulary`.
    #[must_use]
    pub fn from_vocabulary(vocabulary: &Vocabulary) -> Self {
        Self::new(vocabulary.all_words())
    }

    /// Registered word names, in order of first registration.
    #[must_use]
    pub fn word_names(&self) -> &[String] {
        &self.table.names
    }

    /// Overloads registered under `name`, in dispatch order.
    #[must_use]
    pub fn candidates(&self, name: &str) -> &[Word] {
        self.table.by_name.get(name).map_or(&[][..], Vec::as_slice)
    }

    /// Creates a fresh context bound to this interpreter.
    #[must_use]
    pub fn context(&self, variables: Variables, features: Features) -> Context {
        Context::new(self.clone(), variables, features)
    }

    /// Executes program text as a top-level program.
    ///
    /// # Errors
    ///
    /// Returns an invalid syntax error if the program fails to tokenize or
    /// any token fails to execute.
    pub fn execute(&self, program: &str, variables: Variables, features: Features) -> Result<Context> {
        let tokens = tokenize(program)?;
        self.execute_tokens(&tokens, self.context(variables, features), true)
    }

    /// Executes program text with no variables and only stable words.
    ///
    /// # Errors
    ///
    /// Same as [`Interpreter::execute`].
    pub fn eval(&self, program: &str) -> Result<Context> {
        self.execute(program, Variables::new(), Features::Stable)
    }

    /// Executes tokens against `context`.
    ///
    /// Top-level programs pass `unfreeze = true` so frozen values are placed
    /// back under the active stack at the end. Sub-executions (macros, `call`)
    /// pass `false`.
    ///
    /// # Errors
    ///
    /// Returns the first error raised; the remaining tokens are not run.
    pub fn execute_tokens(&self, tokens: &[Value], context: Context, unfreeze: bool) -> Result<Context> {
        debug!(tokens = tokens.len(), unfreeze, "execute");
        let mut context = context;
        let mut remaining = tokens;
        while !remaining.is_empty() {
            let (rest, next) = self.step(remaining, context)?;
            remaining = rest;
            context = next;
        }
        debug!(depth = context.stack().len(), "execute finished");
        Ok(if unfreeze { context.unfreeze() } else { context })
    }

    /// Executes program text, recording every intermediate state.
    ///
    /// The first step is the initial state; the last step has no remaining
    /// tokens and has been unfrozen like a top-level execution.
    ///
    /// # Errors
    ///
    /// Same as [`Interpreter::execute`].
    pub fn debug(&self, program: &str) -> Result<Vec<Step>> {
        let tokens = tokenize(program)?;
        self.debug_tokens(&tokens, self.context(Variables::new(), Features::Stable))
    }

    /// Like [`Interpreter::debug`], starting from an existing context.
    ///
    /// # Errors
    ///
    /// Returns the first error raised by a token.
    pub fn debug_tokens(&self, tokens: &[Value], context: Context) -> Result<Vec<Step>> {
        let mut context = context;
        let mut remaining = tokens;
        let mut steps = Vec::new();
        while !remaining.is_empty() {
            steps.push(Step {
                remaining: remaining.to_vec(),
                context: context.clone(),
            });
            let (rest, next) = self.step(remaining, context)?;
            remaining = rest;
            context = next;
        }
        steps.push(Step {
            remaining: Vec::new(),
            context: context.unfreeze(),
        });
        Ok(steps)
    }

    /// Processes the first token (or list capture) of `tokens`.
    fn step<'t>(&self, tokens: &'t [Value], context: Context) -> Result<(&'t [Value], Context)> {
        let Some((token, rest)) = tokens.split_first() else {
            return Ok((tokens, context));
        };
        match token.as_str() {
            Some("(") => {
                let (list, rest) = capture_list(rest)?;
                trace!(items = list.len(), "list");
                let stack = context.stack().push(Value::List(list));
                Ok((rest, context.with_stack(stack)))
            }
            Some(")") => Err(Error::unmatched_closing_parenthesis()),
            _ => {
                if let Some(name) = token.as_str().and_then(|t| t.strip_prefix(':')) {
                    return Ok((rest, self.invoke(name, context)?));
                }
                let stack = context.stack().push(token.clone());
                Ok((rest, context.with_stack(stack)))
            }
        }
    }

    /// Runs the first overload of `name` that matches the active stack.
    fn invoke(&self, name: &str, context: Context) -> Result<Context> {
        let candidates = self
            .table
            .by_name
            .get(name)
            .ok_or_else(|| Error::unknown_word(name))?;
        let stack = context.stack();
        let Some(word) = candidates.iter().find(|w| w.matches(stack)) else {
            return Err(Error::no_matches(
                name,
                &stack.type_summary(),
                candidates.iter().map(Word::signature),
            ));
        };
        if !word.is_stable() && context.features() != Features::Unstable {
            return Err(Error::unstable_word(name));
        }
        trace!(word = name, signature = word.signature(), depth = stack.len(), "dispatch");
        word.execute(context)
    }
}

impl std::fmt::Debug for Interpreter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Interpreter")
            .field("words", &self.table.names)
            .finish()
    }
}

/// Collects tokens up to the `)` closing an already consumed `(`.
///
/// Nested parentheses are kept verbatim in the captured list.
fn capture_list(tokens: &[Value]) -> Result<(PsVec<Value>, &[Value])> {
    let mut depth = 0usize;
    for (i, token) in tokens.iter().enumerate() {
        match token.as_str() {
            Some("(") => depth += 1,
            Some(")") if depth == 0 => {
                let list = tokens[..i].iter().cloned().collect();
                return Ok((list, &tokens[i + 1..]));
            }
            Some(")") => depth -= 1,
            _ => {}
        }
    }
    Err(Error::unmatched_opening_parenthesis())
}
