//! Macro definitions.
//!
//! A macro is a word whose body is a stored token sequence. Running it
//! executes the body against the caller's context without the final
//! unfreeze, so frozen values stay frozen until the top-level program ends.

use std::sync::Arc;

use plotstack_foundation::{Result, Stack, Value};

use crate::context::Context;
use crate::tokenizer::tokenize;
use crate::word::{Action, Word};

/// A word defined by a sequence of tokens.
#[derive(Clone, Debug)]
pub struct Macro {
    /// Macro name, without the `:` prefix.
    pub name: String,
    /// Tokens executed when the macro is invoked.
    pub body: Vec<Value>,
}

impl Macro {
    /// Creates a macro from body tokens.
    #[must_use]
    pub fn new(name: impl Into<String>, body: Vec<Value>) -> Self {
        Self {
            name: name.into(),
            body,
        }
    }

    /// Creates a macro from program text, e.g. `swap,:drop`.
    ///
    /// # Errors
    ///
    /// Returns an error if the body does not tokenize.
    pub fn parse(name: impl Into<String>, program: &str) -> Result<Self> {
        Ok(Self::new(name, tokenize(program)?))
    }

    /// The body rendered back to program text.
    #[must_use]
    pub fn body_text(&self) -> String {
        let tokens: Vec<_> = self.body.iter().map(ToString::to_string).collect();
        tokens.join(",")
    }

    /// Converts the macro into a word that accepts any stack.
    #[must_use]
    pub fn into_word(self) -> Word {
        let signature = self.body_text();
        let body: Arc<[Value]> = self.body.into();
        let name = self.name.clone();
        let action = Action::Full(Arc::new(move |context: Context| {
            let interpreter = context.interpreter().clone();
            interpreter
                .execute_tokens(&body, context, false)
                .map_err(|e| e.in_frame(name.as_str()))
        }));
        Word::with_action(&self.name, &signature, Arc::new(|_: &Stack| true), action)
    }
}

impl From<Macro> for Word {
    fn from(m: Macro) -> Self {
        m.into_word()
    }
}
