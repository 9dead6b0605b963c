//! Session state for the REPL.
//!
//! The session holds the stack and variables left behind by the previous
//! line, so each line continues where the last one stopped.

use plotstack_foundation::{Result, Stack, Variables};
use plotstack_language::{Context, Features, Interpreter, Step, tokenize};
use plotstack_stdlib::standard_interpreter;
use tracing::debug;

use crate::config::RuntimeConfig;

/// Session state for an interactive REPL session.
pub struct Session {
    interpreter: Interpreter,
    features: Features,
    stack: Stack,
    variables: Variables,
    initial_variables: Variables,
}

impl Session {
    /// Creates a session over `interpreter`.
    #[must_use]
    pub fn new(interpreter: Interpreter, config: &RuntimeConfig) -> Self {
        Self {
            interpreter,
            features: config.features,
            stack: Stack::new(),
            variables: config.variables.clone(),
            initial_variables: config.variables.clone(),
        }
    }

    /// Creates a session over the standard vocabulary.
    #[must_use]
    pub fn standard(config: &RuntimeConfig) -> Self {
        Self::new(standard_interpreter(), config)
    }

    /// The interpreter lines are executed with.
    #[must_use]
    pub const fn interpreter(&self) -> &Interpreter {
        &self.interpreter
    }

    /// The stack left by the last successful line.
    #[must_use]
    pub const fn stack(&self) -> &Stack {
        &self.stack
    }

    /// The variables left by the last successful line.
    #[must_use]
    pub const fn variables(&self) -> &Variables {
        &self.variables
    }

    /// Runs `program` on top of the current stack.
    ///
    /// The session only changes if the whole program succeeds.
    ///
    /// # Errors
    ///
    /// Returns any tokenizer or interpreter error.
    pub fn execute(&mut self, program: &str) -> Result<&Stack> {
        let tokens = tokenize(program)?;
        let context = self.interpreter.execute_tokens(&tokens, self.context(), true)?;
        self.stack = context.stack().clone();
        self.variables = context.variables().clone();
        debug!(depth = self.stack.len(), variables = self.variables.len(), "session updated");
        Ok(&self.stack)
    }

    /// Traces `program` from the current state without changing it.
    ///
    /// # Errors
    ///
    /// Returns any tokenizer or interpreter error.
    pub fn debug(&self, program: &str) -> Result<Vec<Step>> {
        let tokens = tokenize(program)?;
        self.interpreter.debug_tokens(&tokens, self.context())
    }

    /// Traces `program` from the current state and keeps its final step.
    ///
    /// # Errors
    ///
    /// Returns any tokenizer or interpreter error; the session is unchanged.
    pub fn execute_traced(&mut self, program: &str) -> Result<Vec<Step>> {
        let steps = self.debug(program)?;
        if let Some(last) = steps.last() {
            self.stack = last.context.stack().clone();
            self.variables = last.context.variables().clone();
            debug!(depth = self.stack.len(), variables = self.variables.len(), "session updated");
        }
        Ok(steps)
    }

    fn context(&self) -> Context {
        self.interpreter
            .context(self.variables.clone(), self.features)
            .with_stack(self.stack.clone())
    }

    /// Empties the stack and restores the starting variables.
    pub fn clear(&mut self) {
        self.stack = Stack::new();
        self.variables = self.initial_variables.clone();
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::standard(&RuntimeConfig::default())
    }
}
