//! Execution context threaded through a program.
//!
//! A [`Context`] is immutable: every transition returns a new context, so a
//! snapshot taken before a word runs stays valid afterwards.

use std::fmt;
use std::str::FromStr;

use plotstack_foundation::{Error, Stack, Variables};

use crate::interpreter::Interpreter;

/// Which words a program may invoke.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Features {
    /// Only stable words.
    #[default]
    Stable,
    /// Stable and unstable words.
    Unstable,
}

impl fmt::Display for Features {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Stable => f.write_str("stable"),
            Self::Unstable => f.write_str("unstable"),
        }
    }
}

impl FromStr for Features {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "stable" => Ok(Self::Stable),
            "unstable" => Ok(Self::Unstable),
            other => Err(Error::invalid_syntax(format!(
                "unknown feature level '{other}'"
            ))),
        }
    }
}

/// Full execution state at one point of a program.
#[derive(Clone)]
pub struct Context {
    interpreter: Interpreter,
    stack: Stack,
    variables: Variables,
    initial_variables: Variables,
    frozen_stack: Stack,
    features: Features,
}

impl Context {
    /// Creates a fresh context with an empty stack.
    ///
    /// `variables` also becomes the snapshot restored by [`Context::freeze`].
    #[must_use]
    pub fn new(interpreter: Interpreter, variables: Variables, features: Features) -> Self {
        Self {
            interpreter,
            stack: Stack::new(),
            initial_variables: variables.clone(),
            variables,
            frozen_stack: Stack::new(),
            features,
        }
    }

    /// The interpreter that owns this execution.
    #[must_use]
    pub const fn interpreter(&self) -> &Interpreter {
        &self.interpreter
    }

    /// The active stack.
    #[must_use]
    pub const fn stack(&self) -> &Stack {
        &self.stack
    }

    /// Current variable bindings.
    #[must_use]
    pub const fn variables(&self) -> &Variables {
        &self.variables
    }

    /// Variable bindings the execution started with.
    #[must_use]
    pub const fn initial_variables(&self) -> &Variables {
        &self.initial_variables
    }

    /// Values set aside by [`Context::freeze`].
    #[must_use]
    pub const fn frozen_stack(&self) -> &Stack {
        &self.frozen_stack
    }

    /// The feature level of this execution.
    #[must_use]
    pub const fn features(&self) -> Features {
        self.features
    }

    /// Returns a context with the active stack replaced.
    #[must_use]
    pub fn with_stack(mut self, stack: Stack) -> Self {
        self.stack = stack;
        self
    }

    /// Returns a context with the variable map replaced.
    #[must_use]
    pub fn with_variables(mut self, variables: Variables) -> Self {
        self.variables = variables;
        self
    }

    /// Moves the active stack in front of the frozen stack and resets the
    /// variables to the initial snapshot.
    #[must_use]
    pub fn freeze(mut self) -> Self {
        self.frozen_stack = self.stack.concat(&self.frozen_stack);
        self.stack = Stack::new();
        self.variables = self.initial_variables.clone();
        self
    }

    /// Places the active stack on top of the frozen stack.
    #[must_use]
    pub fn unfreeze(mut self) -> Self {
        self.stack = self.stack.concat(&self.frozen_stack);
        self.frozen_stack = Stack::new();
        self
    }
}

impl fmt::Debug for Context {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Context")
            .field("stack", &self.stack)
            .field("variables", &self.variables)
            .field("frozen_stack", &self.frozen_stack)
            .field("features", &self.features)
            .finish_non_exhaustive()
    }
}
