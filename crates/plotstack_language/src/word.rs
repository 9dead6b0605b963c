//! Words: the named operators of the language.
//!
//! Several words may share a name. The interpreter tries them in registration
//! order and runs the first whose matcher accepts the current stack.

use std::fmt;
use std::sync::Arc;

use plotstack_foundation::{Result, Stack};

use crate::context::Context;

/// Tests whether a word applies to a stack shape.
pub type Matcher = Arc<dyn Fn(&Stack) -> bool + Send + Sync>;

/// A pure stack transformation.
pub type StackFn = Arc<dyn Fn(&Stack) -> Result<Stack> + Send + Sync>;

/// A transition over the whole execution context.
pub type ContextFn = Arc<dyn Fn(Context) -> Result<Context> + Send + Sync>;

/// What a word does when it runs.
#[derive(Clone)]
pub enum Action {
    /// Transforms only the active stack.
    Simple(StackFn),
    /// Needs the full context (variables, freezing, sub-execution).
    Full(ContextFn),
}

/// A named operator.
#[derive(Clone)]
pub struct Word {
    name: Arc<str>,
    signature: Arc<str>,
    stable: bool,
    examples: Vec<Arc<str>>,
    matcher: Matcher,
    action: Action,
}

impl Word {
    /// Creates a word that transforms only the stack.
    pub fn simple(
        name: &str,
        signature: &str,
        matcher: impl Fn(&Stack) -> bool + Send + Sync + 'static,
        action: impl Fn(&Stack) -> Result<Stack> + Send + Sync + 'static,
    ) -> Self {
        Self::with_action(name, signature, Arc::new(matcher), Action::Simple(Arc::new(action)))
    }

    /// Creates a word that transforms the whole context.
    pub fn full(
        name: &str,
        signature: &str,
        matcher: impl Fn(&Stack) -> bool + Send + Sync + 'static,
        action: impl Fn(Context) -> Result<Context> + Send + Sync + 'static,
    ) -> Self {
        Self::with_action(name, signature, Arc::new(matcher), Action::Full(Arc::new(action)))
    }

    /// Creates a word from an already boxed matcher and action.
    #[must_use]
    pub fn with_action(name: &str, signature: &str, matcher: Matcher, action: Action) -> Self {
        Self {
            name: Arc::from(name),
            signature: Arc::from(signature),
            stable: true,
            examples: Vec::new(),
            matcher,
            action,
        }
    }

    /// Marks the word as requiring unstable features.
    #[must_use]
    pub fn unstable(mut self) -> Self {
        self.stable = false;
        self
    }

    /// Attaches example stacks (as program text) the word accepts.
    #[must_use]
    pub fn with_examples<'a>(mut self, examples: impl IntoIterator<Item = &'a str>) -> Self {
        self.examples = examples.into_iter().map(Arc::from).collect();
        self
    }

    /// The word's name, without the `:` prefix.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Human readable stack effect, e.g. `a -- a a`.
    #[must_use]
    pub fn signature(&self) -> &str {
        &self.signature
    }

    /// False if the word requires [`crate::Features::Unstable`].
    #[must_use]
    pub const fn is_stable(&self) -> bool {
        self.stable
    }

    /// Example stacks the word is documented to accept.
    pub fn examples(&self) -> impl Iterator<Item = &str> {
        self.examples.iter().map(AsRef::as_ref)
    }

    /// The word's action.
    #[must_use]
    pub const fn action(&self) -> &Action {
        &self.action
    }

    /// Returns true if the word applies to `stack`.
    #[must_use]
    pub fn matches(&self, stack: &Stack) -> bool {
        (self.matcher)(stack)
    }

    /// Runs the word.
    ///
    /// # Errors
    ///
    /// Propagates any failure raised by the word's action.
    pub fn execute(&self, context: Context) -> Result<Context> {
        match &self.action {
            Action::Simple(f) => {
                let stack = f(context.stack())?;
                Ok(context.with_stack(stack))
            }
            Action::Full(f) => f(context),
        }
    }
}

impl fmt::Debug for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Word")
            .field("name", &self.name)
            .field("signature", &self.signature)
            .field("stable", &self.stable)
            .finish_non_exhaustive()
    }
}
