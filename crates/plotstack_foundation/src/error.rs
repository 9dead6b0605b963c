//! Error types for plotstack.
//!
//! Uses `thiserror` for ergonomic error definition. Interpreter failures are
//! always [`ErrorKind::InvalidSyntax`]; their message text is a stable contract
//! that callers may match on.

use std::fmt;

use thiserror::Error;

/// The main error type for plotstack operations.
#[derive(Debug, Clone, Error)]
#[error("{kind}")]
pub struct Error {
    /// The kind of error that occurred.
    pub kind: ErrorKind,
    /// Optional context about where the error occurred.
    pub context: Option<ErrorContext>,
}

impl Error {
    /// Creates a new error with the given kind.
    #[must_use]
    pub fn new(kind: ErrorKind) -> Self {
        Self {
            kind,
            context: None,
        }
    }

    /// Adds context to this error.
    #[must_use]
    pub fn with_context(mut self, context: ErrorContext) -> Self {
        self.context = Some(context);
        self
    }

    /// Records that the error unwound through `frame`.
    ///
    /// Called innermost first, so frames end up outermost first.
    #[must_use]
    pub fn in_frame(mut self, frame: impl Into<String>) -> Self {
        self.context
            .get_or_insert_with(ErrorContext::default)
            .stack
            .insert(0, frame.into());
        self
    }

    /// Records where the failing program came from.
    #[must_use]
    pub fn in_source(mut self, source: impl Into<String>) -> Self {
        self.context.get_or_insert_with(ErrorContext::default).source = Some(source.into());
        self
    }

    /// Creates an invalid syntax error with the given message.
    #[must_use]
    pub fn invalid_syntax(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::InvalidSyntax(message.into()))
    }

    /// A closing bracket with no matching opener.
    #[must_use]
    pub fn unmatched_closing_character(c: char) -> Self {
        Self::invalid_syntax(format!("unmatched closing character '{c}'"))
    }

    /// An opening bracket left open at end of input.
    #[must_use]
    pub fn unmatched_opening_character() -> Self {
        Self::invalid_syntax("unmatched opening character")
    }

    /// A `)` token with no list capture in progress.
    #[must_use]
    pub fn unmatched_closing_parenthesis() -> Self {
        Self::invalid_syntax("unmatched closing parenthesis")
    }

    /// A list capture that ran off the end of the program.
    #[must_use]
    pub fn unmatched_opening_parenthesis() -> Self {
        Self::invalid_syntax("unmatched opening parenthesis")
    }

    /// A `:name` token naming no registered word.
    #[must_use]
    pub fn unknown_word(name: &str) -> Self {
        Self::invalid_syntax(format!("unknown word ':{name}'"))
    }

    /// No overload of `name` accepts the current stack.
    #[must_use]
    pub fn no_matches<'a>(
        name: &str,
        type_summary: &str,
        signatures: impl IntoIterator<Item = &'a str>,
    ) -> Self {
        let candidates: Vec<_> = signatures.into_iter().map(|s| format!("[{s}]")).collect();
        Self::invalid_syntax(format!(
            "no matches for word ':{name}' with stack {type_summary}, candidates: {}",
            candidates.join(", ")
        ))
    }

    /// The matched overload of `name` is gated behind unstable features.
    #[must_use]
    pub fn unstable_word(name: &str) -> Self {
        Self::invalid_syntax(format!("to use :{name} enable unstable features"))
    }

    /// A variable lookup for a key that was never set.
    #[must_use]
    pub fn unknown_variable(key: &str) -> Self {
        Self::invalid_syntax(format!("unknown variable '{key}'"))
    }

    /// A `pick` index past the end of the stack.
    #[must_use]
    pub fn pick_out_of_range(index: i64, size: usize) -> Self {
        Self::invalid_syntax(format!("cannot pick item {index} from stack of size {size}"))
    }

    /// Creates an I/O error.
    #[must_use]
    pub fn io(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Io(message.into()))
    }

    /// Creates an internal error.
    #[must_use]
    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Internal(message.into()))
    }

    /// Returns true if this error was caused by the submitted program rather
    /// than by the host.
    #[must_use]
    pub const fn is_user_error(&self) -> bool {
        matches!(self.kind, ErrorKind::InvalidSyntax(_))
    }

    /// The bare message, without any context.
    #[must_use]
    pub fn message(&self) -> String {
        self.kind.to_string()
    }
}

/// Categorized error kinds for pattern matching.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ErrorKind {
    /// The program could not be tokenized or executed.
    #[error("{0}")]
    InvalidSyntax(String),

    /// Reading a program source failed.
    #[error("io error: {0}")]
    Io(String),

    /// The line editor failed.
    #[error("editor error: {0}")]
    Editor(String),

    /// Internal error (should not happen).
    #[error("internal error: {0}")]
    Internal(String),
}

/// Context about where an error occurred.
#[derive(Debug, Clone, Default)]
pub struct ErrorContext {
    /// Source file or program name.
    pub source: Option<String>,
    /// Words being executed when the error was raised, outermost first.
    pub stack: Vec<String>,
}

impl ErrorContext {
    /// Creates a new empty context.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the source.
    #[must_use]
    pub fn with_source(mut self, source: impl Into<String>) -> Self {
        self.source = Some(source.into());
        self
    }

    /// Adds a frame.
    #[must_use]
    pub fn with_frame(mut self, frame: impl Into<String>) -> Self {
        self.stack.push(frame.into());
        self
    }
}

impl fmt::Display for ErrorContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(source) = &self.source {
            write!(f, "at {source}")?;
        }
        if !self.stack.is_empty() {
            writeln!(f)?;
            for frame in &self.stack {
                writeln!(f, "  in {frame}")?;
            }
        }
        Ok(())
    }
}
