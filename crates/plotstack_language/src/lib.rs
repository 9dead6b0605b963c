//! Tokenizer, execution context, words, vocabularies, and interpreter for
//! the plotstack language.
//!
//! This crate provides:
//! - [`split`] / [`tokenize`] - Bracket-aware splitting of program text
//! - [`Context`] - Immutable execution state threaded through a program
//! - [`Word`] - Named, overloadable operators (and [`Macro`]s built from tokens)
//! - [`Vocabulary`] - Composable bundles of words
//! - [`Interpreter`] - Folds tokens over a context using a word table

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod context;
pub mod interpreter;
pub mod macro_def;
pub mod tokenizer;
pub mod vocabulary;
pub mod word;

pub use context::{Context, Features};
pub use interpreter::{Interpreter, Step};
pub use macro_def::Macro;
pub use tokenizer::{split, tokenize};
pub use vocabulary::Vocabulary;
pub use word::{Action, Word};

pub use plotstack_foundation::{Error, ErrorKind, Result, Stack, Value, Variables};
