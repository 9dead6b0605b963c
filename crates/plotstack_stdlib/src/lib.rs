//! Standard vocabulary for the plotstack language.
//!
//! Words are organized by category:
//! - [`stack`] - Stack shuffling (`dup`, `swap`, `rot`, `pick`, ...)
//! - [`variables`] - Variable bindings and isolation (`get`, `set`, `freeze`)
//! - [`lists`] - Building and running lists (`list`, `call`, `each`, `map`)
//! - [`macros`] - Words defined in terms of other words (`nip`, `tuck`, `2over`)
//!
//! Vocabularies for domain words (series selection, math, presentation)
//! declare [`standard_vocabulary`] as a dependency so these words are always
//! available and tried first.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod lists;
pub mod macros;
pub mod stack;
pub mod variables;

use plotstack_foundation::{Error, Stack};
use plotstack_language::{Interpreter, Vocabulary, Word};

/// Name of the standard vocabulary.
pub const STANDARD: &str = "std";

/// Every standard word, in dispatch order.
#[must_use]
pub fn standard_words() -> Vec<Word> {
    let mut words = stack::words();
    words.extend(variables::words());
    words.extend(lists::words());
    words.extend(macros::words());
    words
}

/// The standard vocabulary. It has no dependencies.
#[must_use]
pub fn standard_vocabulary() -> Vocabulary {
    Vocabulary::new(STANDARD, Vec::new(), standard_words())
}

/// An interpreter with only the standard words.
#[must_use]
pub fn standard_interpreter() -> Interpreter {
    Interpreter::from_vocabulary(&standard_vocabulary())
}

/// Matches stacks holding at least `n` values.
pub(crate) fn at_least(n: usize) -> impl Fn(&Stack) -> bool + Send + Sync + 'static {
    move |s| s.len() >= n
}

/// Raised when a word's action finds a stack its matcher should have rejected.
pub(crate) fn underflow(name: &str) -> Error {
    Error::internal(format!("stack underflow in :{name}"))
}
