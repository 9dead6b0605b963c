//! plotstack - Stack language for composing metric expressions
//!
//! This crate re-exports all layers of the plotstack system for convenient access.
//! For detailed documentation, see the individual layer crates.
//!
//! # Architecture
//!
//! ```text
//! Layer 3: plotstack_runtime    - REPL, CLI, configuration, log setup
//! Layer 2: plotstack_stdlib     - Standard vocabulary (stack, variables, lists, macros)
//! Layer 1: plotstack_language   - Tokenizer, words, vocabularies, interpreter
//! Layer 0: plotstack_foundation - Core types (Value, Stack, Error)
//! ```

pub use plotstack_foundation as foundation;
pub use plotstack_language as language;
pub use plotstack_runtime as runtime;
pub use plotstack_stdlib as stdlib;
