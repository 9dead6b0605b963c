//! Core values, persistent stack, and errors for plotstack.
//!
//! This crate provides:
//! - [`Value`] - The datum held on the operand stack
//! - [`Stack`] - Immutable, top-first operand stack
//! - [`Error`] - The error type shared by every layer
//! - Persistent collections ([`PsVec`], [`PsMap`])

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod collections;
pub mod error;
pub mod stack;
pub mod value;

pub use collections::{PsMap, PsVec};
pub use error::{Error, ErrorContext, ErrorKind};
pub use stack::Stack;
pub use value::{StackObject, Value};

/// Result type alias using the plotstack error.
pub type Result<T> = std::result::Result<T, Error>;

/// Variable bindings visible to a program.
pub type Variables = PsMap<String, Value>;
