//! REPL and CLI for plotstack.
//!
//! This crate provides:
//! - [`Repl`] - Interactive read-eval-print loop
//! - [`Session`] - Stack and variables carried between REPL lines
//! - [`RuntimeConfig`] and [`CliOptions`] - Runtime settings and argument parsing
//! - [`init_tracing`] - Opt-in log output controlled by `RUST_LOG`

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod cli;
pub mod config;
pub mod editor;
mod highlight;
pub mod logging;
pub mod repl;
pub mod session;

pub use cli::{CliError, CliOptions};
pub use config::RuntimeConfig;
pub use editor::{LineEditor, ReadResult, RustylineEditor, is_complete};
pub use logging::init_tracing;
pub use repl::Repl;
pub use session::Session;
