//! Integration tests for Layer 2: Standard vocabulary
//!
//! Behavioral laws of the standard words, checked on generated stacks.

mod laws;
mod programs;
