//! Integration tests for Layer 1: Language
//!
//! Tests for the tokenizer, word dispatch, vocabularies and the interpreter.

mod dispatch;
mod vocabulary;
