//! Words defined as sequences of other words.

use plotstack_foundation::Value;
use plotstack_language::{Macro, Word};

/// Bodies of the standard macros.
const DEFINITIONS: &[(&str, &[&str], &[&str])] = &[
    // (name, body, examples)
    ("nip", &[":swap", ":drop"], &["a,b"]),
    ("tuck", &[":swap", ":over"], &["a,b"]),
    ("2over", &["3", ":pick", "3", ":pick"], &["a,b,c,d"]),
];

/// Macro words, in dispatch order.
#[must_use]
pub fn words() -> Vec<Word> {
    DEFINITIONS
        .iter()
        .map(|(name, body, examples)| {
            let body = body.iter().map(|t| Value::literal(t)).collect();
            Macro::new(*name, body)
                .into_word()
                .with_examples(examples.iter().copied())
        })
        .collect()
}
