//! Syntax highlighting for the REPL.

use std::borrow::Cow;

const RESET: &str = "\x1b[0m";
const WORD: &str = "\x1b[36m"; // cyan
const PAREN: &str = "\x1b[1;33m"; // bold yellow
const NUMBER: &str = "\x1b[35m"; // magenta
const COMMA: &str = "\x1b[2m"; // dim

/// Highlighter for plotstack programs.
pub struct PlotstackHighlighter;

impl PlotstackHighlighter {
    /// Creates a new highlighter.
    pub const fn new() -> Self {
        Self
    }

    /// Highlight a line of input.
    ///
    /// Works on raw comma separated segments so half typed input still gets
    /// colored; bracket groups spanning commas are left plain.
    #[allow(clippy::unused_self)]
    pub fn highlight<'l>(&self, line: &'l str, _pos: usize) -> Cow<'l, str> {
        if line.is_empty() || line.starts_with('.') {
            return Cow::Borrowed(line);
        }

        let mut result = String::with_capacity(line.len() * 2);
        for (i, segment) in line.split(',').enumerate() {
            if i > 0 {
                result.push_str(COMMA);
                result.push(',');
                result.push_str(RESET);
            }
            match color_for(segment.trim()) {
                Some(color) => {
                    result.push_str(color);
                    result.push_str(segment);
                    result.push_str(RESET);
                }
                None => result.push_str(segment),
            }
        }
        Cow::Owned(result)
    }
}

fn color_for(token: &str) -> Option<&'static str> {
    match token {
        "(" | ")" => Some(PAREN),
        t if t.len() > 1 && t.starts_with(':') => Some(WORD),
        t if !t.is_empty() && t.parse::<f64>().is_ok() => Some(NUMBER),
        _ => None,
    }
}

impl Default for PlotstackHighlighter {
    fn default() -> Self {
        Self::new()
    }
}
