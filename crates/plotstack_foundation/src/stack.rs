//! The immutable operand stack.

use std::fmt;

use crate::collections::PsVec;
use crate::value::Value;

/// Immutable, ordered operand stack. Index 0 is the top.
///
/// Every operation returns a new stack; earlier snapshots remain valid.
#[derive(Clone, Default, PartialEq)]
pub struct Stack(PsVec<Value>);

impl Stack {
    /// Creates an empty stack.
    #[must_use]
    pub fn new() -> Self {
        Self(PsVec::new())
    }

    /// Creates a stack from values listed top first.
    #[must_use]
    pub fn from_top(values: impl IntoIterator<Item = Value>) -> Self {
        Self(values.into_iter().collect())
    }

    /// Returns the number of values.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns true if the stack is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns the value `index` positions below the top.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Value> {
        self.0.get(index)
    }

    /// Returns the top value.
    #[must_use]
    pub fn peek(&self) -> Option<&Value> {
        self.0.first()
    }

    /// Returns the bottom value.
    #[must_use]
    pub fn bottom(&self) -> Option<&Value> {
        self.0.last()
    }

    /// Returns a new stack with `value` on top.
    #[must_use]
    pub fn push(&self, value: Value) -> Self {
        Self(self.0.push_front(value))
    }

    /// Returns the top value and the stack below it.
    #[must_use]
    pub fn pop(&self) -> Option<(Value, Self)> {
        self.0.pop_front().map(|(rest, value)| (value, Self(rest)))
    }

    /// Pops the top two values, returning `(top, second, rest)`.
    #[must_use]
    pub fn pop2(&self) -> Option<(Value, Value, Self)> {
        let (a, rest) = self.pop()?;
        let (b, rest) = rest.pop()?;
        Some((a, b, rest))
    }

    /// Returns a new stack with `value` placed at the bottom.
    #[must_use]
    pub fn push_bottom(&self, value: Value) -> Self {
        Self(self.0.push_back(value))
    }

    /// Returns the bottom value and the stack above it.
    #[must_use]
    pub fn pop_bottom(&self) -> Option<(Value, Self)> {
        self.0.pop_back().map(|(rest, value)| (value, Self(rest)))
    }

    /// Removes the value `index` positions below the top.
    #[must_use]
    pub fn remove(&self, index: usize) -> Option<(Value, Self)> {
        self.0.remove(index).map(|(rest, value)| (value, Self(rest)))
    }

    /// Splits off the top `n` values, returning `(top, rest)`.
    ///
    /// If the stack holds fewer than `n` values, all of them are taken.
    #[must_use]
    pub fn split_at(&self, n: usize) -> (Self, Self) {
        let (top, rest) = self.0.split_at(n);
        (Self(top), Self(rest))
    }

    /// Returns this stack stacked on top of `below`.
    #[must_use]
    pub fn concat(&self, below: &Self) -> Self {
        Self(self.0.concat(&below.0))
    }

    /// Returns the stack in reverse order.
    #[must_use]
    pub fn reverse(&self) -> Self {
        Self(self.0.reverse())
    }

    /// Iterates from top to bottom.
    pub fn iter(&self) -> impl DoubleEndedIterator<Item = &Value> {
        self.0.iter()
    }

    /// Returns the values as a list, top first.
    #[must_use]
    pub fn to_list(&self) -> PsVec<Value> {
        self.0.clone()
    }

    /// One type label per element, top to bottom, e.g. `[String,List]`.
    #[must_use]
    pub fn type_summary(&self) -> String {
        let labels: Vec<_> = self.iter().map(Value::type_label).collect();
        format!("[{}]", labels.join(","))
    }
}

impl From<PsVec<Value>> for Stack {
    fn from(values: PsVec<Value>) -> Self {
        Self(values)
    }
}

impl FromIterator<Value> for Stack {
    fn from_iter<I: IntoIterator<Item = Value>>(iter: I) -> Self {
        Self::from_top(iter)
    }
}

impl fmt::Debug for Stack {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}
