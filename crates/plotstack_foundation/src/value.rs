//! Values held on the operand stack.

use std::fmt;
use std::sync::Arc;

use crate::collections::PsVec;

/// Domain object produced by a word, such as a series expression or a style.
///
/// The interpreter never inspects objects beyond these methods; words that
/// understand a particular object type downcast through [`StackObject::as_any`].
pub trait StackObject: fmt::Debug + Send + Sync {
    /// Short type name shown in dispatch error summaries.
    fn type_name(&self) -> &str;

    /// Rendering of the object for display.
    fn render(&self) -> String;

    /// Access for downcasting to the concrete type.
    fn as_any(&self) -> &dyn std::any::Any;
}

/// A datum on the operand stack.
///
/// Values are immutable and cheaply cloneable. Literal tokens stay untyped
/// strings; words reinterpret them (e.g. as integers) on demand.
#[derive(Clone)]
pub enum Value {
    /// A literal token from the program text.
    Literal(Arc<str>),
    /// An ordered list of values, e.g. a captured `(`...`)` run.
    List(PsVec<Value>),
    /// A domain object produced by a word.
    Object(Arc<dyn StackObject>),
}

impl Value {
    /// Creates a literal value.
    #[must_use]
    pub fn literal(token: impl AsRef<str>) -> Self {
        Self::Literal(Arc::from(token.as_ref()))
    }

    /// Creates a list value.
    #[must_use]
    pub fn list(values: impl IntoIterator<Item = Value>) -> Self {
        Self::List(values.into_iter().collect())
    }

    /// Wraps a domain object.
    #[must_use]
    pub fn object(object: impl StackObject + 'static) -> Self {
        Self::Object(Arc::new(object))
    }

    /// Label used when summarizing a stack in error messages.
    ///
    /// Lists are always labelled `List` so messages do not depend on contents.
    #[must_use]
    pub fn type_label(&self) -> &str {
        match self {
            Self::Literal(_) => "String",
            Self::List(_) => "List",
            Self::Object(object) => object.type_name(),
        }
    }

    /// Attempts to extract the literal text.
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Literal(s) => Some(s),
            _ => None,
        }
    }

    /// Attempts to interpret a literal as an integer.
    #[must_use]
    pub fn as_int(&self) -> Option<i64> {
        self.as_str().and_then(|s| s.parse().ok())
    }

    /// Attempts to interpret a literal as a floating point number.
    #[must_use]
    pub fn as_number(&self) -> Option<f64> {
        self.as_str().and_then(|s| s.parse().ok())
    }

    /// Attempts to extract a list.
    #[must_use]
    pub fn as_list(&self) -> Option<&PsVec<Value>> {
        match self {
            Self::List(values) => Some(values),
            _ => None,
        }
    }

    /// Attempts to extract a domain object.
    #[must_use]
    pub fn as_object(&self) -> Option<&Arc<dyn StackObject>> {
        match self {
            Self::Object(object) => Some(object),
            _ => None,
        }
    }

    /// Returns true if this value is a list.
    #[must_use]
    pub const fn is_list(&self) -> bool {
        matches!(self, Self::List(_))
    }

    /// Returns true if this value is a literal.
    #[must_use]
    pub const fn is_literal(&self) -> bool {
        matches!(self, Self::Literal(_))
    }
}

impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Literal(a), Self::Literal(b)) => a == b,
            (Self::List(a), Self::List(b)) => a == b,
            (Self::Object(a), Self::Object(b)) => Arc::ptr_eq(a, b),
            _ => false,
        }
    }
}

impl fmt::Debug for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Literal(s) => write!(f, "{s:?}"),
            Self::List(values) => f.debug_list().entries(values.iter()).finish(),
            Self::Object(object) => write!(f, "{object:?}"),
        }
    }
}

/// Renders values the way they would be written in a program.
impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Literal(s) => f.write_str(s),
            Self::List(values) => {
                f.write_str("(")?;
                for value in values {
                    write!(f, ",{value}")?;
                }
                f.write_str(",)")
            }
            Self::Object(object) => f.write_str(&object.render()),
        }
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Self::literal(s)
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Self::Literal(Arc::from(s))
    }
}
