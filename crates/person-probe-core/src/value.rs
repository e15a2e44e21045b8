//! Dynamic values and parameter categories
//!
//! [`Value`] is what flows through by-name property access and method calls.
//! [`ParamKind`] is the declared category of a property, parameter or return
//! value, and knows how to synthesize a default for itself.

use chrono::{DateTime, Utc};

use crate::{numeric::Number, NumericKind, Result};

/// Declared category of a property, parameter or return value.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ParamKind {
    /// Text
    Text,
    /// Boolean
    Bool,
    /// One of the supported numeric kinds
    Numeric(NumericKind),
    /// Point in time
    DateTime,
    /// A plain value type other than the above, by name
    ValueType(String),
    /// A reference type, by name. Only absence is representable.
    Reference(String),
}

impl ParamKind {
    /// Human-readable type name, used in diagnostics.
    #[must_use]
    pub fn type_name(&self) -> String {
        match self {
            Self::Text => "string".to_string(),
            Self::Bool => "bool".to_string(),
            Self::Numeric(kind) => kind.to_string(),
            Self::DateTime => "datetime".to_string(),
            Self::ValueType(name) | Self::Reference(name) => name.clone(),
        }
    }

    /// True for the numeric category.
    #[must_use]
    pub const fn is_numeric(&self) -> bool {
        matches!(self, Self::Numeric(_))
    }

    /// Default argument for a parameter of this kind.
    ///
    /// Text is empty, booleans are false, numbers are zero of the exact
    /// kind, date/time is the minimum representable instant, other value
    /// types are zeroed and references are absent.
    pub fn synthesize(&self) -> Result<Value> {
        Ok(match self {
            Self::Text => Value::Text(String::new()),
            Self::Bool => Value::Bool(false),
            Self::Numeric(kind) => Value::Number(Number::from_integer(0, *kind)?),
            Self::DateTime => Value::DateTime(DateTime::<Utc>::MIN_UTC),
            Self::ValueType(name) => Value::Zeroed(name.clone()),
            Self::Reference(_) => Value::Null,
        })
    }

    /// True when `value` can be passed for this kind without conversion.
    #[must_use]
    pub fn accepts(&self, value: &Value) -> bool {
        match (self, value) {
            (Self::Text, Value::Text(_))
            | (Self::Bool, Value::Bool(_))
            | (Self::DateTime, Value::DateTime(_))
            | (Self::Reference(_), Value::Null) => true,
            (Self::Numeric(kind), Value::Number(number)) => number.kind() == *kind,
            (Self::ValueType(name), Value::Zeroed(zeroed)) => name == zeroed,
            _ => false,
        }
    }
}

impl std::fmt::Display for ParamKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.type_name())
    }
}

/// A dynamically typed value.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Text(String),
    Bool(bool),
    Number(Number),
    DateTime(DateTime<Utc>),
    /// Zero value of a named value type
    Zeroed(String),
    /// Absent reference
    Null,
    /// Result of a method that returns nothing
    Unit,
}

impl Value {
    /// Type name of this value, used in diagnostics.
    #[must_use]
    pub fn type_name(&self) -> String {
        match self {
            Self::Text(_) => "string".to_string(),
            Self::Bool(_) => "bool".to_string(),
            Self::Number(number) => number.kind().to_string(),
            Self::DateTime(_) => "datetime".to_string(),
            Self::Zeroed(name) => name.clone(),
            Self::Null => "null".to_string(),
            Self::Unit => "unit".to_string(),
        }
    }

    /// Borrow the text, if this is text.
    #[must_use]
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(text) => Some(text),
            _ => None,
        }
    }

    /// The number, if this is numeric.
    #[must_use]
    pub const fn as_number(&self) -> Option<Number> {
        match self {
            Self::Number(number) => Some(*number),
            _ => None,
        }
    }
}

impl From<&str> for Value {
    fn from(text: &str) -> Self {
        Self::Text(text.to_string())
    }
}

impl From<String> for Value {
    fn from(text: String) -> Self {
        Self::Text(text)
    }
}

impl From<bool> for Value {
    fn from(flag: bool) -> Self {
        Self::Bool(flag)
    }
}

impl From<Number> for Value {
    fn from(number: Number) -> Self {
        Self::Number(number)
    }
}
