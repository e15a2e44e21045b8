//! Numeric kinds and the normalizer between them
//!
//! Target types may declare any of six numeric kinds for properties and
//! parameters. Checks only ever think in plain integers, so two conversions
//! bridge the gap:
//!
//! - [`convert_integer`]: integer literal → value of the declared kind
//! - [`to_integer`]: value of any numeric kind → `i64` for comparison

use rust_decimal::{
    prelude::{FromPrimitive, ToPrimitive},
    Decimal,
};
use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString};

use crate::{
    value::{ParamKind, Value},
    Error, Result,
};

/// The fixed set of numeric representations eligible for coercion.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Display,
    EnumString,
    EnumIter,
    Serialize,
    Deserialize,
)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum NumericKind {
    /// 16-bit signed integer
    Short,
    /// 32-bit signed integer
    Int,
    /// 64-bit signed integer
    Long,
    /// 32-bit float
    Float,
    /// 64-bit float
    Double,
    /// 96-bit decimal
    Decimal,
}

impl NumericKind {
    /// True for the integer widths.
    #[must_use]
    pub const fn is_integer(self) -> bool {
        matches!(self, Self::Short | Self::Int | Self::Long)
    }
}

/// A numeric value tagged with its kind.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Number {
    Short(i16),
    Int(i32),
    Long(i64),
    Float(f32),
    Double(f64),
    Decimal(Decimal),
}

impl Number {
    /// Kind of this value.
    #[must_use]
    pub const fn kind(&self) -> NumericKind {
        match self {
            Self::Short(_) => NumericKind::Short,
            Self::Int(_) => NumericKind::Int,
            Self::Long(_) => NumericKind::Long,
            Self::Float(_) => NumericKind::Float,
            Self::Double(_) => NumericKind::Double,
            Self::Decimal(_) => NumericKind::Decimal,
        }
    }

    /// Convert an integer literal into the exact kind requested.
    ///
    /// # Errors
    ///
    /// Returns `Error::NumericOverflow` if the literal does not fit an
    /// integer width.
    #[allow(clippy::cast_precision_loss)]
    pub fn from_integer(literal: i64, kind: NumericKind) -> Result<Self> {
        let overflow = || Error::NumericOverflow {
            value: literal.to_string(),
            kind,
        };
        match kind {
            NumericKind::Short => i16::try_from(literal).map(Self::Short).map_err(|_| overflow()),
            NumericKind::Int => i32::try_from(literal).map(Self::Int).map_err(|_| overflow()),
            NumericKind::Long => Ok(Self::Long(literal)),
            NumericKind::Float => Ok(Self::Float(literal as f32)),
            NumericKind::Double => Ok(Self::Double(literal as f64)),
            NumericKind::Decimal => Ok(Self::Decimal(Decimal::from(literal))),
        }
    }

    /// Zero of the given kind.
    #[must_use]
    pub const fn zero(kind: NumericKind) -> Self {
        match kind {
            NumericKind::Short => Self::Short(0),
            NumericKind::Int => Self::Int(0),
            NumericKind::Long => Self::Long(0),
            NumericKind::Float => Self::Float(0.0),
            NumericKind::Double => Self::Double(0.0),
            NumericKind::Decimal => Self::Decimal(Decimal::ZERO),
        }
    }

    /// Plain integer view of this value. Fractions truncate toward zero.
    ///
    /// # Errors
    ///
    /// Returns `Error::NumericOverflow` for non-finite floats and values
    /// outside the `i64` range.
    #[allow(clippy::cast_precision_loss, clippy::cast_possible_truncation)]
    pub fn as_integer(&self) -> Result<i64> {
        let overflow = || Error::NumericOverflow {
            value: self.to_string(),
            kind: NumericKind::Long,
        };
        let from_float = |f: f64| {
            let truncated = f.trunc();
            if truncated.is_finite() && truncated >= i64::MIN as f64 && truncated < i64::MAX as f64
            {
                Ok(truncated as i64)
            } else {
                Err(overflow())
            }
        };
        match *self {
            Self::Short(v) => Ok(i64::from(v)),
            Self::Int(v) => Ok(i64::from(v)),
            Self::Long(v) => Ok(v),
            Self::Float(v) => from_float(f64::from(v)),
            Self::Double(v) => from_float(v),
            Self::Decimal(v) => v.trunc().to_i64().ok_or_else(overflow),
        }
    }
}

impl Number {
    /// The same value as another kind.
    ///
    /// Integer targets truncate toward zero. Float, double and decimal
    /// targets keep the fraction.
    ///
    /// # Errors
    ///
    /// Returns `Error::NumericOverflow` when the value does not fit `kind`.
    #[allow(clippy::cast_possible_truncation)]
    pub fn convert_to(&self, kind: NumericKind) -> Result<Self> {
        if kind.is_integer() || self.kind().is_integer() {
            return Self::from_integer(self.as_integer()?, kind);
        }
        let overflow = || Error::NumericOverflow {
            value: self.to_string(),
            kind,
        };
        match (*self, kind) {
            (Self::Float(v), NumericKind::Double) => Ok(Self::Double(f64::from(v))),
            (Self::Double(v), NumericKind::Float) => Ok(Self::Float(v as f32)),
            (Self::Float(v), NumericKind::Decimal) => {
                Decimal::from_f32(v).map(Self::Decimal).ok_or_else(overflow)
            }
            (Self::Double(v), NumericKind::Decimal) => {
                Decimal::from_f64(v).map(Self::Decimal).ok_or_else(overflow)
            }
            (Self::Decimal(v), NumericKind::Float) => {
                v.to_f32().map(Self::Float).ok_or_else(overflow)
            }
            (Self::Decimal(v), NumericKind::Double) => {
                v.to_f64().map(Self::Double).ok_or_else(overflow)
            }
            (same, _) => Ok(same),
        }
    }
}

impl std::fmt::Display for Number {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Short(v) => write!(f, "{v}"),
            Self::Int(v) => write!(f, "{v}"),
            Self::Long(v) => write!(f, "{v}"),
            Self::Float(v) => write!(f, "{v}"),
            Self::Double(v) => write!(f, "{v}"),
            Self::Decimal(v) => write!(f, "{v}"),
        }
    }
}

/// Convert an integer literal into a value of the target parameter kind.
///
/// # Errors
///
/// Returns `Error::UnsupportedNumericKind` naming the target when it is not
/// numeric, or `Error::NumericOverflow` when the literal does not fit.
pub fn convert_integer(literal: i64, target: &ParamKind) -> Result<Value> {
    match target {
        ParamKind::Numeric(kind) => Number::from_integer(literal, *kind).map(Value::Number),
        other => Err(Error::UnsupportedNumericKind(other.type_name())),
    }
}

/// Convert a value of any supported numeric kind into a plain integer.
///
/// # Errors
///
/// Returns `Error::UnsupportedNumericKind` naming the value's type when it is
/// not numeric.
pub fn to_integer(value: &Value) -> Result<i64> {
    match value {
        Value::Number(number) => number.as_integer(),
        other => Err(Error::UnsupportedNumericKind(other.type_name())),
    }
}
