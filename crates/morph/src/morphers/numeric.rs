//! Numeric morphers, generic over the target primitive.
//!
//! All six primitive numeric targets share one conversion strategy: numeric
//! sources narrow through checked casts (out-of-range and NaN-to-integral
//! fail instead of wrapping), everything else renders to a string and parses
//! with the target's own syntax.

use std::fmt;
use std::str::FromStr;

use num_traits::ToPrimitive;

use crate::error::{MorphError, MorphResult};
use crate::kind::{TargetKind, ValueKind};
use crate::morpher::Morpher;
use crate::value::Value;

mod sealed {
    pub trait Sealed {}
}

/// A primitive numeric morph target. Sealed: the six implementations below
/// are the closed set.
pub trait Numeric:
    Copy + PartialEq + fmt::Display + FromStr + Send + Sync + sealed::Sealed + 'static
{
    /// The target tag for this primitive.
    fn target_kind() -> TargetKind;

    /// Checked conversion from any numeric value variant.
    fn from_numeric(value: &Value) -> Option<Self>;

    /// Parses the target's own literal syntax.
    fn parse_text(text: &str) -> Option<Self> {
        text.parse().ok()
    }

    /// Wraps the primitive back into a [`Value`].
    fn into_value(self) -> Value;
}

macro_rules! impl_numeric_integral {
    ($ty:ty, $variant:ident, $to:ident) => {
        impl sealed::Sealed for $ty {}

        impl Numeric for $ty {
            fn target_kind() -> TargetKind {
                TargetKind::$variant
            }

            fn from_numeric(value: &Value) -> Option<Self> {
                match value {
                    Value::Byte(v) => v.$to(),
                    Value::Short(v) => v.$to(),
                    Value::Int(v) => v.$to(),
                    Value::Long(v) => v.$to(),
                    Value::Float(v) => v.$to(),
                    Value::Double(v) => v.$to(),
                    Value::BigInt(v) => v.$to(),
                    Value::Decimal(v) => v.trunc().$to(),
                    _ => None,
                }
            }

            fn into_value(self) -> Value {
                Value::$variant(self)
            }
        }
    };
}

macro_rules! impl_numeric_float {
    ($ty:ty, $variant:ident, $to:ident) => {
        impl sealed::Sealed for $ty {}

        impl Numeric for $ty {
            fn target_kind() -> TargetKind {
                TargetKind::$variant
            }

            fn from_numeric(value: &Value) -> Option<Self> {
                match value {
                    Value::Byte(v) => v.$to(),
                    Value::Short(v) => v.$to(),
                    Value::Int(v) => v.$to(),
                    Value::Long(v) => v.$to(),
                    Value::Float(v) => v.$to(),
                    Value::Double(v) => v.$to(),
                    Value::BigInt(v) => v.$to(),
                    Value::Decimal(v) => v.$to(),
                    _ => None,
                }
            }

            fn into_value(self) -> Value {
                Value::$variant(self)
            }
        }
    };
}

impl_numeric_integral!(i8, Byte, to_i8);
impl_numeric_integral!(i16, Short, to_i16);
impl_numeric_integral!(i32, Int, to_i32);
impl_numeric_integral!(i64, Long, to_i64);
impl_numeric_float!(f32, Float, to_f32);
impl_numeric_float!(f64, Double, to_f64);

/// Morphs any non-array value to the primitive numeric `T`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct NumericMorpher<T: Numeric> {
    default: Option<T>,
}

impl<T: Numeric> NumericMorpher<T> {
    /// Creates a morpher with no default.
    pub fn new() -> Self {
        Self { default: None }
    }

    /// Creates a morpher that substitutes `default` for null and
    /// unconvertible values.
    pub fn with_default(default: T) -> Self {
        Self {
            default: Some(default),
        }
    }

    /// Returns true if this morpher substitutes a default on failure.
    pub fn use_default(&self) -> bool {
        self.default.is_some()
    }
}

impl<T: Numeric> Morpher for NumericMorpher<T> {
    fn supports(&self, kind: ValueKind) -> bool {
        !kind.is_array()
    }

    fn target(&self) -> TargetKind {
        T::target_kind()
    }

    fn morph(&self, value: Value) -> MorphResult<Value> {
        match value {
            Value::Null => match self.default {
                Some(d) => Ok(d.into_value()),
                None => Err(MorphError::null_value(self.target())),
            },
            Value::Array(_) => Err(MorphError::unsupported(ValueKind::Array, self.target())),
            value => {
                let converted =
                    T::from_numeric(&value).or_else(|| T::parse_text(&value.to_string()));
                match converted {
                    Some(n) => Ok(n.into_value()),
                    None => match self.default {
                        Some(d) => Ok(d.into_value()),
                        None => Err(MorphError::coercion(&value, value.kind(), self.target())),
                    },
                }
            }
        }
    }
}

/// Boxed numeric morpher: like [`NumericMorpher`], but the default may be an
/// explicit null.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct NumericObjectMorpher<T: Numeric> {
    default: Option<Option<T>>,
}

impl<T: Numeric> NumericObjectMorpher<T> {
    /// Creates a morpher with no default.
    pub fn new() -> Self {
        Self { default: None }
    }

    /// Creates a morpher with a default; `None` is the explicit null
    /// default.
    pub fn with_default(default: Option<T>) -> Self {
        Self {
            default: Some(default),
        }
    }

    /// Returns true if this morpher substitutes a default on failure.
    pub fn use_default(&self) -> bool {
        self.default.is_some()
    }

    fn default_result(&self) -> Option<Value> {
        self.default
            .map(|d| d.map(T::into_value).unwrap_or(Value::Null))
    }
}

impl<T: Numeric> Morpher for NumericObjectMorpher<T> {
    fn supports(&self, kind: ValueKind) -> bool {
        !kind.is_array()
    }

    fn target(&self) -> TargetKind {
        T::target_kind()
    }

    fn morph(&self, value: Value) -> MorphResult<Value> {
        match value {
            Value::Null => self
                .default_result()
                .ok_or_else(|| MorphError::null_value(self.target())),
            Value::Array(_) => Err(MorphError::unsupported(ValueKind::Array, self.target())),
            value => {
                let converted =
                    T::from_numeric(&value).or_else(|| T::parse_text(&value.to_string()));
                match converted {
                    Some(n) => Ok(n.into_value()),
                    None => self
                        .default_result()
                        .ok_or_else(|| MorphError::coercion(&value, value.kind(), self.target())),
                }
            }
        }
    }
}

/// Morphs to `i8`.
pub type ByteMorpher = NumericMorpher<i8>;
/// Morphs to `i16`.
pub type ShortMorpher = NumericMorpher<i16>;
/// Morphs to `i32`.
pub type IntMorpher = NumericMorpher<i32>;
/// Morphs to `i64`.
pub type LongMorpher = NumericMorpher<i64>;
/// Morphs to `f32`.
pub type FloatMorpher = NumericMorpher<f32>;
/// Morphs to `f64`.
pub type DoubleMorpher = NumericMorpher<f64>;

/// Morphs to a boxed `i8`.
pub type ByteObjectMorpher = NumericObjectMorpher<i8>;
/// Morphs to a boxed `i16`.
pub type ShortObjectMorpher = NumericObjectMorpher<i16>;
/// Morphs to a boxed `i32`.
pub type IntObjectMorpher = NumericObjectMorpher<i32>;
/// Morphs to a boxed `i64`.
pub type LongObjectMorpher = NumericObjectMorpher<i64>;
/// Morphs to a boxed `f32`.
pub type FloatObjectMorpher = NumericObjectMorpher<f32>;
/// Morphs to a boxed `f64`.
pub type DoubleObjectMorpher = NumericObjectMorpher<f64>;
