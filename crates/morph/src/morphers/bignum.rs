//! Arbitrary-precision morphers: big integers and fixed-point decimals.

use num_bigint::BigInt;
use num_traits::{FromPrimitive, ToPrimitive};
use rust_decimal::Decimal;

use crate::error::{MorphError, MorphResult};
use crate::kind::{TargetKind, ValueKind};
use crate::morpher::Morpher;
use crate::value::Value;

fn coerce_bigint(value: &Value) -> Option<BigInt> {
    match value {
        Value::BigInt(v) => Some(v.clone()),
        Value::Byte(v) => Some(BigInt::from(*v)),
        Value::Short(v) => Some(BigInt::from(*v)),
        Value::Int(v) => Some(BigInt::from(*v)),
        Value::Long(v) => Some(BigInt::from(*v)),
        Value::Float(v) => BigInt::from_f32(v.trunc()),
        Value::Double(v) => BigInt::from_f64(v.trunc()),
        Value::Decimal(v) => v.trunc().to_i128().map(BigInt::from),
        other => other.to_string().parse().ok(),
    }
}

fn coerce_decimal(value: &Value) -> Option<Decimal> {
    match value {
        Value::Decimal(v) => Some(*v),
        Value::Byte(v) => Some(Decimal::from(*v)),
        Value::Short(v) => Some(Decimal::from(*v)),
        Value::Int(v) => Some(Decimal::from(*v)),
        Value::Long(v) => Some(Decimal::from(*v)),
        Value::Float(v) => Decimal::from_f32(*v),
        Value::Double(v) => Decimal::from_f64(*v),
        Value::BigInt(v) => v.to_i128().and_then(Decimal::from_i128),
        other => other.to_string().parse().ok(),
    }
}

/// Morphs any non-array value to an arbitrary-precision integer.
///
/// Fractional sources truncate toward zero; non-finite floats fail.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct BigIntMorpher {
    default: Option<Option<BigInt>>,
}

impl BigIntMorpher {
    /// Creates a morpher with no default.
    pub fn new() -> Self {
        Self { default: None }
    }

    /// Creates a morpher with a default; `None` is the explicit null
    /// default.
    pub fn with_default(default: Option<BigInt>) -> Self {
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
            .clone()
            .map(|d| d.map(Value::BigInt).unwrap_or(Value::Null))
    }
}

impl Morpher for BigIntMorpher {
    fn supports(&self, kind: ValueKind) -> bool {
        !kind.is_array()
    }

    fn target(&self) -> TargetKind {
        TargetKind::BigInt
    }

    fn morph(&self, value: Value) -> MorphResult<Value> {
        match value {
            Value::Null => self
                .default_result()
                .ok_or_else(|| MorphError::null_value(self.target())),
            Value::Array(_) => Err(MorphError::unsupported(ValueKind::Array, self.target())),
            value => match coerce_bigint(&value) {
                Some(n) => Ok(Value::BigInt(n)),
                None => self
                    .default_result()
                    .ok_or_else(|| MorphError::coercion(&value, value.kind(), self.target())),
            },
        }
    }
}

/// Morphs any non-array value to a fixed-point decimal.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct DecimalMorpher {
    default: Option<Option<Decimal>>,
}

impl DecimalMorpher {
    /// Creates a morpher with no default.
    pub fn new() -> Self {
        Self { default: None }
    }

    /// Creates a morpher with a default; `None` is the explicit null
    /// default.
    pub fn with_default(default: Option<Decimal>) -> Self {
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
            .map(|d| d.map(Value::Decimal).unwrap_or(Value::Null))
    }
}

impl Morpher for DecimalMorpher {
    fn supports(&self, kind: ValueKind) -> bool {
        !kind.is_array()
    }

    fn target(&self) -> TargetKind {
        TargetKind::Decimal
    }

    fn morph(&self, value: Value) -> MorphResult<Value> {
        match value {
            Value::Null => self
                .default_result()
                .ok_or_else(|| MorphError::null_value(self.target())),
            Value::Array(_) => Err(MorphError::unsupported(ValueKind::Array, self.target())),
            value => match coerce_decimal(&value) {
                Some(n) => Ok(Value::Decimal(n)),
                None => self
                    .default_result()
                    .ok_or_else(|| MorphError::coercion(&value, value.kind(), self.target())),
            },
        }
    }
}
