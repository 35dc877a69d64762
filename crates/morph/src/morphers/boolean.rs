//! Boolean morphers.

use num_traits::Zero;

use crate::error::{MorphError, MorphResult};
use crate::kind::{TargetKind, ValueKind};
use crate::morpher::Morpher;
use crate::value::Value;

/// Coercion core shared by the primitive and object boolean morphers.
///
/// Numeric values are truthy when nonzero in their integral (i64)
/// representation; NaN and infinities coerce to true rather than through
/// the integral representation. Everything else goes through the string
/// table `true/yes/on` / `false/no/off`, case-insensitive.
fn coerce(value: &Value) -> Option<bool> {
    match value {
        Value::Bool(b) => Some(*b),
        Value::Byte(v) => Some(*v != 0),
        Value::Short(v) => Some(*v != 0),
        Value::Int(v) => Some(*v != 0),
        Value::Long(v) => Some(*v != 0),
        Value::Float(v) => Some(float_truthy(f64::from(*v))),
        Value::Double(v) => Some(float_truthy(*v)),
        Value::BigInt(v) => Some(!v.is_zero()),
        Value::Decimal(v) => Some(!v.trunc().is_zero()),
        other => parse_text(&other.to_string()),
    }
}

fn float_truthy(value: f64) -> bool {
    if value.is_nan() || value.is_infinite() {
        return true;
    }
    // Truncation to the integral representation: 0.5 is falsy.
    value as i64 != 0
}

fn parse_text(text: &str) -> Option<bool> {
    if text.eq_ignore_ascii_case("true")
        || text.eq_ignore_ascii_case("yes")
        || text.eq_ignore_ascii_case("on")
    {
        Some(true)
    } else if text.eq_ignore_ascii_case("false")
        || text.eq_ignore_ascii_case("no")
        || text.eq_ignore_ascii_case("off")
    {
        Some(false)
    } else {
        None
    }
}

/// Morphs any non-array value to a `bool`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct BoolMorpher {
    default: Option<bool>,
}

impl BoolMorpher {
    /// Creates a morpher with no default: null and unconvertible values
    /// fail.
    pub fn new() -> Self {
        Self { default: None }
    }

    /// Creates a morpher that substitutes `default` for null and
    /// unconvertible values.
    pub fn with_default(default: bool) -> Self {
        Self {
            default: Some(default),
        }
    }

    /// Returns true if this morpher substitutes a default on failure.
    pub fn use_default(&self) -> bool {
        self.default.is_some()
    }
}

impl Morpher for BoolMorpher {
    fn supports(&self, kind: ValueKind) -> bool {
        !kind.is_array()
    }

    fn target(&self) -> TargetKind {
        TargetKind::Bool
    }

    fn morph(&self, value: Value) -> MorphResult<Value> {
        match value {
            Value::Null => match self.default {
                Some(d) => Ok(Value::Bool(d)),
                None => Err(MorphError::null_value(self.target())),
            },
            Value::Array(_) => Err(MorphError::unsupported(ValueKind::Array, self.target())),
            value => match coerce(&value) {
                Some(b) => Ok(Value::Bool(b)),
                None => match self.default {
                    Some(d) => Ok(Value::Bool(d)),
                    None => Err(MorphError::coercion(&value, value.kind(), self.target())),
                },
            },
        }
    }
}

/// Boxed-boolean morpher: like [`BoolMorpher`], but the default may be an
/// explicit null, in which case null propagates as the result.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct BoolObjectMorpher {
    default: Option<Option<bool>>,
}

impl BoolObjectMorpher {
    /// Creates a morpher with no default.
    pub fn new() -> Self {
        Self { default: None }
    }

    /// Creates a morpher with a default; `None` is the explicit null
    /// default.
    pub fn with_default(default: Option<bool>) -> Self {
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
            .map(|d| d.map(Value::Bool).unwrap_or(Value::Null))
    }
}

impl Morpher for BoolObjectMorpher {
    fn supports(&self, kind: ValueKind) -> bool {
        !kind.is_array()
    }

    fn target(&self) -> TargetKind {
        TargetKind::Bool
    }

    fn morph(&self, value: Value) -> MorphResult<Value> {
        match value {
            Value::Null => self
                .default_result()
                .ok_or_else(|| MorphError::null_value(self.target())),
            Value::Array(_) => Err(MorphError::unsupported(ValueKind::Array, self.target())),
            value => match coerce(&value) {
                Some(b) => Ok(Value::Bool(b)),
                None => self
                    .default_result()
                    .ok_or_else(|| MorphError::coercion(&value, value.kind(), self.target())),
            },
        }
    }
}
