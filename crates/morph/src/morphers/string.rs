//! String morpher.

use crate::error::{MorphError, MorphResult};
use crate::kind::{TargetKind, ValueKind};
use crate::morpher::Morpher;
use crate::value::Value;

/// Morphs any non-array value to its string rendering.
///
/// Strings pass through unchanged; every other supported kind converts via
/// its natural rendering, so only a null input can ever fall back to the
/// default. Arrays are unsupported outright.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct StrMorpher {
    default: Option<Option<String>>,
}

impl StrMorpher {
    /// Creates a morpher with no default.
    pub fn new() -> Self {
        Self { default: None }
    }

    /// Creates a morpher with a default; `None` is the explicit null
    /// default.
    pub fn with_default(default: Option<String>) -> Self {
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
            .map(|d| d.map(Value::Str).unwrap_or(Value::Null))
    }
}

impl Morpher for StrMorpher {
    fn supports(&self, kind: ValueKind) -> bool {
        !kind.is_array()
    }

    fn target(&self) -> TargetKind {
        TargetKind::Str
    }

    fn morph(&self, value: Value) -> MorphResult<Value> {
        match value {
            Value::Null => self
                .default_result()
                .ok_or_else(|| MorphError::null_value(self.target())),
            Value::Array(_) => Err(MorphError::unsupported(ValueKind::Array, self.target())),
            Value::Str(s) => Ok(Value::Str(s)),
            value => Ok(Value::Str(value.to_string())),
        }
    }
}
