//! Character morphers.

use crate::error::{MorphError, MorphResult};
use crate::kind::{TargetKind, ValueKind};
use crate::morpher::Morpher;
use crate::value::Value;

/// First character of the value's string rendering; None when it renders
/// empty.
fn coerce(value: &Value) -> Option<char> {
    match value {
        Value::Char(c) => Some(*c),
        other => other.to_string().chars().next(),
    }
}

/// Morphs any non-array value to a `char` by taking the first character of
/// its string rendering.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct CharMorpher {
    default: Option<char>,
}

impl CharMorpher {
    /// Creates a morpher with no default.
    pub fn new() -> Self {
        Self { default: None }
    }

    /// Creates a morpher that substitutes `default` for null and empty
    /// renderings.
    pub fn with_default(default: char) -> Self {
        Self {
            default: Some(default),
        }
    }

    /// Returns true if this morpher substitutes a default on failure.
    pub fn use_default(&self) -> bool {
        self.default.is_some()
    }
}

impl Morpher for CharMorpher {
    fn supports(&self, kind: ValueKind) -> bool {
        !kind.is_array()
    }

    fn target(&self) -> TargetKind {
        TargetKind::Char
    }

    fn morph(&self, value: Value) -> MorphResult<Value> {
        match value {
            Value::Null => match self.default {
                Some(d) => Ok(Value::Char(d)),
                None => Err(MorphError::null_value(self.target())),
            },
            Value::Array(_) => Err(MorphError::unsupported(ValueKind::Array, self.target())),
            value => match coerce(&value) {
                Some(c) => Ok(Value::Char(c)),
                None => match self.default {
                    Some(d) => Ok(Value::Char(d)),
                    None => Err(MorphError::coercion(&value, value.kind(), self.target())),
                },
            },
        }
    }
}

/// Boxed-character morpher: like [`CharMorpher`], but the default may be an
/// explicit null.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct CharObjectMorpher {
    default: Option<Option<char>>,
}

impl CharObjectMorpher {
    /// Creates a morpher with no default.
    pub fn new() -> Self {
        Self { default: None }
    }

    /// Creates a morpher with a default; `None` is the explicit null
    /// default.
    pub fn with_default(default: Option<char>) -> Self {
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
            .map(|d| d.map(Value::Char).unwrap_or(Value::Null))
    }
}

impl Morpher for CharObjectMorpher {
    fn supports(&self, kind: ValueKind) -> bool {
        !kind.is_array()
    }

    fn target(&self) -> TargetKind {
        TargetKind::Char
    }

    fn morph(&self, value: Value) -> MorphResult<Value> {
        match value {
            Value::Null => self
                .default_result()
                .ok_or_else(|| MorphError::null_value(self.target())),
            Value::Array(_) => Err(MorphError::unsupported(ValueKind::Array, self.target())),
            value => match coerce(&value) {
                Some(c) => Ok(Value::Char(c)),
                None => self
                    .default_result()
                    .ok_or_else(|| MorphError::coercion(&value, value.kind(), self.target())),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_char_passes_through() {
        let morpher = CharMorpher::new();
        assert_eq!(morpher.morph(Value::Char('q')).unwrap(), Value::Char('q'));
    }

    #[test]
    fn test_first_character_of_rendering() {
        let morpher = CharMorpher::new();
        assert_eq!(
            morpher.morph(Value::Str("hello".into())).unwrap(),
            Value::Char('h')
        );
        assert_eq!(morpher.morph(Value::Int(42)).unwrap(), Value::Char('4'));
        assert_eq!(
            morpher.morph(Value::Bool(true)).unwrap(),
            Value::Char('t')
        );
    }

    #[test]
    fn test_empty_string_fails_or_defaults() {
        let strict = CharMorpher::new();
        let err = strict.morph(Value::Str(String::new())).unwrap_err();
        assert!(matches!(err, MorphError::Coercion { .. }));

        let lenient = CharMorpher::with_default('?');
        assert_eq!(
            lenient.morph(Value::Str(String::new())).unwrap(),
            Value::Char('?')
        );
    }

    #[test]
    fn test_null_handling() {
        assert!(CharMorpher::new().morph(Value::Null).is_err());
        assert_eq!(
            CharMorpher::with_default('x').morph(Value::Null).unwrap(),
            Value::Char('x')
        );
        assert_eq!(
            CharObjectMorpher::with_default(None)
                .morph(Value::Null)
                .unwrap(),
            Value::Null
        );
    }

    #[test]
    fn test_equality_law() {
        assert_eq!(CharMorpher::new(), CharMorpher::new());
        assert_ne!(CharMorpher::new(), CharMorpher::with_default('a'));
        assert_eq!(
            CharObjectMorpher::with_default(None),
            CharObjectMorpher::with_default(None)
        );
        assert_ne!(
            CharObjectMorpher::with_default(None),
            CharObjectMorpher::with_default(Some('a'))
        );
    }
}
