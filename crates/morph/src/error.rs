//! Conversion errors.

use thiserror::Error;

use crate::kind::{TargetKind, ValueKind};

/// Error raised when a value cannot be coerced to a target kind.
///
/// Configuring a default value on a morpher is the only way to suppress a
/// conversion failure, and it only covers the failure modes each morpher
/// kind enumerates; unsupported-kind and missing-morpher errors always
/// surface.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum MorphError {
    #[error("value is null and no default is configured for target {target}")]
    NullValue { target: TargetKind },

    #[error("kind {kind} is not supported by the {target} morpher")]
    UnsupportedKind { kind: ValueKind, target: TargetKind },

    #[error("cannot morph `{value}` of kind {kind} to {target}")]
    Coercion {
        value: String,
        kind: ValueKind,
        target: TargetKind,
    },

    #[error("argument of kind {kind} is not an array")]
    NotAnArray { kind: ValueKind },

    #[error("no morpher registered for target {target}")]
    NoMorpher { target: TargetKind },
}

impl MorphError {
    /// A required (non-default) input was absent.
    pub fn null_value(target: TargetKind) -> Self {
        MorphError::NullValue { target }
    }

    /// The morpher does not support the value's runtime kind.
    pub fn unsupported(kind: ValueKind, target: TargetKind) -> Self {
        MorphError::UnsupportedKind { kind, target }
    }

    /// Semantic coercion failed and no default was configured.
    pub fn coercion(value: impl ToString, kind: ValueKind, target: TargetKind) -> Self {
        MorphError::Coercion {
            value: value.to_string(),
            kind,
            target,
        }
    }

    /// An array morpher received a non-array value.
    pub fn not_an_array(kind: ValueKind) -> Self {
        MorphError::NotAnArray { kind }
    }

    /// The registry holds no morpher for the requested target.
    pub fn no_morpher(target: TargetKind) -> Self {
        MorphError::NoMorpher { target }
    }
}

/// Result type for morph operations.
pub type MorphResult<T> = Result<T, MorphError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages_name_value_kind_and_target() {
        let err = MorphError::coercion("abc", ValueKind::Str, TargetKind::Int);
        assert_eq!(err.to_string(), "cannot morph `abc` of kind string to int");

        let err = MorphError::null_value(TargetKind::Bool);
        assert_eq!(
            err.to_string(),
            "value is null and no default is configured for target bool"
        );

        let err = MorphError::not_an_array(ValueKind::Str);
        assert_eq!(err.to_string(), "argument of kind string is not an array");
    }
}
