//! Sequence-container morpher.

use crate::error::{MorphError, MorphResult};
use crate::kind::{TargetKind, ValueKind};
use crate::morpher::Morpher;
use crate::value::Value;

/// Morphs a list by applying an inner element morpher to every element.
///
/// Null handling is deliberately asymmetric with the scalar morphers: a
/// null element is replaced by the configured default when one is present
/// and otherwise passes through as null, without failing. Non-null elements
/// must pass the element morpher's `supports` check before conversion —
/// an unsupported element kind fails even when the element morpher's
/// string fallback might have coerced it.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ListMorpher<M: Morpher> {
    element: M,
    default: Option<Value>,
}

impl<M: Morpher> ListMorpher<M> {
    /// Creates a list morpher with no element default: null elements pass
    /// through.
    pub fn new(element: M) -> Self {
        Self {
            element,
            default: None,
        }
    }

    /// Creates a list morpher that substitutes `default` for null elements.
    pub fn with_default(element: M, default: Value) -> Self {
        Self {
            element,
            default: Some(default),
        }
    }

    /// Returns true if this morpher substitutes a default for null
    /// elements.
    pub fn use_default(&self) -> bool {
        self.default.is_some()
    }

    /// The inner element morpher.
    pub fn element(&self) -> &M {
        &self.element
    }
}

impl<M: Morpher> Morpher for ListMorpher<M> {
    fn supports(&self, kind: ValueKind) -> bool {
        kind == ValueKind::List
    }

    fn target(&self) -> TargetKind {
        TargetKind::list_of(self.element.target())
    }

    fn morph(&self, value: Value) -> MorphResult<Value> {
        let items = match value {
            Value::Null => return Ok(Value::Null),
            Value::List(items) => items,
            other => {
                return Err(MorphError::unsupported(other.kind(), self.target()));
            }
        };

        let mut morphed = Vec::with_capacity(items.len());
        for item in items {
            if item.is_null() {
                morphed.push(self.default.clone().unwrap_or(Value::Null));
                continue;
            }
            if !self.element.supports(item.kind()) {
                return Err(MorphError::unsupported(item.kind(), self.element.target()));
            }
            morphed.push(self.element.morph(item)?);
        }
        Ok(Value::List(morphed))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::morphers::numeric::{IntMorpher, IntObjectMorpher};

    #[test]
    fn test_elements_convert() {
        let morpher = ListMorpher::new(IntMorpher::new());
        let input = Value::List(vec![Value::Str("5".into()), Value::Long(6)]);
        assert_eq!(
            morpher.morph(input).unwrap(),
            Value::List(vec![Value::Int(5), Value::Int(6)])
        );
    }

    #[test]
    fn test_null_elements_pass_through_without_default() {
        let morpher = ListMorpher::new(IntObjectMorpher::new());
        let input = Value::List(vec![Value::Null, Value::Str("5".into())]);
        assert_eq!(
            morpher.morph(input).unwrap(),
            Value::List(vec![Value::Null, Value::Int(5)])
        );
    }

    #[test]
    fn test_null_elements_replaced_by_default() {
        let morpher = ListMorpher::with_default(IntMorpher::new(), Value::Int(0));
        let input = Value::List(vec![Value::Null, Value::Int(3)]);
        assert_eq!(
            morpher.morph(input).unwrap(),
            Value::List(vec![Value::Int(0), Value::Int(3)])
        );
    }

    #[test]
    fn test_unsupported_element_kind_always_fails() {
        // Arrays are outside the int morpher's support; the boundary check
        // fires even with a default configured.
        let morpher = ListMorpher::with_default(IntMorpher::with_default(0), Value::Int(0));
        let input = Value::List(vec![Value::Array(vec![])]);
        let err = morpher.morph(input).unwrap_err();
        assert!(matches!(err, MorphError::UnsupportedKind { .. }));
    }

    #[test]
    fn test_element_failure_propagates() {
        let morpher = ListMorpher::new(IntMorpher::new());
        let input = Value::List(vec![Value::Str("abc".into())]);
        assert!(morpher.morph(input).is_err());
    }

    #[test]
    fn test_non_list_input_fails() {
        let morpher = ListMorpher::new(IntMorpher::new());
        assert!(!morpher.supports(ValueKind::Array));
        assert!(morpher.supports(ValueKind::List));
        assert!(morpher.morph(Value::Array(vec![])).is_err());
    }

    #[test]
    fn test_null_input_propagates() {
        let morpher = ListMorpher::new(IntMorpher::new());
        assert_eq!(morpher.morph(Value::Null).unwrap(), Value::Null);
    }

    #[test]
    fn test_list_of_list() {
        let inner = ListMorpher::new(IntMorpher::new());
        let morpher = ListMorpher::new(inner);
        let input = Value::List(vec![
            Value::List(vec![Value::Str("1".into())]),
            Value::List(vec![Value::Str("2".into()), Value::Str("3".into())]),
        ]);
        assert_eq!(
            morpher.morph(input).unwrap(),
            Value::List(vec![
                Value::List(vec![Value::Int(1)]),
                Value::List(vec![Value::Int(2), Value::Int(3)]),
            ])
        );
        assert_eq!(
            morpher.target(),
            TargetKind::list_of(TargetKind::list_of(TargetKind::Int))
        );
    }
}
