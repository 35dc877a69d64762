//! Array morpher: dimension-aware, element-wise conversion.

use crate::error::{MorphError, MorphResult};
use crate::kind::{TargetKind, ValueKind};
use crate::morpher::Morpher;
use crate::value::Value;

/// Nesting depth of the array value. Null and ragged sub-arrays do not
/// lower it: the depth is the deepest chain over array elements, so
/// `[null, [1]]` is two-dimensional. An array with no array elements has
/// depth one.
fn array_depth(items: &[Value]) -> usize {
    1 + items
        .iter()
        .filter_map(|item| match item {
            Value::Array(inner) => Some(array_depth(inner)),
            _ => None,
        })
        .max()
        .unwrap_or(0)
}

/// Morphs arrays of any dimension by converting each element through an
/// inner element morpher.
///
/// Only the outer length of each level is taken from the input; nested
/// arrays keep their own lengths, so ragged inputs stay ragged. A null
/// nested array stays null. Any element failure aborts the whole
/// conversion.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct ArrayMorpher<M: Morpher> {
    element: M,
}

impl<M: Morpher> ArrayMorpher<M> {
    /// Creates an array morpher around the given element morpher.
    pub fn new(element: M) -> Self {
        Self { element }
    }

    /// The inner element morpher.
    pub fn element(&self) -> &M {
        &self.element
    }
}

impl<M: Morpher> Morpher for ArrayMorpher<M> {
    fn supports(&self, kind: ValueKind) -> bool {
        kind.is_array()
    }

    fn target(&self) -> TargetKind {
        TargetKind::array_of(self.element.target())
    }

    fn morph(&self, value: Value) -> MorphResult<Value> {
        // Absent input morphs to the absent output.
        if value.is_null() {
            return Ok(Value::Null);
        }
        // Identity fast path: already the target array shape, hand back the
        // same allocation.
        if value.matches_target(&self.target()) {
            return Ok(value);
        }
        let items = match value {
            Value::Array(items) => items,
            other => return Err(MorphError::not_an_array(other.kind())),
        };

        let dims = array_depth(&items);
        let mut morphed = Vec::with_capacity(items.len());
        if dims == 1 {
            for item in items {
                morphed.push(self.element.morph(item)?);
            }
        } else {
            for item in items {
                morphed.push(self.morph(item)?);
            }
        }
        Ok(Value::Array(morphed))
    }
}
