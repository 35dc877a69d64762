//! Bean morpher: property-wise coercion between named property bags.

use std::sync::Arc;

use indexmap::IndexMap;
use log::trace;

use crate::error::{MorphError, MorphResult};
use crate::kind::{TargetKind, ValueKind};
use crate::morpher::Morpher;
use crate::registry::MorphRegistry;
use crate::value::{Bean, Value};

/// The target description for a bean conversion: a shape name plus an
/// ordered map of property names to their target kinds.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BeanShape {
    name: String,
    properties: IndexMap<String, TargetKind>,
}

impl BeanShape {
    /// Creates an empty shape with the given name.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            properties: IndexMap::new(),
        }
    }

    /// Adds a property target, consuming and returning the shape.
    pub fn with_property(mut self, name: impl Into<String>, kind: TargetKind) -> Self {
        self.properties.insert(name.into(), kind);
        self
    }

    /// The shape name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The property targets in declaration order.
    pub fn properties(&self) -> &IndexMap<String, TargetKind> {
        &self.properties
    }
}

/// Morphs a bean into the shape's form, property by property.
///
/// Each shape property takes the source property of the same name (absent
/// properties count as null) and converts it through the injected registry
/// unless it is already of the property's target kind. Null properties
/// therefore get the null/default semantics of whatever morpher is
/// registered for their target. Source properties the shape does not name
/// are dropped.
///
/// The registry is an explicit collaborator with caller-defined lifetime;
/// there is no ambient descriptor cache.
#[derive(Clone)]
pub struct BeanMorpher {
    shape: BeanShape,
    registry: Arc<MorphRegistry>,
}

impl BeanMorpher {
    /// Creates a bean morpher for the given shape, converting properties
    /// through `registry`.
    pub fn new(shape: BeanShape, registry: Arc<MorphRegistry>) -> Self {
        Self { shape, registry }
    }

    /// The target shape.
    pub fn shape(&self) -> &BeanShape {
        &self.shape
    }

    /// Whether the bean is already exactly of the target shape: same name,
    /// every shape property present and of its target kind.
    fn is_identity(&self, bean: &Bean) -> bool {
        bean.name == self.shape.name
            && self.shape.properties.iter().all(|(name, kind)| {
                bean.props
                    .get(name)
                    .map(|value| value.matches_target(kind))
                    .unwrap_or(false)
            })
    }
}

impl Morpher for BeanMorpher {
    fn supports(&self, kind: ValueKind) -> bool {
        kind == ValueKind::Bean
    }

    fn target(&self) -> TargetKind {
        TargetKind::Bean(self.shape.name.clone())
    }

    fn morph(&self, value: Value) -> MorphResult<Value> {
        let bean = match value {
            Value::Null => return Err(MorphError::null_value(self.target())),
            Value::Bean(bean) => bean,
            other => {
                return Err(MorphError::unsupported(other.kind(), self.target()));
            }
        };

        if self.is_identity(&bean) {
            return Ok(Value::Bean(bean));
        }

        let mut morphed = Bean::new(self.shape.name.clone());
        for (name, kind) in &self.shape.properties {
            let source = bean.props.get(name).cloned().unwrap_or(Value::Null);
            trace!(
                "morphing property {name} of bean {} to {kind}",
                self.shape.name
            );
            let converted = self.registry.morph(kind, source)?;
            morphed.props.insert(name.clone(), converted);
        }
        Ok(Value::Bean(morphed))
    }
}

impl std::fmt::Debug for BeanMorpher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BeanMorpher")
            .field("shape", &self.shape)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::morphers::numeric::IntMorpher;

    fn shape() -> BeanShape {
        BeanShape::new("Point")
            .with_property("x", TargetKind::Int)
            .with_property("y", TargetKind::Int)
    }

    fn registry() -> Arc<MorphRegistry> {
        Arc::new(MorphRegistry::with_defaults())
    }

    #[test]
    fn test_properties_convert_through_registry() {
        let morpher = BeanMorpher::new(shape(), registry());
        let input = Value::Bean(
            Bean::new("RawPoint")
                .with_property("x", Value::Str("3".into()))
                .with_property("y", Value::Long(4)),
        );
        let expected = Value::Bean(
            Bean::new("Point")
                .with_property("x", Value::Int(3))
                .with_property("y", Value::Int(4)),
        );
        assert_eq!(morpher.morph(input).unwrap(), expected);
    }

    #[test]
    fn test_extra_source_properties_dropped() {
        let morpher = BeanMorpher::new(shape(), registry());
        let input = Value::Bean(
            Bean::new("Point")
                .with_property("x", Value::Int(1))
                .with_property("y", Value::Int(2))
                .with_property("z", Value::Int(3)),
        );
        let result = morpher.morph(input).unwrap();
        let bean = result.as_bean().unwrap();
        assert_eq!(bean.props.len(), 2);
        assert!(bean.property("z").is_none());
    }

    #[test]
    fn test_missing_property_uses_registered_null_semantics() {
        // Strict int morpher: a missing property is a null that fails.
        let morpher = BeanMorpher::new(shape(), registry());
        let input = Value::Bean(Bean::new("Point").with_property("x", Value::Int(1)));
        assert!(matches!(
            morpher.morph(input).unwrap_err(),
            MorphError::NullValue { .. }
        ));

        // A defaulted int morpher fills the hole instead.
        let mut reg = MorphRegistry::with_defaults();
        reg.register(Box::new(IntMorpher::with_default(0)));
        let morpher = BeanMorpher::new(shape(), Arc::new(reg));
        let input = Value::Bean(Bean::new("Point").with_property("x", Value::Int(1)));
        let expected = Value::Bean(
            Bean::new("Point")
                .with_property("x", Value::Int(1))
                .with_property("y", Value::Int(0)),
        );
        assert_eq!(morpher.morph(input).unwrap(), expected);
    }

    #[test]
    fn test_identity_when_already_shaped() {
        let morpher = BeanMorpher::new(shape(), registry());
        let input = Value::Bean(
            Bean::new("Point")
                .with_property("x", Value::Int(1))
                .with_property("y", Value::Int(2)),
        );
        assert_eq!(morpher.morph(input.clone()).unwrap(), input);
    }

    #[test]
    fn test_unregistered_property_target_fails() {
        let shape = BeanShape::new("Holder")
            .with_property("stamp", TargetKind::Timestamp);
        let morpher = BeanMorpher::new(shape, registry());
        let input = Value::Bean(
            Bean::new("Raw").with_property("stamp", Value::Str("2024-01-01".into())),
        );
        assert!(matches!(
            morpher.morph(input).unwrap_err(),
            MorphError::NoMorpher { .. }
        ));
    }

    #[test]
    fn test_non_bean_input_fails() {
        let morpher = BeanMorpher::new(shape(), registry());
        assert!(morpher.supports(ValueKind::Bean));
        assert!(!morpher.supports(ValueKind::List));
        assert!(morpher.morph(Value::Int(1)).is_err());
        assert!(morpher.morph(Value::Null).is_err());
    }
}
