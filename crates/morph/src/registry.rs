//! Target-keyed morpher registry.

use std::collections::HashMap;
use std::fmt;

use log::{debug, trace};

use crate::error::{MorphError, MorphResult};
use crate::kind::{TargetKind, ValueKind};
use crate::morpher::Morpher;
use crate::morphers::bignum::{BigIntMorpher, DecimalMorpher};
use crate::morphers::boolean::BoolMorpher;
use crate::morphers::character::CharMorpher;
use crate::morphers::numeric::{
    ByteMorpher, DoubleMorpher, FloatMorpher, IntMorpher, LongMorpher, ShortMorpher,
};
use crate::morphers::string::StrMorpher;
use crate::value::Value;

/// Maps a target kind to the morpher that produces it.
///
/// An explicit, owned object: callers decide its lifetime and sharing.
/// Re-registering a target replaces the previous morpher.
#[derive(Default)]
pub struct MorphRegistry {
    morphers: HashMap<TargetKind, Box<dyn Morpher>>,
}

impl MorphRegistry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self {
            morphers: HashMap::new(),
        }
    }

    /// Creates a registry with the standard scalar morphers registered,
    /// none of them configured with defaults.
    pub fn with_defaults() -> Self {
        let mut registry = Self::new();
        registry.register(Box::new(BoolMorpher::new()));
        registry.register(Box::new(CharMorpher::new()));
        registry.register(Box::new(ByteMorpher::new()));
        registry.register(Box::new(ShortMorpher::new()));
        registry.register(Box::new(IntMorpher::new()));
        registry.register(Box::new(LongMorpher::new()));
        registry.register(Box::new(FloatMorpher::new()));
        registry.register(Box::new(DoubleMorpher::new()));
        registry.register(Box::new(BigIntMorpher::new()));
        registry.register(Box::new(DecimalMorpher::new()));
        registry.register(Box::new(StrMorpher::new()));
        registry
    }

    /// Registers a morpher under its own target kind, replacing any
    /// previous registration for that target.
    pub fn register(&mut self, morpher: Box<dyn Morpher>) {
        let target = morpher.target();
        debug!("registering morpher for target {target}");
        self.morphers.insert(target, morpher);
    }

    /// Removes and returns the morpher for the given target, if any.
    pub fn deregister(&mut self, target: &TargetKind) -> Option<Box<dyn Morpher>> {
        debug!("deregistering morpher for target {target}");
        self.morphers.remove(target)
    }

    /// Looks up the morpher for the given target.
    pub fn lookup(&self, target: &TargetKind) -> Option<&dyn Morpher> {
        self.morphers.get(target).map(|m| m.as_ref())
    }

    /// Looks up the morpher for the given target, but only if it also
    /// supports the given source kind.
    pub fn lookup_for(&self, target: &TargetKind, kind: ValueKind) -> Option<&dyn Morpher> {
        self.lookup(target).filter(|morpher| morpher.supports(kind))
    }

    /// Returns true if a morpher is registered for the given target.
    pub fn is_registered(&self, target: &TargetKind) -> bool {
        self.morphers.contains_key(target)
    }

    /// Removes all registrations.
    pub fn clear(&mut self) {
        self.morphers.clear();
    }

    /// The number of registered morphers.
    pub fn len(&self) -> usize {
        self.morphers.len()
    }

    /// Returns true if no morphers are registered.
    pub fn is_empty(&self) -> bool {
        self.morphers.is_empty()
    }

    /// Morphs `value` to the given target through the registered morpher.
    ///
    /// A value already of the target kind passes through unchanged even
    /// when the target has no registration; anything else without a
    /// registration is a [`MorphError::NoMorpher`]. A registered morpher
    /// is guarded by its own `supports` check (null is exempt, so each
    /// morpher applies its own null semantics).
    pub fn morph(&self, target: &TargetKind, value: Value) -> MorphResult<Value> {
        match self.lookup(target) {
            Some(morpher) => {
                trace!("morphing kind {} to target {target}", value.kind());
                if !value.is_null() && !morpher.supports(value.kind()) {
                    return Err(MorphError::unsupported(value.kind(), target.clone()));
                }
                morpher.morph(value)
            }
            None if value.matches_target(target) => Ok(value),
            None => Err(MorphError::no_morpher(target.clone())),
        }
    }
}

impl fmt::Debug for MorphRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut targets: Vec<String> = self.morphers.keys().map(|t| t.to_string()).collect();
        targets.sort();
        f.debug_struct("MorphRegistry")
            .field("targets", &targets)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::morphers::array::ArrayMorpher;

    #[test]
    fn test_register_and_lookup() {
        let mut registry = MorphRegistry::new();
        assert!(registry.is_empty());

        registry.register(Box::new(IntMorpher::new()));
        assert!(registry.is_registered(&TargetKind::Int));
        assert_eq!(registry.len(), 1);

        let morpher = registry.lookup(&TargetKind::Int).unwrap();
        assert_eq!(morpher.target(), TargetKind::Int);
        assert!(registry.lookup(&TargetKind::Bool).is_none());
    }

    #[test]
    fn test_lookup_for_source_kind() {
        let mut registry = MorphRegistry::new();
        registry.register(Box::new(IntMorpher::new()));
        registry.register(Box::new(ArrayMorpher::new(IntMorpher::new())));

        assert!(registry
            .lookup_for(&TargetKind::Int, ValueKind::Str)
            .is_some());
        // Scalar morphers do not accept arrays.
        assert!(registry
            .lookup_for(&TargetKind::Int, ValueKind::Array)
            .is_none());
        // Array morphers accept nothing but arrays.
        let target = TargetKind::array_of(TargetKind::Int);
        assert!(registry.lookup_for(&target, ValueKind::Array).is_some());
        assert!(registry.lookup_for(&target, ValueKind::List).is_none());
    }

    #[test]
    fn test_reregistration_replaces() {
        let mut registry = MorphRegistry::new();
        registry.register(Box::new(IntMorpher::new()));
        registry.register(Box::new(IntMorpher::with_default(-1)));
        assert_eq!(registry.len(), 1);

        // The replacement's default is observable through morphing null.
        assert_eq!(
            registry.morph(&TargetKind::Int, Value::Null).unwrap(),
            Value::Int(-1)
        );
    }

    #[test]
    fn test_deregister() {
        let mut registry = MorphRegistry::with_defaults();
        assert!(registry.deregister(&TargetKind::Int).is_some());
        assert!(!registry.is_registered(&TargetKind::Int));
        assert!(registry.deregister(&TargetKind::Int).is_none());
    }

    #[test]
    fn test_with_defaults_covers_scalars() {
        let registry = MorphRegistry::with_defaults();
        for target in [
            TargetKind::Bool,
            TargetKind::Char,
            TargetKind::Byte,
            TargetKind::Short,
            TargetKind::Int,
            TargetKind::Long,
            TargetKind::Float,
            TargetKind::Double,
            TargetKind::BigInt,
            TargetKind::Decimal,
            TargetKind::Str,
        ] {
            assert!(registry.is_registered(&target), "{target}");
        }
    }

    #[test]
    fn test_morph_convenience() {
        let registry = MorphRegistry::with_defaults();
        assert_eq!(
            registry
                .morph(&TargetKind::Int, Value::Str("41".into()))
                .unwrap(),
            Value::Int(41)
        );
        assert!(matches!(
            registry.morph(&TargetKind::Int, Value::Null).unwrap_err(),
            MorphError::NullValue { .. }
        ));
    }

    #[test]
    fn test_morph_unregistered_target() {
        let registry = MorphRegistry::new();
        let target = TargetKind::array_of(TargetKind::Int);

        // Already-converted values pass through without a registration.
        let value = Value::Array(vec![Value::Int(1)]);
        assert_eq!(registry.morph(&target, value.clone()).unwrap(), value);

        let err = registry
            .morph(&target, Value::Array(vec![Value::Str("1".into())]))
            .unwrap_err();
        assert_eq!(err, MorphError::no_morpher(target));
    }

    #[test]
    fn test_morph_enforces_supports() {
        let mut registry = MorphRegistry::new();
        registry.register(Box::new(ArrayMorpher::new(IntMorpher::new())));
        let target = TargetKind::array_of(TargetKind::Int);

        let err = registry.morph(&target, Value::Int(5)).unwrap_err();
        assert!(matches!(err, MorphError::UnsupportedKind { .. }));

        // Null is exempt from the supports guard: the array morpher
        // propagates absence.
        assert_eq!(registry.morph(&target, Value::Null).unwrap(), Value::Null);
        assert!(registry.lookup(&target).is_some());
        assert!(!registry
            .lookup(&target)
            .unwrap()
            .supports(ValueKind::Int));
    }
}
