//! # JsonBind Morph
//!
//! Type-coercion morphers for the JsonBind object-binding libraries.
//!
//! This crate is the conversion engine the document builder and the bean
//! binder sit on: a pluggable, type-indexed registry of morphers that
//! coerce dynamically typed [`Value`]s into declared target kinds, with
//! optional default-value fallback and dimension-aware array handling.
//!
//! ## Features
//!
//! - **Scalar Morphers**: bool, char, the six primitive numerics, big
//!   integers, decimals, strings and timestamps, each in a primitive and a
//!   null-propagating object flavor
//! - **Array Morphers**: recursive, ragged-aware conversion of arrays of
//!   any dimension
//! - **Container Morphers**: list and bean conversion composed from
//!   element morphers and a registry
//! - **Registry**: explicit target-keyed lookup, no ambient global state
//! - **Defined Failures**: every rejected conversion is a [`MorphError`],
//!   never a panic
//!
//! ## Example
//!
//! ```rust
//! use jsonbind_morph::{ArrayMorpher, IntMorpher, Morpher, TargetKind, Value};
//!
//! let morpher = ArrayMorpher::new(IntMorpher::new());
//! assert_eq!(morpher.target(), TargetKind::array_of(TargetKind::Int));
//!
//! // Ragged input stays ragged; every leaf is coerced.
//! let input = Value::Array(vec![
//!     Value::Array(vec![Value::Str("1".into()), Value::Long(2)]),
//!     Value::Array(vec![Value::Double(3.0)]),
//! ]);
//! let morphed = morpher.morph(input).unwrap();
//! assert_eq!(
//!     morphed,
//!     Value::Array(vec![
//!         Value::Array(vec![Value::Int(1), Value::Int(2)]),
//!         Value::Array(vec![Value::Int(3)]),
//!     ])
//! );
//! ```

/// Conversion errors and the crate-wide result alias.
pub mod error;
/// Runtime and target type tags.
pub mod kind;
/// The morpher contract.
pub mod morpher;
/// Concrete morpher implementations.
pub mod morphers;
/// Target-keyed morpher registry.
pub mod registry;
/// The dynamic value model.
pub mod value;

pub use error::{MorphError, MorphResult};
pub use kind::{TargetKind, ValueKind};
pub use morpher::Morpher;
pub use morphers::{
    ArrayMorpher, BeanMorpher, BeanShape, BigIntMorpher, BoolMorpher, BoolObjectMorpher,
    ByteMorpher, ByteObjectMorpher, CharMorpher, CharObjectMorpher, DecimalMorpher, DoubleMorpher,
    DoubleObjectMorpher, FloatMorpher, FloatObjectMorpher, IntMorpher, IntObjectMorpher,
    ListMorpher, LongMorpher, LongObjectMorpher, Numeric, NumericMorpher, NumericObjectMorpher,
    ShortMorpher, ShortObjectMorpher, StrMorpher, TimestampMorpher,
};
pub use registry::MorphRegistry;
pub use value::{Bean, Value};
