//! Concrete morpher implementations.
//!
//! Scalar morphers come in two flavors per target: a primitive morpher
//! whose result can never be null, and an object morpher whose default may
//! be an explicit null. Container morphers compose an inner element
//! morpher.

pub mod array;
pub mod bean;
pub mod bignum;
pub mod boolean;
pub mod character;
pub mod list;
pub mod numeric;
pub mod string;
pub mod timestamp;

pub use array::ArrayMorpher;
pub use bean::{BeanMorpher, BeanShape};
pub use bignum::{BigIntMorpher, DecimalMorpher};
pub use boolean::{BoolMorpher, BoolObjectMorpher};
pub use character::{CharMorpher, CharObjectMorpher};
pub use list::ListMorpher;
pub use numeric::{
    ByteMorpher, ByteObjectMorpher, DoubleMorpher, DoubleObjectMorpher, FloatMorpher,
    FloatObjectMorpher, IntMorpher, IntObjectMorpher, LongMorpher, LongObjectMorpher, Numeric,
    NumericMorpher, NumericObjectMorpher, ShortMorpher, ShortObjectMorpher,
};
pub use string::StrMorpher;
pub use timestamp::TimestampMorpher;
