//! Dynamic value representation for the morpher subsystem.
//!
//! [`Value`] is the closed set of runtime kinds a morpher can be asked to
//! convert. Arrays and lists are distinct kinds on purpose: array morphers
//! accept only arrays, the container morpher accepts only lists, and the two
//! carry different null-element semantics.

use std::fmt;

use chrono::NaiveDateTime;
use indexmap::IndexMap;
use num_bigint::BigInt;
use rust_decimal::Decimal;

use crate::kind::{TargetKind, ValueKind};

/// A dynamically typed runtime value.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde-types", derive(serde::Serialize, serde::Deserialize))]
pub enum Value {
    /// The absent value.
    Null,
    /// A boolean.
    Bool(bool),
    /// A single character.
    Char(char),
    /// An 8-bit signed integer.
    Byte(i8),
    /// A 16-bit signed integer.
    Short(i16),
    /// A 32-bit signed integer.
    Int(i32),
    /// A 64-bit signed integer.
    Long(i64),
    /// A 32-bit float.
    Float(f32),
    /// A 64-bit float.
    Double(f64),
    /// An arbitrary-precision integer.
    BigInt(BigInt),
    /// A fixed-point decimal.
    Decimal(Decimal),
    /// A calendar timestamp without timezone.
    Timestamp(NaiveDateTime),
    /// A UTF-8 string.
    Str(String),
    /// An array; nested arrays may be ragged.
    Array(Vec<Value>),
    /// A sequence container.
    List(Vec<Value>),
    /// A named property bag.
    Bean(Bean),
}

/// A named bag of properties with stable insertion order.
///
/// Property order is observable in the consuming binder, hence the ordered
/// map.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde-types", derive(serde::Serialize, serde::Deserialize))]
pub struct Bean {
    /// The bean's shape name.
    pub name: String,
    /// The bean's properties in insertion order.
    pub props: IndexMap<String, Value>,
}

impl Bean {
    /// Creates an empty bean with the given shape name.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            props: IndexMap::new(),
        }
    }

    /// Adds a property, consuming and returning the bean.
    pub fn with_property(mut self, name: impl Into<String>, value: Value) -> Self {
        self.props.insert(name.into(), value);
        self
    }

    /// Gets a property by name.
    pub fn property(&self, name: &str) -> Option<&Value> {
        self.props.get(name)
    }
}

impl Value {
    /// Returns the runtime kind of this value.
    pub fn kind(&self) -> ValueKind {
        match self {
            Value::Null => ValueKind::Null,
            Value::Bool(_) => ValueKind::Bool,
            Value::Char(_) => ValueKind::Char,
            Value::Byte(_) => ValueKind::Byte,
            Value::Short(_) => ValueKind::Short,
            Value::Int(_) => ValueKind::Int,
            Value::Long(_) => ValueKind::Long,
            Value::Float(_) => ValueKind::Float,
            Value::Double(_) => ValueKind::Double,
            Value::BigInt(_) => ValueKind::BigInt,
            Value::Decimal(_) => ValueKind::Decimal,
            Value::Timestamp(_) => ValueKind::Timestamp,
            Value::Str(_) => ValueKind::Str,
            Value::Array(_) => ValueKind::Array,
            Value::List(_) => ValueKind::List,
            Value::Bean(_) => ValueKind::Bean,
        }
    }

    /// Returns true if this is the absent value.
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    /// Returns true if this value is already exactly of the given target
    /// kind, so that a morpher may return it unchanged.
    ///
    /// Arrays match an array target when every nesting level is uniform and
    /// every leaf is of the element target kind; nested lengths may differ.
    /// Beans match nominally by shape name.
    pub fn matches_target(&self, target: &TargetKind) -> bool {
        match (self, target) {
            (Value::Bool(_), TargetKind::Bool) => true,
            (Value::Char(_), TargetKind::Char) => true,
            (Value::Byte(_), TargetKind::Byte) => true,
            (Value::Short(_), TargetKind::Short) => true,
            (Value::Int(_), TargetKind::Int) => true,
            (Value::Long(_), TargetKind::Long) => true,
            (Value::Float(_), TargetKind::Float) => true,
            (Value::Double(_), TargetKind::Double) => true,
            (Value::BigInt(_), TargetKind::BigInt) => true,
            (Value::Decimal(_), TargetKind::Decimal) => true,
            (Value::Timestamp(_), TargetKind::Timestamp) => true,
            (Value::Str(_), TargetKind::Str) => true,
            (Value::Array(items), TargetKind::Array(element)) => {
                array_matches(items, element)
            }
            (Value::List(items), TargetKind::List(element)) => {
                items.iter().all(|item| item.matches_target(element))
            }
            (Value::Bean(bean), TargetKind::Bean(name)) => bean.name == *name,
            _ => false,
        }
    }

    /// Returns the boolean value if this is a boolean, otherwise None.
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// Returns the char value if this is a char, otherwise None.
    pub fn as_char(&self) -> Option<char> {
        match self {
            Value::Char(c) => Some(*c),
            _ => None,
        }
    }

    /// Returns the i32 value if this is an int, otherwise None.
    pub fn as_i32(&self) -> Option<i32> {
        match self {
            Value::Int(v) => Some(*v),
            _ => None,
        }
    }

    /// Returns the i64 value if this is a long, otherwise None.
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Value::Long(v) => Some(*v),
            _ => None,
        }
    }

    /// Returns the f64 value if this is a double, otherwise None.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Value::Double(v) => Some(*v),
            _ => None,
        }
    }

    /// Returns the string slice if this is a string, otherwise None.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::Str(s) => Some(s.as_str()),
            _ => None,
        }
    }

    /// Returns the elements if this is an array, otherwise None.
    pub fn as_array(&self) -> Option<&[Value]> {
        match self {
            Value::Array(items) => Some(items),
            _ => None,
        }
    }

    /// Returns the elements if this is a list, otherwise None.
    pub fn as_list(&self) -> Option<&[Value]> {
        match self {
            Value::List(items) => Some(items),
            _ => None,
        }
    }

    /// Returns the bean if this is a bean, otherwise None.
    pub fn as_bean(&self) -> Option<&Bean> {
        match self {
            Value::Bean(bean) => Some(bean),
            _ => None,
        }
    }
}

/// Uniform-depth check for the array identity fast path: either every
/// element is itself an array matching the element target, or every element
/// is a leaf of the element target kind. Mixed depth never matches.
fn array_matches(items: &[Value], element: &TargetKind) -> bool {
    match items.first() {
        None => true,
        Some(Value::Array(_)) => items.iter().all(|item| match item {
            Value::Array(inner) => array_matches(inner, element),
            _ => false,
        }),
        Some(_) => items.iter().all(|item| item.matches_target(element)),
    }
}

fn write_elements(f: &mut fmt::Formatter<'_>, items: &[Value]) -> fmt::Result {
    write!(f, "[")?;
    for (i, item) in items.iter().enumerate() {
        if i > 0 {
            write!(f, ", ")?;
        }
        write!(f, "{item}")?;
    }
    write!(f, "]")
}

impl fmt::Display for Value {
    /// The natural string rendering used by string-fallback coercion.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Null => write!(f, "null"),
            Value::Bool(b) => write!(f, "{b}"),
            Value::Char(c) => write!(f, "{c}"),
            Value::Byte(v) => write!(f, "{v}"),
            Value::Short(v) => write!(f, "{v}"),
            Value::Int(v) => write!(f, "{v}"),
            Value::Long(v) => write!(f, "{v}"),
            Value::Float(v) => write!(f, "{v}"),
            Value::Double(v) => write!(f, "{v}"),
            Value::BigInt(v) => write!(f, "{v}"),
            Value::Decimal(v) => write!(f, "{v}"),
            Value::Timestamp(v) => write!(f, "{v}"),
            Value::Str(s) => write!(f, "{s}"),
            Value::Array(items) | Value::List(items) => write_elements(f, items),
            Value::Bean(bean) => {
                write!(f, "{}{{", bean.name)?;
                for (i, (name, value)) in bean.props.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{name}: {value}")?;
                }
                write!(f, "}}")
            }
        }
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Value::Bool(value)
    }
}

impl From<char> for Value {
    fn from(value: char) -> Self {
        Value::Char(value)
    }
}

impl From<i8> for Value {
    fn from(value: i8) -> Self {
        Value::Byte(value)
    }
}

impl From<i16> for Value {
    fn from(value: i16) -> Self {
        Value::Short(value)
    }
}

impl From<i32> for Value {
    fn from(value: i32) -> Self {
        Value::Int(value)
    }
}

impl From<i64> for Value {
    fn from(value: i64) -> Self {
        Value::Long(value)
    }
}

impl From<f32> for Value {
    fn from(value: f32) -> Self {
        Value::Float(value)
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Value::Double(value)
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::Str(value.to_string())
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Value::Str(value)
    }
}

impl From<BigInt> for Value {
    fn from(value: BigInt) -> Self {
        Value::BigInt(value)
    }
}

impl From<Decimal> for Value {
    fn from(value: Decimal) -> Self {
        Value::Decimal(value)
    }
}

impl From<NaiveDateTime> for Value {
    fn from(value: NaiveDateTime) -> Self {
        Value::Timestamp(value)
    }
}
