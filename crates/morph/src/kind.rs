//! Runtime and target type tags for the morpher subsystem.
//!
//! `ValueKind` names the runtime kind of a [`Value`](crate::Value);
//! `TargetKind` names the kind a morpher produces. Keeping the two apart
//! makes the conversion direction explicit: `supports` is asked about a
//! `ValueKind`, `target` answers with a `TargetKind`.

use std::fmt;

/// The runtime kind of a dynamic value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde-types", derive(serde::Serialize, serde::Deserialize))]
pub enum ValueKind {
    /// The absent value.
    Null,
    /// A boolean.
    Bool,
    /// A single character.
    Char,
    /// An 8-bit signed integer.
    Byte,
    /// A 16-bit signed integer.
    Short,
    /// A 32-bit signed integer.
    Int,
    /// A 64-bit signed integer.
    Long,
    /// A 32-bit float.
    Float,
    /// A 64-bit float.
    Double,
    /// An arbitrary-precision integer.
    BigInt,
    /// A fixed-point decimal.
    Decimal,
    /// A calendar timestamp without timezone.
    Timestamp,
    /// A UTF-8 string.
    Str,
    /// An array (any nesting depth).
    Array,
    /// A sequence container.
    List,
    /// A named property bag.
    Bean,
}

impl ValueKind {
    /// Returns true for the array kind.
    pub fn is_array(self) -> bool {
        self == ValueKind::Array
    }
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ValueKind::Null => "null",
            ValueKind::Bool => "bool",
            ValueKind::Char => "char",
            ValueKind::Byte => "byte",
            ValueKind::Short => "short",
            ValueKind::Int => "int",
            ValueKind::Long => "long",
            ValueKind::Float => "float",
            ValueKind::Double => "double",
            ValueKind::BigInt => "bigint",
            ValueKind::Decimal => "decimal",
            ValueKind::Timestamp => "timestamp",
            ValueKind::Str => "string",
            ValueKind::Array => "array",
            ValueKind::List => "list",
            ValueKind::Bean => "bean",
        };
        write!(f, "{name}")
    }
}

/// The kind of value a morpher produces.
///
/// Container targets nest their element target, so `Array(Box::new(Int))`
/// reads as "array of int" regardless of how many dimensions the input
/// carries at runtime. Beans are identified nominally by their shape name.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde-types", derive(serde::Serialize, serde::Deserialize))]
pub enum TargetKind {
    /// A boolean.
    Bool,
    /// A single character.
    Char,
    /// An 8-bit signed integer.
    Byte,
    /// A 16-bit signed integer.
    Short,
    /// A 32-bit signed integer.
    Int,
    /// A 64-bit signed integer.
    Long,
    /// A 32-bit float.
    Float,
    /// A 64-bit float.
    Double,
    /// An arbitrary-precision integer.
    BigInt,
    /// A fixed-point decimal.
    Decimal,
    /// A calendar timestamp without timezone.
    Timestamp,
    /// A UTF-8 string.
    Str,
    /// An array with the given element target.
    Array(Box<TargetKind>),
    /// A sequence container with the given element target.
    List(Box<TargetKind>),
    /// A bean with the given shape name.
    Bean(String),
}

impl TargetKind {
    /// Convenience constructor for an array target.
    pub fn array_of(element: TargetKind) -> Self {
        TargetKind::Array(Box::new(element))
    }

    /// Convenience constructor for a list target.
    pub fn list_of(element: TargetKind) -> Self {
        TargetKind::List(Box::new(element))
    }
}

impl fmt::Display for TargetKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TargetKind::Bool => write!(f, "bool"),
            TargetKind::Char => write!(f, "char"),
            TargetKind::Byte => write!(f, "byte"),
            TargetKind::Short => write!(f, "short"),
            TargetKind::Int => write!(f, "int"),
            TargetKind::Long => write!(f, "long"),
            TargetKind::Float => write!(f, "float"),
            TargetKind::Double => write!(f, "double"),
            TargetKind::BigInt => write!(f, "bigint"),
            TargetKind::Decimal => write!(f, "decimal"),
            TargetKind::Timestamp => write!(f, "timestamp"),
            TargetKind::Str => write!(f, "string"),
            TargetKind::Array(element) => write!(f, "array<{element}>"),
            TargetKind::List(element) => write!(f, "list<{element}>"),
            TargetKind::Bean(name) => write!(f, "bean<{name}>"),
        }
    }
}
