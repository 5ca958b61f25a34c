//! Runtime values.
//!
//! Strings are byte buffers: reversal and comparison work on raw bytes,
//! not on characters, so a `String` would not hold every possible result.

use std::fmt;

use crate::Ty;

/// A concrete runtime value.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub enum Value {
    Int(i32),
    Str(Vec<u8>),
    Bool(bool),
}

impl Value {
    /// Build a string value from anything convertible to bytes.
    pub fn string(bytes: impl Into<Vec<u8>>) -> Self {
        Value::Str(bytes.into())
    }

    /// Type tag matching this value.
    pub const fn ty(&self) -> Ty {
        match self {
            Value::Int(_) => Ty::Int,
            Value::Str(_) => Ty::Str,
            Value::Bool(_) => Ty::Bool,
        }
    }

    pub const fn type_name(&self) -> &'static str {
        self.ty().name()
    }

    pub fn as_bytes(&self) -> Option<&[u8]> {
        match self {
            Value::Str(s) => Some(s),
            _ => None,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Int(n) => write!(f, "{n}"),
            Value::Str(s) => f.write_str(&String::from_utf8_lossy(s)),
            Value::Bool(b) => write!(f, "{b}"),
        }
    }
}
