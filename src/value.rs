//! Dynamically-shaped values.

use std::fmt;

use crate::dispatch::Encode;
use crate::encoder::Encoder;
use crate::error::Result;

/// A value whose shape is only known at runtime.
///
/// Maps keep their entries in insertion order, and that order is the
/// encoded order.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Null,
    Undefined,
    Bool(bool),
    Integer(i64),
    Unsigned(u64),
    Float(f64),
    Bytes(Vec<u8>),
    Text(String),
    Array(Vec<Value>),
    Map(Vec<(Value, Value)>),
    Tag(u64, Box<Value>),
    Simple(u8),
}

impl Value {
    /// Returns the value as a string reference, if it is a `Text` variant.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Text(s) => Some(s),
            _ => None,
        }
    }

    /// Returns the value as an i64, if it is an integer that fits.
    pub fn as_int(&self) -> Option<i64> {
        match self {
            Self::Integer(i) => Some(*i),
            Self::Unsigned(u) => i64::try_from(*u).ok(),
            _ => None,
        }
    }

    /// Wraps `value` in a tag.
    pub fn tagged(tag: u64, value: impl Into<Value>) -> Self {
        Self::Tag(tag, Box::new(value.into()))
    }
}

impl Encode for Value {
    fn encode(&self, enc: &mut Encoder) -> Result<()> {
        match self {
            Self::Null => enc.encode_null(),
            Self::Undefined => enc.encode_undefined(),
            Self::Bool(b) => enc.encode_bool(*b),
            Self::Integer(i) => enc.encode_int(*i),
            Self::Unsigned(u) => enc.encode_uint(*u),
            Self::Float(f) => enc.encode_float(*f),
            Self::Bytes(b) => enc.encode_byte_string(b),
            Self::Text(s) => enc.encode_text_string(s),
            Self::Array(items) => items.encode(enc),
            Self::Map(entries) => {
                enc.begin_map(Some(entries.len() as u64))?;
                for (key, value) in entries {
                    key.encode(enc)?;
                    value.encode(enc)?;
                }
                Ok(())
            }
            Self::Tag(tag, value) => {
                enc.encode_tag(*tag)?;
                value.encode(enc)
            }
            Self::Simple(v) => enc.encode_simple(*v),
        }
    }
}

impl Encoder {
    /// Encodes a [`Value`]. On failure nothing is left behind.
    pub fn encode_value(&mut self, value: &Value) -> Result<()> {
        self.encode_generic(value)
    }
}

// -- Convenience conversions --

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Self::Bool(b)
    }
}

impl From<i64> for Value {
    fn from(i: i64) -> Self {
        Self::Integer(i)
    }
}

impl From<i32> for Value {
    fn from(i: i32) -> Self {
        Self::Integer(i64::from(i))
    }
}

impl From<u64> for Value {
    fn from(u: u64) -> Self {
        Self::Unsigned(u)
    }
}

impl From<f64> for Value {
    fn from(f: f64) -> Self {
        Self::Float(f)
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Self::Text(s)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Self::Text(s.to_owned())
    }
}

impl From<Vec<u8>> for Value {
    fn from(b: Vec<u8>) -> Self {
        Self::Bytes(b)
    }
}

impl From<Vec<Value>> for Value {
    fn from(v: Vec<Value>) -> Self {
        Self::Array(v)
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(v: Option<T>) -> Self {
        v.map_or(Self::Null, Into::into)
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Null => write!(f, "null"),
            Self::Undefined => write!(f, "undefined"),
            Self::Bool(b) => write!(f, "{b}"),
            Self::Integer(i) => write!(f, "{i}"),
            Self::Unsigned(u) => write!(f, "{u}"),
            Self::Float(v) => write!(f, "{v}"),
            Self::Bytes(b) => write!(f, "<{} bytes>", b.len()),
            Self::Text(s) => write!(f, "\"{s}\""),
            Self::Array(items) => {
                write!(f, "[")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{item}")?;
                }
                write!(f, "]")
            }
            Self::Map(entries) => {
                write!(f, "{{")?;
                for (i, (k, v)) in entries.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{k}: {v}")?;
                }
                write!(f, "}}")
            }
            Self::Tag(tag, value) => write!(f, "{tag}({value})"),
            Self::Simple(v) => write!(f, "simple({v})"),
        }
    }
}
