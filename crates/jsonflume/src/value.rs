//! JSON value trees.
//!
//! This module defines the [`Value`] enum produced by the decoder, and the
//! `Display` serializer used for round-trip checks.

use alloc::{
    collections::BTreeMap,
    string::{String, ToString},
    vec::Vec,
};

use num_bigint::BigInt;

/// An object: string keys to values. Duplicate keys overwrite — last write
/// wins.
pub type Map = BTreeMap<String, Value>;
/// An array: an ordered sequence of values.
pub type Array = Vec<Value>;

/// A decoded JSON value.
///
/// Integer literals (no fraction, no exponent) decode to arbitrary-precision
/// [`Integer`]s; anything with a fractional part or an exponent decodes to a
/// [`Float`], where a magnitude beyond `f64` range becomes the infinity of
/// the literal's sign. The extended literals `NaN`, `Infinity` and
/// `-Infinity` also land in [`Float`].
///
/// # Examples
///
/// ```
/// use jsonflume::{Value, decode_str};
///
/// let value = decode_str(r#"{"a": 2}"#).unwrap();
/// assert_eq!(value.to_string(), r#"{"a":2}"#);
/// ```
///
/// [`Integer`]: Value::Integer
/// [`Float`]: Value::Float
#[derive(Clone, Debug, PartialEq)]
pub enum Value {
    Null,
    Boolean(bool),
    Integer(BigInt),
    Float(f64),
    String(String),
    Array(Array),
    Object(Map),
}

impl Default for Value {
    fn default() -> Self {
        Self::Null
    }
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Self::Boolean(v)
    }
}

impl From<BigInt> for Value {
    fn from(v: BigInt) -> Self {
        Self::Integer(v)
    }
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Self::Integer(BigInt::from(v))
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Self::Float(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Self::String(v.to_string())
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Self::String(v)
    }
}

impl From<Array> for Value {
    fn from(v: Array) -> Self {
        Self::Array(v)
    }
}

impl From<Map> for Value {
    fn from(v: Map) -> Self {
        Self::Object(v)
    }
}

impl Value {
    /// Returns `true` if the value is [`Null`].
    ///
    /// [`Null`]: Value::Null
    #[must_use]
    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// Returns `true` if the value is [`Boolean`].
    ///
    /// [`Boolean`]: Value::Boolean
    #[must_use]
    pub fn is_boolean(&self) -> bool {
        matches!(self, Self::Boolean(..))
    }

    /// Returns `true` if the value is [`Integer`].
    ///
    /// [`Integer`]: Value::Integer
    #[must_use]
    pub fn is_integer(&self) -> bool {
        matches!(self, Self::Integer(..))
    }

    /// Returns `true` if the value is [`Float`].
    ///
    /// [`Float`]: Value::Float
    #[must_use]
    pub fn is_float(&self) -> bool {
        matches!(self, Self::Float(..))
    }

    /// Returns `true` if the value is [`String`].
    ///
    /// [`String`]: Value::String
    #[must_use]
    pub fn is_string(&self) -> bool {
        matches!(self, Self::String(..))
    }

    /// Returns `true` if the value is [`Array`].
    ///
    /// [`Array`]: Value::Array
    #[must_use]
    pub fn is_array(&self) -> bool {
        matches!(self, Self::Array(..))
    }

    /// Returns `true` if the value is [`Object`].
    ///
    /// [`Object`]: Value::Object
    #[must_use]
    pub fn is_object(&self) -> bool {
        matches!(self, Self::Object(..))
    }

    /// The float payload, if the value is [`Float`].
    ///
    /// [`Float`]: Value::Float
    #[must_use]
    pub fn as_float(&self) -> Option<f64> {
        match self {
            Self::Float(n) => Some(*n),
            _ => None,
        }
    }
}

/// Escapes a string for inclusion in a serialized JSON string literal.
///
/// Besides quotes, backslashes and control characters, this escapes every
/// non-space whitespace character, since the tokenizer does not accept those
/// raw inside string literals.
fn write_escaped_string<W: core::fmt::Write>(src: &str, f: &mut W) -> core::fmt::Result {
    for c in src.chars() {
        match c {
            '"' => f.write_str("\\\"")?,
            '\\' => f.write_str("\\\\")?,
            c if c.is_ascii_control()
                || (c.is_whitespace() && c != ' ')
                || (c.is_control() && c as u32 <= 0xFFFF) =>
            {
                write!(f, "\\u{:04X}", c as u32)?;
            }
            _ => f.write_char(c)?,
        }
    }
    Ok(())
}

impl core::fmt::Display for Value {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Value::Null => f.write_str("null"),
            Value::Boolean(b) => f.write_str(if *b { "true" } else { "false" }),
            Value::Integer(n) => write!(f, "{n}"),
            Value::Float(n) => {
                if n.is_nan() {
                    f.write_str("NaN")
                } else if *n == f64::INFINITY {
                    f.write_str("Infinity")
                } else if *n == f64::NEG_INFINITY {
                    f.write_str("-Infinity")
                } else {
                    // Keep a decimal point so the text re-parses as a float,
                    // not an integer.
                    let s = n.to_string();
                    if s.contains('.') {
                        f.write_str(&s)
                    } else {
                        write!(f, "{s}.0")
                    }
                }
            }
            Value::String(s) => {
                f.write_str("\"")?;
                write_escaped_string(s, f)?;
                f.write_str("\"")
            }
            Value::Array(arr) => {
                f.write_str("[")?;
                let mut first = true;
                for v in arr {
                    if !first {
                        f.write_str(",")?;
                    }
                    first = false;
                    write!(f, "{v}")?;
                }
                f.write_str("]")
            }
            Value::Object(map) => {
                f.write_str("{")?;
                let mut first = true;
                for (k, v) in map {
                    if !first {
                        f.write_str(",")?;
                    }
                    first = false;
                    f.write_str("\"")?;
                    write_escaped_string(k, f)?;
                    write!(f, "\":{v}")?;
                }
                f.write_str("}")
            }
        }
    }
}
