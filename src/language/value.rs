//! Values supplied as arguments to a formatting call

use std::fmt;

use serde::ser::{SerializeMap, SerializeSeq};
use serde::{Serialize, Serializer};

use crate::formatting::numbers;

/// Largest integer a double holds exactly; integral numbers below this
/// serialize without a fractional part.
const SAFE_INTEGER: f64 = 9_007_199_254_740_992.0;

#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Undefined,
    Null,
    Boolean(bool),
    Number(f64),
    Text(String),
    Array(Vec<Value>),
    Object(Object),
}

/// A composite value with named fields. The class is the name of whatever
/// constructed it; `None` for anonymous instances.
#[derive(Debug, Clone, PartialEq)]
pub struct Object {
    pub class: Option<String>,
    pub fields: Vec<(String, Value)>,
}

impl Value {
    /// A plain object, of class `Object`.
    pub fn object<K, I>(fields: I) -> Value
    where
        K: Into<String>,
        I: IntoIterator<Item = (K, Value)>,
    {
        Value::build(Some("Object".to_string()), fields)
    }

    /// An instance of a named class.
    pub fn instance<K, I>(class: impl Into<String>, fields: I) -> Value
    where
        K: Into<String>,
        I: IntoIterator<Item = (K, Value)>,
    {
        Value::build(Some(class.into()), fields)
    }

    /// An instance whose constructor has no name.
    pub fn anonymous<K, I>(fields: I) -> Value
    where
        K: Into<String>,
        I: IntoIterator<Item = (K, Value)>,
    {
        Value::build(None, fields)
    }

    fn build<K, I>(class: Option<String>, fields: I) -> Value
    where
        K: Into<String>,
        I: IntoIterator<Item = (K, Value)>,
    {
        Value::Object(Object {
            class,
            fields: fields
                .into_iter()
                .map(|(key, value)| (key.into(), value))
                .collect(),
        })
    }

    /// The primitive kind name of this value. Null, arrays, and objects are
    /// all of kind `object`.
    pub fn kind(&self) -> &'static str {
        match self {
            Value::Undefined => "undefined",
            Value::Null => "object",
            Value::Boolean(_) => "boolean",
            Value::Number(_) => "number",
            Value::Text(_) => "string",
            Value::Array(_) | Value::Object(_) => "object",
        }
    }

    pub fn is_composite(&self) -> bool {
        matches!(self, Value::Array(_) | Value::Object(_))
    }

    /// Constructor name of a composite value.
    pub fn class_name(&self) -> Option<&str> {
        match self {
            Value::Array(_) => Some("Array"),
            Value::Object(object) => Some(
                object
                    .class
                    .as_deref()
                    .unwrap_or("anonymous"),
            ),
            _ => None,
        }
    }

    /// Coerce to a number, returning `None` where the coercion would not
    /// produce one.
    pub fn to_number(&self) -> Option<f64> {
        match self {
            Value::Undefined => None,
            Value::Null => Some(0.0),
            Value::Boolean(b) => Some(if *b { 1.0 } else { 0.0 }),
            Value::Number(n) => {
                if n.is_nan() {
                    None
                } else {
                    Some(*n)
                }
            }
            Value::Text(text) => parse_numeric(text),
            Value::Array(_) => parse_numeric(&self.to_string()),
            Value::Object(_) => None,
        }
    }

    /// Numbers, and text that reads as one. Unlike `to_number()` this does
    /// not count booleans, blank text, or composites.
    pub fn is_numeric(&self) -> bool {
        match self {
            Value::Number(n) => !n.is_nan(),
            Value::Text(text) => {
                !text
                    .trim()
                    .is_empty()
                    && parse_numeric(text).is_some()
            }
            _ => false,
        }
    }

    pub fn is_truthy(&self) -> bool {
        match self {
            Value::Undefined | Value::Null => false,
            Value::Boolean(b) => *b,
            Value::Number(n) => *n != 0.0 && !n.is_nan(),
            Value::Text(text) => !text.is_empty(),
            Value::Array(_) | Value::Object(_) => true,
        }
    }

    /// Structural serialization as JSON text.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}

fn parse_numeric(text: &str) -> Option<f64> {
    let text = text.trim();
    if text.is_empty() {
        return Some(0.0);
    }

    for (prefix, radix) in [("0x", 16), ("0X", 16), ("0o", 8), ("0O", 8), ("0b", 2), ("0B", 2)] {
        if let Some(digits) = text.strip_prefix(prefix) {
            if digits.is_empty() || !digits.chars().all(|c| c.is_digit(radix)) {
                return None;
            }
            return u128::from_str_radix(digits, radix)
                .ok()
                .map(|n| n as f64);
        }
    }

    let unsigned = text
        .strip_prefix(|c: char| c == '+' || c == '-')
        .unwrap_or(text);

    if unsigned == "Infinity" {
        return Some(if text.starts_with('-') {
            f64::NEG_INFINITY
        } else {
            f64::INFINITY
        });
    }

    // the standard parser also takes "inf" and "nan", which are not numbers here
    if !unsigned
        .chars()
        .all(|c| c.is_ascii_digit() || matches!(c, '.' | 'e' | 'E' | '+' | '-'))
    {
        return None;
    }

    text.parse::<f64>()
        .ok()
}

/// Canonical text form: what the value looks like when converted to a string
/// without any quoting.
impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Undefined => write!(f, "undefined"),
            Value::Null => write!(f, "null"),
            Value::Boolean(b) => write!(f, "{}", b),
            Value::Number(n) => write!(f, "{}", numbers::shortest(*n)),
            Value::Text(text) => write!(f, "{}", text),
            Value::Array(items) => {
                for (i, item) in items
                    .iter()
                    .enumerate()
                {
                    if i > 0 {
                        write!(f, ",")?;
                    }
                    match item {
                        Value::Undefined | Value::Null => {}
                        _ => write!(f, "{}", item)?,
                    }
                }
                Ok(())
            }
            Value::Object(_) => write!(f, "[object Object]"),
        }
    }
}

impl Serialize for Value {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            Value::Undefined | Value::Null => serializer.serialize_unit(),
            Value::Boolean(b) => serializer.serialize_bool(*b),
            Value::Number(n) => {
                if !n.is_finite() {
                    serializer.serialize_unit()
                } else if n.fract() == 0.0 && n.abs() < SAFE_INTEGER {
                    serializer.serialize_i64(*n as i64)
                } else {
                    serializer.serialize_f64(*n)
                }
            }
            Value::Text(text) => serializer.serialize_str(text),
            Value::Array(items) => {
                let mut seq = serializer.serialize_seq(Some(items.len()))?;
                for item in items {
                    seq.serialize_element(item)?;
                }
                seq.end()
            }
            Value::Object(object) => {
                let defined: Vec<&(String, Value)> = object
                    .fields
                    .iter()
                    .filter(|(_, value)| *value != Value::Undefined)
                    .collect();
                let mut map = serializer.serialize_map(Some(defined.len()))?;
                for (key, value) in defined {
                    map.serialize_entry(key, value)?;
                }
                map.end()
            }
        }
    }
}

macro_rules! from_number {
    ($($t:ty),*) => {
        $(
            impl From<$t> for Value {
                fn from(n: $t) -> Value {
                    Value::Number(n as f64)
                }
            }
        )*
    };
}

from_number!(i8, i16, i32, i64, isize, u8, u16, u32, u64, usize, f32, f64);

impl From<bool> for Value {
    fn from(b: bool) -> Value {
        Value::Boolean(b)
    }
}

impl From<char> for Value {
    fn from(c: char) -> Value {
        Value::Text(c.to_string())
    }
}

impl From<&str> for Value {
    fn from(text: &str) -> Value {
        Value::Text(text.to_string())
    }
}

impl From<String> for Value {
    fn from(text: String) -> Value {
        Value::Text(text)
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(option: Option<T>) -> Value {
        match option {
            Some(value) => value.into(),
            None => Value::Null,
        }
    }
}

impl<T: Into<Value>> From<Vec<T>> for Value {
    fn from(items: Vec<T>) -> Value {
        Value::Array(
            items
                .into_iter()
                .map(Into::into)
                .collect(),
        )
    }
}

impl From<serde_json::Value> for Value {
    fn from(json: serde_json::Value) -> Value {
        match json {
            serde_json::Value::Null => Value::Null,
            serde_json::Value::Bool(b) => Value::Boolean(b),
            serde_json::Value::Number(n) => Value::Number(
                n.as_f64()
                    .unwrap_or(f64::NAN),
            ),
            serde_json::Value::String(text) => Value::Text(text),
            serde_json::Value::Array(items) => Value::from(items),
            serde_json::Value::Object(map) => Value::object(
                map.into_iter()
                    .map(|(key, value)| (key, Value::from(value))),
            ),
        }
    }
}
