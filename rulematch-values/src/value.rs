//! Runtime value representation for dynamically typed subjects.
//!
//! This module defines the `Value` enum used as both match subject and bound
//! value when patterns are written against heterogeneous data. Tagged values
//! (`Value::Data`) are what constructor patterns deconstruct.

use std::fmt;

/// Runtime values that can be matched and bound
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// 64-bit signed integer
    Integer(i64),
    /// 64-bit floating point number
    Float(f64),
    /// Boolean value
    Boolean(bool),
    /// UTF-8 string
    String(String),
    /// Atom (symbol)
    Atom(String),

    /// Fixed-size tuple of values
    Tuple(Vec<Value>),
    /// Tagged value built by a data type variant
    Data { tag: String, fields: Vec<Value> },

    /// Unit value (no meaningful result)
    Unit,
}

impl Value {
    pub fn integer(value: i64) -> Self {
        Value::Integer(value)
    }

    pub fn float(value: f64) -> Self {
        Value::Float(value)
    }

    pub fn boolean(value: bool) -> Self {
        Value::Boolean(value)
    }

    pub fn string(value: impl Into<String>) -> Self {
        Value::String(value.into())
    }

    pub fn atom(name: impl Into<String>) -> Self {
        Value::Atom(name.into())
    }

    pub fn tuple(items: Vec<Value>) -> Self {
        Value::Tuple(items)
    }

    /// Build a tagged value without checking it against a data type
    pub fn data(tag: impl Into<String>, fields: Vec<Value>) -> Self {
        Value::Data {
            tag: tag.into(),
            fields,
        }
    }

    pub fn unit() -> Self {
        Value::Unit
    }

    /// Get the type name of this value
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Integer(_) => "Integer",
            Value::Float(_) => "Float",
            Value::Boolean(_) => "Boolean",
            Value::String(_) => "String",
            Value::Atom(_) => "Atom",
            Value::Tuple(_) => "Tuple",
            Value::Data { .. } => "Data",
            Value::Unit => "Unit",
        }
    }

    /// The variant tag of a tagged value
    pub fn tag(&self) -> Option<&str> {
        match self {
            Value::Data { tag, .. } => Some(tag),
            _ => None,
        }
    }

    /// The fields of a tagged value
    pub fn fields(&self) -> Option<&[Value]> {
        match self {
            Value::Data { fields, .. } => Some(fields),
            _ => None,
        }
    }

    pub fn as_integer(&self) -> Option<i64> {
        match self {
            Value::Integer(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Integer(n) => write!(f, "{}", n),
            Value::Float(x) => {
                if x.fract() == 0.0 {
                    write!(f, "{:.1}", x) // Show 1.0 instead of 1
                } else {
                    write!(f, "{}", x)
                }
            }
            Value::Boolean(b) => write!(f, "{}", b),
            Value::String(s) => write!(f, "\"{}\"", s),
            Value::Atom(name) => write!(f, ":{}", name),
            Value::Tuple(items) => {
                let items: Vec<String> = items.iter().map(|v| v.to_string()).collect();
                if items.len() == 1 {
                    write!(f, "({},)", items[0]) // Single element tuple needs comma
                } else {
                    write!(f, "({})", items.join(", "))
                }
            }
            Value::Data { tag, fields } => {
                let fields: Vec<String> = fields.iter().map(|v| v.to_string()).collect();
                write!(f, "{}({})", tag, fields.join(", "))
            }
            Value::Unit => write!(f, "unit"),
        }
    }
}

impl From<i64> for Value {
    fn from(value: i64) -> Self {
        Value::Integer(value)
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Value::Boolean(value)
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::String(value.to_string())
    }
}
