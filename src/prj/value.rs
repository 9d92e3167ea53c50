//! The in-memory node model produced by a parse.

use indexmap::IndexMap;
use serde::ser::{Serialize, SerializeSeq, Serializer};

/// Block contents: an insertion-ordered mapping of keys to node values.
///
/// Key order is semantically meaningful in the format, so blocks keep
/// the order in which keys appear in the file.
pub type Map = IndexMap<String, Value>;

/// A decoded node value.
///
/// Every scalar, inline list and nested block in a project file decodes
/// to one of these variants. Lists are ordered and may be heterogeneous.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// Marker lines with no `key=value` structure decode to `Null`.
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    String(String),
    List(Vec<Value>),
    Block(Map),
}

impl Value {
    /// Returns true if this is a Null variant
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    /// Returns true if the value is a nested block
    pub fn is_block(&self) -> bool {
        matches!(self, Value::Block(_))
    }

    /// Returns true if the value is a list
    pub fn is_list(&self) -> bool {
        matches!(self, Value::List(_))
    }

    /// Returns the boolean value if this is a Bool variant
    pub fn as_bool(&self) -> Option<bool> {
        if let Value::Bool(b) = self {
            Some(*b)
        } else {
            None
        }
    }

    /// Returns the integer value if this is an Int variant
    pub fn as_i64(&self) -> Option<i64> {
        if let Value::Int(i) = self {
            Some(*i)
        } else {
            None
        }
    }

    /// Returns the float value if this is a Float variant
    pub fn as_f64(&self) -> Option<f64> {
        if let Value::Float(f) = self {
            Some(*f)
        } else {
            None
        }
    }

    /// Returns a reference to the string if this is a String variant
    pub fn as_str(&self) -> Option<&str> {
        if let Value::String(s) = self {
            Some(s.as_str())
        } else {
            None
        }
    }

    /// Returns a slice of the elements if this is a List variant
    pub fn as_list(&self) -> Option<&[Value]> {
        if let Value::List(items) = self {
            Some(items)
        } else {
            None
        }
    }

    /// Returns a reference to the mapping if this is a Block variant
    pub fn as_block(&self) -> Option<&Map> {
        if let Value::Block(map) = self {
            Some(map)
        } else {
            None
        }
    }
}

/// Serializes onto the matching JSON data model: `Null` becomes JSON
/// null, blocks become objects, lists become arrays.
impl Serialize for Value {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            Value::Null => serializer.serialize_unit(),
            Value::Bool(b) => serializer.serialize_bool(*b),
            Value::Int(i) => serializer.serialize_i64(*i),
            Value::Float(f) => serializer.serialize_f64(*f),
            Value::String(s) => serializer.serialize_str(s),
            Value::List(items) => {
                let mut seq = serializer.serialize_seq(Some(items.len()))?;
                for item in items {
                    seq.serialize_element(item)?;
                }
                seq.end()
            }
            Value::Block(map) => serializer.collect_map(map),
        }
    }
}
