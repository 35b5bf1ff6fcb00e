//! Tagged argument/result values carried by function calls and function responses.

use serde_json::{Number, Value};
use std::collections::BTreeMap;

/// Named arguments of a function call, ordered by key so rendering is deterministic.
pub type Arguments = BTreeMap<String, ArgValue>;

/// A structured value passed to or returned from a tool.
#[derive(Debug, Clone, PartialEq)]
pub enum ArgValue {
    Null,
    Bool(bool),
    Integer(i64),
    /// Integers above `i64::MAX`.
    Unsigned(u64),
    Float(f64),
    String(String),
    List(Vec<ArgValue>),
    Object(BTreeMap<String, ArgValue>),
}

/// A float that has no JSON representation (NaN or infinite).
#[derive(Debug, Clone, PartialEq)]
pub struct NonFiniteNumber {
    /// Dotted path to the offending value, relative to the converted root.
    pub path: String,
    pub value: f64,
}

impl ArgValue {
    /// Build an object value from key/value pairs.
    pub fn object<K, V, I>(entries: I) -> Self
    where
        K: Into<String>,
        V: Into<ArgValue>,
        I: IntoIterator<Item = (K, V)>,
    {
        ArgValue::Object(
            entries
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            ArgValue::String(s) => Some(s),
            _ => None,
        }
    }

    /// Look up a key when this value is an object.
    pub fn get(&self, key: &str) -> Option<&ArgValue> {
        match self {
            ArgValue::Object(map) => map.get(key),
            _ => None,
        }
    }

    /// `Null` and the empty object carry no payload.
    pub fn is_empty(&self) -> bool {
        match self {
            ArgValue::Null => true,
            ArgValue::Object(map) => map.is_empty(),
            _ => false,
        }
    }

    /// Convert into a JSON value, rejecting floats JSON cannot represent.
    pub fn to_json(&self) -> Result<Value, NonFiniteNumber> {
        self.to_json_at("")
    }

    fn to_json_at(&self, path: &str) -> Result<Value, NonFiniteNumber> {
        Ok(match self {
            ArgValue::Null => Value::Null,
            ArgValue::Bool(b) => Value::Bool(*b),
            ArgValue::Integer(i) => Value::Number((*i).into()),
            ArgValue::Unsigned(u) => Value::Number((*u).into()),
            ArgValue::Float(f) => Number::from_f64(*f)
                .map(Value::Number)
                .ok_or_else(|| NonFiniteNumber {
                    path: path.to_string(),
                    value: *f,
                })?,
            ArgValue::String(s) => Value::String(s.clone()),
            ArgValue::List(items) => Value::Array(
                items
                    .iter()
                    .enumerate()
                    .map(|(i, v)| v.to_json_at(&format!("{}[{}]", path, i)))
                    .collect::<Result<Vec<_>, _>>()?,
            ),
            ArgValue::Object(map) => {
                let mut out = serde_json::Map::new();
                for (k, v) in map {
                    let child = if path.is_empty() {
                        k.clone()
                    } else {
                        format!("{}.{}", path, k)
                    };
                    out.insert(k.clone(), v.to_json_at(&child)?);
                }
                Value::Object(out)
            }
        })
    }
}

/// Convert a whole argument mapping into a JSON object.
pub fn arguments_to_json(args: &Arguments) -> Result<serde_json::Map<String, Value>, NonFiniteNumber> {
    let mut out = serde_json::Map::new();
    for (k, v) in args {
        out.insert(k.clone(), v.to_json_at(k)?);
    }
    Ok(out)
}

/// Convert a JSON object into an argument mapping.
pub fn arguments_from_json(map: serde_json::Map<String, Value>) -> Arguments {
    map.into_iter().map(|(k, v)| (k, ArgValue::from(v))).collect()
}

impl From<Value> for ArgValue {
    fn from(value: Value) -> Self {
        match value {
            Value::Null => ArgValue::Null,
            Value::Bool(b) => ArgValue::Bool(b),
            Value::Number(n) => {
                if let Some(i) = n.as_i64() {
                    ArgValue::Integer(i)
                } else if let Some(u) = n.as_u64() {
                    ArgValue::Unsigned(u)
                } else {
                    // a serde_json Number that is neither i64 nor u64 is always a finite f64
                    n.as_f64().map(ArgValue::Float).unwrap_or(ArgValue::Null)
                }
            }
            Value::String(s) => ArgValue::String(s),
            Value::Array(items) => ArgValue::List(items.into_iter().map(ArgValue::from).collect()),
            Value::Object(map) => ArgValue::Object(arguments_from_json(map)),
        }
    }
}

impl From<&str> for ArgValue {
    fn from(s: &str) -> Self {
        ArgValue::String(s.to_string())
    }
}

impl From<String> for ArgValue {
    fn from(s: String) -> Self {
        ArgValue::String(s)
    }
}

impl From<bool> for ArgValue {
    fn from(b: bool) -> Self {
        ArgValue::Bool(b)
    }
}

impl From<i64> for ArgValue {
    fn from(i: i64) -> Self {
        ArgValue::Integer(i)
    }
}

impl From<u32> for ArgValue {
    fn from(i: u32) -> Self {
        ArgValue::Integer(i64::from(i))
    }
}

impl From<f64> for ArgValue {
    fn from(f: f64) -> Self {
        ArgValue::Float(f)
    }
}

impl From<Arguments> for ArgValue {
    fn from(map: Arguments) -> Self {
        ArgValue::Object(map)
    }
}
