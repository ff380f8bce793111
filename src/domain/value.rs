//! Document tree that can hold intrinsic function calls

use crate::domain::canonical;
use crate::domain::intrinsic::Intrinsic;
use indexmap::IndexMap;
use serde::ser::Error as _;
use serde::{Serialize, Serializer};
use serde_yaml::Number;
use std::borrow::Cow;
use std::fmt;

/// Mapping with scalar keys; equality ignores key order
pub type Mapping = IndexMap<Key, Value>;

/// A mapping key, kept with its resolved YAML type so `80:` and `'80':`
/// stay distinct
#[derive(Debug, Clone, PartialEq, Hash)]
pub enum Key {
    Null,
    Bool(bool),
    Number(Number),
    String(String),
}

// serde_yaml::Number equality is reflexive (all NaNs compare equal)
impl Eq for Key {}

impl Key {
    /// Key of a host parser node; `None` for sequences, mappings and tags
    pub fn of_yaml(node: &serde_yaml::Value) -> Option<Key> {
        match node {
            serde_yaml::Value::Null => Some(Key::Null),
            serde_yaml::Value::Bool(b) => Some(Key::Bool(*b)),
            serde_yaml::Value::Number(n) => Some(Key::Number(n.clone())),
            serde_yaml::Value::String(s) => Some(Key::String(s.clone())),
            _ => None,
        }
    }

    pub fn to_yaml(&self) -> serde_yaml::Value {
        match self {
            Key::Null => serde_yaml::Value::Null,
            Key::Bool(b) => serde_yaml::Value::Bool(*b),
            Key::Number(n) => serde_yaml::Value::Number(n.clone()),
            Key::String(s) => serde_yaml::Value::String(s.clone()),
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Key::String(s) => Some(s),
            _ => None,
        }
    }

    /// Text form, used where keys must be strings
    pub fn text(&self) -> Cow<'_, str> {
        match self {
            Key::Null => Cow::Borrowed("null"),
            Key::Bool(b) => Cow::Owned(b.to_string()),
            Key::Number(n) => Cow::Owned(n.to_string()),
            Key::String(s) => Cow::Borrowed(s),
        }
    }
}

impl From<&str> for Key {
    fn from(s: &str) -> Self {
        Key::String(s.to_string())
    }
}

impl From<String> for Key {
    fn from(s: String) -> Self {
        Key::String(s)
    }
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text())
    }
}

/// A YAML document value after construction
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Null,
    Bool(bool),
    Number(Number),
    String(String),
    Sequence(Vec<Value>),
    Mapping(Mapping),
    Intrinsic(Box<Intrinsic>),
}

/// Structural kind of a node, used for shape checks
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NodeKind {
    Scalar,
    Sequence,
    Mapping,
    Tagged,
}

impl NodeKind {
    /// Kind of a host parser node
    pub fn of_yaml(node: &serde_yaml::Value) -> NodeKind {
        match node {
            serde_yaml::Value::Sequence(_) => NodeKind::Sequence,
            serde_yaml::Value::Mapping(_) => NodeKind::Mapping,
            serde_yaml::Value::Tagged(_) => NodeKind::Tagged,
            _ => NodeKind::Scalar,
        }
    }
}

impl fmt::Display for NodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            NodeKind::Scalar => "scalar",
            NodeKind::Sequence => "sequence",
            NodeKind::Mapping => "mapping",
            NodeKind::Tagged => "tagged",
        };
        f.write_str(name)
    }
}

impl Value {
    pub fn kind(&self) -> NodeKind {
        match self {
            Value::Sequence(_) => NodeKind::Sequence,
            Value::Mapping(_) => NodeKind::Mapping,
            Value::Intrinsic(_) => NodeKind::Tagged,
            _ => NodeKind::Scalar,
        }
    }

    pub fn is_scalar(&self) -> bool {
        self.kind() == NodeKind::Scalar
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_sequence(&self) -> Option<&[Value]> {
        match self {
            Value::Sequence(items) => Some(items),
            _ => None,
        }
    }

    pub fn as_mapping(&self) -> Option<&Mapping> {
        match self {
            Value::Mapping(map) => Some(map),
            _ => None,
        }
    }

    pub fn as_intrinsic(&self) -> Option<&Intrinsic> {
        match self {
            Value::Intrinsic(intrinsic) => Some(intrinsic),
            _ => None,
        }
    }

    /// Look up a key when this value is a mapping
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.as_mapping()
            .and_then(|map| map.get(&Key::from(key)))
    }

    /// Text of a scalar payload under a tag; an empty node reads as ""
    pub fn scalar_text(&self) -> Option<String> {
        match self {
            Value::Null => Some(String::new()),
            Value::Bool(b) => Some(b.to_string()),
            Value::Number(n) => Some(n.to_string()),
            Value::String(s) => Some(s.clone()),
            _ => None,
        }
    }

    /// True when no intrinsic appears anywhere in this tree
    pub fn is_plain(&self) -> bool {
        match self {
            Value::Sequence(items) => items.iter().all(Value::is_plain),
            Value::Mapping(map) => map.values().all(Value::is_plain),
            Value::Intrinsic(_) => false,
            _ => true,
        }
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::String(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::String(s)
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Value::Number(n.into())
    }
}

impl From<i32> for Value {
    fn from(n: i32) -> Self {
        Value::Number(n.into())
    }
}

impl From<u64> for Value {
    fn from(n: u64) -> Self {
        Value::Number(n.into())
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Value::Number(n.into())
    }
}

impl From<Vec<Value>> for Value {
    fn from(items: Vec<Value>) -> Self {
        Value::Sequence(items)
    }
}

impl From<Mapping> for Value {
    fn from(map: Mapping) -> Self {
        Value::Mapping(map)
    }
}

impl From<Intrinsic> for Value {
    fn from(intrinsic: Intrinsic) -> Self {
        Value::Intrinsic(Box::new(intrinsic))
    }
}

/// Serializes the canonical (expanded) form, so any serde encoder can
/// consume a document without knowing about intrinsics.
impl Serialize for Value {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        canonical::canonicalize(self)
            .map_err(S::Error::custom)?
            .serialize(serializer)
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Null => f.write_str("null"),
            Value::Bool(b) => write!(f, "{}", b),
            Value::Number(n) => write!(f, "{}", n),
            Value::String(s) => write!(f, "{}", s),
            Value::Sequence(items) => {
                f.write_str("[")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{}", item)?;
                }
                f.write_str("]")
            }
            Value::Mapping(map) => {
                f.write_str("{")?;
                for (i, (key, value)) in map.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{}: {}", key, value)?;
                }
                f.write_str("}")
            }
            Value::Intrinsic(intrinsic) => write!(f, "{}", intrinsic),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind() {
        assert_eq!(Value::Null.kind(), NodeKind::Scalar);
        assert_eq!(Value::from("x").kind(), NodeKind::Scalar);
        assert_eq!(Value::from(3).kind(), NodeKind::Scalar);
        assert_eq!(Value::Sequence(vec![]).kind(), NodeKind::Sequence);
        assert_eq!(Value::Mapping(Mapping::new()).kind(), NodeKind::Mapping);
    }

    #[test]
    fn test_mapping_equality_ignores_order() {
        let mut a = Mapping::new();
        a.insert("x".into(), Value::from(1));
        a.insert("y".into(), Value::from(2));

        let mut b = Mapping::new();
        b.insert("y".into(), Value::from(2));
        b.insert("x".into(), Value::from(1));

        assert_eq!(Value::Mapping(a), Value::Mapping(b));
    }

    #[test]
    fn test_scalar_text() {
        assert_eq!(Value::from(true).scalar_text().unwrap(), "true");
        assert_eq!(Value::from(42).scalar_text().unwrap(), "42");
        assert_eq!(Value::Null.scalar_text().unwrap(), "");
        assert!(Value::Sequence(vec![]).scalar_text().is_none());
    }

    #[test]
    fn test_display() {
        let mut map = Mapping::new();
        map.insert("foo".into(), Value::from("bar"));
        let value = Value::Sequence(vec![Value::from("$foo"), Value::Mapping(map)]);
        assert_eq!(value.to_string(), "[$foo, {foo: bar}]");
    }

    #[test]
    fn test_get() {
        let mut map = Mapping::new();
        map.insert("Key".into(), Value::from("v"));
        let value = Value::Mapping(map);
        assert_eq!(value.get("Key"), Some(&Value::from("v")));
        assert_eq!(value.get("Other"), None);
        assert_eq!(Value::from("s").get("Key"), None);
    }

    #[test]
    fn test_keys_keep_yaml_type() {
        let mut map = Mapping::new();
        map.insert(Key::Number(1.into()), Value::from("number"));
        map.insert(Key::from("1"), Value::from("string"));
        map.insert(Key::Bool(true), Value::from("bool"));

        assert_eq!(map.len(), 3);
        assert_eq!(Value::Mapping(map.clone()).get("1"), Some(&Value::from("string")));
        assert_eq!(map[&Key::Number(1.into())], Value::from("number"));
        assert_eq!(Key::Bool(true).text(), "true");
        assert_eq!(Key::Null.text(), "null");
    }

    #[test]
    fn test_key_yaml_conversion() {
        let node = serde_yaml::Value::Number(80.into());
        let key = Key::of_yaml(&node).unwrap();
        assert_eq!(key, Key::Number(80.into()));
        assert_eq!(key.to_yaml(), node);
        assert!(Key::of_yaml(&serde_yaml::Value::Sequence(vec![])).is_none());
    }
}
