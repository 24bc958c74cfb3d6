//! Core types for config-io.

use serde::de::{self, Deserialize, Deserializer, MapAccess, SeqAccess, Visitor};
use serde::ser::{Serialize, Serializer};
use std::collections::BTreeMap;
use std::fmt;

/// String-keyed mapping used for both inputs and outputs.
///
/// A `BTreeMap` keeps serialized output in sorted key order.
pub type ConfigMap = BTreeMap<String, ConfigValue>;

/// A loosely-typed configuration value.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum ConfigValue {
    #[default]
    Null,
    Bool(bool),
    Integer(i64),
    Float(f64),
    String(String),
    Sequence(Vec<ConfigValue>),
    Mapping(ConfigMap),
}

impl ConfigValue {
    /// Returns the nested mapping, if this value is one.
    pub fn as_mapping(&self) -> Option<&ConfigMap> {
        match self {
            ConfigValue::Mapping(map) => Some(map),
            _ => None,
        }
    }

    /// Returns the string slice, if this value is a string.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            ConfigValue::String(s) => Some(s),
            _ => None,
        }
    }

    /// Whether this value may be used as a mapping key.
    fn is_scalar(&self) -> bool {
        !matches!(self, ConfigValue::Sequence(_) | ConfigValue::Mapping(_))
    }
}

impl fmt::Display for ConfigValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigValue::Null => write!(f, "<nil>"),
            ConfigValue::Bool(b) => write!(f, "{}", b),
            ConfigValue::Integer(i) => write!(f, "{}", i),
            ConfigValue::Float(x) => write!(f, "{}", x),
            ConfigValue::String(s) => write!(f, "{}", s),
            ConfigValue::Sequence(items) => {
                write!(f, "[")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        write!(f, " ")?;
                    }
                    write!(f, "{}", item)?;
                }
                write!(f, "]")
            }
            ConfigValue::Mapping(map) => {
                write!(f, "map[")?;
                for (i, (key, value)) in map.iter().enumerate() {
                    if i > 0 {
                        write!(f, " ")?;
                    }
                    write!(f, "{}:{}", key, value)?;
                }
                write!(f, "]")
            }
        }
    }
}

impl From<bool> for ConfigValue {
    fn from(b: bool) -> Self {
        ConfigValue::Bool(b)
    }
}

impl From<i64> for ConfigValue {
    fn from(i: i64) -> Self {
        ConfigValue::Integer(i)
    }
}

impl From<i32> for ConfigValue {
    fn from(i: i32) -> Self {
        ConfigValue::Integer(i64::from(i))
    }
}

impl From<f64> for ConfigValue {
    fn from(x: f64) -> Self {
        ConfigValue::Float(x)
    }
}

impl From<&str> for ConfigValue {
    fn from(s: &str) -> Self {
        ConfigValue::String(s.to_string())
    }
}

impl From<String> for ConfigValue {
    fn from(s: String) -> Self {
        ConfigValue::String(s)
    }
}

impl From<Vec<ConfigValue>> for ConfigValue {
    fn from(items: Vec<ConfigValue>) -> Self {
        ConfigValue::Sequence(items)
    }
}

impl From<ConfigMap> for ConfigValue {
    fn from(map: ConfigMap) -> Self {
        ConfigValue::Mapping(map)
    }
}

impl Serialize for ConfigValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            ConfigValue::Null => serializer.serialize_unit(),
            ConfigValue::Bool(b) => serializer.serialize_bool(*b),
            ConfigValue::Integer(i) => serializer.serialize_i64(*i),
            ConfigValue::Float(x) => serializer.serialize_f64(*x),
            ConfigValue::String(s) => serializer.serialize_str(s),
            ConfigValue::Sequence(items) => items.serialize(serializer),
            ConfigValue::Mapping(map) => map.serialize(serializer),
        }
    }
}

impl<'de> Deserialize<'de> for ConfigValue {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(ConfigValueVisitor)
    }
}

struct ConfigValueVisitor;

impl<'de> Visitor<'de> for ConfigValueVisitor {
    type Value = ConfigValue;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a string, number, boolean, null, sequence or mapping")
    }

    fn visit_bool<E>(self, b: bool) -> Result<ConfigValue, E> {
        Ok(ConfigValue::Bool(b))
    }

    fn visit_i64<E>(self, i: i64) -> Result<ConfigValue, E> {
        Ok(ConfigValue::Integer(i))
    }

    fn visit_u64<E>(self, u: u64) -> Result<ConfigValue, E> {
        // Values beyond i64 keep their magnitude as a float
        Ok(match i64::try_from(u) {
            Ok(i) => ConfigValue::Integer(i),
            Err(_) => ConfigValue::Float(u as f64),
        })
    }

    fn visit_f64<E>(self, x: f64) -> Result<ConfigValue, E> {
        Ok(ConfigValue::Float(x))
    }

    fn visit_str<E>(self, s: &str) -> Result<ConfigValue, E> {
        Ok(ConfigValue::String(s.to_string()))
    }

    fn visit_string<E>(self, s: String) -> Result<ConfigValue, E> {
        Ok(ConfigValue::String(s))
    }

    fn visit_unit<E>(self) -> Result<ConfigValue, E> {
        Ok(ConfigValue::Null)
    }

    fn visit_none<E>(self) -> Result<ConfigValue, E> {
        Ok(ConfigValue::Null)
    }

    fn visit_some<D: Deserializer<'de>>(self, deserializer: D) -> Result<ConfigValue, D::Error> {
        Deserialize::deserialize(deserializer)
    }

    fn visit_seq<A: SeqAccess<'de>>(self, mut seq: A) -> Result<ConfigValue, A::Error> {
        let mut items = Vec::with_capacity(seq.size_hint().unwrap_or(0));
        while let Some(item) = seq.next_element()? {
            items.push(item);
        }
        Ok(ConfigValue::Sequence(items))
    }

    fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<ConfigValue, A::Error> {
        let mut map = ConfigMap::new();
        while let Some((key, value)) = access.next_entry::<ConfigValue, ConfigValue>()? {
            let key = key_to_string(key).map_err(<A::Error as de::Error>::custom)?;
            map.insert(key, value);
        }
        Ok(ConfigValue::Mapping(map))
    }
}

/// Convert a scalar mapping key to its string form.
///
/// YAML allows `1: a` or `true: b`; those keys are kept by their text.
fn key_to_string(key: ConfigValue) -> Result<String, String> {
    match key {
        ConfigValue::String(s) => Ok(s),
        ConfigValue::Null => Ok("null".to_string()),
        key if key.is_scalar() => Ok(key.to_string()),
        key => Err(format!("mapping key must be a scalar, got {}", key)),
    }
}

/// Deserialize a document that must be a mapping.
///
/// A null document (`null`, an empty or comment-only YAML file) is an empty
/// mapping.
pub(crate) fn document_to_map(value: ConfigValue) -> Result<ConfigMap, ConfigValue> {
    match value {
        ConfigValue::Mapping(map) => Ok(map),
        ConfigValue::Null => Ok(ConfigMap::new()),
        other => Err(other),
    }
}
