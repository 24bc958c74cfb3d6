//! Parsers and serializers for the structured formats config-io speaks.
//!
//! JSON is only ever parsed (the environment variable). YAML is parsed for
//! inputs and emitted for outputs.

use crate::error::{ConfigIoError, Result};
use crate::types::{ConfigMap, ConfigValue, document_to_map};
use serde::Deserialize;
use serde_yaml::Value as YamlValue;

/// Parses text into a mapping.
pub trait FormatParser {
    fn parse(&self, input: &str) -> Result<ConfigMap>;
}

/// Serializes a mapping to text.
pub trait FormatSerializer {
    fn serialize(&self, document: &ConfigMap) -> Result<String>;
}

pub struct JsonFormat;

impl FormatParser for JsonFormat {
    fn parse(&self, input: &str) -> Result<ConfigMap> {
        let value: ConfigValue = serde_json::from_str(input)?;
        expect_mapping(value)
    }
}

/// YAML parser and serializer.
///
/// Only the first document of a stream is read; later documents are
/// ignored. Merge keys (`<<`) are applied and local tags are dropped.
pub struct YamlFormat;

impl FormatParser for YamlFormat {
    fn parse(&self, input: &str) -> Result<ConfigMap> {
        if is_blank_yaml(input) {
            return Ok(ConfigMap::new());
        }
        let Some(document) = serde_yaml::Deserializer::from_str(input).next() else {
            return Ok(ConfigMap::new());
        };
        let mut value = untag(YamlValue::deserialize(document)?);
        value.apply_merge()?;
        expect_mapping(serde_yaml::from_value(value)?)
    }
}

impl FormatSerializer for YamlFormat {
    fn serialize(&self, document: &ConfigMap) -> Result<String> {
        serde_yaml::to_string(document).map_err(ConfigIoError::Serialize)
    }
}

/// Replace every tagged node with its untagged value.
fn untag(value: YamlValue) -> YamlValue {
    match value {
        YamlValue::Tagged(tagged) => untag(tagged.value),
        YamlValue::Sequence(items) => YamlValue::Sequence(items.into_iter().map(untag).collect()),
        YamlValue::Mapping(map) => {
            YamlValue::Mapping(map.into_iter().map(|(k, v)| (untag(k), untag(v))).collect())
        }
        other => other,
    }
}

/// Whether a YAML stream holds no content: only whitespace, comments and
/// document markers.
pub(crate) fn is_blank_yaml(input: &str) -> bool {
    input.lines().map(str::trim).all(|line| {
        line.is_empty() || line.starts_with('#') || line == "---" || line == "..."
    })
}

fn expect_mapping(value: ConfigValue) -> Result<ConfigMap> {
    document_to_map(value).map_err(|other| ConfigIoError::NotAMapping(other.to_string()))
}

/// Render `entries` as a plain listing under `key`.
///
/// Used when the real serializer fails: one `  name: value` line per entry,
/// values in their `Display` form.
pub fn fallback_outputs(key: &str, entries: &ConfigMap) -> String {
    let mut out = String::new();
    out.push_str(&format!("{}:\n", key));
    for (name, value) in entries {
        out.push_str(&format!("  {}: {}\n", name, value));
    }
    out
}
