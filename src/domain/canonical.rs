//! Canonicalization: document values to the expanded JSON object model
//!
//! Every intrinsic becomes a single-key object keyed by its display name,
//! e.g. `!Join [",", [a, b]]` becomes `{"Fn::Join": [",", ["a", "b"]]}`.
//!
//! `!Ref Resource.Attribute` is the terse attribute-access form and expands
//! to `{"Fn::GetAtt": ["Resource", "Attribute"]}`. Any dotted `!Ref` string is
//! treated this way, including literals that merely contain a dot.
//!
//! JSON object keys are text, so typed YAML keys are written in their text
//! form. Two keys with the same text (`1:` and `'1':`) cannot both be kept
//! and fail with `Canonicalize`.

use crate::domain::intrinsic::Intrinsic;
use crate::domain::tag::TagKind;
use crate::domain::value::Value;
use crate::error::{CfnTagsError, Result};
use serde_json::{Map, Number};

/// Expand a document tree into plain JSON values
pub fn canonicalize(value: &Value) -> Result<serde_json::Value> {
    match value {
        Value::Null => Ok(serde_json::Value::Null),
        Value::Bool(b) => Ok(serde_json::Value::Bool(*b)),
        Value::Number(n) => canonical_number(n).map(serde_json::Value::Number),
        Value::String(s) => Ok(serde_json::Value::String(s.clone())),
        Value::Sequence(items) => items
            .iter()
            .map(canonicalize)
            .collect::<Result<Vec<_>>>()
            .map(serde_json::Value::Array),
        Value::Mapping(map) => {
            let mut out = Map::new();
            for (key, item) in map {
                let text = key.text().into_owned();
                if out.contains_key(&text) {
                    return Err(CfnTagsError::Canonicalize(format!(
                        "mapping key {:?} collides with another key once converted to text",
                        text
                    )));
                }
                out.insert(text, canonicalize(item)?);
            }
            Ok(serde_json::Value::Object(out))
        }
        Value::Intrinsic(intrinsic) => canonical_intrinsic(intrinsic),
    }
}

fn canonical_intrinsic(intrinsic: &Intrinsic) -> Result<serde_json::Value> {
    if let Some((resource, attribute)) = intrinsic.dotted_reference() {
        let attributes = serde_json::Value::Array(vec![
            serde_json::Value::String(resource.to_string()),
            serde_json::Value::String(attribute.to_string()),
        ]);
        return Ok(single_key(TagKind::GetAtt.display_name(), attributes));
    }

    let payload = intrinsic.payload();
    if let Value::Intrinsic(inner) = payload {
        return Err(CfnTagsError::Canonicalize(format!(
            "{} payload is a bare {}, expected a scalar, sequence or mapping",
            intrinsic.kind(),
            inner.kind()
        )));
    }

    Ok(single_key(
        intrinsic.kind().display_name(),
        canonicalize(payload)?,
    ))
}

fn single_key(key: &str, value: serde_json::Value) -> serde_json::Value {
    let mut map = Map::with_capacity(1);
    map.insert(key.to_string(), value);
    serde_json::Value::Object(map)
}

fn canonical_number(n: &serde_yaml::Number) -> Result<Number> {
    if let Some(i) = n.as_i64() {
        return Ok(Number::from(i));
    }
    if let Some(u) = n.as_u64() {
        return Ok(Number::from(u));
    }
    n.as_f64()
        .and_then(Number::from_f64)
        .ok_or_else(|| CfnTagsError::Canonicalize(format!("{} has no JSON number form", n)))
}
