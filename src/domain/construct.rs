//! Construction: host YAML nodes to document values

use crate::domain::intrinsic::Intrinsic;
use crate::domain::registry::HandlerTable;
use crate::domain::tag::Shape;
use crate::domain::value::{Key, Mapping, NodeKind, Value};
use crate::error::{CfnTagsError, Result};
use serde_yaml::value::TaggedValue;

/// Convert a parsed YAML node, resolving tags through `handlers`.
///
/// Nested tags construct their own intrinsics. A failure anywhere in the
/// tree fails the whole conversion.
pub fn construct(node: &serde_yaml::Value, handlers: &HandlerTable) -> Result<Value> {
    match node {
        serde_yaml::Value::Null => Ok(Value::Null),
        serde_yaml::Value::Bool(b) => Ok(Value::Bool(*b)),
        serde_yaml::Value::Number(n) => Ok(Value::Number(n.clone())),
        serde_yaml::Value::String(s) => Ok(Value::String(s.clone())),
        serde_yaml::Value::Sequence(items) => items
            .iter()
            .map(|item| construct(item, handlers))
            .collect::<Result<Vec<_>>>()
            .map(Value::Sequence),
        serde_yaml::Value::Mapping(map) => construct_mapping(map, handlers).map(Value::Mapping),
        serde_yaml::Value::Tagged(tagged) => construct_tagged(tagged, handlers).map(Value::from),
    }
}

fn construct_mapping(map: &serde_yaml::Mapping, handlers: &HandlerTable) -> Result<Mapping> {
    let mut out = Mapping::with_capacity(map.len());
    for (key, value) in map {
        out.insert(mapping_key(key)?, construct(value, handlers)?);
    }
    Ok(out)
}

fn mapping_key(key: &serde_yaml::Value) -> Result<Key> {
    Key::of_yaml(key).ok_or_else(|| CfnTagsError::ParseShape {
        tag: "mapping key".to_string(),
        expected: Shape::Scalar,
        found: NodeKind::of_yaml(key),
    })
}

fn construct_tagged(tagged: &TaggedValue, handlers: &HandlerTable) -> Result<Intrinsic> {
    let tag = tagged.tag.to_string();
    let kind = handlers
        .lookup(&tag)
        .ok_or_else(|| CfnTagsError::UnknownTag {
            tag: tag.clone(),
            mode: handlers.mode(),
        })?;

    let found = NodeKind::of_yaml(&tagged.value);
    if !kind.shape().accepts(found) {
        return Err(CfnTagsError::ParseShape {
            tag,
            expected: kind.shape(),
            found,
        });
    }

    // Scalar payloads are taken as text, whatever type YAML resolved
    let payload = match construct(&tagged.value, handlers)? {
        scalar if found == NodeKind::Scalar => {
            Value::String(scalar.scalar_text().unwrap_or_default())
        }
        other => other,
    };
    Ok(Intrinsic::from_checked(kind, payload))
}
