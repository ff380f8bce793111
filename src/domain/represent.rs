//! Representation: document values back to host YAML nodes

use crate::domain::intrinsic::Intrinsic;
use crate::domain::registry::HandlerTable;
use crate::domain::value::Value;
use crate::error::{CfnTagsError, Result};
use serde_yaml::value::{Tag, TaggedValue};

/// Convert a document value into a YAML node.
///
/// Intrinsics are emitted by the runtime shape of their payload, so this is
/// the inverse of [`construct`](crate::domain::construct::construct).
pub fn represent(value: &Value, handlers: &HandlerTable) -> Result<serde_yaml::Value> {
    match value {
        Value::Null => Ok(serde_yaml::Value::Null),
        Value::Bool(b) => Ok(serde_yaml::Value::Bool(*b)),
        Value::Number(n) => Ok(serde_yaml::Value::Number(n.clone())),
        Value::String(s) => Ok(serde_yaml::Value::String(s.clone())),
        Value::Sequence(items) => items
            .iter()
            .map(|item| represent(item, handlers))
            .collect::<Result<Vec<_>>>()
            .map(serde_yaml::Value::Sequence),
        Value::Mapping(map) => {
            let mut out = serde_yaml::Mapping::with_capacity(map.len());
            for (key, item) in map {
                out.insert(key.to_yaml(), represent(item, handlers)?);
            }
            Ok(serde_yaml::Value::Mapping(out))
        }
        Value::Intrinsic(intrinsic) => represent_intrinsic(intrinsic, handlers),
    }
}

fn represent_intrinsic(intrinsic: &Intrinsic, handlers: &HandlerTable) -> Result<serde_yaml::Value> {
    let kind = intrinsic.kind();
    if !handlers.is_bound(kind) {
        return Err(CfnTagsError::UnknownTag {
            tag: kind.wire_tag(),
            mode: handlers.mode(),
        });
    }

    let payload = intrinsic.payload();
    if let Value::Intrinsic(inner) = payload {
        return Err(CfnTagsError::Represent(format!(
            "{} payload is a bare {} with no sequence or mapping around it",
            kind,
            inner.kind()
        )));
    }

    Ok(serde_yaml::Value::Tagged(Box::new(TaggedValue {
        tag: Tag::new(kind.wire_tag()),
        value: represent(payload, handlers)?,
    })))
}
