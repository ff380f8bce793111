//! Loading and dumping whole YAML documents

use crate::domain::canonical::canonicalize;
use crate::domain::construct::construct;
use crate::domain::registry::{TagRegistry, TrustMode};
use crate::domain::represent::represent;
use crate::domain::value::Value;
use crate::error::Result;
use tracing::debug;

/// Parse YAML text and construct a document tree
pub fn load(registry: &TagRegistry, mode: TrustMode, text: &str) -> Result<Value> {
    let node: serde_yaml::Value = serde_yaml::from_str(text)?;
    let value = construct(&node, registry.handlers(mode))?;
    debug!(%mode, "loaded document");
    Ok(value)
}

/// Serialize a document tree back to YAML text
pub fn dump(registry: &TagRegistry, mode: TrustMode, value: &Value) -> Result<String> {
    let node = represent(value, registry.handlers(mode))?;
    Ok(serde_yaml::to_string(&node)?)
}

/// Expand a document tree into the canonical JSON object model
pub fn to_json(value: &Value) -> Result<serde_json::Value> {
    canonicalize(value)
}

/// Expand a document tree and encode it as JSON text
pub fn to_json_string(value: &Value, pretty: bool) -> Result<String> {
    let canonical = canonicalize(value)?;
    let text = if pretty {
        serde_json::to_string_pretty(&canonical)?
    } else {
        serde_json::to_string(&canonical)?
    };
    Ok(text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::intrinsic::Intrinsic;
    use crate::error::CfnTagsError;
    use serde_json::json;

    #[test]
    fn test_load_and_dump() {
        let registry = TagRegistry::new();
        let value = load(&registry, TrustMode::Unrestricted, "Name: !Ref Bucket\n").unwrap();
        assert_eq!(
            value.get("Name"),
            Some(&Value::from(Intrinsic::reference("Bucket").unwrap()))
        );

        let text = dump(&registry, TrustMode::Unrestricted, &value).unwrap();
        assert_eq!(text, "Name: !Ref Bucket\n");
    }

    #[test]
    fn test_dump_then_load_is_identity() {
        let registry = TagRegistry::new();
        let value = load(
            &registry,
            TrustMode::Unrestricted,
            "Url: !Sub\n- 'https://${Host}/${Path}'\n- Host: !GetAtt [Api, Endpoint]\n  Path: v1\n",
        )
        .unwrap();

        let text = dump(&registry, TrustMode::Unrestricted, &value).unwrap();
        let reloaded = load(&registry, TrustMode::Unrestricted, &text).unwrap();
        assert_eq!(reloaded, value);
    }

    #[test]
    fn test_restricted_before_and_after_mark_safe() {
        let mut registry = TagRegistry::new();
        let text = "Key: !ImportValue SharedVpc\n";

        let err = load(&registry, TrustMode::Restricted, text).unwrap_err();
        assert!(matches!(err, CfnTagsError::UnknownTag { .. }));

        registry.mark_safe();
        let restricted = load(&registry, TrustMode::Restricted, text).unwrap();
        let unrestricted = load(&registry, TrustMode::Unrestricted, text).unwrap();
        assert_eq!(restricted, unrestricted);
    }

    #[test]
    fn test_invalid_yaml_is_yaml_error() {
        let registry = TagRegistry::new();
        let err = load(&registry, TrustMode::Unrestricted, "a: [1, 2\n").unwrap_err();
        assert!(matches!(err, CfnTagsError::Yaml(_)));
    }

    #[test]
    fn test_to_json_string() {
        let registry = TagRegistry::new();
        let value = load(&registry, TrustMode::Unrestricted, "Out: !Ref Db.Port\n").unwrap();

        assert_eq!(
            to_json(&value).unwrap(),
            json!({"Out": {"Fn::GetAtt": ["Db", "Port"]}})
        );
        assert_eq!(
            to_json_string(&value, false).unwrap(),
            r#"{"Out":{"Fn::GetAtt":["Db","Port"]}}"#
        );
        assert!(to_json_string(&value, true).unwrap().contains('\n'));
    }

    #[test]
    fn test_value_serializes_canonically() {
        let value = Value::from(Intrinsic::base64("abc").unwrap());
        assert_eq!(
            serde_json::to_string(&value).unwrap(),
            r#"{"Fn::Base64":"abc"}"#
        );
    }
}
