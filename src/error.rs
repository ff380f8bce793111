//! Error types for cfn-yaml-tags

use crate::domain::registry::TrustMode;
use crate::domain::tag::Shape;
use crate::domain::value::NodeKind;
use std::path::PathBuf;
use thiserror::Error;

/// Main error type for cfn-yaml-tags
#[derive(Debug, Error)]
pub enum CfnTagsError {
    #[error("{tag} expects a {expected} node, found a {found} node")]
    ParseShape {
        tag: String,
        expected: Shape,
        found: NodeKind,
    },

    #[error("Unknown tag {tag} in {mode} mode")]
    UnknownTag { tag: String, mode: TrustMode },

    #[error("Cannot canonicalize: {0}")]
    Canonicalize(String),

    #[error("Cannot represent: {0}")]
    Represent(String),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("No configuration found in {0}")]
    NoConfig(PathBuf),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("TOML deserialization error: {0}")]
    TomlDeserialize(#[from] toml::de::Error),

    #[error("TOML serialization error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),
}

impl CfnTagsError {
    /// Get the exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            CfnTagsError::UnknownTag { .. } => 2,
            CfnTagsError::ParseShape { .. } => 3,
            CfnTagsError::Canonicalize(_) | CfnTagsError::Represent(_) => 4,
            _ => 1,
        }
    }

    /// Get a user-friendly error message with suggestions
    pub fn display_with_suggestions(&self) -> String {
        match self {
            CfnTagsError::UnknownTag { tag, mode } => match mode {
                TrustMode::Restricted => format!(
                    "{}\n\n\
                    Suggestions:\n\
                    • The restricted loader only accepts tags marked safe\n\
                    • Set 'mark_safe = true' in .cfn-yaml-tags.toml\n\
                    • Or run without --safe to use the unrestricted loader",
                    self
                ),
                TrustMode::Unrestricted => format!(
                    "{}\n\n\
                    Supported tags:\n\
                    • !Ref, !Condition, !Base64, !GetAZs, !ImportValue\n\
                    • !And, !Or, !Not, !Equals, !If\n\
                    • !FindInMap, !GetAtt, !Join, !Select, !Split, !Sub\n\n\
                    Run 'cfn-yaml-tags tags' to see the full table.\n\
                    Note: '{}' is case-sensitive.",
                    self, tag
                ),
            },
            CfnTagsError::ParseShape { expected, .. } => format!(
                "{}\n\n\
                Expected form:\n\
                {}",
                self,
                expected.example()
            ),
            CfnTagsError::NoConfig(path) => format!(
                "No configuration found in {}\n\n\
                Suggestions:\n\
                • Run 'cfn-yaml-tags init' to create .cfn-yaml-tags.toml\n\
                • Set CFN_YAML_TAGS_CONFIG to the path of a config file",
                path.display()
            ),
            CfnTagsError::Config(msg) => {
                if msg.contains("Unknown config key") {
                    format!(
                        "{}\n\n\
                        Example: cfn-yaml-tags config safe true",
                        msg
                    )
                } else {
                    msg.clone()
                }
            }
            _ => self.to_string(),
        }
    }
}

/// Result type using CfnTagsError
pub type Result<T> = std::result::Result<T, CfnTagsError>;
