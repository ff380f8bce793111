//! cfn-yaml-tags - CloudFormation short-form YAML tags
//!
//! Loads YAML templates that use tags such as `!Ref`, `!Join` and `!Sub`
//! into a document tree, writes them back out losslessly, and expands them
//! into the canonical `{"Fn::Join": [...]}` JSON form.
//!
//! ```no_run
//! use cfn_yaml_tags::domain::{document, TagRegistry, TrustMode};
//!
//! let registry = TagRegistry::new();
//! let value = document::load(&registry, TrustMode::Unrestricted, "A: !Ref B.Arn")?;
//! let json = document::to_json(&value)?;
//! assert_eq!(json["A"]["Fn::GetAtt"][1], "Arn");
//! # Ok::<(), cfn_yaml_tags::CfnTagsError>(())
//! ```

pub mod application;
pub mod cli;
pub mod domain;
pub mod error;
pub mod infrastructure;

pub use domain::{Intrinsic, TagKind, TagRegistry, TrustMode, Value};
pub use error::CfnTagsError;
