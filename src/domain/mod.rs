//! Domain layer - Tagged values and their conversion protocols

pub mod canonical;
pub mod construct;
pub mod document;
pub mod intrinsic;
pub mod registry;
pub mod report;
pub mod represent;
pub mod tag;
pub mod value;

pub use canonical::canonicalize;
pub use construct::construct;
pub use document::{dump, load, to_json, to_json_string};
pub use intrinsic::Intrinsic;
pub use registry::{HandlerTable, TagRegistry, TrustMode};
pub use report::TagUsage;
pub use represent::represent;
pub use tag::{Shape, TagDefinition, TagKind};
pub use value::{Key, Mapping, NodeKind, Value};
