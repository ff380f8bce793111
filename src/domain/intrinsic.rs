//! Tagged values: one intrinsic function call per instance

use crate::domain::tag::{Shape, TagKind};
use crate::domain::value::Value;
use crate::error::{CfnTagsError, Result};
use std::fmt;

/// An intrinsic function call such as `!Join [" ", [a, b]]`.
///
/// The payload always satisfies the shape declared for `kind`. Two
/// intrinsics are equal only when they have the same kind and deeply equal
/// payloads.
#[derive(Debug, Clone, PartialEq)]
pub struct Intrinsic {
    kind: TagKind,
    payload: Value,
}

impl Intrinsic {
    /// Wrap a payload, checking it against the declared shape.
    ///
    /// A scalar payload is stored as text, the same as a loaded `!Ref 123`.
    pub fn new(kind: TagKind, payload: Value) -> Result<Self> {
        let found = payload.kind();
        if !kind.shape().accepts(found) {
            return Err(CfnTagsError::ParseShape {
                tag: kind.wire_tag(),
                expected: kind.shape(),
                found,
            });
        }
        let payload = match payload.scalar_text() {
            Some(text) => Value::String(text),
            None => payload,
        };
        Ok(Intrinsic { kind, payload })
    }

    /// Build without a shape check; construction has already sniffed the node
    pub(crate) fn from_checked(kind: TagKind, payload: Value) -> Self {
        debug_assert!(kind.shape().accepts(payload.kind()));
        Intrinsic { kind, payload }
    }

    /// Build a value that may break the shape invariant
    #[cfg(test)]
    pub(crate) fn unchecked(kind: TagKind, payload: Value) -> Self {
        Intrinsic { kind, payload }
    }

    pub fn kind(&self) -> TagKind {
        self.kind
    }

    pub fn shape(&self) -> Shape {
        self.kind.shape()
    }

    pub fn payload(&self) -> &Value {
        &self.payload
    }

    pub fn into_payload(self) -> Value {
        self.payload
    }

    /// Split a dotted `!Ref Resource.Attribute` on its first dot.
    ///
    /// Returns `None` for any other kind or payload.
    pub fn dotted_reference(&self) -> Option<(&str, &str)> {
        if self.kind != TagKind::Ref {
            return None;
        }
        self.payload.as_str()?.split_once('.')
    }
}

impl fmt::Display for Intrinsic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.kind, self.payload)
    }
}

macro_rules! intrinsic_constructors {
    ($($(#[$doc:meta])* $fn_name:ident => $kind:ident;)*) => {
        impl Intrinsic {
            $(
                $(#[$doc])*
                pub fn $fn_name(payload: impl Into<Value>) -> Result<Self> {
                    Intrinsic::new(TagKind::$kind, payload.into())
                }
            )*
        }
    };
}

intrinsic_constructors! {
    /// `!Ref`
    reference => Ref;
    and => And;
    condition => Condition;
    base64 => Base64;
    equals => Equals;
    find_in_map => FindInMap;
    get_att => GetAtt;
    get_azs => GetAZs;
    /// `!If`
    if_ => If;
    import_value => ImportValue;
    join => Join;
    not => Not;
    or => Or;
    select => Select;
    split => Split;
    sub => Sub;
}
