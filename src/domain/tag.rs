//! The fixed table of CloudFormation short-form tags

use crate::domain::value::NodeKind;
use std::borrow::Cow;
use std::fmt;

/// Prefix that marks a YAML local tag
pub const TAG_PREFIX: char = '!';

/// Structural kind a tag's payload must take
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Shape {
    Scalar,
    Sequence,
    Mapping,
    /// Sequence when the node is one, scalar otherwise
    SequenceOrScalar,
    /// Mapping when the node is one, scalar otherwise
    MappingOrScalar,
}

impl Shape {
    /// Check whether a node of the given kind satisfies this shape.
    ///
    /// Dual shapes inspect the node kind directly instead of trying the
    /// primary shape and falling back on failure.
    pub fn accepts(self, found: NodeKind) -> bool {
        matches!(
            (self, found),
            (Shape::Scalar, NodeKind::Scalar)
                | (Shape::Sequence, NodeKind::Sequence)
                | (Shape::Mapping, NodeKind::Mapping)
                | (
                    Shape::SequenceOrScalar,
                    NodeKind::Sequence | NodeKind::Scalar
                )
                | (Shape::MappingOrScalar, NodeKind::Mapping | NodeKind::Scalar)
        )
    }

    /// Short YAML sample of a node with this shape
    pub fn example(self) -> &'static str {
        match self {
            Shape::Scalar => "!Tag value",
            Shape::Sequence => "!Tag [a, b]",
            Shape::Mapping => "!Tag {key: value}",
            Shape::SequenceOrScalar => "!Tag value  or  !Tag [a, b]",
            Shape::MappingOrScalar => "!Tag value  or  !Tag {key: value}",
        }
    }
}

impl fmt::Display for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Shape::Scalar => "scalar",
            Shape::Sequence => "sequence",
            Shape::Mapping => "mapping",
            Shape::SequenceOrScalar => "sequence or scalar",
            Shape::MappingOrScalar => "mapping or scalar",
        };
        f.write_str(name)
    }
}

/// One variant per CloudFormation short-form tag, in table order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum TagKind {
    Ref,
    And,
    Condition,
    Base64,
    Equals,
    FindInMap,
    GetAtt,
    GetAZs,
    If,
    ImportValue,
    Join,
    Not,
    Or,
    Select,
    Split,
    Sub,
}

/// (kind, display name, tag name, shape)
const TABLE: [(TagKind, &str, &str, Shape); TagKind::COUNT] = [
    (TagKind::Ref, "Ref", "Ref", Shape::Scalar),
    (TagKind::And, "Fn::And", "And", Shape::Sequence),
    (TagKind::Condition, "Fn::Condition", "Condition", Shape::Scalar),
    (TagKind::Base64, "Fn::Base64", "Base64", Shape::Scalar),
    (TagKind::Equals, "Fn::Equals", "Equals", Shape::Sequence),
    (TagKind::FindInMap, "Fn::FindInMap", "FindInMap", Shape::Sequence),
    (TagKind::GetAtt, "Fn::GetAtt", "GetAtt", Shape::Sequence),
    (TagKind::GetAZs, "Fn::GetAZs", "GetAZs", Shape::Scalar),
    (TagKind::If, "Fn::If", "If", Shape::Sequence),
    (TagKind::ImportValue, "Fn::ImportValue", "ImportValue", Shape::Scalar),
    (TagKind::Join, "Fn::Join", "Join", Shape::Sequence),
    (TagKind::Not, "Fn::Not", "Not", Shape::Sequence),
    (TagKind::Or, "Fn::Or", "Or", Shape::Sequence),
    (TagKind::Select, "Fn::Select", "Select", Shape::Sequence),
    (TagKind::Split, "Fn::Split", "Split", Shape::Sequence),
    (TagKind::Sub, "Fn::Sub", "Sub", Shape::SequenceOrScalar),
];

impl TagKind {
    pub const COUNT: usize = 16;

    /// All variants in table order
    pub const ALL: [TagKind; TagKind::COUNT] = [
        TagKind::Ref,
        TagKind::And,
        TagKind::Condition,
        TagKind::Base64,
        TagKind::Equals,
        TagKind::FindInMap,
        TagKind::GetAtt,
        TagKind::GetAZs,
        TagKind::If,
        TagKind::ImportValue,
        TagKind::Join,
        TagKind::Not,
        TagKind::Or,
        TagKind::Select,
        TagKind::Split,
        TagKind::Sub,
    ];

    /// Position of this variant in the table
    pub fn index(self) -> usize {
        self as usize
    }

    /// Key used in the canonical (JSON) form, e.g. `Fn::Join`
    pub fn display_name(self) -> &'static str {
        TABLE[self.index()].1
    }

    /// Tag name without the `!` prefix, e.g. `Join`
    pub fn name(self) -> &'static str {
        TABLE[self.index()].2
    }

    /// Tag as written in YAML, e.g. `!Join`
    pub fn wire_tag(self) -> String {
        normalize_wire_tag(self.name()).into_owned()
    }

    pub fn shape(self) -> Shape {
        TABLE[self.index()].3
    }

    /// Look up a variant by tag, with or without the `!` prefix
    pub fn from_wire_tag(tag: &str) -> Option<TagKind> {
        let name = tag.strip_prefix(TAG_PREFIX).unwrap_or(tag);
        TagKind::ALL.into_iter().find(|kind| kind.name() == name)
    }

    /// Row view of this variant
    pub fn definition(self) -> TagDefinition {
        TagDefinition {
            kind: self,
            display_name: self.display_name(),
            wire_tag: self.wire_tag(),
            shape: self.shape(),
        }
    }

    /// All rows of the table, in order
    pub fn definitions() -> impl Iterator<Item = TagDefinition> {
        TagKind::ALL.into_iter().map(TagKind::definition)
    }
}

impl fmt::Display for TagKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", TAG_PREFIX, self.name())
    }
}

/// A row of the tag table with its wire tag normalized
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TagDefinition {
    pub kind: TagKind,
    pub display_name: &'static str,
    pub wire_tag: String,
    pub shape: Shape,
}

/// Make sure a tag begins with `!`
pub fn normalize_wire_tag(tag: &str) -> Cow<'_, str> {
    if tag.starts_with(TAG_PREFIX) {
        Cow::Borrowed(tag)
    } else {
        Cow::Owned(format!("{}{}", TAG_PREFIX, tag))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_order_matches_all() {
        for (i, kind) in TagKind::ALL.iter().enumerate() {
            assert_eq!(kind.index(), i);
            assert_eq!(TABLE[i].0, *kind);
        }
    }

    #[test]
    fn test_display_names() {
        assert_eq!(TagKind::Ref.display_name(), "Ref");
        assert_eq!(TagKind::Join.display_name(), "Fn::Join");
        assert_eq!(TagKind::GetAZs.display_name(), "Fn::GetAZs");
        for kind in TagKind::ALL {
            if kind != TagKind::Ref {
                assert_eq!(kind.display_name(), format!("Fn::{}", kind.name()));
            }
        }
    }

    #[test]
    fn test_wire_tags_are_prefixed() {
        for definition in TagKind::definitions() {
            assert!(definition.wire_tag.starts_with('!'));
            assert_eq!(definition.wire_tag, definition.kind.to_string());
        }
        assert_eq!(TagKind::Sub.wire_tag(), "!Sub");
    }

    #[test]
    fn test_shapes() {
        assert_eq!(TagKind::Ref.shape(), Shape::Scalar);
        assert_eq!(TagKind::GetAtt.shape(), Shape::Sequence);
        assert_eq!(TagKind::Sub.shape(), Shape::SequenceOrScalar);

        let scalars: Vec<TagKind> = TagKind::ALL
            .into_iter()
            .filter(|k| k.shape() == Shape::Scalar)
            .collect();
        assert_eq!(
            scalars,
            vec![
                TagKind::Ref,
                TagKind::Condition,
                TagKind::Base64,
                TagKind::GetAZs,
                TagKind::ImportValue
            ]
        );
    }

    #[test]
    fn test_from_wire_tag() {
        assert_eq!(TagKind::from_wire_tag("!Ref"), Some(TagKind::Ref));
        assert_eq!(TagKind::from_wire_tag("FindInMap"), Some(TagKind::FindInMap));
        assert_eq!(TagKind::from_wire_tag("!ref"), None);
        assert_eq!(TagKind::from_wire_tag("!Fn::Join"), None);
        assert_eq!(TagKind::from_wire_tag(""), None);
    }

    #[test]
    fn test_normalize_wire_tag() {
        assert_eq!(normalize_wire_tag("Ref"), "!Ref");
        assert_eq!(normalize_wire_tag("!Ref"), "!Ref");
    }

    #[test]
    fn test_shape_accepts() {
        assert!(Shape::Scalar.accepts(NodeKind::Scalar));
        assert!(!Shape::Scalar.accepts(NodeKind::Sequence));
        assert!(!Shape::Sequence.accepts(NodeKind::Scalar));
        assert!(Shape::SequenceOrScalar.accepts(NodeKind::Sequence));
        assert!(Shape::SequenceOrScalar.accepts(NodeKind::Scalar));
        assert!(!Shape::SequenceOrScalar.accepts(NodeKind::Mapping));
        assert!(Shape::MappingOrScalar.accepts(NodeKind::Mapping));
        assert!(Shape::MappingOrScalar.accepts(NodeKind::Scalar));
        assert!(!Shape::MappingOrScalar.accepts(NodeKind::Sequence));

        for shape in [
            Shape::Scalar,
            Shape::Sequence,
            Shape::Mapping,
            Shape::SequenceOrScalar,
            Shape::MappingOrScalar,
        ] {
            assert!(!shape.accepts(NodeKind::Tagged));
        }
    }
}
