//! Counting intrinsic function usage in a document

use crate::domain::tag::TagKind;
use crate::domain::value::Value;

/// Per-tag usage counts for one or more documents
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TagUsage {
    counts: [usize; TagKind::COUNT],
    dotted_refs: usize,
}

impl TagUsage {
    /// Count every intrinsic in `value`, nested ones included
    pub fn collect(value: &Value) -> Self {
        let mut usage = TagUsage::default();
        usage.record(value);
        usage
    }

    /// Add the intrinsics in `value` to these counts
    pub fn record(&mut self, value: &Value) {
        match value {
            Value::Sequence(items) => items.iter().for_each(|item| self.record(item)),
            Value::Mapping(map) => map.values().for_each(|item| self.record(item)),
            Value::Intrinsic(intrinsic) => {
                self.counts[intrinsic.kind().index()] += 1;
                if intrinsic.dotted_reference().is_some() {
                    self.dotted_refs += 1;
                }
                self.record(intrinsic.payload());
            }
            _ => {}
        }
    }

    /// Merge counts from another report
    pub fn merge(&mut self, other: &TagUsage) {
        for (count, extra) in self.counts.iter_mut().zip(other.counts) {
            *count += extra;
        }
        self.dotted_refs += other.dotted_refs;
    }

    pub fn count(&self, kind: TagKind) -> usize {
        self.counts[kind.index()]
    }

    pub fn total(&self) -> usize {
        self.counts.iter().sum()
    }

    /// `!Ref` uses written in the `Resource.Attribute` shorthand
    pub fn dotted_refs(&self) -> usize {
        self.dotted_refs
    }

    /// Tags that appear at least once, in table order
    pub fn used(&self) -> impl Iterator<Item = (TagKind, usize)> + '_ {
        TagKind::ALL
            .into_iter()
            .map(|kind| (kind, self.count(kind)))
            .filter(|(_, count)| *count > 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::document::load;
    use crate::domain::registry::{TagRegistry, TrustMode};

    fn usage_of(text: &str) -> TagUsage {
        let registry = TagRegistry::new();
        TagUsage::collect(&load(&registry, TrustMode::Unrestricted, text).unwrap())
    }

    #[test]
    fn test_plain_document_has_no_usage() {
        let usage = usage_of("a: 1\nb: [x, y]\n");
        assert_eq!(usage.total(), 0);
        assert_eq!(usage.used().count(), 0);
    }

    #[test]
    fn test_counts_nested_tags() {
        let usage = usage_of(
            "A: !If [C, !Ref X, !Join ['', [!Ref Y.Arn, !Sub '${Z}']]]\nB: !Ref W\n",
        );
        assert_eq!(usage.count(TagKind::If), 1);
        assert_eq!(usage.count(TagKind::Ref), 3);
        assert_eq!(usage.count(TagKind::Join), 1);
        assert_eq!(usage.count(TagKind::Sub), 1);
        assert_eq!(usage.total(), 6);
        assert_eq!(usage.dotted_refs(), 1);

        let used: Vec<TagKind> = usage.used().map(|(kind, _)| kind).collect();
        assert_eq!(
            used,
            vec![TagKind::Ref, TagKind::If, TagKind::Join, TagKind::Sub]
        );
    }

    #[test]
    fn test_merge() {
        let mut a = usage_of("x: !Ref A.B\n");
        let b = usage_of("y: [!Ref C, !Base64 d]\n");
        a.merge(&b);
        assert_eq!(a.count(TagKind::Ref), 2);
        assert_eq!(a.count(TagKind::Base64), 1);
        assert_eq!(a.dotted_refs(), 1);
    }
}
