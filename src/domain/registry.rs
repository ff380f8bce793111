//! Handler tables for the unrestricted and restricted loader/dumper pairs
//!
//! A [`TagRegistry`] is an explicit context value. Reads borrow it shared,
//! re-initialization and [`TagRegistry::mark_safe`] borrow it mutably, so a
//! concurrent rebuild while documents are being parsed cannot compile.

use crate::domain::tag::{normalize_wire_tag, TagDefinition, TagKind};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use tracing::{debug, trace};

/// Which loader/dumper pair a document is processed with
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum TrustMode {
    /// Default pair; tags are bound at initialization
    #[default]
    Unrestricted,
    /// Pair for untrusted input; tags are bound only by `mark_safe`
    Restricted,
}

impl fmt::Display for TrustMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TrustMode::Unrestricted => f.write_str("unrestricted"),
            TrustMode::Restricted => f.write_str("restricted"),
        }
    }
}

impl FromStr for TrustMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "unrestricted" => Ok(TrustMode::Unrestricted),
            "restricted" | "safe" => Ok(TrustMode::Restricted),
            _ => Err(format!(
                "Invalid trust mode: '{}'. Valid modes are: unrestricted, restricted",
                s
            )),
        }
    }
}

/// Wire tag to variant bindings for one trust mode
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HandlerTable {
    mode: TrustMode,
    bindings: IndexMap<String, TagKind>,
}

impl HandlerTable {
    fn new(mode: TrustMode) -> Self {
        HandlerTable {
            mode,
            bindings: IndexMap::new(),
        }
    }

    fn bind(&mut self, definition: &TagDefinition) {
        trace!(tag = %definition.wire_tag, mode = %self.mode, "binding tag handler");
        self.bindings
            .insert(definition.wire_tag.clone(), definition.kind);
    }

    pub fn mode(&self) -> TrustMode {
        self.mode
    }

    /// Find the variant bound to a tag, with or without the `!` prefix
    pub fn lookup(&self, tag: &str) -> Option<TagKind> {
        self.bindings.get(&*normalize_wire_tag(tag)).copied()
    }

    pub fn is_bound(&self, kind: TagKind) -> bool {
        self.bindings.get(&kind.wire_tag()) == Some(&kind)
    }

    /// Bound variants in binding order
    pub fn kinds(&self) -> impl Iterator<Item = TagKind> + '_ {
        self.bindings.values().copied()
    }

    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }
}

/// The tag variants plus their handler bindings
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TagRegistry {
    definitions: Vec<TagDefinition>,
    unrestricted: HandlerTable,
    restricted: HandlerTable,
}

impl TagRegistry {
    /// Build the variant set and bind it into the unrestricted pair
    pub fn new() -> Self {
        let definitions: Vec<TagDefinition> = TagKind::definitions().collect();
        let mut unrestricted = HandlerTable::new(TrustMode::Unrestricted);
        for definition in &definitions {
            unrestricted.bind(definition);
        }
        debug!(tags = definitions.len(), "initialized tag registry");

        TagRegistry {
            definitions,
            unrestricted,
            restricted: HandlerTable::new(TrustMode::Restricted),
        }
    }

    /// Build a registry, optionally marking every tag safe right away
    pub fn with_safe(safe: bool) -> Self {
        let mut registry = TagRegistry::new();
        if safe {
            registry.mark_safe();
        }
        registry
    }

    /// Discard every binding, restricted ones included, and rebuild.
    ///
    /// The replacement is built completely before it is swapped in.
    pub fn reinitialize(&mut self) {
        *self = TagRegistry::new();
    }

    /// Bind every variant into the restricted pair.
    ///
    /// Repeatable; does not rebuild the variant set.
    pub fn mark_safe(&mut self) {
        for definition in &self.definitions {
            self.restricted.bind(definition);
        }
        debug!(tags = self.restricted.len(), "marked tags safe");
    }

    /// Whether the restricted pair accepts every tag
    pub fn is_safe(&self) -> bool {
        self.definitions
            .iter()
            .all(|definition| self.restricted.is_bound(definition.kind))
    }

    pub fn definitions(&self) -> &[TagDefinition] {
        &self.definitions
    }

    pub fn handlers(&self, mode: TrustMode) -> &HandlerTable {
        match mode {
            TrustMode::Unrestricted => &self.unrestricted,
            TrustMode::Restricted => &self.restricted,
        }
    }
}

impl Default for TagRegistry {
    fn default() -> Self {
        TagRegistry::new()
    }
}
