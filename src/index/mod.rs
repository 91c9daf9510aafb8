// SPDX-License-Identifier: MIT OR Apache-2.0

//! In-memory documentation index tree.
//!
//! The external indexer writes a nested JSON object where ordinary keys name
//! child entries and reserved keys (`__class`, `__basic`, `__detail`,
//! `__install`, `index`) carry metadata. [`load`] turns that object into the
//! tagged [`IndexNode`] structure used by every query in this crate, so the
//! rest of the code never sniffs key prefixes.

pub mod load;
pub mod walk;

use serde::Serialize;
use std::fmt;

pub use load::load_index;
pub use walk::{descend, walk_exact, CandidateSet};

/// Display classification of an index entry (`__class`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ClassTag {
    Method,
    Property,
    Object,
    Doc,
}

impl ClassTag {
    /// Parse the indexer's `__class` value. Unknown classes yield `None`.
    pub fn parse(raw: &str) -> Option<Self> {
        match raw {
            "method" => Some(ClassTag::Method),
            "property" => Some(ClassTag::Property),
            "object" => Some(ClassTag::Object),
            "doc" => Some(ClassTag::Doc),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ClassTag::Method => "method",
            ClassTag::Property => "property",
            ClassTag::Object => "object",
            ClassTag::Doc => "doc",
        }
    }
}

impl fmt::Display for ClassTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A document variant that may exist for an entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Variant {
    Basic,
    Detail,
    Install,
}

impl Variant {
    /// File extension used when loading this variant.
    pub fn extension(self) -> &'static str {
        match self {
            Variant::Basic => ".md",
            Variant::Detail => ".detail.md",
            Variant::Install => ".install.md",
        }
    }

    /// Reserved index key announcing this variant.
    pub fn reserved_key(self) -> &'static str {
        match self {
            Variant::Basic => "__basic",
            Variant::Detail => "__detail",
            Variant::Install => "__install",
        }
    }

    fn bit(self) -> u8 {
        match self {
            Variant::Basic => 0b001,
            Variant::Detail => 0b010,
            Variant::Install => 0b100,
        }
    }
}

/// Set of [`Variant`]s available for a node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Variants(u8);

impl Variants {
    pub const NONE: Variants = Variants(0);

    pub fn with(mut self, variant: Variant) -> Self {
        self.insert(variant);
        self
    }

    pub fn insert(&mut self, variant: Variant) {
        self.0 |= variant.bit();
    }

    pub fn contains(self, variant: Variant) -> bool {
        self.0 & variant.bit() != 0
    }

    pub fn is_empty(self) -> bool {
        self.0 == 0
    }

    pub fn iter(self) -> impl Iterator<Item = Variant> {
        [Variant::Basic, Variant::Detail, Variant::Install]
            .into_iter()
            .filter(move |variant| self.contains(*variant))
    }
}

impl Serialize for Variants {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        use serde::ser::SerializeSeq;
        let mut seq = serializer.serialize_seq(None)?;
        for variant in self.iter() {
            let name = match variant {
                Variant::Basic => "basic",
                Variant::Detail => "detail",
                Variant::Install => "install",
            };
            seq.serialize_element(name)?;
        }
        seq.end()
    }
}

/// One level of the documentation index.
///
/// Children keep the order the indexer wrote them in; that order reflects
/// crawl order and is shown as-is for docs.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct IndexNode {
    pub children: Vec<(String, IndexNode)>,
    pub class: Option<ClassTag>,
    pub variants: Variants,
    pub index_leaf: Option<Box<IndexNode>>,
}

impl IndexNode {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder used by tests and by the loader.
    pub fn with_child(mut self, name: impl Into<String>, child: IndexNode) -> Self {
        self.children.push((name.into(), child));
        self
    }

    pub fn with_class(mut self, class: ClassTag) -> Self {
        self.class = Some(class);
        self
    }

    pub fn with_variant(mut self, variant: Variant) -> Self {
        self.variants.insert(variant);
        self
    }

    pub fn with_index_leaf(mut self, leaf: IndexNode) -> Self {
        self.index_leaf = Some(Box::new(leaf));
        self
    }

    /// Shorthand for a leaf exposing only the basic document.
    pub fn leaf() -> Self {
        Self::default().with_variant(Variant::Basic)
    }

    /// Exact, case-sensitive child lookup.
    pub fn child(&self, name: &str) -> Option<&IndexNode> {
        self.children
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, node)| node)
    }

    pub fn child_names(&self) -> impl Iterator<Item = &str> {
        self.children.iter().map(|(key, _)| key.as_str())
    }

    pub fn has_children(&self) -> bool {
        !self.children.is_empty()
    }

    /// Whether the entry has a page of its own: a basic document or an
    /// `index` leaf.
    pub fn has_document(&self) -> bool {
        self.index_leaf.is_some() || self.has_variant(Variant::Basic)
    }

    pub fn has_variant(&self, variant: Variant) -> bool {
        self.variants.contains(variant)
    }

    /// Every resolvable document below this node as command-word paths,
    /// depth-first in crawl order.
    pub fn documents(&self) -> Vec<Vec<String>> {
        let mut out = Vec::new();
        let mut prefix = Vec::new();
        collect_documents(self, &mut prefix, &mut out);
        out
    }
}

fn collect_documents(node: &IndexNode, prefix: &mut Vec<String>, out: &mut Vec<Vec<String>>) {
    if node.has_document() && !prefix.is_empty() {
        out.push(prefix.clone());
    }
    for (name, child) in &node.children {
        prefix.push(name.clone());
        collect_documents(child, prefix, out);
        prefix.pop();
    }
}
