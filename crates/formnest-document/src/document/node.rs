use std::collections::BTreeMap;

use crate::prelude_internal::*;

/// Raw text of a value together with its coerced form.
#[derive(Debug, Clone, PartialEq)]
pub struct Leaf {
    pub raw: String,
    pub value: Scalar,
}

impl Leaf {
    pub fn new(raw: impl Into<String>) -> Self {
        let raw = raw.into();
        let value = Scalar::coerce(&raw);
        Self { raw, value }
    }
}

/// How a node reads once construction is over.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NodeKind {
    Scalar,
    Array,
    Object,
}

#[derive(Debug, Clone, Default)]
/// A node in the form tree.
///
/// A node may hold a value and children at the same time. Its kind is only
/// resolved when it is read, see [`Node::kind`].
pub struct Node {
    pub scalar: Option<Leaf>,
    pub named: Map<String, NodeId>,
    pub indexed: BTreeMap<usize, NodeId>,
    /// Bracket text each index was first written with, e.g. `007` for 7.
    pub index_keys: BTreeMap<usize, String>,
}

impl Node {
    /// Children win over the node's own value: any indexed child makes the
    /// node an array, otherwise any named child makes it an object.
    /// A node with nothing at all reads as an empty object.
    pub fn kind(&self) -> NodeKind {
        if !self.indexed.is_empty() {
            NodeKind::Array
        } else if !self.named.is_empty() || self.scalar.is_none() {
            NodeKind::Object
        } else {
            NodeKind::Scalar
        }
    }

    pub fn has_children(&self) -> bool {
        !self.indexed.is_empty() || !self.named.is_empty()
    }

    /// Length of the dense array this node materializes to.
    pub fn array_len(&self) -> usize {
        self.indexed
            .last_key_value()
            .map_or(0, |(index, _)| index + 1)
    }

    /// The value this node reads as, if it reads as a scalar.
    pub fn as_scalar(&self) -> Option<&Leaf> {
        match self.kind() {
            NodeKind::Scalar => self.scalar.as_ref(),
            _ => None,
        }
    }

    /// The raw value stored on this node, whether or not children shadow it.
    pub fn raw(&self) -> Option<&str> {
        self.scalar.as_ref().map(|leaf| leaf.raw.as_str())
    }

    pub fn get_named(&self, name: &str) -> Option<NodeId> {
        self.named.get(name).copied()
    }

    pub fn get_indexed(&self, index: usize) -> Option<NodeId> {
        self.indexed.get(&index).copied()
    }

    /// The text an indexed child was written with, or the index in decimal.
    pub fn index_key(&self, index: usize) -> String {
        self.index_keys
            .get(&index)
            .cloned()
            .unwrap_or_else(|| index.to_string())
    }
}
