//! LSF DOM - Document Object Model
//!
//! Arena-backed DOM tree for the site scripts. Nodes are addressed by
//! [`NodeId`] and never move; removing a node detaches its subtree.

mod classlist;
mod document;
mod node;
mod selector;
mod style;
mod tree;

use std::fmt;

pub use classlist::DOMTokenList;
pub use document::Document;
pub use node::{Attribute, ElementData, Node, NodeData};
pub use selector::{Selector, SimpleSelector};
pub use style::StyleDeclaration;
pub use tree::{Ancestors, Children, Descendants, DomTree};

/// Node identifier (index into arena)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(pub(crate) u32);

impl NodeId {
    /// Root node ID
    pub const ROOT: NodeId = NodeId(0);

    /// Sentinel for "no node"
    pub const NONE: NodeId = NodeId(u32::MAX);

    /// Check if this ID points at a node
    #[inline]
    pub fn is_valid(self) -> bool {
        self != Self::NONE
    }

    #[inline]
    pub(crate) fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_valid() {
            write!(f, "node#{}", self.0)
        } else {
            f.write_str("node#none")
        }
    }
}
