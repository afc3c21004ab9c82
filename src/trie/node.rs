//! Trie node storage: `NodeId` handles and `TrieNode` records.
//!
//! Nodes live in a single arena owned by the trie. Links between nodes are
//! arena indices, so every node has exactly one owner (the arena) and is
//! reachable through exactly one parent link.

use core::fmt;

/// Index of a node inside its trie's arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NodeId(u32);

impl NodeId {
    pub(crate) const MAX: usize = u32::MAX as usize;

    /// Caller guarantees `index <= NodeId::MAX`.
    pub(crate) const fn from_index(index: usize) -> Self {
        NodeId(index as u32)
    }

    /// Position of the node in the arena.
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// One byte position of one or more registered names.
///
/// `first_child` starts the list of bytes that may follow `symbol`;
/// `sibling` is the next alternative byte at the same position.
#[derive(Debug, Clone)]
pub struct TrieNode<H> {
    pub(crate) symbol: u8,
    pub(crate) handler: Option<H>,
    pub(crate) first_child: Option<NodeId>,
    pub(crate) sibling: Option<NodeId>,
}

impl<H> TrieNode<H> {
    pub(crate) const fn new(symbol: u8) -> Self {
        Self {
            symbol,
            handler: None,
            first_child: None,
            sibling: None,
        }
    }

    pub fn symbol(&self) -> u8 {
        self.symbol
    }

    /// Handler bound here, if a registered name ends at this node.
    pub fn handler(&self) -> Option<&H> {
        self.handler.as_ref()
    }

    /// True if a registered name ends at this node.
    pub fn is_terminal(&self) -> bool {
        self.handler.is_some()
    }

    pub fn first_child(&self) -> Option<NodeId> {
        self.first_child
    }

    pub fn sibling(&self) -> Option<NodeId> {
        self.sibling
    }
}
