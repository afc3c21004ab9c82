//! The `CommandTrie` container: arena, root anchor and accessors.
//!
//! ```text
//! inserted: "file", "find"
//!
//!   root
//!    |
//!    f --first_child--> i --> l --> e*
//!                             |
//!                          sibling
//!                             |
//!                             n --> d*
//! ```
//!
//! Nodes marked `*` carry a handler. Every other node is only a path
//! segment, even when it has no children.

use alloc::vec::Vec;

use crate::config::TrieConfig;
use crate::error::{Result, TrieError};

use super::node::{NodeId, TrieNode};

/// Byte trie mapping command names to handlers of type `H`.
///
/// Levels are singly linked sibling lists (first-child/next-sibling
/// encoding). Lookup cost depends only on the query length and the
/// fan-out along its path.
#[derive(Debug, Clone)]
pub struct CommandTrie<H> {
    pub(crate) nodes: Vec<TrieNode<H>>,
    pub(crate) root: Option<NodeId>,
    pub(crate) len: usize,
    pub(crate) config: TrieConfig,
}

impl<H> Default for CommandTrie<H> {
    fn default() -> Self {
        Self::new()
    }
}

impl<H> CommandTrie<H> {
    /// Empty trie with the default configuration.
    pub const fn new() -> Self {
        Self {
            nodes: Vec::new(),
            root: None,
            len: 0,
            config: TrieConfig::new(),
        }
    }

    /// Empty trie using `config`. Fails if the capacity hint cannot be
    /// reserved.
    pub fn with_config(config: TrieConfig) -> Result<Self> {
        let mut trie = Self {
            nodes: Vec::new(),
            root: None,
            len: 0,
            config,
        };
        trie.reserve_nodes(config.capacity)?;
        Ok(trie)
    }

    /// Builds a trie from `(name, handler)` pairs, inserting in order.
    /// Later duplicates replace earlier ones.
    pub fn try_from_entries<I, K>(entries: I) -> Result<Self>
    where
        I: IntoIterator<Item = (K, H)>,
        K: AsRef<[u8]>,
    {
        let mut trie = Self::new();
        trie.extend_entries(entries)?;
        Ok(trie)
    }

    /// Inserts every pair, stopping at the first error.
    pub fn extend_entries<I, K>(&mut self, entries: I) -> Result<()>
    where
        I: IntoIterator<Item = (K, H)>,
        K: AsRef<[u8]>,
    {
        for (name, handler) in entries {
            self.insert(name, handler)?;
        }
        Ok(())
    }

    /// Number of registered names.
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Number of allocated nodes, terminal or not.
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn config(&self) -> &TrieConfig {
        &self.config
    }

    /// First node of the byte-0 sibling list.
    pub fn root(&self) -> Option<NodeId> {
        self.root
    }

    pub fn node(&self, id: NodeId) -> Option<&TrieNode<H>> {
        self.nodes.get(id.index())
    }

    /// Ids handed out by this trie always index into `nodes`.
    pub(crate) fn node_at(&self, id: NodeId) -> &TrieNode<H> {
        &self.nodes[id.index()]
    }

    pub(crate) fn node_at_mut(&mut self, id: NodeId) -> &mut TrieNode<H> {
        &mut self.nodes[id.index()]
    }

    /// Walks the sibling list starting at `start` looking for `byte`.
    pub(crate) fn find_in_level(&self, start: Option<NodeId>, byte: u8) -> Option<NodeId> {
        let mut cursor = start;
        while let Some(id) = cursor {
            let node = self.node_at(id);
            if node.symbol == byte {
                return Some(id);
            }
            cursor = node.sibling;
        }
        None
    }

    /// Makes room for `additional` nodes without touching any link.
    pub(crate) fn reserve_nodes(&mut self, additional: usize) -> Result<()> {
        let exhausted = TrieError::ResourceExhausted {
            requested: additional,
        };
        if self.nodes.len().saturating_add(additional) > NodeId::MAX {
            return Err(exhausted);
        }
        self.nodes.try_reserve(additional).map_err(|_| exhausted)
    }
}
