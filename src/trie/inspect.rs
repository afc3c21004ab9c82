//! Runtime inspection of a trie
//!
//! Depth-first walks (first child before sibling) for debugging, listing
//! registered names and dumping the node structure.

use alloc::vec::Vec;
use core::fmt;

use super::node::NodeId;
use super::table::CommandTrie;

/// One node reached by [`CommandTrie::traverse`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Visit {
    pub id: NodeId,
    pub symbol: u8,
    /// Byte position of `symbol` within the names passing through it.
    pub depth: usize,
    pub has_handler: bool,
}

/// Lazy depth-first walk over every node. Clone it to restart.
pub struct Traverse<'a, H> {
    trie: &'a CommandTrie<H>,
    stack: Vec<(NodeId, usize)>,
}

// Manual impl: cloning the walk never clones handlers
impl<H> Clone for Traverse<'_, H> {
    fn clone(&self) -> Self {
        Self {
            trie: self.trie,
            stack: self.stack.clone(),
        }
    }
}

impl<'a, H> Iterator for Traverse<'a, H> {
    type Item = Visit;

    fn next(&mut self) -> Option<Visit> {
        let (id, depth) = self.stack.pop()?;
        let node = self.trie.node_at(id);

        // Pushed in reverse so the child subtree is fully walked before
        // the sibling is reached.
        if let Some(sibling) = node.sibling {
            self.stack.push((sibling, depth));
        }
        if let Some(child) = node.first_child {
            self.stack.push((child, depth + 1));
        }

        Some(Visit {
            id,
            symbol: node.symbol,
            depth,
            has_handler: node.is_terminal(),
        })
    }
}

/// Registered names, in traversal order.
pub struct Commands<'a, H> {
    walk: Traverse<'a, H>,
    prefix: Vec<u8>,
}

impl<H> Clone for Commands<'_, H> {
    fn clone(&self) -> Self {
        Self {
            walk: self.walk.clone(),
            prefix: self.prefix.clone(),
        }
    }
}

impl<'a, H> Iterator for Commands<'a, H> {
    type Item = Vec<u8>;

    fn next(&mut self) -> Option<Vec<u8>> {
        for visit in self.walk.by_ref() {
            self.prefix.truncate(visit.depth);
            self.prefix.push(visit.symbol);
            if visit.has_handler {
                return Some(self.prefix.clone());
            }
        }
        None
    }
}

/// Indented diagnostic rendering of the node structure.
///
/// ```text
/// [f] -
///   [i] -
///     [l] -
///       [e] handler
///     [n] -
///       [d] handler
/// ```
pub struct NodeDump<'a, H> {
    trie: &'a CommandTrie<H>,
}

impl<H> fmt::Display for NodeDump<'_, H> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.trie.root.is_none() {
            return writeln!(f, "(empty)");
        }
        for visit in self.trie.traverse() {
            let mark = if visit.has_handler { "handler" } else { "-" };
            writeln!(
                f,
                "{:indent$}[{}] {}",
                "",
                core::ascii::escape_default(visit.symbol),
                mark,
                indent = visit.depth * 2
            )?;
        }
        Ok(())
    }
}

impl<H> CommandTrie<H> {
    pub fn traverse(&self) -> Traverse<'_, H> {
        let mut stack = Vec::new();
        if let Some(root) = self.root {
            stack.push((root, 0));
        }
        Traverse { trie: self, stack }
    }

    /// Every registered name as raw bytes.
    pub fn commands(&self) -> Commands<'_, H> {
        Commands {
            walk: self.traverse(),
            prefix: Vec::new(),
        }
    }

    pub fn dump(&self) -> NodeDump<'_, H> {
        NodeDump { trie: self }
    }
}
