//! Insertion: bind a handler to a command name.

use crate::error::{Result, TrieError};

use super::node::{NodeId, TrieNode};
use super::table::CommandTrie;

/// A link position that may receive a freshly created node.
#[derive(Debug, Clone, Copy)]
enum Slot {
    Root,
    FirstChild(NodeId),
    Sibling(NodeId),
}

impl<H> CommandTrie<H> {
    /// Binds `handler` to `name`.
    ///
    /// Missing byte positions are created on the way down. If `name` was
    /// already registered its handler is replaced and the old one is
    /// returned; the structure does not grow in that case.
    ///
    /// Node storage for the whole insertion is reserved before the first
    /// link is written, so a `ResourceExhausted` error leaves the trie
    /// exactly as it was.
    ///
    /// ```
    /// use cmd_trie::CommandTrie;
    ///
    /// let mut trie = CommandTrie::new();
    /// assert_eq!(trie.insert("run", 1).unwrap(), None);
    /// assert_eq!(trie.insert("run", 2).unwrap(), Some(1));
    /// assert_eq!(trie.search("run"), Some(&2));
    /// ```
    pub fn insert<K: AsRef<[u8]>>(&mut self, name: K, handler: H) -> Result<Option<H>> {
        let name = name.as_ref();
        let (&first, rest) = name.split_first().ok_or(TrieError::InvalidInput)?;

        let missing = self.missing_nodes(name);
        self.reserve_nodes(missing)?;

        let mut id = self.find_or_link(Slot::Root, first);
        for &byte in rest {
            id = self.find_or_link(Slot::FirstChild(id), byte);
        }

        let previous = self.node_at_mut(id).handler.replace(handler);
        if previous.is_some() {
            log::debug!(
                "replaced handler for {:?}",
                alloc::string::String::from_utf8_lossy(name)
            );
        } else {
            self.len += 1;
        }
        Ok(previous)
    }

    /// Number of nodes an insertion of `name` would create.
    fn missing_nodes(&self, name: &[u8]) -> usize {
        let mut level = self.root;
        for (depth, &byte) in name.iter().enumerate() {
            match self.find_in_level(level, byte) {
                Some(id) => level = self.node_at(id).first_child,
                None => return name.len() - depth,
            }
        }
        0
    }

    /// Follows siblings from `slot` until `byte` matches, appending a new
    /// node at the end of the list if none does.
    fn find_or_link(&mut self, mut slot: Slot, byte: u8) -> NodeId {
        loop {
            match self.slot_target(slot) {
                Some(id) if self.node_at(id).symbol == byte => return id,
                Some(id) => slot = Slot::Sibling(id),
                None => return self.link_new(slot, byte),
            }
        }
    }

    fn slot_target(&self, slot: Slot) -> Option<NodeId> {
        match slot {
            Slot::Root => self.root,
            Slot::FirstChild(id) => self.node_at(id).first_child,
            Slot::Sibling(id) => self.node_at(id).sibling,
        }
    }

    /// Pushes a complete node, then writes the single link pointing at it.
    /// Capacity was reserved by `insert`, so the push does not reallocate.
    fn link_new(&mut self, slot: Slot, byte: u8) -> NodeId {
        let id = NodeId::from_index(self.nodes.len());
        self.nodes.push(TrieNode::new(byte));
        match slot {
            Slot::Root => self.root = Some(id),
            Slot::FirstChild(parent) => self.node_at_mut(parent).first_child = Some(id),
            Slot::Sibling(prev) => self.node_at_mut(prev).sibling = Some(id),
        }
        log::trace!(
            "add byte {:?} as node {} (nodes: {})",
            byte as char,
            id,
            self.nodes.len()
        );
        id
    }
}

#[cfg(test)]
mod tests {
    use crate::{CommandTrie, TrieError};

    #[test]
    fn test_empty_name_is_rejected_without_mutation() {
        let mut trie = CommandTrie::new();
        trie.insert("bt", 5).unwrap();

        assert_eq!(trie.insert("", 0), Err(TrieError::InvalidInput));
        assert_eq!(trie.node_count(), 2);
        assert_eq!(trie.len(), 1);
    }

    #[test]
    fn test_shared_prefix_reuses_nodes() {
        let mut trie = CommandTrie::new();
        trie.insert("file", 1).unwrap();
        assert_eq!(trie.node_count(), 4);

        // "fi" is shared, "nd" is new
        trie.insert("find", 2).unwrap();
        assert_eq!(trie.node_count(), 6);

        // "f" is shared, "rame" is new
        trie.insert("frame", 3).unwrap();
        assert_eq!(trie.node_count(), 10);
    }

    #[test]
    fn test_prefix_insert_marks_existing_node() {
        let mut trie = CommandTrie::new();
        trie.insert("bookmark", 7).unwrap();
        let before = trie.node_count();

        trie.insert("book", 8).unwrap();
        assert_eq!(trie.node_count(), before);
        assert_eq!(trie.len(), 2);
    }

    #[test]
    fn test_missing_nodes_counts_from_divergence() {
        let mut trie = CommandTrie::new();
        trie.insert("break", ()).unwrap();

        assert_eq!(trie.missing_nodes(b"break"), 0);
        assert_eq!(trie.missing_nodes(b"bre"), 0);
        assert_eq!(trie.missing_nodes(b"bt"), 1);
        assert_eq!(trie.missing_nodes(b"run"), 3);
        assert_eq!(trie.missing_nodes(b"breaks"), 1);
    }

    #[test]
    fn test_new_level_entries_append_to_sibling_list() {
        let mut trie = CommandTrie::new();
        trie.insert("file", ()).unwrap();
        trie.insert("break", ()).unwrap();
        trie.insert("run", ()).unwrap();

        let f = trie.root().unwrap();
        let b = trie.node(f).unwrap().sibling().unwrap();
        let r = trie.node(b).unwrap().sibling().unwrap();
        assert_eq!(trie.node(f).unwrap().symbol(), b'f');
        assert_eq!(trie.node(b).unwrap().symbol(), b'b');
        assert_eq!(trie.node(r).unwrap().symbol(), b'r');
        assert_eq!(trie.node(r).unwrap().sibling(), None);
    }
}
