//! Read-only phase of a trie.
//!
//! A command table is typically built once at startup and only queried
//! afterwards. Freezing moves the trie behind an `Arc` so any number of
//! readers (on any number of threads, when `H: Send + Sync`) can share it
//! without locking.

use alloc::sync::Arc;

use crate::config::TrieConfig;
use crate::error::Result;

use super::inspect::{Commands, NodeDump, Traverse};
use super::table::CommandTrie;

/// Immutable, cheaply clonable view of a [`CommandTrie`].
#[derive(Debug)]
pub struct FrozenTrie<H> {
    inner: Arc<CommandTrie<H>>,
}

impl<H> Clone for FrozenTrie<H> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<H> CommandTrie<H> {
    /// Ends the build phase.
    pub fn freeze(mut self) -> FrozenTrie<H> {
        self.nodes.shrink_to_fit();
        log::debug!(
            "froze command trie: {} command(s), {} node(s)",
            self.len,
            self.nodes.len()
        );
        FrozenTrie {
            inner: Arc::new(self),
        }
    }
}

impl<H> FrozenTrie<H> {
    pub fn search<K: AsRef<[u8]>>(&self, name: K) -> Option<&H> {
        self.inner.search(name)
    }

    pub fn get<K: AsRef<[u8]>>(&self, name: K) -> Result<&H> {
        self.inner.get(name)
    }

    pub fn contains<K: AsRef<[u8]>>(&self, name: K) -> bool {
        self.inner.contains(name)
    }

    pub fn len(&self) -> usize {
        self.inner.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    pub fn config(&self) -> &TrieConfig {
        self.inner.config()
    }

    pub fn traverse(&self) -> Traverse<'_, H> {
        self.inner.traverse()
    }

    pub fn commands(&self) -> Commands<'_, H> {
        self.inner.commands()
    }

    pub fn dump(&self) -> NodeDump<'_, H> {
        self.inner.dump()
    }

    pub fn as_trie(&self) -> &CommandTrie<H> {
        &self.inner
    }

    /// Returns the trie for further insertion if this is the last handle.
    pub fn thaw(self) -> core::result::Result<CommandTrie<H>, Self> {
        Arc::try_unwrap(self.inner).map_err(|inner| FrozenTrie { inner })
    }
}

impl<H> From<CommandTrie<H>> for FrozenTrie<H> {
    fn from(trie: CommandTrie<H>) -> Self {
        trie.freeze()
    }
}
