//! Exact-match lookup.

use crate::config::MissPolicy;
use crate::error::{Result, TrieError};

use super::node::NodeId;
use super::table::CommandTrie;

impl<H> CommandTrie<H> {
    /// Returns the handler bound to `name`.
    ///
    /// Only exact matches succeed: a registered name's strict prefix has
    /// no handler of its own and yields `None`. When the walk diverges
    /// partway, the result follows the configured [`MissPolicy`].
    pub fn search<K: AsRef<[u8]>>(&self, name: K) -> Option<&H> {
        let id = self.locate(name.as_ref())?;
        self.node_at(id).handler.as_ref()
    }

    pub fn search_mut<K: AsRef<[u8]>>(&mut self, name: K) -> Option<&mut H> {
        let id = self.locate(name.as_ref())?;
        self.node_at_mut(id).handler.as_mut()
    }

    pub fn contains<K: AsRef<[u8]>>(&self, name: K) -> bool {
        self.search(name).is_some()
    }

    /// Like [`search`](Self::search) but reports a miss as
    /// [`TrieError::NotFound`].
    pub fn get<K: AsRef<[u8]>>(&self, name: K) -> Result<&H> {
        let name = name.as_ref();
        self.search(name).ok_or_else(|| TrieError::not_found(name))
    }

    /// Node whose handler answers a query for `name`, if any.
    fn locate(&self, name: &[u8]) -> Option<NodeId> {
        if name.is_empty() {
            return None;
        }

        let mut level = self.root;
        let mut last = None;
        for &byte in name {
            match self.find_in_level(level, byte) {
                Some(id) => {
                    last = Some(id);
                    level = self.node_at(id).first_child;
                }
                None => return self.on_divergence(name, last),
            }
        }
        last
    }

    fn on_divergence(&self, name: &[u8], last: Option<NodeId>) -> Option<NodeId> {
        match self.config.miss_policy {
            MissPolicy::Strict => None,
            MissPolicy::LastMatched => {
                let id = last.filter(|&id| self.node_at(id).is_terminal())?;
                log::debug!(
                    "query {:?} diverged, answering with last matched node {}",
                    alloc::string::String::from_utf8_lossy(name),
                    id
                );
                Some(id)
            }
        }
    }
}
