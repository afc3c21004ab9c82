//! Command dispatcher - name registration, lookup and invocation.
//!
//! A [`Dispatcher`] is a [`CommandTrie`] whose handlers are zero-argument
//! callables. Registering a name binds a closure; dispatching a name runs
//! the closure bound to it.

use alloc::boxed::Box;
use alloc::vec::Vec;
use core::fmt;

use crate::config::TrieConfig;
use crate::error::{Result, TrieError};
use crate::trie::{CommandTrie, Commands, FrozenTrie};

/// Boxed command handler returning `R`.
pub type Handler<R> = Box<dyn Fn() -> R + Send + Sync>;

/// Registry of named commands.
///
/// ```
/// use cmd_trie::Dispatcher;
///
/// let mut commands = Dispatcher::new();
/// commands.register("bt", || "backtrace").unwrap();
///
/// assert_eq!(commands.dispatch("bt").unwrap(), "backtrace");
/// assert!(commands.dispatch("bx").is_err());
/// ```
pub struct Dispatcher<R = ()> {
    trie: CommandTrie<Handler<R>>,
}

impl<R> Default for Dispatcher<R> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R> fmt::Debug for Dispatcher<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let names: Vec<_> = self
            .trie
            .commands()
            .map(|name| alloc::string::String::from_utf8_lossy(&name).into_owned())
            .collect();
        f.debug_struct("Dispatcher").field("commands", &names).finish()
    }
}

impl<R> Dispatcher<R> {
    pub const fn new() -> Self {
        Self {
            trie: CommandTrie::new(),
        }
    }

    pub fn with_config(config: TrieConfig) -> Result<Self> {
        Ok(Self {
            trie: CommandTrie::with_config(config)?,
        })
    }

    /// Binds `handler` to `name`. Returns `true` when an earlier binding
    /// for the same name was replaced.
    pub fn register<K, F>(&mut self, name: K, handler: F) -> Result<bool>
    where
        K: AsRef<[u8]>,
        F: Fn() -> R + Send + Sync + 'static,
    {
        let replaced = self.trie.insert(name, Box::new(handler))?;
        Ok(replaced.is_some())
    }

    /// Handler bound to `name`, following the trie's search rules.
    pub fn lookup<K: AsRef<[u8]>>(&self, name: K) -> Option<&(dyn Fn() -> R + Send + Sync)> {
        self.trie.search(name).map(|handler| &**handler)
    }

    /// Runs the handler bound to `name`.
    pub fn dispatch<K: AsRef<[u8]>>(&self, name: K) -> Result<R> {
        let name = name.as_ref();
        match self.lookup(name) {
            Some(handler) => Ok(handler()),
            None => {
                log::debug!(
                    "no handler for {:?}",
                    alloc::string::String::from_utf8_lossy(name)
                );
                Err(TrieError::not_found(name))
            }
        }
    }

    pub fn len(&self) -> usize {
        self.trie.len()
    }

    pub fn is_empty(&self) -> bool {
        self.trie.is_empty()
    }

    /// Registered names as raw bytes.
    pub fn commands(&self) -> Commands<'_, Handler<R>> {
        self.trie.commands()
    }

    pub fn trie(&self) -> &CommandTrie<Handler<R>> {
        &self.trie
    }

    /// Ends registration; the handlers can then be shared between threads.
    pub fn freeze(self) -> FrozenTrie<Handler<R>> {
        self.trie.freeze()
    }
}

impl<R> From<CommandTrie<Handler<R>>> for Dispatcher<R> {
    fn from(trie: CommandTrie<Handler<R>>) -> Self {
        Self { trie }
    }
}
