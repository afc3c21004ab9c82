//! Error types for trie construction and command dispatch.
//!
//! Misses on plain lookups are not errors: `search` returns `Option`.
//! `NotFound` only appears on APIs that must produce a value
//! (`CommandTrie::get`, `Dispatcher::dispatch`).

use alloc::string::String;

/// Errors produced by [`CommandTrie`](crate::CommandTrie) and
/// [`Dispatcher`](crate::Dispatcher).
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum TrieError {
    /// A command name must contain at least one byte.
    #[error("invalid input: command name must not be empty")]
    InvalidInput,

    /// No handler is bound to the queried name.
    #[error("command not found: {name}")]
    NotFound { name: String },

    /// Node storage could not grow. The trie is left unmodified.
    #[error("resource exhausted: could not reserve {requested} trie node(s)")]
    ResourceExhausted { requested: usize },
}

impl TrieError {
    /// Builds a `NotFound` error from raw key bytes.
    pub(crate) fn not_found(key: &[u8]) -> Self {
        TrieError::NotFound {
            name: String::from_utf8_lossy(key).into_owned(),
        }
    }
}

/// Result alias used throughout the crate.
pub type Result<T> = core::result::Result<T, TrieError>;
