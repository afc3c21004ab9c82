#![cfg_attr(not(feature = "std"), no_std)]

// Feature flags handled:
// - std: default, enables std library integration
// - macros: default, re-exports command_table!

//! # cmd-trie
//!
//! Command-name dispatcher backed by a byte trie.
//!
//! **Exact-match lookup in time proportional to the name length.**
//!
//! ## Architecture
//!
//! Command names are stored byte by byte in a trie. Each level of the
//! trie is a singly linked list of siblings, one node per distinct byte
//! seen at that position (first-child/next-sibling encoding):
//!
//! ```text
//! "find", "file", "frame"
//!
//!   f --> i --> l --> e*
//!   |           |
//!   |           n --> d*
//!   |
//!   +-> r --> a --> m --> e*     ('r' is a sibling of 'i')
//! ```
//!
//! Only nodes marked `*` carry a handler; a path that merely exists
//! (such as "fi") is not a registered command.
//!
//! ```text
//! +-------------------------------------------------------------------+
//! |  Layer 0: Configuration & Errors                                  |
//! |  - TrieConfig, MissPolicy, TrieError                              |
//! +-------------------------------------------------------------------+
//!                                |
//!                                v
//! +-------------------------------------------------------------------+
//! |  Layer 1: Trie Core                                               |
//! |  - TrieNode, NodeId (Storage)                                     |
//! |  - insert, search, traverse (Logic), FrozenTrie (Sharing)         |
//! +-------------------------------------------------------------------+
//!                                |
//!                                v
//! +-------------------------------------------------------------------+
//! |  Layer 2: User API                                                |
//! |  - Dispatcher, dispatcher!, command_table!                        |
//! +-------------------------------------------------------------------+
//! ```
//!
//! ## Quick Start
//!
//! ```
//! use cmd_trie::prelude::*;
//!
//! let mut trie = CommandTrie::new();
//! trie.insert("bookmark", 7).unwrap();
//! trie.insert("book", 8).unwrap();
//!
//! assert_eq!(trie.search("book"), Some(&8));
//! assert_eq!(trie.search("bookmar"), None);
//! ```

// Allow `::cmd_trie` paths emitted by command_table! inside the crate itself
extern crate self as cmd_trie;

extern crate alloc;

// =============================================================================
// Layer 0: Configuration & Errors
// =============================================================================
pub mod config;
pub mod error;

// =============================================================================
// Layer 1: Trie Core
// =============================================================================
pub mod trie;

// =============================================================================
// Layer 2: User API
// =============================================================================
pub mod dispatch;

// Syntax macros (dispatcher!)
pub mod syntax_macros;

// =============================================================================
// Re-exports at Crate Root
// =============================================================================

pub use config::{MissPolicy, TrieConfig};
pub use dispatch::{Dispatcher, Handler};
pub use error::{Result, TrieError};
pub use trie::*;

// Re-export proc-macros
#[cfg(feature = "macros")]
pub use macros::command_table;

/// Common items for building and querying command tables.
pub mod prelude {
    pub use crate::config::{MissPolicy, TrieConfig};
    pub use crate::dispatch::Dispatcher;
    pub use crate::error::TrieError;
    pub use crate::trie::{CommandTrie, FrozenTrie};
    #[cfg(feature = "macros")]
    pub use macros::command_table;
    // Note: dispatcher! is #[macro_export] so it lives at the crate root
}
