//! # Trie Core
//!
//! Storage and lookup logic of the command dispatcher.
//!
//! - **Nodes**: `TrieNode` records in an arena, addressed by `NodeId`.
//! - **Operations**: `insert` (bind), `search` (exact match), `traverse` (inspect).
//! - **Phases**: `CommandTrie` while building, `FrozenTrie` once shared.
//!
//! Lookup cost is proportional to the query length.

pub mod node;
pub mod table;
mod insert;
mod search;
pub mod inspect;
pub mod frozen;

// Re-export key types at trie level
pub use node::{NodeId, TrieNode};
pub use table::CommandTrie;
pub use inspect::{Commands, NodeDump, Traverse, Visit};
pub use frozen::FrozenTrie;
