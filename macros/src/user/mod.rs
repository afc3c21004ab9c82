//! User-facing macro implementations
//!
//! | Macro | Usage | Purpose |
//! |-------|-------|---------|
//! | `command_table!` | function macro | Build a command trie from literals |

mod command_table;

pub use command_table::{expand_command_table, CommandTableInput};
