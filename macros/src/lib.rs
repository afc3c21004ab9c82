//! Procedural macros for the cmd-trie command dispatcher
//!
//! | Macro | Target | Purpose |
//! |-------|--------|---------|
//! | `command_table!{}` | - | Build a `CommandTrie` with compile-time checked names |

use proc_macro::TokenStream;
use syn::parse_macro_input;

mod user;

// =============================================================================
// User-facing Macros (user/)
// =============================================================================

/// Build a command trie from literal names.
///
/// Names are checked at compile time: an empty name or a name listed twice
/// is an error. Expands to an expression of type
/// `Result<CommandTrie<H>, TrieError>`.
///
/// # Usage
/// ```ignore
/// fn on_file() { println!("file"); }
/// fn on_find() { println!("find"); }
///
/// // fn items have distinct types; name the handler type to unify them
/// let table = command_table! {
///     handler: fn();
///     "file" => on_file,
///     "find" => on_find,
/// }?;
///
/// // Handlers of a single type need no header
/// let codes = command_table! {
///     "run" => 9,
///     b"return" => 10,
/// }?;
/// ```
#[proc_macro]
pub fn command_table(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as user::CommandTableInput);
    user::expand_command_table(input).into()
}
