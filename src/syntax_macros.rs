//! Declarative construction macros.

// =============================================================================
// dispatcher! - Build a Dispatcher from name/closure pairs
// =============================================================================

/// Build a [`Dispatcher`](crate::Dispatcher) from `name => handler` pairs.
///
/// Evaluates to `Result<Dispatcher<R>, TrieError>`; registration stops at
/// the first invalid name.
///
/// # Example
///
/// ```
/// let commands = cmd_trie::dispatcher! {
///     "run" => || "running",
///     "return" => || "returning",
/// }
/// .unwrap();
///
/// assert_eq!(commands.dispatch("return").unwrap(), "returning");
/// ```
#[macro_export]
macro_rules! dispatcher {
    ($($name:expr => $handler:expr),* $(,)?) => {
        ::core::result::Result::<_, $crate::TrieError>::Ok($crate::Dispatcher::new())
            $(
                .and_then(|mut dispatcher| {
                    dispatcher.register($name, $handler)?;
                    ::core::result::Result::Ok(dispatcher)
                })
            )*
    };
}
