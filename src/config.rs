//! Runtime configuration for a [`CommandTrie`](crate::CommandTrie).

/// What `search` reports when the walk runs out of matching nodes
/// before the query is fully consumed.
///
/// ```text
/// registered: "book"          query: "bookx"
///
///   b -> o -> o -> k* -> m -> a -> r -> k*
///                  ^     ^
///                  |     'x' has no node at this position
///                  last matched node
///
/// LastMatched => handler of "book"
/// Strict      => None
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MissPolicy {
    /// Report whatever handler sits on the last node the walk matched.
    /// A node without a handler still yields `None`.
    #[default]
    LastMatched,
    /// Report `None` whenever the walk diverges.
    Strict,
}

/// Construction-time settings for a trie.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TrieConfig {
    /// Divergence behaviour of `search`.
    pub miss_policy: MissPolicy,
    /// Number of nodes to reserve up front.
    pub capacity: usize,
}

impl TrieConfig {
    pub const fn new() -> Self {
        Self {
            miss_policy: MissPolicy::LastMatched,
            capacity: 0,
        }
    }

    pub const fn with_miss_policy(mut self, miss_policy: MissPolicy) -> Self {
        self.miss_policy = miss_policy;
        self
    }

    pub const fn with_capacity(mut self, capacity: usize) -> Self {
        self.capacity = capacity;
        self
    }

    /// Shorthand for `TrieConfig::new().with_miss_policy(MissPolicy::Strict)`.
    pub const fn strict() -> Self {
        Self::new().with_miss_policy(MissPolicy::Strict)
    }
}
