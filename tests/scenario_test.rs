//! The ten-command debugger table and its fixed queries.

use cmd_trie::prelude::*;

const COMMANDS: [(&str, u8); 10] = [
    ("file", 1),
    ("find", 2),
    ("frame", 3),
    ("break", 4),
    ("bt", 5),
    ("flush", 6),
    ("bookmark", 7),
    ("book", 8),
    ("run", 9),
    ("return", 10),
];

fn build(config: TrieConfig) -> CommandTrie<u8> {
    let mut trie = CommandTrie::with_config(config).unwrap();
    trie.extend_entries(COMMANDS).unwrap();
    trie
}

// =============================================================================
// Fixed queries
// =============================================================================

#[test]
fn test_fixed_queries() {
    for config in [TrieConfig::default(), TrieConfig::strict()] {
        let trie = build(config);

        assert_eq!(trie.search("find"), Some(&2));
        assert_eq!(trie.search("ru"), None);
        assert_eq!(trie.search("retur"), None);
        assert_eq!(trie.search("flush"), Some(&6));
        assert_eq!(trie.search("bt"), Some(&5));
        assert_eq!(trie.search("brkae"), None);
        assert_eq!(trie.search("book"), Some(&8));
        assert_eq!(trie.search("bookmar"), None);
    }
}

#[test]
fn test_every_command_round_trips() {
    let trie = build(TrieConfig::default());
    assert_eq!(trie.len(), COMMANDS.len());
    for (name, code) in COMMANDS {
        assert_eq!(trie.search(name), Some(&code), "lookup of {name}");
    }
}

#[test]
fn test_node_count_matches_distinct_prefixes() {
    let trie = build(TrieConfig::default());

    // f, fi, fil, file, fin, find, fr, fra, fram, frame, fl, flu, flus, flush,
    // b, br, bre, brea, break, bt, bo, boo, book, bookm, bookma, bookmar,
    // bookmark, r, ru, run, re, ret, retu, retur, return
    assert_eq!(trie.node_count(), 35);
}

#[test]
fn test_commands_enumerates_all_names() {
    let trie = build(TrieConfig::default());
    let mut names: Vec<String> = trie
        .commands()
        .map(|name| String::from_utf8(name).unwrap())
        .collect();
    names.sort();

    let mut expected: Vec<String> = COMMANDS.iter().map(|(n, _)| n.to_string()).collect();
    expected.sort();
    assert_eq!(names, expected);
}

// =============================================================================
// Divergence handling
// =============================================================================

#[test]
fn test_divergence_after_terminal_depends_on_policy() {
    let lenient = build(TrieConfig::default());
    let strict = build(TrieConfig::strict());

    // "book" matches, then 'x' has no node below the 'k'
    assert_eq!(lenient.search("bookx"), Some(&8));
    assert_eq!(strict.search("bookx"), None);

    // "run" matches, then 's' has no node below the 'n'
    assert_eq!(lenient.search("runs"), Some(&9));
    assert_eq!(strict.search("runs"), None);

    // "bt" is terminal but the walk never reaches it for "bx"
    assert_eq!(lenient.search("bx"), None);
}

#[test]
fn test_prefix_of_registered_name_is_not_a_match() {
    let mut trie = CommandTrie::new();
    trie.insert("bookmark", 7u8).unwrap();

    assert_eq!(trie.search("book"), None);
    assert_eq!(trie.search("bookmark"), Some(&7));
}
