//! Tests for the command_table! macro

use cmd_trie::{command_table, CommandTrie, Dispatcher, TrieError};

fn one() -> u32 {
    1
}
fn two() -> u32 {
    2
}

#[test]
fn test_fn_items_unify_with_handler_type() {
    let table = command_table! {
        handler: fn() -> u32;
        "file" => one,
        "find" => two,
    }
    .unwrap();

    assert_eq!(table.len(), 2);
    assert_eq!(table.search("file").map(|f| f()), Some(1));
    assert_eq!(table.search("find").map(|f| f()), Some(2));
    assert_eq!(table.search("fi"), None);
}

#[test]
fn test_plain_values_need_no_header() {
    let table: CommandTrie<u8> = command_table! {
        "run" => 9,
        b"return" => 10,
    }
    .unwrap();

    assert_eq!(table.search("run"), Some(&9));
    assert_eq!(table.search(b"return"), Some(&10));
}

#[test]
fn test_boxed_closures_become_a_dispatcher() {
    let table = command_table! {
        handler: cmd_trie::Handler<&'static str>;
        "bt" => Box::new(|| "backtrace"),
        "break" => Box::new(|| "breakpoint"),
    }
    .unwrap();

    let commands = Dispatcher::from(table);
    assert_eq!(commands.dispatch("bt"), Ok("backtrace"));
    assert_eq!(commands.dispatch("break"), Ok("breakpoint"));
    assert_eq!(
        commands.dispatch("brk"),
        Err(TrieError::NotFound {
            name: "brk".to_string()
        })
    );
}

#[test]
fn test_empty_table_with_header() {
    let table = command_table! {
        handler: fn();
    }
    .unwrap();

    assert!(table.is_empty());
    assert_eq!(table.node_count(), 0);
}
