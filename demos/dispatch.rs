// Registers ten debugger-style commands, then looks up a fixed list of
// queries and runs whatever handler each one resolves to.
//
// Run with `RUST_LOG=debug cargo run --example dispatch` to see the
// trie's own logging.

use cmd_trie::{command_table, CommandTrie, TrieError};

fn cmd_file() {
    println!("this is func file");
}
fn cmd_find() {
    println!("this is func find");
}
fn cmd_frame() {
    println!("this is func frame");
}
fn cmd_break() {
    println!("this is func break");
}
fn cmd_bt() {
    println!("this is func bt");
}
fn cmd_flush() {
    println!("this is func flush");
}
fn cmd_bookmark() {
    println!("this is func bookmark");
}
fn cmd_book() {
    println!("this is func book");
}
fn cmd_run() {
    println!("this is func run");
}
fn cmd_return() {
    println!("this is func return");
}

const QUERIES: [&str; 8] = ["find", "ru", "retur", "flush", "bt", "brkae", "book", "bookmar"];

fn build() -> Result<CommandTrie<fn()>, TrieError> {
    command_table! {
        handler: fn();
        "file" => cmd_file,
        "find" => cmd_find,
        "frame" => cmd_frame,
        "break" => cmd_break,
        "bt" => cmd_bt,
        "flush" => cmd_flush,
        "bookmark" => cmd_bookmark,
        "book" => cmd_book,
        "run" => cmd_run,
        "return" => cmd_return,
    }
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp(None)
        .init();

    let trie = match build() {
        Ok(trie) => trie.freeze(),
        Err(e) => {
            log::error!("{}", e);
            std::process::exit(1);
        }
    };

    log::info!("{} commands in {} nodes", trie.len(), trie.as_trie().node_count());
    log::debug!("trie layout:\n{}", trie.dump());

    for query in QUERIES {
        print!("we are finding cmd [{}]:\t", query);
        match trie.search(query) {
            Some(handler) => handler(),
            None => println!("cmd [{}] NOT found", query),
        }
    }
}
