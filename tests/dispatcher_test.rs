use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::thread;

use cmd_trie::{dispatcher, Dispatcher, MissPolicy, TrieConfig, TrieError};

#[test]
fn test_dispatcher_macro_builds_registry() {
    let commands = dispatcher! {
        "file" => || "file",
        "find" => || "find",
        "frame" => || "frame",
    }
    .unwrap();

    assert_eq!(commands.len(), 3);
    for name in ["file", "find", "frame"] {
        assert_eq!(commands.dispatch(name), Ok(name));
    }
    assert!(commands.lookup("f").is_none());
}

#[test]
fn test_strict_dispatcher_ignores_divergent_queries() {
    let mut lenient = Dispatcher::new();
    let mut strict = Dispatcher::with_config(TrieConfig::strict()).unwrap();
    for commands in [&mut lenient, &mut strict] {
        commands.register("run", || 9).unwrap();
    }

    assert_eq!(lenient.trie().config().miss_policy, MissPolicy::LastMatched);
    assert_eq!(lenient.dispatch("runx"), Ok(9));
    assert_eq!(
        strict.dispatch("runx"),
        Err(TrieError::NotFound {
            name: "runx".into()
        })
    );
}

#[test]
fn test_frozen_dispatcher_shared_between_threads() {
    let hits = Arc::new(AtomicUsize::new(0));
    let mut commands = Dispatcher::new();
    for name in ["bt", "break", "book", "bookmark"] {
        let hits = Arc::clone(&hits);
        commands
            .register(name, move || {
                hits.fetch_add(1, Ordering::SeqCst);
            })
            .unwrap();
    }
    let frozen = commands.freeze();

    let workers: Vec<_> = (0..4)
        .map(|_| {
            let frozen = frozen.clone();
            thread::spawn(move || {
                for name in ["bt", "book", "boo", "bookmark"] {
                    if let Some(handler) = frozen.search(name) {
                        handler();
                    }
                }
            })
        })
        .collect();
    for worker in workers {
        worker.join().unwrap();
    }

    // "boo" is only a path segment
    assert_eq!(hits.load(Ordering::SeqCst), 4 * 3);
}

#[test]
fn test_capacity_hint_is_reserved() {
    let commands: Dispatcher<()> =
        Dispatcher::with_config(TrieConfig::new().with_capacity(64)).unwrap();
    assert!(commands.is_empty());
    assert_eq!(commands.trie().config().capacity, 64);
}

#[test]
fn test_unreservable_capacity_is_resource_exhausted() {
    let result: Result<Dispatcher<()>, _> =
        Dispatcher::with_config(TrieConfig::new().with_capacity(usize::MAX));
    assert_eq!(
        result.unwrap_err(),
        TrieError::ResourceExhausted {
            requested: usize::MAX
        }
    );
}
