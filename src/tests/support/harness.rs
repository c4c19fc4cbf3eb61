// Test harness: logger setup, implementation matrix and thread fan-out.

use dashmap::DashMap;
use once_cell::sync::OnceCell;
use std::sync::Barrier;
use std::thread;
use tracing_subscriber::prelude::*;
use tracing_subscriber::{fmt, EnvFilter};

use crate::config::new_test_config;
use crate::db::{ConcurrentMap, LockedMap, ShardedMap};

static LOGGER: OnceCell<()> = OnceCell::new();

/// Installs a test-writer subscriber once per process, honoring RUST_LOG and
/// otherwise the test config's log level.
pub fn init_test_logger() {
    LOGGER.get_or_init(|| {
        let cfg = new_test_config();
        let filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(cfg.log_level()));
        // Another harness may already own the global subscriber.
        let _ = tracing_subscriber::registry()
            .with(filter)
            .with(fmt::layer().with_test_writer())
            .try_init();
    });
}

pub type DynMap = Box<dyn ConcurrentMap<String, i64>>;

/// Every implementation of the contract, labelled, freshly constructed.
pub fn implementations() -> Vec<(&'static str, DynMap)> {
    let cfg = new_test_config();
    vec![
        (
            "sharded(test config)",
            Box::new(ShardedMap::<String, i64>::with_config(&cfg.map)) as DynMap,
        ),
        ("sharded(default)", Box::new(ShardedMap::<String, i64>::new()) as DynMap),
        ("sharded(1)", Box::new(ShardedMap::<String, i64>::with_shards(1)) as DynMap),
        ("locked", Box::new(LockedMap::<String, i64>::new()) as DynMap),
        ("dashmap", Box::new(DashMap::<String, i64>::new()) as DynMap),
    ]
}

/// Runs `f(worker_id)` on `workers` threads released together by a barrier
/// and returns their results in worker order.
pub fn run_parallel<T, F>(workers: usize, f: F) -> Vec<T>
where
    T: Send,
    F: Fn(usize) -> T + Sync,
{
    let barrier = Barrier::new(workers);
    thread::scope(|s| {
        let handles: Vec<_> = (0..workers)
            .map(|id| {
                let barrier = &barrier;
                let f = &f;
                s.spawn(move || {
                    barrier.wait();
                    f(id)
                })
            })
            .collect();
        handles
            .into_iter()
            .map(|h| h.join().expect("worker panicked"))
            .collect()
    })
}
