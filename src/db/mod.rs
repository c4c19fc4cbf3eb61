//! Map contract, key routing and sharded storage.

pub mod contract;
pub mod router;
pub mod storage;

// Re-export main types
pub use contract::ConcurrentMap;
pub use router::{HashKind, Rendered, RouteKey, Router};
pub use storage::{LockedMap, ShardedMap, DEFAULT_SHARD_COUNT};
