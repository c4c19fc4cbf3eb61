//! Sharded map storage: per-shard stores, the orchestrating map and the
//! single-lock baseline.

pub mod dash;
pub mod locked;
pub mod map;
pub mod shard;


// Re-export main types
pub use locked::LockedMap;
pub use map::{ShardedMap, DEFAULT_SHARD_COUNT};
pub use shard::Shard;
