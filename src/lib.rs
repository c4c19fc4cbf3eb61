//! Sharded concurrent key-value map.
//!
//! The keyspace is split over a fixed number of independently locked shards,
//! so callers contend only when their keys route to the same shard.

pub mod config;
pub mod db;

#[cfg(test)]
mod tests;

#[cfg(test)]
pub use tests::support;

pub use config::{Config, ConfigError, MapConfig};
pub use db::{
    ConcurrentMap, HashKind, LockedMap, Rendered, RouteKey, Router, ShardedMap, DEFAULT_SHARD_COUNT,
};
