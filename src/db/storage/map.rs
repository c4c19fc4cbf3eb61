//! Sharded concurrent map: fans single-key operations out to one shard and
//! walks every shard for `range`.

use std::borrow::Borrow;
use std::fmt;
use std::hash::Hash;

use tracing::{debug, warn};

use crate::config::MapConfig;
use crate::db::contract::ConcurrentMap;
use crate::db::router::{HashKind, RouteKey, Router};

use super::shard::Shard;

/// Shard count used when none (or zero) is configured.
pub const DEFAULT_SHARD_COUNT: usize = 64;

/// ShardedMap partitions its keyspace over a fixed array of independently
/// locked shards.
///
/// The shard array is never resized, so reaching `shards[idx]` needs no
/// synchronization; only the store inside each shard is locked.
///
/// # Consistency
///
/// Operations on one key are linearizable. There is no global snapshot:
/// `range` visits shards one after another, and entries written to or
/// removed from a shard that was already visited (or not yet reached) may be
/// missed or seen in their newer state. Putting a map-wide lock around
/// `range` would serialize every writer behind it.
pub struct ShardedMap<K, V> {
    router: Router,
    shards: Box<[Shard<K, V>]>,
}

impl<K, V> ShardedMap<K, V>
where
    K: Eq + Hash + RouteKey,
{
    /// Creates a map with [`DEFAULT_SHARD_COUNT`] shards.
    pub fn new() -> Self {
        Self::build(DEFAULT_SHARD_COUNT, HashKind::default(), 0)
    }

    /// Creates a map with exactly `shards` shards. Zero falls back to
    /// [`DEFAULT_SHARD_COUNT`].
    pub fn with_shards(shards: usize) -> Self {
        Self::build(normalize_shards(shards), HashKind::default(), 0)
    }

    /// Creates a map from the `map` section of the configuration.
    pub fn with_config(cfg: &MapConfig) -> Self {
        let shards = normalize_shards(cfg.shards.unwrap_or(DEFAULT_SHARD_COUNT));
        Self::build(
            shards,
            cfg.hasher.unwrap_or_default(),
            cfg.shard_capacity.unwrap_or(0),
        )
    }

    fn build(num_shards: usize, kind: HashKind, capacity: usize) -> Self {
        let shards: Vec<Shard<K, V>> = (0..num_shards)
            .map(|id| Shard::new(id, capacity))
            .collect();

        debug!(
            component = "shardmap",
            event = "map_created",
            shards = num_shards,
            hasher = ?kind,
            shard_capacity = capacity,
            "sharded map created"
        );

        Self {
            router: Router::new(num_shards, kind),
            shards: shards.into_boxed_slice(),
        }
    }

    /// Gets the shard for a given key.
    #[inline]
    fn shard<Q>(&self, key: &Q) -> &Shard<K, V>
    where
        Q: RouteKey + ?Sized,
    {
        &self.shards[self.router.route(key)]
    }

    /// Index of the shard that owns `key`.
    pub fn shard_of<Q>(&self, key: &Q) -> usize
    where
        K: Borrow<Q>,
        Q: RouteKey + ?Sized,
    {
        self.router.route(key)
    }

    /// Sets or replaces the value for `key`.
    pub fn store(&self, key: K, value: V) {
        self.shard(&key).store(key, value);
    }

    /// Gets a clone of the value for `key`.
    pub fn load<Q>(&self, key: &Q) -> Option<V>
    where
        K: Borrow<Q>,
        Q: Eq + Hash + RouteKey + ?Sized,
        V: Clone,
    {
        self.shard(key).load(key)
    }

    /// Returns `(existing, true)` or inserts and returns `(value, false)`.
    /// Atomic within the owning shard.
    pub fn load_or_store(&self, key: K, value: V) -> (V, bool)
    where
        V: Clone,
    {
        self.shard(&key).load_or_store(key, value)
    }

    /// Removes `key` and returns the removed value, if any.
    pub fn delete<Q>(&self, key: &Q) -> Option<V>
    where
        K: Borrow<Q>,
        Q: Eq + Hash + RouteKey + ?Sized,
    {
        self.shard(key).delete(key)
    }

    /// Visits entries shard by shard, in shard index order.
    ///
    /// Returning `false` from `f` stops the current shard only; traversal
    /// resumes with the next shard. Use [`ShardedMap::range_until`] to stop
    /// the whole walk.
    pub fn range<F>(&self, mut f: F)
    where
        F: FnMut(&K, &V) -> bool,
        K: Clone,
        V: Clone,
    {
        for shard in self.shards.iter() {
            shard.range(&mut f);
        }
    }

    /// Visits entries shard by shard until `f` returns `false`.
    /// Returns `true` if every shard was walked to the end.
    pub fn range_until<F>(&self, mut f: F) -> bool
    where
        F: FnMut(&K, &V) -> bool,
        K: Clone,
        V: Clone,
    {
        for shard in self.shards.iter() {
            if !shard.range(&mut f) {
                return false;
            }
        }
        true
    }

    /// Removes every entry, one shard at a time.
    pub fn clear(&self) {
        let mut removed = 0;
        for shard in self.shards.iter() {
            removed += shard.clear();
        }
        debug!(
            component = "shardmap",
            event = "map_cleared",
            removed = removed,
            "sharded map cleared"
        );
    }

    /// Gets the number of items, summed over shards without a global lock.
    pub fn len(&self) -> usize {
        self.shards.iter().map(Shard::len).sum()
    }

    /// Checks if the map is empty.
    pub fn is_empty(&self) -> bool {
        self.shards.iter().all(Shard::is_empty)
    }

    /// Per-shard item counts, indexed by shard.
    pub fn shard_lens(&self) -> Vec<usize> {
        self.shards.iter().map(Shard::len).collect()
    }

    pub fn shard_count(&self) -> usize {
        self.shards.len()
    }

    pub fn hash_kind(&self) -> HashKind {
        self.router.kind()
    }
}

fn normalize_shards(shards: usize) -> usize {
    if shards == 0 {
        warn!(
            component = "shardmap",
            event = "shards_normalized",
            shards = DEFAULT_SHARD_COUNT,
            "zero shard count requested, using default"
        );
        DEFAULT_SHARD_COUNT
    } else {
        shards
    }
}

impl<K, V> Default for ShardedMap<K, V>
where
    K: Eq + Hash + RouteKey,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<K, V> fmt::Debug for ShardedMap<K, V>
where
    K: Eq + Hash + RouteKey,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ShardedMap")
            .field("shards", &self.shard_count())
            .field("hasher", &self.hash_kind())
            .field("len", &self.len())
            .finish()
    }
}

impl<K, V> ConcurrentMap<K, V> for ShardedMap<K, V>
where
    K: Eq + Hash + RouteKey + Clone + Send + Sync,
    V: Clone + Send + Sync,
{
    fn store(&self, key: K, value: V) {
        ShardedMap::store(self, key, value);
    }

    fn load(&self, key: &K) -> Option<V> {
        ShardedMap::load(self, key)
    }

    fn load_or_store(&self, key: K, value: V) -> (V, bool) {
        ShardedMap::load_or_store(self, key, value)
    }

    fn delete(&self, key: &K) {
        ShardedMap::delete(self, key);
    }

    /// Early stop is local to the shard being visited.
    fn range(&self, f: &mut dyn FnMut(&K, &V) -> bool) {
        ShardedMap::range(self, f);
    }
}
