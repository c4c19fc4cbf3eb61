//! Key routing: maps any key to one of N shards.

pub mod hasher;
pub mod key;


pub use hasher::{Fnv1a, HashKind, RouteHasher, Xxh3Folded};
pub use key::{RouteKey, Rendered};

/// Router picks the shard owning a key.
///
/// It is a pure function of the key's canonical bytes and the shard count
/// fixed at construction.
#[derive(Debug, Clone, Copy)]
pub struct Router {
    shards: usize,
    kind: HashKind,
}

impl Router {
    /// Creates a router over `shards` shards. A zero count is clamped to one
    /// so `route` stays total; the map normalizes zero before getting here.
    pub fn new(shards: usize, kind: HashKind) -> Self {
        Self {
            shards: shards.max(1),
            kind,
        }
    }

    /// Number of shards routed over.
    pub fn shards(&self) -> usize {
        self.shards
    }

    pub fn kind(&self) -> HashKind {
        self.kind
    }

    /// 32-bit hash of the key's canonical bytes.
    #[inline]
    pub fn hash<K: RouteKey + ?Sized>(&self, key: &K) -> u32 {
        match self.kind {
            HashKind::Fnv1a => {
                let mut h = Fnv1a::new();
                key.write_route(&mut h);
                h.finish32()
            }
            HashKind::Xxh3 => {
                let mut h = Xxh3Folded::new();
                key.write_route(&mut h);
                h.finish32()
            }
        }
    }

    /// Shard index in `[0, shards)`.
    #[inline]
    pub fn route<K: RouteKey + ?Sized>(&self, key: &K) -> usize {
        self.hash(key) as usize % self.shards
    }
}
