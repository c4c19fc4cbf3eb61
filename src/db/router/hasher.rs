//! 32-bit hash functions used to pick a shard.

use serde::{Deserialize, Serialize};
use xxhash_rust::xxh3::Xxh3;

const FNV_OFFSET_BASIS: u32 = 0x811c_9dc5;
const FNV_PRIME: u32 = 0x0100_0193;

/// Streaming sink for the canonical bytes of a key.
pub trait RouteHasher {
    fn write(&mut self, bytes: &[u8]);
    fn finish32(&self) -> u32;
}

/// Hash algorithm selected for routing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum HashKind {
    #[default]
    Fnv1a,
    Xxh3,
}

/// FNV-1a, 32-bit.
#[derive(Debug, Clone, Copy)]
pub struct Fnv1a(u32);

impl Fnv1a {
    pub fn new() -> Self {
        Self(FNV_OFFSET_BASIS)
    }
}

impl Default for Fnv1a {
    fn default() -> Self {
        Self::new()
    }
}

impl RouteHasher for Fnv1a {
    #[inline]
    fn write(&mut self, bytes: &[u8]) {
        let mut h = self.0;
        for &b in bytes {
            h ^= b as u32;
            h = h.wrapping_mul(FNV_PRIME);
        }
        self.0 = h;
    }

    #[inline]
    fn finish32(&self) -> u32 {
        self.0
    }
}

/// Streaming xxh3 with the 64-bit digest folded down to 32 bits.
pub struct Xxh3Folded(Xxh3);

impl Xxh3Folded {
    pub fn new() -> Self {
        Self(Xxh3::new())
    }
}

impl Default for Xxh3Folded {
    fn default() -> Self {
        Self::new()
    }
}

impl RouteHasher for Xxh3Folded {
    #[inline]
    fn write(&mut self, bytes: &[u8]) {
        self.0.update(bytes);
    }

    #[inline]
    fn finish32(&self) -> u32 {
        let h = self.0.digest();
        (h ^ (h >> 32)) as u32
    }
}
