//! Shard implementation.
//

use parking_lot::RwLock;
use std::borrow::Borrow;
use std::collections::hash_map::Entry;
use std::collections::HashMap;
use std::hash::Hash;
use std::sync::atomic::{AtomicUsize, Ordering};

/// Shard is an independent segment of the sharded map.
///
/// All operations serialize on the shard's own lock; nothing outside the
/// shard is touched.
pub struct Shard<K, V> {
    pub(crate) items: RwLock<HashMap<K, V>>,
    id: usize,
    len: AtomicUsize,
}

impl<K, V> Shard<K, V>
where
    K: Eq + Hash,
{
    /// Creates a new shard.
    pub fn new(id: usize, capacity: usize) -> Self {
        Self {
            items: RwLock::new(HashMap::with_capacity(capacity)),
            id,
            len: AtomicUsize::new(0),
        }
    }

    /// Gets the shard ID.
    pub fn id(&self) -> usize {
        self.id
    }

    /// Gets the number of items.
    pub fn len(&self) -> usize {
        self.len.load(Ordering::Relaxed)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Sets or replaces a value.
    pub fn store(&self, key: K, value: V) {
        let mut items = self.items.write();
        if items.insert(key, value).is_none() {
            self.len.fetch_add(1, Ordering::Relaxed);
        }
    }

    /// Gets a value by key.
    pub fn load<Q>(&self, key: &Q) -> Option<V>
    where
        K: Borrow<Q>,
        Q: Eq + Hash + ?Sized,
        V: Clone,
    {
        self.items.read().get(key).cloned()
    }

    /// Returns the present value with `true`, or inserts `value` and returns
    /// it with `false`.
    ///
    /// Hits are answered under the read lock. A miss takes the write lock
    /// and decides again through the entry API, so concurrent callers racing
    /// on the same key agree on a single winner.
    pub fn load_or_store(&self, key: K, value: V) -> (V, bool)
    where
        V: Clone,
    {
        if let Some(existing) = self.items.read().get(&key) {
            return (existing.clone(), true);
        }

        let mut items = self.items.write();
        match items.entry(key) {
            Entry::Occupied(e) => (e.get().clone(), true),
            Entry::Vacant(e) => {
                e.insert(value.clone());
                self.len.fetch_add(1, Ordering::Relaxed);
                (value, false)
            }
        }
    }

    /// Removes a key and returns its value if it was present.
    pub fn delete<Q>(&self, key: &Q) -> Option<V>
    where
        K: Borrow<Q>,
        Q: Eq + Hash + ?Sized,
    {
        let removed = self.items.write().remove(key);
        if removed.is_some() {
            self.len.fetch_sub(1, Ordering::Relaxed);
        }
        removed
    }

    /// Visits a copy of the shard's entries taken under the read lock.
    ///
    /// The lock is released before `f` runs, so `f` may write back into the
    /// map. Returns `false` if `f` asked to stop.
    pub fn range<F>(&self, mut f: F) -> bool
    where
        F: FnMut(&K, &V) -> bool,
        K: Clone,
        V: Clone,
    {
        let snapshot: Vec<(K, V)> = {
            let items = self.items.read();
            if items.is_empty() {
                return true;
            }
            items.iter().map(|(k, v)| (k.clone(), v.clone())).collect()
        };

        for (k, v) in snapshot.iter() {
            if !f(k, v) {
                return false;
            }
        }
        true
    }

    /// Clears all entries.
    /// Returns the number of removed items.
    pub fn clear(&self) -> usize {
        let mut items = self.items.write();
        let removed = items.len();
        items.clear();
        self.len.store(0, Ordering::Relaxed);
        removed
    }
}
