//! Map contract over `dashmap::DashMap`, used as an external reference point.

use dashmap::mapref::entry::Entry;
use dashmap::DashMap;
use std::hash::Hash;

use crate::db::contract::ConcurrentMap;

impl<K, V> ConcurrentMap<K, V> for DashMap<K, V>
where
    K: Eq + Hash + Clone + Send + Sync,
    V: Clone + Send + Sync,
{
    fn store(&self, key: K, value: V) {
        self.insert(key, value);
    }

    fn load(&self, key: &K) -> Option<V> {
        self.get(key).map(|v| v.value().clone())
    }

    fn load_or_store(&self, key: K, value: V) -> (V, bool) {
        match self.entry(key) {
            Entry::Occupied(e) => (e.get().clone(), true),
            Entry::Vacant(e) => (e.insert(value).value().clone(), false),
        }
    }

    fn delete(&self, key: &K) {
        self.remove(key);
    }

    /// Visits entries under DashMap's per-shard read guards, so `f` must not
    /// write to the same map. `false` stops the whole walk.
    fn range(&self, f: &mut dyn FnMut(&K, &V) -> bool) {
        for entry in self.iter() {
            if !f(entry.key(), entry.value()) {
                return;
            }
        }
    }
}
