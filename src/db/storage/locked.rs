//! Single-lock baseline map.

use parking_lot::RwLock;
use std::collections::hash_map::Entry;
use std::collections::HashMap;
use std::hash::Hash;

use crate::db::contract::ConcurrentMap;

/// LockedMap guards one `HashMap` with one lock.
///
/// Every caller contends on the same lock. It exists to measure the sharded
/// map against.
#[derive(Debug)]
pub struct LockedMap<K, V> {
    items: RwLock<HashMap<K, V>>,
}

impl<K, V> LockedMap<K, V>
where
    K: Eq + Hash,
{
    pub fn new() -> Self {
        Self {
            items: RwLock::new(HashMap::new()),
        }
    }

    pub fn len(&self) -> usize {
        self.items.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.read().is_empty()
    }
}

impl<K, V> Default for LockedMap<K, V>
where
    K: Eq + Hash,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<K, V> ConcurrentMap<K, V> for LockedMap<K, V>
where
    K: Eq + Hash + Clone + Send + Sync,
    V: Clone + Send + Sync,
{
    fn store(&self, key: K, value: V) {
        self.items.write().insert(key, value);
    }

    fn load(&self, key: &K) -> Option<V> {
        self.items.read().get(key).cloned()
    }

    fn load_or_store(&self, key: K, value: V) -> (V, bool) {
        match self.items.write().entry(key) {
            Entry::Occupied(e) => (e.get().clone(), true),
            Entry::Vacant(e) => (e.insert(value).clone(), false),
        }
    }

    fn delete(&self, key: &K) {
        self.items.write().remove(key);
    }

    /// Walks a snapshot; `false` stops the whole walk.
    fn range(&self, f: &mut dyn FnMut(&K, &V) -> bool) {
        let snapshot: Vec<(K, V)> = self
            .items
            .read()
            .iter()
            .map(|(k, v)| (k.clone(), v.clone()))
            .collect();
        for (k, v) in snapshot.iter() {
            if !f(k, v) {
                return;
            }
        }
    }
}
