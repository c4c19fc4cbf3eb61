//! The five-operation map contract shared by every implementation.

/// Capability set of a concurrent key-value map.
///
/// Every implementation is safe to call from any number of threads through a
/// shared reference. Single-key operations are linearizable per key; nothing
/// is promised across keys. The trait is object safe, so implementations can
/// be compared behind `dyn ConcurrentMap<K, V>`.
pub trait ConcurrentMap<K, V>: Send + Sync {
    /// Inserts or overwrites the value for `key`.
    fn store(&self, key: K, value: V);

    /// Returns a clone of the value for `key`, if present.
    fn load(&self, key: &K) -> Option<V>;

    /// Returns `(existing, true)` if `key` is present, otherwise inserts
    /// `value` and returns `(value, false)`. The check and the insert are
    /// atomic with respect to every other operation on the same key.
    fn load_or_store(&self, key: K, value: V) -> (V, bool);

    /// Removes `key`. Absent keys are a no-op.
    fn delete(&self, key: &K);

    /// Calls `f` for entries in unspecified order while it returns `true`.
    /// Implementations without a global snapshot document how far a `false`
    /// return reaches.
    fn range(&self, f: &mut dyn FnMut(&K, &V) -> bool);
}
