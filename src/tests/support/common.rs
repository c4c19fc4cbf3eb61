// Common test utilities: synthetic keys and values.

use rand::Rng;

/// Formats the synthetic key used across tests and benches.
pub fn string_key(i: i64) -> String {
    format!("string_key_{}", i)
}

/// Keys `string_key_0..n` paired with their index as value.
pub fn sequential_entries(n: i64) -> Vec<(String, i64)> {
    (0..n).map(|i| (string_key(i), i)).collect()
}

/// Random keys drawn from `string_key_0..range`.
pub fn random_keys(count: usize, range: i64) -> Vec<String> {
    let mut rng = rand::thread_rng();
    (0..count).map(|_| string_key(rng.gen_range(0..range))).collect()
}

/// Worker count for parallel cases: at least 4 even on tiny runners.
pub fn worker_count() -> usize {
    num_cpus::get().max(4)
}
