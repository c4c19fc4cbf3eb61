use super::{Config, Logs, MapConfig};
use crate::db::router::HashKind;

/// Creates a new test configuration.
pub fn new_test_config() -> Config {
    Config {
        map: MapConfig {
            shards: Some(4),
            hasher: Some(HashKind::Fnv1a),
            shard_capacity: Some(16),
        },
        logs: Some(Logs {
            level: Some("debug".to_string()),
        }),
    }
}
