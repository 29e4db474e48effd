
use std::collections::BTreeMap;

use crate::Router;

pub(crate) const DEMO_SHARDS: [(&str, &str); 3] = [
    ("shard1", "localhost:7000"),
    ("shard2", "localhost:7001"),
    ("shard3", "localhost:7002"),
];

pub(crate) fn sample_keys(n: usize) -> Vec<String> {
    (0..n).map(|i| format!("user:{i}")).collect()
}

/// Owner of every key, in key order.
pub(crate) fn owners<R: Router>(router: &R, keys: &[String]) -> Vec<String> {
    keys.iter()
        .map(|k| router.lookup(k.as_bytes()).to_string())
        .collect()
}

pub(crate) fn four_shards() -> BTreeMap<String, String> {
    (1..=4)
        .map(|i| (format!("shard{i}"), format!("10.0.0.{i}:6379")))
        .collect()
}
