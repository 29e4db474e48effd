use std::collections::BTreeMap;

use crate::{RingResult, Shard, hash::hash64};

/// Routing strategy shared by [`crate::Ring`] and [`crate::Rendezvous`].
///
/// Implementations always hold at least one shard, so `lookup` cannot fail:
/// removing the last shard (or the last ring position) is rejected with
/// [`crate::RingError::Config`].
pub trait Router: Send + Sync {
    /// Shard that owns a key whose [`hash64`] is `hash`.
    fn lookup_hash(&self, hash: u64) -> &Shard;

    /// Name of the shard that owns `key`.
    fn lookup(&self, key: &[u8]) -> &str {
        self.lookup_shard(key).name()
    }

    fn lookup_shard(&self, key: &[u8]) -> &Shard {
        self.lookup_hash(hash64(key))
    }

    fn add_shard(&mut self, name: &str, address: &str) -> RingResult<()>;

    fn remove_shard(&mut self, name: &str) -> RingResult<Shard>;

    fn contains(&self, name: &str) -> bool;

    fn shard(&self, name: &str) -> Option<&Shard>;

    /// Registered shards ordered by name.
    fn shards(&self) -> Vec<&Shard>;

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Routes `sample_key_{i}` for `i in 0..sample_size` and counts keys per
    /// shard. Shards that receive nothing are reported with zero.
    fn distribution(&self, sample_size: usize) -> BTreeMap<String, usize> {
        let mut counts: BTreeMap<String, usize> = self
            .shards()
            .into_iter()
            .map(|s| (s.name().to_string(), 0))
            .collect();

        for i in 0..sample_size {
            let key = format!("sample_key_{i}");
            *counts.entry(self.lookup(key.as_bytes()).to_string()).or_insert(0) += 1;
        }

        counts
    }
}
