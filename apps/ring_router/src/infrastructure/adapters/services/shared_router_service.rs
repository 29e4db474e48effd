use std::sync::Arc;

use dashmap::DashMap;
use shard_ring::{Router, SharedRouter, hash64};

use crate::core::domain::{
    models::{AppError, RoutedKey, ShardSummary},
    services::ShardRouterService,
};

/// [`ShardRouterService`] backed by a copy-on-write [`SharedRouter`].
///
/// Also keeps a per-shard count of routed keys. A counter exists exactly
/// while its shard is registered; routes that resolved against a snapshot
/// older than a removal are not counted.
pub struct SharedRouterService<R> {
    router: SharedRouter<R>,
    routed: DashMap<Arc<str>, u64>,
}

impl<R: Router + Clone> SharedRouterService<R> {
    pub fn new(router: R) -> Self {
        let routed = router
            .shards()
            .into_iter()
            .map(|shard| (Arc::<str>::from(shard.name()), 0))
            .collect();

        Self {
            router: SharedRouter::new(router),
            routed,
        }
    }

    pub fn new_shared(router: R) -> Arc<Self> {
        Arc::new(Self::new(router))
    }

    pub fn routed_keys(&self, name: &str) -> u64 {
        self.routed.get(name).map(|c| *c.value()).unwrap_or(0)
    }

    /// Bumps the counter of `name` if the shard is still registered.
    pub(crate) fn count_route(&self, name: &str) {
        if let Some(mut count) = self.routed.get_mut(name) {
            *count += 1;
        }
    }
}

impl<R: Router + Clone> ShardRouterService for SharedRouterService<R> {
    #[inline]
    fn create_hash(&self, key: &str) -> u64 {
        hash64(key)
    }

    fn route(&self, key: &str) -> RoutedKey {
        let hash = self.create_hash(key);
        let snapshot = self.router.snapshot();
        let shard = snapshot.lookup_hash(hash);

        self.count_route(shard.name());

        RoutedKey {
            key: key.to_string(),
            hash,
            shard: shard.name().to_string(),
            address: shard.address().to_string(),
        }
    }

    fn add_shard(&self, name: &str, address: &str) -> Result<(), AppError> {
        self.router.add_shard(name, address)?;
        self.routed.entry(Arc::from(name)).or_insert(0);
        Ok(())
    }

    fn remove_shard(&self, name: &str) -> Result<(), AppError> {
        self.router.remove_shard(name)?;
        self.routed.remove(name);
        Ok(())
    }

    fn shard_exists(&self, name: &str) -> bool {
        self.router.contains(name)
    }

    fn list_shards(&self) -> Vec<ShardSummary> {
        self.router
            .shards()
            .into_iter()
            .map(|shard| ShardSummary {
                routed_keys: self.routed_keys(shard.name()),
                name: shard.name().to_string(),
                address: shard.address().to_string(),
            })
            .collect()
    }
}
