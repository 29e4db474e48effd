use std::sync::Arc;

use parking_lot::RwLock;
use tracing::info;

use crate::{RingResult, Router, Shard};

/// Single-writer, multi-reader wrapper around a [`Router`].
///
/// Readers take an `Arc` snapshot and route without holding the lock.
/// Writers mutate a private copy and publish it in one swap, so a failed
/// mutation never becomes visible.
pub struct SharedRouter<R> {
    current: RwLock<Arc<R>>,
}

impl<R: Router + Clone> SharedRouter<R> {
    pub fn new(router: R) -> Self {
        Self {
            current: RwLock::new(Arc::new(router)),
        }
    }

    pub fn new_shared(router: R) -> Arc<Self> {
        Arc::new(Self::new(router))
    }

    #[inline]
    pub fn snapshot(&self) -> Arc<R> {
        self.current.read().clone()
    }

    pub fn lookup(&self, key: &[u8]) -> String {
        self.snapshot().lookup(key).to_string()
    }

    pub fn lookup_shard(&self, key: &[u8]) -> Shard {
        self.snapshot().lookup_shard(key).clone()
    }

    pub fn add_shard(&self, name: &str, address: &str) -> RingResult<()> {
        self.update(|router| router.add_shard(name, address))?;
        info!(shard = name, address, "shard added to router");
        Ok(())
    }

    pub fn remove_shard(&self, name: &str) -> RingResult<Shard> {
        let removed = self.update(|router| router.remove_shard(name))?;
        info!(shard = name, "shard removed from router");
        Ok(removed)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.snapshot().contains(name)
    }

    pub fn shards(&self) -> Vec<Shard> {
        self.snapshot().shards().into_iter().cloned().collect()
    }

    pub fn len(&self) -> usize {
        self.snapshot().len()
    }

    pub fn is_empty(&self) -> bool {
        self.snapshot().is_empty()
    }

    fn update<T>(&self, op: impl FnOnce(&mut R) -> RingResult<T>) -> RingResult<T> {
        let mut current = self.current.write();
        let mut next = (**current).clone();
        let out = op(&mut next)?;
        *current = Arc::new(next);
        Ok(out)
    }
}
