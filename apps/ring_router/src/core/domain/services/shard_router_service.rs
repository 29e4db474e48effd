use crate::core::domain::models::{AppError, RoutedKey, ShardSummary};

pub trait ShardRouterService: Send + Sync {
    fn create_hash(&self, key: &str) -> u64;

    fn route(&self, key: &str) -> RoutedKey;

    fn add_shard(&self, name: &str, address: &str) -> Result<(), AppError>;

    fn remove_shard(&self, name: &str) -> Result<(), AppError>;

    fn shard_exists(&self, name: &str) -> bool;

    fn list_shards(&self) -> Vec<ShardSummary>;
}
