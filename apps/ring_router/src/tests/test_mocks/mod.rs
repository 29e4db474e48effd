use parking_lot::Mutex;

use crate::core::domain::{
    models::{AppError, RoutedKey, ShardSummary},
    services::ShardRouterService,
};

pub struct MockRouter {
    // respuestas configurables
    pub hash_result: u64,
    pub route_to: Mutex<(String, String)>,
    pub add_result: Mutex<Result<(), AppError>>,
    pub remove_result: Mutex<Result<(), AppError>>,
    pub exists_result: Mutex<bool>,
    pub shards: Mutex<Vec<ShardSummary>>,

    // para inspección de llamadas
    pub last_route: Mutex<Option<String>>,
    pub last_add: Mutex<Option<(String, String)>>,
    pub last_remove: Mutex<Option<String>>,
}

impl MockRouter {
    pub fn new() -> Self {
        Self {
            hash_result: 42,
            route_to: Mutex::new(("shard1".to_string(), "localhost:7000".to_string())),
            add_result: Mutex::new(Ok(())),
            remove_result: Mutex::new(Ok(())),
            exists_result: Mutex::new(true),
            shards: Mutex::new(Vec::new()),
            last_route: Mutex::new(None),
            last_add: Mutex::new(None),
            last_remove: Mutex::new(None),
        }
    }

    pub fn set_route_to(&self, shard: &str, address: &str) {
        *self.route_to.lock() = (shard.to_string(), address.to_string());
    }
    pub fn set_add_result(&self, r: Result<(), AppError>) {
        *self.add_result.lock() = r;
    }
    pub fn set_remove_result(&self, r: Result<(), AppError>) {
        *self.remove_result.lock() = r;
    }
    pub fn set_exists(&self, exists: bool) {
        *self.exists_result.lock() = exists;
    }
    pub fn set_shards(&self, shards: Vec<ShardSummary>) {
        *self.shards.lock() = shards;
    }
}

impl ShardRouterService for MockRouter {
    fn create_hash(&self, _key: &str) -> u64 {
        self.hash_result
    }

    fn route(&self, key: &str) -> RoutedKey {
        *self.last_route.lock() = Some(key.to_string());
        let (shard, address) = self.route_to.lock().clone();

        RoutedKey {
            key: key.to_string(),
            hash: self.hash_result,
            shard,
            address,
        }
    }

    fn add_shard(&self, name: &str, address: &str) -> Result<(), AppError> {
        *self.last_add.lock() = Some((name.to_string(), address.to_string()));
        self.add_result.lock().clone()
    }

    fn remove_shard(&self, name: &str) -> Result<(), AppError> {
        *self.last_remove.lock() = Some(name.to_string());
        self.remove_result.lock().clone()
    }

    fn shard_exists(&self, _name: &str) -> bool {
        *self.exists_result.lock()
    }

    fn list_shards(&self) -> Vec<ShardSummary> {
        self.shards.lock().clone()
    }
}
