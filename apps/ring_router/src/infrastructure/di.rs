use std::sync::Arc;

use shard_ring::{Rendezvous, Ring};
use tracing::info;

use crate::{
    config::{RouterConfig, RoutingStrategy},
    core::{
        domain::{models::AppError, services::ShardRouterService},
        usecases::{
            AddShardUseCase, HashKeyUseCase, ListShardsUseCase, RemoveShardUseCase,
            RouteKeyUseCase,
        },
    },
    infrastructure::adapters::services::SharedRouterService,
};

pub struct RingRouterModule {
    pub router_service: Arc<dyn ShardRouterService>,
    pub hash_key_use_case: Arc<HashKeyUseCase>,
    pub route_key_use_case: Arc<RouteKeyUseCase>,
    pub add_shard_use_case: Arc<AddShardUseCase>,
    pub remove_shard_use_case: Arc<RemoveShardUseCase>,
    pub list_shards_use_case: Arc<ListShardsUseCase>,
}

impl RingRouterModule {
    pub fn build_from_config(config: &RouterConfig) -> Result<Self, AppError> {
        let router_service: Arc<dyn ShardRouterService> = match config.strategy {
            RoutingStrategy::Ring => {
                let ring = Ring::new(config.shards.iter().cloned(), config.vnodes_per_shard)?;
                SharedRouterService::new_shared(ring)
            }
            RoutingStrategy::Rendezvous => {
                let router = Rendezvous::new(config.shards.iter().cloned())?;
                SharedRouterService::new_shared(router)
            }
        };

        info!(
            strategy = %config.strategy,
            shards = config.shards.len(),
            vnodes = config.vnodes_per_shard,
            "router ready"
        );

        Ok(Self::build_from_service(router_service))
    }

    pub fn build_from_service(router_service: Arc<dyn ShardRouterService>) -> Self {
        Self {
            hash_key_use_case: Arc::new(HashKeyUseCase::new(router_service.clone())),
            route_key_use_case: Arc::new(RouteKeyUseCase::new(router_service.clone())),
            add_shard_use_case: Arc::new(AddShardUseCase::new(router_service.clone())),
            remove_shard_use_case: Arc::new(RemoveShardUseCase::new(router_service.clone())),
            list_shards_use_case: Arc::new(ListShardsUseCase::new(router_service.clone())),
            router_service,
        }
    }
}
