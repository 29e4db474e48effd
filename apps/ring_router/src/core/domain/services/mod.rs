pub mod shard_router_service;

pub use shard_router_service::ShardRouterService;
