pub mod add_shard_use_case;
pub mod hash_key_use_case;
pub mod list_shards_use_case;
pub mod remove_shard_use_case;
pub mod route_key_use_case;

pub use add_shard_use_case::AddShardUseCase;
pub use hash_key_use_case::HashKeyUseCase;
pub use list_shards_use_case::ListShardsUseCase;
pub use remove_shard_use_case::RemoveShardUseCase;
pub use route_key_use_case::RouteKeyUseCase;
