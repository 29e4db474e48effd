pub mod add_shard_use_case;
pub mod hash_key_use_case;
pub mod list_shards_use_case;
pub mod remove_shard_use_case;
pub mod route_key_use_case;

pub use add_shard_use_case::{AddShardUseCaseInput, AddShardUseCaseOutput};
pub use hash_key_use_case::{HashKeyUseCaseInput, HashKeyUseCaseOutput};
pub use list_shards_use_case::{ListShardsUseCaseInput, ListShardsUseCaseOutput};
pub use remove_shard_use_case::{RemoveShardUseCaseInput, RemoveShardUseCaseOutput};
pub use route_key_use_case::{RouteKeyUseCaseInput, RouteKeyUseCaseOutput};
