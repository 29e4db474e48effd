use std::sync::Arc;

use app_core::UseCase;
use async_trait::async_trait;

use crate::core::domain::{
    models::{
        AppError,
        usecases::{ListShardsUseCaseInput, ListShardsUseCaseOutput},
    },
    services::ShardRouterService,
};

pub struct ListShardsUseCase {
    router_service: Arc<dyn ShardRouterService>,
}

impl ListShardsUseCase {
    pub fn new(router_service: Arc<dyn ShardRouterService>) -> Self {
        Self { router_service }
    }
}

#[async_trait]
impl UseCase<ListShardsUseCaseInput, ListShardsUseCaseOutput, AppError> for ListShardsUseCase {
    async fn execute(
        &self,
        _input: ListShardsUseCaseInput,
    ) -> Result<ListShardsUseCaseOutput, AppError> {
        Ok(ListShardsUseCaseOutput {
            shards: self.router_service.list_shards(),
        })
    }
}
