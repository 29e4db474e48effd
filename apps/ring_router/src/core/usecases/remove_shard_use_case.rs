use std::sync::Arc;

use app_core::{UseCase, UseCaseValidatable};
use async_trait::async_trait;
use tracing::info;

use crate::core::domain::{
    models::{
        AppError,
        usecases::{RemoveShardUseCaseInput, RemoveShardUseCaseOutput},
    },
    services::ShardRouterService,
};

pub struct RemoveShardUseCase {
    router_service: Arc<dyn ShardRouterService>,
}

impl RemoveShardUseCase {
    pub fn new(router_service: Arc<dyn ShardRouterService>) -> Self {
        Self { router_service }
    }
}

#[async_trait]
impl UseCase<RemoveShardUseCaseInput, RemoveShardUseCaseOutput, AppError> for RemoveShardUseCase {
    async fn execute(
        &self,
        input: RemoveShardUseCaseInput,
    ) -> Result<RemoveShardUseCaseOutput, AppError> {
        let name = input.name.as_str();

        self.router_service.remove_shard(name)?;

        info!(shard = name, "shard removed");

        Ok(RemoveShardUseCaseOutput { success: true })
    }
}

#[async_trait]
impl UseCaseValidatable<RemoveShardUseCaseInput, RemoveShardUseCaseOutput, AppError>
    for RemoveShardUseCase
{
    async fn validate(&self, input: &RemoveShardUseCaseInput) -> Result<(), AppError> {
        if input.name.is_empty() {
            return Err(AppError::BadRequest("Shard name is empty".to_string()));
        }

        Ok(())
    }
}
