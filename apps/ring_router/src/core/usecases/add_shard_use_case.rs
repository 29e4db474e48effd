use std::sync::Arc;

use app_core::{UseCase, UseCaseValidatable};
use async_trait::async_trait;
use tracing::info;

use crate::core::domain::{
    models::{
        AppError,
        usecases::{AddShardUseCaseInput, AddShardUseCaseOutput},
    },
    services::ShardRouterService,
};

pub struct AddShardUseCase {
    router_service: Arc<dyn ShardRouterService>,
}

impl AddShardUseCase {
    pub fn new(router_service: Arc<dyn ShardRouterService>) -> Self {
        Self { router_service }
    }
}

#[async_trait]
impl UseCase<AddShardUseCaseInput, AddShardUseCaseOutput, AppError> for AddShardUseCase {
    async fn execute(&self, input: AddShardUseCaseInput) -> Result<AddShardUseCaseOutput, AppError> {
        info!("New shard: {:?}", input);

        self.router_service.add_shard(&input.name, &input.address)?;

        if !self.router_service.shard_exists(&input.name) {
            return Err(AppError::Config(format!(
                "Shard {} was not registered",
                input.name
            )));
        }

        Ok(AddShardUseCaseOutput { success: true })
    }
}

#[async_trait]
impl UseCaseValidatable<AddShardUseCaseInput, AddShardUseCaseOutput, AppError>
    for AddShardUseCase
{
    async fn validate(&self, input: &AddShardUseCaseInput) -> Result<(), AppError> {
        if input.name.is_empty() {
            return Err(AppError::BadRequest("Shard name is empty".to_string()));
        }

        if input.address.is_empty() {
            return Err(AppError::BadRequest("Shard address is empty".to_string()));
        }

        Ok(())
    }
}
