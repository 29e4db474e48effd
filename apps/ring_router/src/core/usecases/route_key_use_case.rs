use std::sync::Arc;

use app_core::{UseCase, UseCaseValidatable};
use async_trait::async_trait;
use tracing::trace;

use crate::core::domain::{
    models::{
        AppError,
        usecases::{RouteKeyUseCaseInput, RouteKeyUseCaseOutput},
    },
    services::ShardRouterService,
};

pub struct RouteKeyUseCase {
    router_service: Arc<dyn ShardRouterService>,
}

impl RouteKeyUseCase {
    pub fn new(router_service: Arc<dyn ShardRouterService>) -> Self {
        Self { router_service }
    }
}

#[async_trait]
impl UseCase<RouteKeyUseCaseInput, RouteKeyUseCaseOutput, AppError> for RouteKeyUseCase {
    async fn execute(&self, input: RouteKeyUseCaseInput) -> Result<RouteKeyUseCaseOutput, AppError> {
        let route = self.router_service.route(&input.key);

        trace!(
            key = %route.key,
            hash = route.hash,
            shard = %route.shard,
            "key routed"
        );

        Ok(RouteKeyUseCaseOutput { route })
    }
}

#[async_trait]
impl UseCaseValidatable<RouteKeyUseCaseInput, RouteKeyUseCaseOutput, AppError>
    for RouteKeyUseCase
{
    async fn validate(&self, input: &RouteKeyUseCaseInput) -> Result<(), AppError> {
        if input.key.is_empty() {
            return Err(AppError::BadRequest("Key is empty".to_string()));
        }

        Ok(())
    }
}
