use std::sync::Arc;

use app_core::{UseCase, UseCaseValidatable};
use async_trait::async_trait;

use crate::core::domain::{
    models::{
        AppError,
        usecases::{HashKeyUseCaseInput, HashKeyUseCaseOutput},
    },
    services::ShardRouterService,
};

pub struct HashKeyUseCase {
    router_service: Arc<dyn ShardRouterService>,
}

impl HashKeyUseCase {
    pub fn new(router_service: Arc<dyn ShardRouterService>) -> Self {
        Self { router_service }
    }
}

#[async_trait]
impl UseCase<HashKeyUseCaseInput, HashKeyUseCaseOutput, AppError> for HashKeyUseCase {
    async fn execute(&self, input: HashKeyUseCaseInput) -> Result<HashKeyUseCaseOutput, AppError> {
        Ok(HashKeyUseCaseOutput {
            hash: self.router_service.create_hash(&input.key),
        })
    }
}

// Any string, the empty one included, has a hash.
#[async_trait]
impl UseCaseValidatable<HashKeyUseCaseInput, HashKeyUseCaseOutput, AppError> for HashKeyUseCase {
    async fn validate(&self, _input: &HashKeyUseCaseInput) -> Result<(), AppError> {
        Ok(())
    }
}
