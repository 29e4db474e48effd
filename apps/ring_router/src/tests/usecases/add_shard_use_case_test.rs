#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use app_core::{UseCase, UseCaseValidatable};

    use crate::{
        core::{
            domain::models::{AppError, usecases::AddShardUseCaseInput},
            usecases::AddShardUseCase,
        },
        tests::test_mocks::MockRouter,
    };

    fn input(name: &str, address: &str) -> AddShardUseCaseInput {
        AddShardUseCaseInput {
            name: name.into(),
            address: address.into(),
        }
    }

    #[tokio::test]
    async fn validate_fails_on_empty_name() {
        let uc = AddShardUseCase::new(Arc::new(MockRouter::new()));
        let err = uc.validate(&input("", "host:1")).await.unwrap_err();
        assert_eq!(err, AppError::BadRequest("Shard name is empty".into()));
    }

    #[tokio::test]
    async fn validate_fails_on_empty_address() {
        let uc = AddShardUseCase::new(Arc::new(MockRouter::new()));
        let err = uc.validate(&input("shard4", "")).await.unwrap_err();
        assert_eq!(err, AppError::BadRequest("Shard address is empty".into()));
    }

    #[tokio::test]
    async fn add_happy_path() {
        let router = Arc::new(MockRouter::new());
        let uc = AddShardUseCase::new(router.clone());

        let out = uc
            .execute(input("shard4", "localhost:7003"))
            .await
            .expect("no debería fallar");

        assert!(out.success);
        assert_eq!(
            router
                .last_add
                .lock()
                .as_ref()
                .map(|(n, a)| (n.as_str(), a.as_str())),
            Some(("shard4", "localhost:7003"))
        );
    }

    #[tokio::test]
    async fn propagates_duplicate_error() {
        let router = Arc::new(MockRouter::new());
        router.set_add_result(Err(AppError::DuplicateShard("shard1".into())));

        let uc = AddShardUseCase::new(router);
        let err = uc.execute(input("shard1", "host:port")).await.unwrap_err();

        assert_eq!(err, AppError::DuplicateShard("shard1".into()));
    }

    #[tokio::test]
    async fn fails_if_shard_is_missing_after_add() {
        let router = Arc::new(MockRouter::new());
        router.set_exists(false);

        let uc = AddShardUseCase::new(router);
        let err = uc.execute(input("shard5", "host:5")).await.unwrap_err();

        match err {
            AppError::Config(msg) => assert!(msg.contains("shard5")),
            _ => panic!("Esperaba Config"),
        }
    }
}
