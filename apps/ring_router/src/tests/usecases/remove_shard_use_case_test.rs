#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use app_core::{UseCase, UseCaseValidatable};

    use crate::{
        core::{
            domain::models::{AppError, usecases::RemoveShardUseCaseInput},
            usecases::RemoveShardUseCase,
        },
        tests::test_mocks::MockRouter,
    };

    #[tokio::test]
    async fn validate_fails_when_name_is_empty() {
        let uc = RemoveShardUseCase::new(Arc::new(MockRouter::new()));

        let err = uc
            .validate(&RemoveShardUseCaseInput { name: "".into() })
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::BadRequest(_)));
    }

    #[tokio::test]
    async fn removes_shard() {
        let router = Arc::new(MockRouter::new());
        let uc = RemoveShardUseCase::new(router.clone());

        let out = uc
            .execute(RemoveShardUseCaseInput {
                name: "shard2".into(),
            })
            .await
            .expect("no debería fallar");

        assert!(out.success);
        assert_eq!(router.last_remove.lock().as_deref(), Some("shard2"));
    }

    #[tokio::test]
    async fn propagates_not_found() {
        let router = Arc::new(MockRouter::new());
        router.set_remove_result(Err(AppError::ShardNotFound("shard9".into())));

        let uc = RemoveShardUseCase::new(router);
        let err = uc
            .execute(RemoveShardUseCaseInput {
                name: "shard9".into(),
            })
            .await
            .unwrap_err();

        match err {
            AppError::ShardNotFound(msg) => assert_eq!(msg, "shard9"),
            _ => panic!("Esperaba ShardNotFound"),
        }
    }
}
