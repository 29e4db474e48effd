#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use app_core::{UseCase, UseCaseValidatable};

    use crate::{
        core::{
            domain::models::{AppError, usecases::RouteKeyUseCaseInput},
            usecases::RouteKeyUseCase,
        },
        tests::test_mocks::MockRouter,
    };

    #[tokio::test]
    async fn validate_fails_when_key_is_empty() {
        let router = Arc::new(MockRouter::new());
        let uc = RouteKeyUseCase::new(router.clone());

        let input = RouteKeyUseCaseInput { key: "".into() };
        let err = uc.validate(&input).await.unwrap_err();

        match err {
            AppError::BadRequest(msg) => assert_eq!(msg, "Key is empty"),
            _ => panic!("Esperaba BadRequest(\"Key is empty\")"),
        }
        assert!(router.last_route.lock().is_none());
    }

    #[tokio::test]
    async fn execute_returns_the_routed_shard() {
        let router = Arc::new(MockRouter::new());
        router.set_route_to("shard2", "localhost:7001");

        let uc = RouteKeyUseCase::new(router.clone());
        let out = uc
            .execute(RouteKeyUseCaseInput { key: "k1".into() })
            .await
            .expect("no debería fallar");

        assert_eq!(out.route.key, "k1");
        assert_eq!(out.route.shard, "shard2");
        assert_eq!(out.route.address, "localhost:7001");
        assert_eq!(out.route.hash, 42);
        assert_eq!(router.last_route.lock().as_deref(), Some("k1"));
    }

    #[tokio::test]
    async fn validate_and_execute_does_not_route_invalid_input() {
        let router = Arc::new(MockRouter::new());
        let uc = RouteKeyUseCase::new(router.clone());

        let err = uc
            .validate_and_execute(RouteKeyUseCaseInput { key: "".into() })
            .await
            .unwrap_err();

        assert!(matches!(err, AppError::BadRequest(_)));
        assert!(router.last_route.lock().is_none());
    }
}
