#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use app_core::UseCase;

    use crate::{
        core::{
            domain::models::{ShardSummary, usecases::ListShardsUseCaseInput},
            usecases::ListShardsUseCase,
        },
        tests::test_mocks::MockRouter,
    };

    #[tokio::test]
    async fn lists_what_the_service_reports() {
        let router = Arc::new(MockRouter::new());
        router.set_shards(vec![ShardSummary {
            name: "shard1".into(),
            address: "localhost:7000".into(),
            routed_keys: 3,
        }]);

        let uc = ListShardsUseCase::new(router);
        let out = uc
            .execute(ListShardsUseCaseInput)
            .await
            .expect("no debería fallar");

        assert_eq!(out.shards.len(), 1);
        assert_eq!(out.shards[0].name, "shard1");
        assert_eq!(out.shards[0].routed_keys, 3);
    }
}
