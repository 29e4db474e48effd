use crate::core::domain::models::ShardSummary;

#[derive(Debug)]
pub struct ListShardsUseCaseInput;

#[derive(Debug)]
pub struct ListShardsUseCaseOutput {
    pub shards: Vec<ShardSummary>,
}
