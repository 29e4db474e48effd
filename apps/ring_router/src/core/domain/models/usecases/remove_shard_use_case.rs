#[derive(Debug)]
pub struct RemoveShardUseCaseInput {
    pub name: String,
}

#[derive(Debug)]
pub struct RemoveShardUseCaseOutput {
    pub success: bool,
}
