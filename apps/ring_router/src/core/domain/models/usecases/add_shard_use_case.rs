#[derive(Debug)]
pub struct AddShardUseCaseInput {
    pub name: String,
    pub address: String,
}

#[derive(Debug)]
pub struct AddShardUseCaseOutput {
    pub success: bool,
}
