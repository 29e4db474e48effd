#[derive(Debug)]
pub struct HashKeyUseCaseInput {
    pub key: String,
}

#[derive(Debug)]
pub struct HashKeyUseCaseOutput {
    pub hash: u64,
}
