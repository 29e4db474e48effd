use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RingError {
    #[error("Invalid ring configuration: {0}")]
    Config(String),

    #[error("Shard already registered: {0}")]
    DuplicateShard(String),

    #[error("Shard not found: {0}")]
    NotFound(String),
}

pub type RingResult<T> = Result<T, RingError>;
