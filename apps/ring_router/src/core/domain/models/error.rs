use shard_ring::RingError;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AppError {
    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Shard already exists: {0}")]
    DuplicateShard(String),

    #[error("Shard not found: {0}")]
    ShardNotFound(String),

    #[error("io error: {0}")]
    Io(String),
}

impl From<RingError> for AppError {
    fn from(err: RingError) -> Self {
        match err {
            RingError::Config(msg) => AppError::Config(msg),
            RingError::DuplicateShard(name) => AppError::DuplicateShard(name),
            RingError::NotFound(name) => AppError::ShardNotFound(name),
        }
    }
}

impl From<std::io::Error> for AppError {
    fn from(err: std::io::Error) -> Self {
        AppError::Io(err.to_string())
    }
}
