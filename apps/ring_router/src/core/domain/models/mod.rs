pub mod error;
pub mod route;
pub mod usecases;

pub use error::AppError;
pub use route::{RoutedKey, ShardSummary};
