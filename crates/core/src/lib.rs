pub mod use_case;
pub mod utils;

pub use crate::use_case::UseCase;
pub use crate::use_case::UseCaseValidatable;
pub use crate::utils::split_message;
