pub mod export;
pub mod labeled;
pub mod stream;
pub mod tokens;

pub use crate::domain::model::PersonInfo;
pub use crate::utils::error::Result;
