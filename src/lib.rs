pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use crate::config::CliConfig;

pub use crate::config::{FileConfig, RunSettings};
pub use crate::core::export::{export, import_csv, import_json, ExportFormat};
pub use crate::core::labeled::parse_labeled;
pub use crate::core::stream::{read_all, sort_by_age, write_all};
pub use crate::core::tokens::TokenReader;
pub use crate::domain::model::PersonInfo;
pub use crate::utils::error::{PersonError, Result};
