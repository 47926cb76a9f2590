pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use crate::config::cli::CliConfig;

pub use crate::adapters::http::HttpLoginGateway;
pub use crate::config::AppConfig;
pub use crate::core::confirm::{ConfirmationShell, ShellOutcome};
pub use crate::core::tags::TagEditor;
pub use crate::core::view::CollectionView;
pub use crate::domain::model::{FilterState, Record, RecordId};
pub use crate::utils::error::{GaleryaError, Result};
