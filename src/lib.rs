pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::cli::CliConfig;
pub use config::{toml_config::TomlConfig, Settings, DEFAULT_PATH};

pub use adapters::{LocalFs, LocalStorage};
pub use crate::core::checker::{exists, PathExistenceChecker};
pub use crate::core::probe::{ErrorPolicy, Prober};
pub use crate::core::report::OutputFormat;
pub use domain::model::{EntryKind, Existence, ProbeOutcome, ProbeReport};
pub use utils::error::{DirexistsError, Result};
