#[cfg(feature = "cli")]
pub mod cli;
pub mod toml_config;

use crate::core::probe::ErrorPolicy;
use crate::core::report::OutputFormat;
use crate::utils::error::Result;
use crate::utils::validation::Validate;
use std::path::PathBuf;
use toml_config::TomlConfig;

/// 沒有指定任何路徑時檢查的示範路徑
pub const DEFAULT_PATH: &str = "/tmp/pepito";

/// 合併設定檔與命令列之後的最終設定
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub paths: Vec<PathBuf>,
    pub format: OutputFormat,
    pub output: Option<PathBuf>,
    pub on_error: ErrorPolicy,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            paths: vec![PathBuf::from(DEFAULT_PATH)],
            format: OutputFormat::default(),
            output: None,
            on_error: ErrorPolicy::default(),
        }
    }
}

impl Settings {
    pub fn from_toml(config: &TomlConfig) -> Result<Self> {
        config.validate()?;

        Ok(Self {
            paths: config.check.paths.iter().map(PathBuf::from).collect(),
            format: config.output.format.unwrap_or_default(),
            output: config.output.path.as_ref().map(PathBuf::from),
            on_error: config.check.on_error.unwrap_or_default(),
        })
    }

    /// 沒有任何路徑時補上示範路徑
    pub fn with_default_path(mut self) -> Self {
        if self.paths.is_empty() {
            self.paths.push(PathBuf::from(DEFAULT_PATH));
        }
        self
    }
}
