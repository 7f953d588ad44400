use super::toml_config::TomlConfig;
use super::Settings;
use crate::core::probe::ErrorPolicy;
use crate::core::report::OutputFormat;
use crate::utils::error::Result;
use crate::utils::validation::{validate_path, Validate};
use clap::Parser;
use std::ffi::OsString;
use std::path::PathBuf;

#[derive(Debug, Clone, Parser)]
#[command(name = "direxists")]
#[command(about = "Check whether filesystem entries exist, without following symlinks")]
pub struct CliConfig {
    /// Paths to check (defaults to /tmp/pepito)
    #[arg(value_parser = clap::value_parser!(OsString))]
    pub paths: Vec<OsString>,

    /// Path to TOML configuration file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Write the report to a file instead of stdout
    #[arg(short, long)]
    pub output: Option<String>,

    /// What to do when a path cannot be checked
    #[arg(long, value_enum)]
    pub on_error: Option<ErrorPolicy>,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

impl CliConfig {
    /// 先載入設定檔，再套用命令列覆蓋
    pub fn resolve(&self) -> Result<Settings> {
        self.validate()?;

        let mut settings = match &self.config {
            Some(path) => Settings::from_toml(&TomlConfig::from_file(path)?)?,
            None => Settings {
                paths: Vec::new(),
                ..Settings::default()
            },
        };

        settings.paths.extend(self.paths.iter().map(PathBuf::from));
        if let Some(format) = self.format {
            settings.format = format;
        }
        if let Some(output) = &self.output {
            settings.output = Some(PathBuf::from(output));
        }
        if let Some(policy) = self.on_error {
            settings.on_error = policy;
        }

        Ok(settings.with_default_path())
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        if let Some(output) = &self.output {
            validate_path("--output", output)?;
        }
        Ok(())
    }
}
