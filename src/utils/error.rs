use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum DirexistsError {
    /// lstat 失敗且原因不是「不存在」
    #[error("Unexpected error occurred in lstat: {source}")]
    UnexpectedFsError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("CSV processing error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("Configuration error in '{field}': {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value '{value}' for '{field}': {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    FileSystem,
    Configuration,
    Output,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Medium,
    High,
    Critical,
}

impl DirexistsError {
    pub fn unexpected_fs(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::UnexpectedFsError {
            path: path.into(),
            source,
        }
    }

    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::UnexpectedFsError { .. } => ErrorCategory::FileSystem,
            Self::IoError(_) | Self::SerializationError(_) | Self::CsvError(_) => {
                ErrorCategory::Output
            }
            Self::ConfigValidationError { .. } | Self::InvalidConfigValueError { .. } => {
                ErrorCategory::Configuration
            }
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            ErrorCategory::FileSystem => ErrorSeverity::Critical,
            ErrorCategory::Output => ErrorSeverity::High,
            ErrorCategory::Configuration => ErrorSeverity::Medium,
        }
    }

    /// 對應的行程結束碼
    pub fn exit_code(&self) -> i32 {
        match self.severity() {
            ErrorSeverity::Medium => 2,
            ErrorSeverity::High | ErrorSeverity::Critical => 1,
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            Self::UnexpectedFsError { path, source } => {
                format!("Could not check '{}': {}", path.display(), source)
            }
            Self::IoError(e) => format!("Failed to write the report: {}", e),
            Self::SerializationError(e) => format!("Failed to encode the report as JSON: {}", e),
            Self::CsvError(e) => format!("Failed to encode the report as CSV: {}", e),
            Self::ConfigValidationError { field, message } => {
                format!("Configuration problem in '{}': {}", field, message)
            }
            Self::InvalidConfigValueError {
                field,
                value,
                reason,
            } => format!("'{}' is not a valid value for '{}': {}", value, field, reason),
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            Self::UnexpectedFsError { source, .. } => match source.kind() {
                std::io::ErrorKind::PermissionDenied => {
                    "Check that every parent directory is searchable by the current user"
                }
                _ => "Check the path and the health of the underlying filesystem",
            },
            Self::IoError(_) => "Check that the output location is writable",
            Self::SerializationError(_) | Self::CsvError(_) => {
                "Try another output format with --format"
            }
            Self::ConfigValidationError { .. } => "Make sure the config file is valid TOML",
            Self::InvalidConfigValueError { .. } => "Fix the configuration value and run again",
        }
    }
}

pub type Result<T> = std::result::Result<T, DirexistsError>;
