use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;

/// 單次查詢的結果，只有兩種
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Existence {
    Exists,
    DoesNotExist,
}

impl Existence {
    pub fn is_present(self) -> bool {
        matches!(self, Existence::Exists)
    }
}

/// lstat 回報的項目類型（符號連結不會被跟隨）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EntryKind {
    File,
    Directory,
    Symlink,
    Other,
}

impl fmt::Display for EntryKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            EntryKind::File => "file",
            EntryKind::Directory => "directory",
            EntryKind::Symlink => "symlink",
            EntryKind::Other => "other",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProbeReport {
    pub path: PathBuf,
    pub existence: Existence,
    pub kind: Option<EntryKind>,
    pub checked_at: DateTime<Utc>,
}

/// 批次檢查中單一路徑的結果；`Failed` 只會在 report 模式出現
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum ProbeOutcome {
    Checked(ProbeReport),
    Failed { path: PathBuf, error: String },
}

impl ProbeOutcome {
    pub fn path(&self) -> &std::path::Path {
        match self {
            ProbeOutcome::Checked(report) => &report.path,
            ProbeOutcome::Failed { path, .. } => path,
        }
    }

    pub fn is_failed(&self) -> bool {
        matches!(self, ProbeOutcome::Failed { .. })
    }
}
