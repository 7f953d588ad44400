use crate::adapters::LocalFs;
use crate::domain::model::{EntryKind, Existence, ProbeReport};
use crate::domain::ports::MetadataSource;
use crate::utils::error::{DirexistsError, Result};
use chrono::Utc;
use std::io::ErrorKind;
use std::path::Path;

/// 判斷路徑上是否有檔案系統項目。
///
/// 查詢不跟隨符號連結，所以指向不存在目標的連結仍算存在。
/// 只有 `NotFound` 會被視為「不存在」，其餘作業系統錯誤都回傳
/// [`DirexistsError::UnexpectedFsError`]，由呼叫端決定是否中止。
#[derive(Debug, Clone, Default)]
pub struct PathExistenceChecker<M: MetadataSource = LocalFs> {
    source: M,
}

impl PathExistenceChecker<LocalFs> {
    pub fn local() -> Self {
        Self { source: LocalFs }
    }
}

impl<M: MetadataSource> PathExistenceChecker<M> {
    pub fn new(source: M) -> Self {
        Self { source }
    }

    fn lookup(&self, path: &Path) -> Result<Option<EntryKind>> {
        match self.source.symlink_kind(path) {
            Ok(kind) => Ok(Some(kind)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(DirexistsError::unexpected_fs(path, e)),
        }
    }

    pub fn exists<P: AsRef<Path>>(&self, path: P) -> Result<Existence> {
        let existence = match self.lookup(path.as_ref())? {
            Some(_) => Existence::Exists,
            None => Existence::DoesNotExist,
        };
        Ok(existence)
    }

    /// 與 [`exists`](Self::exists) 相同的判斷，另外記錄項目類型與檢查時間
    pub fn probe<P: AsRef<Path>>(&self, path: P) -> Result<ProbeReport> {
        let path = path.as_ref();
        let kind = self.lookup(path)?;
        let existence = if kind.is_some() {
            Existence::Exists
        } else {
            Existence::DoesNotExist
        };

        tracing::debug!(
            "lstat {} -> {:?} ({})",
            path.display(),
            existence,
            kind.map(|k| k.to_string()).unwrap_or_else(|| "-".to_string())
        );

        Ok(ProbeReport {
            path: path.to_path_buf(),
            existence,
            kind,
            checked_at: Utc::now(),
        })
    }

    /// 非預期錯誤時印出診斷訊息到 stderr 並以狀態碼 1 結束行程
    pub fn exists_or_exit<P: AsRef<Path>>(&self, path: P) -> Existence {
        match self.exists(path) {
            Ok(existence) => existence,
            Err(e) => exit_with_diagnostic(&e),
        }
    }
}

/// 印出錯誤描述到 stderr 後結束行程，結束碼依錯誤嚴重程度決定
pub fn exit_with_diagnostic(err: &DirexistsError) -> ! {
    tracing::error!(
        "❌ {} (Category: {:?}, Severity: {:?})",
        err.user_friendly_message(),
        err.category(),
        err.severity()
    );
    tracing::error!("💡 Recovery suggestion: {}", err.recovery_suggestion());
    eprintln!("{}", err);
    std::process::exit(err.exit_code());
}

/// 用本機檔案系統檢查單一路徑
pub fn exists<P: AsRef<Path>>(path: P) -> Result<Existence> {
    PathExistenceChecker::local().exists(path)
}
