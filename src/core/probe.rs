use crate::core::checker::PathExistenceChecker;
use crate::domain::model::ProbeOutcome;
use crate::domain::ports::MetadataSource;
use crate::utils::error::{DirexistsError, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// 遇到非預期作業系統錯誤時的處理方式
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
#[serde(rename_all = "snake_case")]
pub enum ErrorPolicy {
    /// 立即停止
    #[default]
    Abort,
    /// 記錄失敗並繼續檢查其餘路徑
    Report,
}

/// 依序檢查多個路徑
pub struct Prober<M: MetadataSource> {
    checker: PathExistenceChecker<M>,
    policy: ErrorPolicy,
}

impl<M: MetadataSource> Prober<M> {
    pub fn new(checker: PathExistenceChecker<M>, policy: ErrorPolicy) -> Self {
        Self { checker, policy }
    }

    pub fn policy(&self) -> ErrorPolicy {
        self.policy
    }

    /// 檢查單一路徑，依政策決定錯誤要回傳還是轉成失敗結果
    pub fn check<P: AsRef<Path>>(&self, path: P) -> Result<ProbeOutcome> {
        match self.checker.probe(path) {
            Ok(report) => Ok(ProbeOutcome::Checked(report)),
            Err(DirexistsError::UnexpectedFsError { path, source })
                if self.policy == ErrorPolicy::Report =>
            {
                tracing::warn!("⚠️ Could not check '{}': {}", path.display(), source);
                Ok(ProbeOutcome::Failed {
                    path,
                    error: source.to_string(),
                })
            }
            Err(e) => Err(e),
        }
    }

    pub fn run<I, P>(&self, paths: I) -> Result<Vec<ProbeOutcome>>
    where
        I: IntoIterator<Item = P>,
        P: AsRef<Path>,
    {
        let mut outcomes = Vec::new();
        for path in paths {
            outcomes.push(self.check(path)?);
        }

        let failed = outcomes.iter().filter(|o| o.is_failed()).count();
        tracing::info!(
            "Checked {} path(s), {} could not be checked",
            outcomes.len(),
            failed
        );
        Ok(outcomes)
    }
}
