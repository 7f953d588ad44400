use crate::utils::error::{DirexistsError, Result};

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

/// 只用於設定檔中的輸出路徑；被檢查的路徑交給作業系統判斷
pub fn validate_path(field_name: &str, path: &str) -> Result<()> {
    if path.is_empty() {
        return Err(DirexistsError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path cannot be empty".to_string(),
        });
    }

    if path.contains('\0') {
        return Err(DirexistsError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path contains null bytes".to_string(),
        });
    }

    Ok(())
}
