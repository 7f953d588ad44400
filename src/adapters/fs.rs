use crate::domain::model::EntryKind;
use crate::domain::ports::MetadataSource;
use std::io;
use std::path::Path;

/// 直接呼叫 `std::fs::symlink_metadata`（即 lstat）
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalFs;

impl MetadataSource for LocalFs {
    fn symlink_kind(&self, path: &Path) -> io::Result<EntryKind> {
        let file_type = std::fs::symlink_metadata(path)?.file_type();

        let kind = if file_type.is_symlink() {
            EntryKind::Symlink
        } else if file_type.is_dir() {
            EntryKind::Directory
        } else if file_type.is_file() {
            EntryKind::File
        } else {
            EntryKind::Other
        };
        Ok(kind)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_reports_files_and_directories() {
        let temp_dir = TempDir::new().unwrap();
        let file_path = temp_dir.path().join("data.txt");
        std::fs::write(&file_path, b"hello").unwrap();

        assert_eq!(LocalFs.symlink_kind(&file_path).unwrap(), EntryKind::File);
        assert_eq!(
            LocalFs.symlink_kind(temp_dir.path()).unwrap(),
            EntryKind::Directory
        );
    }

    #[test]
    fn test_missing_entry_is_not_found() {
        let temp_dir = TempDir::new().unwrap();
        let err = LocalFs
            .symlink_kind(&temp_dir.path().join("missing"))
            .unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::NotFound);
    }

    #[cfg(unix)]
    #[test]
    fn test_symlink_is_not_followed() {
        let temp_dir = TempDir::new().unwrap();
        let target = temp_dir.path().join("target_dir");
        std::fs::create_dir(&target).unwrap();
        let link = temp_dir.path().join("link");
        std::os::unix::fs::symlink(&target, &link).unwrap();

        assert_eq!(LocalFs.symlink_kind(&link).unwrap(), EntryKind::Symlink);
    }
}
