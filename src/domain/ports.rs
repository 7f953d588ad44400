use crate::domain::model::EntryKind;
use std::io;
use std::path::Path;

/// lstat 風格的查詢：回報項目本身，不跟隨符號連結。
///
/// 找不到項目時必須回傳 `io::ErrorKind::NotFound`，其他失敗照原樣回傳。
pub trait MetadataSource {
    fn symlink_kind(&self, path: &Path) -> io::Result<EntryKind>;
}

impl<M: MetadataSource + ?Sized> MetadataSource for &M {
    fn symlink_kind(&self, path: &Path) -> io::Result<EntryKind> {
        (**self).symlink_kind(path)
    }
}
