//! ブラウザのプレビューと同じ data URL を生成

use crate::error::{Result, SkinScanError};
use base64::{engine::general_purpose::STANDARD, Engine as _};
use skin_scan_common::{mime_from_file_name, FileMeta, UploadPolicy};
use std::path::Path;

/// ポリシーで検証してから `data:<mime>;base64,...` を返す
pub fn data_url(path: &Path, policy: &UploadPolicy) -> Result<String> {
    let file_name = path
        .file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_default();
    let size = std::fs::metadata(path)?.len();
    let mime = mime_from_file_name(&file_name);

    policy
        .validate(&FileMeta::new(file_name, size, mime))
        .map_err(|e| SkinScanError::from_rejection(e, policy))?;

    let bytes = std::fs::read(path)?;
    Ok(format!("data:{};base64,{}", mime, STANDARD.encode(bytes)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_data_url() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("dot.gif");
        std::fs::write(&path, b"GIF89a").unwrap();

        let url = data_url(&path, &UploadPolicy::default()).unwrap();
        assert_eq!(url, "data:image/gif;base64,R0lGODlh");
    }

    #[test]
    fn test_data_url_rejects_invalid_type() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("notes.txt");
        std::fs::write(&path, b"hi").unwrap();

        let err = data_url(&path, &UploadPolicy::default()).unwrap_err();
        assert!(matches!(
            err,
            SkinScanError::Upload(skin_scan_common::Error::UnsupportedType(_))
        ));
    }
}
