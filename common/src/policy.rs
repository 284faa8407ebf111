//! アップロードポリシー（MIMEタイプ・ファイルサイズ）と検証

use crate::error::{Error, Result};
use crate::format::format_file_size;
use serde::{Deserialize, Serialize};

/// 受け付けるMIMEタイプ
pub const ACCEPTED_MIME_TYPES: &[&str] = &[
    "image/jpeg",
    "image/jpg",
    "image/png",
    "image/gif",
    "image/avif",
];

/// 最大ファイルサイズ (10MB, 境界値を含む)
pub const MAX_FILE_SIZE: u64 = 10 * 1024 * 1024;

/// 選択されたファイルの情報
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FileMeta {
    pub name: String,
    pub size: u64,
    pub mime: String,
}

impl FileMeta {
    pub fn new(name: impl Into<String>, size: u64, mime: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            size,
            mime: mime.into(),
        }
    }

    /// プレビューに表示するキャプション: `name (1.5 KB)`
    pub fn caption(&self) -> String {
        format!("{} ({})", self.name, format_file_size(self.size))
    }
}

/// アップロードポリシー
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct UploadPolicy {
    pub accepted_types: Vec<String>,
    pub max_file_size: u64,
}

impl Default for UploadPolicy {
    fn default() -> Self {
        Self {
            accepted_types: ACCEPTED_MIME_TYPES.iter().map(|t| t.to_string()).collect(),
            max_file_size: MAX_FILE_SIZE,
        }
    }
}

impl UploadPolicy {
    /// 設定値の妥当性チェック
    pub fn check(&self) -> Result<()> {
        if self.accepted_types.is_empty() {
            return Err(Error::Config("acceptedTypes must not be empty".into()));
        }
        if self.max_file_size == 0 {
            return Err(Error::Config("maxFileSize must be positive".into()));
        }
        Ok(())
    }

    pub fn accepts_type(&self, mime: &str) -> bool {
        self.accepted_types.iter().any(|t| t == mime)
    }

    /// 種別→サイズの順に検証し、最初の違反で打ち切る
    pub fn validate(&self, file: &FileMeta) -> Result<()> {
        if !self.accepts_type(&file.mime) {
            return Err(Error::UnsupportedType(file.mime.clone()));
        }
        if file.size > self.max_file_size {
            return Err(Error::FileTooLarge(file.size));
        }
        Ok(())
    }
}

/// デフォルトポリシーで検証
pub fn validate_file(file: &FileMeta) -> Result<()> {
    UploadPolicy::default().validate(file)
}

/// ファイル名の拡張子からブラウザが報告するであろうMIMEタイプを推定
///
/// 不明な拡張子は空文字（ブラウザの `File.type` と同じ）。
pub fn mime_from_file_name(name: &str) -> &'static str {
    let ext = match name.rsplit_once('.') {
        Some((_, ext)) => ext.to_ascii_lowercase(),
        None => return "",
    };
    match ext.as_str() {
        "jpg" | "jpeg" | "jpe" | "jfif" => "image/jpeg",
        "png" => "image/png",
        "gif" => "image/gif",
        "avif" => "image/avif",
        "webp" => "image/webp",
        "bmp" => "image/bmp",
        "tif" | "tiff" => "image/tiff",
        "svg" => "image/svg+xml",
        "heic" => "image/heic",
        "pdf" => "application/pdf",
        "txt" => "text/plain",
        _ => "",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts_every_listed_type() {
        for mime in ACCEPTED_MIME_TYPES {
            let file = FileMeta::new("a", 1, *mime);
            assert!(validate_file(&file).is_ok(), "{} should be accepted", mime);
        }
    }

    #[test]
    fn test_rejects_other_types() {
        for mime in ["image/webp", "image/bmp", "application/pdf", "", "IMAGE/PNG"] {
            let file = FileMeta::new("a", 1, mime);
            let err = validate_file(&file).unwrap_err();
            assert!(matches!(err, Error::UnsupportedType(_)), "{}", mime);
        }
    }

    #[test]
    fn test_size_boundary_inclusive() {
        let at_limit = FileMeta::new("a.png", MAX_FILE_SIZE, "image/png");
        assert!(validate_file(&at_limit).is_ok());

        let over = FileMeta::new("a.png", MAX_FILE_SIZE + 1, "image/png");
        assert!(matches!(validate_file(&over), Err(Error::FileTooLarge(10_485_761))));
    }

    #[test]
    fn test_type_checked_before_size() {
        let file = FileMeta::new("a.pdf", MAX_FILE_SIZE * 3, "application/pdf");
        assert!(matches!(validate_file(&file), Err(Error::UnsupportedType(_))));
    }

    #[test]
    fn test_zero_byte_file_accepted() {
        let file = FileMeta::new("empty.gif", 0, "image/gif");
        assert!(validate_file(&file).is_ok());
    }

    #[test]
    fn test_caption() {
        let file = FileMeta::new("mole.jpg", 1536, "image/jpeg");
        assert_eq!(file.caption(), "mole.jpg (1.5 KB)");
    }

    #[test]
    fn test_policy_deserialize_partial() {
        let policy: UploadPolicy = serde_json::from_str(r#"{"maxFileSize": 1024}"#).unwrap();
        assert_eq!(policy.max_file_size, 1024);
        assert_eq!(policy.accepted_types.len(), ACCEPTED_MIME_TYPES.len());
    }

    #[test]
    fn test_policy_check() {
        assert!(UploadPolicy::default().check().is_ok());
        let bad = UploadPolicy {
            max_file_size: 0,
            ..Default::default()
        };
        assert!(matches!(bad.check(), Err(Error::Config(_))));
    }

    #[test]
    fn test_mime_from_file_name() {
        assert_eq!(mime_from_file_name("photo.JPG"), "image/jpeg");
        assert_eq!(mime_from_file_name("scan.avif"), "image/avif");
        assert_eq!(mime_from_file_name("notes.txt"), "text/plain");
        assert_eq!(mime_from_file_name("README"), "");
        assert_eq!(mime_from_file_name("archive.xyz"), "");
    }
}
