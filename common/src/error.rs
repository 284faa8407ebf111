//! エラー型定義
//!
//! アップロード系のバリアントは Display がそのまま通知文言になる。

use thiserror::Error;

/// 共通エラー型
#[derive(Error, Debug)]
pub enum Error {
    #[error("Please select an image first")]
    NoFileSelected,

    #[error("Please select a valid image file (JPG, PNG, JPEG, AVIF)")]
    UnsupportedType(String),

    #[error("File size must be less than 10MB")]
    FileTooLarge(u64),

    #[error("The image could not be loaded. Please try again.")]
    ImageLoad,

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Config error: {0}")]
    Config(String),
}

/// Result型エイリアス
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display_no_file() {
        let error = Error::NoFileSelected;
        assert_eq!(format!("{}", error), "Please select an image first");
    }

    #[test]
    fn test_error_display_unsupported_type_hides_mime() {
        let error = Error::UnsupportedType("application/pdf".to_string());
        let display = format!("{}", error);
        assert_eq!(display, "Please select a valid image file (JPG, PNG, JPEG, AVIF)");
        assert!(!display.contains("pdf"));
    }

    #[test]
    fn test_error_display_too_large() {
        let error = Error::FileTooLarge(20 * 1024 * 1024);
        assert_eq!(format!("{}", error), "File size must be less than 10MB");
    }

    #[test]
    fn test_error_display_json() {
        let json_error = serde_json::from_str::<serde_json::Value>("invalid json").unwrap_err();
        let error = Error::Json(json_error);
        assert!(format!("{}", error).contains("JSON error"));
    }

    #[test]
    fn test_error_display_config() {
        let error = Error::Config("maxFileSize must be positive".to_string());
        assert_eq!(format!("{}", error), "Config error: maxFileSize must be positive");
    }

    #[test]
    fn test_error_from_json() {
        let json_error = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let error: Error = json_error.into();
        assert!(matches!(error, Error::Json(_)));
    }
}
