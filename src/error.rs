use skin_scan_common::{format_file_size, UploadPolicy};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SkinScanError {
    #[error("config error: {0}")]
    Config(String),

    #[error("path not found: {0}")]
    PathNotFound(String),

    #[error("{0}")]
    Upload(#[from] skin_scan_common::Error),

    #[error("File size must be less than {}", format_file_size(*.limit))]
    TooLarge { size: u64, limit: u64 },

    #[error("{0} file(s) would be rejected by the upload form")]
    Rejected(usize),

    #[error("JSON error: {0}")]
    JsonParse(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("directory scan failed: {0}")]
    Walk(#[from] walkdir::Error),
}

impl SkinScanError {
    /// 検証エラーを変換する。サイズ超過は設定中の上限を文言に含める。
    pub fn from_rejection(err: skin_scan_common::Error, policy: &UploadPolicy) -> Self {
        match err {
            skin_scan_common::Error::FileTooLarge(size) => SkinScanError::TooLarge {
                size,
                limit: policy.max_file_size,
            },
            other => other.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, SkinScanError>;
