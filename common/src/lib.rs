//! Skin Scan Common Library
//!
//! CLIとWeb(WASM)で共有されるアップロードポリシーと画面状態

pub mod error;
pub mod format;
pub mod policy;
pub mod upload;
pub mod notification;
pub mod confidence;
pub mod page;
pub mod effects;

pub use error::{Error, Result};
pub use format::{format_file_size, format_percent};
pub use policy::{FileMeta, UploadPolicy, ACCEPTED_MIME_TYPES, MAX_FILE_SIZE, mime_from_file_name, validate_file};
pub use upload::{SelectionToken, UploadController, UploadState};
pub use notification::{Notification, NotificationId, Severity, Toaster};
pub use confidence::{CountUp, parse_confidence};
pub use page::{PageContext, Rect};
pub use effects::{TooltipPlacement, extract_report_id};
