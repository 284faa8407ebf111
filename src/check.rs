//! アップロードポリシーによる事前チェック

use crate::error::{Result, SkinScanError};
use crate::scanner::sniff_mime;
use indicatif::{ProgressBar, ProgressStyle};
use rayon::prelude::*;
use serde::Serialize;
use skin_scan_common::{format_file_size, mime_from_file_name, FileMeta, UploadPolicy};
use std::path::{Path, PathBuf};

/// 結果ページと同じ日時表記
const TIMESTAMP_FORMAT: &str = "%B %d, %Y at %I:%M %p";

/// 1ファイルのチェック結果
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckEntry {
    pub path: String,
    pub file_name: String,
    pub size: u64,
    pub size_label: String,
    /// ブラウザが報告するMIMEタイプ（拡張子由来）
    pub mime: String,
    /// 実際の内容から判定したMIMEタイプ
    pub sniffed_mime: Option<String>,
    pub accepted: bool,
    pub reason: Option<String>,
    /// 拡張子と中身の形式が食い違う
    pub content_mismatch: bool,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckReport {
    pub checked_at: String,
    pub policy: UploadPolicy,
    pub entries: Vec<CheckEntry>,
}

impl CheckReport {
    pub fn accepted_count(&self) -> usize {
        self.entries.iter().filter(|e| e.accepted).count()
    }

    pub fn rejected_count(&self) -> usize {
        self.entries.len() - self.accepted_count()
    }
}

pub fn check_file(path: &Path, policy: &UploadPolicy) -> Result<CheckEntry> {
    let file_name = path
        .file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_default();
    let size = std::fs::metadata(path)?.len();
    let mime = mime_from_file_name(&file_name);
    let sniffed = sniff_mime(path)?;

    let meta = FileMeta::new(file_name.clone(), size, mime);
    let verdict = policy.validate(&meta);
    let content_mismatch = match sniffed {
        Some(actual) => normalize_mime(actual) != normalize_mime(mime),
        None => false,
    };

    Ok(CheckEntry {
        path: path.display().to_string(),
        file_name,
        size,
        size_label: format_file_size(size),
        mime: mime.to_string(),
        sniffed_mime: sniffed.map(str::to_string),
        accepted: verdict.is_ok(),
        reason: verdict
            .err()
            .map(|e| SkinScanError::from_rejection(e, policy).to_string()),
        content_mismatch,
    })
}

/// 複数ファイルを並列にチェック（入力順を保持）
pub fn check_files(paths: &[PathBuf], policy: &UploadPolicy, show_progress: bool) -> Result<CheckReport> {
    let progress = if show_progress {
        let pb = ProgressBar::new(paths.len() as u64);
        pb.set_style(
            ProgressStyle::with_template("{bar:30} {pos}/{len} {msg}")
                .unwrap_or_else(|_| ProgressStyle::default_bar()),
        );
        pb
    } else {
        ProgressBar::hidden()
    };

    let entries = paths
        .par_iter()
        .map(|path| {
            let entry = check_file(path, policy);
            progress.inc(1);
            entry
        })
        .collect::<Result<Vec<_>>>()?;
    progress.finish_and_clear();

    for entry in &entries {
        log::info!("{} accepted={} mismatch={}", entry.path, entry.accepted, entry.content_mismatch);
    }

    Ok(CheckReport {
        checked_at: chrono::Local::now().format(TIMESTAMP_FORMAT).to_string(),
        policy: policy.clone(),
        entries,
    })
}

/// 表形式で出力
pub fn print_report(report: &CheckReport) {
    for entry in &report.entries {
        let mark = if entry.accepted { "✔" } else { "✘" };
        print!("{} {}  {}  {}", mark, entry.file_name, entry.size_label, display_mime(&entry.mime));
        if let Some(reason) = &entry.reason {
            print!("  ({})", reason);
        }
        if entry.content_mismatch {
            if let Some(actual) = &entry.sniffed_mime {
                print!("  [content looks like {}]", actual);
            }
        }
        println!();
    }
    println!(
        "\n{} accepted, {} rejected ({})",
        report.accepted_count(),
        report.rejected_count(),
        report.checked_at
    );
}

fn display_mime(mime: &str) -> &str {
    if mime.is_empty() { "unknown type" } else { mime }
}

/// `image/jpg` は `image/jpeg` と同じ扱い
fn normalize_mime(mime: &str) -> &str {
    match mime {
        "image/jpg" => "image/jpeg",
        other => other,
    }
}
