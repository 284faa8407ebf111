mod sniff;

pub use sniff::sniff_mime;

use crate::error::{Result, SkinScanError};
use skin_scan_common::mime_from_file_name;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// 引数のパスからチェック対象ファイルを集める
///
/// ファイル指定はそのまま対象にする。フォルダは画像拡張子のファイルのみ、
/// `recursive` でなければ直下のみ。
pub fn collect_files(paths: &[PathBuf], recursive: bool) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();

    for path in paths {
        if path.is_file() {
            files.push(path.clone());
        } else if path.is_dir() {
            files.extend(scan_folder(path, recursive)?);
        } else {
            return Err(SkinScanError::PathNotFound(path.display().to_string()));
        }
    }

    files.sort();
    files.dedup();
    Ok(files)
}

pub fn scan_folder(folder: &Path, recursive: bool) -> Result<Vec<PathBuf>> {
    if !folder.is_dir() {
        return Err(SkinScanError::PathNotFound(folder.display().to_string()));
    }

    let max_depth = if recursive { usize::MAX } else { 1 };
    let mut images = Vec::new();

    for entry in WalkDir::new(folder).max_depth(max_depth) {
        let entry = entry?;
        let path = entry.path();
        if path.is_file() && is_image_file_name(&entry.file_name().to_string_lossy()) {
            images.push(path.to_path_buf());
        }
    }

    // ファイル名でソート
    images.sort();
    Ok(images)
}

fn is_image_file_name(name: &str) -> bool {
    mime_from_file_name(name).starts_with("image/")
}
