use std::fs::File;
use std::io::Read;
use std::path::Path;

/// 形式判定に読む先頭バイト数
const HEADER_LEN: u64 = 1024;

/// ファイル先頭のマジックバイトから実際の画像形式のMIMEタイプを推定
pub fn sniff_mime(path: &Path) -> std::io::Result<Option<&'static str>> {
    let mut header = Vec::with_capacity(HEADER_LEN as usize);
    File::open(path)?.take(HEADER_LEN).read_to_end(&mut header)?;
    Ok(image::guess_format(&header).ok().map(|format| format.to_mime_type()))
}
