//! 表示用フォーマット

const UNITS: [&str; 4] = ["Bytes", "KB", "MB", "GB"];

/// バイト数を人が読める形式に変換（1024基数、小数2桁で丸め）
pub fn format_file_size(bytes: u64) -> String {
    if bytes == 0 {
        return "0 Bytes".to_string();
    }

    let mut index = 0;
    while index < UNITS.len() - 1 && bytes >= 1024u64.pow(index as u32 + 1) {
        index += 1;
    }

    let value = bytes as f64 / 1024f64.powi(index as i32);
    let rounded = (value * 100.0).round() / 100.0;
    format!("{} {}", rounded, UNITS[index])
}

/// パーセント表示（小数1桁）
pub fn format_percent(value: f64) -> String {
    format!("{:.1}%", value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_file_size_examples() {
        assert_eq!(format_file_size(0), "0 Bytes");
        assert_eq!(format_file_size(1024), "1 KB");
        assert_eq!(format_file_size(1536), "1.5 KB");
        assert_eq!(format_file_size(1_048_576), "1 MB");
    }

    #[test]
    fn test_format_file_size_bytes() {
        assert_eq!(format_file_size(1), "1 Bytes");
        assert_eq!(format_file_size(1023), "1023 Bytes");
    }

    #[test]
    fn test_format_file_size_rounding() {
        // 1.2345 KB → 1.23
        assert_eq!(format_file_size(1264), "1.23 KB");
        assert_eq!(format_file_size(10 * 1024 * 1024), "10 MB");
        assert_eq!(format_file_size(3 * 1024 * 1024 * 1024 / 2), "1.5 GB");
    }

    #[test]
    fn test_format_file_size_caps_at_gb() {
        let two_tb = 2u64 * 1024 * 1024 * 1024 * 1024;
        assert_eq!(format_file_size(two_tb), "2048 GB");
    }

    #[test]
    fn test_format_percent() {
        assert_eq!(format_percent(87.0), "87.0%");
        assert_eq!(format_percent(92.46), "92.5%");
        assert_eq!(format_percent(0.0), "0.0%");
    }
}
