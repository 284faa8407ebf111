//! 信頼度バーのカウントアップアニメーション

use crate::format::format_percent;

/// 最初のバーが動き出すまでの待ち時間 (ms)
pub const START_DELAY_MS: u32 = 500;

/// バーごとの開始ずらし (ms)
pub const STAGGER_MS: u32 = 300;

/// カウントアップの更新間隔 (ms)
pub const TICK_MS: u32 = 30;

/// 目標値に到達するまでのおおよそのステップ数
const STEPS: f64 = 40.0;

/// `index` 番目のバーの開始遅延
pub fn start_delay_ms(index: usize) -> u32 {
    START_DELAY_MS + STAGGER_MS * index as u32
}

/// `data-confidence` 属性の値を読む
///
/// 先頭の数値部分だけを見る（"85.3%" → 85.3, "9.5e1" → 95）。数値でない・有限でない場合は `None`。
pub fn parse_confidence(raw: &str) -> Option<f64> {
    let s = raw.trim_start();
    let bytes = s.as_bytes();
    let digits = |from: usize| bytes[from..].iter().take_while(|b| b.is_ascii_digit()).count();

    let mut end = usize::from(matches!(bytes.first(), Some(b'+' | b'-')));
    let int_digits = digits(end);
    end += int_digits;
    let mut frac_digits = 0;
    if bytes.get(end) == Some(&b'.') {
        frac_digits = digits(end + 1);
        end += 1 + frac_digits;
    }
    if int_digits + frac_digits == 0 {
        return None;
    }

    // 指数部は数字が続く場合だけ含める（"1e" → 1）
    if matches!(bytes.get(end), Some(b'e' | b'E')) {
        let sign = usize::from(matches!(bytes.get(end + 1), Some(b'+' | b'-')));
        let exp_digits = digits(end + 1 + sign);
        if exp_digits > 0 {
            end += 1 + sign + exp_digits;
        }
    }
    s[..end].parse::<f64>().ok().filter(|v| v.is_finite())
}

/// 表示値を `ceil(target / 40)` ずつ目標値まで増やすイテレータ
///
/// 各要素が1ティック分の表示値。最後の要素は必ず目標値。
#[derive(Debug, Clone)]
pub struct CountUp {
    target: f64,
    step: f64,
    current: f64,
    done: bool,
}

impl CountUp {
    pub fn new(target: f64) -> Self {
        Self {
            target,
            step: (target / STEPS).ceil(),
            current: 0.0,
            done: false,
        }
    }

    /// バーの幅 (CSS)
    pub fn width_style(&self) -> String {
        format!("{}%", self.target)
    }

    /// 最終表示テキスト
    pub fn final_text(&self) -> String {
        format_percent(self.target)
    }
}

impl Iterator for CountUp {
    type Item = f64;

    fn next(&mut self) -> Option<f64> {
        if self.done {
            return None;
        }
        if self.current >= self.target || self.step <= 0.0 {
            self.done = true;
            return Some(self.target);
        }
        self.current += self.step;
        if self.current > self.target {
            self.current = self.target;
        }
        Some(self.current)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_start_delay() {
        assert_eq!(start_delay_ms(0), 500);
        assert_eq!(start_delay_ms(1), 800);
        assert_eq!(start_delay_ms(3), 1400);
    }

    #[test]
    fn test_parse_confidence() {
        assert_eq!(parse_confidence("87.5"), Some(87.5));
        assert_eq!(parse_confidence(" 85.3%"), Some(85.3));
        assert_eq!(parse_confidence("100"), Some(100.0));
        assert_eq!(parse_confidence("-3"), Some(-3.0));
        assert_eq!(parse_confidence("abc"), None);
        assert_eq!(parse_confidence(""), None);
        assert_eq!(parse_confidence("."), None);
        assert_eq!(parse_confidence("1.2.3"), Some(1.2));
        assert_eq!(parse_confidence("5."), Some(5.0));
        assert_eq!(parse_confidence(".5"), Some(0.5));
    }

    #[test]
    fn test_parse_confidence_exponent() {
        assert_eq!(parse_confidence("1e2"), Some(100.0));
        assert_eq!(parse_confidence("9.5e1%"), Some(95.0));
        assert_eq!(parse_confidence("2.5E-1"), Some(0.25));
        assert_eq!(parse_confidence("7e"), Some(7.0));
        assert_eq!(parse_confidence("7e+"), Some(7.0));
        assert_eq!(parse_confidence("1e999"), None);
    }

    #[test]
    fn test_count_up_terminates_at_target() {
        for target in [0.0, 0.5, 1.0, 33.3, 87.46, 99.99, 100.0] {
            let frames: Vec<f64> = CountUp::new(target).collect();
            assert!(frames.len() <= 45, "{} took {} frames", target, frames.len());
            assert_eq!(*frames.last().unwrap(), target);
            assert_eq!(format_percent(*frames.last().unwrap()), CountUp::new(target).final_text());
        }
    }

    #[test]
    fn test_count_up_steps() {
        // ceil(80 / 40) = 2
        let frames: Vec<f64> = CountUp::new(80.0).take(3).collect();
        assert_eq!(frames, vec![2.0, 4.0, 6.0]);
    }

    #[test]
    fn test_count_up_monotonic_and_clamped() {
        let frames: Vec<f64> = CountUp::new(87.46).collect();
        assert!(frames.windows(2).all(|w| w[0] <= w[1]));
        assert!(frames.iter().all(|v| *v <= 87.46));
    }

    #[test]
    fn test_count_up_non_positive_target() {
        let frames: Vec<f64> = CountUp::new(0.0).collect();
        assert_eq!(frames, vec![0.0]);
        let frames: Vec<f64> = CountUp::new(-5.0).collect();
        assert_eq!(frames, vec![-5.0]);
    }

    #[test]
    fn test_styles() {
        let count = CountUp::new(92.5);
        assert_eq!(count.width_style(), "92.5%");
        assert_eq!(count.final_text(), "92.5%");
    }
}
