//! 通知（トースト）の状態管理
//!
//! 同時に表示するのは1件のみ。新しい通知は現在の通知を置き換える。

use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// 自動で閉じるまでの時間 (ms)
pub const AUTO_DISMISS_MS: u32 = 5000;

/// フェードアウトにかかる時間 (ms)
pub const FADE_OUT_MS: u32 = 300;

/// 通知の重要度
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    #[default]
    Info,
    Success,
    Error,
    Warning,
}

impl Severity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Info => "info",
            Severity::Success => "success",
            Severity::Error => "error",
            Severity::Warning => "warning",
        }
    }

    /// Font Awesome のアイコン名
    pub fn icon(&self) -> &'static str {
        match self {
            Severity::Info => "info-circle",
            Severity::Success => "check-circle",
            Severity::Error => "exclamation-circle",
            Severity::Warning => "exclamation-triangle",
        }
    }

    /// 未知の文字列は Info 扱い
    pub fn parse_lenient(s: &str) -> Self {
        s.parse().unwrap_or_default()
    }
}

impl FromStr for Severity {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "info" => Ok(Severity::Info),
            "success" => Ok(Severity::Success),
            "error" => Ok(Severity::Error),
            "warning" => Ok(Severity::Warning),
            _ => Err(format!("unknown severity: {}", s)),
        }
    }
}

/// 通知ID
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct NotificationId(u64);

/// 表示中の通知
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Notification {
    pub id: NotificationId,
    pub message: String,
    pub severity: Severity,
    /// フェードアウト中
    pub leaving: bool,
}

impl Notification {
    /// CSSクラス: `notification error` など
    pub fn class_name(&self) -> String {
        format!("notification {}", self.severity.as_str())
    }

    pub fn icon_class(&self) -> String {
        format!("fas fa-{}", self.severity.icon())
    }
}

/// 最大1件のトーストキュー
#[derive(Debug, Clone, Default)]
pub struct Toaster {
    current: Option<Notification>,
    last_id: u64,
}

impl Toaster {
    /// 通知を表示する（既存の通知は取り除かれる）
    pub fn show(&mut self, message: impl Into<String>, severity: Severity) -> NotificationId {
        self.last_id += 1;
        let id = NotificationId(self.last_id);
        let message = message.into();
        log::debug!("notification [{}] {}", severity.as_str(), message);
        self.current = Some(Notification {
            id,
            message,
            severity,
            leaving: false,
        });
        id
    }

    /// 自動クローズのフェードアウト開始。まだ表示中の場合のみ `true`。
    pub fn begin_dismiss(&mut self, id: NotificationId) -> bool {
        match self.current.as_mut() {
            Some(n) if n.id == id => {
                n.leaving = true;
                true
            }
            _ => false,
        }
    }

    /// 通知を取り除く。まだ表示中の場合のみ `true`。
    pub fn close(&mut self, id: NotificationId) -> bool {
        if self.current.as_ref().map(|n| n.id) == Some(id) {
            self.current = None;
            true
        } else {
            false
        }
    }

    pub fn current(&self) -> Option<&Notification> {
        self.current.as_ref()
    }

    #[cfg(test)]
    fn visible_count(&self) -> usize {
        usize::from(self.current.is_some())
    }
}
