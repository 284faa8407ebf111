//! 通知の表示とタイマー管理

use gloo::timers::callback::Timeout;
use leptos::prelude::*;
use skin_scan_common::notification::{AUTO_DISMISS_MS, FADE_OUT_MS};
use skin_scan_common::{Notification, NotificationId, Severity, Toaster};
use std::cell::OnceCell;

thread_local! {
    static GLOBAL: OnceCell<Toasts> = const { OnceCell::new() };
}

/// トーストキューへのハンドル
#[derive(Clone, Copy)]
pub struct Toasts(RwSignal<Toaster>);

impl Toasts {
    pub fn new() -> Self {
        Self(RwSignal::new(Toaster::default()))
    }

    /// `showNotification` から使うため登録する（最初の1回のみ有効）
    pub fn register_global(self) {
        GLOBAL.with(|cell| {
            if cell.set(self).is_err() {
                log::debug!("notification host already registered");
            }
        });
    }

    pub fn global() -> Option<Self> {
        GLOBAL.with(|cell| cell.get().copied())
    }

    pub fn current(&self) -> Option<Notification> {
        self.0.with(|t| t.current().cloned())
    }

    /// 通知を表示し、5秒後にフェードアウトして閉じる
    pub fn show(&self, message: impl Into<String>, severity: Severity) {
        let message = message.into();
        let Some(id) = self.0.try_update(|t| t.show(message, severity)) else {
            return;
        };

        let toaster = self.0;
        Timeout::new(AUTO_DISMISS_MS, move || {
            if toaster.try_update(|t| t.begin_dismiss(id)).unwrap_or(false) {
                Timeout::new(FADE_OUT_MS, move || {
                    toaster.try_update(|t| t.close(id));
                })
                .forget();
            }
        })
        .forget();
    }

    pub fn error(&self, message: impl Into<String>) {
        self.show(message, Severity::Error);
    }

    pub fn success(&self, message: impl Into<String>) {
        self.show(message, Severity::Success);
    }

    pub fn close(&self, id: NotificationId) {
        self.0.try_update(|t| t.close(id));
    }
}

impl Default for Toasts {
    fn default() -> Self {
        Self::new()
    }
}
