//! Skin Scan Web App (Leptos + WASM)

mod app;
mod clipboard;
mod components;
mod enhance;
mod file_reader;
mod notify;
mod page;

use wasm_bindgen::prelude::*;
use skin_scan_common::Severity;

#[wasm_bindgen(start)]
pub fn main() {
    console_error_panic_hook::set_once();
    // 失敗するのは既にロガーが登録済みの場合のみ
    if let Err(e) = console_log::init_with_level(log::Level::Info) {
        log::debug!("console logger not installed: {}", e);
    }
    leptos::mount::mount_to_body(app::App);
}

/// ページ側スクリプトから通知を出す: `showNotification("msg", "success")`
#[wasm_bindgen(js_name = "showNotification")]
pub fn show_notification(message: &str, kind: Option<String>) {
    let severity = kind.as_deref().map(Severity::parse_lenient).unwrap_or_default();
    match notify::Toasts::global() {
        Some(toasts) => toasts.show(message, severity),
        None => log::warn!("notification before mount: {}", message),
    }
}

/// `<img onerror="handleImageError(this)">` 用
#[wasm_bindgen(js_name = "handleImageError")]
pub fn handle_image_error(img: web_sys::HtmlImageElement) {
    components::image_error::replace_broken_image(&img);
}
