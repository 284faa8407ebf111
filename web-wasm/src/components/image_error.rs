//! 画像読込エラー表示

use leptos::prelude::*;
use skin_scan_common::Error;
use web_sys::HtmlImageElement;

const TITLE: &str = "Image Loading Error";

#[component]
pub fn ImageErrorPanel() -> impl IntoView {
    view! {
        <div class="image-error">
            <i class="fas fa-exclamation-triangle"></i>
            <h4>{TITLE}</h4>
            <p>{Error::ImageLoad.to_string()}</p>
        </div>
    }
}

/// サーバー側で描画された `<img onerror=...>` 用。親要素の中身をエラー表示に置き換える。
pub fn replace_broken_image(img: &HtmlImageElement) {
    let Some(parent) = img.parent_element() else {
        log::warn!("broken image has no parent: {}", img.src());
        return;
    };
    parent.set_inner_html(&format!(
        r#"<div class="image-error"><i class="fas fa-exclamation-triangle"></i><h4>{}</h4><p>{}</p></div>"#,
        TITLE,
        Error::ImageLoad
    ));
}
