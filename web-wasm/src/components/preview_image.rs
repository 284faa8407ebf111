//! プレビュー画像
//!
//! データURLが揃うまで `<img>` を置かない（空の `src` は読込エラーになるため）。

use leptos::prelude::*;

use crate::components::image_error::ImageErrorPanel;

#[component]
pub fn PreviewImage(#[prop(into)] src: Signal<Option<String>>) -> impl IntoView {
    let (failed, set_failed) = signal(false);

    // 新しいプレビューごとにエラー表示を解除
    Effect::new(move |_| {
        src.track();
        set_failed.set(false);
    });

    view! {
        <Show when=move || src.with(Option::is_some)>
            <Show
                when=move || !failed.get()
                fallback=|| view! { <ImageErrorPanel /> }
            >
                <img
                    id="preview-image"
                    alt="Selected image preview"
                    src=move || src.get()
                    on:error=move |_| set_failed.set(true)
                />
            </Show>
        </Show>
    }
}
