//! アップロードフォームコンポーネント

use gloo::timers::callback::Timeout;
use leptos::ev::{MouseEvent, SubmitEvent};
use leptos::html;
use leptos::prelude::*;
use skin_scan_common::upload::PREVIEW_SCROLL_DELAY_MS;
use skin_scan_common::{Error, FileMeta, SelectionToken, UploadController, ACCEPTED_MIME_TYPES};
use web_sys::{DragEvent, File, FileList, ScrollLogicalPosition};

use crate::components::preview_image::PreviewImage;
use crate::file_reader::read_as_data_url;
use crate::notify::Toasts;
use crate::page::scroll_into_view;

/// 送信先（サーバー側で解析して結果ページを返す）
const UPLOAD_ACTION: &str = "/upload";
/// ファイルのフォーム項目名
const FILE_FIELD: &str = "image";

#[component]
pub fn UploadForm() -> impl IntoView {
    let toasts = expect_context::<Toasts>();
    let upload = RwSignal::new(UploadController::default());
    let (is_dragover, set_is_dragover) = signal(false);
    let file_input = NodeRef::<html::Input>::new();
    let preview_ref = NodeRef::<html::Div>::new();

    let clear_input = move || {
        if let Some(input) = file_input.get_untracked() {
            input.set_value("");
        }
    };

    let handle_files = move |files: Option<FileList>| {
        let Some(files) = files else {
            return;
        };
        let selected: Vec<File> = (0..files.length()).filter_map(|i| files.get(i)).collect();
        let Some(outcome) = upload.try_update(|u| u.select(selected.iter().map(file_meta))) else {
            return;
        };

        match outcome {
            Ok(Some(token)) => {
                if let Some(file) = selected.into_iter().next() {
                    load_preview(upload, toasts, file_input, preview_ref, token, file);
                }
            }
            Ok(None) => {}
            Err(e) => {
                clear_input();
                toasts.error(e.to_string());
            }
        }
    };

    let on_change = move |_| {
        handle_files(file_input.get_untracked().and_then(|input| input.files()));
    };

    let on_click = move |_| {
        if upload.with_untracked(|u| u.is_busy()) {
            return;
        }
        if let Some(input) = file_input.get_untracked() {
            input.click();
        }
    };

    let on_dragover = move |ev: DragEvent| {
        ev.prevent_default();
        set_is_dragover.set(true);
    };

    let on_dragleave = move |_: DragEvent| {
        set_is_dragover.set(false);
    };

    let on_drop = move |ev: DragEvent| {
        ev.prevent_default();
        set_is_dragover.set(false);

        if upload.with_untracked(|u| u.is_busy()) {
            return;
        }
        let Some(files) = ev.data_transfer().and_then(|dt| dt.files()) else {
            return;
        };
        if files.length() == 0 {
            return;
        }

        // ドロップしたファイルでinputの中身を置き換え、フォーム送信に載せる
        let Some(input) = file_input.get_untracked() else {
            return;
        };
        input.set_files(Some(&files));
        handle_files(input.files());
    };

    let on_remove = move |ev: MouseEvent| {
        ev.stop_propagation();
        let removed = upload
            .try_update(|u| {
                let allowed = !u.is_busy();
                u.remove();
                allowed
            })
            .unwrap_or(false);
        if removed {
            clear_input();
        }
    };

    let on_submit = move |ev: SubmitEvent| {
        let outcome = upload
            .try_update(|u| u.submit())
            .unwrap_or(Err(Error::NoFileSelected));

        if let Err(e) = outcome {
            ev.prevent_default();
            if !matches!(e, Error::NoFileSelected) {
                clear_input();
            }
            toasts.error(e.to_string());
        }
    };

    let preview_src = Memo::new(move |_| upload.with(|u| u.preview().map(str::to_string)));
    let is_busy = move || upload.with(|u| u.is_busy());
    let preview_style = move || {
        upload.with(|u| {
            if u.is_preview_visible() {
                format!(
                    "display: block; opacity: {}; animation: scaleIn 0.5s ease",
                    u.preview_opacity()
                )
            } else {
                "display: none".to_string()
            }
        })
    };

    view! {
        <form
            id="upload-form"
            class="upload-form"
            action=UPLOAD_ACTION
            method="post"
            enctype="multipart/form-data"
            on:submit=on_submit
        >
            <input
                type="file"
                id="file-input"
                name=FILE_FIELD
                accept=ACCEPTED_MIME_TYPES.join(",")
                style="display: none"
                node_ref=file_input
                on:change=on_change
            />

            <div
                id="upload-area"
                class="upload-area"
                class:dragover=move || is_dragover.get()
                style=move || format!("opacity: {}", upload.with(|u| u.drop_zone_opacity()))
                on:click=on_click
                on:dragover=on_dragover
                on:dragleave=on_dragleave
                on:drop=on_drop
            >
                <div class="upload-icon">
                    <i class="fas fa-cloud-upload-alt"></i>
                </div>
                <p>"Drag & drop your image here or click to browse"</p>
                <p class="text-muted">"Supported formats: JPG, PNG, GIF, AVIF (max 10MB)"</p>
            </div>

            <div id="preview-container" class="preview-container" style=preview_style node_ref=preview_ref>
                <PreviewImage src=preview_src />
                <p id="file-name" class="file-name">
                    {move || upload.with(|u| u.caption().unwrap_or_default())}
                </p>
                <button
                    type="button"
                    id="remove-preview"
                    class="btn btn-small btn-tertiary"
                    on:click=on_remove
                >
                    <i class="fas fa-times"></i>
                    " Remove"
                </button>
            </div>

            <div
                id="loader"
                class="loader"
                style=move || if is_busy() { "display: block" } else { "display: none" }
            ></div>

            <button
                type="submit"
                id="submit-btn"
                class="btn btn-primary"
                disabled=move || !upload.with(|u| u.is_submit_enabled())
            >
                <Show
                    when=is_busy
                    fallback=|| view! { <i class="fas fa-microscope"></i>" Analyze Image" }
                >
                    <i class="fas fa-spinner fa-spin"></i>
                    " Processing..."
                </Show>
            </button>
        </form>
    }
}

fn file_meta(file: &File) -> FileMeta {
    FileMeta::new(file.name(), file.size() as u64, file.type_())
}

/// プレビュー用に読み込み、完了後に少し待ってからプレビューまでスクロールする
fn load_preview(
    upload: RwSignal<UploadController>,
    toasts: Toasts,
    file_input: NodeRef<html::Input>,
    preview_ref: NodeRef<html::Div>,
    token: SelectionToken,
    file: File,
) {
    wasm_bindgen_futures::spawn_local(async move {
        match read_as_data_url(&file).await {
            Ok(data_url) => {
                let applied = upload
                    .try_update(|u| u.complete_preview(token, data_url))
                    .unwrap_or(false);
                if !applied {
                    return;
                }
                Timeout::new(PREVIEW_SCROLL_DELAY_MS, move || {
                    if let Some(preview) = preview_ref.get_untracked() {
                        scroll_into_view(&preview, ScrollLogicalPosition::Center);
                    }
                })
                .forget();
            }
            Err(e) => {
                log::warn!("failed to read {}: {:?}", file.name(), e);
                if let Some(Some(err)) = upload.try_update(|u| u.fail_preview(token)) {
                    if let Some(input) = file_input.get_untracked() {
                        input.set_value("");
                    }
                    toasts.error(err.to_string());
                }
            }
        }
    });
}
