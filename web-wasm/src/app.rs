//! メインアプリケーションコンポーネント

use leptos::prelude::*;
use crate::components::{
    header::Header,
    toast_host::ToastHost,
    upload_form::UploadForm,
};
use crate::enhance;
use crate::notify::Toasts;
use crate::page::WebPage;

/// 表示中のページ種別（`<body data-page="...">`）
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum PageKind {
    Upload,
    /// サーバー側で描画された結果ページ
    Result,
}

impl PageKind {
    pub fn from_attr(value: Option<&str>) -> Self {
        match value {
            Some("result") => PageKind::Result,
            _ => PageKind::Upload,
        }
    }

    pub fn detect() -> Self {
        let attr = WebPage::current().and_then(|page| page.body_data("page"));
        Self::from_attr(attr.as_deref())
    }
}

/// メインアプリケーションコンポーネント
#[component]
pub fn App() -> impl IntoView {
    let toasts = Toasts::new();
    toasts.register_global();
    provide_context(toasts);

    let page_kind = PageKind::detect();
    log::info!("mounted on {:?} page", page_kind);

    // 描画後にページ上の要素へ振る舞いを付与
    Effect::new(move |_| {
        if let Some(page) = WebPage::current() {
            enhance::install(&page, toasts);
        }
    });

    view! {
        <ToastHost />

        <Show when=move || page_kind == PageKind::Upload>
            <Header />

            <main class="container">
                <section id="home" class="hero fade-in">
                    <h1>"Skin Lesion Analysis"</h1>
                    <p class="text-muted">
                        "Upload a photo of a skin lesion to get an AI-assisted assessment in seconds."
                    </p>
                    <a href="#upload" class="btn btn-primary">"Get started"</a>
                </section>

                <section id="upload" class="upload-section scale-in">
                    <h2>"Upload an image"</h2>
                    <UploadForm />
                </section>

                <section id="about" class="about slide-in">
                    <h2>"How it works"</h2>
                    <div class="steps">
                        <div class="step fade-in">
                            <h3 data-tooltip="Cancer vs. non-cancer">"1. Screening"</h3>
                            <p>"A binary model checks whether the lesion looks malignant."</p>
                        </div>
                        <div class="step fade-in">
                            <h3 data-tooltip="Only when the screening is positive">"2. Classification"</h3>
                            <p>"A second model estimates the most likely lesion type."</p>
                        </div>
                        <div class="step fade-in">
                            <h3 data-tooltip="Model certainty, not a diagnosis">"3. Report"</h3>
                            <p>"You get a report with confidence scores and a report ID."</p>
                        </div>
                    </div>
                    <p class="disclaimer">
                        "This tool does not replace a medical examination. Consult a dermatologist."
                    </p>
                </section>
            </main>
        </Show>
    }
}
