//! ヘッダーコンポーネント

use leptos::prelude::*;

#[component]
pub fn Header() -> impl IntoView {
    view! {
        <header class="header">
            <nav class="navbar">
                <a href="#home" class="logo">
                    <i class="fas fa-microscope"></i>
                    " SkinScan"
                </a>
                <ul class="nav-links">
                    <li><a href="#home">"Home"</a></li>
                    <li><a href="#upload">"Analyze"</a></li>
                    <li><a href="#about">"How it works"</a></li>
                </ul>
            </nav>
        </header>
    }
}
