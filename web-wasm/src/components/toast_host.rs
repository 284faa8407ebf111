//! 通知トーストコンポーネント

use leptos::prelude::*;
use crate::notify::Toasts;

#[component]
pub fn ToastHost() -> impl IntoView {
    let toasts = expect_context::<Toasts>();

    move || {
        toasts.current().map(|notification| {
            let id = notification.id;
            let class = notification.class_name();
            let icon = notification.icon_class();
            let style = if notification.leaving {
                "animation: slideOut 0.3s ease"
            } else {
                ""
            };

            view! {
                <div class=class style=style role="status">
                    <div class="notification-content">
                        <i class=icon></i>
                        <span>{notification.message}</span>
                    </div>
                    <button
                        class="notification-close"
                        on:click=move |_| toasts.close(id)
                    >
                        <i class="fas fa-times"></i>
                    </button>
                </div>
            }
        })
    }
}
