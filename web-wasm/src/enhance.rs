//! ページ上の既存要素への振る舞い付与
//!
//! アップロードページ・結果ページのどちらでも、該当する要素があれば動作する。

use gloo::events::{EventListener, EventListenerOptions};
use gloo::timers::callback::Timeout;
use skin_scan_common::confidence::{start_delay_ms, TICK_MS};
use skin_scan_common::effects::{anchor_target, highlight_nav, reveal_visible};
use skin_scan_common::{
    extract_report_id, format_percent, parse_confidence, CountUp, PageContext, Rect, TooltipPlacement,
};
use wasm_bindgen::JsCast;
use web_sys::{Element, HtmlElement, ScrollLogicalPosition};

use crate::clipboard;
use crate::notify::Toasts;
use crate::page::{scroll_into_view, WebPage};

/// すべての振る舞いを付与する
pub fn install(page: &WebPage, toasts: Toasts) {
    install_scroll_reveal(page);
    install_nav_highlight(page);
    install_smooth_anchors(page);
    install_tooltips(page);
    animate_confidence_bars(page);
    install_report_copy(page, toasts);
}

fn install_scroll_reveal(page: &WebPage) {
    reveal_visible(page);
    let listener_page = page.clone();
    EventListener::new(page.window(), "scroll", move |_| {
        reveal_visible(&listener_page);
    })
    .forget();
}

fn install_nav_highlight(page: &WebPage) {
    let listener_page = page.clone();
    EventListener::new(page.window(), "scroll", move |_| {
        highlight_nav(&listener_page);
    })
    .forget();
}

fn install_smooth_anchors(page: &WebPage) {
    for anchor in page.query_all("a[href^=\"#\"]") {
        let listener_page = page.clone();
        let target_anchor = anchor.clone();
        EventListener::new_with_options(
            &anchor,
            "click",
            EventListenerOptions::enable_prevent_default(),
            move |event| {
                let href = target_anchor.get_attribute("href").unwrap_or_default();
                let Some(selector) = anchor_target(&href) else {
                    return;
                };
                event.prevent_default();
                if let Some(target) = listener_page.query_one(selector) {
                    scroll_into_view(&target, ScrollLogicalPosition::Start);
                }
            },
        )
        .forget();
    }
}

fn install_tooltips(page: &WebPage) {
    let Some(body) = page.document().body() else {
        return;
    };

    for element in page.query_all("[data-tooltip]") {
        let text = element.get_attribute("data-tooltip").unwrap_or_default();
        let Ok(tooltip) = page.document().create_element("div") else {
            continue;
        };
        tooltip.set_class_name("tooltip");
        tooltip.set_text_content(Some(&text));
        if body.append_child(&tooltip).is_err() {
            continue;
        }

        attach_tooltip(&element, &tooltip, "mouseenter", true);
        attach_tooltip(&element, &tooltip, "mouseleave", false);
    }
}

fn attach_tooltip(element: &Element, tooltip: &Element, event: &'static str, visible: bool) {
    let anchor = element.clone();
    let tooltip = tooltip.clone();
    EventListener::new(element, event, move |_| {
        let rect = anchor.get_bounding_client_rect();
        let placement =
            TooltipPlacement::above(Rect::new(rect.left(), rect.top(), rect.width(), rect.height()));
        if let Err(e) = tooltip.set_attribute("style", &placement.style(visible)) {
            log::debug!("tooltip style not applied: {:?}", e);
        }
    })
    .forget();
}

fn animate_confidence_bars(page: &WebPage) {
    for (index, element) in page.query_all(".confidence-fill").into_iter().enumerate() {
        let Ok(fill) = element.dyn_into::<HtmlElement>() else {
            continue;
        };
        let raw = fill.get_attribute("data-confidence").unwrap_or_default();
        let Some(target) = parse_confidence(&raw) else {
            log::warn!("confidence bar {} has no numeric value: {:?}", index, raw);
            continue;
        };

        Timeout::new(start_delay_ms(index), move || {
            let count = CountUp::new(target);
            if let Err(e) = fill.style().set_property("width", &count.width_style()) {
                log::debug!("confidence bar {} width not applied: {:?}", index, e);
            }
            schedule_tick(fill, count);
        })
        .forget();
    }
}

fn schedule_tick(fill: HtmlElement, mut count: CountUp) {
    Timeout::new(TICK_MS, move || {
        if !fill.is_connected() {
            return;
        }
        if let Some(value) = count.next() {
            fill.set_text_content(Some(&format_percent(value)));
            schedule_tick(fill, count);
        }
    })
    .forget();
}

fn install_report_copy(page: &WebPage, toasts: Toasts) {
    let Some(element) = page
        .query_one(".report-id")
        .and_then(|e| e.dyn_into::<HtmlElement>().ok())
    else {
        return;
    };

    if let Err(e) = element.style().set_property("cursor", "pointer") {
        log::debug!("report id cursor not applied: {:?}", e);
    }
    element.set_title("Click to copy Report ID");

    let source = element.clone();
    EventListener::new(&element, "click", move |_| {
        let report_id = extract_report_id(&source.text_content().unwrap_or_default());
        wasm_bindgen_futures::spawn_local(async move {
            match clipboard::copy_text(&report_id).await {
                Ok(()) => toasts.success("Report ID copied to clipboard"),
                Err(e) => log::warn!("{}", e),
            }
        });
    })
    .forget();
}
