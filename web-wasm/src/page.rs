//! `web_sys` による PageContext 実装

use skin_scan_common::{PageContext, Rect};
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlElement, ScrollBehavior, ScrollIntoViewOptions, ScrollLogicalPosition, Window};

/// 表示中のページ
#[derive(Clone)]
pub struct WebPage {
    window: Window,
    document: Document,
}

impl WebPage {
    pub fn current() -> Option<Self> {
        let window = web_sys::window()?;
        let document = window.document()?;
        Some(Self { window, document })
    }

    pub fn window(&self) -> &Window {
        &self.window
    }

    pub fn document(&self) -> &Document {
        &self.document
    }

    pub fn query_one(&self, selector: &str) -> Option<Element> {
        self.document.query_selector(selector).ok().flatten()
    }

    /// `<body data-page="...">`
    pub fn body_data(&self, key: &str) -> Option<String> {
        self.document
            .body()
            .and_then(|body| body.get_attribute(&format!("data-{}", key)))
    }
}

impl PageContext for WebPage {
    type Element = Element;

    fn viewport_height(&self) -> f64 {
        self.window
            .inner_height()
            .ok()
            .and_then(|v| v.as_f64())
            .unwrap_or(0.0)
    }

    fn scroll_y(&self) -> f64 {
        self.window.scroll_y().unwrap_or(0.0)
    }

    fn query_all(&self, selector: &str) -> Vec<Element> {
        let Ok(list) = self.document.query_selector_all(selector) else {
            log::warn!("invalid selector: {}", selector);
            return Vec::new();
        };
        (0..list.length())
            .filter_map(|i| list.item(i))
            .filter_map(|node| node.dyn_into::<Element>().ok())
            .collect()
    }

    fn bounding_rect(&self, element: &Element) -> Rect {
        let r = element.get_bounding_client_rect();
        Rect::new(r.left(), r.top(), r.width(), r.height())
    }

    fn offset_top(&self, element: &Element) -> f64 {
        element
            .dyn_ref::<HtmlElement>()
            .map(|e| e.offset_top() as f64)
            .unwrap_or(0.0)
    }

    fn attribute(&self, element: &Element, name: &str) -> Option<String> {
        element.get_attribute(name)
    }

    fn set_class(&self, element: &Element, class: &str, enabled: bool) {
        if let Err(e) = element.class_list().toggle_with_force(class, enabled) {
            log::debug!("class {} not toggled: {:?}", class, e);
        }
    }
}

/// スムーススクロールで要素を表示
pub fn scroll_into_view(element: &Element, block: ScrollLogicalPosition) {
    let options = ScrollIntoViewOptions::new();
    options.set_behavior(ScrollBehavior::Smooth);
    options.set_block(block);
    element.scroll_into_view_with_scroll_into_view_options(&options);
}
