//! ページ（DOM）への抽象インターフェース
//!
//! スクロール連動の処理はこのトレイト越しに DOM を参照・変更する。
//! ブラウザでは `web_sys` 実装、テストではメモリ上の実装を差し込む。

/// 要素の矩形（ビューポート座標）
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub fn new(left: f64, top: f64, width: f64, height: f64) -> Self {
        Self { left, top, width, height }
    }
}

pub trait PageContext {
    type Element;

    /// `window.innerHeight`
    fn viewport_height(&self) -> f64;

    /// `window.scrollY`
    fn scroll_y(&self) -> f64;

    fn query_all(&self, selector: &str) -> Vec<Self::Element>;

    /// `getBoundingClientRect()`
    fn bounding_rect(&self, element: &Self::Element) -> Rect;

    /// ドキュメント先頭からの位置 (`offsetTop`)
    fn offset_top(&self, element: &Self::Element) -> f64;

    fn attribute(&self, element: &Self::Element, name: &str) -> Option<String>;

    fn set_class(&self, element: &Self::Element, class: &str, enabled: bool);
}
