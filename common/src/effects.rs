//! スクロール表示・ナビゲーション・ツールチップの位置計算

use crate::page::{PageContext, Rect};

/// スクロールで表示アニメーションさせる要素
pub const REVEAL_SELECTOR: &str = ".fade-in, .scale-in, .slide-in";
pub const REVEAL_CLASS: &str = "animate";
/// ビューポート下端からこの距離まで入ったら表示
pub const REVEAL_MARGIN: f64 = 150.0;

pub const SECTION_SELECTOR: &str = "section[id]";
pub const NAV_LINK_SELECTOR: &str = ".nav-links a";
pub const ACTIVE_CLASS: &str = "active";
/// セクション判定の先読み量
pub const SECTION_OFFSET: f64 = 200.0;

/// ツールチップを要素の上にどれだけ離すか
pub const TOOLTIP_GAP: f64 = 40.0;

pub fn should_reveal(element_top: f64, viewport_height: f64) -> bool {
    element_top < viewport_height - REVEAL_MARGIN
}

/// 表示範囲に入った要素に `animate` を付ける。付けた要素数を返す。
pub fn reveal_visible<P: PageContext>(page: &P) -> usize {
    let viewport_height = page.viewport_height();
    let mut count = 0;
    for element in page.query_all(REVEAL_SELECTOR) {
        if should_reveal(page.bounding_rect(&element).top, viewport_height) {
            page.set_class(&element, REVEAL_CLASS, true);
            count += 1;
        }
    }
    count
}

/// 現在位置のセクションID: `scroll_y >= top - 200` を満たす最後のセクション
pub fn active_section<I, S>(sections: I, scroll_y: f64) -> Option<S>
where
    I: IntoIterator<Item = (S, f64)>,
{
    sections
        .into_iter()
        .filter(|(_, top)| scroll_y >= top - SECTION_OFFSET)
        .last()
        .map(|(id, _)| id)
}

/// ナビゲーションの `active` を現在のセクションに合わせる
pub fn highlight_nav<P: PageContext>(page: &P) -> Option<String> {
    let sections = page
        .query_all(SECTION_SELECTOR)
        .into_iter()
        .filter_map(|section| {
            let id = page.attribute(&section, "id")?;
            Some((id, page.offset_top(&section)))
        });
    let current = active_section(sections, page.scroll_y());
    let target = current.as_ref().map(|id| format!("#{}", id));

    for link in page.query_all(NAV_LINK_SELECTOR) {
        let href = page.attribute(&link, "href");
        let active = target.is_some() && href == target;
        page.set_class(&link, ACTIVE_CLASS, active);
    }
    current
}

/// ページ内リンクのスクロール先セレクタ。`#` 単体は対象外。
pub fn anchor_target(href: &str) -> Option<&str> {
    if href.len() > 1 && href.starts_with('#') {
        Some(href)
    } else {
        None
    }
}

/// ツールチップの表示位置（要素の上端中央から上へ）
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TooltipPlacement {
    pub left: f64,
    pub top: f64,
}

impl TooltipPlacement {
    pub fn above(rect: Rect) -> Self {
        Self {
            left: rect.left + rect.width / 2.0,
            top: rect.top - TOOLTIP_GAP,
        }
    }

    /// 表示・非表示の inline style
    pub fn style(&self, visible: bool) -> String {
        let (opacity, transform) = if visible {
            ("1", "translate(-50%, 0)")
        } else {
            ("0", "translate(-50%, 10px)")
        };
        format!(
            "left: {}px; top: {}px; opacity: {}; transform: {};",
            self.left, self.top, opacity, transform
        )
    }
}

/// "Report ID: xxx" からIDだけを取り出す
pub fn extract_report_id(text: &str) -> String {
    text.replacen("Report ID: ", "", 1).trim().to_string()
}
