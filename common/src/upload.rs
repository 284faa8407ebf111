//! アップロードフォームの状態管理
//!
//! ファイル選択 → 検証 → プレビュー読込 → 送信 の流れを DOM から切り離して保持する。
//! プレビュー読込は非同期なので、選択ごとに発行する [`SelectionToken`] で
//! 古い読込結果を破棄する。

use crate::error::{Error, Result};
use crate::policy::{FileMeta, UploadPolicy};
use serde::{Deserialize, Serialize};

/// 送信中のドロップゾーン・プレビューの不透明度
pub const BUSY_OPACITY: f32 = 0.5;

/// プレビュー表示からスクロールまでの待ち時間 (ms)
pub const PREVIEW_SCROLL_DELAY_MS: u32 = 300;

/// ファイル選択ごとに単調増加する識別子
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SelectionToken(u64);

/// アップロードフォームの状態
#[derive(Debug, Clone, Default)]
pub struct UploadState {
    pub file: Option<FileMeta>,
    pub validated: bool,
    pub preview: Option<String>,
    pub pending: Option<SelectionToken>,
    pub busy: bool,
}

/// アップロードフォームのコントローラ
#[derive(Debug, Clone, Default)]
pub struct UploadController {
    policy: UploadPolicy,
    state: UploadState,
    last_token: u64,
}

impl UploadController {
    pub fn new(policy: UploadPolicy) -> Self {
        Self {
            policy,
            state: UploadState::default(),
            last_token: 0,
        }
    }

    /// ファイル選択（クリック・ドロップ共通）
    ///
    /// 先頭のファイルのみ扱う。空なら何もしない (`Ok(None)`)。
    /// 検証に失敗した場合は状態をリセットしてエラーを返す。
    /// 成功時はプレビュー読込に使うトークンを返す。
    pub fn select<I>(&mut self, files: I) -> Result<Option<SelectionToken>>
    where
        I: IntoIterator<Item = FileMeta>,
    {
        if self.state.busy {
            log::debug!("selection ignored while submitting");
            return Ok(None);
        }

        let Some(file) = files.into_iter().next() else {
            return Ok(None);
        };

        if let Err(e) = self.policy.validate(&file) {
            log::info!("rejected {} ({}, {} bytes): {:?}", file.name, file.mime, file.size, e);
            self.reset();
            return Err(e);
        }

        self.last_token += 1;
        let token = SelectionToken(self.last_token);
        log::info!("accepted {} ({} bytes)", file.name, file.size);

        self.state.file = Some(file);
        self.state.validated = true;
        self.state.preview = None;
        self.state.pending = Some(token);
        Ok(Some(token))
    }

    /// プレビュー読込完了。最新の選択に対する結果のときだけ反映し `true` を返す。
    pub fn complete_preview(&mut self, token: SelectionToken, data_url: String) -> bool {
        if self.state.pending != Some(token) {
            log::debug!("discarding stale preview for {:?}", token);
            return false;
        }
        self.state.pending = None;
        self.state.preview = Some(data_url);
        true
    }

    /// プレビュー読込失敗。最新の選択に対するものならリセットしてエラーを返す。
    pub fn fail_preview(&mut self, token: SelectionToken) -> Option<Error> {
        if self.state.pending != Some(token) {
            return None;
        }
        self.reset();
        Some(Error::ImageLoad)
    }

    /// 選択解除（削除ボタン）。送信中は無視する。
    pub fn remove(&mut self) {
        if self.state.busy {
            return;
        }
        self.reset();
    }

    /// 状態を初期化する
    pub fn reset(&mut self) {
        self.state.file = None;
        self.state.validated = false;
        self.state.preview = None;
        self.state.pending = None;
        self.state.busy = false;
    }

    /// 送信前チェック。成功時は送信中状態へ移行する。
    ///
    /// ファイル未選択ならリセットせずにエラー、再検証に失敗したらリセットしてエラー。
    pub fn submit(&mut self) -> Result<()> {
        let Some(file) = self.state.file.as_ref() else {
            return Err(Error::NoFileSelected);
        };

        if let Err(e) = self.policy.validate(file) {
            self.reset();
            return Err(e);
        }

        log::info!("submitting {}", file.name);
        self.state.busy = true;
        Ok(())
    }

    pub fn file(&self) -> Option<&FileMeta> {
        self.state.file.as_ref()
    }

    pub fn preview(&self) -> Option<&str> {
        self.state.preview.as_deref()
    }

    pub fn caption(&self) -> Option<String> {
        self.state.file.as_ref().map(FileMeta::caption)
    }

    pub fn is_preview_visible(&self) -> bool {
        self.state.preview.is_some()
    }

    pub fn is_busy(&self) -> bool {
        self.state.busy
    }

    pub fn is_submit_enabled(&self) -> bool {
        self.state.file.is_some()
            && self.state.validated
            && self.state.preview.is_some()
            && !self.state.busy
    }

    pub fn drop_zone_opacity(&self) -> f32 {
        if self.state.busy { BUSY_OPACITY } else { 1.0 }
    }

    pub fn preview_opacity(&self) -> f32 {
        self.drop_zone_opacity()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::policy::MAX_FILE_SIZE;

    fn png(size: u64) -> FileMeta {
        FileMeta::new("lesion.png", size, "image/png")
    }

    fn ready(controller: &mut UploadController) -> SelectionToken {
        let token = controller.select([png(2048)]).unwrap().unwrap();
        assert!(controller.complete_preview(token, "data:image/png;base64,AAAA".into()));
        token
    }

    #[test]
    fn test_initial_state() {
        let controller = UploadController::default();
        assert!(controller.file().is_none());
        assert!(!controller.is_submit_enabled());
        assert!(!controller.is_preview_visible());
        assert_eq!(controller.drop_zone_opacity(), 1.0);
    }

    #[test]
    fn test_select_and_preview_enables_submit() {
        let mut controller = UploadController::default();
        let token = controller.select([png(2048)]).unwrap().unwrap();
        assert!(!controller.is_submit_enabled());

        assert!(controller.complete_preview(token, "data:image/png;base64,AAAA".into()));
        assert!(controller.is_preview_visible());
        assert!(controller.is_submit_enabled());
        assert_eq!(controller.caption().as_deref(), Some("lesion.png (2 KB)"));
        assert_eq!(controller.preview(), Some("data:image/png;base64,AAAA"));
    }

    #[test]
    fn test_empty_selection_is_noop() {
        let mut controller = UploadController::default();
        ready(&mut controller);
        assert!(controller.select(Vec::new()).unwrap().is_none());
        assert!(controller.is_submit_enabled());
    }

    #[test]
    fn test_only_first_file_considered() {
        let mut controller = UploadController::default();
        let files = vec![png(10), FileMeta::new("doc.pdf", 10, "application/pdf")];
        assert!(controller.select(files).unwrap().is_some());
        assert_eq!(controller.file().unwrap().name, "lesion.png");
    }

    #[test]
    fn test_invalid_type_resets() {
        let mut controller = UploadController::default();
        ready(&mut controller);

        let err = controller
            .select([FileMeta::new("a.webp", 10, "image/webp")])
            .unwrap_err();
        assert!(matches!(err, Error::UnsupportedType(_)));
        assert!(controller.file().is_none());
        assert!(!controller.is_preview_visible());
        assert!(!controller.is_submit_enabled());
    }

    #[test]
    fn test_oversized_rejected_regardless_of_type() {
        for mime in ["image/png", "image/jpeg", "image/avif"] {
            let mut controller = UploadController::default();
            let err = controller
                .select([FileMeta::new("big", MAX_FILE_SIZE + 1, mime)])
                .unwrap_err();
            assert!(matches!(err, Error::FileTooLarge(_)));
            assert!(!controller.is_submit_enabled());
        }
    }

    #[test]
    fn test_stale_preview_discarded() {
        let mut controller = UploadController::default();
        let first = controller.select([png(100)]).unwrap().unwrap();
        let second = controller
            .select([FileMeta::new("second.jpg", 200, "image/jpeg")])
            .unwrap()
            .unwrap();
        assert_ne!(first, second);

        assert!(!controller.complete_preview(first, "data:old".into()));
        assert!(!controller.is_preview_visible());

        assert!(controller.complete_preview(second, "data:new".into()));
        assert_eq!(controller.preview(), Some("data:new"));
        assert_eq!(controller.file().unwrap().name, "second.jpg");
    }

    #[test]
    fn test_preview_after_reset_discarded() {
        let mut controller = UploadController::default();
        let token = controller.select([png(100)]).unwrap().unwrap();
        controller.remove();
        assert!(!controller.complete_preview(token, "data:late".into()));
        assert!(!controller.is_submit_enabled());
    }

    #[test]
    fn test_fail_preview() {
        let mut controller = UploadController::default();
        let token = controller.select([png(100)]).unwrap().unwrap();
        assert!(matches!(controller.fail_preview(token), Some(Error::ImageLoad)));
        assert!(controller.file().is_none());
        assert!(controller.fail_preview(token).is_none());
    }

    #[test]
    fn test_submit_without_file() {
        let mut controller = UploadController::default();
        assert!(matches!(controller.submit(), Err(Error::NoFileSelected)));
        assert!(!controller.is_busy());
    }

    #[test]
    fn test_submit_enters_busy_state() {
        let mut controller = UploadController::default();
        ready(&mut controller);
        controller.submit().unwrap();

        assert!(controller.is_busy());
        assert!(!controller.is_submit_enabled());
        assert_eq!(controller.drop_zone_opacity(), BUSY_OPACITY);
        assert_eq!(controller.preview_opacity(), BUSY_OPACITY);
    }

    #[test]
    fn test_submit_revalidates_against_policy() {
        let mut controller = UploadController::new(UploadPolicy {
            max_file_size: 1024,
            ..Default::default()
        });
        let token = controller.select([png(512)]).unwrap().unwrap();
        controller.complete_preview(token, "data:x".into());

        controller.policy.max_file_size = 256;
        assert!(matches!(controller.submit(), Err(Error::FileTooLarge(512))));
        assert!(controller.file().is_none());
        assert!(!controller.is_busy());
    }

    #[test]
    fn test_busy_ignores_selection_and_removal() {
        let mut controller = UploadController::default();
        ready(&mut controller);
        controller.submit().unwrap();

        assert!(controller.select([png(1)]).unwrap().is_none());
        controller.remove();
        assert!(controller.is_busy());
        assert!(controller.file().is_some());
    }

    #[test]
    fn test_tokens_monotonic_across_resets() {
        let mut controller = UploadController::default();
        let a = controller.select([png(1)]).unwrap().unwrap();
        controller.remove();
        let b = controller.select([png(1)]).unwrap().unwrap();
        assert!(b.0 > a.0);
    }
}
