//! skin-scan: アップロード前のローカル事前チェック
//!
//! Webのアップロードフォームと同じポリシーでファイルを検証する。

pub mod check;
pub mod cli;
pub mod config;
pub mod error;
pub mod preview;
pub mod scanner;
