use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "skin-scan")]
#[command(about = "Check images against the upload form's policy before uploading", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// 詳細ログを出力
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// ファイル・フォルダをアップロードポリシーで検証
    Check {
        /// 対象のファイルまたはフォルダ
        #[arg(required = true)]
        paths: Vec<PathBuf>,

        /// サブフォルダも再帰的にスキャン
        #[arg(short = 'r', long)]
        recursive: bool,

        /// JSONで出力
        #[arg(long)]
        json: bool,
    },

    /// ブラウザのプレビューと同じ data URL を出力
    Preview {
        /// 画像ファイル
        #[arg(required = true)]
        file: PathBuf,

        /// 出力ファイル（デフォルト: 標準出力）
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// 設定の表示・変更
    Config {
        /// 最大ファイルサイズ（バイト）
        #[arg(long)]
        max_size: Option<u64>,

        /// 既定のポリシーに戻す
        #[arg(long)]
        reset: bool,

        /// 設定を表示
        #[arg(long)]
        show: bool,
    },
}
