use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "meshi-umatch")]
#[command(about = "飲食店検索ツール（めしUmatch）", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// 詳細ログを出力
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// 店名・アピールポイントで店舗を絞り込む
    Search {
        /// 検索語（空文字で全件）
        #[arg(default_value = "")]
        query: String,

        /// 店舗一覧JSONファイル
        #[arg(short, long)]
        stores: Option<PathBuf>,

        /// 検索APIに問い合わせる
        #[arg(long)]
        remote: bool,
    },

    /// 店舗一覧を表示
    Stores {
        /// 店舗一覧JSONファイル
        #[arg(short, long)]
        stores: Option<PathBuf>,

        /// 店舗一覧APIから取得
        #[arg(long)]
        remote: bool,
    },

    /// 検索APIへクエリを送信（結果はログに出力）
    Submit {
        /// 検索語
        query: String,

        /// 検索APIのベースURL（省略時は設定値）
        #[arg(short, long)]
        endpoint: Option<String>,
    },

    /// 検索欄のプレースホルダーをローテーション表示
    Hints {
        /// 切り替え回数
        #[arg(short, long, default_value = "3")]
        ticks: usize,

        /// 切り替え間隔（ミリ秒、省略時は設定値）
        #[arg(short, long)]
        interval_ms: Option<u64>,

        /// 乱数シード（再現用）
        #[arg(long)]
        seed: Option<u64>,
    },

    /// 対話的に店舗を検索
    Interactive {
        /// 店舗一覧JSONファイル
        #[arg(short, long)]
        stores: Option<PathBuf>,
    },

    /// 店舗を予約（確認メッセージのみ）
    Reserve {
        /// 店舗ID
        id: u32,

        /// 店舗一覧JSONファイル
        #[arg(short, long)]
        stores: Option<PathBuf>,
    },

    /// 設定を表示/編集
    Config {
        /// APIベースURLを設定
        #[arg(long)]
        set_api_base: Option<String>,

        /// 既定の店舗一覧JSONファイルを設定
        #[arg(long)]
        set_stores: Option<PathBuf>,

        /// 設定を表示
        #[arg(long)]
        show: bool,
    },
}
