//! `submit` サブコマンド
//!
//! トップ画面の送信処理と同じ振る舞い: 空入力は何もしない、成否はログのみ。
//! Ctrl+C で中断した場合、遅れて届いた応答は捨てる。

use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};
use meshi_common::{submit_search, CancelScope, SearchClient, SubmitOutcome};
use tracing::{error, info};

/// 送信結果をログに記録
pub fn log_outcome(outcome: &SubmitOutcome) {
    match outcome {
        SubmitOutcome::Completed(response) => info!("バックエンドからの応答: {}", response.0),
        SubmitOutcome::Failed(message) => error!("検索リクエストの送信に失敗しました: {}", message),
        SubmitOutcome::Skipped => info!("入力が空のため送信しません"),
        SubmitOutcome::Discarded => info!("中断されたため応答を破棄しました"),
    }
}

/// クエリを送信し、結果をログに残す
pub async fn run_submit<C: SearchClient>(client: &C, text: &str, show_spinner: bool) -> SubmitOutcome {
    let scope = CancelScope::new();

    let spinner = show_spinner.then(|| {
        let pb = ProgressBar::new_spinner();
        pb.set_style(
            ProgressStyle::default_spinner()
                .template("{spinner} {msg}")
                .unwrap_or_else(|_| ProgressStyle::default_spinner()),
        );
        pb.set_message("送信中...");
        pb.enable_steady_tick(Duration::from_millis(100));
        pb
    });

    let outcome = tokio::select! {
        outcome = submit_search(client, text, &scope) => outcome,
        _ = tokio::signal::ctrl_c() => {
            scope.cancel();
            SubmitOutcome::Discarded
        }
    };

    if let Some(pb) = spinner {
        pb.finish_and_clear();
    }

    log_outcome(&outcome);
    outcome
}
