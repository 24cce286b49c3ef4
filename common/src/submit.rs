//! トップ画面の検索送信
//!
//! 送信処理の流れ:
//! 1. 入力値をトリムして空なら何もしない
//! 2. `{"query": 入力値}` を検索APIへPOST
//! 3. 成否はログにのみ残す（画面状態は変えない、入力欄もクリアしない）

use crate::scope::CancelScope;
use crate::search::{SearchClient, SearchRequest, SearchResponse};

/// 送信用のリクエストを作る
///
/// 空白のみの入力は None（送信しない）。送信する値はトリムせず入力どおり。
///
/// # Examples
/// ```
/// use meshi_common::prepare_submission;
///
/// assert!(prepare_submission("   ").is_none());
/// assert_eq!(prepare_submission(" ramen").unwrap().query, " ramen");
/// ```
pub fn prepare_submission(text: &str) -> Option<SearchRequest> {
    if text.trim().is_empty() {
        return None;
    }

    Some(SearchRequest {
        query: text.to_string(),
    })
}

/// 送信結果
#[derive(Debug, Clone, PartialEq)]
pub enum SubmitOutcome {
    /// 空入力のため送信しなかった
    Skipped,
    /// 応答を受信した
    Completed(SearchResponse),
    /// HTTPエラーまたは通信失敗（区別しない）
    Failed(String),
    /// 完了前にコンポーネントが破棄された
    Discarded,
}

/// 検索クエリを送信する
///
/// エラーは呼び出し側へ返さず `SubmitOutcome::Failed` にまとめる。
/// 応答待ちの間にスコープが破棄された場合は結果を捨てる。
pub async fn submit_search<C: SearchClient>(
    client: &C,
    text: &str,
    scope: &CancelScope,
) -> SubmitOutcome {
    let Some(request) = prepare_submission(text) else {
        return SubmitOutcome::Skipped;
    };

    let result = client.submit_query(&request.query).await;

    if scope.is_cancelled() {
        return SubmitOutcome::Discarded;
    }

    match result {
        Ok(response) => SubmitOutcome::Completed(response),
        Err(e) => SubmitOutcome::Failed(e.to_string()),
    }
}
