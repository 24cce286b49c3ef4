//! 検索欄プレースホルダーのローテーション
//!
//! 表示開始時は候補の先頭を表示し、一定間隔ごとに候補から一様ランダムに選び直す。
//! 直前と同じ候補が選ばれてもよい。乱数源は呼び出し側が注入する。

use crate::error::{Error, Result};
use crate::scope::CancelScope;

/// 検索欄に表示するプレースホルダーの候補
pub const PLACEHOLDER_HINTS: &[&str] = &[
    "食べたい気分や苦手な食べ物で検索...",
    "人数やシチュエーションで検索...",
    "予算やエリアで検索...",
];

/// プレースホルダーのローテーション間隔（ミリ秒）
pub const PLACEHOLDER_ROTATION_MS: u32 = 10_000;

/// プレースホルダーのローテーション状態
#[derive(Debug, Clone)]
pub struct PlaceholderRotator {
    hints: Vec<String>,
    current: usize,
}

impl PlaceholderRotator {
    /// 候補一覧から作成（先頭を初期表示）
    pub fn new<I, S>(hints: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let hints: Vec<String> = hints.into_iter().map(Into::into).collect();
        if hints.is_empty() {
            return Err(Error::EmptyHints);
        }
        Ok(Self { hints, current: 0 })
    }

    /// 既定の候補で作成
    pub fn with_default_hints() -> Self {
        Self {
            hints: PLACEHOLDER_HINTS.iter().map(|s| s.to_string()).collect(),
            current: 0,
        }
    }

    /// 現在表示中の候補
    pub fn current(&self) -> &str {
        &self.hints[self.current]
    }

    /// 次の候補を選ぶ
    ///
    /// # Arguments
    /// * `scope` - 所有コンポーネントのスコープ。破棄済みなら何もしない
    /// * `pick` - 候補数 `n` を受け取り `0..n` の一様乱数を返す関数
    ///
    /// # Returns
    /// 新しく表示する候補。スコープ破棄済みなら None
    pub fn rotate<F>(&mut self, scope: &CancelScope, pick: F) -> Option<&str>
    where
        F: FnOnce(usize) -> usize,
    {
        if scope.is_cancelled() {
            return None;
        }

        let len = self.hints.len();
        // 範囲外の値は剰余で候補内に収める
        self.current = pick(len) % len;
        Some(self.current())
    }
}

impl Default for PlaceholderRotator {
    fn default() -> Self {
        Self::with_default_hints()
    }
}

/// `[0, 1)` の一様乱数を候補インデックスに変換
///
/// ブラウザの `Math.random()` を使う場合の変換。
pub fn index_from_unit(unit: f64, len: usize) -> usize {
    let index = (unit * len as f64).floor() as usize;
    index.min(len.saturating_sub(1))
}
