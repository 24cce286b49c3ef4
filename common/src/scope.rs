//! コンポーネント寿命に紐づくキャンセルスコープ
//!
//! タイマーや通信の完了時に、所有コンポーネントが破棄済みでないかを確認する。
//! 破棄（cancel）後は状態更新を一切行わない。

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// キャンセルスコープ
///
/// クローンは同じ状態を共有する。一度キャンセルすると元に戻らない。
#[derive(Debug, Clone, Default)]
pub struct CancelScope {
    cancelled: Arc<AtomicBool>,
}

impl CancelScope {
    pub fn new() -> Self {
        Self::default()
    }

    /// スコープを破棄済みにする
    pub fn cancel(&self) {
        self.cancelled.store(true, Ordering::SeqCst);
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::SeqCst)
    }

    /// スコープが生きている間だけ `f` を実行する
    pub fn run<T>(&self, f: impl FnOnce() -> T) -> Option<T> {
        if self.is_cancelled() {
            None
        } else {
            Some(f())
        }
    }
}
