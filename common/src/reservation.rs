//! 予約アクション
//!
//! 予約APIは未実装のため、店舗名を示す確認メッセージを返すだけ。
//! 予約内容はどこにも保存しない。

use crate::error::Result;
use crate::types::StoreRecord;

/// 予約受付の応答
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Acknowledgement {
    pub store_id: u32,
    pub message: String,
}

/// 予約窓口
pub trait ReservationDesk {
    fn reserve(&self, store: &StoreRecord) -> Result<Acknowledgement>;
}

/// 確認メッセージのみ返す窓口
#[derive(Debug, Clone, Copy, Default)]
pub struct AcknowledgeOnly;

impl ReservationDesk for AcknowledgeOnly {
    fn reserve(&self, store: &StoreRecord) -> Result<Acknowledgement> {
        Ok(Acknowledgement {
            store_id: store.id,
            message: reservation_message(&store.store_name),
        })
    }
}

/// 予約確認メッセージ
pub fn reservation_message(store_name: &str) -> String {
    format!("{} を予約します", store_name)
}
