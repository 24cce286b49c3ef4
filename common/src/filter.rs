//! 店舗フィルタ
//!
//! 店名またはアピールポイントの部分一致（大文字小文字を区別しない）で絞り込む。
//! トークン分割・あいまい検索・ランキングは行わず、元の並び順を保持する。

use crate::types::StoreRecord;

/// 1件の店舗がクエリに一致するか判定
///
/// - 空クエリはすべての店舗に一致する
/// - `appeal_point` が欠落・空の店舗は店名のみで判定する
pub fn matches(store: &StoreRecord, query: &str) -> bool {
    let needle = query.to_lowercase();
    matches_folded(store, &needle)
}

fn matches_folded(store: &StoreRecord, needle: &str) -> bool {
    if store.store_name.to_lowercase().contains(needle) {
        return true;
    }

    store
        .appeal_text()
        .map(|appeal| appeal.to_lowercase().contains(needle))
        .unwrap_or(false)
}

/// 店舗一覧をクエリで絞り込む（順序保持）
///
/// # Arguments
/// * `stores` - 全店舗
/// * `query` - 検索ボックスの入力値（トリムしない）
///
/// # Returns
/// 一致した店舗の参照（元の並び順）
pub fn filter_stores<'a>(stores: &'a [StoreRecord], query: &str) -> Vec<&'a StoreRecord> {
    let needle = query.to_lowercase();
    stores
        .iter()
        .filter(|store| matches_folded(store, &needle))
        .collect()
}
