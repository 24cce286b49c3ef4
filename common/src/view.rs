//! 検索結果画面の表示モデル
//!
//! 絞り込み結果を「カード一覧」か「0件メッセージ」に振り分ける。
//! 0件メッセージはクエリが空か否かの2状態のみ。

use crate::types::StoreRecord;

/// 外部リンクを開くターゲット
pub const LINK_TARGET: &str = "_blank";

/// 新しいタブから元ページを操作させないための rel 属性
pub const LINK_REL: &str = "noopener noreferrer";

/// 0件時に表示する検索例
pub const EXAMPLE_HINT: &str = "（例：Reactラーメン、おしゃれ）";

/// 0件時のメッセージ
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EmptyMessage {
    /// クエリが空
    PromptSearch,
    /// クエリに一致する店舗なし
    NoMatch,
}

impl EmptyMessage {
    pub fn for_query(query: &str) -> Self {
        if query.is_empty() {
            EmptyMessage::PromptSearch
        } else {
            EmptyMessage::NoMatch
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            EmptyMessage::PromptSearch => "お店を検索してください。",
            EmptyMessage::NoMatch => "一致するお店が見つかりませんでした。",
        }
    }
}

/// 店舗カード
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreCard {
    pub key: u32,
    pub title: String,
    pub href: String,
    /// 画像参照が空のときは None（`<img>` を出さない）
    pub image_src: Option<String>,
    pub image_alt: String,
    pub appeal_text: String,
}

impl From<&StoreRecord> for StoreCard {
    fn from(store: &StoreRecord) -> Self {
        Self {
            key: store.id,
            title: store.store_name.clone(),
            href: store.url.clone(),
            image_src: (!store.image_path.is_empty()).then(|| store.image_path.clone()),
            image_alt: store.store_name.clone(),
            appeal_text: store.appeal_text().unwrap_or_default().to_string(),
        }
    }
}

/// 検索結果の表示内容
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResultsView {
    Cards(Vec<StoreCard>),
    Empty(EmptyMessage),
}

impl ResultsView {
    /// 絞り込み結果とクエリから表示内容を決める
    pub fn from_query(filtered: &[&StoreRecord], query: &str) -> Self {
        if filtered.is_empty() {
            ResultsView::Empty(EmptyMessage::for_query(query))
        } else {
            ResultsView::Cards(filtered.iter().map(|s| StoreCard::from(*s)).collect())
        }
    }
}
