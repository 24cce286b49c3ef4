//! 店舗カタログ
//!
//! 店舗一覧の取得元（StoreSource）と、動作確認用のモックデータ。
//! 取得元から読み込んだ一覧はここで画像参照を正規化し、ID重複を検査する。

use std::collections::HashSet;

use crate::error::{Error, Result};
use crate::types::StoreRecord;

/// 店舗一覧の取得元
///
/// 本来は `GET /api/stores` が返す店舗配列。ページ読み込みごとに1回だけ呼ばれる。
#[allow(async_fn_in_trait)]
pub trait StoreSource {
    async fn list_stores(&self) -> Result<Vec<StoreRecord>>;
}

/// モックデータを返す取得元
#[derive(Debug, Clone, Copy, Default)]
pub struct MockStoreSource;

impl StoreSource for MockStoreSource {
    async fn list_stores(&self) -> Result<Vec<StoreRecord>> {
        Ok(mock_stores())
    }
}

/// 動作確認用のモックデータ（DBスキーマ準拠）
pub fn mock_stores() -> Vec<StoreRecord> {
    vec![
        StoreRecord {
            id: 1,
            store_name: "絶品！Next.jsカフェ".to_string(),
            taste: 5,
            cleanliness: 4,
            atmosphere: 5,
            price: 3,
            appeal_point: Some("席が広く、雰囲気が静かで作業に集中できます。".to_string()),
            url: "https://nextjs.org/docs".to_string(),
            image_path: "next.jpg".to_string(),
        },
        StoreRecord {
            id: 2,
            store_name: "Reactラーメン 恵比寿店".to_string(),
            taste: 5,
            cleanliness: 5,
            atmosphere: 3,
            price: 2,
            appeal_point: Some("とにかくスープが絶品。店内も清潔です。".to_string()),
            url: "https://react.dev/".to_string(),
            image_path: "react.webp".to_string(),
        },
        StoreRecord {
            id: 3,
            store_name: "Tailwindビストロ".to_string(),
            taste: 4,
            cleanliness: 3,
            atmosphere: 4,
            price: 4,
            appeal_point: Some("おしゃれな内装でデートにぴったり。".to_string()),
            url: "https://tailwindcss.com/".to_string(),
            image_path: "tail.png".to_string(),
        },
    ]
    .into_iter()
    .map(StoreRecord::normalized)
    .collect()
}

/// 取得した一覧を表示用に整える
///
/// 画像参照を正規化し、ID重複があれば `DuplicateStoreId` を返す。
pub fn prepare_catalog(stores: Vec<StoreRecord>) -> Result<Vec<StoreRecord>> {
    let mut seen = HashSet::new();
    for store in &stores {
        if !seen.insert(store.id) {
            return Err(Error::DuplicateStoreId(store.id));
        }
    }

    Ok(stores.into_iter().map(StoreRecord::normalized).collect())
}

/// JSON配列から店舗一覧を読み込む
///
/// # Examples
/// ```
/// use meshi_common::parse_catalog;
///
/// let stores = parse_catalog(r#"[{"id": 1, "store_name": "a", "image_path": "a.png"}]"#).unwrap();
/// assert_eq!(stores[0].image_path, "/a.png");
/// ```
pub fn parse_catalog(json: &str) -> Result<Vec<StoreRecord>> {
    let stores: Vec<StoreRecord> = serde_json::from_str(json)?;
    prepare_catalog(stores)
}

/// IDで店舗を探す
pub fn find_store(stores: &[StoreRecord], id: u32) -> Result<&StoreRecord> {
    stores
        .iter()
        .find(|s| s.id == id)
        .ok_or(Error::StoreNotFound(id))
}
