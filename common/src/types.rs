//! 店舗データの型定義
//!
//! CLIとWeb(WASM)で共有される型:
//! - StoreRecord: 店舗1件分のデータ（DBスキーマ準拠）
//! - normalize_image_path: 画像参照の正規化（データ取得境界で適用）

use serde::{Deserialize, Serialize};

/// 店舗データ
///
/// フィールド名はDBスキーマ（snake_case）のまま送受信する。
/// `appeal_point` は null / 欠落を許容し、検索時は「一致なし」として扱う。
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoreRecord {
    pub id: u32,

    pub store_name: String,

    #[serde(default)]
    pub taste: u8,              // 味

    #[serde(default)]
    pub cleanliness: u8,        // 清潔さ

    #[serde(default)]
    pub atmosphere: u8,         // 雰囲気

    #[serde(default)]
    pub price: u8,              // 価格

    #[serde(default)]
    pub appeal_point: Option<String>,

    #[serde(default)]
    pub url: String,

    #[serde(default)]
    pub image_path: String,
}

impl StoreRecord {
    /// アピールポイント（空文字は None 扱い）
    pub fn appeal_text(&self) -> Option<&str> {
        self.appeal_point
            .as_deref()
            .filter(|s| !s.is_empty())
    }

    /// 画像参照を正規化したレコードを返す
    pub fn normalized(mut self) -> Self {
        self.image_path = normalize_image_path(&self.image_path);
        self
    }
}

/// 画像参照を表示用URLへ正規化
///
/// - スキーム付きの値（`http:` / `https:` / `data:` / `blob:` など）はそのまま
/// - `/` または `../` で始まるパスはそのまま
/// - ファイル名のみ（例: `react.webp`）はルート相対パス `/react.webp` に変換
/// - 空文字は空文字のまま
///
/// # Examples
/// ```
/// use meshi_common::normalize_image_path;
///
/// assert_eq!(normalize_image_path("react.webp"), "/react.webp");
/// assert_eq!(normalize_image_path("https://example.com/a.png"), "https://example.com/a.png");
/// ```
pub fn normalize_image_path(raw: &str) -> String {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return String::new();
    }

    if has_scheme(trimmed) || trimmed.starts_with('/') || trimmed.starts_with("../") {
        trimmed.to_string()
    } else {
        format!("/{}", trimmed.trim_start_matches("./"))
    }
}

/// `:` が最初の `/` より前にあればスキーム付きとみなす
fn has_scheme(value: &str) -> bool {
    match (value.find(':'), value.find('/')) {
        (Some(colon), Some(slash)) => colon < slash,
        (Some(_), None) => true,
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_store_record_deserialize() {
        let json = r#"{
            "id": 2,
            "store_name": "Reactラーメン 恵比寿店",
            "taste": 5,
            "cleanliness": 5,
            "atmosphere": 3,
            "price": 2,
            "appeal_point": "とにかくスープが絶品。店内も清潔です。",
            "url": "https://react.dev/",
            "image_path": "react.webp"
        }"#;

        let store: StoreRecord = serde_json::from_str(json).expect("デシリアライズ失敗");
        assert_eq!(store.id, 2);
        assert_eq!(store.store_name, "Reactラーメン 恵比寿店");
        assert_eq!(store.price, 2);
        assert_eq!(store.appeal_text(), Some("とにかくスープが絶品。店内も清潔です。"));
    }

    #[test]
    fn test_store_record_missing_appeal_point() {
        // appeal_point・評価欄が欠落していても読み込める
        let json = r#"{"id": 9, "store_name": "名無し食堂"}"#;

        let store: StoreRecord = serde_json::from_str(json).expect("デシリアライズ失敗");
        assert_eq!(store.appeal_point, None);
        assert_eq!(store.taste, 0);
        assert_eq!(store.url, "");
    }

    #[test]
    fn test_store_record_null_appeal_point() {
        let json = r#"{"id": 3, "store_name": "x", "appeal_point": null}"#;

        let store: StoreRecord = serde_json::from_str(json).expect("デシリアライズ失敗");
        assert_eq!(store.appeal_text(), None);
    }

    #[test]
    fn test_appeal_text_empty_is_none() {
        let store = StoreRecord {
            appeal_point: Some(String::new()),
            ..Default::default()
        };
        assert_eq!(store.appeal_text(), None);
    }

    #[test]
    fn test_store_record_serialize_snake_case() {
        let store = StoreRecord {
            id: 1,
            store_name: "絶品！Next.jsカフェ".to_string(),
            ..Default::default()
        };

        let json = serde_json::to_string(&store).expect("シリアライズ失敗");
        assert!(json.contains("\"store_name\":\"絶品！Next.jsカフェ\""));
        assert!(json.contains("\"appeal_point\":null"));
    }

    #[test]
    fn test_normalize_image_path() {
        assert_eq!(normalize_image_path("next.jpg"), "/next.jpg");
        assert_eq!(normalize_image_path("./tail.png"), "/tail.png");
        assert_eq!(normalize_image_path("/logo.png"), "/logo.png");
        assert_eq!(
            normalize_image_path("https://via.placeholder.com/150/F2994A/FFFFFF?text=Cafe"),
            "https://via.placeholder.com/150/F2994A/FFFFFF?text=Cafe"
        );
        assert_eq!(normalize_image_path("   "), "");
    }

    /// スキーム付きの値と親ディレクトリ参照は書き換えない
    #[test]
    fn test_normalize_image_path_keeps_schemes_and_parent_paths() {
        assert_eq!(
            normalize_image_path("data:image/png;base64,iVBORw0KGgo="),
            "data:image/png;base64,iVBORw0KGgo="
        );
        assert_eq!(normalize_image_path("blob:https://example.com/1"), "blob:https://example.com/1");
        assert_eq!(normalize_image_path("../images/curry.png"), "../images/curry.png");
        // パス中の `:` はスキームではない
        assert_eq!(normalize_image_path("img/12:00.png"), "/img/12:00.png");
    }

    #[test]
    fn test_normalized_record() {
        let store = StoreRecord {
            image_path: "react.webp".to_string(),
            ..Default::default()
        };
        assert_eq!(store.normalized().image_path, "/react.webp");
    }
}
