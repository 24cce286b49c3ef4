//! 店舗一覧ファイルテスト
//!
//! JSONファイルからの読み込みと取得元の選択を検証

use meshi_common::{Error, LocalSearch, StoreSource};
use meshi_umatch::catalog_file::{CatalogSource, FileStoreSource};
use meshi_umatch::config::Config;
use meshi_umatch::error::MeshiError;
use std::path::Path;
use tempfile::tempdir;

const CATALOG: &str = r#"[
  {"id": 10, "store_name": "海鮮亭", "taste": 5, "cleanliness": 4, "atmosphere": 4, "price": 3,
   "appeal_point": "新鮮な寿司", "url": "https://example.com/10", "image_path": "kaisen.jpg"},
  {"id": 11, "store_name": "Curry House", "taste": 4, "cleanliness": 3, "atmosphere": 3, "price": 2,
   "appeal_point": null, "url": "https://example.com/11", "image_path": "/img/curry.png"}
]"#;

/// ファイルから読み込み、画像パスを正規化
#[tokio::test]
async fn test_file_source_loads_catalog() {
    let dir = tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("stores.json");
    std::fs::write(&path, CATALOG).expect("書き込み失敗");

    let source = FileStoreSource::open(&path).expect("オープン失敗");
    let stores = source.list_stores().await.expect("読み込み失敗");

    assert_eq!(stores.len(), 2);
    assert_eq!(stores[0].image_path, "/kaisen.jpg");
    assert_eq!(stores[1].image_path, "/img/curry.png");
    assert_eq!(stores[1].appeal_point, None);
}

/// 読み込んだ一覧で絞り込み
#[tokio::test]
async fn test_file_source_search() {
    let dir = tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("stores.json");
    std::fs::write(&path, CATALOG).expect("書き込み失敗");

    let source = FileStoreSource::open(&path).expect("オープン失敗");
    let search = LocalSearch::load(&source).await.expect("読み込み失敗");

    let hits = search.filter("CURRY");
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].id, 11);
    assert_eq!(search.filter("寿司")[0].id, 10);
}

/// 存在しないファイル
#[test]
fn test_file_source_missing() {
    let result = FileStoreSource::open(Path::new("/nonexistent/stores-12345.json"));
    assert!(matches!(result, Err(MeshiError::FileNotFound(_))));
}

/// IDの重複は拒否
#[tokio::test]
async fn test_file_source_duplicate_id() {
    let dir = tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("dup.json");
    std::fs::write(
        &path,
        r#"[{"id": 1, "store_name": "A", "url": "", "image_path": ""},
            {"id": 1, "store_name": "B", "url": "", "image_path": ""}]"#,
    )
    .expect("書き込み失敗");

    let source = FileStoreSource::open(&path).expect("オープン失敗");
    let result = source.list_stores().await;
    assert!(matches!(result, Err(Error::DuplicateStoreId(1))));
}

/// 壊れたJSON
#[tokio::test]
async fn test_file_source_invalid_json() {
    let dir = tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("broken.json");
    std::fs::write(&path, "[{").expect("書き込み失敗");

    let source = FileStoreSource::open(&path).expect("オープン失敗");
    assert!(matches!(source.list_stores().await, Err(Error::Json(_))));
}

/// 指定がなければモックデータ
#[test]
fn test_resolve_defaults_to_mock() {
    let config = Config::default();
    let source = CatalogSource::resolve(None, false, &config).expect("解決失敗");
    assert!(matches!(source, CatalogSource::Mock(_)));
}

/// 引数のファイル指定は設定より優先
#[test]
fn test_resolve_prefers_argument() {
    let dir = tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("stores.json");
    std::fs::write(&path, CATALOG).expect("書き込み失敗");

    let config = Config {
        stores_file: Some(dir.path().join("missing.json")),
        ..Config::default()
    };

    let source = CatalogSource::resolve(Some(&path), false, &config).expect("解決失敗");
    assert!(matches!(source, CatalogSource::File(_)));

    let fallback = CatalogSource::resolve(None, false, &config);
    assert!(matches!(fallback, Err(MeshiError::FileNotFound(_))));
}
