//! 検索サービス
//!
//! トップ画面（クエリ送信）と検索結果画面（ローカル絞り込み）が共通で使う
//! `SearchService` と、その2つの実装:
//! - LocalSearch: 読み込み済みの店舗一覧をその場で絞り込む
//! - RemoteSearch: `/api/search` にクエリを送り、応答から店舗一覧を取り出す

use serde::{Deserialize, Serialize};

use crate::catalog::{prepare_catalog, StoreSource};
use crate::error::Result;
use crate::filter::filter_stores;
use crate::submit::prepare_submission;
use crate::types::StoreRecord;

/// 検索APIのエンドポイント
pub const SEARCH_ENDPOINT: &str = "/api/search";

/// 店舗一覧APIのエンドポイント
pub const STORES_ENDPOINT: &str = "/api/stores";

/// 検索APIリクエスト
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchRequest {
    pub query: String,
}

/// 検索APIレスポンス
///
/// 形状は未確定のため、任意のJSONとして保持する。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SearchResponse(pub serde_json::Value);

impl SearchResponse {
    /// 応答から店舗一覧を取り出す
    ///
    /// 受け付ける形状:
    /// 1. 店舗の配列 `[...]`
    /// 2. `{"stores": [...]}`
    ///
    /// それ以外、または読み取れない場合は空の一覧
    pub fn stores(&self) -> Vec<StoreRecord> {
        let candidate = match &self.0 {
            serde_json::Value::Array(_) => &self.0,
            serde_json::Value::Object(map) => match map.get("stores") {
                Some(stores) => stores,
                None => return Vec::new(),
            },
            _ => return Vec::new(),
        };

        serde_json::from_value::<Vec<StoreRecord>>(candidate.clone())
            .ok()
            .and_then(|stores| prepare_catalog(stores).ok())
            .unwrap_or_default()
    }
}

/// 検索APIクライアント（通信手段はWeb/CLIで異なる）
#[allow(async_fn_in_trait)]
pub trait SearchClient {
    /// クエリを `{"query": text}` としてPOSTし、JSON応答を返す
    ///
    /// 2xx以外は `Error::Http`、通信失敗は `Error::Transport`
    async fn submit_query(&self, text: &str) -> Result<SearchResponse>;
}

/// 検索サービス
#[allow(async_fn_in_trait)]
pub trait SearchService {
    async fn search(&self, query: &str) -> Result<Vec<StoreRecord>>;
}

/// ローカル検索（読み込み済み一覧の絞り込み）
#[derive(Debug, Clone, Default)]
pub struct LocalSearch {
    stores: Vec<StoreRecord>,
}

impl LocalSearch {
    pub fn new(stores: Vec<StoreRecord>) -> Result<Self> {
        Ok(Self {
            stores: prepare_catalog(stores)?,
        })
    }

    /// 取得元から一覧を1回だけ読み込む
    pub async fn load<S: StoreSource>(source: &S) -> Result<Self> {
        let stores = source.list_stores().await?;
        Self::new(stores)
    }

    pub fn stores(&self) -> &[StoreRecord] {
        &self.stores
    }

    /// 入力ごとの同期絞り込み
    pub fn filter(&self, query: &str) -> Vec<&StoreRecord> {
        filter_stores(&self.stores, query)
    }
}

impl SearchService for LocalSearch {
    async fn search(&self, query: &str) -> Result<Vec<StoreRecord>> {
        Ok(self.filter(query).into_iter().cloned().collect())
    }
}

/// リモート検索（検索APIへの送信）
#[derive(Debug, Clone)]
pub struct RemoteSearch<C> {
    client: C,
}

impl<C: SearchClient> RemoteSearch<C> {
    pub fn new(client: C) -> Self {
        Self { client }
    }

    pub fn client(&self) -> &C {
        &self.client
    }
}

impl<C: SearchClient> SearchService for RemoteSearch<C> {
    /// 空白のみのクエリは送信せず空の一覧を返す
    async fn search(&self, query: &str) -> Result<Vec<StoreRecord>> {
        let Some(request) = prepare_submission(query) else {
            return Ok(Vec::new());
        };

        let response = self.client.submit_query(&request.query).await?;
        Ok(response.stores())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{mock_stores, MockStoreSource};
    use crate::error::Error;
    use futures::executor::block_on;
    use serde_json::json;
    use std::cell::RefCell;

    /// 送信内容を記録する偽クライアント
    struct RecordingClient {
        sent: RefCell<Vec<String>>,
        response: Option<serde_json::Value>,
    }

    impl SearchClient for RecordingClient {
        async fn submit_query(&self, text: &str) -> Result<SearchResponse> {
            self.sent.borrow_mut().push(text.to_string());
            match &self.response {
                Some(value) => Ok(SearchResponse(value.clone())),
                None => Err(Error::Http { status: 500 }),
            }
        }
    }

    #[test]
    fn test_search_request_serialize() {
        let request = SearchRequest { query: "ramen".to_string() };
        let json = serde_json::to_string(&request).expect("シリアライズ失敗");
        assert_eq!(json, r#"{"query":"ramen"}"#);
    }

    #[test]
    fn test_local_search_load_and_filter() {
        let search = block_on(LocalSearch::load(&MockStoreSource)).expect("読み込み失敗");
        assert_eq!(search.stores().len(), 3);

        let result = block_on(search.search("ラーメン")).expect("検索失敗");
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].id, 2);

        let all = block_on(search.search("")).expect("検索失敗");
        assert_eq!(all, mock_stores());
    }

    #[test]
    fn test_local_search_rejects_duplicate_ids() {
        let mut stores = mock_stores();
        stores[2].id = 1;
        assert!(matches!(LocalSearch::new(stores), Err(Error::DuplicateStoreId(1))));
    }

    #[test]
    fn test_remote_search_blank_query_not_sent() {
        let search = RemoteSearch::new(RecordingClient {
            sent: RefCell::new(Vec::new()),
            response: Some(json!([])),
        });

        let result = block_on(search.search("   ")).expect("検索失敗");
        assert!(result.is_empty());
        assert!(search.client().sent.borrow().is_empty());
    }

    #[test]
    fn test_remote_search_parses_store_array() {
        let search = RemoteSearch::new(RecordingClient {
            sent: RefCell::new(Vec::new()),
            response: Some(json!([
                {"id": 5, "store_name": "ラーメン五郎", "image_path": "goro.png"}
            ])),
        });

        let result = block_on(search.search("ramen")).expect("検索失敗");
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].image_path, "/goro.png");
        assert_eq!(*search.client().sent.borrow(), vec!["ramen".to_string()]);
    }

    #[test]
    fn test_remote_search_propagates_http_error() {
        let search = RemoteSearch::new(RecordingClient {
            sent: RefCell::new(Vec::new()),
            response: None,
        });

        let result = block_on(search.search("ramen"));
        assert!(matches!(result, Err(Error::Http { status: 500 })));
    }

    #[test]
    fn test_response_stores_shapes() {
        let wrapped = SearchResponse(json!({"stores": [{"id": 1, "store_name": "a"}]}));
        assert_eq!(wrapped.stores().len(), 1);

        let message = SearchResponse(json!({"message": "ok"}));
        assert!(message.stores().is_empty());

        let scalar = SearchResponse(json!("ok"));
        assert!(scalar.stores().is_empty());

        let malformed = SearchResponse(json!([{"id": "x"}]));
        assert!(malformed.stores().is_empty());
    }
}
