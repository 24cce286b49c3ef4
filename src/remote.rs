//! 検索API・店舗一覧APIのHTTPクライアント（reqwest）
//!
//! どちらもサーバー側は未実装の外部連携先。失敗は呼び出し側でログに残す。

use std::time::Duration;

use meshi_common::{
    prepare_catalog, Error, SearchClient, SearchRequest, SearchResponse, StoreRecord,
    StoreSource, SEARCH_ENDPOINT, STORES_ENDPOINT,
};
use tracing::debug;

use crate::error::{MeshiError, Result};

/// ベースURLとパスを連結
pub fn endpoint_url(api_base: &str, path: &str) -> String {
    format!("{}{}", api_base.trim_end_matches('/'), path)
}

fn build_client(timeout_seconds: u64) -> Result<reqwest::Client> {
    reqwest::Client::builder()
        .timeout(Duration::from_secs(timeout_seconds))
        .build()
        .map_err(|e| MeshiError::HttpClient(e.to_string()))
}

fn transport_error(e: reqwest::Error) -> Error {
    Error::Transport(e.to_string())
}

/// `POST /api/search` クライアント
#[derive(Debug, Clone)]
pub struct HttpSearchClient {
    client: reqwest::Client,
    url: String,
}

impl HttpSearchClient {
    pub fn new(api_base: &str, timeout_seconds: u64) -> Result<Self> {
        Ok(Self {
            client: build_client(timeout_seconds)?,
            url: endpoint_url(api_base, SEARCH_ENDPOINT),
        })
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

impl SearchClient for HttpSearchClient {
    async fn submit_query(&self, text: &str) -> meshi_common::Result<SearchResponse> {
        let request = SearchRequest {
            query: text.to_string(),
        };
        debug!(url = %self.url, "検索リクエスト送信");

        // .json() が Content-Type: application/json を付与する
        let response = self
            .client
            .post(&self.url)
            .json(&request)
            .send()
            .await
            .map_err(transport_error)?;

        let status = response.status();
        if !status.is_success() {
            return Err(Error::Http { status: status.as_u16() });
        }

        let value: serde_json::Value = response.json().await.map_err(transport_error)?;
        Ok(SearchResponse(value))
    }
}

/// `GET /api/stores` 取得元
#[derive(Debug, Clone)]
pub struct HttpStoreSource {
    client: reqwest::Client,
    url: String,
}

impl HttpStoreSource {
    pub fn new(api_base: &str, timeout_seconds: u64) -> Result<Self> {
        Ok(Self {
            client: build_client(timeout_seconds)?,
            url: endpoint_url(api_base, STORES_ENDPOINT),
        })
    }
}

impl StoreSource for HttpStoreSource {
    async fn list_stores(&self) -> meshi_common::Result<Vec<StoreRecord>> {
        debug!(url = %self.url, "店舗一覧を取得");

        let response = self.client.get(&self.url).send().await.map_err(transport_error)?;
        let status = response.status();
        if !status.is_success() {
            return Err(Error::Http { status: status.as_u16() });
        }

        let stores: Vec<StoreRecord> = response.json().await.map_err(transport_error)?;
        prepare_catalog(stores)
    }
}
