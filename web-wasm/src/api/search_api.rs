//! 検索API連携（fetch）
//!
//! `POST /api/search` に `{"query": ...}` を送信する。
//! サーバー側は未実装のため、失敗はコンソールに記録するだけで画面には出さない。

use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Request, RequestInit, RequestMode, Response};
use meshi_common::{
    Error, Result, SearchClient, SearchRequest, SearchResponse, SEARCH_ENDPOINT,
};

use crate::diagnostics::describe_js;

/// fetch による検索APIクライアント
#[derive(Debug, Clone)]
pub struct FetchSearchClient {
    endpoint: String,
}

impl FetchSearchClient {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self { endpoint: endpoint.into() }
    }
}

impl Default for FetchSearchClient {
    fn default() -> Self {
        Self::new(SEARCH_ENDPOINT)
    }
}

/// 送信するJSON本文
pub fn build_request_body(text: &str) -> Result<String> {
    let request = SearchRequest {
        query: text.to_string(),
    };
    Ok(serde_json::to_string(&request)?)
}

fn transport_error(value: JsValue) -> Error {
    Error::Transport(describe_js(&value))
}

/// JSONをPOSTしてレスポンスを返す（共通処理）
async fn post_json(url: &str, body: &str) -> std::result::Result<Response, JsValue> {
    let opts = RequestInit::new();
    opts.set_method("POST");
    opts.set_mode(RequestMode::SameOrigin);
    opts.set_body(&JsValue::from_str(body));

    let request = Request::new_with_str_and_init(url, &opts)?;
    request.headers().set("Content-Type", "application/json")?;

    let window = web_sys::window().ok_or_else(|| JsValue::from_str("window is unavailable"))?;
    let resp_value = JsFuture::from(window.fetch_with_request(&request)).await?;
    resp_value.dyn_into()
}

impl SearchClient for FetchSearchClient {
    async fn submit_query(&self, text: &str) -> Result<SearchResponse> {
        let body = build_request_body(text)?;
        let resp = post_json(&self.endpoint, &body).await.map_err(transport_error)?;

        if !resp.ok() {
            return Err(Error::Http { status: resp.status() });
        }

        let json = JsFuture::from(resp.json().map_err(transport_error)?)
            .await
            .map_err(transport_error)?;
        let value: serde_json::Value = serde_wasm_bindgen::from_value(json)
            .map_err(|e| Error::Transport(e.to_string()))?;

        Ok(SearchResponse(value))
    }
}
