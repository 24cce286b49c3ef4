//! `search` サブコマンド
//!
//! ローカル（読み込み済み一覧の絞り込み）とリモート（検索API）のどちらも
//! `SearchService` として扱い、同じ表示処理に渡す。

use std::path::Path;

use meshi_common::{LocalSearch, RemoteSearch, ResultsView, SearchService, StoreRecord};
use tracing::{debug, error};

use crate::catalog_file::CatalogSource;
use crate::config::Config;
use crate::display::render_results;
use crate::error::Result;
use crate::remote::HttpSearchClient;

/// 端末から使う検索サービス
#[derive(Debug, Clone)]
pub enum StoreSearch {
    Local(LocalSearch),
    Remote(RemoteSearch<HttpSearchClient>),
}

impl StoreSearch {
    /// `--remote` なら検索API、それ以外は店舗一覧を読み込んでローカル検索
    pub async fn resolve(stores: Option<&Path>, remote: bool, config: &Config) -> Result<Self> {
        if remote {
            let client = HttpSearchClient::new(&config.effective_api_base(), config.timeout_seconds)?;
            let search = RemoteSearch::new(client);
            debug!(url = search.client().url(), "リモート検索");
            return Ok(StoreSearch::Remote(search));
        }

        let source = CatalogSource::resolve(stores, false, config)?;
        debug!(source = source.label(), "店舗一覧を読み込み");
        Ok(StoreSearch::Local(LocalSearch::load(&source).await?))
    }
}

impl SearchService for StoreSearch {
    async fn search(&self, query: &str) -> meshi_common::Result<Vec<StoreRecord>> {
        match self {
            StoreSearch::Local(search) => search.search(query).await,
            StoreSearch::Remote(search) => search.search(query).await,
        }
    }
}

/// 検索して表示用の文字列を返す
///
/// 検索の失敗はログに残し、0件として表示する。
pub async fn run_search<S: SearchService>(service: &S, query: &str) -> String {
    let found = service.search(query).await.unwrap_or_else(|e| {
        error!("検索リクエストの送信に失敗しました: {}", e);
        Vec::new()
    });

    let refs: Vec<&StoreRecord> = found.iter().collect();
    render_results(&ResultsView::from_query(&refs, query))
}
