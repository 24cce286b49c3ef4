//! 店舗一覧の取得元の選択
//!
//! 優先順位: `--remote` > `--stores FILE` > 設定の `stores_file` > モックデータ

use std::path::{Path, PathBuf};

use meshi_common::{parse_catalog, MockStoreSource, StoreRecord, StoreSource};

use crate::config::Config;
use crate::error::{MeshiError, Result};
use crate::remote::HttpStoreSource;

/// JSONファイルの店舗一覧
#[derive(Debug, Clone)]
pub struct FileStoreSource {
    path: PathBuf,
}

impl FileStoreSource {
    pub fn open(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(MeshiError::FileNotFound(path.display().to_string()));
        }
        Ok(Self {
            path: path.to_path_buf(),
        })
    }
}

impl StoreSource for FileStoreSource {
    async fn list_stores(&self) -> meshi_common::Result<Vec<StoreRecord>> {
        let content = tokio::fs::read_to_string(&self.path).await?;
        parse_catalog(&content)
    }
}

/// 取得元
#[derive(Debug, Clone)]
pub enum CatalogSource {
    Mock(MockStoreSource),
    File(FileStoreSource),
    Remote(HttpStoreSource),
}

impl CatalogSource {
    pub fn resolve(stores: Option<&Path>, remote: bool, config: &Config) -> Result<Self> {
        if remote {
            let source = HttpStoreSource::new(&config.effective_api_base(), config.timeout_seconds)?;
            return Ok(CatalogSource::Remote(source));
        }

        match stores.or(config.stores_file.as_deref()) {
            Some(path) => Ok(CatalogSource::File(FileStoreSource::open(path)?)),
            None => Ok(CatalogSource::Mock(MockStoreSource)),
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            CatalogSource::Mock(_) => "モックデータ",
            CatalogSource::File(_) => "JSONファイル",
            CatalogSource::Remote(_) => "店舗一覧API",
        }
    }
}

impl StoreSource for CatalogSource {
    async fn list_stores(&self) -> meshi_common::Result<Vec<StoreRecord>> {
        match self {
            CatalogSource::Mock(source) => source.list_stores().await,
            CatalogSource::File(source) => source.list_stores().await,
            CatalogSource::Remote(source) => source.list_stores().await,
        }
    }
}
