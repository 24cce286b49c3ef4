//! エラー型定義

use thiserror::Error;

/// 共通エラー型
#[derive(Error, Debug)]
pub enum Error {
    #[error("HTTP error! status: {status}")]
    Http { status: u16 },

    #[error("Transport error: {0}")]
    Transport(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Placeholder list is empty")]
    EmptyHints,

    #[error("Duplicate store id: {0}")]
    DuplicateStoreId(u32),

    #[error("Store not found: {0}")]
    StoreNotFound(u32),

    #[error("Config error: {0}")]
    Config(String),
}

/// Result型エイリアス
pub type Result<T> = std::result::Result<T, Error>;
