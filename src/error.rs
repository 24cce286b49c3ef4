use thiserror::Error;

#[derive(Error, Debug)]
pub enum MeshiError {
    #[error("設定エラー: {0}")]
    Config(String),

    #[error("ファイルが見つかりません: {0}")]
    FileNotFound(String),

    #[error("検索処理エラー: {0}")]
    Catalog(#[from] meshi_common::Error),

    #[error("HTTPクライアントの初期化に失敗: {0}")]
    HttpClient(String),

    #[error("入力エラー: {0}")]
    Prompt(String),

    #[error("JSON解析エラー: {0}")]
    JsonParse(#[from] serde_json::Error),

    #[error("IOエラー: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, MeshiError>;
