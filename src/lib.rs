//! めしUmatch 端末クライアント
//!
//! Web版と同じ検索ロジック（meshi-common）を端末から使う。

pub mod cli;
pub mod config;
pub mod error;
pub mod logging;
pub mod remote;
pub mod catalog_file;
pub mod display;
pub mod hints;
pub mod interactive;
pub mod search;
pub mod submit;
