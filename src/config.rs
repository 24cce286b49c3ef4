use crate::error::{MeshiError, Result};
use meshi_common::{PlaceholderRotator, PLACEHOLDER_HINTS};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// APIベースURLを上書きする環境変数
pub const API_BASE_ENV: &str = "MESHI_API_BASE";

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub api_base: String,
    pub stores_file: Option<PathBuf>,
    pub timeout_seconds: u64,
    pub rotation_interval_ms: u64,
    pub placeholder_hints: Vec<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_base: "http://localhost:3000".into(),
            stores_file: None,
            timeout_seconds: 10,
            rotation_interval_ms: meshi_common::PLACEHOLDER_ROTATION_MS as u64,
            placeholder_hints: PLACEHOLDER_HINTS.iter().map(|s| s.to_string()).collect(),
        }
    }
}

impl Config {
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path()?)
    }

    pub fn load_from(config_path: &Path) -> Result<Self> {
        if config_path.exists() {
            let content = std::fs::read_to_string(config_path)?;
            let config: Config = serde_json::from_str(&content)?;
            Ok(config)
        } else {
            Ok(Self::default())
        }
    }

    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_path()?)
    }

    pub fn save_to(&self, config_path: &Path) -> Result<()> {
        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(config_path, content)?;
        Ok(())
    }

    pub fn config_path() -> Result<PathBuf> {
        let home = dirs::home_dir()
            .ok_or_else(|| MeshiError::Config("ホームディレクトリが見つかりません".into()))?;
        Ok(home.join(".config").join("meshi-umatch").join("config.json"))
    }

    /// 実際に使うAPIベースURL（環境変数を優先）
    pub fn effective_api_base(&self) -> String {
        match std::env::var(API_BASE_ENV) {
            Ok(base) if !base.trim().is_empty() => base.trim().to_string(),
            _ => self.api_base.clone(),
        }
    }

    /// 設定の候補でプレースホルダーのローテーションを作成
    ///
    /// 候補が空なら `EmptyHints`
    pub fn rotator(&self) -> Result<PlaceholderRotator> {
        Ok(PlaceholderRotator::new(self.placeholder_hints.iter().cloned())?)
    }

    pub fn set_api_base(&mut self, base: String) -> Result<()> {
        if !(base.starts_with("http://") || base.starts_with("https://")) {
            return Err(MeshiError::Config(format!("URLはhttp(s)で始めてください: {}", base)));
        }
        self.api_base = base;
        self.save()
    }

    pub fn set_stores_file(&mut self, path: PathBuf) -> Result<()> {
        if !path.exists() {
            return Err(MeshiError::FileNotFound(path.display().to_string()));
        }
        self.stores_file = Some(path);
        self.save()
    }
}
