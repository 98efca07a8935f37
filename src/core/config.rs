// config.rs
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use serde::{Serialize, Deserialize};
use thiserror::Error;

/// 設定ファイル名
pub const CONFIG_FILE_NAME: &str = "config.json";

const DEFAULT_CONFIG: &str = include_str!("../../resources/config.json");

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to access config file '{}': {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Failed to parse config file '{}': {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// プラグイン設定
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PluginConfiguration {
    /// 表示言語（例: "en_US"、"fr_FR"）。空文字ならフォールバック言語を使う
    pub lang: String,
}

impl Default for PluginConfiguration {
    fn default() -> Self {
        Self {
            lang: "en_US".to_string(),
        }
    }
}

impl PluginConfiguration {
    pub fn path_in(data_folder: &Path) -> PathBuf {
        data_folder.join(CONFIG_FILE_NAME)
    }

    /// 既定の設定ファイルを書き出す。既に存在する場合は上書きしない
    ///
    /// 書き出した場合は `true` を返す
    pub fn save_default(data_folder: &Path) -> Result<bool, ConfigError> {
        let path = Self::path_in(data_folder);
        if path.exists() {
            return Ok(false);
        }

        fs::write(&path, DEFAULT_CONFIG).map_err(|source| ConfigError::Io {
            path: path.clone(),
            source,
        })?;
        log::info!("Saved default configuration to {}", path.display());
        Ok(true)
    }

    /// 設定ファイルを読み込む
    pub fn load(data_folder: &Path) -> Result<Self, ConfigError> {
        let path = Self::path_in(data_folder);
        let content = fs::read_to_string(&path).map_err(|source| ConfigError::Io {
            path: path.clone(),
            source,
        })?;

        serde_json::from_str(&content).map_err(|source| ConfigError::Parse { path, source })
    }
}
