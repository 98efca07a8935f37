// error.rs
// ライフサイクル全体で使うエラー型

use std::io;
use std::path::PathBuf;
use thiserror::Error;

use crate::commands::registry::CommandError;
use crate::core::i18n::I18nError;
use crate::core::lifecycle::LifecycleState;
use crate::subsystems::registry::SubsystemRegistryError;

/// 起動・停止処理のエラー型
#[derive(Error, Debug)]
pub enum LifecycleError {
    /// リソースディレクトリを用意できなかった（致命的）
    #[error("Unable to create directory '{}': {source}", .path.display())]
    DirectoryFailure {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// パッケージアーカイブを閉じられなかった（致命的ではない）
    #[error("Unable to close package archive '{}': {source}", .path.display())]
    ArchiveHandleFailure {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// 構築時のサブシステム登録に失敗した（ID の重複など）
    #[error("Failed to register subsystem: {0}")]
    SubsystemRegistration(#[source] SubsystemRegistryError),

    #[error("Subsystem initialization failed: {0}")]
    SubsystemInitFailure(#[source] SubsystemRegistryError),

    #[error("Failed to load localization: {0}")]
    LocalizationFailure(#[from] I18nError),

    #[error("Failed to register commands: {0}")]
    CommandFailure(#[from] CommandError),

    #[error("Cannot {operation} while plugin is {state:?}")]
    InvalidState {
        operation: &'static str,
        state: LifecycleState,
    },
}

impl LifecycleError {
    /// 起動を中断すべきエラーかどうか
    pub fn is_fatal(&self) -> bool {
        matches!(self, LifecycleError::DirectoryFailure { .. })
    }
}
