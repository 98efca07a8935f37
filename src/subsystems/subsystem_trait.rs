// subsystem_trait.rs
// サブシステムのインターフェース定義

use std::sync::Arc;

use crate::core::plugin_context::PluginContext;

/// サブシステム操作の結果を表す型
pub type SubsystemResult<T> = Result<T, String>;

/// サブシステムトレイト - マップレジストリやアイテムレジストリが実装する
pub trait Subsystem: Send + Sync {
    /// サブシステムのIDを取得
    fn get_id(&self) -> String;

    /// 有効化サイクルごとに一度呼ばれる
    fn init(&mut self, context: Arc<PluginContext>) -> SubsystemResult<()>;

    /// 停止処理
    ///
    /// `init` が呼ばれていない、または失敗した後でも呼ばれることがある
    fn exit(&mut self) -> SubsystemResult<()> {
        Ok(())
    }
}

#[cfg(test)]
pub use mock::MockSubsystem;
