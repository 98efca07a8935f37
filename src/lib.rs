// コアモジュールのエクスポート
pub mod core;
// サブシステムとの境界
pub mod subsystems;
// コマンド登録
pub mod commands;

pub use crate::core::{ImageOnMap, LifecycleError, LifecycleState, PluginContext, PluginHost, Subsystems};
pub use crate::subsystems::{Subsystem, SubsystemResult};
