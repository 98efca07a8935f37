// subsystems/registry.rs
use std::sync::Arc;
use thiserror::Error;

use crate::core::event_bus::{self, EventBus};
use crate::core::plugin_context::PluginContext;
use crate::subsystems::subsystem_trait::Subsystem;

/// サブシステムレジストリのエラー型
#[derive(Error, Debug)]
pub enum SubsystemRegistryError {
    #[error("Subsystem with ID '{0}' already exists")]
    AlreadyExists(String),

    #[error("Subsystem with ID '{0}' not found")]
    NotFound(String),

    #[error("Failed to initialize subsystem '{0}': {1}")]
    InitializationFailed(String, String),

    #[error("Failed to stop subsystem '{0}': {1}")]
    ShutdownFailed(String, String),
}

/// サブシステムの状態
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubsystemState {
    /// 登録済みだが初期化されていない
    Registered,
    /// 初期化済み
    Running,
    /// 停止済み
    Stopped,
    /// 初期化に失敗した
    Error,
}

/// サブシステムの登録情報
struct RegistryEntry {
    subsystem: Box<dyn Subsystem>,
    state: SubsystemState,
    /// エラーメッセージ（エラー状態の場合）
    error: Option<String>,
}

/// 登録順にサブシステムを初期化・停止するレジストリ
pub struct SubsystemRegistry {
    /// 登録順のサブシステム
    entries: Vec<RegistryEntry>,
    event_bus: Arc<EventBus>,
}

impl SubsystemRegistry {
    pub fn new(event_bus: Arc<EventBus>) -> Self {
        Self {
            entries: Vec::new(),
            event_bus,
        }
    }

    /// サブシステムを末尾に登録
    pub fn register(&mut self, subsystem: Box<dyn Subsystem>) -> Result<(), SubsystemRegistryError> {
        let id = subsystem.get_id();
        if self.find(&id).is_some() {
            return Err(SubsystemRegistryError::AlreadyExists(id));
        }

        self.entries.push(RegistryEntry {
            subsystem,
            state: SubsystemState::Registered,
            error: None,
        });
        log::debug!("Subsystem registered: {}", id);
        Ok(())
    }

    /// 登録順に初期化する
    ///
    /// 最初の失敗でエラーを返し、それ以降のサブシステムは初期化しない。
    /// 既に動作中のものは飛ばす。
    pub fn init_all(&mut self, context: &Arc<PluginContext>) -> Result<(), SubsystemRegistryError> {
        for entry in &mut self.entries {
            if entry.state == SubsystemState::Running {
                continue;
            }

            let id = entry.subsystem.get_id();
            match entry.subsystem.init(Arc::clone(context)) {
                Ok(()) => {
                    entry.state = SubsystemState::Running;
                    entry.error = None;
                    event_bus::emit(&self.event_bus, &id, "subsystem:initialized", serde_json::json!({
                        "subsystem_id": id,
                    }));
                    log::info!("Subsystem initialized: {}", id);
                }
                Err(e) => {
                    entry.state = SubsystemState::Error;
                    entry.error = Some(e.clone());
                    event_bus::emit(&self.event_bus, &id, "subsystem:error", serde_json::json!({
                        "subsystem_id": id,
                        "error": e,
                        "operation": "init",
                    }));
                    log::error!("Failed to initialize subsystem {}: {}", id, e);
                    return Err(SubsystemRegistryError::InitializationFailed(id, e));
                }
            }
        }
        Ok(())
    }

    /// 全サブシステムを登録順に停止する
    ///
    /// 状態に関係なく全てに `exit` を呼ぶ。失敗はログに残して続行し、まとめて返す。
    pub fn exit_all(&mut self) -> Vec<SubsystemRegistryError> {
        let mut failures = Vec::new();

        for entry in &mut self.entries {
            let id = entry.subsystem.get_id();
            match entry.subsystem.exit() {
                Ok(()) => {
                    log::info!("Subsystem stopped: {}", id);
                }
                Err(e) => {
                    log::error!("Failed to stop subsystem {}: {}", id, e);
                    failures.push(SubsystemRegistryError::ShutdownFailed(id.clone(), e));
                }
            }
            entry.state = SubsystemState::Stopped;
            event_bus::emit(&self.event_bus, &id, "subsystem:exited", serde_json::json!({
                "subsystem_id": id,
            }));
        }

        failures
    }

    /// サブシステムの状態を取得
    pub fn get_state(&self, id: &str) -> Result<SubsystemState, SubsystemRegistryError> {
        self.find(id)
            .map(|entry| entry.state)
            .ok_or_else(|| SubsystemRegistryError::NotFound(id.to_string()))
    }

    /// 直近の初期化エラーを取得
    pub fn get_error(&self, id: &str) -> Result<Option<String>, SubsystemRegistryError> {
        self.find(id)
            .map(|entry| entry.error.clone())
            .ok_or_else(|| SubsystemRegistryError::NotFound(id.to_string()))
    }

    /// 登録順のID一覧
    pub fn ids(&self) -> Vec<String> {
        self.entries.iter().map(|entry| entry.subsystem.get_id()).collect()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn find(&self, id: &str) -> Option<&RegistryEntry> {
        self.entries.iter().find(|entry| entry.subsystem.get_id() == id)
    }
}
