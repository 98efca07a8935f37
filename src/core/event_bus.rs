// event_bus.rs
use std::collections::HashMap;
use std::fmt;
use std::sync::{Arc, Mutex};
use serde::{Serialize, Deserialize};
use serde_json::Value as JsonValue;

/// ライフサイクルイベントのペイロード
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EventPayload {
    /// イベントのタイプ/名前
    pub event_type: String,
    /// イベントデータ（任意のJSON）
    pub data: JsonValue,
    /// イベントの送信元ID（オプション）
    pub source: Option<String>,
}

/// イベントハンドラー関数タイプ
pub type EventHandler = Arc<dyn Fn(EventPayload) -> Result<(), String> + Send + Sync>;

/// イベントバスの実装
#[derive(Default)]
pub struct EventBus {
    /// イベントタイプごとのハンドラー
    handlers: Mutex<HashMap<String, Vec<EventHandler>>>,
}

impl fmt::Debug for EventBus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let count = self.handlers.lock().map(|h| h.len()).unwrap_or(0);
        f.debug_struct("EventBus").field("event_types", &count).finish()
    }
}

impl EventBus {
    /// 新しいEventBusインスタンスを作成
    pub fn new() -> Self {
        Self::default()
    }

    /// イベントハンドラーを登録
    pub fn subscribe<F>(&self, event_type: &str, handler: F) -> Result<(), String>
    where
        F: Fn(EventPayload) -> Result<(), String> + Send + Sync + 'static,
    {
        match self.handlers.lock() {
            Ok(mut handlers) => {
                handlers
                    .entry(event_type.to_string())
                    .or_default()
                    .push(Arc::new(handler));
                Ok(())
            }
            Err(e) => Err(format!("Failed to lock handlers: {}", e)),
        }
    }

    /// コンポーネントからイベントを発行
    pub fn publish_from(&self, source_id: &str, event_type: &str, data: JsonValue) -> Result<(), String> {
        self.dispatch_event(EventPayload {
            event_type: event_type.to_string(),
            data,
            source: Some(source_id.to_string()),
        })
    }

    /// イベントをディスパッチ
    ///
    /// ハンドラーのエラーはまとめて返すが、残りのハンドラーの呼び出しは続ける。
    /// ハンドラーはロックを外してから呼ぶので、ハンドラー内で発行・登録してよい
    fn dispatch_event(&self, payload: EventPayload) -> Result<(), String> {
        let event_handlers: Vec<EventHandler> = {
            let handlers = self
                .handlers
                .lock()
                .map_err(|e| format!("Failed to lock handlers: {}", e))?;
            handlers.get(&payload.event_type).cloned().unwrap_or_default()
        };

        let mut dispatch_errors = Vec::new();
        for handler in &event_handlers {
            if let Err(e) = handler(payload.clone()) {
                dispatch_errors.push(e);
            }
        }

        if dispatch_errors.is_empty() {
            Ok(())
        } else {
            Err(dispatch_errors.join("; "))
        }
    }

}

/// ライフサイクル処理用のイベント発行
///
/// ハンドラーの失敗はログに残すだけで、呼び出し元の処理結果には影響させない
pub(crate) fn emit(event_bus: &EventBus, source: &str, event_type: &str, data: JsonValue) {
    if let Err(e) = event_bus.publish_from(source, event_type, data) {
        log::warn!("Event handler for '{}' failed: {}", event_type, e);
    }
}
