// gui.rs
// 開いているGUIの追跡

use std::collections::HashMap;
use std::sync::Mutex;

/// 閲覧者ごとに開いているGUIを記録する
#[derive(Debug, Default)]
pub struct OpenGuiTracker {
    /// 閲覧者ID -> GUI名
    open: Mutex<HashMap<String, String>>,
}

impl OpenGuiTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// GUIを開いたことを記録。以前開いていたGUI名を返す
    pub fn open(&self, viewer: &str, gui_name: &str) -> Option<String> {
        match self.open.lock() {
            Ok(mut open) => open.insert(viewer.to_string(), gui_name.to_string()),
            Err(e) => {
                log::warn!("Failed to lock open GUIs: {}", e);
                None
            }
        }
    }

    /// GUIを閉じたことを記録
    pub fn close(&self, viewer: &str) -> Option<String> {
        self.open.lock().ok().and_then(|mut open| open.remove(viewer))
    }

    pub fn is_open(&self, viewer: &str) -> bool {
        self.open
            .lock()
            .map(|open| open.contains_key(viewer))
            .unwrap_or(false)
    }

    pub fn open_count(&self) -> usize {
        self.open.lock().map(|open| open.len()).unwrap_or(0)
    }

    /// 全てのGUI状態をリセットし、閉じた数を返す。何度呼んでもよい
    pub fn clear_open_guis(&self) -> usize {
        match self.open.lock() {
            Ok(mut open) => {
                let count = open.len();
                open.clear();
                count
            }
            Err(poisoned) => {
                // ロックが汚染されていても状態は捨てる
                let mut open = poisoned.into_inner();
                let count = open.len();
                open.clear();
                count
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_open_and_close() {
        let tracker = OpenGuiTracker::new();

        assert_eq!(tracker.open("alice", "MapListGui"), None);
        assert_eq!(tracker.open("alice", "MapDetailGui"), Some("MapListGui".to_string()));
        tracker.open("bob", "MapListGui");

        assert!(tracker.is_open("alice"));
        assert_eq!(tracker.open_count(), 2);
        assert_eq!(tracker.close("alice"), Some("MapDetailGui".to_string()));
        assert!(!tracker.is_open("alice"));
    }

    #[test]
    fn test_clear_is_idempotent() {
        let tracker = OpenGuiTracker::new();
        tracker.open("alice", "MapListGui");
        tracker.open("bob", "RenameGui");

        assert_eq!(tracker.clear_open_guis(), 2);
        assert_eq!(tracker.clear_open_guis(), 0);
        assert_eq!(tracker.open_count(), 0);
    }
}
