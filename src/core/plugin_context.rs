// plugin_context.rs
use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::core::event_bus::EventBus;
use crate::core::gui::OpenGuiTracker;
use crate::core::resource_locator::{MapId, ResourceLocator};

/// マップデータ用ディレクトリ名
pub const MAPS_DIRECTORY_NAME: &str = "maps";
/// マップ画像用ディレクトリ名
pub const IMAGES_DIRECTORY_NAME: &str = "images";

/// プラグインコンテキスト - サブシステムに提供される機能
///
/// プラグインインスタンスごとに一度だけ生成され、生成後は変更されない。
/// サブシステムには `Arc<PluginContext>` として渡される。
#[derive(Debug)]
pub struct PluginContext {
    data_folder: PathBuf,
    maps_directory: PathBuf,
    locator: ResourceLocator,
    /// イベントバス
    event_bus: Arc<EventBus>,
    /// 開いているGUIの追跡
    open_guis: Arc<OpenGuiTracker>,
}

impl PluginContext {
    /// ライフサイクル側からのみ生成する
    pub(crate) fn new(
        data_folder: impl Into<PathBuf>,
        event_bus: Arc<EventBus>,
        open_guis: Arc<OpenGuiTracker>,
    ) -> Self {
        let data_folder = data_folder.into();
        let maps_directory = data_folder.join(MAPS_DIRECTORY_NAME);
        let locator = ResourceLocator::new(data_folder.join(IMAGES_DIRECTORY_NAME));

        Self {
            data_folder,
            maps_directory,
            locator,
            event_bus,
            open_guis,
        }
    }

    pub fn data_folder(&self) -> &Path {
        &self.data_folder
    }

    pub fn maps_directory(&self) -> &Path {
        &self.maps_directory
    }

    pub fn images_directory(&self) -> &Path {
        self.locator.images_directory()
    }

    pub fn locator(&self) -> &ResourceLocator {
        &self.locator
    }

    /// マップ画像の保存先
    pub fn image_path_for(&self, map_id: MapId) -> PathBuf {
        self.locator.image_path_for(map_id)
    }

    pub fn event_bus(&self) -> &Arc<EventBus> {
        &self.event_bus
    }

    pub fn open_guis(&self) -> &Arc<OpenGuiTracker> {
        &self.open_guis
    }
}
