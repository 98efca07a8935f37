// resource_locator.rs
use std::path::{Path, PathBuf};

/// マップ識別子（割り当てはマップレジストリ側が行う）
pub type MapId = u32;

/// マップ画像ファイルのパスを導出する
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResourceLocator {
    images_directory: PathBuf,
}

impl ResourceLocator {
    pub fn new(images_directory: impl Into<PathBuf>) -> Self {
        Self {
            images_directory: images_directory.into(),
        }
    }

    pub fn images_directory(&self) -> &Path {
        &self.images_directory
    }

    /// `<images>/map<id>.png` を返す。I/Oは行わない
    pub fn image_path_for(&self, map_id: MapId) -> PathBuf {
        self.images_directory.join(format!("map{}.png", map_id))
    }
}
