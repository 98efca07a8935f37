// host.rs
// ホストランタイムとのインターフェース

use std::io;
use std::path::PathBuf;

use crate::core::archive::{FilePackage, PackageArchive};

/// プラグインを読み込むホスト側が提供する機能
pub trait PluginHost: Send + Sync {
    /// プラグインのデータフォルダ（絶対パス）
    fn data_folder(&self) -> PathBuf;

    /// プラグイン自身のパッケージファイル
    fn package_file(&self) -> PathBuf;

    /// このプラグインインスタンスの無効化を要求する
    fn disable_plugin(&self, plugin_name: &str);

    /// パッケージアーカイブを開く
    fn open_package(&self) -> io::Result<Box<dyn PackageArchive>> {
        let package = FilePackage::open(&self.package_file())?;
        Ok(Box::new(package))
    }
}
