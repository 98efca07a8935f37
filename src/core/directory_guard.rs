// directory_guard.rs
use std::fs;
use std::io;
use std::path::Path;

use crate::core::error::LifecycleError;

/// ディレクトリが存在することを保証する
///
/// 存在しなければ親ディレクトリも含めて作成する。既にディレクトリなら何もしない。
/// パスがディレクトリ以外として存在する場合は何も変更せずにエラーを返す。
pub fn ensure_directory(path: &Path) -> Result<(), LifecycleError> {
    let failure = |source: io::Error| LifecycleError::DirectoryFailure {
        path: path.to_path_buf(),
        source,
    };

    if !path.is_absolute() {
        return Err(failure(io::Error::new(
            io::ErrorKind::InvalidInput,
            "path is not absolute",
        )));
    }

    if path.is_dir() {
        return Ok(());
    }

    // シンボリックリンク切れもここで弾く
    if fs::symlink_metadata(path).is_ok() {
        return Err(failure(io::Error::new(
            io::ErrorKind::AlreadyExists,
            "path exists but is not a directory",
        )));
    }

    fs::create_dir_all(path).map_err(failure)?;
    log::info!("Created directory {}", path.display());
    Ok(())
}
