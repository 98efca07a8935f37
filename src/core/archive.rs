// archive.rs
// プラグインパッケージ（リソースパック）へのアクセス

use std::fs::File;
use std::io::{self, Read};
use std::path::{Path, PathBuf};
use fs2::FileExt;
use serde_json::Value as JsonValue;

/// プラグインパッケージのアーカイブハンドル
pub trait PackageArchive: Send {
    /// アーカイブのパス（ログ用）
    fn path(&self) -> &Path;

    /// エントリを読み込む。存在しなければ `None`
    fn read_entry(&mut self, name: &str) -> io::Result<Option<JsonValue>>;

    /// ハンドルを解放する
    fn close(&mut self) -> io::Result<()>;
}

/// JSON形式のパッケージファイル
///
/// 開いている間は共有ロックを保持する。ロックが残るとパッケージの差し替えや
/// 再読み込みができないため、必ず `close` すること。
#[derive(Debug)]
pub struct FilePackage {
    path: PathBuf,
    file: Option<File>,
    entries: JsonValue,
}

impl FilePackage {
    pub fn open(path: &Path) -> io::Result<Self> {
        let mut file = File::open(path)?;
        FileExt::lock_shared(&file)?;

        let mut content = String::new();
        let parsed = file
            .read_to_string(&mut content)
            .and_then(|_| serde_json::from_str::<JsonValue>(&content).map_err(io::Error::from));

        match parsed {
            Ok(entries) if entries.is_object() => Ok(Self {
                path: path.to_path_buf(),
                file: Some(file),
                entries,
            }),
            other => {
                let _ = FileExt::unlock(&file);
                match other {
                    Err(e) => Err(e),
                    Ok(_) => Err(io::Error::new(
                        io::ErrorKind::InvalidData,
                        "package root must be a JSON object",
                    )),
                }
            }
        }
    }
}

impl PackageArchive for FilePackage {
    fn path(&self) -> &Path {
        &self.path
    }

    fn read_entry(&mut self, name: &str) -> io::Result<Option<JsonValue>> {
        if self.file.is_none() {
            return Err(io::Error::new(io::ErrorKind::Other, "package archive is closed"));
        }
        Ok(self.entries.get(name).cloned())
    }

    fn close(&mut self) -> io::Result<()> {
        match self.file.take() {
            Some(file) => FileExt::unlock(&file),
            None => Ok(()),
        }
    }
}

/// アーカイブの解放を保証するスコープ
///
/// `release` で明示的に閉じるか、スコープを抜けた時点（パニック時を含む）で閉じる。
/// どちらの経路でも `close` はちょうど一回だけ呼ばれる。
pub struct ArchiveGuard {
    archive: Option<Box<dyn PackageArchive>>,
}

impl ArchiveGuard {
    pub fn new(archive: Box<dyn PackageArchive>) -> Self {
        Self {
            archive: Some(archive),
        }
    }

    pub fn archive_mut(&mut self) -> Option<&mut dyn PackageArchive> {
        match &mut self.archive {
            Some(archive) => Some(&mut **archive),
            None => None,
        }
    }

    /// アーカイブを閉じ、失敗した場合はエラーとパスを返す
    pub fn release(mut self) -> Result<(), (PathBuf, io::Error)> {
        self.close_once()
    }

    fn close_once(&mut self) -> Result<(), (PathBuf, io::Error)> {
        match self.archive.take() {
            Some(mut archive) => archive
                .close()
                .map_err(|e| (archive.path().to_path_buf(), e)),
            None => Ok(()),
        }
    }
}

impl Drop for ArchiveGuard {
    fn drop(&mut self) {
        if let Err((path, e)) = self.close_once() {
            log::error!("Unable to close package archive {}: {}", path.display(), e);
        }
    }
}
