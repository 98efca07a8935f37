// i18n.rs
// パッケージ内の翻訳バンドルの読み込み

use std::collections::HashMap;
use std::io;
use std::path::PathBuf;
use thiserror::Error;

use crate::core::archive::PackageArchive;

/// パッケージ内の翻訳エントリ名
pub const I18N_ENTRY: &str = "i18n";
/// 主言語に訳がない場合に使う言語
pub const FALLBACK_LOCALE: &str = "en_US";

#[derive(Error, Debug)]
pub enum I18nError {
    #[error("Failed to read '{entry}' from package '{}': {source}", .path.display())]
    Archive {
        path: PathBuf,
        entry: &'static str,
        #[source]
        source: io::Error,
    },

    #[error("Malformed translation bundle in package '{}': {source}", .path.display())]
    MalformedBundle {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

type Catalog = HashMap<String, String>;

/// 翻訳カタログ
#[derive(Debug, Default)]
pub struct I18n {
    /// ロケール -> (キー -> 訳文)
    catalogs: HashMap<String, Catalog>,
    primary_locale: Option<String>,
}

impl I18n {
    pub fn new() -> Self {
        Self::default()
    }

    /// パッケージから翻訳を読み込み、読み込んだロケール数を返す
    ///
    /// パッケージがない場合は翻訳なしで続行する。以前のカタログは破棄される。
    pub fn on_enable(&mut self, archive: Option<&mut dyn PackageArchive>) -> Result<usize, I18nError> {
        self.catalogs.clear();

        let archive = match archive {
            Some(archive) => archive,
            None => {
                log::warn!("No package archive available, translations are disabled");
                return Ok(0);
            }
        };

        let path = archive.path().to_path_buf();
        let entry = archive.read_entry(I18N_ENTRY).map_err(|source| I18nError::Archive {
            path: path.clone(),
            entry: I18N_ENTRY,
            source,
        })?;

        let Some(entry) = entry else {
            log::warn!("Package {} has no '{}' entry", path.display(), I18N_ENTRY);
            return Ok(0);
        };

        self.catalogs = serde_json::from_value(entry)
            .map_err(|source| I18nError::MalformedBundle { path, source })?;

        log::info!("Loaded {} locale(s): {}", self.catalogs.len(), self.available_locales().join(", "));
        Ok(self.catalogs.len())
    }

    /// 主言語を設定する。空文字はフォールバック言語のみを使う指定
    pub fn set_primary_locale(&mut self, locale: &str) {
        let locale = locale.trim();
        if locale.is_empty() {
            self.primary_locale = None;
            return;
        }

        if !self.catalogs.is_empty() && !self.catalogs.contains_key(locale) {
            log::warn!("Locale '{}' is not available, falling back to {}", locale, FALLBACK_LOCALE);
        }
        self.primary_locale = Some(locale.to_string());
    }

    pub fn primary_locale(&self) -> Option<&str> {
        self.primary_locale.as_deref()
    }

    pub fn available_locales(&self) -> Vec<&str> {
        let mut locales: Vec<&str> = self.catalogs.keys().map(String::as_str).collect();
        locales.sort_unstable();
        locales
    }

    /// 主言語 → フォールバック言語 → キーそのもの、の順で訳文を探す
    pub fn translate(&self, key: &str) -> String {
        self.primary_locale
            .as_deref()
            .into_iter()
            .chain(std::iter::once(FALLBACK_LOCALE))
            .find_map(|locale| self.catalogs.get(locale).and_then(|c| c.get(key)))
            .cloned()
            .unwrap_or_else(|| key.to_string())
    }
}
