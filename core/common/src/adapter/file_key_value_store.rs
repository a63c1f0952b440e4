//! JSON ファイル 1 つを実体とする KeyValueStore 実装
//!
//! 形式は `{"<key>": "<value>", ...}` の文字列→文字列オブジェクト。
//! 毎回ファイルを読み直すため、別プロセスの書き込みも次の操作から見える。
//! 書き込みは一時ファイルへ書いてから rename する。

use crate::error::Error;
use crate::ports::outbound::{FileSystem, KeyValueStore};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::sync::Arc;

type Items = BTreeMap<String, String>;

/// ファイルを実体とするキー値ストレージ
pub struct FileKeyValueStore {
    fs: Arc<dyn FileSystem>,
    path: PathBuf,
}

impl FileKeyValueStore {
    pub fn new(fs: Arc<dyn FileSystem>, path: impl AsRef<Path>) -> Self {
        Self {
            fs,
            path: path.as_ref().to_path_buf(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// ファイルが無ければ空として扱う。壊れていれば StoreUnavailable。
    fn load(&self) -> Result<Items, Error> {
        if !self.fs.exists(&self.path) {
            return Ok(Items::new());
        }
        let s = self
            .fs
            .read_to_string(&self.path)
            .map_err(|e| Error::store_unavailable(e.to_string()))?;
        if s.trim().is_empty() {
            return Ok(Items::new());
        }
        serde_json::from_str(&s).map_err(|e| {
            Error::store_unavailable(format!("corrupted store '{}': {}", self.path.display(), e))
        })
    }

    fn save(&self, items: &Items) -> Result<(), Error> {
        let unavailable = |e: Error| Error::store_unavailable(e.to_string());
        if let Some(parent) = self.path.parent() {
            self.fs.create_dir_all(parent).map_err(unavailable)?;
        }
        let json = serde_json::to_string_pretty(items)?;
        let tmp = self.path.with_extension("json.tmp");
        self.fs.write(&tmp, &json).map_err(unavailable)?;
        self.fs.rename(&tmp, &self.path).map_err(unavailable)?;
        Ok(())
    }
}

impl KeyValueStore for FileKeyValueStore {
    fn len(&self) -> Result<usize, Error> {
        Ok(self.load()?.len())
    }

    fn key(&self, index: usize) -> Result<Option<String>, Error> {
        Ok(self.load()?.into_keys().nth(index))
    }

    fn get_item(&self, key: &str) -> Result<Option<String>, Error> {
        Ok(self.load()?.remove(key))
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), Error> {
        let mut items = self.load()?;
        items.insert(key.to_string(), value.to_string());
        self.save(&items)
    }

    fn remove_item(&self, key: &str) -> Result<(), Error> {
        let mut items = self.load()?;
        if items.remove(key).is_none() {
            return Ok(());
        }
        self.save(&items)
    }

    fn keys(&self) -> Result<Vec<String>, Error> {
        Ok(self.load()?.into_keys().collect())
    }
}
