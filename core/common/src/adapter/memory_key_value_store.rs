//! メモリ上の KeyValueStore 実装（テスト・一時利用）
//!
//! HashMap を使うため列挙順は不定。失敗注入で StoreUnavailable を再現できる。

use crate::error::Error;
use crate::ports::outbound::KeyValueStore;
use std::collections::{HashMap, HashSet};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Mutex, MutexGuard};

/// メモリ上のキー値ストレージ
#[derive(Debug, Default)]
pub struct MemoryKeyValueStore {
    items: Mutex<HashMap<String, String>>,
    fail_reads: AtomicBool,
    fail_writes: AtomicBool,
    failing_keys: Mutex<HashSet<String>>,
}

impl MemoryKeyValueStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// 初期データ付きで生成する
    pub fn with_items<K, V>(items: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        let map = items
            .into_iter()
            .map(|(k, v)| (k.into(), v.into()))
            .collect();
        Self {
            items: Mutex::new(map),
            ..Self::default()
        }
    }

    /// 読み取り（len / key / get_item）をすべて失敗させる
    pub fn with_fail_reads(self, fail: bool) -> Self {
        self.set_fail_reads(fail);
        self
    }

    /// 書き込み（set_item / remove_item）をすべて失敗させる
    pub fn with_fail_writes(self, fail: bool) -> Self {
        self.set_fail_writes(fail);
        self
    }

    pub fn set_fail_reads(&self, fail: bool) {
        self.fail_reads.store(fail, Ordering::SeqCst);
    }

    pub fn set_fail_writes(&self, fail: bool) {
        self.fail_writes.store(fail, Ordering::SeqCst);
    }

    /// 指定キーへの書き込み・削除だけを失敗させる
    pub fn fail_key(&self, key: &str) {
        if let Ok(mut keys) = self.failing_keys.lock() {
            keys.insert(key.to_string());
        }
    }

    /// 現在の内容のコピー（テストでの検証用）
    pub fn snapshot(&self) -> HashMap<String, String> {
        self.items.lock().map(|m| m.clone()).unwrap_or_default()
    }

    fn lock(&self) -> Result<MutexGuard<'_, HashMap<String, String>>, Error> {
        self.items
            .lock()
            .map_err(|_| Error::store_unavailable("memory store lock poisoned"))
    }

    fn check_read(&self) -> Result<(), Error> {
        if self.fail_reads.load(Ordering::SeqCst) {
            return Err(Error::store_unavailable("read access denied"));
        }
        Ok(())
    }

    fn check_write(&self, key: &str) -> Result<(), Error> {
        if self.fail_writes.load(Ordering::SeqCst) {
            return Err(Error::store_unavailable("quota exceeded"));
        }
        let failing = self
            .failing_keys
            .lock()
            .map(|keys| keys.contains(key))
            .unwrap_or(false);
        if failing {
            return Err(Error::store_unavailable(format!("write rejected for '{}'", key)));
        }
        Ok(())
    }
}

impl KeyValueStore for MemoryKeyValueStore {
    fn len(&self) -> Result<usize, Error> {
        self.check_read()?;
        Ok(self.lock()?.len())
    }

    fn key(&self, index: usize) -> Result<Option<String>, Error> {
        self.check_read()?;
        Ok(self.lock()?.keys().nth(index).cloned())
    }

    fn get_item(&self, key: &str) -> Result<Option<String>, Error> {
        self.check_read()?;
        Ok(self.lock()?.get(key).cloned())
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), Error> {
        self.check_write(key)?;
        self.lock()?.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove_item(&self, key: &str) -> Result<(), Error> {
        self.check_write(key)?;
        self.lock()?.remove(key);
        Ok(())
    }

    fn keys(&self) -> Result<Vec<String>, Error> {
        self.check_read()?;
        Ok(self.lock()?.keys().cloned().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_get_remove() {
        let store = MemoryKeyValueStore::new();
        store.set_item("a", "1").unwrap();
        assert_eq!(store.get_item("a").unwrap().as_deref(), Some("1"));
        assert_eq!(store.len().unwrap(), 1);
        store.remove_item("a").unwrap();
        assert_eq!(store.get_item("a").unwrap(), None);
        store.remove_item("a").unwrap();
    }

    #[test]
    fn test_key_index_covers_all_keys() {
        let store = MemoryKeyValueStore::with_items([("a", "1"), ("b", "2"), ("c", "3")]);
        let mut keys: Vec<String> = (0..store.len().unwrap())
            .filter_map(|i| store.key(i).unwrap())
            .collect();
        keys.sort();
        assert_eq!(keys, vec!["a", "b", "c"]);
        assert_eq!(store.key(3).unwrap(), None);
    }

    #[test]
    fn test_fail_reads_and_writes() {
        let store = MemoryKeyValueStore::with_items([("a", "1")]).with_fail_reads(true);
        assert!(matches!(store.len(), Err(Error::StoreUnavailable(_))));
        assert!(matches!(store.get_item("a"), Err(Error::StoreUnavailable(_))));

        let store = MemoryKeyValueStore::new().with_fail_writes(true);
        assert!(matches!(store.set_item("a", "1"), Err(Error::StoreUnavailable(_))));
    }

    #[test]
    fn test_fail_single_key() {
        let store = MemoryKeyValueStore::with_items([("a", "1"), ("b", "2")]);
        store.fail_key("a");
        assert!(store.remove_item("a").is_err());
        store.remove_item("b").unwrap();
        assert_eq!(store.snapshot().len(), 1);
    }
}
