//! KeyValueStore 上の ArtifactStore 実装
//!
//! キー配置:
//! - `quiz-<id>`      本文（raw content）
//! - `quiz-<id>-meta` メタデータ JSON `{"createdAt": "<ISO8601>"}`
//!
//! メタデータのキーも `quiz-` で始まるため、列挙時は対応する本文キーが存在する
//! `-meta` キーを除外する。

use crate::domain::{ArtifactMeta, QuizId};
use crate::ports::outbound::ArtifactStore;
use common::error::Error;
use common::ports::outbound::{Clock, KeyValueStore};
use std::collections::HashSet;
use std::sync::Arc;

const CONTENT_PREFIX: &str = "quiz-";
const META_SUFFIX: &str = "-meta";

pub fn content_key(id: &QuizId) -> String {
    format!("{}{}", CONTENT_PREFIX, id)
}

pub fn meta_key(id: &QuizId) -> String {
    format!("{}{}{}", CONTENT_PREFIX, id, META_SUFFIX)
}

/// キーが本文キーなら ID を返す（`present` は走査時点の全キー）
fn content_id(key: &str, present: &HashSet<&str>) -> Option<QuizId> {
    let id = key.strip_prefix(CONTENT_PREFIX)?;
    if id.is_empty() {
        return None;
    }
    if let Some(base) = key.strip_suffix(META_SUFFIX) {
        if present.contains(base) {
            return None;
        }
    }
    Some(QuizId::new(id))
}

/// KeyValueStore（localStorage 相当）を使う ArtifactStore 実装
pub struct KvArtifactStore {
    kv: Arc<dyn KeyValueStore>,
    clock: Arc<dyn Clock>,
}

impl KvArtifactStore {
    pub fn new(kv: Arc<dyn KeyValueStore>, clock: Arc<dyn Clock>) -> Self {
        Self { kv, clock }
    }

    fn synthesize_metadata(&self, key: &str) -> Result<ArtifactMeta, Error> {
        let meta = ArtifactMeta::new(self.clock.now_iso8601());
        self.kv.set_item(key, &serde_json::to_string(&meta)?)?;
        Ok(meta)
    }
}

impl ArtifactStore for KvArtifactStore {
    fn put(&self, id: &QuizId, raw_content: &str) -> Result<(), Error> {
        self.kv.set_item(&content_key(id), raw_content)
    }

    fn list_ids(&self) -> Result<Vec<QuizId>, Error> {
        let keys = self.kv.keys()?;
        let present: HashSet<&str> = keys.iter().map(String::as_str).collect();
        Ok(keys
            .iter()
            .filter_map(|k| content_id(k, &present))
            .collect())
    }

    fn get(&self, id: &QuizId) -> Result<Option<String>, Error> {
        self.kv.get_item(&content_key(id))
    }

    fn get_or_create_metadata(&self, id: &QuizId) -> Result<ArtifactMeta, Error> {
        let key = meta_key(id);
        if let Some(raw) = self.kv.get_item(&key)? {
            // 壊れた値は無いものとして扱い、作り直して上書きする
            if let Ok(meta) = serde_json::from_str::<ArtifactMeta>(&raw) {
                return Ok(meta);
            }
        }
        self.synthesize_metadata(&key)
    }

    fn delete(&self, id: &QuizId) -> Result<(), Error> {
        // メタデータを先に消す。本文だけ残れば次の読み取りで修復されるが、
        // メタデータだけ残ると `<id>-meta` という本文として列挙されてしまう。
        self.kv.remove_item(&meta_key(id))?;
        self.kv.remove_item(&content_key(id))
    }
}
