//! カタログ構築と削除のユースケース
//!
//! 一覧は毎回ストア全体を走査して作り直す。途中の失敗はそのレコードを省くだけで、
//! 呼び出し側には伝えない（診断用にログへ記録する）。

use common::error::Error;
use common::ports::outbound::{Log, LogLevel};
use std::sync::Arc;

use super::log_usecase;
use crate::domain::artifact::sort_newest_first;
use crate::domain::{CatalogRecord, DeleteReport, QuizId};
use crate::ports::outbound::ArtifactStore;

pub struct CatalogUseCase {
    store: Arc<dyn ArtifactStore>,
    log: Arc<dyn Log>,
}

impl CatalogUseCase {
    pub fn new(store: Arc<dyn ArtifactStore>, log: Arc<dyn Log>) -> Self {
        Self { store, log }
    }

    /// 作成日時の新しい順のカタログ。失敗しない。
    ///
    /// メタデータが無いレコードはここで作成日時が付与される（読み取り時の書き込み）。
    pub fn build_catalog(&self) -> Vec<CatalogRecord> {
        let ids = match self.store.list_ids() {
            Ok(ids) => ids,
            Err(e) => {
                log_usecase(
                    self.log.as_ref(),
                    LogLevel::Error,
                    "catalog",
                    "catalog unavailable",
                    vec![("error", serde_json::json!(e.to_string()))],
                );
                return Vec::new();
            }
        };

        let mut records = Vec::with_capacity(ids.len());
        for id in ids {
            match self.load_record(&id) {
                Ok(Some(record)) => records.push(record),
                // 列挙後に消えた
                Ok(None) => {}
                Err(e) => log_usecase(
                    self.log.as_ref(),
                    LogLevel::Warn,
                    "catalog",
                    "catalog record skipped",
                    vec![
                        ("quiz_id", serde_json::json!(id.as_str())),
                        ("error", serde_json::json!(e.to_string())),
                    ],
                ),
            }
        }
        sort_newest_first(&mut records);
        records
    }

    /// 1 件取得。存在しなければ None。
    pub fn show(&self, id: &QuizId) -> Result<Option<CatalogRecord>, Error> {
        self.load_record(id)
    }

    /// 1 件取得。存在しなければ NotFound。
    pub fn require(&self, id: &QuizId) -> Result<CatalogRecord, Error> {
        self.show(id)?
            .ok_or_else(|| Error::not_found(format!("quiz {}", id)))
    }

    /// 1 件削除（本文とメタデータ）。呼び出し側はカタログを作り直す。
    pub fn delete_one(&self, id: &QuizId) -> Result<(), Error> {
        self.store.delete(id)
    }

    /// 複数削除（ベストエフォート）。呼び出し側はカタログを作り直す。
    pub fn delete_all(&self, ids: &[QuizId]) -> DeleteReport {
        let report = self.store.delete_all(ids);
        for (id, e) in &report.failed {
            log_usecase(
                self.log.as_ref(),
                LogLevel::Warn,
                "catalog",
                "delete failed",
                vec![
                    ("quiz_id", serde_json::json!(id.as_str())),
                    ("error", serde_json::json!(e.to_string())),
                ],
            );
        }
        report
    }

    fn load_record(&self, id: &QuizId) -> Result<Option<CatalogRecord>, Error> {
        let Some(content) = self.store.get(id)? else {
            return Ok(None);
        };
        // 空の本文は一覧に出さない（メタデータも作らない）
        if content.is_empty() {
            return Ok(None);
        }
        let meta = self.store.get_or_create_metadata(id)?;
        Ok(Some(CatalogRecord::new(id.clone(), content, meta.created_at)))
    }
}
