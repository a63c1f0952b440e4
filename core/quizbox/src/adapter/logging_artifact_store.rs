//! 成果物ストアの各操作をログに記録する ArtifactStore のラッパ

use crate::domain::{ArtifactMeta, DeleteReport, QuizId};
use crate::ports::outbound::ArtifactStore;
use common::error::Error;
use common::ports::outbound::{now_iso8601, Log, LogLevel, LogRecord};
use serde_json::Value;
use std::collections::BTreeMap;
use std::sync::Arc;

pub struct LoggingArtifactStore {
    inner: Arc<dyn ArtifactStore>,
    log: Arc<dyn Log>,
}

impl LoggingArtifactStore {
    pub fn new(inner: Arc<dyn ArtifactStore>, log: Arc<dyn Log>) -> Self {
        Self { inner, log }
    }

    fn record<T>(
        &self,
        operation: &str,
        message: &str,
        result: &Result<T, Error>,
        extra: Vec<(&str, Value)>,
    ) {
        let mut fields = BTreeMap::new();
        fields.insert("operation".to_string(), serde_json::json!(operation));
        for (k, v) in extra {
            fields.insert(k.to_string(), v);
        }
        let level = match result {
            Ok(_) => LogLevel::Info,
            Err(e) => {
                fields.insert("error".to_string(), serde_json::json!(e.to_string()));
                LogLevel::Error
            }
        };
        let _ = self.log.log(&LogRecord {
            ts: now_iso8601(),
            level,
            message: message.to_string(),
            layer: Some("adapter".to_string()),
            kind: Some("store".to_string()),
            fields: Some(fields),
        });
    }
}

impl ArtifactStore for LoggingArtifactStore {
    fn put(&self, id: &QuizId, raw_content: &str) -> Result<(), Error> {
        let out = self.inner.put(id, raw_content);
        self.record(
            "put",
            "store write",
            &out,
            vec![
                ("quiz_id", serde_json::json!(id.as_str())),
                ("bytes", serde_json::json!(raw_content.len())),
            ],
        );
        out
    }

    fn list_ids(&self) -> Result<Vec<QuizId>, Error> {
        let out = self.inner.list_ids();
        let count = out.as_ref().map(|ids| ids.len()).unwrap_or(0);
        self.record(
            "list_ids",
            "store read",
            &out,
            vec![("count", serde_json::json!(count))],
        );
        out
    }

    fn get(&self, id: &QuizId) -> Result<Option<String>, Error> {
        let out = self.inner.get(id);
        let found = matches!(out, Ok(Some(_)));
        self.record(
            "get",
            "store read",
            &out,
            vec![
                ("quiz_id", serde_json::json!(id.as_str())),
                ("found", serde_json::json!(found)),
            ],
        );
        out
    }

    fn get_or_create_metadata(&self, id: &QuizId) -> Result<ArtifactMeta, Error> {
        let out = self.inner.get_or_create_metadata(id);
        let created_at = out.as_ref().map(|m| m.created_at.clone()).ok();
        self.record(
            "metadata",
            "store read",
            &out,
            vec![
                ("quiz_id", serde_json::json!(id.as_str())),
                ("created_at", serde_json::json!(created_at)),
            ],
        );
        out
    }

    fn delete(&self, id: &QuizId) -> Result<(), Error> {
        let out = self.inner.delete(id);
        self.record(
            "delete",
            "store write",
            &out,
            vec![("quiz_id", serde_json::json!(id.as_str()))],
        );
        out
    }

    fn delete_all(&self, ids: &[QuizId]) -> DeleteReport {
        let report = self.inner.delete_all(ids);
        let failed: Vec<&str> = report.failed.iter().map(|(id, _)| id.as_str()).collect();
        let summary: Result<(), Error> = if report.is_complete() {
            Ok(())
        } else {
            Err(Error::store_unavailable(format!(
                "{} of {} deletions failed",
                report.failed.len(),
                ids.len()
            )))
        };
        self.record(
            "delete_all",
            "store write",
            &summary,
            vec![
                ("requested", serde_json::json!(ids.len())),
                ("deleted", serde_json::json!(report.deleted.len())),
                ("failed_ids", serde_json::json!(failed)),
            ],
        );
        report
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapter::KvArtifactStore;
    use common::adapter::{FixedClock, MemoryKeyValueStore};
    use std::sync::Mutex;

    #[derive(Default)]
    struct CapturingLog {
        records: Mutex<Vec<LogRecord>>,
    }

    impl Log for CapturingLog {
        fn log(&self, record: &LogRecord) -> Result<(), Error> {
            self.records.lock().unwrap().push(record.clone());
            Ok(())
        }
    }

    fn setup() -> (Arc<MemoryKeyValueStore>, Arc<CapturingLog>, LoggingArtifactStore) {
        let kv = Arc::new(MemoryKeyValueStore::new());
        let inner = Arc::new(KvArtifactStore::new(kv.clone(), Arc::new(FixedClock::new(0))));
        let log = Arc::new(CapturingLog::default());
        let store = LoggingArtifactStore::new(inner, log.clone());
        (kv, log, store)
    }

    #[test]
    fn test_logs_each_operation() {
        let (_kv, log, store) = setup();
        let id = QuizId::new("a");
        store.put(&id, "# A").unwrap();
        store.list_ids().unwrap();
        store.get(&id).unwrap();
        store.get_or_create_metadata(&id).unwrap();
        store.delete(&id).unwrap();

        let records = log.records.lock().unwrap();
        let ops: Vec<String> = records
            .iter()
            .map(|r| r.fields.as_ref().unwrap()["operation"].as_str().unwrap().to_string())
            .collect();
        assert_eq!(ops, vec!["put", "list_ids", "get", "metadata", "delete"]);
        assert!(records.iter().all(|r| r.level == LogLevel::Info));
        assert!(records.iter().all(|r| r.kind.as_deref() == Some("store")));
    }

    #[test]
    fn test_failure_logged_as_error_and_propagated() {
        let (kv, log, store) = setup();
        kv.set_fail_writes(true);
        let err = store.put(&QuizId::new("a"), "x").unwrap_err();
        assert!(matches!(err, Error::StoreUnavailable(_)));

        let records = log.records.lock().unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].level, LogLevel::Error);
        assert!(records[0].fields.as_ref().unwrap().contains_key("error"));
    }

    #[test]
    fn test_delete_all_logs_summary() {
        let (kv, log, store) = setup();
        let ids = vec![QuizId::new("a"), QuizId::new("b")];
        for id in &ids {
            store.put(id, "x").unwrap();
        }
        kv.fail_key("quiz-b");
        let report = store.delete_all(&ids);
        assert_eq!(report.deleted, vec![QuizId::new("a")]);

        let records = log.records.lock().unwrap();
        let last = records.last().unwrap();
        assert_eq!(last.level, LogLevel::Error);
        let fields = last.fields.as_ref().unwrap();
        assert_eq!(fields["operation"], "delete_all");
        assert_eq!(fields["failed_ids"], serde_json::json!(["b"]));
    }
}
