//! ユースケース（ポート経由でのみ外界に触れる）

pub(crate) mod catalog;
pub(crate) mod remove;
pub(crate) mod save;

pub(crate) use catalog::CatalogUseCase;
pub(crate) use remove::RemoveUseCase;
pub(crate) use save::SaveQuizUseCase;

use common::ports::outbound::{now_iso8601, Log, LogLevel, LogRecord};
use serde_json::Value;
use std::collections::BTreeMap;

/// usecase 層の構造化ログを 1 行書き出す（失敗は無視）
pub(crate) fn log_usecase(
    log: &dyn Log,
    level: LogLevel,
    kind: &str,
    message: &str,
    fields: Vec<(&str, Value)>,
) {
    let fields: BTreeMap<String, Value> = fields
        .into_iter()
        .map(|(k, v)| (k.to_string(), v))
        .collect();
    let _ = log.log(&LogRecord {
        ts: now_iso8601(),
        level,
        message: message.to_string(),
        layer: Some("usecase".to_string()),
        kind: Some(kind.to_string()),
        fields: if fields.is_empty() { None } else { Some(fields) },
    });
}
