//! 成果物ストア Outbound ポート
//!
//! 本文（`quiz-<id>`）とメタデータ（`quiz-<id>-meta`）の 2 種類のレコードを
//! 同じ ID で扱う。ストレージ基盤の失敗は `Error::StoreUnavailable` で返す。

use crate::domain::{ArtifactMeta, DeleteReport, QuizId};
use common::error::Error;

/// クイズ成果物の永続化（Outbound ポート）
///
/// 実装は `KvArtifactStore`（KeyValueStore 上）や、ログを記録する `LoggingArtifactStore` など。
pub trait ArtifactStore: Send + Sync {
    /// 本文を書き込む（既存は上書き）。メタデータには触れない。
    fn put(&self, id: &QuizId, raw_content: &str) -> Result<(), Error>;

    /// 保存されている本文の ID 一覧。順序は不定。
    fn list_ids(&self) -> Result<Vec<QuizId>, Error>;

    /// 本文を返す。存在しなければ None（列挙後に削除された場合も含む）。
    fn get(&self, id: &QuizId) -> Result<Option<String>, Error>;

    /// メタデータを返す。無い・壊れている場合は現在時刻で作って保存してから返す。
    ///
    /// 読み取りに見えて書き込みを伴う唯一の操作。一度作れば以降は同じ値を返す。
    fn get_or_create_metadata(&self, id: &QuizId) -> Result<ArtifactMeta, Error>;

    /// 本文とメタデータを削除する。存在しない ID でもエラーにしない。
    fn delete(&self, id: &QuizId) -> Result<(), Error>;

    /// 全 ID を削除する。途中の失敗で止めず、結果を報告する。
    fn delete_all(&self, ids: &[QuizId]) -> DeleteReport {
        let mut report = DeleteReport::default();
        for id in ids {
            match self.delete(id) {
                Ok(()) => report.deleted.push(id.clone()),
                Err(e) => report.failed.push((id.clone(), e)),
            }
        }
        report
    }
}
