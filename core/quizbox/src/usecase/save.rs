//! 生成パイプラインからの受け渡し（本文の保存）
//!
//! 保存と同時にメタデータを作成し、作成日時を実際の作成時刻にする。
//! 既存 ID の上書きでは最初の作成日時を保つ。

use common::error::Error;
use common::ports::outbound::{Log, LogLevel};
use std::sync::Arc;

use super::log_usecase;
use crate::domain::{ArtifactMeta, QuizId};
use crate::ports::outbound::ArtifactStore;

pub struct SaveQuizUseCase {
    store: Arc<dyn ArtifactStore>,
    log: Arc<dyn Log>,
}

impl SaveQuizUseCase {
    pub fn new(store: Arc<dyn ArtifactStore>, log: Arc<dyn Log>) -> Self {
        Self { store, log }
    }

    pub fn save(&self, id: &QuizId, raw_content: &str) -> Result<ArtifactMeta, Error> {
        if id.trim().is_empty() {
            return Err(Error::invalid_argument("quiz id must not be empty"));
        }
        self.store.put(id, raw_content)?;
        let meta = self.store.get_or_create_metadata(id)?;
        log_usecase(
            self.log.as_ref(),
            LogLevel::Info,
            "save",
            "quiz saved",
            vec![
                ("quiz_id", serde_json::json!(id.as_str())),
                ("created_at", serde_json::json!(meta.created_at)),
            ],
        );
        Ok(meta)
    }
}
