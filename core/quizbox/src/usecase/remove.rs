//! 確認付きの削除ユースケース
//!
//! 確認を拒否された場合はストアを一切変更せず `Error::Cancelled` を返す。

use common::error::Error;
use std::sync::Arc;

use super::CatalogUseCase;
use crate::domain::{DeleteReport, QuizId};
use crate::ports::outbound::{Confirmation, DestructiveConfirm};

pub struct RemoveUseCase {
    catalog: Arc<CatalogUseCase>,
    confirm: Arc<dyn DestructiveConfirm>,
}

impl RemoveUseCase {
    pub fn new(catalog: Arc<CatalogUseCase>, confirm: Arc<dyn DestructiveConfirm>) -> Self {
        Self { catalog, confirm }
    }

    /// 1 件削除
    pub fn remove_one(&self, id: &QuizId) -> Result<(), Error> {
        self.ask(&format!("Delete quiz '{}'?", id))?;
        self.catalog.delete_one(id)
    }

    /// 指定 ID をまとめて削除（ベストエフォート）
    pub fn remove_many(&self, ids: &[QuizId]) -> Result<DeleteReport, Error> {
        if ids.is_empty() {
            return Err(Error::invalid_argument("rm requires at least one id"));
        }
        self.ask(&format!("Delete {} quizzes?", ids.len()))?;
        Ok(self.catalog.delete_all(ids))
    }

    /// カタログに表示される全件を削除する。空なら確認せず何もしない。
    pub fn clear(&self) -> Result<DeleteReport, Error> {
        let ids: Vec<QuizId> = self
            .catalog
            .build_catalog()
            .into_iter()
            .map(|r| r.id)
            .collect();
        if ids.is_empty() {
            return Ok(DeleteReport::default());
        }
        self.ask(&format!("Delete all {} quizzes from history?", ids.len()))?;
        Ok(self.catalog.delete_all(&ids))
    }

    fn ask(&self, question: &str) -> Result<(), Error> {
        match self.confirm.confirm(question)? {
            Confirmation::Approved => Ok(()),
            Confirmation::Declined => Err(Error::cancelled("deletion declined; nothing was removed")),
        }
    }
}
