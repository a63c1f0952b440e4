//! 破壊的操作の確認 Outbound ポート
//!
//! usecase はこの trait 経由で確認を取得し、対話の具体実装（stdin/stderr）は adapter 層に置く。

use common::error::Error;

/// 確認結果
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Confirmation {
    /// ユーザーが実行を許可した
    Approved,
    /// ユーザーが拒否した（ストアは変更しない）
    Declined,
}

/// 削除前にユーザーの確認を得る Outbound ポート
pub trait DestructiveConfirm: Send + Sync {
    fn confirm(&self, question: &str) -> Result<Confirmation, Error>;
}
