//! エラーハンドリング
//!
//! 全レイヤー共通のエラー型。CLI 境界で `exit_code()` により終了コードへ変換する。

use thiserror::Error as ThisError;

/// エラー型
#[derive(Debug, ThisError)]
pub enum Error {
    /// ファイル等の I/O 失敗
    #[error("{0}")]
    Io(String),

    /// JSON のシリアライズ・デシリアライズ失敗
    #[error("json: {0}")]
    Json(String),

    /// 引数不正（usage を表示する）
    #[error("{0}")]
    InvalidArgument(String),

    /// 環境変数・ディレクトリ解決の失敗
    #[error("environment: {0}")]
    Env(String),

    /// ストレージ基盤が操作を拒否した（容量超過・アクセス不可・破損）
    ///
    /// 回復可能。カタログは空または部分的な結果に縮退する。
    #[error("store unavailable: {0}")]
    StoreUnavailable(String),

    /// 破壊的操作の確認をユーザーが拒否した
    #[error("cancelled: {0}")]
    Cancelled(String),

    /// 指定された成果物が存在しない
    #[error("not found: {0}")]
    NotFound(String),
}

impl Error {
    pub fn io_msg(msg: impl Into<String>) -> Self {
        Error::Io(msg.into())
    }

    /// 引数不正エラー
    pub fn invalid_argument(msg: impl Into<String>) -> Self {
        Error::InvalidArgument(msg.into())
    }

    pub fn env(msg: impl Into<String>) -> Self {
        Error::Env(msg.into())
    }

    pub fn store_unavailable(msg: impl Into<String>) -> Self {
        Error::StoreUnavailable(msg.into())
    }

    pub fn cancelled(msg: impl Into<String>) -> Self {
        Error::Cancelled(msg.into())
    }

    pub fn not_found(msg: impl Into<String>) -> Self {
        Error::NotFound(msg.into())
    }

    /// usage を表示すべきエラーか
    pub fn is_usage(&self) -> bool {
        matches!(self, Error::InvalidArgument(_))
    }

    /// 終了コード（sysexits.h 準拠）
    pub fn exit_code(&self) -> i32 {
        match self {
            Error::InvalidArgument(_) => 64,
            Error::Json(_) => 65,
            Error::NotFound(_) => 66,
            Error::Io(_) | Error::StoreUnavailable(_) => 74,
            Error::Env(_) => 78,
            Error::Cancelled(_) => 1,
        }
    }
}

impl From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Self {
        Error::Json(e.to_string())
    }
}
