//! 環境変数解決 Outbound ポート
//!
//! データ・状態ディレクトリと確認プロンプト省略の設定を環境変数から解決する。
//! usecase / wiring はこの trait 経由でのみ環境変数にアクセスする。

use crate::domain::Dirs;
use crate::error::Error;
use std::path::PathBuf;

/// 環境変数解決抽象（Outbound ポート）
///
/// 実装は `common::adapter::StdEnvResolver` など。
pub trait EnvResolver: Send + Sync {
    /// data / state ディレクトリを解決する
    ///
    /// 優先順位:
    /// 1. QUIZBOX_HOME（設定されていれば `$QUIZBOX_HOME/data` と `$QUIZBOX_HOME/state`）
    /// 2. $XDG_DATA_HOME/quizbox と $XDG_STATE_HOME/quizbox
    /// 3. $HOME/.local/share/quizbox と $HOME/.local/state/quizbox
    fn resolve_dirs(&self) -> Result<Dirs, Error>;

    /// ストレージ実体ファイルのパス
    fn resolve_store_path(&self) -> Result<PathBuf, Error> {
        Ok(self.resolve_dirs()?.store_file())
    }

    /// 構造化ログファイルのパス
    fn resolve_log_file_path(&self) -> Result<PathBuf, Error> {
        Ok(self.resolve_dirs()?.log_file())
    }

    /// QUIZBOX_ASSUME_YES が真なら破壊的操作の確認を省略する
    fn assume_yes(&self) -> bool;
}
