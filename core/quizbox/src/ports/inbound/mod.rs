//! Inbound ポート: ドライバ（CLI）がアプリを呼び出すインターフェース

use crate::domain::Command;
use common::error::Error;

/// 解析済みの Command を実行する Inbound ポート
///
/// main はこの trait を実装した Runner の run を呼び出し、戻り値を終了コードにする。
pub trait UseCaseRunner {
    fn run(&self, command: Command) -> Result<i32, Error>;
}
