//! 実行時ディレクトリ（XDG / QUIZBOX_HOME 解決結果）
//!
//! EnvResolver::resolve_dirs() で取得し、ストレージファイル・ログのパス計算に使う。

use std::path::PathBuf;

const STORE_FILENAME: &str = "local_storage.json";
const LOG_FILENAME: &str = "quizbox.jsonl";

/// 解決済みの data / state ディレクトリ
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dirs {
    pub data_dir: PathBuf,
    pub state_dir: PathBuf,
}

impl Dirs {
    /// キー値ストレージの実体ファイル（data/local_storage.json）
    pub fn store_file(&self) -> PathBuf {
        self.data_dir.join(STORE_FILENAME)
    }

    /// ログ格納ディレクトリ（state/logs）
    pub fn logs_dir(&self) -> PathBuf {
        self.state_dir.join("logs")
    }

    pub fn log_file(&self) -> PathBuf {
        self.logs_dir().join(LOG_FILENAME)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paths_derive_from_dirs() {
        let dirs = Dirs {
            data_dir: PathBuf::from("/tmp/qb/data"),
            state_dir: PathBuf::from("/tmp/qb/state"),
        };
        assert_eq!(dirs.store_file(), PathBuf::from("/tmp/qb/data/local_storage.json"));
        assert_eq!(dirs.log_file(), PathBuf::from("/tmp/qb/state/logs/quizbox.jsonl"));
    }
}
