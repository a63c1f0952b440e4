//! アダプター（ポートの標準実装とテスト用実装）
//!
//! usecase はポートの trait 経由でのみファイル・時刻・環境変数・ストレージに触れる。
//! 実装は標準実装（Std* / File*）やテスト用の実装（Memory* / Fixed* / Noop*）を注入する。

pub mod file_json_log;
pub mod file_key_value_store;
pub mod memory_key_value_store;
pub mod std_clock;
pub mod std_env_resolver;
pub mod std_fs;

pub use file_json_log::{FileJsonLog, NoopLog};
pub use file_key_value_store::FileKeyValueStore;
pub use memory_key_value_store::MemoryKeyValueStore;
pub use std_clock::{FixedClock, StdClock};
pub use std_env_resolver::StdEnvResolver;
pub use std_fs::StdFileSystem;
