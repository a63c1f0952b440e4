//! Outbound ポート: アプリが外界（FS・時刻・環境変数・ログ・キー値ストレージ）を使うための trait

pub mod clock;
pub mod env_resolver;
pub mod fs;
pub mod key_value_store;
pub mod log;

pub use clock::Clock;
pub use env_resolver::EnvResolver;
pub use fs::{FileMetadata, FileSystem};
pub use key_value_store::KeyValueStore;
pub use log::{now_iso8601, Log, LogLevel, LogRecord};
