//! アダプター（成果物ストア・確認プロンプトの実装）

pub mod confirm;
pub mod kv_artifact_store;
pub mod logging_artifact_store;

pub use confirm::{AssumeYesConfirm, CliConfirm};
pub use kv_artifact_store::KvArtifactStore;
pub use logging_artifact_store::LoggingArtifactStore;
