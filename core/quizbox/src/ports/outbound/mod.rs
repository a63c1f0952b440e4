//! Outbound ポート: アプリが外界（成果物ストア・ユーザー確認）を使うための trait

pub mod artifact_store;
pub mod confirm;

pub use artifact_store::ArtifactStore;
pub use confirm::{Confirmation, DestructiveConfirm};
