//! ドメイン型（Newtype、enum、ルール）

pub mod artifact;
pub mod command;
pub mod title;

pub use artifact::{ArtifactMeta, CatalogRecord, DeleteReport, QuizId};
pub use command::Command;
