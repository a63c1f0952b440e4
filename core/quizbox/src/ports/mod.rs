//! Ports & Adapters のポート定義
//!
//! - inbound: ドライバ（CLI）がアプリを呼び出すインターフェース
//! - outbound: 成果物ストア・確認プロンプトの trait（common の KeyValueStore / Clock / Log も利用）

pub mod inbound;
pub mod outbound;
