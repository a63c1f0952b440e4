//! quizbox 共通ライブラリ
//!
//! エラー型・Outbound ポート・標準アダプタを提供する。
//! クイズ固有のロジックは持たない。

/// エラーハンドリング
pub mod error;

/// ドメイン型（ディレクトリ解決結果など）
pub mod domain;

/// Ports & Adapters のポート定義
pub mod ports;

/// ポートの標準実装とテスト用実装
pub mod adapter;
