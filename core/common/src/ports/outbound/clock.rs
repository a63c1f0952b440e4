//! 時刻取得 Outbound ポート
//!
//! usecase はこの trait 経由で「現在時刻」を取得する。テストでは固定時刻を注入する。

use chrono::{DateTime, SecondsFormat, Utc};

/// 時刻取得の抽象
///
/// 実装は `common::adapter::StdClock` やテスト用の `FixedClock` など。
pub trait Clock: Send + Sync {
    /// 現在時刻をミリ秒（Unix epoch）で返す
    fn now_ms(&self) -> u64;

    /// 現在時刻を ISO8601（UTC・ミリ秒・`Z` 終端）で返す
    ///
    /// 例: `2026-02-07T12:00:00.000Z`
    fn now_iso8601(&self) -> String {
        let ms = i64::try_from(self.now_ms()).unwrap_or(i64::MAX);
        DateTime::<Utc>::from_timestamp_millis(ms)
            .unwrap_or_default()
            .to_rfc3339_opts(SecondsFormat::Millis, true)
    }
}
