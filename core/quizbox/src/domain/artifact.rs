//! クイズ成果物のドメイン型
//!
//! 本文（raw content）とメタデータ（作成日時）は別キーで保存され、
//! 一覧表示時に CatalogRecord として結合される。

use chrono::{DateTime, NaiveDate};
use common::error::Error;
use serde::{Deserialize, Serialize};
use std::fmt;

use super::title;

/// クイズ ID（外部の生成パイプラインが払い出す不透明な文字列）
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct QuizId(String);

impl QuizId {
    pub fn new(s: impl Into<String>) -> Self {
        Self(s.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::ops::Deref for QuizId {
    type Target = str;
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl fmt::Display for QuizId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl From<String> for QuizId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for QuizId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

/// メタデータ（`quiz-<id>-meta` に JSON で保存）
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArtifactMeta {
    /// ISO8601 形式の作成日時
    #[serde(rename = "createdAt")]
    pub created_at: String,
}

impl ArtifactMeta {
    pub fn new(created_at: impl Into<String>) -> Self {
        Self {
            created_at: created_at.into(),
        }
    }
}

/// 一覧表示用のレコード（導出のみ。永続化しない）
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogRecord {
    pub id: QuizId,
    pub title: String,
    pub content: String,
    pub created_at: String,
}

impl CatalogRecord {
    /// 本文からタイトルを導出して組み立てる
    pub fn new(id: QuizId, content: String, created_at: String) -> Self {
        let title = title::derive_title(&content);
        Self {
            id,
            title,
            content,
            created_at,
        }
    }

    /// 並び替え用の時刻（ミリ秒）。解釈できなければ epoch 0。
    pub fn created_at_ms(&self) -> i64 {
        parse_instant_ms(&self.created_at)
    }
}

/// ISO8601 文字列を Unix epoch ミリ秒へ変換する。解釈できなければ 0。
///
/// RFC3339（`2026-02-07T12:00:00.000Z` など）と日付のみ（UTC の 0 時）を受け付ける。
pub fn parse_instant_ms(s: &str) -> i64 {
    let s = s.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return dt.timestamp_millis();
    }
    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .map(|dt| dt.and_utc().timestamp_millis())
        .unwrap_or(0)
}

/// 一覧を作成日時の新しい順に並べる。同時刻は元の列挙順を保つ（安定ソート）。
pub fn sort_newest_first(records: &mut [CatalogRecord]) {
    records.sort_by_key(|r| std::cmp::Reverse(r.created_at_ms()));
}

/// 一括削除の結果（1 件の失敗で残りを止めない）
#[derive(Debug, Default)]
pub struct DeleteReport {
    pub deleted: Vec<QuizId>,
    pub failed: Vec<(QuizId, Error)>,
}

impl DeleteReport {
    pub fn is_complete(&self) -> bool {
        self.failed.is_empty()
    }
}
