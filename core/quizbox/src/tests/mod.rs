//! クレート全体のシナリオテスト（配線済みのユースケースをメモリストア・固定時刻で動かす）

mod remove_tests;

use crate::ports::outbound::{Confirmation, DestructiveConfirm};
use crate::wiring::{wire_with, App};
use common::adapter::{FixedClock, MemoryKeyValueStore, NoopLog, StdFileSystem};
use common::error::Error;
use common::ports::outbound::KeyValueStore;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

/// 2026-02-07T12:00:00.000Z
pub(crate) const T0: u64 = 1_770_465_600_000;

/// 決まった答えを返し、呼ばれた回数を数える確認実装
pub(crate) struct ScriptedConfirm {
    answer: Confirmation,
    pub(crate) asked: AtomicUsize,
}

impl ScriptedConfirm {
    pub(crate) fn new(answer: Confirmation) -> Self {
        Self {
            answer,
            asked: AtomicUsize::new(0),
        }
    }
}

impl DestructiveConfirm for ScriptedConfirm {
    fn confirm(&self, _question: &str) -> Result<Confirmation, Error> {
        self.asked.fetch_add(1, Ordering::SeqCst);
        Ok(self.answer)
    }
}

pub(crate) struct Harness {
    pub(crate) kv: Arc<MemoryKeyValueStore>,
    pub(crate) clock: Arc<FixedClock>,
    pub(crate) confirm: Arc<ScriptedConfirm>,
    pub(crate) app: App,
}

pub(crate) fn harness_with(kv: Arc<MemoryKeyValueStore>, answer: Confirmation) -> Harness {
    let clock = Arc::new(FixedClock::new(T0));
    let confirm = Arc::new(ScriptedConfirm::new(answer));
    let app = wire_with(
        Arc::new(StdFileSystem),
        Arc::clone(&kv) as Arc<dyn KeyValueStore>,
        clock.clone(),
        Arc::new(NoopLog),
        confirm.clone(),
    );
    Harness {
        kv,
        clock,
        confirm,
        app,
    }
}

pub(crate) fn harness() -> Harness {
    harness_with(Arc::new(MemoryKeyValueStore::new()), Confirmation::Approved)
}

pub(crate) fn catalog_ids(app: &App) -> Vec<String> {
    app.catalog_use_case
        .build_catalog()
        .into_iter()
        .map(|r| r.id.to_string())
        .collect()
}
