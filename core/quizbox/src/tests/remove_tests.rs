use super::{catalog_ids, harness, harness_with};
use crate::domain::QuizId;
use crate::ports::outbound::Confirmation;
use common::adapter::MemoryKeyValueStore;
use common::error::Error;
use std::sync::atomic::Ordering;
use std::sync::Arc;

fn ids(v: &[&str]) -> Vec<QuizId> {
    v.iter().map(|s| QuizId::new(*s)).collect()
}

fn seeded(answer: Confirmation) -> super::Harness {
    let h = harness_with(Arc::new(MemoryKeyValueStore::new()), answer);
    for (i, name) in ["a", "b", "c"].iter().enumerate() {
        h.clock.advance_ms(1_000 * i as u64);
        h.app
            .save_use_case
            .save(&QuizId::new(*name), &format!("# {}", name))
            .unwrap();
    }
    h
}

#[test]
fn test_delete_one_removes_only_target_pair() {
    let h = seeded(Confirmation::Approved);
    h.app.catalog_use_case.delete_one(&QuizId::new("b")).unwrap();

    let snap = h.kv.snapshot();
    assert!(!snap.contains_key("quiz-b"));
    assert!(!snap.contains_key("quiz-b-meta"));
    assert_eq!(snap.len(), 4);
    assert_eq!(catalog_ids(&h.app), vec!["c", "a"]);
}

#[test]
fn test_delete_nonexistent_id_is_noop() {
    let h = seeded(Confirmation::Approved);
    let before = h.kv.snapshot();
    h.app.catalog_use_case.delete_one(&QuizId::new("ghost")).unwrap();
    assert_eq!(h.kv.snapshot(), before);
    assert_eq!(h.app.catalog_use_case.build_catalog().len(), 3);
}

#[test]
fn test_delete_all_empty_set_is_noop() {
    let h = seeded(Confirmation::Approved);
    let report = h.app.catalog_use_case.delete_all(&[]);
    assert!(report.deleted.is_empty());
    assert!(report.is_complete());
    assert_eq!(h.app.catalog_use_case.build_catalog().len(), 3);
}

#[test]
fn test_delete_all_full_set_empties_catalog() {
    let h = seeded(Confirmation::Approved);
    let report = h.app.catalog_use_case.delete_all(&ids(&["a", "b", "c"]));
    assert_eq!(report.deleted.len(), 3);
    assert!(h.app.catalog_use_case.build_catalog().is_empty());
    assert!(h.kv.snapshot().is_empty());
}

#[test]
fn test_remove_one_confirmed() {
    let h = seeded(Confirmation::Approved);
    h.app.remove_use_case.remove_one(&QuizId::new("a")).unwrap();
    assert_eq!(h.confirm.asked.load(Ordering::SeqCst), 1);
    assert_eq!(catalog_ids(&h.app), vec!["c", "b"]);
}

#[test]
fn test_declined_confirmation_mutates_nothing() {
    let h = seeded(Confirmation::Declined);
    let before = h.kv.snapshot();

    let err = h.app.remove_use_case.remove_one(&QuizId::new("a")).unwrap_err();
    assert!(matches!(err, Error::Cancelled(_)));
    let err = h.app.remove_use_case.remove_many(&ids(&["a", "b"])).unwrap_err();
    assert!(matches!(err, Error::Cancelled(_)));
    let err = h.app.remove_use_case.clear().unwrap_err();
    assert!(matches!(err, Error::Cancelled(_)));

    assert_eq!(h.kv.snapshot(), before);
    assert_eq!(h.confirm.asked.load(Ordering::SeqCst), 3);
}

#[test]
fn test_remove_many_requires_ids() {
    let h = seeded(Confirmation::Approved);
    let err = h.app.remove_use_case.remove_many(&[]).unwrap_err();
    assert!(err.is_usage());
    assert_eq!(h.confirm.asked.load(Ordering::SeqCst), 0);
}

#[test]
fn test_clear_deletes_everything_listed() {
    let h = seeded(Confirmation::Approved);
    let report = h.app.remove_use_case.clear().unwrap();
    assert_eq!(report.deleted.len(), 3);
    assert!(h.app.catalog_use_case.build_catalog().is_empty());
}

#[test]
fn test_clear_on_empty_catalog_does_not_ask() {
    let h = harness();
    let report = h.app.remove_use_case.clear().unwrap();
    assert!(report.deleted.is_empty());
    assert_eq!(h.confirm.asked.load(Ordering::SeqCst), 0);
}

#[test]
fn test_clear_continues_after_single_failure() {
    let h = seeded(Confirmation::Approved);
    h.kv.fail_key("quiz-b");

    let report = h.app.remove_use_case.clear().unwrap();
    assert_eq!(report.deleted.len(), 2);
    assert_eq!(report.failed.len(), 1);
    assert_eq!(report.failed[0].0, QuizId::new("b"));
    assert_eq!(catalog_ids(&h.app), vec!["b"]);
}

#[test]
fn test_failed_metadata_removal_leaves_no_phantom_record() {
    let h = seeded(Confirmation::Approved);
    h.kv.fail_key("quiz-a-meta");

    let err = h.app.catalog_use_case.delete_one(&QuizId::new("a")).unwrap_err();
    assert!(matches!(err, Error::StoreUnavailable(_)));

    // 削除が失敗した a はそのまま残り、`a-meta` という本文としては列挙されない
    let mut listed = catalog_ids(&h.app);
    listed.sort();
    assert_eq!(listed, vec!["a", "b", "c"]);
    let snap = h.kv.snapshot();
    assert_eq!(snap.len(), 6);
    assert!(snap.keys().all(|k| !k.ends_with("-meta-meta")));
}

#[test]
fn test_clear_with_failing_metadata_key_keeps_catalog_consistent() {
    let h = seeded(Confirmation::Approved);
    h.kv.fail_key("quiz-c-meta");

    let report = h.app.remove_use_case.clear().unwrap();
    assert_eq!(report.deleted.len(), 2);
    assert_eq!(report.failed[0].0, QuizId::new("c"));

    let records = h.app.catalog_use_case.build_catalog();
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].id, QuizId::new("c"));
    assert_eq!(records[0].title, "c");
}
