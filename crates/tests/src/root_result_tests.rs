//! Root judicial result extraction tests

use server::proceedings::registry::result_type_ids::*;
use server::proceedings::root_results::root_result_type_ids;
use shared_types::JudicialResult;
use uuid::Uuid;

#[test]
fn missing_results_yield_nothing() {
    assert!(root_result_type_ids(None).is_empty());
    assert!(root_result_type_ids(Some(&[])).is_empty());
}

#[test]
fn nested_results_are_skipped() {
    let results = vec![
        JudicialResult::root(APPEAL_AGAINST_SENTENCE_DISMISSED),
        JudicialResult::child_of(SENTENCE_VARIED, APPEAL_AGAINST_SENTENCE_DISMISSED),
    ];
    assert_eq!(
        root_result_type_ids(Some(&results)),
        vec![APPEAL_AGAINST_SENTENCE_DISMISSED]
    );
}

#[test]
fn order_is_preserved() {
    let results = vec![
        JudicialResult::root(SENTENCE_VARIED),
        JudicialResult::root(APPEAL_AGAINST_SENTENCE_DISMISSED),
    ];
    assert_eq!(
        root_result_type_ids(Some(&results)),
        vec![SENTENCE_VARIED, APPEAL_AGAINST_SENTENCE_DISMISSED]
    );
}

#[test]
fn duplicates_are_kept() {
    let results = vec![JudicialResult::root(GRANTED), JudicialResult::root(GRANTED)];
    assert_eq!(root_result_type_ids(Some(&results)), vec![GRANTED, GRANTED]);
}

#[test]
fn result_missing_either_id_is_not_root() {
    let mut no_root = JudicialResult::root(GRANTED);
    no_root.root_judicial_result_type_id = None;

    let mut no_type = JudicialResult::root(GRANTED);
    no_type.judicial_result_type_id = None;

    assert!(root_result_type_ids(Some(&[no_root, no_type])).is_empty());
}

#[test]
fn unrecognised_ids_are_still_extracted() {
    let stray = Uuid::new_v4();
    assert_eq!(
        root_result_type_ids(Some(&[JudicialResult::root(stray)])),
        vec![stray]
    );
}
