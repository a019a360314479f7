//! End-to-end proceedings conclusion scenarios

use crate::common::{
    ancillary_offence, appeal_against_sentence, application, breach, final_offence,
    pending_offence, with_case_offences, with_court_order_offences,
};
use pretty_assertions::assert_eq;
use server::proceedings::registry::result_type_ids::*;
use server::proceedings::{conclude, determine_application_proceedings_concluded, evaluate};
use shared_types::{ProceedingsOutcome, UNKNOWN_RESULT};
use uuid::Uuid;

fn outcome(concluded: bool, code: Option<&str>) -> ProceedingsOutcome {
    ProceedingsOutcome {
        proceedings_concluded: concluded,
        application_result_code_for_laa: code.map(str::to_string),
    }
}

#[test]
fn sentence_dismissed_alone_concludes() {
    let app = appeal_against_sentence(&[APPEAL_AGAINST_SENTENCE_DISMISSED]);
    assert_eq!(evaluate(&app), outcome(true, Some("AASD")));
}

#[test]
fn sentence_dismissed_and_varied_with_final_offences() {
    let app = with_case_offences(
        appeal_against_sentence(&[APPEAL_AGAINST_SENTENCE_DISMISSED, SENTENCE_VARIED]),
        vec![final_offence(), final_offence()],
    );
    assert_eq!(evaluate(&app), outcome(true, Some("AASD & SV")));
}

#[test]
fn sentence_dismissed_and_varied_with_pending_offence() {
    let app = with_case_offences(
        appeal_against_sentence(&[APPEAL_AGAINST_SENTENCE_DISMISSED, SENTENCE_VARIED]),
        vec![final_offence(), pending_offence()],
    );
    assert_eq!(evaluate(&app), outcome(false, Some("AASD & SV")));
}

#[test]
fn breach_revoked_without_adjudication_on_court_order_offences() {
    let app = with_court_order_offences(
        breach(&[ORDER_REVOKED, NO_ADJUDICATION_DEALT_WITH_ORIGINAL_OFFENCE]),
        vec![final_offence(), ancillary_offence()],
    );
    assert_eq!(evaluate(&app), outcome(true, Some("OREV & BRO")));
}

#[test]
fn no_application_results_falls_back_to_offences() {
    let app = with_case_offences(
        appeal_against_sentence(&[]),
        vec![final_offence(), final_offence()],
    );
    assert!(app.judicial_results.is_none());
    assert_eq!(evaluate(&app), outcome(true, None));
}

#[test]
fn no_application_results_and_pending_offences() {
    let app = with_case_offences(appeal_against_sentence(&[]), vec![pending_offence()]);
    assert_eq!(evaluate(&app), outcome(false, None));
}

#[test]
fn empty_result_list_behaves_like_missing() {
    let mut app = with_case_offences(appeal_against_sentence(&[]), vec![final_offence()]);
    app.judicial_results = Some(vec![]);
    assert_eq!(evaluate(&app), outcome(true, None));
}

#[test]
fn unmapped_type_with_unrecognised_result() {
    let app = application(Some("ZZ99999"), &[Uuid::new_v4()]);
    assert_eq!(evaluate(&app), outcome(false, Some(UNKNOWN_RESULT)));
}

#[test]
fn unmapped_type_with_recognised_result_still_reports_unknown() {
    let app = with_case_offences(application(None, &[GRANTED]), vec![final_offence()]);
    assert_eq!(evaluate(&app), outcome(true, Some(UNKNOWN_RESULT)));
}

#[test]
fn only_nested_results_fall_back_to_offences() {
    let mut app = with_case_offences(appeal_against_sentence(&[]), vec![final_offence()]);
    app.judicial_results = Some(vec![shared_types::JudicialResult::child_of(
        SENTENCE_VARIED,
        APPEAL_AGAINST_SENTENCE_DISMISSED,
    )]);
    // Results exist but none is a root: code is UNKNOWN_RESULT, decision from offences
    assert_eq!(evaluate(&app), outcome(true, Some(UNKNOWN_RESULT)));
}

#[test]
fn evaluation_is_idempotent() {
    let mut app = with_case_offences(
        appeal_against_sentence(&[APPEAL_AGAINST_SENTENCE_DISMISSED, SENTENCE_VARIED]),
        vec![final_offence()],
    );
    let first = conclude(&mut app);
    let snapshot = app.clone();
    let second = conclude(&mut app);

    assert_eq!(first, second);
    assert_eq!(app, snapshot);
}

#[test]
fn stale_decision_is_overwritten() {
    let mut app = with_case_offences(
        appeal_against_sentence(&[APPEAL_AGAINST_SENTENCE_DISMISSED, SENTENCE_VARIED]),
        vec![pending_offence()],
    );
    app.proceedings_concluded = true;
    app.application_result_code_for_laa = Some("STALE".to_string());

    conclude(&mut app);

    assert!(!app.proceedings_concluded);
    assert_eq!(app.application_result_code_for_laa.as_deref(), Some("AASD & SV"));
}

#[test]
fn stale_code_is_cleared_when_no_results() {
    let mut app = with_case_offences(appeal_against_sentence(&[]), vec![final_offence()]);
    app.application_result_code_for_laa = Some("STALE".to_string());

    conclude(&mut app);

    assert!(app.proceedings_concluded);
    assert_eq!(app.application_result_code_for_laa, None);
}

#[test]
fn missing_application_passes_through() {
    assert_eq!(determine_application_proceedings_concluded(None), None);
}

#[test]
fn supplied_application_is_returned_with_decision() {
    let app = appeal_against_sentence(&[APPEAL_AGAINST_SENTENCE_DISMISSED]);
    let id = app.id;

    let result = determine_application_proceedings_concluded(Some(app)).expect("application");

    assert_eq!(result.id, id);
    assert!(result.proceedings_concluded);
    assert_eq!(result.application_result_code_for_laa.as_deref(), Some("AASD"));
}

#[test]
fn evaluate_leaves_input_untouched() {
    let app = appeal_against_sentence(&[APPEAL_AGAINST_SENTENCE_DISMISSED]);
    let before = app.clone();
    let _ = evaluate(&app);
    assert_eq!(app, before);
}
