//! Offence finality tests

use crate::common::{
    ancillary_offence, application, final_offence, pending_offence, with_case_offences,
    with_court_order_offences,
};
use server::proceedings::offence_finality::{
    all_offences_final, any_offences_final, case_offences_final, court_order_offences_final,
    offences_final_for, CASE_OFFENCE_FINAL, COURT_ORDER_OFFENCE_FINAL,
};
use shared_types::{ApplicationCategory, JudicialResult, JudicialResultCategory, Offence};
use uuid::Uuid;

#[test]
fn no_offences_is_not_final() {
    let app = application(Some("MC80802"), &[]);
    assert!(!case_offences_final(&app));
    assert!(!court_order_offences_final(&app));
    assert!(!any_offences_final(&app));
}

#[test]
fn empty_offence_list_is_not_final() {
    let app = with_case_offences(application(Some("MC80802"), &[]), vec![]);
    assert!(!case_offences_final(&app));
}

#[test]
fn all_final_case_offences() {
    let app = with_case_offences(
        application(Some("MC80802"), &[]),
        vec![final_offence(), final_offence()],
    );
    assert!(case_offences_final(&app));
}

#[test]
fn one_pending_offence_blocks_finality() {
    let app = with_case_offences(
        application(Some("MC80802"), &[]),
        vec![final_offence(), pending_offence()],
    );
    assert!(!case_offences_final(&app));
}

#[test]
fn ancillary_only_counts_for_court_order_offences() {
    let offences = vec![final_offence(), ancillary_offence()];
    assert!(!all_offences_final(&offences, CASE_OFFENCE_FINAL));
    assert!(all_offences_final(&offences, COURT_ORDER_OFFENCE_FINAL));
}

#[test]
fn every_result_must_be_accepted() {
    let offence = Offence::with_results(
        Uuid::new_v4(),
        vec![
            JudicialResult::categorised(Uuid::new_v4(), JudicialResultCategory::Intermediary),
            JudicialResult::categorised(Uuid::new_v4(), JudicialResultCategory::Final),
        ],
    );
    assert!(!all_offences_final(&[offence], CASE_OFFENCE_FINAL));
}

#[test]
fn uncategorised_results_do_not_count() {
    let offence = Offence::with_results(Uuid::new_v4(), vec![JudicialResult::root(Uuid::new_v4())]);
    assert!(!all_offences_final(&[offence], COURT_ORDER_OFFENCE_FINAL));
}

#[test]
fn court_order_offences_rescue_breach_only() {
    let app = with_court_order_offences(application(Some("CJ03506"), &[]), vec![ancillary_offence()]);

    assert!(offences_final_for(ApplicationCategory::Breach, &app));
    assert!(offences_final_for(ApplicationCategory::ConfiscationOrder, &app));
    assert!(!offences_final_for(ApplicationCategory::AppealAgainstSentence, &app));
    assert!(!offences_final_for(ApplicationCategory::Unclassified, &app));
}

#[test]
fn case_offences_alone_satisfy_breach() {
    let app = with_case_offences(application(Some("CJ03506"), &[]), vec![final_offence()]);
    assert!(offences_final_for(ApplicationCategory::Breach, &app));
}

#[test]
fn either_shape_satisfies_any_offences_final() {
    let cases = with_case_offences(application(None, &[]), vec![final_offence()]);
    let orders = with_court_order_offences(application(None, &[]), vec![ancillary_offence()]);
    assert!(any_offences_final(&cases));
    assert!(any_offences_final(&orders));
}
