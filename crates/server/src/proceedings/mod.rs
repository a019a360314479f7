//! Application proceedings conclusion engine
//!
//! Decides, from a fully hydrated application snapshot, whether the legal
//! proceedings on a court application have concluded, and computes the
//! outcome code reported to the Legal Aid Agency. Pure: no I/O, no state
//! retained between calls.
//!
//! 1. Classify the application type into a category
//! 2. Extract root judicial result type ids
//! 3. Apply the category's special case, else the generic per-id rules
//! 4. Fall back to offence-only finality when nothing was produced
//! 5. Reduce the per-result conclusions into one decision

pub mod aggregator;
pub mod classifier;
pub mod offence_finality;
pub mod recording;
pub mod registry;
pub mod root_results;
pub mod rules;

use shared_types::{ApplicationResult, CourtApplication, ProceedingsOutcome};

use self::aggregator::aggregate;
use self::classifier::classify_application;
use self::offence_finality::any_offences_final;
use self::root_results::root_result_type_ids;
use self::rules::{evaluate_category, RuleContext};

/// Evaluate an application without modifying it.
pub fn evaluate(application: &CourtApplication) -> ProceedingsOutcome {
    let category = classify_application(application);
    let root_ids = root_result_type_ids(application.judicial_results.as_deref());

    let mut results = if root_ids.is_empty() {
        Vec::new()
    } else {
        evaluate_category(&RuleContext::new(application, category, &root_ids))
    };
    if results.is_empty() {
        results.push(offence_only_fallback(application));
    }

    let outcome = aggregate(application, &results);
    tracing::debug!(
        application_id = %application.id,
        application_type_code = application.type_code().unwrap_or("none"),
        category = %category,
        root_results = root_ids.len(),
        concluded = outcome.proceedings_concluded,
        code = outcome.application_result_code_for_laa.as_deref().unwrap_or("null"),
        "Evaluated application proceedings"
    );
    outcome
}

/// No application-level result to evaluate: the decision rests on offence
/// progress alone and carries no code.
fn offence_only_fallback(application: &CourtApplication) -> ApplicationResult {
    ApplicationResult::without_code(any_offences_final(application))
}

/// Evaluate and write the decision onto the application.
pub fn conclude(application: &mut CourtApplication) -> ProceedingsOutcome {
    let outcome = evaluate(application);
    application.proceedings_concluded = outcome.proceedings_concluded;
    application.application_result_code_for_laa = outcome.application_result_code_for_laa.clone();
    outcome
}

/// Set `proceedings_concluded` and `application_result_code_for_laa` on the
/// application. A missing application is logged and passed through as `None`.
pub fn determine_application_proceedings_concluded(
    application: Option<CourtApplication>,
) -> Option<CourtApplication> {
    let Some(mut application) = application else {
        tracing::warn!("No court application supplied; skipping proceedings evaluation");
        return None;
    };
    conclude(&mut application);
    Some(application)
}
