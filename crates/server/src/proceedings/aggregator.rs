//! Result code aggregation

use shared_types::{
    ApplicationResult, CourtApplication, ProceedingsOutcome, RESULT_CODE_SEPARATOR,
    UNKNOWN_RESULT,
};

/// Reduce per-result conclusions into the decision attached to the application.
///
/// Concluded only if every entry concluded. Codes other than `UNKNOWN_RESULT`
/// are joined with `" & "`. An application with no judicial results reports
/// no code at all; one whose results were all unrecognised reports
/// `UNKNOWN_RESULT`.
pub fn aggregate(application: &CourtApplication, results: &[ApplicationResult]) -> ProceedingsOutcome {
    let proceedings_concluded = results.iter().all(|r| r.concluded);

    let joined = results
        .iter()
        .filter(|r| !r.is_unknown())
        .filter_map(|r| r.result_code.as_deref())
        .collect::<Vec<_>>()
        .join(RESULT_CODE_SEPARATOR);

    let application_result_code_for_laa = if !has_judicial_results(application) {
        None
    } else if joined.is_empty() {
        Some(UNKNOWN_RESULT.to_string())
    } else {
        Some(joined)
    };

    ProceedingsOutcome {
        proceedings_concluded,
        application_result_code_for_laa,
    }
}

fn has_judicial_results(application: &CourtApplication) -> bool {
    application
        .judicial_results
        .as_ref()
        .is_some_and(|r| !r.is_empty())
}
