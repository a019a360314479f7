//! Offence finality checks
//!
//! One predicate parameterised by the accepted result categories covers both
//! offence shapes: case offences must be FINAL, court-order offences may be
//! FINAL or ANCILLARY. An empty offence collection is never final.

use shared_types::{ApplicationCategory, CourtApplication, JudicialResultCategory, Offence};

/// Categories that make a case offence final.
pub const CASE_OFFENCE_FINAL: &[JudicialResultCategory] = &[JudicialResultCategory::Final];

/// Categories that make a court-order offence final.
pub const COURT_ORDER_OFFENCE_FINAL: &[JudicialResultCategory] = &[
    JudicialResultCategory::Final,
    JudicialResultCategory::Ancillary,
];

/// True when every offence has at least one result and all of its results
/// carry an accepted category. False for an empty collection.
pub fn all_offences_final<'a>(
    offences: impl IntoIterator<Item = &'a Offence>,
    accepted: &[JudicialResultCategory],
) -> bool {
    let mut seen_any = false;
    for offence in offences {
        seen_any = true;
        if !offence_is_final(offence, accepted) {
            return false;
        }
    }
    seen_any
}

fn offence_is_final(offence: &Offence, accepted: &[JudicialResultCategory]) -> bool {
    match offence.judicial_results.as_deref() {
        Some(results) if !results.is_empty() => results.iter().all(|r| r.has_category(accepted)),
        _ => false,
    }
}

pub fn case_offences_final(application: &CourtApplication) -> bool {
    all_offences_final(application.case_offences(), CASE_OFFENCE_FINAL)
}

pub fn court_order_offences_final(application: &CourtApplication) -> bool {
    all_offences_final(application.court_order_offences(), COURT_ORDER_OFFENCE_FINAL)
}

/// Case offences or court-order offences are all final.
pub fn any_offences_final(application: &CourtApplication) -> bool {
    case_offences_final(application) || court_order_offences_final(application)
}

/// The offence check a category's rules consult.
pub fn offences_final_for(category: ApplicationCategory, application: &CourtApplication) -> bool {
    if category.includes_court_order_offences() {
        any_offences_final(application)
    } else {
        case_offences_final(application)
    }
}
