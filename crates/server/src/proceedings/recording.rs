//! Recording judicial results
//!
//! The write-side unit of work: append a result to the snapshot, then
//! re-evaluate the application before handing it back.

use shared_types::{AppError, CourtApplication, JudicialResult};
use uuid::Uuid;

use super::conclude;

/// Append `result` to the application, or to one of its offences when
/// `offence_id` is given, and recompute the proceedings decision.
pub fn record_judicial_result(
    mut application: CourtApplication,
    result: JudicialResult,
    offence_id: Option<Uuid>,
) -> Result<CourtApplication, AppError> {
    if result.judicial_result_type_id.is_none() {
        return Err(AppError::invalid_field(
            "judicial_result.judicial_result_type_id",
            "is required",
        ));
    }

    let application_id = application.id;
    match offence_id {
        Some(offence_id) => {
            let offence = application.offence_mut(offence_id).ok_or_else(|| {
                AppError::not_found(format!(
                    "Offence {offence_id} not found on court application {application_id}"
                ))
            })?;
            offence.judicial_results.get_or_insert_with(Vec::new).push(result);
        }
        None => {
            application
                .judicial_results
                .get_or_insert_with(Vec::new)
                .push(result);
        }
    }

    let outcome = conclude(&mut application);
    tracing::info!(
        application_id = %application_id,
        offence_id = ?offence_id,
        concluded = outcome.proceedings_concluded,
        "Recorded judicial result"
    );
    Ok(application)
}
