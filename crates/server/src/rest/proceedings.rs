use axum::Json;

use shared_types::{AppError, CourtApplication, RecordJudicialResultRequest};

use crate::proceedings::{determine_application_proceedings_concluded, recording};

/// POST /api/court-applications/proceedings-concluded
///
/// Evaluates the supplied snapshot. A `null` body is echoed back as `null`.
#[utoipa::path(
    post,
    path = "/api/court-applications/proceedings-concluded",
    request_body = CourtApplication,
    responses(
        (status = 200, description = "Application with the proceedings decision applied", body = CourtApplication),
        (status = 400, description = "Malformed application", body = AppError)
    ),
    tag = "proceedings"
)]
#[tracing::instrument(skip_all)]
pub async fn determine_proceedings_concluded(
    Json(application): Json<Option<CourtApplication>>,
) -> Json<Option<CourtApplication>> {
    Json(determine_application_proceedings_concluded(application))
}

/// POST /api/court-applications/judicial-results
#[utoipa::path(
    post,
    path = "/api/court-applications/judicial-results",
    request_body = RecordJudicialResultRequest,
    responses(
        (status = 200, description = "Result recorded and application re-evaluated", body = CourtApplication),
        (status = 404, description = "Offence not found on the application", body = AppError),
        (status = 422, description = "Judicial result is missing its type", body = AppError)
    ),
    tag = "proceedings"
)]
#[tracing::instrument(skip_all)]
pub async fn record_judicial_result(
    Json(body): Json<RecordJudicialResultRequest>,
) -> Result<Json<CourtApplication>, AppError> {
    let application =
        recording::record_judicial_result(body.application, body.judicial_result, body.offence_id)?;
    Ok(Json(application))
}
