use axum::Router;
use shared_types::{
    AppError, AppErrorKind, ApplicationCategory, ApplicationResult, CategoryRulesResponse,
    ClassificationResponse, CourtApplication, CourtApplicationCase, CourtApplicationType,
    CourtOrder, CourtOrderOffence, JudicialResult, JudicialResultCategory, Offence,
    ProceedingsOutcome, RecordJudicialResultRequest, ResultTypeResponse,
};
use utoipa::OpenApi;
use utoipa_scalar::{Scalar, Servable};

use crate::health;
use crate::rest;

#[derive(OpenApi)]
#[openapi(
    paths(
        health::health_check,
        rest::proceedings::determine_proceedings_concluded,
        rest::proceedings::record_judicial_result,
        rest::reference::list_result_types,
        rest::reference::list_application_categories,
        rest::reference::classify_application_type,
    ),
    components(schemas(
        AppError, AppErrorKind,
        health::HealthResponse,
        // Court application snapshot
        CourtApplication, CourtApplicationType, CourtApplicationCase, CourtOrder,
        CourtOrderOffence, Offence, JudicialResult, JudicialResultCategory,
        // Proceedings engine
        ApplicationCategory, ApplicationResult, ProceedingsOutcome, RecordJudicialResultRequest,
        // Reference data
        ResultTypeResponse, CategoryRulesResponse, ClassificationResponse,
    )),
    tags(
        (name = "proceedings", description = "Application proceedings conclusion commands"),
        (name = "reference", description = "Conclusion rule reference data"),
        (name = "health", description = "Health check endpoint")
    ),
    info(
        title = "Court Progression API",
        description = "Court application proceedings and LAA outcome reporting",
        version = "1.0.0"
    )
)]
pub struct ApiDoc;

/// Build an Axum router serving the REST API at `/api/*`, the health probe,
/// and, when the `docs` flag is on, the API docs at `/docs`.
pub fn api_router() -> Router {
    let flags = crate::config::feature_flags();

    let router = Router::new()
        .merge(rest::api_router())
        .route("/health", axum::routing::get(health::health_check));

    if flags.docs {
        router.merge(Scalar::with_url("/docs", ApiDoc::openapi()))
    } else {
        router
    }
}
