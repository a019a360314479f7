pub mod proceedings;
pub mod reference;

use axum::{routing::{get, post}, Router};

/// Build the REST API router for the court application services.
pub fn api_router() -> Router {
    Router::new()
        // Proceedings commands
        .route(
            "/api/court-applications/proceedings-concluded",
            post(proceedings::determine_proceedings_concluded),
        )
        .route(
            "/api/court-applications/judicial-results",
            post(proceedings::record_judicial_result),
        )
        // Reference data queries
        .route("/api/reference/result-types", get(reference::list_result_types))
        .route(
            "/api/reference/application-categories",
            get(reference::list_application_categories),
        )
        .route(
            "/api/reference/application-types/{code}",
            get(reference::classify_application_type),
        )
}
