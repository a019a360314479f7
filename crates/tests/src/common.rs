use axum::{
    body::Body,
    http::{Request, StatusCode},
    Router,
};
use serde_json::Value;
use server::proceedings::registry::application_type_codes;
use shared_types::{
    CourtApplication, CourtApplicationCase, CourtOrder, CourtOrderOffence, JudicialResult,
    JudicialResultCategory, Offence,
};
use tower::ServiceExt;
use uuid::Uuid;

/// Build the full HTTP router. No config is loaded, so `/docs` stays off.
pub fn test_app() -> Router {
    server::openapi::api_router()
}

/// POST a JSON body to a route.
pub async fn post_json(app: &Router, uri: &str, body: &str) -> (StatusCode, Value) {
    let req = Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();

    send(app, req).await
}

/// GET a route.
pub async fn get(app: &Router, uri: &str) -> (StatusCode, Value) {
    let req = Request::builder()
        .method("GET")
        .uri(uri)
        .body(Body::empty())
        .unwrap();

    send(app, req).await
}

async fn send(app: &Router, req: Request<Body>) -> (StatusCode, Value) {
    let response = app
        .clone()
        .oneshot(req)
        .await
        .expect("Failed to send request");

    let status = response.status();
    let body_bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("Failed to read body");

    let body: Value = if body_bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&body_bytes).unwrap_or(Value::String(
            String::from_utf8_lossy(&body_bytes).to_string(),
        ))
    };

    (status, body)
}

// ── Snapshot builders ───────────────────────────────────────────────

pub fn final_offence() -> Offence {
    Offence::with_results(
        Uuid::new_v4(),
        vec![JudicialResult::categorised(Uuid::new_v4(), JudicialResultCategory::Final)],
    )
}

pub fn ancillary_offence() -> Offence {
    Offence::with_results(
        Uuid::new_v4(),
        vec![JudicialResult::categorised(Uuid::new_v4(), JudicialResultCategory::Ancillary)],
    )
}

pub fn pending_offence() -> Offence {
    Offence::new(Uuid::new_v4())
}

/// An application of `type_code` with the given root results attached.
pub fn application(type_code: Option<&str>, root_ids: &[Uuid]) -> CourtApplication {
    let mut app = CourtApplication::new(Uuid::new_v4(), type_code);
    if !root_ids.is_empty() {
        app.judicial_results = Some(root_ids.iter().copied().map(JudicialResult::root).collect());
    }
    app
}

pub fn with_case_offences(mut app: CourtApplication, offences: Vec<Offence>) -> CourtApplication {
    app.court_application_cases = Some(vec![CourtApplicationCase {
        prosecution_case_id: Uuid::new_v4(),
        case_urn: Some("TFL4359536".to_string()),
        offences: Some(offences),
    }]);
    app
}

pub fn with_court_order_offences(mut app: CourtApplication, offences: Vec<Offence>) -> CourtApplication {
    app.court_order = Some(CourtOrder {
        id: Uuid::new_v4(),
        judicial_result_type_id: None,
        court_order_offences: Some(
            offences
                .into_iter()
                .map(|offence| CourtOrderOffence {
                    offence,
                    prosecution_case_id: None,
                })
                .collect(),
        ),
    });
    app
}

pub fn appeal_against_sentence(root_ids: &[Uuid]) -> CourtApplication {
    application(Some(application_type_codes::APPEAL_AGAINST_SENTENCE), root_ids)
}

pub fn breach(root_ids: &[Uuid]) -> CourtApplication {
    application(Some(application_type_codes::BREACH[0]), root_ids)
}
