use axum::{extract::Path, Json};

use shared_types::{CategoryRulesResponse, ClassificationResponse, ResultTypeResponse};

use crate::proceedings::classifier::classify;
use crate::proceedings::registry::{registry, CategoryRules, ResultType, CATEGORY_RULES, RESULT_TYPES};

impl From<&ResultType> for ResultTypeResponse {
    fn from(rt: &ResultType) -> Self {
        Self {
            id: rt.id.to_string(),
            code: rt.code.to_string(),
            label: rt.label.to_string(),
        }
    }
}

fn codes(ids: &[uuid::Uuid]) -> Vec<String> {
    ids.iter().map(|id| registry().code_for(*id).to_string()).collect()
}

impl From<&CategoryRules> for CategoryRulesResponse {
    fn from(rules: &CategoryRules) -> Self {
        Self {
            category: rules.category,
            application_type_codes: rules
                .application_type_codes
                .iter()
                .map(|c| c.to_string())
                .collect(),
            concludes_without_offence_check: codes(rules.without_offence_check),
            concludes_with_offence_check: codes(rules.with_offence_check),
            includes_court_order_offences: rules.category.includes_court_order_offences(),
        }
    }
}

/// GET /api/reference/result-types
#[utoipa::path(
    get,
    path = "/api/reference/result-types",
    responses(
        (status = 200, description = "Result types known to the conclusion rules", body = Vec<ResultTypeResponse>)
    ),
    tag = "reference"
)]
pub async fn list_result_types() -> Json<Vec<ResultTypeResponse>> {
    Json(RESULT_TYPES.iter().map(ResultTypeResponse::from).collect())
}

/// GET /api/reference/application-categories
#[utoipa::path(
    get,
    path = "/api/reference/application-categories",
    responses(
        (status = 200, description = "Conclusion rule sets per application category", body = Vec<CategoryRulesResponse>)
    ),
    tag = "reference"
)]
pub async fn list_application_categories() -> Json<Vec<CategoryRulesResponse>> {
    Json(CATEGORY_RULES.iter().map(CategoryRulesResponse::from).collect())
}

/// GET /api/reference/application-types/{code}
///
/// Unknown codes classify as `unclassified` rather than 404.
#[utoipa::path(
    get,
    path = "/api/reference/application-types/{code}",
    params(
        ("code" = String, Path, description = "Application type code")
    ),
    responses(
        (status = 200, description = "Category of the application type", body = ClassificationResponse)
    ),
    tag = "reference"
)]
pub async fn classify_application_type(Path(code): Path<String>) -> Json<ClassificationResponse> {
    let category = classify(Some(code.as_str()));
    Json(ClassificationResponse { code, category })
}
