//! Application type classifier

use shared_types::{ApplicationCategory, CourtApplication};

use super::registry::registry;

/// Map an application type code to its category.
/// A missing or unrecognised code is `Unclassified`, never an error.
pub fn classify(type_code: Option<&str>) -> ApplicationCategory {
    type_code
        .and_then(|code| registry().category_for_type_code(code))
        .unwrap_or(ApplicationCategory::Unclassified)
}

pub fn classify_application(application: &CourtApplication) -> ApplicationCategory {
    classify(application.type_code())
}
