//! Types for the application proceedings conclusion engine and the
//! command/query surface around it.

use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

use crate::court_application::{CourtApplication, JudicialResult};

/// Outcome code reported when no recognised result could be matched.
pub const UNKNOWN_RESULT: &str = "UNKNOWN_RESULT";

/// Separator used when joining several outcome codes.
pub const RESULT_CODE_SEPARATOR: &str = " & ";

// ── Application category ────────────────────────────────────────────

/// Closed set of application categories the conclusion rules are keyed by.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[serde(rename_all = "snake_case")]
pub enum ApplicationCategory {
    AppealAgainstConviction,
    AppealAgainstSentence,
    AppealAgainstConvictionAndSentence,
    StatutoryDeclaration,
    ReopenCase,
    Breach,
    ConfiscationOrder,
    Unclassified,
}

impl ApplicationCategory {
    /// Every category, `Unclassified` last.
    pub const ALL: [ApplicationCategory; 8] = [
        Self::AppealAgainstConviction,
        Self::AppealAgainstSentence,
        Self::AppealAgainstConvictionAndSentence,
        Self::StatutoryDeclaration,
        Self::ReopenCase,
        Self::Breach,
        Self::ConfiscationOrder,
        Self::Unclassified,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::AppealAgainstConviction => "appeal_against_conviction",
            Self::AppealAgainstSentence => "appeal_against_sentence",
            Self::AppealAgainstConvictionAndSentence => "appeal_against_conviction_and_sentence",
            Self::StatutoryDeclaration => "statutory_declaration",
            Self::ReopenCase => "reopen_case",
            Self::Breach => "breach",
            Self::ConfiscationOrder => "confiscation_order",
            Self::Unclassified => "unclassified",
        }
    }

    /// Breach and confiscation applications relate to a court order, so their
    /// offence check also accepts court-order offences.
    pub fn includes_court_order_offences(&self) -> bool {
        matches!(self, Self::Breach | Self::ConfiscationOrder)
    }
}

impl fmt::Display for ApplicationCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ── Engine output ───────────────────────────────────────────────────

/// One conclusion reached for a matched root result (or for the
/// offence-only fallback). Never persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct ApplicationResult {
    pub concluded: bool,
    pub result_code: Option<String>,
}

impl ApplicationResult {
    pub fn new(concluded: bool, result_code: impl Into<String>) -> Self {
        Self {
            concluded,
            result_code: Some(result_code.into()),
        }
    }

    /// Never-concluded entry carrying `UNKNOWN_RESULT`.
    pub fn unknown() -> Self {
        Self::new(false, UNKNOWN_RESULT)
    }

    /// Entry with no application-level code to report.
    pub fn without_code(concluded: bool) -> Self {
        Self {
            concluded,
            result_code: None,
        }
    }

    pub fn is_unknown(&self) -> bool {
        self.result_code.as_deref() == Some(UNKNOWN_RESULT)
    }
}

/// Reduced decision attached back onto the application.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct ProceedingsOutcome {
    pub proceedings_concluded: bool,
    pub application_result_code_for_laa: Option<String>,
}

// ── Command DTOs ────────────────────────────────────────────────────

/// Request body for recording a judicial result and re-evaluating the application.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct RecordJudicialResultRequest {
    pub application: CourtApplication,
    pub judicial_result: JudicialResult,
    /// When set, the result is recorded against this offence instead of
    /// against the application itself.
    #[serde(default)]
    pub offence_id: Option<Uuid>,
}

// ── Reference data DTOs ─────────────────────────────────────────────

/// A result type known to the registry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct ResultTypeResponse {
    pub id: String,
    pub code: String,
    pub label: String,
}

/// The conclusion rule sets of one application category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct CategoryRulesResponse {
    pub category: ApplicationCategory,
    pub application_type_codes: Vec<String>,
    /// Codes of results that conclude the application outright.
    pub concludes_without_offence_check: Vec<String>,
    /// Codes of results that conclude the application once offences are final.
    pub concludes_with_offence_check: Vec<String>,
    pub includes_court_order_offences: bool,
}

/// Classification of a single application type code.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct ClassificationResponse {
    pub code: String,
    pub category: ApplicationCategory,
}
