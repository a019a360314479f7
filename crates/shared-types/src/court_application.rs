use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

// ── Judicial results ────────────────────────────────────────────────

/// Category of a judicial result as recorded at a hearing.
///
/// Serialized in upper case (`"FINAL"`, `"ANCILLARY"`, `"INTERMEDIARY"`) to
/// match the reference-data feed.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum JudicialResultCategory {
    /// Disposes of an offence.
    Final,
    /// Supplementary order made alongside a disposal.
    Ancillary,
    /// Interim outcome; proceedings continue.
    Intermediary,
}

/// A result recorded against an application or an offence.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct JudicialResult {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub judicial_result_id: Option<Uuid>,
    /// Which result this is (e.g. "Appeal withdrawn").
    #[serde(default)]
    pub judicial_result_type_id: Option<Uuid>,
    /// The top-level result this one belongs to. Equal to
    /// `judicial_result_type_id` when the result is itself a root.
    #[serde(default)]
    pub root_judicial_result_type_id: Option<Uuid>,
    #[serde(default)]
    pub category: Option<JudicialResultCategory>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ordered_date: Option<NaiveDate>,
}

impl JudicialResult {
    /// A root result of the given type, with no category.
    pub fn root(result_type_id: Uuid) -> Self {
        Self {
            judicial_result_id: None,
            judicial_result_type_id: Some(result_type_id),
            root_judicial_result_type_id: Some(result_type_id),
            category: None,
            label: None,
            ordered_date: None,
        }
    }

    /// A result refining `root_type_id`.
    pub fn child_of(result_type_id: Uuid, root_type_id: Uuid) -> Self {
        Self {
            root_judicial_result_type_id: Some(root_type_id),
            ..Self::root(result_type_id)
        }
    }

    /// A root result carrying an offence-level category.
    pub fn categorised(result_type_id: Uuid, category: JudicialResultCategory) -> Self {
        Self {
            category: Some(category),
            ..Self::root(result_type_id)
        }
    }

    /// True when this result is not nested under another result.
    pub fn is_root(&self) -> bool {
        match (self.judicial_result_type_id, self.root_judicial_result_type_id) {
            (Some(id), Some(root)) => id == root,
            _ => false,
        }
    }

    pub fn has_category(&self, accepted: &[JudicialResultCategory]) -> bool {
        self.category.is_some_and(|c| accepted.contains(&c))
    }
}

// ── Offences ────────────────────────────────────────────────────────

/// An offence on a prosecution case linked to an application.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct Offence {
    pub id: Uuid,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub offence_code: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub offence_title: Option<String>,
    #[serde(default)]
    pub judicial_results: Option<Vec<JudicialResult>>,
}

impl Offence {
    pub fn new(id: Uuid) -> Self {
        Self {
            id,
            offence_code: None,
            offence_title: None,
            judicial_results: None,
        }
    }

    pub fn with_results(id: Uuid, results: Vec<JudicialResult>) -> Self {
        Self {
            judicial_results: Some(results),
            ..Self::new(id)
        }
    }
}

/// A prosecution case an application is made against, with its offences.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct CourtApplicationCase {
    pub prosecution_case_id: Uuid,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub case_urn: Option<String>,
    #[serde(default)]
    pub offences: Option<Vec<Offence>>,
}

/// An offence that a court order was made for.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct CourtOrderOffence {
    pub offence: Offence,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub prosecution_case_id: Option<Uuid>,
}

/// The order an application (breach, confiscation) relates to.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct CourtOrder {
    pub id: Uuid,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub judicial_result_type_id: Option<Uuid>,
    #[serde(default)]
    pub court_order_offences: Option<Vec<CourtOrderOffence>>,
}

// ── Court application ───────────────────────────────────────────────

/// Reference to the application type, identified by its type code.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct CourtApplicationType {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<Uuid>,
    pub code: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
}

impl CourtApplicationType {
    pub fn from_code(code: impl Into<String>) -> Self {
        Self {
            id: None,
            code: code.into(),
            title: None,
        }
    }
}

/// Snapshot of a court application as held by the write model.
///
/// `proceedings_concluded` and `application_result_code_for_laa` are derived
/// fields, recomputed every time a judicial result is recorded.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct CourtApplication {
    pub id: Uuid,
    #[serde(rename = "type", default)]
    pub application_type: Option<CourtApplicationType>,
    #[serde(default)]
    pub judicial_results: Option<Vec<JudicialResult>>,
    #[serde(default)]
    pub court_application_cases: Option<Vec<CourtApplicationCase>>,
    #[serde(default)]
    pub court_order: Option<CourtOrder>,
    #[serde(default)]
    pub proceedings_concluded: bool,
    #[serde(default)]
    pub application_result_code_for_laa: Option<String>,
}

impl CourtApplication {
    pub fn new(id: Uuid, type_code: Option<&str>) -> Self {
        Self {
            id,
            application_type: type_code.map(CourtApplicationType::from_code),
            judicial_results: None,
            court_application_cases: None,
            court_order: None,
            proceedings_concluded: false,
            application_result_code_for_laa: None,
        }
    }

    pub fn type_code(&self) -> Option<&str> {
        self.application_type.as_ref().map(|t| t.code.as_str())
    }

    /// Iterate every offence across all linked prosecution cases.
    pub fn case_offences(&self) -> impl Iterator<Item = &Offence> {
        self.court_application_cases
            .iter()
            .flatten()
            .flat_map(|c| c.offences.iter().flatten())
    }

    /// Iterate the offences the court order was made for.
    pub fn court_order_offences(&self) -> impl Iterator<Item = &Offence> {
        self.court_order
            .iter()
            .flat_map(|o| o.court_order_offences.iter().flatten())
            .map(|o| &o.offence)
    }

    /// Find an offence by id, looking at case offences first, then court-order offences.
    pub fn offence_mut(&mut self, offence_id: Uuid) -> Option<&mut Offence> {
        let case_offence = self
            .court_application_cases
            .iter_mut()
            .flatten()
            .flat_map(|c| c.offences.iter_mut().flatten())
            .find(|o| o.id == offence_id);
        if case_offence.is_some() {
            return case_offence;
        }
        self.court_order
            .iter_mut()
            .flat_map(|o| o.court_order_offences.iter_mut().flatten())
            .map(|o| &mut o.offence)
            .find(|o| o.id == offence_id)
    }
}
