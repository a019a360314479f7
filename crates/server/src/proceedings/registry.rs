//! Category rule registry
//!
//! Static reference data keyed by the legal result-type identifiers and
//! application type codes agreed with the reference-data service. Built once
//! on first use and never mutated afterwards.

use std::collections::{HashMap, HashSet};
use std::sync::LazyLock;

use shared_types::{ApplicationCategory, UNKNOWN_RESULT};
use uuid::Uuid;

/// Result-type identifiers the conclusion rules refer to.
pub mod result_type_ids {
    use uuid::{uuid, Uuid};

    pub const APPEAL_AGAINST_CONVICTION_ALLOWED: Uuid = uuid!("cac41ed5-2a56-4a3e-be4b-912125ef2dc7");
    pub const APPEAL_AGAINST_CONVICTION_DISMISSED: Uuid = uuid!("45e38502-f832-471a-b603-394cc384a2e2");
    pub const APPEAL_AGAINST_CONVICTION_AND_SENTENCE_DISMISSED: Uuid = uuid!("2874296d-e07f-4610-b84e-b7c3e7982b50");
    pub const APPEAL_AGAINST_SENTENCE_ALLOWED: Uuid = uuid!("42f421d9-5897-4550-a9ac-72aab408d919");
    pub const APPEAL_AGAINST_SENTENCE_DISMISSED: Uuid = uuid!("d5c4fabf-fa2d-4bce-9dfc-c44578248b1f");
    pub const SENTENCE_VARIED: Uuid = uuid!("82df431f-eee8-4aa4-99ce-0c3ad474c5fe");
    pub const APPEAL_ABANDONED: Uuid = uuid!("6cc1098b-cac6-4d5a-8e4c-d793108acd36");
    pub const APPEAL_WITHDRAWN: Uuid = uuid!("9c57bd7b-c4a5-4baa-ab82-5589e424882c");
    pub const GRANTED: Uuid = uuid!("1dca580b-9684-4f48-bec7-d9afee44561e");
    pub const REFUSED: Uuid = uuid!("966baab7-8832-4582-827d-4def3303621b");
    pub const WITHDRAWN: Uuid = uuid!("83d6d912-2086-4eca-8835-096acf0f1d90");
    pub const STATUTORY_DECLARATION_FILED: Uuid = uuid!("9379ed53-671d-4588-87c1-31f570232b69");
    pub const CASE_REOPENED: Uuid = uuid!("b45a29d5-b852-4795-b318-dc63c2d80260");
    pub const CONFISCATION_AMOUNT_DECIDED: Uuid = uuid!("d8514ba1-1e0a-48f5-9d17-dcf0c500a188");
    pub const ORDER_REVOKED: Uuid = uuid!("e89b78f9-0db0-4a4c-879b-3db0b8f76313");
    pub const NO_ADJUDICATION_DEALT_WITH_ORIGINAL_OFFENCE: Uuid = uuid!("375f0a90-27da-4d9f-86b7-5650d4e9383e");
    pub const ORDER_VARIED: Uuid = uuid!("0257b862-0d12-4113-ba9a-0a4764c7c1c1");
    pub const ORDER_TO_CONTINUE: Uuid = uuid!("6adf4d91-f4dc-46e8-9af8-c96293dce1c8");
    pub const BREACH_NO_ACTION: Uuid = uuid!("8ac4012d-636e-4b88-aeed-4c26f3f10093");
}

/// Application type codes per category.
pub mod application_type_codes {
    pub const APPEAL_AGAINST_CONVICTION: &str = "MC80801";
    pub const APPEAL_AGAINST_SENTENCE: &str = "MC80802";
    pub const APPEAL_AGAINST_CONVICTION_AND_SENTENCE: &str = "MC80803";
    pub const STATUTORY_DECLARATION: &str = "MC80527";
    pub const REOPEN_CASE: &str = "MC80524";
    pub const CONFISCATION_ORDER: &str = "PC80101";

    /// Breach and fail-to-comply application types.
    pub const BREACH: &[&str] = &[
        "CJ03506", "CJ03507", "CJ03508", "CJ03509", "CJ03510", "CJ03511", "CJ03512",
        "CJ03513", "CJ03522", "CJ03523", "CJ03524", "CJ03525", "MC80600",
    ];
}

use result_type_ids::*;

/// A result type with its LAA short code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResultType {
    pub id: Uuid,
    pub code: &'static str,
    pub label: &'static str,
}

pub static RESULT_TYPES: &[ResultType] = &[
    ResultType { id: APPEAL_AGAINST_CONVICTION_ALLOWED, code: "AACA", label: "Appeal against conviction allowed" },
    ResultType { id: APPEAL_AGAINST_CONVICTION_DISMISSED, code: "AACD", label: "Appeal against conviction dismissed" },
    ResultType { id: APPEAL_AGAINST_CONVICTION_AND_SENTENCE_DISMISSED, code: "ACSD", label: "Appeal against conviction and sentence dismissed" },
    ResultType { id: APPEAL_AGAINST_SENTENCE_ALLOWED, code: "AASA", label: "Appeal against sentence allowed" },
    ResultType { id: APPEAL_AGAINST_SENTENCE_DISMISSED, code: "AASD", label: "Appeal against sentence dismissed" },
    ResultType { id: SENTENCE_VARIED, code: "SV", label: "Sentence varied" },
    ResultType { id: APPEAL_ABANDONED, code: "APA", label: "Appeal abandoned" },
    ResultType { id: APPEAL_WITHDRAWN, code: "AW", label: "Appeal withdrawn" },
    ResultType { id: GRANTED, code: "G", label: "Granted" },
    ResultType { id: REFUSED, code: "RFSD", label: "Refused" },
    ResultType { id: WITHDRAWN, code: "WDRN", label: "Withdrawn" },
    ResultType { id: STATUTORY_DECLARATION_FILED, code: "STDEC", label: "Statutory declaration filed" },
    ResultType { id: CASE_REOPENED, code: "ROPEN", label: "Case reopened" },
    ResultType { id: CONFISCATION_AMOUNT_DECIDED, code: "CONFAA", label: "Confiscation amount decided" },
    ResultType { id: ORDER_REVOKED, code: "OREV", label: "Order revoked" },
    ResultType { id: NO_ADJUDICATION_DEALT_WITH_ORIGINAL_OFFENCE, code: "BRO", label: "No adjudication, dealt with for original offence" },
    ResultType { id: ORDER_VARIED, code: "OVAR", label: "Order varied" },
    ResultType { id: ORDER_TO_CONTINUE, code: "OCONT", label: "Order to continue" },
    ResultType { id: BREACH_NO_ACTION, code: "BRNA", label: "Breach, no action taken" },
];

/// Static rule table for one category.
#[derive(Debug, Clone, Copy)]
pub struct CategoryRules {
    pub category: ApplicationCategory,
    pub application_type_codes: &'static [&'static str],
    pub without_offence_check: &'static [Uuid],
    pub with_offence_check: &'static [Uuid],
}

pub static CATEGORY_RULES: &[CategoryRules] = &[
    CategoryRules {
        category: ApplicationCategory::AppealAgainstConviction,
        application_type_codes: &[application_type_codes::APPEAL_AGAINST_CONVICTION],
        without_offence_check: &[APPEAL_AGAINST_CONVICTION_DISMISSED, APPEAL_ABANDONED, APPEAL_WITHDRAWN],
        with_offence_check: &[APPEAL_AGAINST_CONVICTION_ALLOWED],
    },
    CategoryRules {
        category: ApplicationCategory::AppealAgainstSentence,
        application_type_codes: &[application_type_codes::APPEAL_AGAINST_SENTENCE],
        without_offence_check: &[APPEAL_AGAINST_SENTENCE_DISMISSED, APPEAL_ABANDONED, APPEAL_WITHDRAWN],
        with_offence_check: &[APPEAL_AGAINST_SENTENCE_ALLOWED, SENTENCE_VARIED],
    },
    CategoryRules {
        category: ApplicationCategory::AppealAgainstConvictionAndSentence,
        application_type_codes: &[application_type_codes::APPEAL_AGAINST_CONVICTION_AND_SENTENCE],
        without_offence_check: &[
            APPEAL_AGAINST_CONVICTION_AND_SENTENCE_DISMISSED,
            APPEAL_ABANDONED,
            APPEAL_WITHDRAWN,
        ],
        with_offence_check: &[
            APPEAL_AGAINST_CONVICTION_ALLOWED,
            APPEAL_AGAINST_CONVICTION_DISMISSED,
            APPEAL_AGAINST_SENTENCE_ALLOWED,
            APPEAL_AGAINST_SENTENCE_DISMISSED,
            SENTENCE_VARIED,
        ],
    },
    CategoryRules {
        category: ApplicationCategory::StatutoryDeclaration,
        application_type_codes: &[application_type_codes::STATUTORY_DECLARATION],
        without_offence_check: &[REFUSED, WITHDRAWN],
        with_offence_check: &[GRANTED, STATUTORY_DECLARATION_FILED],
    },
    CategoryRules {
        category: ApplicationCategory::ReopenCase,
        application_type_codes: &[application_type_codes::REOPEN_CASE],
        without_offence_check: &[REFUSED, WITHDRAWN],
        with_offence_check: &[GRANTED, CASE_REOPENED],
    },
    CategoryRules {
        category: ApplicationCategory::Breach,
        application_type_codes: application_type_codes::BREACH,
        without_offence_check: &[ORDER_TO_CONTINUE, BREACH_NO_ACTION, WITHDRAWN],
        with_offence_check: &[ORDER_REVOKED, NO_ADJUDICATION_DEALT_WITH_ORIGINAL_OFFENCE, ORDER_VARIED],
    },
    CategoryRules {
        category: ApplicationCategory::ConfiscationOrder,
        application_type_codes: &[application_type_codes::CONFISCATION_ORDER],
        without_offence_check: &[CONFISCATION_AMOUNT_DECIDED, REFUSED, WITHDRAWN],
        with_offence_check: &[GRANTED],
    },
];

/// How a recognised result concludes an application of a given category.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Conclusion {
    /// The result alone concludes the proceedings.
    Outright,
    /// The proceedings conclude once every relevant offence is final.
    AfterOffenceCheck,
}

/// Indexed form of a [`CategoryRules`] entry.
#[derive(Debug, Default)]
pub struct RuleSet {
    without_offence_check: HashSet<Uuid>,
    with_offence_check: HashSet<Uuid>,
}

impl RuleSet {
    pub fn conclusion_for(&self, result_type_id: Uuid) -> Option<Conclusion> {
        if self.without_offence_check.contains(&result_type_id) {
            Some(Conclusion::Outright)
        } else if self.with_offence_check.contains(&result_type_id) {
            Some(Conclusion::AfterOffenceCheck)
        } else {
            None
        }
    }
}

/// Lookup tables built from the constant tables above.
#[derive(Debug)]
pub struct Registry {
    result_types: HashMap<Uuid, &'static ResultType>,
    categories_by_type_code: HashMap<&'static str, ApplicationCategory>,
    rules: HashMap<ApplicationCategory, RuleSet>,
}

static REGISTRY: LazyLock<Registry> = LazyLock::new(Registry::build);

/// The process-wide registry.
pub fn registry() -> &'static Registry {
    &REGISTRY
}

impl Registry {
    fn build() -> Self {
        let result_types = RESULT_TYPES.iter().map(|rt| (rt.id, rt)).collect();

        let mut categories_by_type_code = HashMap::new();
        let mut rules = HashMap::new();
        for entry in CATEGORY_RULES {
            for code in entry.application_type_codes {
                categories_by_type_code.insert(*code, entry.category);
            }
            rules.insert(
                entry.category,
                RuleSet {
                    without_offence_check: entry.without_offence_check.iter().copied().collect(),
                    with_offence_check: entry.with_offence_check.iter().copied().collect(),
                },
            );
        }

        Self {
            result_types,
            categories_by_type_code,
            rules,
        }
    }

    pub fn result_type(&self, id: Uuid) -> Option<&'static ResultType> {
        self.result_types.get(&id).copied()
    }

    /// LAA short code for a result type, `UNKNOWN_RESULT` when unmapped.
    pub fn code_for(&self, id: Uuid) -> &'static str {
        self.result_type(id).map_or(UNKNOWN_RESULT, |rt| rt.code)
    }

    pub fn category_for_type_code(&self, code: &str) -> Option<ApplicationCategory> {
        self.categories_by_type_code.get(code).copied()
    }

    /// Rule set for a category; `None` for `Unclassified`.
    pub fn rules(&self, category: ApplicationCategory) -> Option<&RuleSet> {
        self.rules.get(&category)
    }

    pub fn result_type_count(&self) -> usize {
        self.result_types.len()
    }
}
