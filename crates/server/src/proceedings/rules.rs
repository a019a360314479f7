//! Conclusion rules per application category
//!
//! Special cases are tried first: they encode combinations of results that
//! the single-identifier registry cannot express. When a category has no
//! special case, or its precondition is not met, the generic registry-driven
//! evaluation runs instead.

use shared_types::{
    ApplicationCategory, ApplicationResult, CourtApplication, RESULT_CODE_SEPARATOR,
};
use uuid::Uuid;

use super::offence_finality::offences_final_for;
use super::registry::{registry, result_type_ids::*, Conclusion};

/// Everything a rule needs to reach a conclusion.
pub struct RuleContext<'a> {
    pub application: &'a CourtApplication,
    pub category: ApplicationCategory,
    pub root_ids: &'a [Uuid],
}

impl<'a> RuleContext<'a> {
    pub fn new(
        application: &'a CourtApplication,
        category: ApplicationCategory,
        root_ids: &'a [Uuid],
    ) -> Self {
        Self {
            application,
            category,
            root_ids,
        }
    }

    fn has(&self, result_type_id: Uuid) -> bool {
        self.root_ids.contains(&result_type_id)
    }

    fn offences_final(&self) -> bool {
        offences_final_for(self.category, self.application)
    }
}

/// A combination rule. Returns `None` when its precondition is not met.
pub type SpecialCase = fn(&RuleContext<'_>) -> Option<ApplicationResult>;

/// Special-case rules keyed by category. Appeal against conviction has none.
pub static SPECIAL_CASES: &[(ApplicationCategory, SpecialCase)] = &[
    (ApplicationCategory::AppealAgainstSentence, sentence_dismissed),
    (ApplicationCategory::AppealAgainstConvictionAndSentence, conviction_dismissed_sentence_allowed),
    (ApplicationCategory::StatutoryDeclaration, granted_and_declaration_filed),
    (ApplicationCategory::ReopenCase, granted_and_case_reopened),
    (ApplicationCategory::ConfiscationOrder, amount_decided_and_granted),
    (ApplicationCategory::Breach, order_revoked_without_adjudication),
];

pub fn special_case_for(category: ApplicationCategory) -> Option<SpecialCase> {
    SPECIAL_CASES
        .iter()
        .find(|(c, _)| *c == category)
        .map(|(_, rule)| *rule)
}

fn joined_code(result_type_ids: &[Uuid]) -> String {
    result_type_ids
        .iter()
        .map(|id| registry().code_for(*id))
        .collect::<Vec<_>>()
        .join(RESULT_CODE_SEPARATOR)
}

/// Both results present: conclude outright, or once offences are final.
fn both_present(
    ctx: &RuleContext<'_>,
    first: Uuid,
    second: Uuid,
    conclusion: Conclusion,
) -> Option<ApplicationResult> {
    if !(ctx.has(first) && ctx.has(second)) {
        return None;
    }
    let concluded = match conclusion {
        Conclusion::Outright => true,
        Conclusion::AfterOffenceCheck => ctx.offences_final(),
    };
    Some(ApplicationResult::new(concluded, joined_code(&[first, second])))
}

fn sentence_dismissed(ctx: &RuleContext<'_>) -> Option<ApplicationResult> {
    if !ctx.has(APPEAL_AGAINST_SENTENCE_DISMISSED) {
        return None;
    }
    if ctx.has(SENTENCE_VARIED) {
        Some(ApplicationResult::new(
            ctx.offences_final(),
            joined_code(&[APPEAL_AGAINST_SENTENCE_DISMISSED, SENTENCE_VARIED]),
        ))
    } else {
        Some(ApplicationResult::new(
            true,
            registry().code_for(APPEAL_AGAINST_SENTENCE_DISMISSED),
        ))
    }
}

fn conviction_dismissed_sentence_allowed(ctx: &RuleContext<'_>) -> Option<ApplicationResult> {
    both_present(
        ctx,
        APPEAL_AGAINST_CONVICTION_DISMISSED,
        APPEAL_AGAINST_SENTENCE_ALLOWED,
        Conclusion::AfterOffenceCheck,
    )
}

fn granted_and_declaration_filed(ctx: &RuleContext<'_>) -> Option<ApplicationResult> {
    both_present(ctx, GRANTED, STATUTORY_DECLARATION_FILED, Conclusion::AfterOffenceCheck)
}

fn granted_and_case_reopened(ctx: &RuleContext<'_>) -> Option<ApplicationResult> {
    both_present(ctx, GRANTED, CASE_REOPENED, Conclusion::AfterOffenceCheck)
}

fn amount_decided_and_granted(ctx: &RuleContext<'_>) -> Option<ApplicationResult> {
    both_present(ctx, CONFISCATION_AMOUNT_DECIDED, GRANTED, Conclusion::Outright)
}

fn order_revoked_without_adjudication(ctx: &RuleContext<'_>) -> Option<ApplicationResult> {
    both_present(
        ctx,
        ORDER_REVOKED,
        NO_ADJUDICATION_DEALT_WITH_ORIGINAL_OFFENCE,
        Conclusion::AfterOffenceCheck,
    )
}

/// One result per root id, looked up in the category's rule sets.
///
/// Ids outside both sets produce a never-concluded `UNKNOWN_RESULT` entry.
/// When nothing matched at all, the whole list collapses to a single
/// `UNKNOWN_RESULT` entry. `Unclassified` has no rule sets and yields nothing.
pub fn evaluate_generic(ctx: &RuleContext<'_>) -> Vec<ApplicationResult> {
    let Some(rules) = registry().rules(ctx.category) else {
        return Vec::new();
    };

    let mut results = Vec::with_capacity(ctx.root_ids.len());
    let mut matched = false;
    for id in ctx.root_ids {
        match rules.conclusion_for(*id) {
            Some(Conclusion::Outright) => {
                matched = true;
                results.push(ApplicationResult::new(true, registry().code_for(*id)));
            }
            Some(Conclusion::AfterOffenceCheck) => {
                matched = true;
                results.push(ApplicationResult::new(
                    ctx.offences_final(),
                    registry().code_for(*id),
                ));
            }
            None => {
                tracing::warn!(
                    application_id = %ctx.application.id,
                    category = %ctx.category,
                    result_type_id = %id,
                    "Unrecognised result type for application category"
                );
                results.push(ApplicationResult::unknown());
            }
        }
    }

    if !matched {
        tracing::info!(
            application_id = %ctx.application.id,
            category = %ctx.category,
            root_results = ctx.root_ids.len(),
            "No conclusion rule matched"
        );
        return vec![ApplicationResult::unknown()];
    }
    results
}

/// Special case first, generic evaluation as fallback.
pub fn evaluate_category(ctx: &RuleContext<'_>) -> Vec<ApplicationResult> {
    if let Some(rule) = special_case_for(ctx.category) {
        if let Some(result) = rule(ctx) {
            return vec![result];
        }
    }
    evaluate_generic(ctx)
}
