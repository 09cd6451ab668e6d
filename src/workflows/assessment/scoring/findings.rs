use super::super::domain::{AnswerSet, Classification, DomainCode};
use super::super::plan::AssessmentPlan;
use super::rules::classify_answer;
use serde::Serialize;
use std::collections::HashMap;

/// One answered control, listed under "doing right" or "needs work".
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ControlFinding {
    pub domain: DomainCode,
    pub domain_title: &'static str,
    pub question_id: &'static str,
    pub question_text: &'static str,
}

/// Splits answered, non-neutral controls of the plan into (doing right, needs work),
/// both in plan order.
pub(crate) fn extract_findings(
    plan: &AssessmentPlan<'_>,
    answers: &AnswerSet,
) -> (Vec<ControlFinding>, Vec<ControlFinding>) {
    let mut doing_right = Vec::new();
    let mut needs_work = Vec::new();

    for (domain, question) in plan.questions() {
        let finding = || ControlFinding {
            domain: domain.code,
            domain_title: domain.title(),
            question_id: question.id,
            question_text: question.prompt,
        };

        match classify_answer(question, answers) {
            Some(Classification::Affirmative) => doing_right.push(finding()),
            Some(Classification::Negative) => needs_work.push(finding()),
            Some(Classification::Neutral) | None => {}
        }
    }

    (doing_right, needs_work)
}

/// Weakest domain first. The sort is stable, so question order survives within a
/// domain and equally scored domains keep plan order.
pub(crate) fn order_by_domain_score(
    findings: &mut [ControlFinding],
    domain_scores: &HashMap<DomainCode, u8>,
) {
    findings.sort_by_key(|finding| {
        domain_scores
            .get(&finding.domain)
            .copied()
            .unwrap_or(u8::MAX)
    });
}
