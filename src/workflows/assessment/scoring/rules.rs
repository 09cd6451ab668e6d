use super::super::domain::{
    AnswerSet, AnswerValue, Classification, DomainTemplate, QuestionTemplate, UNSELECTED_OPTION,
};

/// Affirmative and countable (non-neutral, answered) totals for one domain.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub(crate) struct DomainTally {
    pub affirmative: u32,
    pub countable: u32,
}

impl DomainTally {
    pub fn score(&self) -> u8 {
        rounded_percent(self.affirmative, self.countable)
    }
}

/// Classification of the recorded answer, or `None` when the question counts as unanswered.
pub(crate) fn classify_answer(
    question: &QuestionTemplate,
    answers: &AnswerSet,
) -> Option<Classification> {
    match answers.get(question.id)? {
        AnswerValue::SingleChoice(label) => {
            let label = label.trim();
            if label.is_empty() || label == UNSELECTED_OPTION {
                return None;
            }
            question.option(label).map(|option| option.classification)
        }
        // checklist questions are single choice; other shapes are never scored
        AnswerValue::MultiChoice(_) | AnswerValue::FreeText(_) => None,
    }
}

pub(crate) fn tally_domain(domain: &DomainTemplate, answers: &AnswerSet) -> DomainTally {
    domain
        .questions
        .iter()
        .filter_map(|question| classify_answer(question, answers))
        .filter_map(Classification::mapped)
        .fold(DomainTally::default(), |mut tally, mapped| {
            tally.countable += 1;
            tally.affirmative += mapped;
            tally
        })
}

/// `round(100 * part / whole)` with halves rounded up; zero when `whole` is zero.
pub(crate) fn rounded_percent(part: u32, whole: u32) -> u8 {
    if whole == 0 {
        return 0;
    }
    let part = u64::from(part.min(whole));
    let whole = u64::from(whole);
    ((200 * part + whole) / (2 * whole)) as u8
}

/// Unweighted mean of domain scores, rounded half up. `None` for an empty slice.
pub(crate) fn mean_score(scores: &[u8]) -> Option<u8> {
    if scores.is_empty() {
        return None;
    }
    let count = scores.len() as u64;
    let sum: u64 = scores.iter().map(|score| u64::from(*score)).sum();
    Some(((2 * sum + count) / (2 * count)) as u8)
}
