use super::bank::QuestionBank;
use super::domain::{AnswerSet, AnswerValue, AssessmentError, UNSELECTED_OPTION};
use super::intake::{IntakeContext, IntakeField, IntakeSection};
use super::plan::AssessmentPlan;
use super::scoring::{AssessmentOutcome, ScoringEngine};
use serde::Serialize;
use tracing::warn;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SessionState {
    Empty,
    InProgress,
    Scored,
}

/// One operator's intake and checklist answers for the duration of a session.
#[derive(Debug, Clone)]
pub struct AssessmentSession<'a> {
    bank: &'a QuestionBank,
    context: IntakeContext,
    answers: AnswerSet,
    state: SessionState,
}

impl<'a> AssessmentSession<'a> {
    pub fn new(bank: &'a QuestionBank) -> Self {
        Self {
            bank,
            context: IntakeContext::new(),
            answers: AnswerSet::new(),
            state: SessionState::Empty,
        }
    }

    /// Resumes from previously captured values. Checklist answers are kept verbatim.
    pub fn resume(bank: &'a QuestionBank, context: IntakeContext, answers: AnswerSet) -> Self {
        let state = if context.is_empty() && answers.is_empty() {
            SessionState::Empty
        } else {
            SessionState::InProgress
        };
        Self {
            bank,
            context,
            answers,
            state,
        }
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn context(&self) -> &IntakeContext {
        &self.context
    }

    pub fn answers(&self) -> &AnswerSet {
        &self.answers
    }

    pub fn record_intake(
        &mut self,
        field: IntakeField,
        value: AnswerValue,
    ) -> Result<(), AssessmentError> {
        self.context.record(field, value)?;
        self.state = SessionState::InProgress;
        Ok(())
    }

    /// Records a checklist answer. The placeholder option clears the question instead.
    pub fn record_answer(&mut self, question_id: &str, label: &str) -> Result<(), AssessmentError> {
        let question_id = question_id.trim();
        let bank = self.bank;
        let (_, question) = bank
            .question(question_id)
            .ok_or_else(|| AssessmentError::UnknownQuestion(question_id.to_string()))?;

        let label = label.trim();
        if label.is_empty() || label == UNSELECTED_OPTION {
            self.clear_answer(question_id);
            return Ok(());
        }

        let option = question.option(label).ok_or_else(|| {
            warn!(question = question.id, label, "rejected unknown answer option");
            AssessmentError::UnknownOption {
                field: question.id.to_string(),
                label: label.to_string(),
            }
        })?;

        self.answers
            .insert(question.id, AnswerValue::SingleChoice(option.label.to_string()));
        self.state = SessionState::InProgress;
        Ok(())
    }

    pub fn clear_answer(&mut self, question_id: &str) {
        self.answers.remove(question_id.trim());
        self.state = if self.context.is_empty() && self.answers.is_empty() {
            SessionState::Empty
        } else {
            SessionState::InProgress
        };
    }

    pub fn plan(&self) -> AssessmentPlan<'a> {
        self.bank.build_plan(&self.context)
    }

    /// First intake section with a missing required answer.
    pub fn next_incomplete_section(&self) -> Option<IntakeSection> {
        IntakeSection::ordered()
            .into_iter()
            .find(|section| !section.is_complete(&self.context))
    }

    /// Recomputes from scratch. Moves to `Scored` only when the outcome has results.
    pub fn score(&mut self) -> AssessmentOutcome {
        let outcome = ScoringEngine::new(self.bank).assess(&self.context, &self.answers);
        if outcome.has_results() {
            self.state = SessionState::Scored;
        } else if self.state == SessionState::Scored {
            self.state = SessionState::InProgress;
        }
        outcome
    }

    pub fn restart(&mut self) {
        self.context = IntakeContext::new();
        self.answers = AnswerSet::new();
        self.state = SessionState::Empty;
    }
}
