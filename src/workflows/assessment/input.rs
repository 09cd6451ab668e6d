use super::bank::QuestionBank;
use super::domain::{AnswerSet, AssessmentError, RawValue};
use super::intake::IntakeContext;
use super::session::AssessmentSession;
use serde::{Deserialize, Deserializer, Serialize};
use std::collections::BTreeMap;
use std::io::Read;
use tracing::{debug, warn};

/// Assessment captured outside the tool: `{ "context": {..}, "answers": {..} }`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AssessmentInput {
    #[serde(deserialize_with = "skip_null_entries")]
    pub context: BTreeMap<String, RawValue>,
    #[serde(deserialize_with = "skip_null_entries")]
    pub answers: BTreeMap<String, RawValue>,
}

impl AssessmentInput {
    pub fn from_json(raw: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(raw)
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<Self, serde_json::Error> {
        serde_json::from_reader(reader)
    }

    /// Overlays answers read from elsewhere (an answer sheet) on top of the JSON ones.
    pub fn merge_answers(&mut self, answers: &AnswerSet) {
        for (question_id, _) in answers.iter() {
            if let Some(label) = answers.selected_label(question_id) {
                self.answers
                    .insert(question_id.to_string(), RawValue::One(label.to_string()));
            }
        }
    }

    pub fn context(&self) -> IntakeContext {
        IntakeContext::from_raw(self.context.clone())
    }

    /// Replays the input through a session. Answers the bank rejects are skipped and returned.
    pub fn into_session(
        self,
        bank: &QuestionBank,
    ) -> (AssessmentSession<'_>, Vec<AssessmentError>) {
        let context = IntakeContext::from_raw(self.context);
        let mut session = AssessmentSession::resume(bank, context, AnswerSet::new());
        let mut rejected = Vec::new();

        for (question_id, value) in self.answers {
            let result = match value {
                RawValue::One(label) => session.record_answer(&question_id, &label),
                RawValue::Many(_) => Err(AssessmentError::KindMismatch {
                    field: question_id.clone(),
                    expected: "single choice",
                }),
            };
            if let Err(err) = result {
                warn!(question = %question_id, error = %err, "skipping answer");
                rejected.push(err);
            }
        }

        debug!(
            answers = session.answers().len(),
            rejected = rejected.len(),
            "assessment input loaded"
        );
        (session, rejected)
    }
}

/// `null` marks an unanswered field, as does a `null` section.
fn skip_null_entries<'de, D>(deserializer: D) -> Result<BTreeMap<String, RawValue>, D::Error>
where
    D: Deserializer<'de>,
{
    let entries = Option::<BTreeMap<String, Option<RawValue>>>::deserialize(deserializer)?;
    Ok(entries
        .unwrap_or_default()
        .into_iter()
        .filter_map(|(key, value)| value.map(|value| (key, value)))
        .collect())
}
