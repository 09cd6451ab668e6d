use std::collections::BTreeMap;

use crate::workflows::assessment::domain::{
    AnswerOption, AnswerSet, AnswerValue, Classification, DomainCode, DomainTemplate, Inclusion,
    QuestionTemplate, RawValue,
};
use crate::workflows::assessment::{IntakeContext, QuestionBank};

pub(super) fn standard_bank() -> QuestionBank {
    QuestionBank::standard()
}

pub(super) fn context(pairs: &[(&str, &str)]) -> IntakeContext {
    let raw: BTreeMap<String, RawValue> = pairs
        .iter()
        .map(|(key, value)| (key.to_string(), RawValue::One(value.to_string())))
        .collect();
    IntakeContext::from_raw(raw)
}

pub(super) fn offline_context() -> IntakeContext {
    context(&[("online_sales", "No – mostly offline"), ("partners", "No")])
}

pub(super) fn connected_context() -> IntakeContext {
    context(&[("online_sales", "Yes – own website"), ("partners", "Yes")])
}

/// Label of the first option carrying `classification`.
pub(super) fn label_for(
    question: &QuestionTemplate,
    classification: Classification,
) -> &'static str {
    question
        .options
        .iter()
        .find(|option| option.classification == classification)
        .map(|option| option.label)
        .expect("question offers the requested classification")
}

/// Answers every question of `code` with its first option of `classification`.
pub(super) fn answer_domain(
    answers: &mut AnswerSet,
    bank: &QuestionBank,
    code: DomainCode,
    classification: Classification,
) {
    let domain = bank.domain(code).expect("domain in bank");
    for question in &domain.questions {
        answers.insert(
            question.id,
            AnswerValue::SingleChoice(
                label_for(question, classification).to_string(),
            ),
        );
    }
}

/// Always-on domain with `count` plain yes/no questions, ids `{prefix}01..`.
pub(super) fn yes_no_domain(
    code: DomainCode,
    prefix: &'static str,
    count: usize,
) -> DomainTemplate {
    const IDS: [&str; 10] = ["01", "02", "03", "04", "05", "06", "07", "08", "09", "10"];
    let questions = IDS
        .iter()
        .take(count)
        .map(|suffix| QuestionTemplate {
            id: Box::leak(format!("{prefix}{suffix}").into_boxed_str()),
            prompt: Box::leak(format!("{prefix} control {suffix}").into_boxed_str()),
            options: vec![
                AnswerOption {
                    label: "Yes",
                    classification: Classification::Affirmative,
                },
                AnswerOption {
                    label: "No",
                    classification: Classification::Negative,
                },
                AnswerOption {
                    label: "N/A",
                    classification: Classification::Neutral,
                },
            ],
        })
        .collect();

    DomainTemplate {
        code,
        inclusion: Inclusion::Always,
        questions,
    }
}

/// Answers the first `yes` questions "Yes" and the rest "No".
pub(super) fn answer_yes_first(answers: &mut AnswerSet, domain: &DomainTemplate, yes: usize) {
    for (index, question) in domain.questions.iter().enumerate() {
        let label = if index < yes { "Yes" } else { "No" };
        answers.insert(
            question.id,
            AnswerValue::SingleChoice(label.to_string()),
        );
    }
}
