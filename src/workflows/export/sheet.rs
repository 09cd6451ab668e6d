use super::ExportError;
use crate::workflows::assessment::{AnswerSet, AnswerValue, AssessmentPlan};
use serde::{Deserialize, Deserializer, Serialize};
use std::fs::File;
use std::io::{Read, Write};
use std::path::Path;
use tracing::info;

#[derive(Debug, Serialize)]
struct SheetRow<'a> {
    question_id: &'a str,
    domain: &'a str,
    question: &'a str,
    answer: &'a str,
}

#[derive(Debug, Deserialize)]
struct SheetRecord {
    question_id: String,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    answer: Option<String>,
}

/// Writes one row per question of the plan, carrying the selected label when
/// there is one. An empty answer set yields a fill-in template.
pub fn write_answer_sheet<W: Write>(
    writer: W,
    plan: &AssessmentPlan<'_>,
    answers: &AnswerSet,
) -> Result<usize, ExportError> {
    let mut csv_writer = csv::Writer::from_writer(writer);
    let mut rows = 0;

    for (domain, question) in plan.questions() {
        csv_writer.serialize(SheetRow {
            question_id: question.id,
            domain: domain.code.code(),
            question: question.prompt,
            answer: answers.selected_label(question.id).unwrap_or(""),
        })?;
        rows += 1;
    }

    csv_writer.flush()?;
    Ok(rows)
}

pub fn write_answer_sheet_to_path<P: AsRef<Path>>(
    path: P,
    plan: &AssessmentPlan<'_>,
    answers: &AnswerSet,
) -> Result<usize, ExportError> {
    let path = path.as_ref();
    let rows = write_answer_sheet(File::create(path)?, plan, answers)?;
    info!(path = %path.display(), rows, "answer sheet written");
    Ok(rows)
}

/// Reads an answer sheet back into an answer set. Rows without an answer are skipped.
pub fn read_answer_sheet<R: Read>(reader: R) -> Result<AnswerSet, ExportError> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);
    let mut answers = AnswerSet::new();

    for record in csv_reader.deserialize::<SheetRecord>() {
        let record = record?;
        if let Some(label) = record.answer {
            answers.insert(record.question_id, AnswerValue::SingleChoice(label));
        }
    }

    Ok(answers)
}

pub fn read_answer_sheet_from_path<P: AsRef<Path>>(path: P) -> Result<AnswerSet, ExportError> {
    let file = File::open(path)?;
    read_answer_sheet(file)
}

fn empty_string_as_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let opt = Option::<String>::deserialize(deserializer)?;
    Ok(opt.filter(|value| !value.trim().is_empty()))
}
