use super::ExportError;
use crate::workflows::assessment::{DomainCode, IntakeContext, IntakeField, Scorecard};
use chrono::{DateTime, SecondsFormat, Utc};
use std::collections::BTreeMap;
use std::fs::OpenOptions;
use std::path::{Path, PathBuf};
use tracing::info;

const FIXED_COLUMNS: [&str; 7] = [
    "timestamp",
    "business_type",
    "team_size",
    "online_sales",
    "partners",
    "overall_score",
    "overall_band",
];

/// One completed submission, flattened for the CSV log.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmissionRecord {
    pub timestamp: DateTime<Utc>,
    pub business_type: String,
    pub team_size: String,
    pub online_sales: String,
    pub partners: String,
    pub overall_score: u8,
    pub overall_band: &'static str,
    pub domain_scores: BTreeMap<DomainCode, u8>,
}

impl SubmissionRecord {
    pub fn new(context: &IntakeContext, scorecard: &Scorecard, timestamp: DateTime<Utc>) -> Self {
        let text = |field| context.text(field).unwrap_or_default().to_string();
        Self {
            timestamp,
            business_type: text(IntakeField::BusinessType),
            team_size: text(IntakeField::TeamSize),
            online_sales: text(IntakeField::OnlineSales),
            partners: text(IntakeField::Partners),
            overall_score: scorecard.overall.score,
            overall_band: scorecard.overall.band.label(),
            domain_scores: scorecard
                .domains
                .iter()
                .map(|domain| (domain.code, domain.score))
                .collect(),
        }
    }

    fn header() -> Vec<&'static str> {
        FIXED_COLUMNS
            .iter()
            .copied()
            .chain(DomainCode::ordered().iter().map(|code| code.code()))
            .collect()
    }

    fn fields(&self) -> Vec<String> {
        let mut fields = vec![
            self.timestamp.to_rfc3339_opts(SecondsFormat::Secs, true),
            self.business_type.clone(),
            self.team_size.clone(),
            self.online_sales.clone(),
            self.partners.clone(),
            self.overall_score.to_string(),
            self.overall_band.to_string(),
        ];
        fields.extend(DomainCode::ordered().iter().map(|code| {
            self.domain_scores
                .get(code)
                .map(u8::to_string)
                .unwrap_or_default()
        }));
        fields
    }
}

/// Append-only CSV log with one row per completed submission.
#[derive(Debug, Clone)]
pub struct SubmissionLog {
    path: PathBuf,
}

impl SubmissionLog {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn append(&self, record: &SubmissionRecord) -> Result<(), ExportError> {
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)?;
        let needs_header = file.metadata()?.len() == 0;

        let mut writer = csv::WriterBuilder::new()
            .has_headers(false)
            .from_writer(file);
        if needs_header {
            writer.write_record(SubmissionRecord::header())?;
        }
        writer.write_record(record.fields())?;
        writer.flush()?;

        info!(
            path = %self.path.display(),
            overall = record.overall_score,
            header = needs_header,
            "submission appended"
        );
        Ok(())
    }
}
