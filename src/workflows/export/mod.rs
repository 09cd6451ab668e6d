//! File outputs of a completed assessment: the plain-text report, the answer
//! sheet CSV, and the append-only submission log.

pub mod sanitize;
pub mod sheet;
pub mod submissions;
pub mod text;

pub use sanitize::clean_text;
pub use sheet::{read_answer_sheet, write_answer_sheet};
pub use submissions::{SubmissionLog, SubmissionRecord};
pub use text::ReportDocument;

#[derive(Debug, thiserror::Error)]
pub enum ExportError {
    #[error("export file access failed: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid CSV data: {0}")]
    Csv(#[from] csv::Error),
}
