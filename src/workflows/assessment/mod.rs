//! Business intake, checklist question bank, and the scoring engine that turns
//! answers into per-domain traffic lights.

mod bank;
pub mod domain;
mod input;
pub mod intake;
mod plan;
pub mod readiness;
pub mod report;
pub mod scoring;
mod session;

#[cfg(test)]
mod tests;

pub use bank::QuestionBank;
pub use domain::{
    AnswerOption, AnswerSet, AnswerValue, AssessmentError, Classification, DomainCode,
    DomainTemplate, Inclusion, QuestionTemplate, RawValue, UNSELECTED_OPTION,
};
pub use input::AssessmentInput;
pub use intake::{FieldKind, IntakeContext, IntakeField, IntakeSection, ProfileEntry};
pub use plan::AssessmentPlan;
pub use readiness::{readiness, IntakeReadiness, ReadinessArea, ReadinessLevel};
pub use report::ScorecardSummary;
pub use scoring::{
    AssessmentOutcome, Band, ControlFinding, DomainResult, OverallResult, Scorecard,
    ScoringEngine, Tone,
};
pub use session::{AssessmentSession, SessionState};
