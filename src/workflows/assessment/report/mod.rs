mod summary;
pub mod views;

pub use views::{
    CappedFindings, DomainSummaryEntry, FindingView, OverallSummary, ScorecardSummary,
};
