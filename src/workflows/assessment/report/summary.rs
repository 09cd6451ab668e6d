use super::super::scoring::{ControlFinding, DomainResult, OverallResult, Scorecard};
use super::views::{DomainSummaryEntry, FindingView, OverallSummary, ScorecardSummary};

impl Scorecard {
    /// Presentation view: one entry per active domain in plan order, then the
    /// overall light and both finding lists.
    pub fn summary(&self) -> ScorecardSummary {
        ScorecardSummary {
            domains: self.domains.iter().map(DomainResult::to_view).collect(),
            overall: self.overall.to_view(),
            doing_right: self.doing_right.iter().map(ControlFinding::to_view).collect(),
            needs_work: self.needs_work.iter().map(ControlFinding::to_view).collect(),
        }
    }
}

impl DomainResult {
    pub fn to_view(&self) -> DomainSummaryEntry {
        DomainSummaryEntry {
            code: self.code,
            title: self.title,
            score: self.score,
            band: self.band,
            band_label: self.band.label(),
            tone: self.tone,
            takeaway: self.takeaway,
        }
    }
}

impl OverallResult {
    pub fn to_view(&self) -> OverallSummary {
        OverallSummary {
            score: self.score,
            band: self.band,
            label: self.band.label(),
            tone: self.band.tone(),
        }
    }
}

impl ControlFinding {
    pub fn to_view(&self) -> FindingView {
        FindingView {
            domain: self.domain_title,
            question_text: self.question_text,
        }
    }
}
