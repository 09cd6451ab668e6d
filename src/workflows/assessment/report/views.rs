use super::super::domain::DomainCode;
use super::super::scoring::{Band, Tone};
use serde::Serialize;
use std::collections::BTreeMap;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DomainSummaryEntry {
    pub code: DomainCode,
    pub title: &'static str,
    pub score: u8,
    pub band: Band,
    pub band_label: &'static str,
    pub tone: Tone,
    pub takeaway: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct OverallSummary {
    pub score: u8,
    pub band: Band,
    pub label: &'static str,
    pub tone: Tone,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FindingView {
    pub domain: &'static str,
    pub question_text: &'static str,
}

/// Head of a finding list plus how many items were left out.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CappedFindings<'a> {
    pub shown: &'a [FindingView],
    pub remaining: usize,
}

impl CappedFindings<'_> {
    /// True only when the underlying list is empty, not merely capped to nothing.
    pub fn is_empty(&self) -> bool {
        self.shown.is_empty() && self.remaining == 0
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScorecardSummary {
    pub domains: Vec<DomainSummaryEntry>,
    pub overall: OverallSummary,
    pub doing_right: Vec<FindingView>,
    pub needs_work: Vec<FindingView>,
}

impl ScorecardSummary {
    pub fn by_code(&self) -> BTreeMap<DomainCode, &DomainSummaryEntry> {
        self.domains.iter().map(|entry| (entry.code, entry)).collect()
    }

    pub fn doing_right_capped(&self, cap: usize) -> CappedFindings<'_> {
        capped(&self.doing_right, cap)
    }

    pub fn needs_work_capped(&self, cap: usize) -> CappedFindings<'_> {
        capped(&self.needs_work, cap)
    }
}

fn capped(items: &[FindingView], cap: usize) -> CappedFindings<'_> {
    let shown = &items[..items.len().min(cap)];
    CappedFindings {
        shown,
        remaining: items.len() - shown.len(),
    }
}
