mod bands;
mod findings;
mod rules;

pub use bands::{Band, Tone, GOOD_THRESHOLD, MIXED_THRESHOLD};
pub use findings::ControlFinding;

use super::bank::QuestionBank;
use super::domain::{AnswerSet, DomainCode};
use super::intake::IntakeContext;
use super::plan::AssessmentPlan;
use findings::{extract_findings, order_by_domain_score};
use rules::{mean_score, tally_domain, DomainTally};
use serde::Serialize;
use std::collections::HashMap;
use tracing::{debug, info};

/// Stateless engine. Every call recomputes from the answers it is given.
#[derive(Debug, Clone, Copy)]
pub struct ScoringEngine<'a> {
    bank: &'a QuestionBank,
}

impl<'a> ScoringEngine<'a> {
    pub fn new(bank: &'a QuestionBank) -> Self {
        Self { bank }
    }

    /// Builds the plan for `context` and scores `answers` against it.
    pub fn assess(&self, context: &IntakeContext, answers: &AnswerSet) -> AssessmentOutcome {
        let plan = self.bank.build_plan(context);
        self.score_plan(&plan, answers)
    }

    pub fn score_plan(
        &self,
        plan: &AssessmentPlan<'_>,
        answers: &AnswerSet,
    ) -> AssessmentOutcome {
        let domains: Vec<DomainResult> = plan
            .domains()
            .iter()
            .map(|domain| {
                let tally = tally_domain(domain, answers);
                let result = DomainResult::from_tally(domain.code, tally);
                debug!(
                    domain = domain.code.code(),
                    score = result.score,
                    countable = result.countable,
                    "domain scored"
                );
                result
            })
            .collect();

        let answered: u32 = domains.iter().map(|domain| domain.countable).sum();
        if answered == 0 {
            info!(active_domains = domains.len(), "no countable answers yet");
            return AssessmentOutcome::NoResults {
                active_domains: plan.codes(),
            };
        }

        let scores: Vec<u8> = domains.iter().map(|domain| domain.score).collect();
        // non-empty: at least one domain carried a countable answer
        let overall = OverallResult::new(mean_score(&scores).unwrap_or_default());

        let (doing_right, mut needs_work) = extract_findings(plan, answers);
        let domain_scores: HashMap<DomainCode, u8> = domains
            .iter()
            .map(|domain| (domain.code, domain.score))
            .collect();
        order_by_domain_score(&mut needs_work, &domain_scores);

        info!(
            overall = overall.score,
            band = overall.band.label(),
            answered,
            "assessment scored"
        );

        AssessmentOutcome::Scored(Scorecard {
            domains,
            overall,
            doing_right,
            needs_work,
        })
    }
}

/// Score of one active domain with its derived traffic light.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DomainResult {
    pub code: DomainCode,
    pub title: &'static str,
    pub score: u8,
    pub band: Band,
    pub tone: Tone,
    pub takeaway: &'static str,
    pub affirmative: u32,
    pub countable: u32,
}

impl DomainResult {
    pub(crate) fn from_tally(code: DomainCode, tally: DomainTally) -> Self {
        let score = tally.score();
        let band = Band::from_score(score);
        Self {
            code,
            title: code.title(),
            score,
            band,
            tone: band.tone(),
            takeaway: band.takeaway(),
            affirmative: tally.affirmative,
            countable: tally.countable,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct OverallResult {
    pub score: u8,
    pub band: Band,
}

impl OverallResult {
    pub(crate) fn new(score: u8) -> Self {
        Self {
            score,
            band: Band::from_score(score),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Scorecard {
    pub domains: Vec<DomainResult>,
    pub overall: OverallResult,
    pub doing_right: Vec<ControlFinding>,
    pub needs_work: Vec<ControlFinding>,
}

impl Scorecard {
    pub fn domain(&self, code: DomainCode) -> Option<&DomainResult> {
        self.domains.iter().find(|domain| domain.code == code)
    }
}

/// Result of one scoring pass. `NoResults` tells the caller not to render a report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum AssessmentOutcome {
    NoResults { active_domains: Vec<DomainCode> },
    Scored(Scorecard),
}

impl AssessmentOutcome {
    pub fn scorecard(&self) -> Option<&Scorecard> {
        match self {
            Self::Scored(scorecard) => Some(scorecard),
            Self::NoResults { .. } => None,
        }
    }

    pub fn into_scorecard(self) -> Option<Scorecard> {
        match self {
            Self::Scored(scorecard) => Some(scorecard),
            Self::NoResults { .. } => None,
        }
    }

    /// Overall score, `0` when there is nothing to report.
    pub fn overall_score(&self) -> u8 {
        self.scorecard()
            .map(|scorecard| scorecard.overall.score)
            .unwrap_or(0)
    }

    pub fn has_results(&self) -> bool {
        matches!(self, Self::Scored(_))
    }
}
