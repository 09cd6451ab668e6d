use super::sanitize::clean_text;
use super::ExportError;
use crate::workflows::assessment::report::{CappedFindings, ScorecardSummary};
use crate::workflows::assessment::{
    readiness, AssessmentOutcome, Band, IntakeContext, IntakeReadiness, ProfileEntry,
};
use chrono::{DateTime, Utc};
use std::fs;
use std::path::Path;
use tracing::info;

const TITLE: &str = "SME Cybersecurity Self-Assessment Report";

/// Text-only rendition of one submission, safe for Latin-1 encoders.
#[derive(Debug, Clone)]
pub struct ReportDocument {
    generated_at: DateTime<Utc>,
    profile: Vec<ProfileEntry>,
    readiness: IntakeReadiness,
    results: Option<ScorecardSummary>,
    list_cap: usize,
}

impl ReportDocument {
    pub fn new(context: &IntakeContext, outcome: &AssessmentOutcome, list_cap: usize) -> Self {
        Self {
            generated_at: Utc::now(),
            profile: context.profile(),
            readiness: readiness(context),
            results: outcome.scorecard().map(|scorecard| scorecard.summary()),
            list_cap,
        }
    }

    pub fn with_generated_at(mut self, generated_at: DateTime<Utc>) -> Self {
        self.generated_at = generated_at;
        self
    }

    pub fn has_results(&self) -> bool {
        self.results.is_some()
    }

    pub fn render(&self) -> String {
        let mut lines = vec![TITLE.to_string(), String::new()];

        lines.push("Business Context Summary".to_string());
        lines.push(format!(
            "Generated: {}",
            self.generated_at.format("%Y-%m-%d %H:%M UTC")
        ));
        lines.push(String::new());
        for entry in &self.profile {
            lines.push(format!("{}: {}", entry.label, entry.value));
        }
        lines.push(String::new());

        lines.push("Readiness Overview (from intake)".to_string());
        lines.push(format!(
            "Overall (intake): {}/100 ({})",
            self.readiness.overall,
            self.readiness.level.label()
        ));
        for area in &self.readiness.areas {
            lines.push(format!(
                "- {}: {}/100 ({})",
                area.name,
                area.score,
                Band::from_score(area.score).export_label()
            ));
        }
        lines.push(String::new());

        lines.push("Assessment Results (bird\u{2019}s-eye)".to_string());
        match &self.results {
            Some(summary) => self.render_results(summary, &mut lines),
            None => lines.push("No checklist answers recorded yet.".to_string()),
        }

        let mut text = clean_text(&lines.join("\n"));
        text.push('\n');
        text
    }

    fn render_results(&self, summary: &ScorecardSummary, lines: &mut Vec<String>) {
        lines.push(format!(
            "Overall (assessment): {}/100 ({})",
            summary.overall.score, summary.overall.label
        ));
        for domain in &summary.domains {
            lines.push(format!(
                "- {}: {}/100 ({})",
                domain.title,
                domain.score,
                domain.band.export_label()
            ));
        }
        lines.push(String::new());

        lines.push("What you\u{2019}re doing right".to_string());
        push_findings(
            lines,
            summary.doing_right_capped(self.list_cap),
            "No confirmed controls selected as Yes.",
        );
        lines.push(String::new());

        lines.push("What needs work".to_string());
        push_findings(
            lines,
            summary.needs_work_capped(self.list_cap),
            "No immediate gaps flagged.",
        );
    }

    pub fn write_to_path<P: AsRef<Path>>(&self, path: P) -> Result<(), ExportError> {
        let path = path.as_ref();
        fs::write(path, self.render())?;
        info!(path = %path.display(), results = self.has_results(), "text report written");
        Ok(())
    }
}

fn push_findings(lines: &mut Vec<String>, findings: CappedFindings<'_>, empty: &str) {
    if findings.is_empty() {
        lines.push(empty.to_string());
        return;
    }

    for finding in findings.shown {
        lines.push(format!("- {} \u{2014} {}", finding.domain, finding.question_text));
    }
    if findings.remaining > 0 {
        lines.push(format!("...and {} more", findings.remaining));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::workflows::assessment::{AnswerSet, QuestionBank, RawValue, ScoringEngine};
    use chrono::TimeZone;
    use std::collections::BTreeMap;

    fn context() -> IntakeContext {
        let raw: BTreeMap<String, RawValue> = [
            ("business_type", "Caf\u{e9} \u{2013} bakery \u{2615}"),
            ("online_sales", "No \u{2013} mostly offline"),
            ("partners", "No"),
        ]
        .into_iter()
        .map(|(key, value)| (key.to_string(), RawValue::One(value.to_string())))
        .collect();
        IntakeContext::from_raw(raw)
    }

    fn fixed_time() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 3, 5, 9, 7, 0)
            .single()
            .expect("valid timestamp")
    }

    #[test]
    fn report_without_answers_says_so_instead_of_listing_zero_scores() {
        let bank = QuestionBank::standard();
        let outcome = ScoringEngine::new(&bank).assess(&context(), &AnswerSet::new());

        let text = ReportDocument::new(&context(), &outcome, 12)
            .with_generated_at(fixed_time())
            .render();

        assert!(text.starts_with(TITLE));
        assert!(text.contains("Generated: 2024-03-05 09:07 UTC"));
        assert!(text.contains("Type: Caf\u{e9} - bakery "));
        assert!(text.contains("Overall (intake): 45/100 (Needs Attention)"));
        assert!(text.contains("Assessment Results (bird's-eye)"));
        assert!(text.contains("No checklist answers recorded yet."));
        assert!(!text.contains("Overall (assessment)"));
    }

    #[test]
    fn finding_lists_are_capped_with_a_trailer() {
        let bank = QuestionBank::standard();
        let answers = AnswerSet::from_labels([
            ("GV01", "No"),
            ("GV02", "No"),
            ("GV03", "No"),
            ("AI01", "Yes"),
        ]);
        let outcome = ScoringEngine::new(&bank).assess(&context(), &answers);

        let text = ReportDocument::new(&context(), &outcome, 2)
            .with_generated_at(fixed_time())
            .render();

        assert!(text.contains("- Access & Identity: 100/100 (GOOD)"));
        assert!(text.contains("- Governance & Asset Visibility: 0/100 (NEEDS WORK)"));
        assert!(text.contains("What you're doing right"));
        assert!(text.contains("...and 1 more"));
        assert!(!text.contains("No immediate gaps flagged."));
        assert!(text.chars().all(|ch| ch <= '\u{ff}'));
    }

    #[test]
    fn zero_cap_keeps_the_trailer_instead_of_claiming_no_gaps() {
        let bank = QuestionBank::standard();
        let answers = AnswerSet::from_labels([("GV01", "No"), ("GV02", "No")]);
        let outcome = ScoringEngine::new(&bank).assess(&context(), &answers);

        let text = ReportDocument::new(&context(), &outcome, 0)
            .with_generated_at(fixed_time())
            .render();

        assert!(text.contains("What needs work\n...and 2 more"));
        assert!(!text.contains("No immediate gaps flagged."));
        assert!(text.contains("No confirmed controls selected as Yes."));
    }
}
