use clap::Args;
use serde::Serialize;
use sme_cyber_assessment::config::AppConfig;
use sme_cyber_assessment::error::AppError;
use sme_cyber_assessment::workflows::assessment::report::CappedFindings;
use sme_cyber_assessment::workflows::assessment::{
    readiness, AnswerSet, AssessmentInput, AssessmentOutcome, DomainTemplate, Inclusion,
    IntakeReadiness, IntakeSection, QuestionBank, ScorecardSummary,
};
use sme_cyber_assessment::workflows::export::sheet::{
    read_answer_sheet_from_path, write_answer_sheet_to_path,
};
use sme_cyber_assessment::workflows::export::{ReportDocument, SubmissionLog, SubmissionRecord};
use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};
use tracing::info;

#[derive(Args, Debug, Default)]
pub(crate) struct QuestionsArgs {
    /// Assessment input (JSON) whose business context selects the active domains
    #[arg(long)]
    pub(crate) context: Option<PathBuf>,
}

#[derive(Args, Debug)]
pub(crate) struct IntakeArgs {
    /// Assessment input (JSON) with a `context` object
    #[arg(long)]
    pub(crate) input: PathBuf,
}

#[derive(Args, Debug)]
pub(crate) struct ScoreArgs {
    /// Assessment input (JSON) with `context` and `answers` objects
    #[arg(long)]
    pub(crate) input: PathBuf,
    /// Answer sheet CSV whose answers override those in the input file
    #[arg(long)]
    pub(crate) answers_csv: Option<PathBuf>,
    /// Text report destination (defaults to APP_REPORT_PATH)
    #[arg(long)]
    pub(crate) report: Option<PathBuf>,
    /// Skip writing the text report
    #[arg(long, conflicts_with = "report")]
    pub(crate) no_report: bool,
    /// Append a submission record to this CSV log (defaults to APP_SUBMISSION_LOG)
    #[arg(long)]
    pub(crate) log: Option<PathBuf>,
    /// Print the scoring outcome as JSON instead of the terminal summary
    #[arg(long)]
    pub(crate) json: bool,
}

#[derive(Args, Debug)]
pub(crate) struct TemplateArgs {
    /// Assessment input (JSON) whose business context selects the active domains
    #[arg(long)]
    pub(crate) context: PathBuf,
    /// Where to write the answer sheet CSV
    #[arg(long)]
    pub(crate) output: PathBuf,
}

#[derive(Serialize)]
struct ScoreOutput<'a> {
    outcome: &'a AssessmentOutcome,
    summary: Option<ScorecardSummary>,
    readiness: IntakeReadiness,
    rejected_answers: Vec<String>,
}

pub(crate) fn run_questions(args: QuestionsArgs) -> Result<(), AppError> {
    let bank = QuestionBank::standard();

    let (heading, domains): (&str, Vec<&DomainTemplate>) = match args.context {
        Some(path) => {
            let context = load_input(&path)?.context();
            let plan = bank.build_plan(&context);
            ("Checklist for this business", plan.domains().to_vec())
        }
        None => ("Full question bank", bank.domains().iter().collect()),
    };

    let question_total: usize = domains.iter().map(|domain| domain.questions.len()).sum();
    println!(
        "{heading} ({} domains, {} questions)",
        domains.len(),
        question_total
    );
    for domain in domains {
        println!(
            "\n[{}] {}{}",
            domain.code.code(),
            domain.title(),
            inclusion_note(domain.inclusion)
        );
        for question in &domain.questions {
            println!("  {}  {}", question.id, question.prompt);
            println!(
                "        options: {}",
                question.labels().collect::<Vec<_>>().join(" | ")
            );
        }
    }

    Ok(())
}

pub(crate) fn run_intake(args: IntakeArgs) -> Result<(), AppError> {
    let context = load_input(&args.input)?.context();

    println!("Business snapshot");
    for entry in context.profile() {
        println!("- {}: {}", entry.label, entry.value);
    }

    println!("\nIntake sections");
    for section in IntakeSection::ordered() {
        let status = if section.is_complete(&context) {
            "complete"
        } else {
            "incomplete"
        };
        println!("- {}: {}", section.title(), status);
    }

    render_readiness(&readiness(&context));
    Ok(())
}

pub(crate) fn run_score(args: ScoreArgs, config: &AppConfig) -> Result<(), AppError> {
    let ScoreArgs {
        input,
        answers_csv,
        report,
        no_report,
        log,
        json,
    } = args;

    let mut assessment = load_input(&input)?;
    if let Some(path) = answers_csv {
        let sheet = read_answer_sheet_from_path(&path)?;
        info!(path = %path.display(), answers = sheet.len(), "answer sheet loaded");
        assessment.merge_answers(&sheet);
    }

    let bank = QuestionBank::standard();
    let (mut session, rejected) = assessment.into_session(&bank);
    let outcome = session.score();
    let context = session.context();
    let list_cap = config.export.list_cap;

    if json {
        let output = ScoreOutput {
            outcome: &outcome,
            summary: outcome.scorecard().map(|scorecard| scorecard.summary()),
            readiness: readiness(context),
            rejected_answers: rejected.iter().map(ToString::to_string).collect(),
        };
        println!("{}", serde_json::to_string_pretty(&output)?);
    } else {
        for err in &rejected {
            println!("Skipped answer: {err}");
        }
        render_outcome(&outcome, list_cap);
    }

    if !no_report {
        let path = report.unwrap_or_else(|| config.export.report_path.clone());
        ReportDocument::new(context, &outcome, list_cap).write_to_path(&path)?;
        if !json {
            println!("\nReport written to {}", path.display());
        }
    }

    let log_path = log.or_else(|| config.export.submission_log.clone());
    if let (Some(path), Some(scorecard)) = (log_path, outcome.scorecard()) {
        let record = SubmissionRecord::new(context, scorecard, chrono::Utc::now());
        SubmissionLog::new(&path).append(&record)?;
        if !json {
            println!("Submission recorded in {}", path.display());
        }
    }

    Ok(())
}

pub(crate) fn run_template(args: TemplateArgs) -> Result<(), AppError> {
    let context = load_input(&args.context)?.context();
    let bank = QuestionBank::standard();
    let plan = bank.build_plan(&context);

    let rows = write_answer_sheet_to_path(&args.output, &plan, &AnswerSet::new())?;
    println!(
        "Answer sheet with {} questions across {} domains written to {}",
        rows,
        plan.len(),
        args.output.display()
    );
    Ok(())
}

fn load_input(path: &Path) -> Result<AssessmentInput, AppError> {
    let file = File::open(path)?;
    let input = AssessmentInput::from_reader(BufReader::new(file))?;
    Ok(input)
}

fn inclusion_note(inclusion: Inclusion) -> &'static str {
    match inclusion {
        Inclusion::Always => "",
        Inclusion::SellsOnline => " (only when selling online)",
        Inclusion::ExternalPartners => " (only with external partners)",
    }
}

fn render_readiness(readiness: &IntakeReadiness) {
    println!(
        "\nReadiness from intake: {}/100 ({})",
        readiness.overall,
        readiness.level.label()
    );
    for area in &readiness.areas {
        println!("- {}: {}/100", area.name, area.score);
    }
}

fn render_outcome(outcome: &AssessmentOutcome, list_cap: usize) {
    let scorecard = match outcome {
        AssessmentOutcome::Scored(scorecard) => scorecard,
        AssessmentOutcome::NoResults { active_domains } => {
            println!(
                "No results yet: answer at least one checklist question across the {} active \
                 domains.",
                active_domains.len()
            );
            return;
        }
    };

    let summary = scorecard.summary();
    println!(
        "Overall: {}/100 ({}) [{}]",
        summary.overall.score,
        summary.overall.label,
        summary.overall.tone.color()
    );
    println!("\nDomains");
    for domain in &summary.domains {
        println!(
            "- {:<32} {:>3}/100  {:<10} [{}]",
            domain.title,
            domain.score,
            domain.band_label,
            domain.tone.color()
        );
        println!("    {}", domain.takeaway);
    }

    println!("\nWhat you're doing right ({})", summary.doing_right.len());
    render_findings(
        summary.doing_right_capped(list_cap),
        "No confirmed controls selected as Yes.",
    );
    println!("\nWhat needs work ({})", summary.needs_work.len());
    render_findings(summary.needs_work_capped(list_cap), "No immediate gaps flagged.");
}

fn render_findings(findings: CappedFindings<'_>, empty: &str) {
    if findings.is_empty() {
        println!("  {empty}");
        return;
    }
    for finding in findings.shown {
        println!("  - {}: {}", finding.domain, finding.question_text);
    }
    if findings.remaining > 0 {
        println!("  ...and {} more", findings.remaining);
    }
}
