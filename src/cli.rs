use crate::commands::{
    run_intake, run_questions, run_score, run_template, IntakeArgs, QuestionsArgs, ScoreArgs,
    TemplateArgs,
};
use clap::{Parser, Subcommand};
use sme_cyber_assessment::config::AppConfig;
use sme_cyber_assessment::error::AppError;
use sme_cyber_assessment::telemetry;

#[derive(Parser, Debug)]
#[command(
    name = "SME Cyber Self-Assessment",
    about = "Score a small business's cybersecurity posture and export a traffic-light report",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List the checklist questions that apply to a business (or the whole bank)
    Questions(QuestionsArgs),
    /// Summarise the business intake: snapshot, section completeness and readiness
    Intake(IntakeArgs),
    /// Score a filled-in assessment, print traffic lights and export the report
    Score(ScoreArgs),
    /// Write an empty answer sheet for the checklist that applies to a business
    Template(TemplateArgs),
}

pub(crate) fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let config = AppConfig::load()?;
    telemetry::init(&config.telemetry)?;

    match cli.command {
        Command::Questions(args) => run_questions(args),
        Command::Intake(args) => run_intake(args),
        Command::Score(args) => run_score(args, &config),
        Command::Template(args) => run_template(args),
    }
}
