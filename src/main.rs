use card_decisions::config::AppConfig;
use card_decisions::error::AppError;
use card_decisions::telemetry;
use card_decisions::workflows::credit_card::{
    ApplicationEvaluator, BatchEvaluator, BatchReport, CreditCardApplication,
    EvaluationOutcome, RegistryValidator,
};
use clap::{Args, Parser, Subcommand};
use serde::Serialize;
use std::path::PathBuf;
use tracing::info;

#[derive(Parser, Debug)]
#[command(
    name = "card-decisions",
    about = "Evaluate credit-card applications against the automated decision rules",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Evaluate a single application
    Evaluate(EvaluateArgs),
    /// Evaluate every application in a CSV export
    Batch(BatchArgs),
}

#[derive(Args, Debug)]
struct EvaluateArgs {
    /// Gross annual income of the applicant
    #[arg(long, allow_negative_numbers = true)]
    income: f64,
    /// Applicant age in years
    #[arg(long, allow_negative_numbers = true)]
    age: i32,
    /// Frequent flyer number, passed to the validator as given
    #[arg(long, default_value = "")]
    frequent_flyer_number: String,
    /// Print the outcome as JSON
    #[arg(long)]
    json: bool,
}

#[derive(Args, Debug)]
struct BatchArgs {
    /// CSV with application_id,gross_annual_income,age,frequent_flyer_number columns
    #[arg(long)]
    csv: PathBuf,
    /// Print the report as JSON
    #[arg(long)]
    json: bool,
}

#[derive(Debug, Serialize)]
struct EvaluateResponse<'a> {
    application: &'a CreditCardApplication,
    outcome: EvaluationOutcome,
}

fn main() {
    if let Err(err) = run() {
        eprintln!("application error: {err}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let config = AppConfig::load()?;
    telemetry::init(&config.telemetry)?;

    let validator = RegistryValidator::from_config(&config.validator);
    info!(
        ?config.environment,
        known_numbers = validator.known_count(),
        "frequent flyer registry loaded"
    );
    let mut evaluator = ApplicationEvaluator::with_config(validator, config.evaluation);

    match cli.command {
        Command::Evaluate(args) => run_evaluate(args, &mut evaluator),
        Command::Batch(args) => run_batch(args, &mut evaluator),
    }
}

fn run_evaluate(
    args: EvaluateArgs,
    evaluator: &mut ApplicationEvaluator<RegistryValidator>,
) -> Result<(), AppError> {
    let EvaluateArgs {
        income,
        age,
        frequent_flyer_number,
        json,
    } = args;

    let application = CreditCardApplication::new(income, age, frequent_flyer_number);
    let outcome = evaluator.assess(&application)?;

    if json {
        let response = EvaluateResponse {
            application: &application,
            outcome,
        };
        println!("{}", serde_json::to_string_pretty(&response)?);
    } else {
        println!("Decision: {}", outcome.decision.label());
        println!("Reason: {}", outcome.rule.summary());
        if let Some(mode) = outcome.validation_mode {
            println!("Validation mode requested: {}", mode.label());
        }
    }

    Ok(())
}

fn run_batch(
    args: BatchArgs,
    evaluator: &mut ApplicationEvaluator<RegistryValidator>,
) -> Result<(), AppError> {
    let report = BatchEvaluator::from_path(&args.csv, evaluator)?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        render_batch_report(&report);
    }

    Ok(())
}

fn render_batch_report(report: &BatchReport) {
    println!(
        "Batch evaluated at {}",
        report.generated_at.format("%Y-%m-%d %H:%M:%S UTC")
    );
    for entry in &report.entries {
        println!("  {:<16} {}", entry.application_id, entry.outcome.summary());
    }

    let totals = &report.totals;
    println!(
        "Totals: {} accepted, {} declined, {} referred ({} applications)",
        totals.auto_accepted,
        totals.auto_declined,
        totals.referred_to_human,
        totals.total()
    );
}
