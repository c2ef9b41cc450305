mod config;
mod error;
mod model;
mod service;
mod startup;
mod validation;

use std::{io::Write, path::PathBuf, process::ExitCode};

use clap::Parser;

use crate::{
    config::Config, error::AppError, model::report::SubmissionReportDto,
    service::submission::SubmissionService,
};

/// Validate a TrainerDex stat submission against the trainer's history.
///
/// Reads a submission document, prints a JSON report to stdout and exits with 0 when
/// accepted, 1 when rejected or 3 when warnings need confirmation.
#[derive(Parser, Debug)]
#[command(name = "trainerdex")]
#[command(version)]
struct Args {
    /// Submission document to read; stdin when omitted
    input: Option<PathBuf>,

    /// Pretty-print the JSON report
    #[arg(long)]
    pretty: bool,

    /// Log at debug level regardless of TRAINERDEX_LOG
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> ExitCode {
    let args = Args::parse();

    dotenvy::dotenv().ok();

    match run(&args) {
        Ok(code) => ExitCode::from(code),
        // Logging is not up yet when configuration fails.
        Err(err @ AppError::ConfigErr(_)) => {
            eprintln!("error: {err}");
            ExitCode::from(err.exit_code())
        }
        Err(err) => {
            tracing::error!("{}", err);
            ExitCode::from(err.exit_code())
        }
    }
}

fn run(args: &Args) -> Result<u8, AppError> {
    let config = Config::from_env()?;
    startup::init_tracing(&config, args.verbose)?;

    tracing::debug!(
        policy = %config.elapsed_day_policy,
        log_format = %config.log_format,
        "Loaded configuration"
    );

    let dto = startup::read_submission(args.input.as_deref())?;
    let submission = SubmissionService::new(&config).submit(dto)?;
    let code = submission.outcome.exit_code();

    write_report(&submission.into_dto(), args.pretty)?;

    Ok(code)
}

fn write_report(report: &SubmissionReportDto, pretty: bool) -> Result<(), AppError> {
    let json = if pretty {
        serde_json::to_string_pretty(report)?
    } else {
        serde_json::to_string(report)?
    };

    let mut stdout = std::io::stdout().lock();
    writeln!(stdout, "{json}").map_err(AppError::WriteOutput)
}
