//! `topsis` - Rank the alternatives of a decision problem file.
//!
//! ```text
//! topsis <problem.{json,yaml,yml}> [--json] [--explain]
//! ```
//!
//! Configuration is read from `TOPSIS__*` environment variables (see
//! `topsis_ranker::config`). Logs go to stderr, the report to stdout.

use std::path::PathBuf;
use std::process::ExitCode;

use thiserror::Error;
use tracing::debug;

use topsis_ranker::adapters::{
    load_problem, render_analysis_json, render_json, render_table, ProblemFileError,
};
use topsis_ranker::config::{AppConfig, ConfigError, LoggingConfig, OutputFormat, ValidationError};
use topsis_ranker::domain::analysis::TopsisEvaluator;
use topsis_ranker::domain::foundation::AnalysisError;

const USAGE: &str = "usage: topsis <problem.{json,yaml,yml}> [--json] [--explain]";

#[derive(Debug, Error)]
enum CliError {
    #[error("{0}")]
    Usage(String),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("Invalid configuration: {0}")]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Problem(#[from] ProblemFileError),

    #[error("[{}] {0}", .0.code())]
    Analysis(#[from] AnalysisError),

    #[error("Failed to render report: {0}")]
    Render(#[from] serde_json::Error),
}

#[derive(Debug, Default)]
struct Args {
    path: PathBuf,
    json: bool,
    explain: bool,
}

impl Args {
    fn parse(args: impl IntoIterator<Item = String>) -> Result<Self, CliError> {
        let mut parsed = Args::default();
        let mut path = None;

        for arg in args {
            match arg.as_str() {
                "--json" => parsed.json = true,
                "--explain" => parsed.explain = true,
                "-h" | "--help" => return Err(CliError::Usage(USAGE.to_string())),
                flag if flag.starts_with('-') => {
                    return Err(CliError::Usage(format!("unknown flag {flag}\n{USAGE}")))
                }
                _ if path.is_some() => {
                    return Err(CliError::Usage(format!("unexpected argument {arg}\n{USAGE}")))
                }
                _ => path = Some(PathBuf::from(&arg)),
            }
        }

        parsed.path = path.ok_or_else(|| CliError::Usage(USAGE.to_string()))?;
        Ok(parsed)
    }
}

fn init_tracing(logging: &LoggingConfig) -> Result<(), ValidationError> {
    let filter = logging.env_filter()?;
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr);

    if logging.json {
        builder.json().init();
    } else {
        builder.init();
    }
    Ok(())
}

fn run() -> Result<String, CliError> {
    let config = AppConfig::load()?;
    config.validate()?;
    init_tracing(&config.logging)?;

    let args = Args::parse(std::env::args().skip(1))?;
    debug!(path = %args.path.display(), "Starting evaluation");

    let problem = load_problem(&args.path)?;
    let evaluator = TopsisEvaluator::with_options(config.ranking.options());

    if args.explain {
        let analysis = evaluator.analyze_problem(&problem)?;
        return Ok(render_analysis_json(&analysis)?);
    }

    let ranking = evaluator.evaluate_problem(&problem)?;
    let report = match (args.json, config.output.format) {
        (true, _) | (false, OutputFormat::Json) => render_json(&ranking)?,
        (false, OutputFormat::Table) => render_table(&ranking, config.output.precision),
    };
    Ok(report)
}

/// The single stderr line printed for a failed run.
fn failure_message(err: &CliError) -> String {
    match err {
        CliError::Usage(message) => message.clone(),
        other => format!("error: {other}"),
    }
}

fn main() -> ExitCode {
    match run() {
        Ok(report) => {
            println!("{}", report.trim_end());
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("{}", failure_message(&e));
            match e {
                CliError::Usage(_) => ExitCode::from(2),
                _ => ExitCode::FAILURE,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(values: &[&str]) -> Result<Args, CliError> {
        Args::parse(values.iter().map(|s| s.to_string()))
    }

    #[test]
    fn parses_path_and_flags() {
        let parsed = args(&["problem.yaml", "--json", "--explain"]).unwrap();
        assert_eq!(parsed.path, PathBuf::from("problem.yaml"));
        assert!(parsed.json);
        assert!(parsed.explain);
    }

    #[test]
    fn path_is_required() {
        assert!(matches!(args(&["--json"]), Err(CliError::Usage(_))));
    }

    #[test]
    fn rejects_unknown_flags_and_extra_paths() {
        assert!(matches!(args(&["p.json", "--csv"]), Err(CliError::Usage(_))));
        assert!(matches!(args(&["a.json", "b.json"]), Err(CliError::Usage(_))));
    }

    #[test]
    fn analysis_errors_carry_their_code() {
        let err = CliError::from(AnalysisError::ZeroColumn { criterion: 0 });
        assert!(err.to_string().starts_with("[DOMAIN_ERROR]"));
    }

    #[test]
    fn failure_message_states_the_error_once() {
        let err = CliError::from(AnalysisError::ZeroColumn { criterion: 0 });
        let message = failure_message(&err);

        assert!(message.starts_with("error: [DOMAIN_ERROR]"));
        assert_eq!(message.matches("zero sum of squares").count(), 1);
        assert_eq!(message.lines().count(), 1);
    }

    #[test]
    fn usage_failure_prints_usage_verbatim() {
        let err = CliError::Usage(USAGE.to_string());
        assert_eq!(failure_message(&err), USAGE);
    }

    #[test]
    fn validation_errors_are_wrapped_directly() {
        let err = CliError::from(ValidationError::PrecisionTooLarge { max: 17, actual: 40 });
        assert!(matches!(err, CliError::Validation(_)));
        assert_eq!(
            err.to_string(),
            "Invalid configuration: Output precision must be at most 17, got 40"
        );
    }
}
