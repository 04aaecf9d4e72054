//! Problem File Adapter - Loads decision problems from JSON or YAML files.
//!
//! The file format mirrors [`DecisionProblem`] field for field:
//!
//! ```yaml
//! alternatives: [A, B]
//! criteria: [C1, C2]
//! matrix:
//!   - [1, 2]
//!   - [2, 1]
//! weights: [1, 1]
//! beneficial: [true, true]
//! ```

use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::debug;

use crate::domain::analysis::DecisionProblem;

/// Errors raised while reading a problem file.
#[derive(Debug, Error)]
pub enum ProblemFileError {
    #[error("Failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid JSON problem: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid YAML problem: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Unsupported problem file extension: {0}")]
    UnsupportedFormat(String),
}

/// Serialization format of a problem file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProblemFormat {
    Json,
    Yaml,
}

impl ProblemFormat {
    /// Picks the format from the file extension (`json`, `yaml`, `yml`).
    pub fn from_path(path: &Path) -> Result<Self, ProblemFileError> {
        let extension = path
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_ascii_lowercase())
            .unwrap_or_default();

        match extension.as_str() {
            "json" => Ok(ProblemFormat::Json),
            "yaml" | "yml" => Ok(ProblemFormat::Yaml),
            _ => Err(ProblemFileError::UnsupportedFormat(
                path.display().to_string(),
            )),
        }
    }
}

/// Parses a problem from text in the given format.
pub fn parse_problem(content: &str, format: ProblemFormat) -> Result<DecisionProblem, ProblemFileError> {
    let problem: DecisionProblem = match format {
        ProblemFormat::Json => serde_json::from_str(content)?,
        ProblemFormat::Yaml => serde_yaml::from_str(content)?,
    };
    Ok(problem)
}

/// Reads and parses a problem file.
pub fn load_problem(path: impl AsRef<Path>) -> Result<DecisionProblem, ProblemFileError> {
    let path = path.as_ref();
    let format = ProblemFormat::from_path(path)?;
    let content = fs::read_to_string(path).map_err(|source| ProblemFileError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let problem = parse_problem(&content, format)?;
    debug!(
        path = %path.display(),
        alternatives = problem.alternative_count(),
        criteria = problem.criterion_count(),
        "Loaded decision problem"
    );

    Ok(problem)
}
