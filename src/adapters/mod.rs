//! Adapters - Connect the ranking domain to files and the terminal.
//!
//! - `problem_file` - JSON/YAML decision problem loading
//! - `report` - Table and JSON rendering of rankings

pub mod problem_file;
pub mod report;

pub use problem_file::{load_problem, parse_problem, ProblemFileError, ProblemFormat};
pub use report::{render_analysis_json, render_json, render_table};
